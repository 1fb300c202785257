use super::{Extractor, FieldRule, MAX_DESCRIPTION_CHARS};
use crate::record::Field;
use crate::vendor::VendorTag;

/// Adafruit `/product/<id>` pages.
pub struct Adafruit;

// The header div opens with a whitespace node; the title element is the second child.
const RULES: &[FieldRule] = &[
    FieldRule::required(Field::ItemName, "div.mobile-product-header").child_node(1),
    FieldRule::required(Field::Price, "div#prod-price"),
    FieldRule::required(Field::Description, "div#description p").truncate(MAX_DESCRIPTION_CHARS),
];

impl Extractor for Adafruit {
    fn vendor(&self) -> VendorTag {
        VendorTag::Adafruit
    }

    fn rules(&self) -> &'static [FieldRule] {
        RULES
    }
}
