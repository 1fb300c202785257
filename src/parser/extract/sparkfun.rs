use super::{Extractor, FieldRule, MAX_DESCRIPTION_CHARS};
use crate::record::Field;
use crate::vendor::VendorTag;

/// SparkFun `/products/<id>` pages.
pub struct SparkFun;

const RULES: &[FieldRule] = &[
    FieldRule::required(Field::ItemName, "div.product-title h1"),
    // leading text node only, the currency suffix sits in a nested span
    FieldRule::required(Field::Price, r#"span[itemprop="price"]"#).child_node(0),
    FieldRule::required(Field::Description, "div.tab-content p").truncate(MAX_DESCRIPTION_CHARS),
];

impl Extractor for SparkFun {
    fn vendor(&self) -> VendorTag {
        VendorTag::SparkFun
    }

    fn rules(&self) -> &'static [FieldRule] {
        RULES
    }
}
