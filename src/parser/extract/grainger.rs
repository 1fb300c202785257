use super::{Extractor, FieldRule};
use crate::record::Field;
use crate::vendor::VendorTag;

pub struct Grainger;

const RULES: &[FieldRule] = &[
    FieldRule::required(Field::ItemName, "h1.productName"),
    FieldRule::required(Field::Price, "span.gcprice-value"),
    FieldRule::required(Field::ManufacturerId, r#"span[itemprop="model"]"#),
];

impl Extractor for Grainger {
    fn vendor(&self) -> VendorTag {
        VendorTag::Grainger
    }

    fn rules(&self) -> &'static [FieldRule] {
        RULES
    }
}
