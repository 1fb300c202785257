use super::{Extractor, FieldRule, MAX_DESCRIPTION_CHARS};
use crate::record::Field;
use crate::vendor::VendorTag;

/// Digikey `/product-detail/...` pages. The only layout that exposes vendor and
/// manufacturer identifiers.
pub struct Digikey;

const RULES: &[FieldRule] = &[
    FieldRule::required(Field::ItemName, r#"td[itemprop="description"]"#),
    FieldRule::required(Field::Price, r#"span[itemprop="price"]"#),
    FieldRule::required(Field::Description, r#"h3[itemprop="description"]"#)
        .truncate(MAX_DESCRIPTION_CHARS),
    // part number cell: whitespace, <meta>, then the number itself
    FieldRule::required(Field::VendorId, "td#reportPartNumber").child_node(2),
    FieldRule::required(Field::Manufacturer, r#"span[itemprop="name"]"#),
    FieldRule::required(Field::ManufacturerId, r#"h1[itemprop="model"]"#),
];

impl Extractor for Digikey {
    fn vendor(&self) -> VendorTag {
        VendorTag::Digikey
    }

    fn rules(&self) -> &'static [FieldRule] {
        RULES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract::{fixture, ExtractError};
    use crate::record::{Record, SENTINEL};

    const URL: &str =
        "https://www.digikey.com/product-detail/en/texas-instruments/LM358P/296-1395-5-ND/277042";

    #[test]
    fn product_page() {
        let doc = fixture("digikey");
        let mut r = Record::default();
        Digikey.extract(URL, Some(&doc), &mut r).unwrap();

        assert_eq!(r.item_name, "IC OPAMP GP 2 CIRCUIT 8DIP");
        assert_eq!(r.price, "0.45000");
        assert_eq!(r.description, "General Purpose Amplifier 2 Circuit 8-PDIP");
        assert_eq!(r.vendor_id, "296-1395-5-ND");
        assert_eq!(r.manufacturer, "Texas Instruments");
        assert_eq!(r.manufacturer_id, "LM358P");
        assert_eq!(r.vendor, SENTINEL);
    }

    #[test]
    fn missing_model_is_fatal() {
        let doc = fixture("digikey_no_model");
        let mut r = Record::default();
        let err = Digikey.extract(URL, Some(&doc), &mut r).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::FieldAbsent { field: Field::ManufacturerId, .. }
        ));
    }
}
