use super::{Extractor, FieldRule, PageSource, MAX_DESCRIPTION_CHARS};
use crate::record::Field;
use crate::vendor::VendorTag;

/// McMaster-Carr product detail pages. Content is built client-side, so the page
/// has to come from a browser session rather than a plain GET.
pub struct McMaster;

const RULES: &[FieldRule] = &[
    FieldRule::required(Field::ItemName, "h3.header-primary--pd").log_only(),
    // not every item lists a price
    FieldRule::required(Field::Price, "div.PrceTxt").optional(),
    FieldRule::required(Field::Description, "div.CpyCntnr p").truncate(MAX_DESCRIPTION_CHARS),
];

impl Extractor for McMaster {
    fn vendor(&self) -> VendorTag {
        VendorTag::McMaster
    }

    fn rules(&self) -> &'static [FieldRule] {
        RULES
    }

    fn source(&self) -> PageSource {
        PageSource::Browser
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract::fixture;
    use crate::record::{Record, SENTINEL};

    const URL: &str = "https://www.mcmaster.com/91251A540/";

    #[test]
    fn rendered_page() {
        let doc = fixture("mcmaster");
        let mut r = Record::default();
        McMaster.extract(URL, Some(&doc), &mut r).unwrap();

        assert_eq!(r.link, URL);
        assert_eq!(r.price, "$10.64 per pack of 100");
        assert_eq!(
            r.description,
            "Black-Oxide Alloy Steel Socket Head Screw, 1/4\"-20 Thread Size, 1\" Long"
        );
        // name is reported, not stored
        assert_eq!(r.item_name, SENTINEL);
    }

    #[test]
    fn unlisted_price_stays_sentinel() {
        let doc = fixture("mcmaster_no_price");
        let mut r = Record::default();
        McMaster.extract(URL, Some(&doc), &mut r).unwrap();
        assert_eq!(r.price, SENTINEL);
        assert_eq!(r.description, "Zinc-Plated Steel Hex Nut");
    }

    #[test]
    fn unrendered_page_is_fatal() {
        let mut r = Record::default();
        assert!(McMaster.extract(URL, None, &mut r).is_err());
    }
}
