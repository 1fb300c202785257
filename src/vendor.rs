use std::sync::LazyLock;

use regex::Regex;

static DOMAIN_MARKERS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"www\.|\.com|\.net|\.gov|\.edu|\.org").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorTag {
    Adafruit,
    SparkFun,
    Digikey,
    Grainger,
    McMaster,
    Unrecognized,
}

impl VendorTag {
    pub fn name(self) -> &'static str {
        match self {
            VendorTag::Adafruit => "Adafruit",
            VendorTag::SparkFun => "SparkFun",
            VendorTag::Digikey => "Digikey",
            VendorTag::Grainger => "Grainger",
            VendorTag::McMaster => "McMaster",
            VendorTag::Unrecognized => "Unrecognized",
        }
    }

    fn from_host_token(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "adafruit" => VendorTag::Adafruit,
            "sparkfun" => VendorTag::SparkFun,
            "digikey" => VendorTag::Digikey,
            "grainger" => VendorTag::Grainger,
            "mcmaster" => VendorTag::McMaster,
            _ => VendorTag::Unrecognized,
        }
    }
}

impl std::fmt::Display for VendorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Classify a URL by the token between its `www.` prefix and domain suffix.
///
/// `https://www.mcmaster.com/91251A540/` splits into `["https://", "mcmaster", "/91251A540/"]`
/// and the second segment decides the vendor. Anything that does not split into at least
/// two segments is `Unrecognized`.
pub fn identify(url: &str) -> VendorTag {
    DOMAIN_MARKERS_RE
        .split(url)
        .nth(1)
        .map(VendorTag::from_host_token)
        .unwrap_or(VendorTag::Unrecognized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vendors() {
        let cases = [
            ("https://www.adafruit.com/product/4000", VendorTag::Adafruit),
            ("https://www.sparkfun.com/products/13678", VendorTag::SparkFun),
            (
                "https://www.digikey.com/product-detail/en/texas-instruments/LM358P/296-1395-5-ND/277042",
                VendorTag::Digikey,
            ),
            ("https://www.grainger.com/product/DAYTON-Motor-4M140", VendorTag::Grainger),
            ("https://www.mcmaster.com/91251A540/", VendorTag::McMaster),
        ];
        for (url, tag) in cases {
            assert_eq!(identify(url), tag, "{}", url);
        }
    }

    #[test]
    fn scheme_less_url_still_routes() {
        assert_eq!(identify("www.adafruit.com/product/4000"), VendorTag::Adafruit);
    }

    #[test]
    fn host_token_is_case_insensitive() {
        assert_eq!(identify("https://www.SparkFun.com/products/1"), VendorTag::SparkFun);
    }

    #[test]
    fn unknown_host_is_unrecognized() {
        assert_eq!(identify("https://www.example.com/x"), VendorTag::Unrecognized);
        assert_eq!(identify("https://www.adafruit.io/feeds"), VendorTag::Unrecognized);
    }

    #[test]
    fn malformed_urls_do_not_panic() {
        assert_eq!(identify(""), VendorTag::Unrecognized);
        assert_eq!(identify("not a url"), VendorTag::Unrecognized);
        assert_eq!(identify("https://adafruit"), VendorTag::Unrecognized);
        // no www. prefix: the second segment is the path, not the host
        assert_eq!(identify("https://adafruit.com/product/4000"), VendorTag::Unrecognized);
    }

    #[test]
    fn routing_is_idempotent() {
        let url = "https://www.grainger.com/product/4M140";
        assert_eq!(identify(url), identify(url));
    }
}
