pub mod adafruit;
pub mod digikey;
pub mod grainger;
pub mod mcmaster;
pub mod sparkfun;

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::{debug, info};

use crate::record::{Field, Record};
use crate::vendor::VendorTag;

/// Longest description kept in a row, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 350;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{vendor}: required field {field} not found (locator `{locator}`)")]
    FieldAbsent {
        vendor: VendorTag,
        field: Field,
        locator: &'static str,
    },
    #[error("invalid locator `{locator}`: {reason}")]
    Selector {
        locator: &'static str,
        reason: String,
    },
}

/// Whether a locator miss is tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Miss leaves the field at the sentinel.
    Optional,
    /// Miss aborts extraction.
    Required,
}

/// Which text of the matched element becomes the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Take {
    /// All descendant text, concatenated.
    Text,
    /// Text of the n-th child node (text nodes included, whitespace too).
    ChildNode(usize),
}

/// Where an extracted value goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Store(Field),
    /// Located and reported on the diagnostic channel, never written to the record.
    LogOnly(Field),
}

impl Target {
    const fn field(self) -> Field {
        match self {
            Target::Store(f) | Target::LogOnly(f) => f,
        }
    }
}

/// One (field, locator, transform, policy) entry of a vendor's extraction table.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub target: Target,
    pub locator: &'static str,
    pub take: Take,
    pub max_chars: Option<usize>,
    pub policy: Policy,
}

impl FieldRule {
    pub const fn required(field: Field, locator: &'static str) -> Self {
        Self {
            target: Target::Store(field),
            locator,
            take: Take::Text,
            max_chars: None,
            policy: Policy::Required,
        }
    }

    pub const fn optional(self) -> Self {
        Self {
            policy: Policy::Optional,
            ..self
        }
    }

    pub const fn child_node(self, index: usize) -> Self {
        Self {
            take: Take::ChildNode(index),
            ..self
        }
    }

    pub const fn truncate(self, max_chars: usize) -> Self {
        Self {
            max_chars: Some(max_chars),
            ..self
        }
    }

    pub const fn log_only(self) -> Self {
        Self {
            target: Target::LogOnly(self.target.field()),
            ..self
        }
    }

    fn clean(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        match self.max_chars {
            Some(max) => trimmed.chars().take(max).collect(),
            None => trimmed.to_string(),
        }
    }
}

/// How a vendor's pages have to be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSource {
    /// Static markup from a plain GET.
    Http,
    /// Markup only exists after scripts run in a real browser.
    Browser,
}

pub trait Extractor: Sync {
    fn vendor(&self) -> VendorTag;

    fn rules(&self) -> &'static [FieldRule];

    fn source(&self) -> PageSource {
        PageSource::Http
    }

    /// Populate `record` from `page`. `None` means the page could not be obtained,
    /// which behaves as if every locator missed.
    fn extract(
        &self,
        url: &str,
        page: Option<&Html>,
        record: &mut Record,
    ) -> Result<(), ExtractError> {
        apply_rules(self.vendor(), self.rules(), url, page, record)
    }
}

/// The extractor that handles `tag`, if any.
pub fn for_vendor(tag: VendorTag) -> Option<&'static dyn Extractor> {
    match tag {
        VendorTag::Adafruit => Some(&adafruit::Adafruit),
        VendorTag::SparkFun => Some(&sparkfun::SparkFun),
        VendorTag::Digikey => Some(&digikey::Digikey),
        VendorTag::Grainger => Some(&grainger::Grainger),
        VendorTag::McMaster => Some(&mcmaster::McMaster),
        VendorTag::Unrecognized => None,
    }
}

/// Run `rules` in order against `page`. Link is always set from `url`.
pub fn apply_rules(
    vendor: VendorTag,
    rules: &[FieldRule],
    url: &str,
    page: Option<&Html>,
    record: &mut Record,
) -> Result<(), ExtractError> {
    record.set(Field::Link, url);

    for rule in rules {
        let field = rule.target.field();
        match extract_field(vendor, page, rule)? {
            Some(value) => match rule.target {
                Target::Store(f) => {
                    debug!(vendor = %vendor, "{}: {}", field, value);
                    record.set(f, value);
                }
                // shown on the console at the default level, not only under --debug
                Target::LogOnly(_) => info!(vendor = %vendor, "{}: {}", field, value),
            },
            None => debug!(vendor = %vendor, "{} not listed", field),
        }
    }
    Ok(())
}

/// Locate and clean a single field. Returns `Ok(None)` only for optional fields.
pub fn extract_field(
    vendor: VendorTag,
    page: Option<&Html>,
    rule: &FieldRule,
) -> Result<Option<String>, ExtractError> {
    let selector = Selector::parse(rule.locator).map_err(|e| ExtractError::Selector {
        locator: rule.locator,
        reason: e.to_string(),
    })?;

    let raw = page
        .and_then(|doc| doc.select(&selector).next())
        .and_then(|el| take_text(el, rule.take));

    match (raw, rule.policy) {
        (Some(text), _) => Ok(Some(rule.clean(&text))),
        (None, Policy::Optional) => Ok(None),
        (None, Policy::Required) => Err(ExtractError::FieldAbsent {
            vendor,
            field: rule.target.field(),
            locator: rule.locator,
        }),
    }
}

fn take_text(el: ElementRef<'_>, take: Take) -> Option<String> {
    match take {
        Take::Text => Some(el.text().collect()),
        Take::ChildNode(index) => {
            let node = el.children().nth(index)?;
            if let Some(text) = node.value().as_text() {
                let text: &str = text;
                Some(text.to_string())
            } else {
                ElementRef::wrap(node).map(|child| child.text().collect())
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn fixture(name: &str) -> Html {
    let markup = std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap();
    Html::parse_document(&markup)
}
