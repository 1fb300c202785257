pub mod extract;

use scraper::Html;

use crate::record::Record;
use extract::{ExtractError, Extractor};

pub fn parse_page(markup: &str) -> Html {
    Html::parse_document(markup)
}

/// Markup → parsed tree → `record`. `None` markup means the page could not be obtained.
pub fn process_page(
    extractor: &dyn Extractor,
    url: &str,
    markup: Option<&str>,
    record: &mut Record,
) -> Result<(), ExtractError> {
    let page = markup.map(parse_page);
    extractor.extract(url, page.as_ref(), record)
}
