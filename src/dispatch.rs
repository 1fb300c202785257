use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::browser::{self, BrowserLauncher};
use crate::fetch::PageFetcher;
use crate::output::RecordSink;
use crate::parser::extract::{self, ExtractError, PageSource};
use crate::parser::process_page;
use crate::record::{Field, Record};
use crate::vendor::{self, VendorTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Resetting,
    Routing,
    Extracting,
    Emitting,
}

/// Result of one URL, ready for the sink.
#[derive(Debug)]
pub struct Processed {
    pub record: Record,
    pub vendor: VendorTag,
    /// The page could not be fetched or rendered.
    pub page_missing: bool,
}

/// Counts reported when the input is exhausted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub total: usize,
    pub extracted: usize,
    pub unrecognized: usize,
    pub page_missing: usize,
}

/// Read newline separated URLs, stripping trailing whitespace from each line.
pub fn read_links(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read links from {}", path.display()))?;
    Ok(content.lines().map(|l| l.trim_end().to_string()).collect())
}

pub struct Dispatcher<'a, F, L> {
    fetcher: &'a F,
    launcher: &'a L,
    delay: Duration,
    settle: Duration,
}

impl<'a, F, L> Dispatcher<'a, F, L>
where
    F: PageFetcher,
    L: BrowserLauncher,
{
    pub fn new(fetcher: &'a F, launcher: &'a L, delay: Duration, settle: Duration) -> Self {
        Self {
            fetcher,
            launcher,
            delay,
            settle,
        }
    }

    /// Process `urls` in order, one row each. Stops at the first required field that
    /// cannot be located; rows written before that stay in the sink.
    pub async fn run<W: Write>(
        &self,
        urls: &[String],
        sink: &mut RecordSink<W>,
    ) -> Result<RunStats> {
        let pb = ProgressBar::new(urls.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
                .progress_chars("=> "),
        );

        let mut stats = RunStats::default();
        for url in urls {
            pb.set_message(url.clone());
            let processed = self
                .process_url(url)
                .await
                .with_context(|| format!("Extraction failed for {}", url))?;

            stats.total += 1;
            if processed.vendor == VendorTag::Unrecognized {
                stats.unrecognized += 1;
            } else {
                stats.extracted += 1;
            }
            if processed.page_missing {
                stats.page_missing += 1;
            }

            debug!(url = %url, "{:?}", Stage::Emitting);
            sink.append(&processed.record)?;
            pb.inc(1);

            // be polite to the vendors
            tokio::time::sleep(self.delay).await;
        }

        pb.finish_and_clear();
        info!(
            "Processed {} links ({} extracted, {} unrecognized, {} without a page)",
            stats.total, stats.extracted, stats.unrecognized, stats.page_missing
        );
        Ok(stats)
    }

    /// Route `url` to its vendor's extractor and build its record.
    pub async fn process_url(&self, url: &str) -> Result<Processed, ExtractError> {
        debug!(url = %url, "{:?}", Stage::Resetting);
        let mut record = Record::default();

        debug!(url = %url, "{:?}", Stage::Routing);
        let tag = vendor::identify(url);
        let Some(extractor) = extract::for_vendor(tag) else {
            warn!("Invalid website! {}", url);
            record.set(Field::Link, url);
            return Ok(Processed {
                record,
                vendor: tag,
                page_missing: false,
            });
        };

        debug!(url = %url, vendor = %tag, "{:?}", Stage::Extracting);
        let page_missing = match extractor.source() {
            PageSource::Http => {
                let markup = self.fetcher.fetch(url).await;
                process_page(extractor, url, markup.as_deref(), &mut record)?;
                markup.is_none()
            }
            PageSource::Browser => {
                browser::with_rendered_page(self.launcher, url, self.settle, |markup| {
                    process_page(extractor, url, markup, &mut record).map(|()| markup.is_none())
                })
                .await?
            }
        };

        Ok(Processed {
            record,
            vendor: tag,
            page_missing,
        })
    }
}
