mod browser;
mod config;
mod dispatch;
mod fetch;
mod output;
mod parser;
mod record;
mod vendor;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

use crate::browser::ChromeLauncher;
use crate::config::{
    Config, DEFAULT_DELAY_MS, DEFAULT_LINKS_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_SETTLE_MS,
};
use crate::dispatch::Dispatcher;
use crate::fetch::HttpFetcher;
use crate::output::RecordSink;

#[derive(Parser)]
#[command(
    name = "parts_scraper",
    about = "Product data from Adafruit, SparkFun, Digikey, Grainger and McMaster pages"
)]
struct Cli {
    /// Log every extracted field
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape every link in the links file and append rows to the CSV file
    Run {
        /// Newline separated product URLs
        #[arg(short, long, default_value = DEFAULT_LINKS_PATH)]
        links: PathBuf,
        /// CSV file, appended to
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        out: PathBuf,
        /// Pause after each link (ms)
        #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
        delay_ms: u64,
        /// Wait after browser navigation before reading the page (ms)
        #[arg(long, default_value_t = DEFAULT_SETTLE_MS)]
        settle_ms: u64,
    },
    /// Show which vendor each URL routes to, without fetching anything
    Identify {
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Scrape a single URL and print its record as JSON
    Show {
        url: String,
        #[arg(long, default_value_t = DEFAULT_SETTLE_MS)]
        settle_ms: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let t0 = Instant::now();

    let result = match cli.command {
        Commands::Run {
            links,
            out,
            delay_ms,
            settle_ms,
        } => {
            let config = Config::new(links, out, delay_ms, settle_ms);
            let urls = dispatch::read_links(&config.links)?;
            // the header goes out on every run, even one with no links
            let mut sink = RecordSink::open(&config.out)?;
            if urls.is_empty() {
                println!("No links in {}.", config.links.display());
                return Ok(());
            }

            println!("Starting link processing ({} links)...", urls.len());
            let fetcher = HttpFetcher::new();
            let launcher = ChromeLauncher::new(config.chrome_path.clone());
            let stats = Dispatcher::new(&fetcher, &launcher, config.delay, config.settle)
                .run(&urls, &mut sink)
                .await?;
            println!(
                "Done: {} rows written to {} ({} extracted, {} unrecognized, {} without a page).",
                stats.total,
                config.out.display(),
                stats.extracted,
                stats.unrecognized,
                stats.page_missing
            );
            Ok(())
        }
        Commands::Identify { urls } => {
            for url in &urls {
                println!("{:<12} {}", vendor::identify(url), url);
            }
            Ok(())
        }
        Commands::Show { url, settle_ms } => {
            let config = Config {
                settle: std::time::Duration::from_millis(settle_ms),
                ..Config::default()
            };
            let fetcher = HttpFetcher::new();
            let launcher = ChromeLauncher::new(config.chrome_path.clone());
            let processed = Dispatcher::new(&fetcher, &launcher, config.delay, config.settle)
                .process_url(url.trim())
                .await?;
            println!("{}", serde_json::to_string_pretty(&processed.record)?);
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
