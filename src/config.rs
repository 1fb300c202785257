use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LINKS_PATH: &str = "links.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "data.csv";
/// Pause after every link. Keep it at a second or more.
pub const DEFAULT_DELAY_MS: u64 = 1000;
/// Time given to client-side scripts after navigation.
pub const DEFAULT_SETTLE_MS: u64 = 2000;

const CHROME_PATH_VAR: &str = "CHROME_PATH";

#[derive(Debug, Clone)]
pub struct Config {
    pub links: PathBuf,
    pub out: PathBuf,
    pub delay: Duration,
    pub settle: Duration,
    /// Browser executable; chromiumoxide searches the usual locations when unset.
    pub chrome_path: Option<PathBuf>,
}

impl Config {
    pub fn new(links: PathBuf, out: PathBuf, delay_ms: u64, settle_ms: u64) -> Self {
        Self {
            links,
            out,
            delay: Duration::from_millis(delay_ms),
            settle: Duration::from_millis(settle_ms),
            chrome_path: chrome_path_from_env(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            DEFAULT_LINKS_PATH.into(),
            DEFAULT_OUTPUT_PATH.into(),
            DEFAULT_DELAY_MS,
            DEFAULT_SETTLE_MS,
        )
    }
}

fn chrome_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CHROME_PATH_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
