use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Starts browser sessions for pages that only exist after scripts run.
pub trait BrowserLauncher {
    type Session: BrowserSession;

    async fn launch(&self) -> Result<Self::Session>;
}

pub trait BrowserSession {
    async fn goto(&mut self, url: &str) -> Result<()>;

    /// Markup of the current page as rendered right now.
    async fn page_source(&mut self) -> Result<String>;

    async fn close(self) -> Result<()>;
}

/// Open a session, navigate to `url`, wait `settle`, then hand the rendered markup to `f`.
///
/// The session is closed before returning no matter what `f` returns. Launch or navigation
/// failures are reported and `f` sees `None`.
pub async fn with_rendered_page<L, T>(
    launcher: &L,
    url: &str,
    settle: Duration,
    f: impl FnOnce(Option<&str>) -> T,
) -> T
where
    L: BrowserLauncher,
{
    let mut session = match launcher.launch().await {
        Ok(session) => session,
        Err(e) => {
            warn!("Browser launch failed for {}: {:#}", url, e);
            return f(None);
        }
    };

    let markup = match render(&mut session, url, settle).await {
        Ok(markup) => Some(markup),
        Err(e) => {
            warn!("Rendering {} failed: {:#}", url, e);
            None
        }
    };

    let out = f(markup.as_deref());

    if let Err(e) = session.close().await {
        warn!("Browser session for {} did not close cleanly: {:#}", url, e);
    }
    out
}

async fn render<S: BrowserSession>(
    session: &mut S,
    url: &str,
    settle: Duration,
) -> Result<String> {
    session.goto(url).await?;
    // scripts keep filling the page after the load event
    tokio::time::sleep(settle).await;
    session.page_source().await
}

/// Launches a local headless Chrome/Chromium over the DevTools protocol.
pub struct ChromeLauncher {
    executable: Option<PathBuf>,
}

impl ChromeLauncher {
    pub fn new(executable: Option<PathBuf>) -> Self {
        Self { executable }
    }
}

impl BrowserLauncher for ChromeLauncher {
    type Session = ChromeSession;

    async fn launch(&self) -> Result<ChromeSession> {
        let mut builder = BrowserConfig::builder();
        if let Some(path) = &self.executable {
            builder = builder.chrome_executable(path);
        }
        let config = builder
            .build()
            .map_err(|e| anyhow!("Invalid browser config: {}", e))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .context("Failed to launch browser")?;
        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });
        debug!("Browser session opened");

        Ok(ChromeSession {
            browser,
            handler,
            page: None,
        })
    }
}

pub struct ChromeSession {
    browser: Browser,
    handler: JoinHandle<()>,
    page: Option<Page>,
}

impl BrowserSession for ChromeSession {
    async fn goto(&mut self, url: &str) -> Result<()> {
        let page = self
            .browser
            .new_page(url)
            .await
            .with_context(|| format!("Failed to open {}", url))?;
        self.page = Some(page);
        Ok(())
    }

    async fn page_source(&mut self) -> Result<String> {
        let page = self.page.as_ref().ok_or_else(|| anyhow!("No page loaded"))?;
        page.content().await.context("Failed to read page content")
    }

    async fn close(mut self) -> Result<()> {
        let browser = &mut self.browser;
        let shutdown = async move {
            browser.close().await.context("Failed to close browser")?;
            browser.wait().await.context("Browser process did not exit")?;
            anyhow::Ok(())
        };
        shutdown_then_abort(shutdown, &self.handler).await?;
        debug!("Browser session closed");
        Ok(())
    }
}

/// Await `shutdown`, then stop the event loop task whatever the outcome.
async fn shutdown_then_abort(
    shutdown: impl Future<Output = Result<()>>,
    handler: &JoinHandle<()>,
) -> Result<()> {
    let result = shutdown.await;
    handler.abort();
    result
}
