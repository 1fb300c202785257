use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::warn;

/// Source of static page markup.
pub trait PageFetcher {
    /// Page body, or `None` when the transport failed or the response is not usable HTML.
    async fn fetch(&self, url: &str) -> Option<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        let resp = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!("Error during request! {}: {}", url, e);
                return None;
            }
        };

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        if !is_good_response(resp.status(), content_type.as_deref()) {
            warn!(
                "Unusable response from {}: status {}, content type {}",
                url,
                resp.status(),
                content_type.as_deref().unwrap_or("-")
            );
            return None;
        }

        match resp.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("Failed to read body of {}: {}", url, e);
                None
            }
        }
    }
}

/// 200 with an HTML content type.
fn is_good_response(status: StatusCode, content_type: Option<&str>) -> bool {
    status == StatusCode::OK
        && content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("html"))
}
