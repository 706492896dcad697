use std::io::Read;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use url::Url;

use crate::domain::{ArticleId, ArticleMetadata};
use crate::errors::{FetcherError, FetcherResult};
use crate::sources::traits::ArticleSource;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Figshare v2 REST API (`GET <base>/<article id>`)
pub struct FigshareSource {
    client: Client,
    base_url: String,
}

impl FigshareSource {
    pub fn new(base_url: &str, timeout: Duration) -> FetcherResult<Self> {
        Url::parse(base_url).map_err(|e| FetcherError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn metadata_url(&self, id: &ArticleId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// GET a URL, turning any non-success status into `RemoteRequest`
    fn get(&self, url: &str) -> FetcherResult<Response> {
        tracing::debug!(url, "GET");
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "request rejected");
            return Err(FetcherError::RemoteRequest {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

impl ArticleSource for FigshareSource {
    fn fetch_metadata(&self, id: &ArticleId) -> FetcherResult<ArticleMetadata> {
        let url = self.metadata_url(id);
        let body = self.get(&url)?.bytes()?;

        ArticleMetadata::from_json(&body)
    }

    fn fetch_bytes(&self, url: &str) -> FetcherResult<Box<dyn Read + Send>> {
        Url::parse(url).map_err(|e| FetcherError::InvalidUrl(format!("{}: {}", url, e)))?;

        let response = self.get(url)?;
        Ok(Box::new(response))
    }
}
