use std::io::Read;

use crate::domain::{ArticleId, ArticleMetadata};
use crate::errors::FetcherResult;

/// Remote service holding the articles and their files
#[cfg_attr(test, mockall::automock)]
pub trait ArticleSource: Send + Sync {
    /// Fetch and decode the metadata of one article
    fn fetch_metadata(&self, id: &ArticleId) -> FetcherResult<ArticleMetadata>;

    /// Open a streaming reader over the content behind a download URL
    fn fetch_bytes(&self, url: &str) -> FetcherResult<Box<dyn Read + Send>>;
}
