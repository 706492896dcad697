use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{FetcherError, FetcherResult};

/// Opaque identifier of a remotely hosted article
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse a comma or whitespace separated list, skipping blank entries
    pub fn parse_list(list: &str) -> FetcherResult<Vec<ArticleId>> {
        let ids: Vec<ArticleId> = list
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(ArticleId::new)
            .collect();

        if ids.is_empty() {
            return Err(FetcherError::Config(
                "Article ID list is empty".to_string(),
            ));
        }

        Ok(ids)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One file attached to an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub download_url: String,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            download_url: download_url.into(),
        }
    }
}

/// The subset of the article metadata response we care about.
/// Everything except `files` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMetadata {
    #[serde(default)]
    pub files: Vec<FileDescriptor>,
}

impl ArticleMetadata {
    pub fn from_json(bytes: &[u8]) -> FetcherResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
