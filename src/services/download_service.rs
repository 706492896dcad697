use std::path::PathBuf;

use crate::config::Config;
use crate::domain::{sanitize_file_name, ArticleId, FileDescriptor};
use crate::errors::FetcherResult;
use crate::sources::ArticleSource;
use crate::storage::OutputDirectory;

/// A file written to the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    pub name: String,
    pub path: PathBuf,
    pub bytes: u64,
}

/// A file that would be downloaded, as listed by the metadata endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub remote_name: String,
    pub sanitized_name: String,
    pub destination: PathBuf,
    pub download_url: String,
}

#[derive(Debug, Default)]
pub struct DownloadReport {
    pub downloaded: Vec<DownloadedFile>,
    /// Articles whose metadata listed no files
    pub empty_articles: Vec<ArticleId>,
}

impl DownloadReport {
    pub fn total_bytes(&self) -> u64 {
        self.downloaded.iter().map(|f| f.bytes).sum()
    }
}

pub struct DownloadService<S: ArticleSource> {
    source: S,
    output: OutputDirectory,
    article_ids: Vec<ArticleId>,
}

impl<S: ArticleSource> DownloadService<S> {
    pub fn new(source: S, config: &Config) -> Self {
        Self {
            source,
            output: OutputDirectory::new(&config.output_dir),
            article_ids: config.article_ids.clone(),
        }
    }

    pub fn output(&self) -> &OutputDirectory {
        &self.output
    }

    /// Download every file of every configured article, in order.
    /// The first failure aborts the run; files written before it are kept.
    pub fn download_all(&self) -> FetcherResult<DownloadReport> {
        self.output.ensure()?;

        let mut report = DownloadReport::default();

        for id in &self.article_ids {
            let files = self.download_article(id)?;
            if files.is_empty() {
                report.empty_articles.push(id.clone());
            }
            report.downloaded.extend(files);
        }

        tracing::info!(
            files = report.downloaded.len(),
            bytes = report.total_bytes(),
            empty_articles = report.empty_articles.len(),
            "download run finished"
        );

        Ok(report)
    }

    /// Download the files of a single article into the output directory,
    /// which must already exist.
    pub fn download_article(&self, id: &ArticleId) -> FetcherResult<Vec<DownloadedFile>> {
        let metadata = self.source.fetch_metadata(id)?;

        if metadata.files.is_empty() {
            println!("No file found for article ID {}", id);
            tracing::info!(article_id = %id, "article has no files");
            return Ok(Vec::new());
        }

        tracing::debug!(article_id = %id, files = metadata.files.len(), "fetched metadata");

        metadata
            .files
            .iter()
            .map(|file| self.download_file(file))
            .collect()
    }

    /// Stream one file to `<output dir>/<sanitized name>`, replacing any previous copy
    pub fn download_file(&self, file: &FileDescriptor) -> FetcherResult<DownloadedFile> {
        let name = sanitize_file_name(&file.name);
        let destination = self.output.destination(&name)?;

        let mut reader = self.source.fetch_bytes(&file.download_url)?;
        let bytes = self.output.write_stream(&destination, &mut reader)?;

        println!("{} downloaded", name);
        tracing::debug!(
            remote_name = %file.name,
            path = %destination.display(),
            bytes,
            "file written"
        );

        Ok(DownloadedFile {
            name,
            path: destination,
            bytes,
        })
    }

    /// Query the metadata of every article and list what would be downloaded,
    /// without fetching any file content.
    pub fn plan_all(&self) -> FetcherResult<Vec<(ArticleId, Vec<PlannedFile>)>> {
        self.output.ensure()?;

        let mut plan = Vec::with_capacity(self.article_ids.len());

        for id in &self.article_ids {
            let metadata = self.source.fetch_metadata(id)?;

            let files = metadata
                .files
                .into_iter()
                .map(|file| -> FetcherResult<PlannedFile> {
                    let sanitized_name = sanitize_file_name(&file.name);
                    let destination = self.output.destination(&sanitized_name)?;
                    Ok(PlannedFile {
                        remote_name: file.name,
                        sanitized_name,
                        destination,
                        download_url: file.download_url,
                    })
                })
                .collect::<FetcherResult<Vec<_>>>()?;

            plan.push((id.clone(), files));
        }

        Ok(plan)
    }
}
