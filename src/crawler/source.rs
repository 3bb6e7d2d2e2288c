//! Where page HTML comes from: the live site or a directory of fixture files

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use reqwest::Client as ReqwestClient;
use tracing::{debug, instrument};
use url::Url;

use crate::crawler::CrawlerConfig;
use crate::crawler::error::FetchError;

/// Fixture served for the base URL and any URL missing from the table
const INDEX_FILE: &str = "index.html";

/// Fetches pages over HTTP
#[derive(Debug, Clone)]
pub struct RemotePages {
    client: ReqwestClient,
}

impl RemotePages {
    pub fn new(config: &CrawlerConfig) -> Result<Self, FetchError> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Reads pages from fixture files, for deployments without connectivity
#[derive(Debug, Clone)]
pub struct LocalPages {
    dir: PathBuf,
    files: HashMap<String, &'static str>,
}

impl LocalPages {
    /// `files` maps absolute URLs to file names inside `dir`
    pub fn new(dir: impl Into<PathBuf>, files: impl IntoIterator<Item = (Url, &'static str)>) -> Self {
        Self {
            dir: dir.into(),
            files: files
                .into_iter()
                .map(|(url, file)| (url.to_string(), file))
                .collect(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Fixture path for a URL; unknown URLs fall back to the index page
    pub fn path_for(&self, url: &Url) -> PathBuf {
        let file = self.files.get(url.as_str()).copied().unwrap_or(INDEX_FILE);
        self.dir.join(file)
    }

    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let path = self.path_for(url);
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Err(FetchError::LocalMissing(path));
        }
        Ok(tokio::fs::read_to_string(&path).await?)
    }
}

/// The "fetch page HTML given a URL" capability
#[derive(Debug, Clone)]
pub enum PageSource {
    Remote(RemotePages),
    Local(LocalPages),
}

impl PageSource {
    /// HTTP-backed source using the given timeout and user agent
    pub fn remote(config: &CrawlerConfig) -> Result<Self, FetchError> {
        Ok(PageSource::Remote(RemotePages::new(config)?))
    }

    pub fn local(pages: LocalPages) -> Self {
        PageSource::Local(pages)
    }

    pub fn is_local(&self) -> bool {
        matches!(self, PageSource::Local(_))
    }

    /// Raw HTML of the page at `url`
    #[instrument(skip(self), fields(url = %url, local = self.is_local()))]
    pub async fn fetch_html(&self, url: &Url) -> Result<String, FetchError> {
        let html = match self {
            PageSource::Remote(remote) => remote.fetch(url).await?,
            PageSource::Local(local) => local.fetch(url).await?,
        };
        debug!(bytes = html.len(), "fetched page");
        Ok(html)
    }
}
