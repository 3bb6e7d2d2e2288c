//! Topic discovery over a site's landing page

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::crawler::content_extraction::extract_links;
use crate::crawler::error::CrawlError;
use crate::crawler::source::PageSource;
use crate::crawler::{CrawlerConfig, LinkPreference};
use crate::topics::{TopicCatalog, TopicMap};

/// Maps a site's topics to URLs by classifying the links on its landing page
#[derive(Debug, Clone)]
pub struct SiteCrawler {
    source: PageSource,
    catalog: Arc<TopicCatalog>,
    link_preference: LinkPreference,
}

impl SiteCrawler {
    pub fn new(source: PageSource, catalog: Arc<TopicCatalog>, config: &CrawlerConfig) -> Self {
        Self {
            source,
            catalog,
            link_preference: config.link_preference,
        }
    }

    pub fn catalog(&self) -> &TopicCatalog {
        &self.catalog
    }

    /// Crawl `base_url`, falling back to the catalog defaults on any failure.
    ///
    /// The returned map always covers every declared topic.
    pub async fn crawl(&self, base_url: &Url) -> TopicMap {
        match self.try_crawl(base_url).await {
            Ok(map) => map,
            Err(e) => {
                warn!(base_url = %base_url, error = %e, "Crawl failed, using default topic URLs");
                self.fallback()
            }
        }
    }

    /// Crawl `base_url`, reporting failures to the caller.
    ///
    /// Topics with no discovered link are filled from the catalog defaults.
    #[instrument(skip(self), fields(base_url = %base_url))]
    pub async fn try_crawl(&self, base_url: &Url) -> Result<TopicMap, CrawlError> {
        if base_url.host_str().is_none() {
            return Err(CrawlError::NoHost(base_url.to_string()));
        }

        let html = self.source.fetch_html(base_url).await?;
        let mut map = self.classify_links(&html, base_url);
        info!(discovered = map.len(), "Crawl finished");

        map.fill_missing(self.catalog.defaults());
        Ok(map)
    }

    /// The hardcoded mapping used when crawling fails
    pub fn fallback(&self) -> TopicMap {
        self.catalog.defaults().clone()
    }

    /// Topic links found in `html`, without defaults
    ///
    /// Links to other hosts are ignored. Each remaining link is classified by
    /// its path; links sharing a topic are resolved by the configured
    /// [`LinkPreference`].
    pub fn classify_links(&self, html: &str, base_url: &Url) -> TopicMap {
        let mut map = TopicMap::new();

        for link in extract_links(html, base_url) {
            if !same_site(&link, base_url) {
                continue;
            }
            let Some(topic) = self.catalog.classify_path(link.path()) else {
                continue;
            };
            if self.link_preference == LinkPreference::First && map.contains(topic) {
                continue;
            }
            debug!(%topic, url = %link, "Classified link");
            map.insert(topic, link);
        }

        map
    }
}

fn same_site(link: &Url, base: &Url) -> bool {
    link.host_str() == base.host_str() && link.port_or_known_default() == base.port_or_known_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::source::LocalPages;
    use crate::topics::{Topic, TopicEntry};
    use mockito::Server;

    const LANDING: &str = r#"<html><body>
        <nav>
          <a href="/about">About</a>
          <a href="/contact">Contact</a>
          <a href="https://elsewhere.org/blog">Partner blog</a>
          <a href="/products/hrms">HRMS</a>
        </nav>
        <footer>
          <a href="/about-us">Who we are</a>
          <a href="/news">News</a>
        </footer>
      </body></html>"#;

    fn catalog(base: &Url) -> Arc<TopicCatalog> {
        Arc::new(TopicCatalog::new(
            base.clone(),
            vec![
                TopicEntry::new(Topic::About, "about").paths(&["about"]).local_file("about.html"),
                TopicEntry::new(Topic::Contact, "contact").paths(&["contact"]),
                TopicEntry::new(Topic::Blog, "blogs").paths(&["blog", "news"]),
                TopicEntry::new(Topic::Service, "").paths(&["service", "product"]),
            ],
        ))
    }

    fn remote_crawler(base: &Url, config: &CrawlerConfig) -> SiteCrawler {
        SiteCrawler::new(PageSource::remote(config).unwrap(), catalog(base), config)
    }

    async fn landing_server() -> (mockito::ServerGuard, mockito::Mock, Url) {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(LANDING)
            .create_async()
            .await;
        let base = Url::parse(&format!("{}/", server.url())).unwrap();
        (server, mock, base)
    }

    #[tokio::test]
    async fn test_crawl_classifies_same_site_links() {
        let (_server, mock, base) = landing_server().await;
        let crawler = remote_crawler(&base, &CrawlerConfig::default());

        let map = crawler.try_crawl(&base).await.unwrap();

        // Later links win by default.
        assert_eq!(map.get(Topic::About).unwrap().path(), "/about-us");
        assert_eq!(map.get(Topic::Contact).unwrap().path(), "/contact");
        assert_eq!(map.get(Topic::Blog).unwrap().path(), "/news");
        assert_eq!(map.get(Topic::Service).unwrap().path(), "/products/hrms");
        assert!(map.iter().all(|(_, url)| url.host_str() == base.host_str()));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_first_link_preference() {
        let (_server, _mock, base) = landing_server().await;
        let config = CrawlerConfig::builder()
            .link_preference(LinkPreference::First)
            .build();
        let crawler = remote_crawler(&base, &config);

        let map = crawler.crawl(&base).await;
        assert_eq!(map.get(Topic::About).unwrap().path(), "/about");
    }

    #[tokio::test]
    async fn test_crawl_is_deterministic() {
        let (_server, _mock, base) = landing_server().await;
        let crawler = remote_crawler(&base, &CrawlerConfig::default());

        let first = crawler.crawl(&base).await;
        let second = crawler.crawl(&base).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_missing_topics_filled_with_defaults() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_body(r#"<a href="/contact-page">Contact</a>"#)
            .create_async()
            .await;
        let base = Url::parse(&format!("{}/", server.url())).unwrap();
        let crawler = remote_crawler(&base, &CrawlerConfig::default());

        let map = crawler.try_crawl(&base).await.unwrap();
        assert_eq!(map.len(), 4);
        assert_eq!(map.get(Topic::Contact).unwrap().path(), "/contact-page");
        assert_eq!(map.get(Topic::About), Some(crawler.catalog().default_url(Topic::About)));
        assert_eq!(map.get(Topic::Service), Some(&base));
    }

    #[tokio::test]
    async fn test_server_error_falls_back() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(500)
            .create_async()
            .await;
        let base = Url::parse(&format!("{}/", server.url())).unwrap();
        let crawler = remote_crawler(&base, &CrawlerConfig::default());

        assert!(crawler.try_crawl(&base).await.is_err());
        let map = crawler.crawl(&base).await;
        assert_eq!(&map, crawler.catalog().defaults());
    }

    #[tokio::test]
    async fn test_unreachable_site_falls_back() {
        let base = Url::parse("http://127.0.0.1:9/").unwrap();
        let config = CrawlerConfig::builder()
            .timeout(std::time::Duration::from_secs(2))
            .build();
        let crawler = remote_crawler(&base, &config);

        let map = crawler.crawl(&base).await;
        for topic in crawler.catalog().topics() {
            assert!(map.contains(topic), "missing {topic}");
        }
    }

    #[tokio::test]
    async fn test_crawl_local_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), LANDING).unwrap();

        let base = Url::parse("https://example.com/").unwrap();
        let catalog = catalog(&base);
        let source = PageSource::local(LocalPages::new(dir.path(), catalog.local_files()));
        let crawler = SiteCrawler::new(source, catalog, &CrawlerConfig::default());

        let map = crawler.try_crawl(&base).await.unwrap();
        assert_eq!(map.get(Topic::Blog).unwrap().as_str(), "https://example.com/news");
    }
}
