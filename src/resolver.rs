//! Message → site URL resolution

use std::sync::Arc;

use tracing::{debug, info};
use url::Url;

use crate::cache::PageCache;
use crate::crawler::SiteCrawler;
use crate::topics::{Topic, TopicMap};

/// Picks the site page most relevant to a chat message
///
/// Reads through the shared [`PageCache`], crawling the site synchronously the
/// first time the cache is found empty.
#[derive(Debug, Clone)]
pub struct TopicResolver {
    cache: Arc<PageCache>,
    crawler: SiteCrawler,
    company_url: Url,
}

impl TopicResolver {
    /// `company_url` is both the crawl root and the answer for messages that
    /// name no topic.
    pub fn new(cache: Arc<PageCache>, crawler: SiteCrawler, company_url: Url) -> Self {
        Self {
            cache,
            crawler,
            company_url,
        }
    }

    pub fn company_url(&self) -> &Url {
        &self.company_url
    }

    pub fn cache(&self) -> &Arc<PageCache> {
        &self.cache
    }

    pub fn crawler(&self) -> &SiteCrawler {
        &self.crawler
    }

    /// Topic selected by the message, in catalog order
    pub fn topic_for(&self, message: &str) -> Option<Topic> {
        self.crawler.catalog().topic_for_message(message)
    }

    /// URL to fetch for this message
    pub async fn resolve_url(&self, message: &str) -> Url {
        let pages = self.ensure_populated().await;

        match self.topic_for(message) {
            Some(topic) => {
                let url = pages
                    .get(topic)
                    .unwrap_or_else(|| self.crawler.catalog().default_url(topic))
                    .clone();
                debug!(%topic, %url, "Resolved topic URL");
                url
            }
            None => {
                debug!(url = %self.company_url, "No topic matched, using company URL");
                self.company_url.clone()
            }
        }
    }

    /// Current cache snapshot, crawling first if nothing has been published.
    ///
    /// A concurrent scheduled refresh may crawl at the same time; whichever
    /// publishes last wins, and both maps are complete.
    pub async fn ensure_populated(&self) -> Arc<TopicMap> {
        if let Some(pages) = self.cache.snapshot() {
            return pages;
        }

        info!(base_url = %self.company_url, "Topic cache empty, crawling site");
        let map = self.crawler.crawl(&self.company_url).await;
        self.cache.publish(map)
    }
}
