//! # Refresh Scheduler
//!
//! Background loop that rebuilds the topic cache once a day at local midnight.
//! A [`RefreshHandle`] can wake it early, and cancelling the shutdown token
//! stops it promptly, including mid-crawl.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use url::Url;

use crate::cache::PageCache;
use crate::crawler::SiteCrawler;
use crate::topics::TopicMap;

/// Time from `now` until the next midnight in `now`'s time zone.
///
/// Exactly midnight counts as a full day away. If the zone skips midnight
/// (a DST change at 00:00), the next day boundary is taken as 24 hours out.
pub fn duration_until_next_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> Duration {
    let next = now
        .date_naive()
        .succ_opt()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .and_then(|midnight| now.timezone().from_local_datetime(&midnight).earliest());

    match next {
        Some(next) => next
            .signed_duration_since(now.clone())
            .to_std()
            .unwrap_or(Duration::ZERO),
        None => Duration::from_secs(24 * 60 * 60),
    }
}

/// Wakes a running [`RefreshScheduler`] immediately
#[derive(Debug, Clone)]
pub struct RefreshHandle {
    trigger: Arc<Notify>,
}

impl RefreshHandle {
    /// Request a refresh. Requests made while a refresh is running queue one
    /// more cycle; repeated requests coalesce.
    pub fn trigger(&self) {
        self.trigger.notify_one();
    }
}

/// Owns the daily rebuild of a [`PageCache`]
#[derive(Debug)]
pub struct RefreshScheduler {
    crawler: SiteCrawler,
    cache: Arc<PageCache>,
    base_url: Url,
    trigger: Arc<Notify>,
}

impl RefreshScheduler {
    pub fn new(crawler: SiteCrawler, cache: Arc<PageCache>, base_url: Url) -> Self {
        Self {
            crawler,
            cache,
            base_url,
            trigger: Arc::new(Notify::new()),
        }
    }

    pub fn handle(&self) -> RefreshHandle {
        RefreshHandle {
            trigger: Arc::clone(&self.trigger),
        }
    }

    /// Crawl once and publish the result.
    ///
    /// A failed crawl publishes the default topic URLs, so the cache is always
    /// complete afterwards.
    pub async fn refresh_once(&self) -> Arc<TopicMap> {
        let map = match self.crawler.try_crawl(&self.base_url).await {
            Ok(map) => {
                info!(base_url = %self.base_url, topics = map.len(), "Topic cache refreshed");
                map
            }
            Err(e) => {
                warn!(base_url = %self.base_url, error = %e, "Refresh crawl failed, publishing default topic URLs");
                self.crawler.fallback()
            }
        };
        self.cache.publish(map)
    }

    /// Run until `shutdown` is cancelled
    pub async fn run(self, shutdown: CancellationToken) {
        info!(base_url = %self.base_url, "Refresh scheduler starting");

        loop {
            let wait = duration_until_next_midnight(&Local::now());
            info!(in_secs = wait.as_secs(), "Next topic refresh scheduled");

            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(wait) => {}
                _ = self.trigger.notified() => info!("Manual topic refresh requested"),
            }

            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = self.refresh_once() => {}
            }
        }

        info!("Refresh scheduler stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::{CrawlerConfig, PageSource};
    use crate::topics::{Topic, TopicCatalog, TopicEntry};
    use chrono::{FixedOffset, Utc};
    use mockito::Server;

    fn scheduler(base: &Url, cache: Arc<PageCache>) -> RefreshScheduler {
        let catalog = Arc::new(TopicCatalog::new(
            base.clone(),
            vec![
                TopicEntry::new(Topic::About, "about")
                    .keywords(&["about"])
                    .paths(&["about"]),
                TopicEntry::new(Topic::Contact, "contact")
                    .keywords(&["contact"])
                    .paths(&["contact"]),
            ],
        ));
        let config = CrawlerConfig::builder()
            .timeout(Duration::from_secs(2))
            .build();
        let crawler = SiteCrawler::new(PageSource::remote(&config).unwrap(), catalog, &config);
        RefreshScheduler::new(crawler, cache, base.clone())
    }

    #[test]
    fn test_duration_until_next_midnight() {
        let late = Utc.with_ymd_and_hms(2024, 3, 9, 23, 0, 0).unwrap();
        assert_eq!(duration_until_next_midnight(&late), Duration::from_secs(3600));

        let midnight = Utc.with_ymd_and_hms(2024, 3, 9, 0, 0, 0).unwrap();
        assert_eq!(duration_until_next_midnight(&midnight), Duration::from_secs(86_400));

        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let evening = ist.with_ymd_and_hms(2024, 12, 31, 18, 30, 15).unwrap();
        assert_eq!(
            duration_until_next_midnight(&evening),
            Duration::from_secs(5 * 3600 + 29 * 60 + 45)
        );
    }

    #[tokio::test]
    async fn test_refresh_replaces_cache() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_body(r#"<a href="/about-us">About</a>"#)
            .create_async()
            .await;
        let base = Url::parse(&server.url()).unwrap();
        let cache = Arc::new(PageCache::new());

        let mut stale = TopicMap::new();
        stale.insert(Topic::About, base.join("old-about").unwrap());
        cache.publish(stale);

        let map = scheduler(&base, Arc::clone(&cache)).refresh_once().await;
        assert_eq!(map.get(Topic::About).unwrap().path(), "/about-us");
        assert_eq!(map.get(Topic::Contact).unwrap().path(), "/contact");
        assert_eq!(cache.snapshot().unwrap(), map);
    }

    #[tokio::test]
    async fn test_failed_refresh_publishes_defaults() {
        let base = Url::parse("http://127.0.0.1:9/").unwrap();
        let cache = Arc::new(PageCache::new());

        let map = scheduler(&base, Arc::clone(&cache)).refresh_once().await;
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(Topic::About).unwrap().as_str(), "http://127.0.0.1:9/about");
        assert!(cache.is_populated());
    }

    #[tokio::test]
    async fn test_trigger_and_shutdown() {
        let mut server = Server::new_async().await;
        let landing = server
            .mock("GET", "/")
            .with_status(200)
            .with_body(r#"<a href="/contact-us">Contact</a>"#)
            .expect(1)
            .create_async()
            .await;
        let base = Url::parse(&server.url()).unwrap();
        let cache = Arc::new(PageCache::new());

        let scheduler = scheduler(&base, Arc::clone(&cache));
        let handle = scheduler.handle();
        let shutdown = CancellationToken::new();
        let task = tokio::spawn(scheduler.run(shutdown.clone()));

        handle.trigger();
        tokio::time::timeout(Duration::from_secs(5), async {
            while !cache.is_populated() {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("refresh did not run");

        shutdown.cancel();
        tokio::time::timeout(Duration::from_secs(5), task)
            .await
            .expect("scheduler did not stop")
            .unwrap();

        let map = cache.snapshot().unwrap();
        assert_eq!(map.get(Topic::Contact).unwrap().path(), "/contact-us");
        landing.assert_async().await;
    }
}
