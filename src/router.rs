//! # Chat Router
//!
//! Per-request orchestration. A message passes through four stages and the
//! first one that produces a reply wins:
//!
//! 1. Greeting: the whole trimmed message is a known greeting phrase.
//! 2. Microbots: a canned answer keyed on keywords.
//! 3. Live content: the message looks like a question about the organisation,
//!    so the most relevant site page is fetched and excerpted.
//! 4. The default "contact admin" reply.
//!
//! Every stage resolves to text. Network failures surface as apology text from
//! the content stage, never as errors.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::cache::PageCache;
use crate::config::Settings;
use crate::crawler::{ContentFetcher, LocalPages, PageSource, SiteCrawler};
use crate::error::Result;
use crate::resolver::TopicResolver;
use crate::variants::VariantConfig;

/// Answers chat messages and button presses for one deployment
#[derive(Debug, Clone)]
pub struct ChatRouter {
    variant: Arc<VariantConfig>,
    resolver: TopicResolver,
    fetcher: ContentFetcher,
}

impl ChatRouter {
    pub fn new(variant: VariantConfig, resolver: TopicResolver, fetcher: ContentFetcher) -> Self {
        Self {
            variant: Arc::new(variant),
            resolver,
            fetcher,
        }
    }

    /// Wire up a router from validated settings around a shared cache.
    ///
    /// With `local_testing` set, both crawling and content fetching read the
    /// fixture directory instead of the network.
    pub fn from_settings(settings: &Settings, cache: Arc<PageCache>) -> Result<Self> {
        let variant = settings.variant_config();
        let crawler_config = settings.crawler_config();

        let source = if settings.local_testing {
            let pages = LocalPages::new(settings.local_data_dir.clone(), variant.topics.local_files());
            PageSource::local(pages)
        } else {
            PageSource::remote(&crawler_config)?
        };

        let crawler = SiteCrawler::new(source.clone(), Arc::clone(&variant.topics), &crawler_config);
        let resolver = TopicResolver::new(cache, crawler, settings.base_url.clone());
        let fetcher = ContentFetcher::new(source);

        Ok(Self::new(variant, resolver, fetcher))
    }

    pub fn variant(&self) -> &VariantConfig {
        &self.variant
    }

    pub fn resolver(&self) -> &TopicResolver {
        &self.resolver
    }

    /// Reply to one chat message
    #[instrument(skip(self), fields(variant = %self.variant.variant))]
    pub async fn reply(&self, message: &str) -> String {
        let message = message.trim();

        if self.variant.is_greeting(message) {
            debug!("Greeting");
            return self.variant.greeting_reply.to_string();
        }

        if let Some(reply) = self.variant.microbots.respond(message) {
            return reply;
        }

        if self.variant.is_company_related(message) {
            let url = self.resolver.resolve_url(message).await;
            debug!(%url, "Answering from site content");
            return self.fetcher.fetch_text(&url).await;
        }

        debug!("No stage matched, using default reply");
        self.variant.default_reply.to_string()
    }

    /// Reply to a button press, or `None` if this deployment has no buttons
    pub fn button_reply(&self, button: &str) -> Option<&'static str> {
        self.variant.button_reply(button.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::{DEFAULT_REPLY, GREETING_REPLY, Variant};
    use mockito::Server;
    use std::collections::HashMap;
    use tempfile::TempDir;

    const ABOUT_PAGE: &str = r#"<html><head><style>body { color: red; }</style></head>
        <body><h1>About   Us</h1>
        <script>track();</script>
        <p>We build school software.</p></body></html>"#;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned()).unwrap()
    }

    fn router(vars: &[(&str, &str)]) -> ChatRouter {
        ChatRouter::from_settings(&settings(vars), Arc::new(PageCache::new())).unwrap()
    }

    #[tokio::test]
    async fn test_greeting_beats_everything() {
        let router = router(&[("CHATBOT_VARIANT", "hrms")]);
        assert_eq!(router.reply("hi").await, GREETING_REPLY);
        assert_eq!(router.reply("  Good Evening ").await, GREETING_REPLY);
    }

    #[tokio::test]
    async fn test_microbot_reply() {
        let router = router(&[("CHATBOT_VARIANT", "hrms")]);
        let reply = router.reply("what are your hrms pricing plans").await;
        assert!(reply.starts_with("💼 HRMS Pricing"));
    }

    #[tokio::test]
    async fn test_unrelated_message_gets_default() {
        for variant in ["company", "hrms", "school"] {
            let router = router(&[("CHATBOT_VARIANT", variant)]);
            assert_eq!(router.reply("xyz123 unrelated gibberish").await, DEFAULT_REPLY);
        }
    }

    #[tokio::test]
    async fn test_company_question_crawls_then_fetches() {
        let mut server = Server::new_async().await;
        let landing = server
            .mock("GET", "/")
            .with_status(200)
            .with_body(r#"<a href="/about-school">About</a><a href="/contact">Contact</a>"#)
            .expect(1)
            .create_async()
            .await;
        let about = server
            .mock("GET", "/about-school")
            .with_status(200)
            .with_body(ABOUT_PAGE)
            .create_async()
            .await;

        let base = format!("{}/", server.url());
        let cache = Arc::new(PageCache::new());
        let router = ChatRouter::from_settings(
            &settings(&[("CHATBOT_VARIANT", "school"), ("COMPANY_URL", &base)]),
            Arc::clone(&cache),
        )
        .unwrap();

        let reply = router.reply("tell me about your company").await;
        assert_eq!(reply, "About Us We build school software.");
        assert!(cache.is_populated());

        landing.assert_async().await;
        about.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_failure_becomes_apology() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(503)
            .create_async()
            .await;
        server
            .mock("GET", "/about")
            .with_status(503)
            .create_async()
            .await;

        let base = format!("{}/", server.url());
        let router = router(&[("CHATBOT_VARIANT", "school"), ("COMPANY_URL", &base)]);

        let reply = router.reply("tell me about your company").await;
        assert!(reply.starts_with("Unable to fetch company information at this time."));
    }

    #[tokio::test]
    async fn test_local_testing_reads_fixtures() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.html"), "<a href='/about'>About</a>").unwrap();
        std::fs::write(dir.path().join("about.html"), ABOUT_PAGE).unwrap();
        let data_dir = dir.path().to_string_lossy().to_string();

        let router = router(&[
            ("CHATBOT_VARIANT", "school"),
            ("LOCAL_TESTING", "true"),
            ("LOCAL_DATA_DIR", &data_dir),
        ]);

        let reply = router.reply("tell me about your company").await;
        assert_eq!(reply, "About Us We build school software.");
    }

    #[tokio::test]
    async fn test_local_testing_missing_fixture() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().to_string_lossy().to_string();

        let router = router(&[
            ("CHATBOT_VARIANT", "school"),
            ("LOCAL_TESTING", "true"),
            ("LOCAL_DATA_DIR", &data_dir),
        ]);

        let reply = router.reply("how does learning work here").await;
        assert!(reply.starts_with("Local file not found:"), "{reply}");
        assert!(reply.contains("academics.html"));
    }

    #[test]
    fn test_button_replies() {
        let company = router(&[("CHATBOT_VARIANT", "company")]);
        assert!(company.button_reply(" HRMS System ").unwrap().starts_with("🏢 HRMS"));
        assert_eq!(
            company.button_reply("foo"),
            Some("Please select either 'HRMS System' or 'SCHOOL System' for more information.")
        );

        let hrms = router(&[("CHATBOT_VARIANT", "hrms")]);
        assert_eq!(hrms.variant().variant, Variant::Hrms);
        assert!(hrms.button_reply("HRMS System").is_none());
    }
}
