//! Site topics and the per-variant topic catalog
//!
//! A topic is a section of the company site (about, contact, blog, ...). The
//! catalog declares, in priority order, how each topic is recognised in a chat
//! message, how its links are recognised while crawling, and where it lives
//! when nothing better has been discovered.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::matcher::{KeywordRule, first_label};

/// A site section used to pick a content-fetch target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    About,
    Contact,
    Activities,
    Academics,
    Students,
    Faculty,
    Blog,
    Service,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::About => "about",
            Topic::Contact => "contact",
            Topic::Activities => "activities",
            Topic::Academics => "academics",
            Topic::Students => "students",
            Topic::Faculty => "faculty",
            Topic::Blog => "blog",
            Topic::Service => "service",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog row
#[derive(Debug, Clone)]
pub struct TopicEntry {
    topic: Topic,
    keywords: Vec<&'static str>,
    path_patterns: Vec<&'static str>,
    default_path: &'static str,
    local_file: Option<&'static str>,
}

impl TopicEntry {
    /// Start an entry whose default page is `default_path` relative to the base URL.
    /// An empty path means the base URL itself.
    pub fn new(topic: Topic, default_path: &'static str) -> Self {
        Self {
            topic,
            keywords: Vec::new(),
            path_patterns: Vec::new(),
            default_path,
            local_file: None,
        }
    }

    /// Message keywords that select this topic
    pub fn keywords(mut self, keywords: &[&'static str]) -> Self {
        self.keywords = keywords.to_vec();
        self
    }

    /// URL path fragments that classify a crawled link as this topic
    pub fn paths(mut self, patterns: &[&'static str]) -> Self {
        self.path_patterns = patterns.to_vec();
        self
    }

    /// Fixture file served for the default URL in local mode
    pub fn local_file(mut self, file_name: &'static str) -> Self {
        self.local_file = Some(file_name);
        self
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    fn classifies(&self, lowered_path: &str) -> bool {
        self.path_patterns.iter().any(|p| lowered_path.contains(p))
    }
}

/// Mapping from topic to absolute URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TopicMap(BTreeMap<Topic, Url>);

impl TopicMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, topic: Topic) -> Option<&Url> {
        self.0.get(&topic)
    }

    /// Set the URL for a topic, replacing any earlier one
    pub fn insert(&mut self, topic: Topic, url: Url) {
        self.0.insert(topic, url);
    }

    pub fn contains(&self, topic: Topic) -> bool {
        self.0.contains_key(&topic)
    }

    /// Copy entries from `defaults` for every topic not already present
    pub fn fill_missing(&mut self, defaults: &TopicMap) {
        for (topic, url) in defaults.iter() {
            self.0.entry(topic).or_insert_with(|| url.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Topic, &Url)> {
        self.0.iter().map(|(t, u)| (*t, u))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ordered topic declarations for one deployment
#[derive(Debug, Clone)]
pub struct TopicCatalog {
    base_url: Url,
    entries: Vec<TopicEntry>,
    rules: Vec<KeywordRule<Topic>>,
    defaults: TopicMap,
}

impl TopicCatalog {
    pub fn new(base_url: Url, entries: Vec<TopicEntry>) -> Self {
        let base_url = as_directory(base_url);
        let rules = entries
            .iter()
            .map(|e| KeywordRule::new(e.topic, &e.keywords))
            .collect();

        let mut defaults = TopicMap::new();
        for entry in &entries {
            defaults.insert(entry.topic, resolve_default(&base_url, entry.default_path));
        }

        Self {
            base_url,
            entries,
            rules,
            defaults,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn entries(&self) -> &[TopicEntry] {
        &self.entries
    }

    pub fn topics(&self) -> impl Iterator<Item = Topic> + '_ {
        self.entries.iter().map(TopicEntry::topic)
    }

    /// The hardcoded fallback mapping; covers every declared topic
    pub fn defaults(&self) -> &TopicMap {
        &self.defaults
    }

    pub fn default_url(&self, topic: Topic) -> &Url {
        self.defaults.get(topic).unwrap_or(&self.base_url)
    }

    /// First topic, in declared order, whose message keywords occur in `message`
    pub fn topic_for_message(&self, message: &str) -> Option<Topic> {
        first_label(message, &self.rules).copied()
    }

    /// First topic, in declared order, whose path fragments occur in the
    /// lowercased URL path
    pub fn classify_path(&self, path: &str) -> Option<Topic> {
        let lowered = path.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.classifies(&lowered))
            .map(TopicEntry::topic)
    }

    /// URL to fixture-file table for local mode; the base URL maps to `index.html`
    pub fn local_files(&self) -> Vec<(Url, &'static str)> {
        let mut files = vec![(self.base_url.clone(), "index.html")];
        for entry in &self.entries {
            if let Some(file) = entry.local_file {
                files.push((self.default_url(entry.topic).clone(), file));
            }
        }
        files
    }
}

/// Make the URL's last path segment a directory so relative joins stay under it
pub fn as_directory(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn resolve_default(base: &Url, path: &str) -> Url {
    if path.is_empty() {
        return base.clone();
    }
    base.join(path).unwrap_or_else(|_| base.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TopicCatalog {
        TopicCatalog::new(
            Url::parse("https://example.com/").unwrap(),
            vec![
                TopicEntry::new(Topic::About, "about")
                    .keywords(&["about", "mission"])
                    .paths(&["about"])
                    .local_file("about.html"),
                TopicEntry::new(Topic::Contact, "contact")
                    .keywords(&["contact", "email"])
                    .paths(&["contact"]),
                TopicEntry::new(Topic::Blog, "blogs")
                    .keywords(&["blog", "news"])
                    .paths(&["blog", "news"]),
                TopicEntry::new(Topic::Service, "").paths(&["service", "product"]),
            ],
        )
    }

    #[test]
    fn test_defaults_cover_every_topic() {
        let catalog = catalog();
        let defaults = catalog.defaults();
        assert_eq!(defaults.len(), 4);
        assert_eq!(defaults.get(Topic::About).unwrap().as_str(), "https://example.com/about");
        assert_eq!(defaults.get(Topic::Blog).unwrap().as_str(), "https://example.com/blogs");
        assert_eq!(defaults.get(Topic::Service).unwrap().as_str(), "https://example.com/");
    }

    #[test]
    fn test_base_path_keeps_its_last_segment() {
        let catalog = TopicCatalog::new(
            Url::parse("http://localhost:8080/site").unwrap(),
            vec![TopicEntry::new(Topic::About, "about").local_file("about.html")],
        );
        assert_eq!(catalog.base_url().as_str(), "http://localhost:8080/site/");
        assert_eq!(
            catalog.default_url(Topic::About).as_str(),
            "http://localhost:8080/site/about"
        );
        assert_eq!(catalog.local_files()[1].0.as_str(), "http://localhost:8080/site/about");

        let unchanged = as_directory(Url::parse("https://example.com/docs/").unwrap());
        assert_eq!(unchanged.as_str(), "https://example.com/docs/");
    }

    #[test]
    fn test_message_topic_order() {
        let catalog = catalog();
        assert_eq!(
            catalog.topic_for_message("email me about the mission"),
            Some(Topic::About)
        );
        assert_eq!(catalog.topic_for_message("Contact page"), Some(Topic::Contact));
        assert_eq!(catalog.topic_for_message("pricing"), None);
    }

    #[test]
    fn test_classify_path_priority() {
        let catalog = catalog();
        assert_eq!(catalog.classify_path("/About/contact"), Some(Topic::About));
        assert_eq!(catalog.classify_path("/latest-news"), Some(Topic::Blog));
        assert_eq!(catalog.classify_path("/products/x"), Some(Topic::Service));
        assert_eq!(catalog.classify_path("/careers"), None);
    }

    #[test]
    fn test_local_files_table() {
        let files = catalog().local_files();
        assert_eq!(files[0].0.as_str(), "https://example.com/");
        assert_eq!(files[0].1, "index.html");
        assert!(files.iter().any(|(u, f)| u.as_str() == "https://example.com/about" && *f == "about.html"));
    }

    #[test]
    fn test_fill_missing_keeps_discoveries() {
        let catalog = catalog();
        let mut map = TopicMap::new();
        let found = Url::parse("https://example.com/about-us").unwrap();
        map.insert(Topic::About, found.clone());
        map.fill_missing(catalog.defaults());
        assert_eq!(map.get(Topic::About), Some(&found));
        assert!(map.contains(Topic::Contact));
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn test_topic_map_serializes_as_object() {
        let json = serde_json::to_value(catalog().defaults()).unwrap();
        assert_eq!(json["contact"], "https://example.com/contact");
    }
}
