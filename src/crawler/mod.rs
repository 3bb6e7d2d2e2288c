//! # Site Crawling and Page Content
//!
//! Everything that touches the company website lives here:
//!
//! - `PageSource`: fetch raw HTML from the live site or from local fixture files
//! - `SiteCrawler`: discover which site pages correspond to which topics
//! - `ContentFetcher`: turn a page into a bounded plain-text excerpt for chat
//! - Content extraction helpers for link discovery and text cleanup
//!
//! Network failures never escape this module on the chat path: the crawler
//! falls back to the catalog's default URLs and the fetcher to an apology string.

mod config;
mod content_extraction;
mod error;
mod fetcher;
mod site;
mod source;

pub use config::{CrawlerConfig, CrawlerConfigBuilder, LinkPreference};
pub use content_extraction::{
    MAX_CHAT_CHARS, TRUNCATION_MARKER, collapse_whitespace, extract_links, extract_text,
    truncate_for_chat,
};
pub use error::{CrawlError, FetchError};
pub use fetcher::ContentFetcher;
pub use site::SiteCrawler;
pub use source::{LocalPages, PageSource, RemotePages};
