//! # deskbot - Rule-Based Web Support Chatbot
//!
//! A keyword-driven support assistant for an organisation's website. It answers
//! from fixed replies where it can and falls back to live excerpts of the
//! organisation's own pages, so there is no model, index or database to run.
//!
//! ## Features
//!
//! - Three deployments (company site, HRMS product, school ERP product) sharing
//!   one pipeline and differing only in data
//! - Greeting detection, ordered keyword microbots and a relevance gate
//! - Topic discovery by crawling the site's landing page, with hardcoded
//!   fallbacks for anything not found
//! - Plain-text page excerpts bounded for chat display
//! - Process-wide topic cache rebuilt at local midnight or on demand
//! - Offline mode serving fixture HTML from a local directory
//! - axum HTTP service with permissive CORS
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use deskbot::cache::PageCache;
//! use deskbot::config::Settings;
//! use deskbot::router::ChatRouter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::from_env()?;
//!     let router = ChatRouter::from_settings(&settings, Arc::new(PageCache::new()))?;
//!
//!     println!("{}", router.reply("tell me about your company").await);
//!     Ok(())
//! }
//! ```

mod error;

pub mod cache;
pub mod config;
pub mod crawler;
pub mod matcher;
pub mod microbots;
pub mod resolver;
pub mod router;
pub mod scheduler;
pub mod server;
pub mod topics;
pub mod variants;

pub use error::{Error, Result};
