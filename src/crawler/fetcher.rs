//! Plain-text page excerpts for chat replies

use tracing::{instrument, warn};
use url::Url;

use crate::crawler::content_extraction::{MAX_CHAT_CHARS, extract_text, truncate_for_chat};
use crate::crawler::source::PageSource;

/// Fetches a page and reduces it to a bounded plain-text excerpt
#[derive(Debug, Clone)]
pub struct ContentFetcher {
    source: PageSource,
    max_chars: usize,
}

impl ContentFetcher {
    pub fn new(source: PageSource) -> Self {
        Self {
            source,
            max_chars: MAX_CHAT_CHARS,
        }
    }

    pub fn source(&self) -> &PageSource {
        &self.source
    }

    /// Visible text of the page at `url`, truncated for chat display.
    ///
    /// Never fails: fetch errors come back as a readable apology.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn fetch_text(&self, url: &Url) -> String {
        match self.source.fetch_html(url).await {
            Ok(html) => truncate_for_chat(extract_text(&html), self.max_chars),
            Err(e) => {
                warn!(error = %e, "Failed to fetch page content");
                e.apology()
            }
        }
    }
}
