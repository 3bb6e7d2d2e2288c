//! Content extraction functionality for the crawler module

use scraper::{Html, Node, Selector};
use tracing::warn;
use url::Url;

/// Longest page excerpt returned to a chat user, in characters
pub const MAX_CHAT_CHARS: usize = 2000;

/// Appended to excerpts cut at [`MAX_CHAT_CHARS`]
pub const TRUNCATION_MARKER: &str = "... (content truncated for chat display)";

/// Elements whose text is never shown
const HIDDEN_ELEMENTS: [&str; 2] = ["script", "style"];

/// Extract the visible text of an HTML document
///
/// Text inside `script` and `style` elements is dropped. The remaining text is
/// split into lines and on runs of two spaces; empty pieces are discarded and
/// the rest joined with single spaces. Malformed markup is tolerated.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut raw = String::new();
    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|e| HIDDEN_ELEMENTS.contains(&e.name()))
        });
        if !hidden {
            raw.push_str(text);
        }
    }

    collapse_whitespace(&raw)
}

/// Join non-empty line fragments with single spaces
pub fn collapse_whitespace(text: &str) -> String {
    text.lines()
        .flat_map(|line| line.trim().split("  "))
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cut text longer than `limit` characters and append [`TRUNCATION_MARKER`]
pub fn truncate_for_chat(text: String, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => {
            let mut truncated = text[..cut].to_string();
            truncated.push_str(TRUNCATION_MARKER);
            truncated
        }
        None => text,
    }
}

/// Every hyperlink in the document, resolved against `base`
///
/// Hrefs that do not form a valid URL are skipped.
pub fn extract_links(html: &str, base: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);
    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(e) => {
            warn!("Failed to parse link selector: {}", e);
            return Vec::new();
        }
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| base.join(href.trim()).ok())
        .collect()
}
