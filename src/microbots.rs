//! Keyword-triggered canned responders ("microbots")
//!
//! A microbot is a value record: a name, a keyword set and a response. The
//! registry keeps them in priority order and answers with the first bot whose
//! keywords appear in the message.

use crate::matcher::{KeywordRule, first_position};

/// What a microbot replies with
#[derive(Clone)]
pub enum Response {
    /// A fixed block of text
    Text(&'static str),
    /// A pure function of the incoming message
    Generated(fn(&str) -> String),
}

impl Response {
    fn render(&self, message: &str) -> String {
        match self {
            Response::Text(text) => (*text).to_string(),
            Response::Generated(generate) => generate(message),
        }
    }
}

impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Response::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            Response::Generated(_) => f.write_str("Generated"),
        }
    }
}

/// A keyword rule paired with its canned response
#[derive(Debug, Clone)]
pub struct Microbot {
    rule: KeywordRule<&'static str>,
    response: Response,
}

impl Microbot {
    /// Create a bot answering with fixed text
    pub fn text(name: &'static str, keywords: &[&str], text: &'static str) -> Self {
        Self {
            rule: KeywordRule::new(name, keywords),
            response: Response::Text(text),
        }
    }

    /// Create a bot whose reply is computed from the message
    pub fn generated(name: &'static str, keywords: &[&str], generate: fn(&str) -> String) -> Self {
        Self {
            rule: KeywordRule::new(name, keywords),
            response: Response::Generated(generate),
        }
    }

    pub fn name(&self) -> &'static str {
        *self.rule.label()
    }

    pub fn rule(&self) -> &KeywordRule<&'static str> {
        &self.rule
    }

    pub fn respond(&self, message: &str) -> String {
        self.response.render(message)
    }
}

/// Ordered microbot list; order encodes priority
#[derive(Debug, Clone, Default)]
pub struct MicrobotRegistry {
    bots: Vec<Microbot>,
}

impl MicrobotRegistry {
    pub fn new(bots: Vec<Microbot>) -> Self {
        Self { bots }
    }

    /// The highest-priority bot whose keywords occur in the message
    pub fn select(&self, message: &str) -> Option<&Microbot> {
        let index = first_position(message, self.bots.iter().map(Microbot::rule))?;
        self.bots.get(index)
    }

    /// Reply from the selected bot, or `None` so the caller falls through
    pub fn respond(&self, message: &str) -> Option<String> {
        let bot = self.select(message)?;
        tracing::debug!(bot = bot.name(), "microbot matched");
        Some(bot.respond(message))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.bots.iter().map(Microbot::name)
    }

    pub fn len(&self) -> usize {
        self.bots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bots.is_empty()
    }
}
