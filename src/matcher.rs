//! Keyword matching shared by microbots, topic resolution and the
//! company-relatedness gate.
//!
//! Matching is plain substring containment against the lowercased message.
//! There is no tokenization, punctuation stripping or stemming, so `"hrms"`
//! matches inside `"ourhrmssystem"`. When several rules match, the one declared
//! first wins.

/// A labelled set of lowercase keywords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule<L> {
    label: L,
    keywords: Vec<String>,
}

impl<L> KeywordRule<L> {
    /// Create a rule; keywords are lowercased so callers can write them naturally.
    pub fn new<I, S>(label: L, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            label,
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Whether any keyword occurs in an already-lowercased message
    pub fn matches_lowercase(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }

    /// Whether any keyword occurs in the message, ignoring case
    pub fn matches(&self, message: &str) -> bool {
        self.matches_lowercase(&message.to_lowercase())
    }
}

/// Return the first rule, in declared order, with a keyword contained in the message.
pub fn first_match<'a, L>(message: &str, rules: &'a [KeywordRule<L>]) -> Option<&'a KeywordRule<L>> {
    first_position(message, rules).map(|i| &rules[i])
}

/// Position of the first matching rule in an ordered sequence of rules
pub fn first_position<'a, L, I>(message: &str, rules: I) -> Option<usize>
where
    L: 'a,
    I: IntoIterator<Item = &'a KeywordRule<L>>,
{
    let lowered = message.to_lowercase();
    rules
        .into_iter()
        .position(|rule| rule.matches_lowercase(&lowered))
}

/// Label of the first matching rule
pub fn first_label<'a, L>(message: &str, rules: &'a [KeywordRule<L>]) -> Option<&'a L> {
    first_match(message, rules).map(KeywordRule::label)
}
