//! Placeholder tokens and substitution.
//!
//! Stubs carry uppercase `DUMMY*` placeholders. A [`TokenSet`] replaces them
//! one entry at a time, each entry being a global substring replace over the
//! whole buffer. Entries run in insertion order, so a replacement value that
//! itself contains a later token name gets rewritten by that later entry.

use std::sync::OnceLock;

use regex::Regex;

/// Prefix shared by every placeholder token.
pub const TOKEN_PREFIX: &str = "DUMMY";

pub const FIELD_NAME: &str = "DUMMYFIELDNAME";
pub const LABEL: &str = "DUMMYLABEL";
pub const ATTRIBUTES: &str = "DUMMYATTRIBUTES";
pub const VALUE: &str = "DUMMYVALUE";
pub const BUTTON_TEXT: &str = "DUMMYBUTTONTEXT";
pub const CSRF: &str = "DUMMYCSRF";

/// Ordered placeholder-to-value replacements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    entries: Vec<(String, String)>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a token set from caller keys, mapping `key` to `DUMMY<KEY>`.
    ///
    /// `("action", "/save")` becomes `("DUMMYACTION", "/save")`.
    pub fn from_extra<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries = extra
            .into_iter()
            .map(|(key, value)| (token_name(key.as_ref()), value.into()))
            .collect();
        Self { entries }
    }

    /// Append a replacement. Duplicate names are allowed.
    pub fn push(&mut self, token: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.push((token.into(), value.into()));
        self
    }

    /// Builder form of [`TokenSet::push`].
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(token, value);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace every token in `stub`, in order.
    pub fn apply(&self, stub: &mut String) {
        for (token, value) in &self.entries {
            if token.is_empty() || !stub.contains(token.as_str()) {
                continue;
            }
            *stub = stub.replace(token.as_str(), value);
        }
    }

    /// Render a copy of `stub` with every token replaced.
    pub fn render(&self, stub: &str) -> String {
        let mut out = stub.to_string();
        self.apply(&mut out);
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TokenSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Placeholder name for a caller key: `DUMMY` + key, ASCII-uppercased.
///
/// Non-ASCII characters are left as written.
pub fn token_name(key: &str) -> String {
    format!("{}{}", TOKEN_PREFIX, key).to_ascii_uppercase()
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"DUMMY[A-Z0-9_]+").expect("static token pattern"))
}

/// Distinct `DUMMY*` tokens still present in `markup`, in order of first
/// appearance.
pub fn unresolved_tokens(markup: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for m in token_pattern().find_iter(markup) {
        if !found.iter().any(|t| t == m.as_str()) {
            found.push(m.as_str().to_string());
        }
    }
    found
}
