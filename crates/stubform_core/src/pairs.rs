//! Insertion-ordered string maps.
//!
//! Used for HTML attributes and for the extra tokens passed to `open`. Both
//! render in the order the caller wrote them. Setting a key again replaces
//! its value and keeps its original position.

use indexmap::IndexMap;

/// Ordered string-to-string map.
pub type Pairs = IndexMap<String, String>;

/// HTML attributes for a field.
pub type Attributes = Pairs;

/// Extra `open` tokens, keyed without the `DUMMY` prefix.
pub type ExtraTokens = Pairs;

/// Build a [`Pairs`] map from borrowed or owned strings.
///
/// A repeated key takes the last value given.
pub fn pairs<I, K, V>(entries: I) -> Pairs
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
