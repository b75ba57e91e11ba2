//! Query-string codec.
//!
//! Decodes and encodes `application/x-www-form-urlencoded` strings with
//! multi-value support: a key that appears more than once collects into an
//! ordered sequence of its string values, a key that appears once maps to
//! a single string. The same codec is used for both the `?query` and the
//! `#hash` portions of a location, and `build_url` coerces non-string
//! values (numbers, booleans) through the same conventions so built URLs
//! round-trip with the decoder.

use serde::ser::{Serialize, SerializeMap, Serializer};
use url::form_urlencoded;

/// A decoded query value: single string, or ordered multi-value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// The key appeared exactly once.
    Single(String),
    /// The key appeared more than once; values in occurrence order.
    Many(Vec<String>),
}

impl QueryValue {
    /// The value when single, `None` when multi-valued.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            QueryValue::Single(v) => Some(v),
            QueryValue::Many(_) => None,
        }
    }

    /// All values in order (one element for `Single`).
    pub fn values(&self) -> Vec<&str> {
        match self {
            QueryValue::Single(v) => vec![v.as_str()],
            QueryValue::Many(vs) => vs.iter().map(String::as_str).collect(),
        }
    }

    fn push(&mut self, value: String) {
        match self {
            QueryValue::Single(first) => {
                *self = QueryValue::Many(vec![std::mem::take(first), value]);
            }
            QueryValue::Many(vs) => vs.push(value),
        }
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        QueryValue::Single(v)
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        QueryValue::Single(v.to_string())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(vs: Vec<String>) -> Self {
        QueryValue::Many(vs)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(vs: Vec<&str>) -> Self {
        QueryValue::Many(vs.into_iter().map(str::to_string).collect())
    }
}

macro_rules! query_value_from_display {
    ($($t:ty),*) => {
        $(impl From<$t> for QueryValue {
            fn from(v: $t) -> Self {
                QueryValue::Single(v.to_string())
            }
        })*
    };
}

query_value_from_display!(bool, i32, i64, u32, u64, f64);

/// An ordered key → value mapping for query or hash strings
///
/// Keys keep first-seen order; a repeated key promotes its value from
/// [`QueryValue::Single`] to [`QueryValue::Many`]. Serializes as a JSON
/// object.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryMap {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Set `key` to `value`, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Append one occurrence of `key`, promoting to multi-value on repeat.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => existing.push(value),
            None => self.pairs.push((key, QueryValue::Single(value))),
        }
    }

    /// Key/value pairs in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for QueryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (k, v) in &self.pairs {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Decode a query or hash string into a [`QueryMap`]
///
/// A single leading `?` or `#` marker is tolerated and stripped. Repeated
/// keys collect into [`QueryValue::Many`] in occurrence order.
pub fn decode(input: &str) -> QueryMap {
    let input = input
        .strip_prefix('?')
        .or_else(|| input.strip_prefix('#'))
        .unwrap_or(input);

    let mut map = QueryMap::new();
    for (key, value) in form_urlencoded::parse(input.as_bytes()) {
        map.append(key.into_owned(), value.into_owned());
    }
    map
}

/// Encode a [`QueryMap`] back into a query string (no leading marker)
///
/// Multi-values emit one `key=value` pair per value, in order, so
/// `decode(&encode(m)) == m` for any map.
pub fn encode(map: &QueryMap) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in map.iter() {
        match value {
            QueryValue::Single(v) => {
                serializer.append_pair(key, v);
            }
            QueryValue::Many(vs) => {
                for v in vs {
                    serializer.append_pair(key, v);
                }
            }
        }
    }
    serializer.finish()
}
