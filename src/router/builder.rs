//! Reverse URL builder: route name + parameters → URL string.

use super::table::RouteTable;
use crate::error::RouterError;
use crate::pattern::PLACEHOLDER;
use crate::query::{self, QueryMap, QueryValue};
use std::collections::HashMap;
use tracing::debug;

/// Parameters for [`RouteTable::build_url`]
///
/// `args` fills the pattern's placeholders; `query` and `hash` are
/// appended as encoded `?`/`#` segments. Argument values are coerced to
/// strings through `ToString`, and query/hash values through
/// [`QueryValue`]'s conversions, matching the decoder's conventions so
/// built URLs round-trip through the matcher.
#[derive(Debug, Clone, Default)]
pub struct BuildParams {
    pub(crate) args: Option<HashMap<String, String>>,
    pub(crate) query: Option<QueryMap>,
    pub(crate) hash: Option<QueryMap>,
}

impl BuildParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply one path argument (string-coerced).
    pub fn arg(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.args
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.to_string());
        self
    }

    /// Supply all path arguments at once.
    pub fn args(mut self, args: HashMap<String, String>) -> Self {
        self.args = Some(args);
        self
    }

    /// Supply the whole query mapping.
    pub fn query(mut self, query: QueryMap) -> Self {
        self.query = Some(query);
        self
    }

    /// Add one query pair.
    pub fn query_pair(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.get_or_insert_with(QueryMap::new).set(key, value);
        self
    }

    /// Supply the whole hash mapping.
    pub fn hash(mut self, hash: QueryMap) -> Self {
        self.hash = Some(hash);
        self
    }

    /// Add one hash pair.
    pub fn hash_pair(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.hash.get_or_insert_with(QueryMap::new).set(key, value);
        self
    }
}

impl RouteTable {
    /// Build a URL for a named route
    ///
    /// An unknown `name` is echoed back unchanged — a silent fallback
    /// that lets callers pass arbitrary literal URLs through without
    /// special-casing. A known route with declared parameters fails with
    /// [`RouterError::MissingArgs`] when the supplied args are absent or
    /// incomplete, listing the declared parameter names in declaration
    /// order.
    ///
    /// The query segment, when present, is appended after `?`; the hash
    /// segment after `#`, always last regardless of the order the caller
    /// supplied them.
    pub fn build_url(&self, name: &str, params: &BuildParams) -> Result<String, RouterError> {
        let Some(entry) = self.lookup(name) else {
            debug!(name = %name, "Unknown route name, passing through unchanged");
            return Ok(name.to_string());
        };

        let declared = entry.compiled().param_names();
        let mut url = if declared.is_empty() {
            entry.pattern().to_string()
        } else {
            let missing_args = || RouterError::MissingArgs {
                route: name.to_string(),
                expected: declared.to_vec(),
            };
            let args = params.args.as_ref().ok_or_else(missing_args)?;
            if declared.iter().any(|p| !args.contains_key(p)) {
                return Err(missing_args());
            }
            substitute(entry.pattern(), args)
        };

        if let Some(q) = &params.query {
            url.push('?');
            url.push_str(&query::encode(q));
        }
        if let Some(h) = &params.hash {
            url.push('#');
            url.push_str(&query::encode(h));
        }

        Ok(url)
    }
}

/// Replace each placeholder token with its argument value, left to right.
/// All declared names are known to be present in `args`.
fn substitute(pattern: &str, args: &HashMap<String, String>) -> String {
    let mut url = String::with_capacity(pattern.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(pattern) {
        let token = caps.get(0).expect("capture 0 always present");
        url.push_str(&pattern[last..token.start()]);
        if let Some(value) = args.get(&caps[1]) {
            url.push_str(value);
        }
        last = token.end();
    }

    url.push_str(&pattern[last..]);
    url
}
