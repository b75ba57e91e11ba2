//! Matcher core: first-match scan over the route table and the route
//! context it produces.

use super::table::RouteTable;
use crate::query::{self, QueryMap};
use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};
use serde_json::Value;
use smallvec::SmallVec;
use std::collections::HashMap;
use tracing::debug;

/// Maximum number of path arguments before heap allocation.
/// Route patterns rarely declare more than a handful of placeholders.
pub const MAX_INLINE_ARGS: usize = 8;

/// Stack-allocated (name, value) argument storage.
///
/// A pair list rather than a map: capture order is preserved, and when a
/// placeholder name repeats within one pattern the lookup takes the last
/// capture (see [`RouteContext::arg`]).
pub type ArgVec = SmallVec<[(String, String); MAX_INLINE_ARGS]>;

/// The structured result of matching a location against the route table
///
/// Produced fresh on every match; it has no identity beyond its field
/// values. Serializes as a JSON object (`args`, `query` and `hash` as
/// nested objects) so hosts can hand it across a JS or FFI edge.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteContext {
    /// The matched route's name.
    pub name: String,
    /// The opaque payload attached at registration, unchanged.
    pub payload: Option<Value>,
    /// Captured path arguments, in capture order.
    pub args: ArgVec,
    /// Decoded query-string mapping.
    pub query: QueryMap,
    /// Decoded hash-fragment mapping.
    pub hash: QueryMap,
}

impl RouteContext {
    /// Get a path argument by name
    ///
    /// Last-capture-wins: if a placeholder name repeats within the
    /// pattern, the value of the last capture is returned.
    pub fn arg(&self, name: &str) -> Option<&str> {
        self.args
            .iter()
            .rfind(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Arguments as a map (last capture wins for repeated names).
    /// Note: this allocates; prefer [`arg`](Self::arg) for single lookups.
    pub fn args_map(&self) -> HashMap<String, String> {
        self.args
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl Serialize for RouteContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RouteContext", 5)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("payload", &self.payload)?;
        state.serialize_field("args", &ArgsAsMap(&self.args))?;
        state.serialize_field("query", &self.query)?;
        state.serialize_field("hash", &self.hash)?;
        state.end()
    }
}

/// Serializes an [`ArgVec`] as a JSON object: keys in first-capture
/// order, the last capture's value winning for repeated names.
struct ArgsAsMap<'a>(&'a ArgVec);

impl Serialize for ArgsAsMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        let mut seen: SmallVec<[&str; MAX_INLINE_ARGS]> = SmallVec::new();
        for (name, _) in self.0.iter() {
            if seen.contains(&name.as_str()) {
                continue;
            }
            seen.push(name);
            let value = self
                .0
                .iter()
                .rfind(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
                .unwrap_or_default();
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Outcome of a match attempt
///
/// "No match" is not an error: callers branch on the explicit
/// [`NotFound`](RouteMatch::NotFound) arm (e.g. to render a not-found
/// view) instead of inspecting a sentinel empty object.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteMatch {
    /// The first table entry whose matcher accepted the path.
    Found(RouteContext),
    /// No registered route matched the path.
    NotFound,
}

impl RouteMatch {
    pub fn is_found(&self) -> bool {
        matches!(self, RouteMatch::Found(_))
    }

    pub fn context(&self) -> Option<&RouteContext> {
        match self {
            RouteMatch::Found(ctx) => Some(ctx),
            RouteMatch::NotFound => None,
        }
    }

    pub fn into_context(self) -> Option<RouteContext> {
        match self {
            RouteMatch::Found(ctx) => Some(ctx),
            RouteMatch::NotFound => None,
        }
    }
}

impl RouteTable {
    /// Match a location against the table
    ///
    /// Scans entries in registration order and returns a
    /// [`RouteContext`] for the first matcher that accepts `path` in its
    /// entirety; later entries are not tried. `search` and `hash` are
    /// decoded independently of which entry matched (leading `?`/`#`
    /// markers tolerated).
    ///
    /// O(routes) with one regex evaluation each — route tables are small
    /// and location changes are user-paced, not a hot path.
    pub fn match_location(&self, path: &str, search: &str, hash: &str) -> RouteMatch {
        debug!(path = %path, routes_count = self.len(), "Route match attempt");

        for entry in self.entries() {
            let Some(caps) = entry.compiled().regex().captures(path) else {
                continue;
            };

            let mut args = ArgVec::new();
            for (i, name) in entry.compiled().param_names().iter().enumerate() {
                if let Some(group) = caps.get(i + 1) {
                    args.push((name.clone(), group.as_str().to_string()));
                }
            }

            debug!(
                path = %path,
                route = %entry.name(),
                pattern = %entry.pattern(),
                args = ?args,
                "Route matched"
            );

            return RouteMatch::Found(RouteContext {
                name: entry.name().to_string(),
                payload: entry.payload().cloned(),
                args,
                query: query::decode(search),
                hash: query::decode(hash),
            });
        }

        debug!(path = %path, "No route matched");
        RouteMatch::NotFound
    }
}
