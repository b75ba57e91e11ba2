//! Navigation bridge: the external collaborator that owns history and
//! location.
//!
//! The router core never touches a browser API directly. It talks to a
//! [`NavigationBridge`]: something that can report the current location,
//! push a URL onto a history stack without a page reload, and deliver a
//! "location changed" notification — fired on back/forward navigation
//! and manually after a programmatic push. Pipelines subscribe to that
//! notification for their lifetime.
//!
//! [`MemoryNavigator`] is the in-memory implementation used in tests and
//! non-browser hosts; a wasm host would implement the trait over the
//! History API instead.

mod memory;

pub use memory::MemoryNavigator;

use std::sync::Arc;

/// A parsed location: path, query string and hash fragment
///
/// `search` and `hash` are stored without their `?`/`#` markers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub path: String,
    pub search: String,
    pub hash: String,
}

impl Location {
    pub fn new(
        path: impl Into<String>,
        search: impl Into<String>,
        hash: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            search: search.into(),
            hash: hash.into(),
        }
    }

    /// Split a URL string into path / search / hash
    ///
    /// The hash is split off first, then the query, mirroring URL
    /// structure (`/path?search#hash`). An empty path normalizes to `/`.
    pub fn parse(url: &str) -> Self {
        let (rest, hash) = match url.split_once('#') {
            Some((rest, hash)) => (rest, hash),
            None => (url, ""),
        };
        let (path, search) = match rest.split_once('?') {
            Some((path, search)) => (path, search),
            None => (rest, ""),
        };
        let path = if path.is_empty() { "/" } else { path };
        Self::new(path, search, hash)
    }

    /// Reassemble into a URL string, omitting empty segments.
    pub fn to_url(&self) -> String {
        let mut url = self.path.clone();
        if !self.search.is_empty() {
            url.push('?');
            url.push_str(&self.search);
        }
        if !self.hash.is_empty() {
            url.push('#');
            url.push_str(&self.hash);
        }
        url
    }
}

/// Callback invoked on every "location changed" notification.
pub type ChangeListener = Arc<dyn Fn() + Send + Sync>;

/// Handle identifying one [`NavigationBridge`] subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// The navigation collaborator the router is wired to
///
/// Implementations must deliver notifications synchronously on
/// [`notify_changed`](Self::notify_changed) and must tolerate a listener
/// that re-enters the bridge (e.g. a route listener that immediately
/// navigates somewhere else).
pub trait NavigationBridge: Send + Sync {
    /// The current location.
    fn location(&self) -> Location;

    /// Push `url` onto the history stack without triggering a reload or
    /// a change notification. `Router::go` pushes and then notifies.
    fn push(&self, url: &str);

    /// Register a listener for "location changed" notifications.
    fn subscribe(&self, listener: ChangeListener) -> SubscriptionId;

    /// Remove a previously registered listener. Unknown ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);

    /// Fire "location changed" to all current subscribers, in
    /// subscription order.
    fn notify_changed(&self);
}
