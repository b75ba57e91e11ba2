//! In-memory navigation bridge with a real history stack.

use super::{ChangeListener, Location, NavigationBridge, SubscriptionId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::debug;

struct History {
    entries: Vec<String>,
    index: usize,
}

/// A [`NavigationBridge`] backed by an in-memory history stack
///
/// Behaves like browser history: `push` drops any forward entries and
/// appends, [`back`](Self::back)/[`forward`](Self::forward) move the
/// cursor and fire the "location changed" notification the way
/// back/forward buttons fire `popstate`. Used by tests and by hosts
/// without a browser environment.
pub struct MemoryNavigator {
    history: Mutex<History>,
    subscribers: Mutex<Vec<(SubscriptionId, ChangeListener)>>,
    next_id: AtomicU64,
}

impl MemoryNavigator {
    /// Start at `/`.
    pub fn new() -> Self {
        Self::with_initial("/")
    }

    /// Start at the given URL.
    pub fn with_initial(url: &str) -> Self {
        Self {
            history: Mutex::new(History {
                entries: vec![url.to_string()],
                index: 0,
            }),
            subscribers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// The current URL string.
    pub fn current_url(&self) -> String {
        let history = self.history.lock().expect("history lock poisoned");
        history.entries[history.index].clone()
    }

    /// Move one entry back and notify, like the browser back button.
    /// Returns false (and stays put) when already at the oldest entry.
    pub fn back(&self) -> bool {
        {
            let mut history = self.history.lock().expect("history lock poisoned");
            if history.index == 0 {
                return false;
            }
            history.index -= 1;
        }
        self.notify_changed();
        true
    }

    /// Move one entry forward and notify. Returns false at the newest
    /// entry.
    pub fn forward(&self) -> bool {
        {
            let mut history = self.history.lock().expect("history lock poisoned");
            if history.index + 1 >= history.entries.len() {
                return false;
            }
            history.index += 1;
        }
        self.notify_changed();
        true
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationBridge for MemoryNavigator {
    fn location(&self) -> Location {
        Location::parse(&self.current_url())
    }

    fn push(&self, url: &str) {
        let mut history = self.history.lock().expect("history lock poisoned");
        let cut = history.index + 1;
        history.entries.truncate(cut);
        history.entries.push(url.to_string());
        history.index = history.entries.len() - 1;
        debug!(url = %url, depth = history.entries.len(), "History push");
    }

    fn subscribe(&self, listener: ChangeListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers
            .lock()
            .expect("subscriber lock poisoned")
            .push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .lock()
            .expect("subscriber lock poisoned")
            .retain(|(sid, _)| *sid != id);
    }

    fn notify_changed(&self) {
        // Snapshot before invoking so a listener may re-enter the bridge
        // (navigate, subscribe, dispose) without deadlocking.
        let listeners: Vec<ChangeListener> = self
            .subscribers
            .lock()
            .expect("subscriber lock poisoned")
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }
}
