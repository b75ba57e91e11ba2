//! Event pipeline: navigation notifications → route context delivery.
//!
//! A pipeline is a three-stage synchronous chain, run once per
//! "location changed" notification:
//!
//! 1. **source** — read the current [`Location`] from the navigation
//!    bridge;
//! 2. **transform** — an optional caller-supplied stage that rewrites
//!    the location before matching (e.g. stripping a prefix);
//! 3. **terminal** — match the location against the shared route table
//!    and deliver the resulting [`RouteMatch`] to every connected
//!    listener, in connection order.
//!
//! Each pipeline subscribes itself to the bridge on construction and
//! stays subscribed until [`EventPipeline::dispose`] (or drop). Multiple
//! pipelines may coexist, each with its own listener list and transform,
//! but all of them consult the same route table — there is exactly one
//! table per [`Router`](crate::Router).

use crate::nav::{Location, NavigationBridge, SubscriptionId};
use crate::router::{RouteMatch, RouteTable};
use std::sync::{Arc, Mutex, RwLock, Weak};
use tracing::debug;

/// Optional location-rewriting stage.
pub type Transform = Box<dyn Fn(Location) -> Location + Send + Sync>;

type Listener = Arc<dyn Fn(&RouteMatch) + Send + Sync>;

struct PipelineInner {
    table: Arc<RwLock<RouteTable>>,
    nav: Arc<dyn NavigationBridge>,
    transform: Option<Transform>,
    listeners: Mutex<Vec<Listener>>,
    subscription: Mutex<Option<SubscriptionId>>,
}

impl PipelineInner {
    /// One synchronous pass: source → transform → match → fanout.
    fn run(&self) {
        let location = self.nav.location();
        let location = match &self.transform {
            Some(transform) => transform(location),
            None => location,
        };

        let outcome = self
            .table
            .read()
            .expect("route table lock poisoned")
            .match_location(&location.path, &location.search, &location.hash);

        // Snapshot so a listener may connect/dispose/navigate re-entrantly.
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .expect("listener lock poisoned")
            .clone();

        debug!(
            path = %location.path,
            matched = outcome.is_found(),
            listeners = listeners.len(),
            "Pipeline emission"
        );

        for listener in &listeners {
            listener(&outcome);
        }
    }
}

/// A single-subscriber-fanout push pipeline
///
/// Created by [`Router::create_pipeline`](crate::Router::create_pipeline).
/// All delivery is synchronous and sequential: `trigger` (and every
/// navigation notification) returns only after every connected listener
/// has been invoked.
pub struct EventPipeline {
    inner: Arc<PipelineInner>,
}

impl EventPipeline {
    pub(crate) fn new(
        table: Arc<RwLock<RouteTable>>,
        nav: Arc<dyn NavigationBridge>,
        transform: Option<Transform>,
    ) -> Self {
        let inner = Arc::new(PipelineInner {
            table,
            nav,
            transform,
            listeners: Mutex::new(Vec::new()),
            subscription: Mutex::new(None),
        });

        // The bridge callback holds a Weak so a dropped pipeline never
        // keeps itself alive through its own subscription.
        let weak: Weak<PipelineInner> = Arc::downgrade(&inner);
        let id = inner.nav.subscribe(Arc::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.run();
            }
        }));
        *inner
            .subscription
            .lock()
            .expect("subscription lock poisoned") = Some(id);

        Self { inner }
    }

    /// Connect a listener to receive every future emission
    ///
    /// Listeners are appended to an ordered list; each emission invokes
    /// all of them, in connection order.
    pub fn connect<F>(&self, listener: F)
    where
        F: Fn(&RouteMatch) + Send + Sync + 'static,
    {
        self.inner
            .listeners
            .lock()
            .expect("listener lock poisoned")
            .push(Arc::new(listener));
    }

    /// Run the pipeline once, synchronously, delivering one
    /// [`RouteMatch`] to all connected listeners before returning.
    pub fn trigger(&self) {
        self.inner.run();
    }

    /// Detach from the navigation-event source
    ///
    /// After disposal, external navigation no longer triggers this
    /// pipeline; manual [`trigger`](Self::trigger) still works.
    /// Idempotent, and a permanent unsubscribe, not a mid-emission
    /// cancellation.
    pub fn dispose(&self) {
        let taken = self
            .inner
            .subscription
            .lock()
            .expect("subscription lock poisoned")
            .take();
        if let Some(id) = taken {
            self.inner.nav.unsubscribe(id);
            debug!("Pipeline disposed");
        }
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.inner
            .subscription
            .lock()
            .expect("subscription lock poisoned")
            .is_none()
    }
}

impl Drop for EventPipeline {
    fn drop(&mut self) {
        self.dispose();
    }
}
