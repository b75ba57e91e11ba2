//! The `Router` facade: the registration API surface tying the route
//! table, the navigation bridge and the pipelines together.

use crate::error::RouterError;
use crate::nav::{Location, MemoryNavigator, NavigationBridge};
use crate::pipeline::EventPipeline;
use crate::router::{BuildParams, RouteDef, RouteMatch, RouteTable};
use serde_json::Value;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// A client-side URL router
///
/// Owns the one route table shared by every pipeline it creates, and the
/// handle to the navigation bridge. The table is an explicitly
/// constructed instance, not process-wide state: independent `Router`s
/// (in tests, say) have independent tables, while one application-wide
/// instance reproduces the usual "one table per application" setup.
///
/// ```
/// use waypost::{BuildParams, Router};
///
/// let router = Router::in_memory();
/// router.register("home", "/", None).unwrap();
/// router.register("books", "/books/:id", None).unwrap();
///
/// let pipeline = router.create_pipeline();
/// pipeline.connect(|outcome| {
///     if let Some(ctx) = outcome.context() {
///         println!("now at {}", ctx.name);
///     }
/// });
///
/// let url = router
///     .build_url("books", &BuildParams::new().arg("id", 12))
///     .unwrap();
/// router.go(&url);
/// ```
pub struct Router {
    table: Arc<RwLock<RouteTable>>,
    nav: Arc<dyn NavigationBridge>,
}

impl Router {
    /// Create a router wired to the given navigation bridge.
    pub fn new(nav: Arc<dyn NavigationBridge>) -> Self {
        Self {
            table: Arc::new(RwLock::new(RouteTable::new())),
            nav,
        }
    }

    /// Create a router over an in-memory [`MemoryNavigator`], for tests
    /// and non-browser hosts.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryNavigator::new()))
    }

    fn table_read(&self) -> RwLockReadGuard<'_, RouteTable> {
        self.table.read().expect("route table lock poisoned")
    }

    fn table_write(&self) -> RwLockWriteGuard<'_, RouteTable> {
        self.table.write().expect("route table lock poisoned")
    }

    /// Register a named route. See [`RouteTable::register`].
    pub fn register(
        &self,
        name: &str,
        pattern: &str,
        payload: Option<Value>,
    ) -> Result<(), RouterError> {
        self.table_write().register(name, pattern, payload)
    }

    /// Register several routes in order, failing fast at the first
    /// duplicate. See [`RouteTable::register_many`].
    pub fn register_many<I>(&self, defs: I) -> Result<(), RouterError>
    where
        I: IntoIterator<Item = RouteDef>,
    {
        self.table_write().register_many(defs)
    }

    /// Empty the route table. Test/reset operation only.
    pub fn clear(&self) {
        self.table_write().clear();
    }

    /// Number of registered routes.
    pub fn route_count(&self) -> usize {
        self.table_read().len()
    }

    /// Match a location against the table. See
    /// [`RouteTable::match_location`].
    pub fn match_location(&self, path: &str, search: &str, hash: &str) -> RouteMatch {
        self.table_read().match_location(path, search, hash)
    }

    /// Build a URL for a named route. See [`RouteTable::build_url`].
    pub fn build_url(&self, name: &str, params: &BuildParams) -> Result<String, RouterError> {
        self.table_read().build_url(name, params)
    }

    /// Navigate to `url`
    ///
    /// A thin pass-through: push the URL via the navigation bridge, then
    /// fire the "location changed" notification so every live pipeline
    /// re-evaluates.
    pub fn go(&self, url: &str) {
        debug!(url = %url, "Navigate");
        self.nav.push(url);
        self.nav.notify_changed();
    }

    /// Fire the "location changed" notification once, without
    /// navigating — call at startup, after routes and pipelines are set
    /// up, to emit the initial route.
    pub fn start_initial_dispatch(&self) {
        debug!("Initial dispatch");
        self.nav.notify_changed();
    }

    /// Create a pipeline with no transform stage
    ///
    /// The pipeline subscribes itself to the bridge's "location changed"
    /// notification until disposed; keep the returned handle alive for
    /// as long as it should receive navigation events.
    pub fn create_pipeline(&self) -> EventPipeline {
        EventPipeline::new(self.table.clone(), self.nav.clone(), None)
    }

    /// Create a pipeline whose transform stage rewrites the location
    /// before matching (e.g. stripping a path prefix).
    pub fn create_pipeline_with<F>(&self, transform: F) -> EventPipeline
    where
        F: Fn(Location) -> Location + Send + Sync + 'static,
    {
        EventPipeline::new(
            self.table.clone(),
            self.nav.clone(),
            Some(Box::new(transform)),
        )
    }

    /// The navigation bridge this router is wired to.
    pub fn navigator(&self) -> Arc<dyn NavigationBridge> {
        self.nav.clone()
    }
}
