//! # waypost
//!
//! **waypost** is a client-side URL router: it keeps a table of named
//! route patterns, matches the current location against that table, and
//! emits a structured [`RouteContext`] to subscribers whenever the
//! location changes. It also walks the other direction, rebuilding a URL
//! string from a route name and parameters.
//!
//! ## Architecture
//!
//! - **[`pattern`]** — the pattern compiler: `/books/:slug-:id` →
//!   anchored regex with one non-greedy capture group per placeholder,
//!   plus the ordered placeholder names.
//! - **[`router`]** — the registration-ordered [`RouteTable`], the
//!   first-match [`matcher`](RouteTable::match_location), and the
//!   reverse [`URL builder`](RouteTable::build_url).
//! - **[`query`]** — the query-string codec ([`QueryMap`] /
//!   [`QueryValue`]) with ordered multi-value support, used for both the
//!   `?query` and `#hash` portions of a location.
//! - **[`nav`]** — the [`NavigationBridge`] trait over the external
//!   history/location owner, and [`MemoryNavigator`], an in-memory
//!   implementation with a real back/forward stack.
//! - **[`pipeline`]** — [`EventPipeline`]: a synchronous
//!   source → transform → matcher chain fanning out to listeners, run
//!   once per navigation notification.
//! - **[`app`]** — the [`Router`] facade tying it all together.
//!
//! Everything is synchronous and event-driven: a navigation notification
//! makes one pass through each live pipeline, invoking its listeners in
//! connection order before control returns to the notifier.
//!
//! ## Quick start
//!
//! ```
//! use waypost::{BuildParams, RouteMatch, Router};
//!
//! let router = Router::in_memory();
//! router.register("home", "/", None).unwrap();
//! router.register("books", "/books/:id", None).unwrap();
//!
//! let pipeline = router.create_pipeline();
//! pipeline.connect(|outcome| match outcome {
//!     RouteMatch::Found(ctx) => println!("route: {}", ctx.name),
//!     RouteMatch::NotFound => println!("not found"),
//! });
//!
//! // Emit the initial route, then navigate.
//! router.start_initial_dispatch();
//! router.go("/books/12?show=author&show=isbn#menu=1");
//!
//! // And back out: name + params → URL.
//! let url = router
//!     .build_url("books", &BuildParams::new().arg("id", 12))
//!     .unwrap();
//! assert_eq!(url, "/books/12");
//! ```
//!
//! Registration order matters: the matcher returns the first entry that
//! accepts the path, so register specific patterns before general ones.

pub mod app;
pub mod error;
pub mod nav;
pub mod pattern;
pub mod pipeline;
pub mod query;
pub mod router;

pub use app::Router;
pub use error::RouterError;
pub use nav::{Location, MemoryNavigator, NavigationBridge, SubscriptionId};
pub use pattern::{compile, CompiledPattern};
pub use pipeline::{EventPipeline, Transform};
pub use query::{QueryMap, QueryValue};
pub use router::{
    ArgVec, BuildParams, RouteContext, RouteDef, RouteEntry, RouteMatch, RouteTable,
    MAX_INLINE_ARGS,
};
