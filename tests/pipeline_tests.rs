//! Tests for the navigation event pipeline
//!
//! # Test Coverage
//!
//! - Listener fanout: every listener, once per emission, in connection
//!   order, with identical content
//! - go() and start_initial_dispatch() driving live pipelines
//! - The optional transform stage rewriting locations before matching
//! - dispose(): idempotent detach from navigation events
//! - Back/forward navigation on the in-memory bridge
//! - Multiple pipelines sharing one route table

use std::sync::{Arc, Mutex};
use waypost::{MemoryNavigator, RouteMatch, Router};

use tracing_util::TestTracing;

/// Collects the route names (or "<none>") each emission delivered.
#[derive(Clone, Default)]
struct Recorder {
    seen: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn record(&self, outcome: &RouteMatch) {
        let label = match outcome.context() {
            Some(ctx) => ctx.name.clone(),
            None => "<none>".to_string(),
        };
        self.seen.lock().unwrap().push(label);
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

fn book_router() -> Router {
    let router = Router::in_memory();
    router.register("home", "/", None).unwrap();
    router.register("books", "/books/:id", None).unwrap();
    router
}

#[test]
fn test_two_listeners_invoked_once_each_in_connection_order() {
    let router = book_router();
    let pipeline = router.create_pipeline();

    let order = Arc::new(Mutex::new(Vec::new()));
    let contexts = Arc::new(Mutex::new(Vec::new()));

    let (o, c) = (order.clone(), contexts.clone());
    pipeline.connect(move |outcome| {
        o.lock().unwrap().push("first");
        c.lock().unwrap().push(outcome.clone());
    });
    let (o, c) = (order.clone(), contexts.clone());
    pipeline.connect(move |outcome| {
        o.lock().unwrap().push("second");
        c.lock().unwrap().push(outcome.clone());
    });

    pipeline.trigger();

    assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    let contexts = contexts.lock().unwrap();
    assert_eq!(contexts.len(), 2);
    assert_eq!(contexts[0], contexts[1]);
}

#[test]
fn test_go_pushes_and_triggers_pipelines() {
    let _tracing = TestTracing::init();
    let router = book_router();
    let pipeline = router.create_pipeline();
    let recorder = Recorder::default();

    let r = recorder.clone();
    pipeline.connect(move |outcome| r.record(outcome));

    router.go("/books/12");
    router.go("/nowhere");

    assert_eq!(recorder.seen(), vec!["books", "<none>"]);
}

#[test]
fn test_delivered_context_carries_args_query_hash() {
    let router = book_router();
    let pipeline = router.create_pipeline();
    let last = Arc::new(Mutex::new(None));

    let l = last.clone();
    pipeline.connect(move |outcome| {
        *l.lock().unwrap() = outcome.clone().into_context();
    });

    router.go("/books/12?show=author&show=isbn#menu=1");

    let ctx = last.lock().unwrap().clone().expect("should have matched");
    assert_eq!(ctx.name, "books");
    assert_eq!(ctx.arg("id"), Some("12"));
    assert_eq!(ctx.query.get("show").unwrap().values(), vec!["author", "isbn"]);
    assert_eq!(ctx.hash.get("menu").unwrap().as_single(), Some("1"));
}

#[test]
fn test_start_initial_dispatch_emits_current_route_once() {
    let router = book_router();
    let pipeline = router.create_pipeline();
    let recorder = Recorder::default();

    let r = recorder.clone();
    pipeline.connect(move |outcome| r.record(outcome));

    router.start_initial_dispatch();
    assert_eq!(recorder.seen(), vec!["home"]);
}

#[test]
fn test_transform_rewrites_location_before_matching() {
    let router = book_router();
    let pipeline = router.create_pipeline_with(|mut location| {
        if let Some(stripped) = location.path.strip_prefix("/app") {
            location.path = if stripped.is_empty() {
                "/".to_string()
            } else {
                stripped.to_string()
            };
        }
        location
    });
    let recorder = Recorder::default();

    let r = recorder.clone();
    pipeline.connect(move |outcome| r.record(outcome));

    router.go("/app/books/7");
    router.go("/app");

    assert_eq!(recorder.seen(), vec!["books", "home"]);
}

#[test]
fn test_dispose_detaches_from_navigation_events() {
    let router = book_router();
    let pipeline = router.create_pipeline();
    let recorder = Recorder::default();

    let r = recorder.clone();
    pipeline.connect(move |outcome| r.record(outcome));

    router.go("/books/1");
    pipeline.dispose();
    pipeline.dispose(); // idempotent
    assert!(pipeline.is_disposed());

    router.go("/books/2");
    assert_eq!(recorder.seen(), vec!["books"]);

    // Manual trigger still works after disposal.
    pipeline.trigger();
    assert_eq!(recorder.seen(), vec!["books", "books"]);
}

#[test]
fn test_dropped_pipeline_no_longer_receives_events() {
    let router = book_router();
    let recorder = Recorder::default();

    {
        let pipeline = router.create_pipeline();
        let r = recorder.clone();
        pipeline.connect(move |outcome| r.record(outcome));
        router.go("/books/1");
    }

    router.go("/books/2");
    assert_eq!(recorder.seen(), vec!["books"]);
}

#[test]
fn test_multiple_pipelines_share_one_table() {
    let router = book_router();
    let plain = router.create_pipeline();
    let prefixed = router.create_pipeline_with(|mut location| {
        location.path = format!("/books{}", location.path);
        location
    });

    let plain_rec = Recorder::default();
    let prefixed_rec = Recorder::default();
    let r = plain_rec.clone();
    plain.connect(move |outcome| r.record(outcome));
    let r = prefixed_rec.clone();
    prefixed.connect(move |outcome| r.record(outcome));

    router.go("/42");

    // One table, two pipelines, each with its own view of the location.
    assert_eq!(plain_rec.seen(), vec!["<none>"]);
    assert_eq!(prefixed_rec.seen(), vec!["books"]);
}

#[test]
fn test_back_and_forward_retrigger_pipelines() {
    let nav = Arc::new(MemoryNavigator::new());
    let router = Router::new(nav.clone());
    router.register("home", "/", None).unwrap();
    router.register("books", "/books/:id", None).unwrap();

    let pipeline = router.create_pipeline();
    let recorder = Recorder::default();
    let r = recorder.clone();
    pipeline.connect(move |outcome| r.record(outcome));

    router.go("/books/1");
    nav.back();
    nav.forward();

    assert_eq!(recorder.seen(), vec!["books", "home", "books"]);
}

#[test]
fn test_listener_may_navigate_reentrantly() {
    let router = Arc::new(book_router());
    let pipeline = router.create_pipeline();
    let recorder = Recorder::default();

    let r = recorder.clone();
    let redirecting = router.clone();
    pipeline.connect(move |outcome| {
        r.record(outcome);
        // Redirect the not-found state to home, once.
        if !outcome.is_found() && redirecting.navigator().location().path != "/" {
            redirecting.go("/");
        }
    });

    router.go("/nowhere");
    assert_eq!(recorder.seen(), vec!["<none>", "home"]);
}
