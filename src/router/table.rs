//! The route table: named entries in registration order.

use crate::error::RouterError;
use crate::pattern::{self, CompiledPattern};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// One registered route
///
/// Pattern compilation happens once, at registration; matching and URL
/// building both work from the stored compiled form. Entries are
/// immutable once registered and shared via `Arc` so a match result can
/// outlive table mutations.
#[derive(Debug)]
pub struct RouteEntry {
    name: String,
    pattern: String,
    compiled: CompiledPattern,
    payload: Option<Value>,
}

impl RouteEntry {
    /// The unique route name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pattern string as registered.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The compiled matcher for this pattern.
    pub fn compiled(&self) -> &CompiledPattern {
        &self.compiled
    }

    /// The opaque payload attached at registration, if any.
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }
}

/// A route definition for bulk registration.
#[derive(Debug, Clone)]
pub struct RouteDef {
    pub name: String,
    pub pattern: String,
    pub payload: Option<Value>,
}

impl RouteDef {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// An ordered collection of named routes
///
/// Entries keep registration order, and that order is semantically
/// significant: the matcher scans front to back and stops at the first
/// hit, so more specific patterns must be registered before more general
/// ones. Names are unique; a colliding registration is rejected and the
/// existing entry kept.
#[derive(Debug, Default)]
pub struct RouteTable {
    entries: Vec<Arc<RouteEntry>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[Arc<RouteEntry>] {
        &self.entries
    }

    /// Find an entry by name.
    pub fn lookup(&self, name: &str) -> Option<&Arc<RouteEntry>> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// Register a route at the end of the table
    ///
    /// Compiles `pattern` and appends the entry. Fails with
    /// [`RouterError::DuplicateRoute`] when `name` is taken, leaving the
    /// table unchanged (the first registration wins).
    pub fn register(
        &mut self,
        name: &str,
        pattern: &str,
        payload: Option<Value>,
    ) -> Result<(), RouterError> {
        if self.lookup(name).is_some() {
            warn!(route = %name, "Duplicate route name rejected");
            return Err(RouterError::DuplicateRoute {
                name: name.to_string(),
            });
        }

        let compiled = pattern::compile(pattern);
        info!(
            route = %name,
            pattern = %pattern,
            routes_count = self.entries.len() + 1,
            "Route registered"
        );
        self.entries.push(Arc::new(RouteEntry {
            name: name.to_string(),
            pattern: pattern.to_string(),
            compiled,
            payload,
        }));
        Ok(())
    }

    /// Register several routes in iteration order
    ///
    /// Fails fast at the first duplicate name; entries registered before
    /// the failure stay in the table.
    pub fn register_many<I>(&mut self, defs: I) -> Result<(), RouterError>
    where
        I: IntoIterator<Item = RouteDef>,
    {
        for def in defs {
            self.register(&def.name, &def.pattern, def.payload)?;
        }
        Ok(())
    }

    /// Remove every entry, freeing all names for re-registration.
    pub fn clear(&mut self) {
        info!(routes_count = self.entries.len(), "Route table cleared");
        self.entries.clear();
    }
}
