//! In-memory host event system.
//!
//! A minimal stand-in for a persistence layer's per-type event registry,
//! used to drive stamped models through their lifecycle without a
//! database.

use crate::stamping::{
    domain::LifecycleEvent,
    ports::{GlobalScope, Listener, ModelEvents},
};
use std::collections::HashMap;
use std::fmt;

/// Query built against the in-memory host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryQuery {
    /// Filter clauses added by global scopes.
    pub filters: Vec<String>,
}

/// Per-type listener and scope registry for model `M`.
pub struct InMemoryModelEvents<M> {
    listeners: HashMap<LifecycleEvent, Vec<Listener<M>>>,
    scopes: Vec<Box<dyn GlobalScope<InMemoryQuery>>>,
}

impl<M> InMemoryModelEvents<M> {
    /// Creates a registry with no listeners or scopes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: HashMap::new(),
            scopes: Vec::new(),
        }
    }

    /// Fires `event` for `model`, running listeners in registration order.
    ///
    /// Returns the number of listeners that ran.
    pub fn dispatch(&self, event: LifecycleEvent, model: &mut M) -> usize {
        let Some(listeners) = self.listeners.get(&event) else {
            return 0;
        };
        for listener in listeners {
            listener(&mut *model);
        }
        listeners.len()
    }

    /// Returns the number of listeners registered for `event`.
    #[must_use]
    pub fn listener_count(&self, event: LifecycleEvent) -> usize {
        self.listeners.get(&event).map_or(0, Vec::len)
    }

    /// Returns the names of the registered global scopes.
    #[must_use]
    pub fn scope_names(&self) -> Vec<&'static str> {
        self.scopes.iter().map(|scope| scope.name()).collect()
    }

    /// Builds a query for `model` with every global scope applied.
    #[must_use]
    pub fn query(&self, model: &'static str) -> InMemoryQuery {
        let mut query = InMemoryQuery::default();
        for scope in &self.scopes {
            scope.apply(&mut query, model);
        }
        query
    }
}

impl<M> Default for InMemoryModelEvents<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for InMemoryModelEvents<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<(LifecycleEvent, usize)> = self
            .listeners
            .iter()
            .map(|(event, listeners)| (*event, listeners.len()))
            .collect();
        counts.sort_by_key(|(event, _)| event.as_str());
        f.debug_struct("InMemoryModelEvents")
            .field("listeners", &counts)
            .field("scopes", &self.scope_names())
            .finish()
    }
}

impl<M> ModelEvents<M> for InMemoryModelEvents<M> {
    type Query = InMemoryQuery;

    fn listen(&mut self, event: LifecycleEvent, listener: Listener<M>) {
        self.listeners.entry(event).or_default().push(listener);
    }

    fn add_global_scope(&mut self, scope: Box<dyn GlobalScope<InMemoryQuery>>) {
        self.scopes.push(scope);
    }

    fn has_global_scope(&self, name: &str) -> bool {
        self.scopes.iter().any(|scope| scope.name() == name)
    }
}
