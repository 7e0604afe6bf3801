//! Host event and scope registration port.

use crate::stamping::domain::LifecycleEvent;

/// Handler invoked by the host when a lifecycle event fires for a model.
pub type Listener<M> = Box<dyn Fn(&mut M) + Send + Sync>;

/// Read-time filter the host applies to every query for a model type.
pub trait GlobalScope<Q>: Send + Sync {
    /// Name the host registers the scope under.
    fn name(&self) -> &'static str;

    /// Applies the scope to a query for `model`.
    fn apply(&self, query: &mut Q, model: &'static str);
}

/// Registration surface of the host's per-type event system.
///
/// Implemented by the host persistence layer; the stamping layer only
/// registers against it and never dispatches events itself.
pub trait ModelEvents<M> {
    /// Query type the host's global scopes operate on.
    type Query;

    /// Registers a listener for a lifecycle event on `M`.
    fn listen(&mut self, event: LifecycleEvent, listener: Listener<M>);

    /// Registers a global scope for `M`.
    fn add_global_scope(&mut self, scope: Box<dyn GlobalScope<Self::Query>>);

    /// Returns `true` when a global scope named `name` is registered for `M`.
    fn has_global_scope(&self, name: &str) -> bool;
}
