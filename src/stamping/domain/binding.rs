//! Per-type resolution of stamp columns and capabilities.

use super::{ColumnName, LifecycleEvent, StampColumns};

/// Everything the stamping layer needs to know about one record type.
///
/// Bindings are resolved once per type and then shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelBinding {
    model: &'static str,
    columns: StampColumns,
    soft_deletes: bool,
}

impl ModelBinding {
    /// Creates a binding from resolved columns and the soft-delete capability.
    #[must_use]
    pub const fn new(model: &'static str, columns: StampColumns, soft_deletes: bool) -> Self {
        Self {
            model,
            columns,
            soft_deletes,
        }
    }

    /// Returns the model name.
    #[must_use]
    pub const fn model(&self) -> &'static str {
        self.model
    }

    /// Returns the resolved stamp columns.
    #[must_use]
    pub const fn columns(&self) -> &StampColumns {
        &self.columns
    }

    /// Returns `true` when the type supports soft deletion.
    #[must_use]
    pub const fn soft_deletes(&self) -> bool {
        self.soft_deletes
    }

    /// Returns the "created by" column, if any.
    #[must_use]
    pub const fn created_by_column(&self) -> Option<&ColumnName> {
        self.columns.created_by()
    }

    /// Returns the "updated by" column, if any.
    #[must_use]
    pub const fn updated_by_column(&self) -> Option<&ColumnName> {
        self.columns.updated_by()
    }

    /// Returns the "deleted by" column, if any.
    #[must_use]
    pub const fn deleted_by_column(&self) -> Option<&ColumnName> {
        self.columns.deleted_by()
    }

    /// Returns the lifecycle events this type listens to.
    #[must_use]
    pub fn events(&self) -> Vec<LifecycleEvent> {
        let mut events = LifecycleEvent::ALWAYS.to_vec();
        if self.soft_deletes {
            events.extend(LifecycleEvent::SOFT_DELETE);
        }
        events
    }
}
