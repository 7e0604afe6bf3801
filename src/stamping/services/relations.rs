//! Creator, editor and destroyer associations for a stamped type.

use crate::stamping::domain::{BelongsTo, ColumnName, ModelBinding, UserModel};
use std::sync::Arc;

/// Relationship accessors from a stamped type to the configured user model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStampRelations {
    user_model: UserModel,
    binding: Arc<ModelBinding>,
}

impl UserStampRelations {
    /// Creates the accessors for a resolved binding.
    #[must_use]
    pub const fn new(user_model: UserModel, binding: Arc<ModelBinding>) -> Self {
        Self {
            user_model,
            binding,
        }
    }

    /// The user that created the record.
    #[must_use]
    pub fn creator(&self) -> Option<BelongsTo> {
        self.belongs_to(self.binding.created_by_column())
    }

    /// The user that last edited the record.
    #[must_use]
    pub fn editor(&self) -> Option<BelongsTo> {
        self.belongs_to(self.binding.updated_by_column())
    }

    /// The user that soft-deleted the record.
    #[must_use]
    pub fn destroyer(&self) -> Option<BelongsTo> {
        self.belongs_to(self.binding.deleted_by_column())
    }

    fn belongs_to(&self, column: Option<&ColumnName>) -> Option<BelongsTo> {
        column.map(|foreign_key| BelongsTo::new(self.user_model.clone(), foreign_key.clone()))
    }
}
