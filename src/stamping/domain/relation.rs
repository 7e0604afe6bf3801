//! Declarative associations from a stamped record to its user entity.

use super::{ActorId, ColumnName, Record, StampDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the entity type that represents users in the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserModel(String);

impl UserModel {
    /// Creates a user model name.
    ///
    /// # Errors
    ///
    /// Returns [`StampDomainError::EmptyUserModel`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, StampDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(StampDomainError::EmptyUserModel);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the model name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UserModel {
    fn default() -> Self {
        Self("users".to_owned())
    }
}

impl fmt::Display for UserModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserModel {
    type Error = StampDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserModel> for String {
    fn from(value: UserModel) -> Self {
        value.0
    }
}

/// Many-to-one association joined on a stamp column.
///
/// The host query layer consumes this to load the related user; the
/// association itself performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BelongsTo {
    related: UserModel,
    foreign_key: ColumnName,
    owner_key: ColumnName,
}

impl BelongsTo {
    /// Owner key used on the user entity.
    pub const OWNER_KEY: &'static str = "id";

    /// Creates an association keyed on the user's `id`.
    #[must_use]
    pub fn new(related: UserModel, foreign_key: ColumnName) -> Self {
        Self {
            related,
            foreign_key,
            owner_key: ColumnName::trusted(Self::OWNER_KEY),
        }
    }

    /// Returns the related user model.
    #[must_use]
    pub const fn related(&self) -> &UserModel {
        &self.related
    }

    /// Returns the stamp column on the owning record.
    #[must_use]
    pub const fn foreign_key(&self) -> &ColumnName {
        &self.foreign_key
    }

    /// Returns the key column on the user entity.
    #[must_use]
    pub const fn owner_key(&self) -> &ColumnName {
        &self.owner_key
    }

    /// Returns the user key a record points at.
    ///
    /// `None` when the column is unset, null, or holds something other than
    /// an actor identifier.
    #[must_use]
    pub fn parent_key(&self, record: &Record) -> Option<ActorId> {
        record.stamp(&self.foreign_key)
    }
}
