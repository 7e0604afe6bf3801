//! Stamp column names and their per-type resolution.

use super::StampDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a column name, matching the `PostgreSQL` identifier limit.
const MAX_COLUMN_LENGTH: usize = 63;

/// Validated SQL column identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColumnName(String);

impl ColumnName {
    /// Creates a validated column name.
    ///
    /// The input is trimmed. Only ASCII alphanumerics and underscores are
    /// accepted and the name must not start with a digit.
    ///
    /// # Errors
    ///
    /// Returns [`StampDomainError::EmptyColumnName`] when the value is empty
    /// after trimming, [`StampDomainError::ColumnNameTooLong`] when it exceeds
    /// 63 bytes, or [`StampDomainError::InvalidColumnName`] when it is not a
    /// plain identifier.
    pub fn new(value: impl Into<String>) -> Result<Self, StampDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(StampDomainError::EmptyColumnName);
        }

        if trimmed.len() > MAX_COLUMN_LENGTH {
            return Err(StampDomainError::ColumnNameTooLong(raw));
        }

        let starts_with_digit = trimmed.starts_with(|c: char| c.is_ascii_digit());
        let is_identifier = trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');

        if starts_with_digit || !is_identifier {
            return Err(StampDomainError::InvalidColumnName(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the column name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wraps a name known to be a valid identifier.
    pub(super) fn trusted(name: &'static str) -> Self {
        Self(name.to_owned())
    }
}

impl AsRef<str> for ColumnName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ColumnName {
    type Error = StampDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ColumnName> for String {
    fn from(value: ColumnName) -> Self {
        value.0
    }
}

/// The three logical stamp columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StampColumn {
    /// Actor that created the record.
    CreatedBy,
    /// Actor that last updated the record.
    UpdatedBy,
    /// Actor that soft-deleted the record.
    DeletedBy,
}

impl StampColumn {
    /// Returns the column name used when a type declares no override.
    #[must_use]
    pub const fn default_name(self) -> &'static str {
        match self {
            Self::CreatedBy => "created_by",
            Self::UpdatedBy => "updated_by",
            Self::DeletedBy => "deleted_by",
        }
    }

    /// Returns the logical label, independent of any per-type override.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedBy => "created-by",
            Self::UpdatedBy => "updated-by",
            Self::DeletedBy => "deleted-by",
        }
    }
}

impl fmt::Display for StampColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-type declaration for a single stamp column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnOverride {
    /// Use the default column name.
    #[default]
    Default,
    /// Use the given column name.
    Named(&'static str),
    /// The type has no such column; the matching handler does nothing.
    Disabled,
}

/// Resolved stamp column names for one record type.
///
/// # Examples
///
/// ```rust
/// use userstamps::stamping::domain::{ColumnOverride, StampColumns};
///
/// let columns = StampColumns::resolve(
///     ColumnOverride::Named("author_id"),
///     ColumnOverride::Default,
///     ColumnOverride::Disabled,
/// )
/// .expect("valid overrides");
///
/// assert_eq!(columns.created_by().map(|c| c.as_str()), Some("author_id"));
/// assert_eq!(columns.updated_by().map(|c| c.as_str()), Some("updated_by"));
/// assert!(columns.deleted_by().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampColumns {
    created_by: Option<ColumnName>,
    updated_by: Option<ColumnName>,
    deleted_by: Option<ColumnName>,
}

impl Default for StampColumns {
    fn default() -> Self {
        Self {
            created_by: Some(ColumnName::trusted(StampColumn::CreatedBy.default_name())),
            updated_by: Some(ColumnName::trusted(StampColumn::UpdatedBy.default_name())),
            deleted_by: Some(ColumnName::trusted(StampColumn::DeletedBy.default_name())),
        }
    }
}

impl StampColumns {
    /// Applies per-column overrides to the default column names.
    ///
    /// # Errors
    ///
    /// Returns [`StampDomainError`] when a named override is not a valid
    /// column name.
    pub fn resolve(
        created_by: ColumnOverride,
        updated_by: ColumnOverride,
        deleted_by: ColumnOverride,
    ) -> Result<Self, StampDomainError> {
        Ok(Self {
            created_by: resolve_one(StampColumn::CreatedBy, created_by)?,
            updated_by: resolve_one(StampColumn::UpdatedBy, updated_by)?,
            deleted_by: resolve_one(StampColumn::DeletedBy, deleted_by)?,
        })
    }

    /// Returns the "created by" column, if the type has one.
    #[must_use]
    pub const fn created_by(&self) -> Option<&ColumnName> {
        self.created_by.as_ref()
    }

    /// Returns the "updated by" column, if the type has one.
    #[must_use]
    pub const fn updated_by(&self) -> Option<&ColumnName> {
        self.updated_by.as_ref()
    }

    /// Returns the "deleted by" column, if the type has one.
    #[must_use]
    pub const fn deleted_by(&self) -> Option<&ColumnName> {
        self.deleted_by.as_ref()
    }

    /// Returns the column configured for a logical stamp column.
    #[must_use]
    pub const fn column(&self, column: StampColumn) -> Option<&ColumnName> {
        match column {
            StampColumn::CreatedBy => self.created_by(),
            StampColumn::UpdatedBy => self.updated_by(),
            StampColumn::DeletedBy => self.deleted_by(),
        }
    }
}

fn resolve_one(
    column: StampColumn,
    declared: ColumnOverride,
) -> Result<Option<ColumnName>, StampDomainError> {
    match declared {
        ColumnOverride::Default => Ok(Some(ColumnName::trusted(column.default_name()))),
        ColumnOverride::Named(name) => ColumnName::new(name).map(Some),
        ColumnOverride::Disabled => Ok(None),
    }
}
