//! Result of running a single stamping handler.

use super::{ActorId, ColumnName};
use std::fmt;

/// What a stamping handler did to the record it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StampOutcome {
    /// The column now holds the acting user.
    Stamped {
        /// Column that was written.
        column: ColumnName,
        /// Actor written into the column.
        actor: ActorId,
    },
    /// The column was set to null.
    Cleared {
        /// Column that was written.
        column: ColumnName,
    },
    /// The record was left untouched.
    Skipped(SkipReason),
}

impl StampOutcome {
    /// Returns `true` when the handler wrote to the record.
    #[must_use]
    pub const fn is_write(&self) -> bool {
        !matches!(self, Self::Skipped(_))
    }
}

/// Why a handler left the record untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Stamping was stopped on the record instance.
    StampingDisabled,
    /// The record type has no column for this stamp.
    ColumnNotConfigured,
    /// No actor is authenticated.
    NoActor,
}

impl SkipReason {
    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StampingDisabled => "stamping_disabled",
            Self::ColumnNotConfigured => "column_not_configured",
            Self::NoActor => "no_actor",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
