//! Host lifecycle events the stamping policy reacts to.

use super::ParseLifecycleEventError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle notification raised by the host persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// A record is about to be inserted.
    Creating,
    /// A record is about to be updated.
    Updating,
    /// A record is about to be soft-deleted.
    Deleting,
    /// A soft-deleted record is about to be restored.
    Restoring,
}

impl LifecycleEvent {
    /// Events every stamped type listens to.
    pub const ALWAYS: [Self; 2] = [Self::Creating, Self::Updating];

    /// Events only soft-deletable types listen to.
    pub const SOFT_DELETE: [Self; 2] = [Self::Deleting, Self::Restoring];

    /// Returns the host's name for the event.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Creating => "creating",
            Self::Updating => "updating",
            Self::Deleting => "deleting",
            Self::Restoring => "restoring",
        }
    }

    /// Returns `true` for events that only exist on soft-deletable types.
    #[must_use]
    pub const fn requires_soft_delete(self) -> bool {
        matches!(self, Self::Deleting | Self::Restoring)
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for LifecycleEvent {
    type Error = ParseLifecycleEventError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "creating" => Ok(Self::Creating),
            "updating" => Ok(Self::Updating),
            "deleting" => Ok(Self::Deleting),
            "restoring" => Ok(Self::Restoring),
            _ => Err(ParseLifecycleEventError(value.to_owned())),
        }
    }
}
