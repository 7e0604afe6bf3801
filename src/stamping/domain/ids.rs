//! Identifier types for the user stamp domain.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Identifier of the actor performing an operation.
///
/// Hosts key their users differently, so the identifier is opaque: an
/// integer primary key, a UUID, or free text. It serialises untagged, which
/// keeps stamp columns holding plain JSON numbers or strings.
///
/// A JSON string cannot say whether it came from [`ActorId::Text`] or
/// [`ActorId::Uuid`], so text that parses as a UUID is the same actor as
/// that UUID: equality and hashing compare the parsed form, and reading a
/// column back yields the `Uuid` variant.
///
/// # Examples
///
/// ```rust
/// use userstamps::stamping::domain::ActorId;
///
/// let actor = ActorId::Numeric(42);
/// assert_eq!(actor.to_value(), serde_json::json!(42));
///
/// let text = ActorId::from("550E8400-E29B-41D4-A716-446655440000");
/// assert_eq!(ActorId::from_value(&text.to_value()), Some(text));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActorId {
    /// Integer key.
    Numeric(i64),
    /// UUID key.
    Uuid(Uuid),
    /// Any other textual key.
    Text(String),
}

impl ActorId {
    /// Returns the JSON value written into a stamp column.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Numeric(id) => Value::from(*id),
            Self::Uuid(id) => Value::String(id.to_string()),
            Self::Text(id) => Value::String(id.clone()),
        }
    }

    /// Reads an actor identifier back out of a stamp column value.
    ///
    /// Returns `None` for null, blank strings, and values that are neither
    /// integers nor strings.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => number.as_i64().map(Self::Numeric),
            Value::String(text) if text.trim().is_empty() => None,
            Value::String(text) => Some(
                Uuid::parse_str(text).map_or_else(|_| Self::Text(text.clone()), Self::Uuid),
            ),
            _ => None,
        }
    }
}

/// Canonical form used for equality and hashing.
#[derive(PartialEq, Eq, Hash)]
enum ActorKey<'a> {
    Numeric(i64),
    Uuid(Uuid),
    Text(&'a str),
}

impl ActorId {
    fn key(&self) -> ActorKey<'_> {
        match self {
            Self::Numeric(id) => ActorKey::Numeric(*id),
            Self::Uuid(id) => ActorKey::Uuid(*id),
            Self::Text(id) => Uuid::parse_str(id).map_or(ActorKey::Text(id), ActorKey::Uuid),
        }
    }
}

impl PartialEq for ActorId {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ActorId {}

impl Hash for ActorId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<i64> for ActorId {
    fn from(value: i64) -> Self {
        Self::Numeric(value)
    }
}

impl From<Uuid> for ActorId {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<&str> for ActorId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ActorId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Uuid(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}
