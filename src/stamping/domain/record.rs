//! Attribute bag for a persisted record instance.

use super::{ActorId, ColumnName};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// In-memory attributes of one record, plus its transient stamping switch.
///
/// A column can be unset (absent), null, or hold a value; stamping
/// distinguishes the first two. The stamping switch is never serialised and
/// every newly materialised record starts with stamping enabled.
///
/// # Examples
///
/// ```rust
/// use userstamps::stamping::domain::Record;
///
/// let mut record = Record::new().with_attribute("title", "Draft");
/// assert!(record.is_user_stamping());
///
/// record.stop_user_stamping();
/// assert!(!record.is_user_stamping());
/// assert_eq!(record.get("title"), Some(&serde_json::json!("Draft")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    attributes: BTreeMap<String, Value>,
    #[serde(skip, default = "stamping_enabled")]
    user_stamping: bool,
}

const fn stamping_enabled() -> bool {
    true
}

impl Default for Record {
    fn default() -> Self {
        Self {
            attributes: BTreeMap::new(),
            user_stamping: stamping_enabled(),
        }
    }
}

impl Record {
    /// Creates an empty record with stamping enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute while building a record.
    #[must_use]
    pub fn with_attribute(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(column, value);
        self
    }

    /// Returns an attribute, or `None` when it is unset.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.attributes.get(column)
    }

    /// Returns `true` when the attribute is present, even if null.
    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.attributes.contains_key(column)
    }

    /// Sets an attribute.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(column.into(), value.into());
    }

    /// Removes an attribute, returning its previous value.
    pub fn remove(&mut self, column: &str) -> Option<Value> {
        self.attributes.remove(column)
    }

    /// Iterates over all attributes in column order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes
            .iter()
            .map(|(column, value)| (column.as_str(), value))
    }

    /// Writes an actor into a stamp column, or null when `actor` is `None`.
    pub fn write_stamp(&mut self, column: &ColumnName, actor: Option<&ActorId>) {
        let value = actor.map_or(Value::Null, ActorId::to_value);
        self.attributes.insert(column.as_str().to_owned(), value);
    }

    /// Reads the actor held in a stamp column.
    #[must_use]
    pub fn stamp(&self, column: &ColumnName) -> Option<ActorId> {
        self.get(column.as_str()).and_then(ActorId::from_value)
    }

    /// Returns whether stamping is currently enabled for this instance.
    #[must_use]
    pub const fn is_user_stamping(&self) -> bool {
        self.user_stamping
    }

    /// Stops maintaining user stamps on this instance.
    pub const fn stop_user_stamping(&mut self) {
        self.user_stamping = false;
    }

    /// Resumes maintaining user stamps on this instance.
    pub const fn start_user_stamping(&mut self) {
        self.user_stamping = true;
    }
}
