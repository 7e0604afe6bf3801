//! Capability contract for record types that carry user stamps.

use crate::stamping::domain::{ColumnOverride, Record, StampColumns, StampDomainError};

/// A record type that can be stamped with the acting user.
///
/// The associated constants declare the type's stamp columns and whether it
/// supports soft deletion; they are resolved once per type by the stamping
/// registry. Instances expose their attribute bag so the policy can write
/// into it.
///
/// # Examples
///
/// ```rust
/// use userstamps::stamping::{
///     domain::{ColumnOverride, Record},
///     ports::Stampable,
/// };
///
/// struct Post {
///     record: Record,
/// }
///
/// impl Stampable for Post {
///     const MODEL: &'static str = "posts";
///     const CREATED_BY: ColumnOverride = ColumnOverride::Named("author_id");
///     const SOFT_DELETES: bool = true;
///
///     fn record(&self) -> &Record {
///         &self.record
///     }
///
///     fn record_mut(&mut self) -> &mut Record {
///         &mut self.record
///     }
/// }
///
/// let columns = Post::stamp_columns().expect("valid overrides");
/// assert_eq!(columns.created_by().map(|c| c.as_str()), Some("author_id"));
/// ```
pub trait Stampable: Send + 'static {
    /// Model name used in diagnostics.
    const MODEL: &'static str;

    /// Declared "created by" column.
    const CREATED_BY: ColumnOverride = ColumnOverride::Default;

    /// Declared "updated by" column.
    const UPDATED_BY: ColumnOverride = ColumnOverride::Default;

    /// Declared "deleted by" column.
    const DELETED_BY: ColumnOverride = ColumnOverride::Default;

    /// Whether the type supports soft deletion and restore.
    const SOFT_DELETES: bool = false;

    /// Returns the record's attributes.
    fn record(&self) -> &Record;

    /// Returns the record's attributes for mutation.
    fn record_mut(&mut self) -> &mut Record;

    /// Resolves the declared columns against the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StampDomainError`] when a named override is not a valid
    /// column name.
    fn stamp_columns() -> Result<StampColumns, StampDomainError>
    where
        Self: Sized,
    {
        StampColumns::resolve(Self::CREATED_BY, Self::UPDATED_BY, Self::DELETED_BY)
    }

    /// Returns whether stamping is enabled on this instance.
    fn is_user_stamping(&self) -> bool {
        self.record().is_user_stamping()
    }

    /// Stops maintaining user stamps on this instance.
    fn stop_user_stamping(&mut self) {
        self.record_mut().stop_user_stamping();
    }

    /// Resumes maintaining user stamps on this instance.
    fn start_user_stamping(&mut self) {
        self.record_mut().start_user_stamping();
    }
}

impl Stampable for Record {
    const MODEL: &'static str = "record";

    fn record(&self) -> &Record {
        self
    }

    fn record_mut(&mut self) -> &mut Record {
        self
    }
}
