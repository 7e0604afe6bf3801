//! Stamping policy: the four lifecycle handlers.
//!
//! Every handler degrades to a no-op when its preconditions are not met and
//! performs at most one column write. None of them can fail.

use crate::stamping::{
    domain::{ActorId, ColumnName, LifecycleEvent, Record, SkipReason, StampColumns, StampOutcome},
    ports::ActorProvider,
};
use std::sync::Arc;
use tracing::debug;

/// Applies user stamps to records in response to lifecycle events.
pub struct UserStampPolicy<A>
where
    A: ActorProvider,
{
    actors: Arc<A>,
}

impl<A> Clone for UserStampPolicy<A>
where
    A: ActorProvider,
{
    fn clone(&self) -> Self {
        Self {
            actors: Arc::clone(&self.actors),
        }
    }
}

impl<A> UserStampPolicy<A>
where
    A: ActorProvider,
{
    /// Creates a policy reading the acting user from `actors`.
    #[must_use]
    pub const fn new(actors: Arc<A>) -> Self {
        Self { actors }
    }

    /// Returns the actor provider the policy reads from.
    #[must_use]
    pub const fn actors(&self) -> &Arc<A> {
        &self.actors
    }

    /// Runs the handler for `event`.
    pub fn handle(
        &self,
        event: LifecycleEvent,
        record: &mut Record,
        columns: &StampColumns,
    ) -> StampOutcome {
        match event {
            LifecycleEvent::Creating => self.on_creating(record, columns),
            LifecycleEvent::Updating => self.on_updating(record, columns),
            LifecycleEvent::Deleting => self.on_soft_deleting(record, columns),
            LifecycleEvent::Restoring => self.on_restoring(record, columns),
        }
    }

    /// Stamps the "created by" column with the acting user.
    ///
    /// Leaves the column unset when nobody is authenticated.
    pub fn on_creating(&self, record: &mut Record, columns: &StampColumns) -> StampOutcome {
        let outcome = self.stamp_actor(record, columns.created_by());
        trace_outcome(LifecycleEvent::Creating, &outcome);
        outcome
    }

    /// Stamps the "updated by" column with the acting user.
    ///
    /// Leaves the column untouched when nobody is authenticated.
    pub fn on_updating(&self, record: &mut Record, columns: &StampColumns) -> StampOutcome {
        let outcome = self.stamp_actor(record, columns.updated_by());
        trace_outcome(LifecycleEvent::Updating, &outcome);
        outcome
    }

    /// Stamps the "deleted by" column with the acting user.
    ///
    /// Unlike [`Self::on_updating`], the write is not guarded on an actor
    /// being present: with nobody authenticated the column is set to null.
    pub fn on_soft_deleting(&self, record: &mut Record, columns: &StampColumns) -> StampOutcome {
        let outcome = match writable_column(record, columns.deleted_by()) {
            Err(reason) => StampOutcome::Skipped(reason),
            Ok(column) => {
                let actor = self.actors.current_actor_id();
                write(record, column, actor)
            }
        };
        trace_outcome(LifecycleEvent::Deleting, &outcome);
        outcome
    }

    /// Clears the "deleted by" column regardless of the acting user.
    pub fn on_restoring(&self, record: &mut Record, columns: &StampColumns) -> StampOutcome {
        let outcome = match writable_column(record, columns.deleted_by()) {
            Err(reason) => StampOutcome::Skipped(reason),
            Ok(column) => write(record, column, None),
        };
        trace_outcome(LifecycleEvent::Restoring, &outcome);
        outcome
    }

    fn stamp_actor(&self, record: &mut Record, column: Option<&ColumnName>) -> StampOutcome {
        let target = match writable_column(record, column) {
            Ok(target) => target,
            Err(reason) => return StampOutcome::Skipped(reason),
        };
        match self.actors.current_actor_id() {
            Some(actor) => write(record, target, Some(actor)),
            None => StampOutcome::Skipped(SkipReason::NoActor),
        }
    }
}

fn writable_column<'c>(
    record: &Record,
    column: Option<&'c ColumnName>,
) -> Result<&'c ColumnName, SkipReason> {
    if !record.is_user_stamping() {
        return Err(SkipReason::StampingDisabled);
    }
    column.ok_or(SkipReason::ColumnNotConfigured)
}

fn write(record: &mut Record, column: &ColumnName, actor: Option<ActorId>) -> StampOutcome {
    record.write_stamp(column, actor.as_ref());
    match actor {
        Some(stamped) => StampOutcome::Stamped {
            column: column.clone(),
            actor: stamped,
        },
        None => StampOutcome::Cleared {
            column: column.clone(),
        },
    }
}

fn trace_outcome(event: LifecycleEvent, outcome: &StampOutcome) {
    match outcome {
        StampOutcome::Stamped { column, actor } => {
            debug!(%event, %column, %actor, "user stamp written");
        }
        StampOutcome::Cleared { column } => {
            debug!(%event, %column, "user stamp cleared");
        }
        StampOutcome::Skipped(reason) => {
            debug!(%event, %reason, "user stamp skipped");
        }
    }
}
