//! Shared world state for user stamping BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use userstamps::stamping::{
    adapters::memory::{InMemoryModelEvents, SessionActor},
    domain::{LifecycleEvent, Record},
    ports::{Stampable, StampingConfig},
    services::UserStamps,
};

/// Soft-deletable scenario model.
#[derive(Debug, Default)]
pub struct Document {
    record: Record,
}

impl Stampable for Document {
    const MODEL: &'static str = "documents";
    const SOFT_DELETES: bool = true;

    fn record(&self) -> &Record {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }
}

/// Hard-deleted scenario model.
#[derive(Debug, Default)]
pub struct Ticket {
    record: Record,
}

impl Stampable for Ticket {
    const MODEL: &'static str = "tickets";

    fn record(&self) -> &Record {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }
}

/// Which model type the scenario exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// [`Document`].
    SoftDeletable,
    /// [`Ticket`].
    HardDeleted,
}

/// Scenario world for user stamping behaviour tests.
pub struct StampWorld {
    /// Session the stamping policy reads the acting user from.
    pub session: Arc<SessionActor>,
    /// Host events for documents.
    pub documents: InMemoryModelEvents<Document>,
    /// Host events for tickets.
    pub tickets: InMemoryModelEvents<Ticket>,
    /// Model type selected by the scenario.
    pub kind: ModelKind,
    /// Document instance under test.
    pub document: Document,
    /// Ticket instance under test.
    pub ticket: Ticket,
}

impl StampWorld {
    /// Creates a world with both model types booted and nobody logged in.
    ///
    /// # Panics
    ///
    /// Panics if either scenario model fails to boot.
    #[must_use]
    pub fn new() -> Self {
        let session = Arc::new(SessionActor::new());
        let stamps = UserStamps::new(Arc::clone(&session), StampingConfig::default());
        let mut documents = InMemoryModelEvents::new();
        let mut tickets = InMemoryModelEvents::new();
        stamps
            .boot::<Document, _>(&mut documents)
            .expect("documents boot");
        stamps
            .boot::<Ticket, _>(&mut tickets)
            .expect("tickets boot");
        Self {
            session,
            documents,
            tickets,
            kind: ModelKind::SoftDeletable,
            document: Document::default(),
            ticket: Ticket::default(),
        }
    }

    /// Fires `event` for the selected model instance.
    pub fn dispatch(&mut self, event: LifecycleEvent) {
        match self.kind {
            ModelKind::SoftDeletable => {
                self.documents.dispatch(event, &mut self.document);
            }
            ModelKind::HardDeleted => {
                self.tickets.dispatch(event, &mut self.ticket);
            }
        }
    }

    /// Returns the selected instance's attributes.
    #[must_use]
    pub fn record(&self) -> &Record {
        match self.kind {
            ModelKind::SoftDeletable => self.document.record(),
            ModelKind::HardDeleted => self.ticket.record(),
        }
    }

    /// Returns the selected instance's attributes for mutation.
    pub fn record_mut(&mut self) -> &mut Record {
        match self.kind {
            ModelKind::SoftDeletable => self.document.record_mut(),
            ModelKind::HardDeleted => self.ticket.record_mut(),
        }
    }
}

impl Default for StampWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StampWorld {
    StampWorld::default()
}
