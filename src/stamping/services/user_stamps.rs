//! Registration facade wiring the stamping policy into a host.
//!
//! Provides [`UserStamps`], which boots record types against the host's
//! event system and hands out their relationship accessors.

use crate::stamping::{
    domain::{LifecycleEvent, ModelBinding, StampColumns, StampDomainError, UserModel},
    ports::{ActorProvider, Listener, ModelEvents, Stampable, StampingConfig},
    services::{StampingRegistry, UserStampPolicy, UserStampRelations, UserStampsScope},
};
use std::sync::Arc;
use tracing::debug;

/// Entry point for attaching user stamping to record types.
pub struct UserStamps<A>
where
    A: ActorProvider,
{
    policy: UserStampPolicy<A>,
    registry: Arc<StampingRegistry>,
    config: StampingConfig,
}

impl<A> Clone for UserStamps<A>
where
    A: ActorProvider,
{
    fn clone(&self) -> Self {
        Self {
            policy: self.policy.clone(),
            registry: Arc::clone(&self.registry),
            config: self.config.clone(),
        }
    }
}

impl<A> UserStamps<A>
where
    A: ActorProvider + 'static,
{
    /// Creates a facade with its own registry.
    #[must_use]
    pub fn new(actors: Arc<A>, config: StampingConfig) -> Self {
        Self::with_registry(actors, config, Arc::new(StampingRegistry::new()))
    }

    /// Creates a facade sharing an existing registry.
    #[must_use]
    pub const fn with_registry(
        actors: Arc<A>,
        config: StampingConfig,
        registry: Arc<StampingRegistry>,
    ) -> Self {
        Self {
            policy: UserStampPolicy::new(actors),
            registry,
            config,
        }
    }

    /// Returns the stamping policy.
    #[must_use]
    pub const fn policy(&self) -> &UserStampPolicy<A> {
        &self.policy
    }

    /// Returns the shared binding registry.
    #[must_use]
    pub const fn registry(&self) -> &Arc<StampingRegistry> {
        &self.registry
    }

    /// Returns the entity type stamp relations point at.
    #[must_use]
    pub const fn user_model(&self) -> &UserModel {
        self.config.user_model()
    }

    /// Attaches user stamping to `M` on the host.
    ///
    /// Installs the [`UserStampsScope`] global scope and the `creating` and
    /// `updating` listeners; `deleting` and `restoring` listeners are only
    /// registered when `M` supports soft deletion. Nothing is registered if
    /// the binding fails to resolve, or if the host already carries the
    /// scope from an earlier boot.
    ///
    /// # Errors
    ///
    /// Returns [`StampDomainError`] when `M` declares an invalid column
    /// override.
    pub fn boot<M, H>(&self, host: &mut H) -> Result<Arc<ModelBinding>, StampDomainError>
    where
        M: Stampable,
        H: ModelEvents<M>,
    {
        let binding = self.registry.binding::<M>()?;
        if host.has_global_scope(UserStampsScope::NAME) {
            debug!(model = binding.model(), "user stamping already booted");
            return Ok(binding);
        }

        host.add_global_scope(Box::new(UserStampsScope));
        let events = binding.events();
        for event in &events {
            host.listen(*event, self.listener::<M>(*event, Arc::clone(&binding)));
        }

        debug!(
            model = binding.model(),
            soft_deletes = binding.soft_deletes(),
            listeners = events.len(),
            "user stamping booted"
        );
        Ok(binding)
    }

    /// Returns the resolved stamp columns for `M`.
    ///
    /// # Errors
    ///
    /// Returns [`StampDomainError`] when `M` declares an invalid column
    /// override.
    pub fn columns<M>(&self) -> Result<StampColumns, StampDomainError>
    where
        M: Stampable,
    {
        Ok(self.registry.binding::<M>()?.columns().clone())
    }

    /// Returns the creator, editor and destroyer associations for `M`.
    ///
    /// # Errors
    ///
    /// Returns [`StampDomainError`] when `M` declares an invalid column
    /// override.
    pub fn relations<M>(&self) -> Result<UserStampRelations, StampDomainError>
    where
        M: Stampable,
    {
        let binding = self.registry.binding::<M>()?;
        Ok(UserStampRelations::new(self.user_model().clone(), binding))
    }

    fn listener<M>(&self, event: LifecycleEvent, binding: Arc<ModelBinding>) -> Listener<M>
    where
        M: Stampable,
    {
        let policy = self.policy.clone();
        Box::new(move |model: &mut M| {
            policy.handle(event, model.record_mut(), binding.columns());
        })
    }
}
