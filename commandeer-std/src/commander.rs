//! # Multi-container command dispatch
//!
//! [`Commander`] routes a command type to the first container, in
//! registration order, that both exposes a command dispatcher and has a
//! registration for the type.
//!
//! # Selection
//!
//! For each container the scan asks two questions in sequence:
//!
//! 1. Does the container have the [`Capability::CommandDispatcher`] capability?
//! 2. Does its dispatcher have a registration for the command type?
//!
//! A container failing the first question is skipped without its dispatcher
//! being consulted. The first container answering yes to both receives the
//! command and the scan stops; later containers are never consulted, even if
//! they could handle it too.
//!
//! # Example
//!
//! ```rust,ignore
//! let registry = ContainerRegistry::builder()
//!     .register(DispatchContainer::named("ui"))?
//!     .register(DispatchContainer::named("game").with_dispatcher(dispatcher))?
//!     .build();
//!
//! let commander = Commander::new(registry);
//! commander.dispatch_type::<Ping>()?;
//! ```

use crate::registry::{ContainerEntry, ContainerRegistry};
use commandeer_core::{Capability, CommandDispatcher, CommandError, TypeInfo};
use std::collections::HashSet;

/// Dispatches commands across the containers of a [`ContainerRegistry`].
#[derive(Clone, Debug)]
pub struct Commander {
    registry: ContainerRegistry,
}

impl Commander {
    /// Create a commander scanning `registry`.
    pub fn new(registry: ContainerRegistry) -> Self {
        Self { registry }
    }

    /// The registry snapshot this commander scans.
    pub fn registry(&self) -> &ContainerRegistry {
        &self.registry
    }

    /// Dispatch `command` to the first container able to handle it.
    ///
    /// Exactly one dispatcher executes the command. When no container
    /// matches, [`CommandError::NoCommandBinding`] is returned and nothing is
    /// executed.
    pub fn dispatch(&self, command: &TypeInfo) -> Result<(), CommandError> {
        let Some((entry, dispatcher)) = self.find(command) else {
            #[cfg(feature = "tracing")]
            tracing::warn!(%command, containers = self.registry.len(), "no command binding found");
            return Err(CommandError::NoCommandBinding { command: *command });
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            %command,
            container = entry.container().name(),
            index = entry.index(),
            "dispatching command"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = entry;

        dispatcher.execute(command);
        Ok(())
    }

    /// Dispatch the command type `C`.
    pub fn dispatch_type<C: 'static>(&self) -> Result<(), CommandError> {
        self.dispatch(&TypeInfo::of::<C>())
    }

    /// The container `command` would be dispatched to, without executing it.
    pub fn resolve(&self, command: &TypeInfo) -> Option<&ContainerEntry> {
        self.find(command).map(|(entry, _)| entry)
    }

    /// Every command type any container can dispatch.
    ///
    /// Types are listed in container order, then in each dispatcher's
    /// registration order. A type registered with several containers is
    /// listed once, at its first occurrence.
    pub fn available_commands(&self) -> Vec<TypeInfo> {
        let mut seen = HashSet::new();
        self.registry
            .iter()
            .map(ContainerEntry::container)
            .filter(|container| container.has_capability(Capability::CommandDispatcher))
            .filter_map(|container| container.command_dispatcher())
            .flat_map(|dispatcher| dispatcher.registered_types())
            .filter(|info| seen.insert(*info))
            .collect()
    }

    fn find(&self, command: &TypeInfo) -> Option<(&ContainerEntry, &dyn CommandDispatcher)> {
        for entry in &self.registry {
            let container = entry.container();

            if !container.has_capability(Capability::CommandDispatcher) {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    container = container.name(),
                    "skipping container without dispatcher"
                );
                continue;
            }

            let Some(dispatcher) = container.command_dispatcher() else {
                continue;
            };

            if dispatcher.has_registration(command) {
                return Some((entry, dispatcher));
            }

            #[cfg(feature = "tracing")]
            tracing::debug!(
                container = container.name(),
                %command,
                "skipping container without registration"
            );
        }
        None
    }
}

impl From<ContainerRegistry> for Commander {
    fn from(registry: ContainerRegistry) -> Self {
        Self::new(registry)
    }
}
