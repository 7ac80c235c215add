//! DI container contract, as seen by the command dispatcher.
//!
//! The container's own binding resolution is opaque here. The only thing the
//! dispatch scan needs is whether a container exposes a [`CommandDispatcher`]
//! and access to it.

use crate::command::CommandDispatcher;

/// A feature a container may or may not expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Capability {
    /// The container has a [`CommandDispatcher`].
    CommandDispatcher,
}

/// A DI container taking part in command dispatch.
pub trait Container: Send + Sync {
    /// Human-readable identifier used in diagnostics.
    fn name(&self) -> &str {
        "container"
    }

    /// The container's command dispatcher, if it has one.
    fn command_dispatcher(&self) -> Option<&dyn CommandDispatcher>;

    /// Whether the container exposes `capability`.
    fn has_capability(&self, capability: Capability) -> bool {
        match capability {
            Capability::CommandDispatcher => self.command_dispatcher().is_some(),
        }
    }
}
