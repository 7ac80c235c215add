//! A minimal container for composition roots.

use commandeer_core::{CommandDispatcher, Container};
use std::{borrow::Cow, fmt, sync::Arc};

/// A named container that optionally exposes a command dispatcher.
///
/// Hosts with their own container type implement [`Container`] directly;
/// this one covers composition roots that only need command dispatch.
pub struct DispatchContainer {
    name: Cow<'static, str>,
    dispatcher: Option<Arc<dyn CommandDispatcher>>,
}

impl DispatchContainer {
    /// A container without a command dispatcher.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            dispatcher: None,
        }
    }

    /// Attach a command dispatcher.
    pub fn with_dispatcher<D>(mut self, dispatcher: D) -> Self
    where
        D: CommandDispatcher + 'static,
    {
        self.dispatcher = Some(Arc::new(dispatcher));
        self
    }

    /// Attach a command dispatcher shared with the caller.
    pub fn with_shared_dispatcher(mut self, dispatcher: Arc<dyn CommandDispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }
}

impl Container for DispatchContainer {
    fn name(&self) -> &str {
        &self.name
    }

    fn command_dispatcher(&self) -> Option<&dyn CommandDispatcher> {
        self.dispatcher.as_deref()
    }
}

impl fmt::Debug for DispatchContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchContainer")
            .field("name", &self.name)
            .field("has_dispatcher", &self.dispatcher.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::TypedCommandDispatcher;
    use commandeer_core::Capability;

    #[test]
    fn test_capability_follows_dispatcher() {
        let bare = DispatchContainer::named("bare");
        assert!(!bare.has_capability(Capability::CommandDispatcher));
        assert!(bare.command_dispatcher().is_none());

        let equipped =
            DispatchContainer::named("equipped").with_dispatcher(TypedCommandDispatcher::new());
        assert!(equipped.has_capability(Capability::CommandDispatcher));
        assert_eq!(equipped.name(), "equipped");
    }
}
