//! Ordered registry of active containers.
//!
//! The registry is assembled with a [`ContainerRegistryBuilder`] and frozen by
//! [`build`](ContainerRegistryBuilder::build). A frozen registry is an
//! immutable snapshot: adding a container means building a new registry via
//! [`ContainerRegistry::to_builder`], while anything already holding the old
//! snapshot keeps scanning it unchanged.

use commandeer_core::{Container, RegistrationError};
use std::{fmt, sync::Arc};

/// One registered container and its position in search order.
#[derive(Clone)]
pub struct ContainerEntry {
    index: usize,
    container: Arc<dyn Container>,
}

impl ContainerEntry {
    /// Position in registration order, starting at zero.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The registered container.
    pub fn container(&self) -> &dyn Container {
        self.container.as_ref()
    }

    /// Whether this entry holds the same container instance as `other`.
    pub fn is(&self, other: &Arc<dyn Container>) -> bool {
        Arc::ptr_eq(&self.container, other)
    }
}

impl fmt::Debug for ContainerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerEntry")
            .field("index", &self.index)
            .field("name", &self.container.name())
            .finish()
    }
}

/// An immutable, ordered snapshot of containers.
#[derive(Clone, Debug)]
pub struct ContainerRegistry {
    entries: Arc<[ContainerEntry]>,
}

impl ContainerRegistry {
    /// Start building a new registry.
    pub fn builder() -> ContainerRegistryBuilder {
        ContainerRegistryBuilder::new()
    }

    /// A registry with no containers.
    pub fn empty() -> Self {
        Self {
            entries: Arc::from(Vec::new()),
        }
    }

    /// The entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ContainerEntry> {
        self.entries.iter()
    }

    /// Number of registered containers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no container is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A builder pre-populated with this registry's containers, in order.
    pub fn to_builder(&self) -> ContainerRegistryBuilder {
        ContainerRegistryBuilder {
            containers: self.entries.iter().map(|e| e.container.clone()).collect(),
        }
    }
}

impl Default for ContainerRegistry {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> IntoIterator for &'a ContainerRegistry {
    type Item = &'a ContainerEntry;
    type IntoIter = std::slice::Iter<'a, ContainerEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builder for constructing a [`ContainerRegistry`].
#[derive(Default)]
pub struct ContainerRegistryBuilder {
    containers: Vec<Arc<dyn Container>>,
}

impl ContainerRegistryBuilder {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            containers: Vec::new(),
        }
    }

    /// Register a container after all previously registered ones.
    ///
    /// Registering the same container instance twice is rejected.
    pub fn register<C>(self, container: C) -> Result<Self, RegistrationError>
    where
        C: Container + 'static,
    {
        self.register_shared(Arc::new(container))
    }

    /// Register a container that is shared with the caller.
    pub fn register_shared(
        mut self,
        container: Arc<dyn Container>,
    ) -> Result<Self, RegistrationError> {
        if self.containers.iter().any(|c| Arc::ptr_eq(c, &container)) {
            return Err(RegistrationError::DuplicateContainer(
                container.name().to_string(),
            ));
        }
        self.containers.push(container);
        Ok(self)
    }

    /// Build the registry.
    pub fn build(self) -> ContainerRegistry {
        let entries: Vec<_> = self
            .containers
            .into_iter()
            .enumerate()
            .map(|(index, container)| ContainerEntry { index, container })
            .collect();
        ContainerRegistry {
            entries: entries.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::DispatchContainer;

    #[test]
    fn test_registration_order_is_index_order() {
        let registry = ContainerRegistry::builder()
            .register(DispatchContainer::named("first"))
            .unwrap()
            .register(DispatchContainer::named("second"))
            .unwrap()
            .build();

        let names: Vec<_> = registry
            .iter()
            .map(|e| (e.index(), e.container().name().to_string()))
            .collect();
        assert_eq!(names, [(0, "first".into()), (1, "second".into())]);
    }

    #[test]
    fn test_duplicate_instance_rejected() {
        let shared: Arc<dyn Container> = Arc::new(DispatchContainer::named("main"));
        let result = ContainerRegistry::builder()
            .register_shared(shared.clone())
            .unwrap()
            .register_shared(shared);

        assert_eq!(
            result.err(),
            Some(RegistrationError::DuplicateContainer("main".into()))
        );
    }

    #[test]
    fn test_same_name_different_instances_allowed() {
        let registry = ContainerRegistry::builder()
            .register(DispatchContainer::named("main"))
            .unwrap()
            .register(DispatchContainer::named("main"))
            .unwrap()
            .build();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_snapshot_unaffected_by_extension() {
        let original = ContainerRegistry::builder()
            .register(DispatchContainer::named("a"))
            .unwrap()
            .build();

        let extended = original
            .to_builder()
            .register(DispatchContainer::named("b"))
            .unwrap()
            .build();

        assert_eq!(original.len(), 1);
        assert_eq!(extended.len(), 2);
        assert_eq!(extended.iter().last().map(ContainerEntry::index), Some(1));
    }
}
