//! Testing utilities for Commandeer.
//!
//! This module provides test doubles for the external collaborators of the
//! dispatcher and the injection metadata.
//!
//! # Features
//!
//! - [`RecordingDispatcher`]: A dispatcher that records registration checks and executions
//! - [`RecordingContainer`]: A container that counts capability checks
//! - [`FakeResolver`]: A resolver that records every key it is asked for

use commandeer_core::{Capability, CommandDispatcher, Container, InjectionKey, Resolver, TypeInfo};
use std::{
    any::Any,
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

// ============================================================================
// Recording Dispatcher
// ============================================================================

/// A dispatcher that records what it is asked.
///
/// Clones share their records, so a clone can be handed to a container and
/// inspected afterwards.
///
/// # Example
///
/// ```rust,ignore
/// let dispatcher = RecordingDispatcher::with_types([TypeInfo::of::<Ping>()]);
/// let container = RecordingContainer::with_dispatcher("main", dispatcher.clone());
///
/// // dispatch through a Commander...
///
/// assert_eq!(dispatcher.execute_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct RecordingDispatcher {
    types: Arc<Vec<TypeInfo>>,
    executed: Arc<Mutex<Vec<TypeInfo>>>,
    registration_checks: Arc<AtomicUsize>,
}

impl RecordingDispatcher {
    /// A dispatcher with registrations for `types`.
    pub fn with_types(types: impl IntoIterator<Item = TypeInfo>) -> Self {
        Self {
            types: Arc::new(types.into_iter().collect()),
            ..Self::default()
        }
    }

    /// The command types executed so far, in order.
    pub fn executed(&self) -> Vec<TypeInfo> {
        self.executed.lock().unwrap().clone()
    }

    /// Number of executions.
    pub fn execute_count(&self) -> usize {
        self.executed.lock().unwrap().len()
    }

    /// Number of times `has_registration` was called.
    pub fn registration_checks(&self) -> usize {
        self.registration_checks.load(Ordering::SeqCst)
    }
}

impl CommandDispatcher for RecordingDispatcher {
    fn has_registration(&self, command: &TypeInfo) -> bool {
        self.registration_checks.fetch_add(1, Ordering::SeqCst);
        self.types.contains(command)
    }

    fn execute(&self, command: &TypeInfo) {
        self.executed.lock().unwrap().push(*command);
    }

    fn registered_types(&self) -> Vec<TypeInfo> {
        self.types.as_ref().clone()
    }
}

// ============================================================================
// Recording Container
// ============================================================================

/// A container that counts how often its capabilities are checked.
#[derive(Clone)]
pub struct RecordingContainer {
    name: &'static str,
    dispatcher: Option<RecordingDispatcher>,
    capability_checks: Arc<AtomicUsize>,
}

impl RecordingContainer {
    /// A container without a command dispatcher.
    pub fn without_dispatcher(name: &'static str) -> Self {
        Self {
            name,
            dispatcher: None,
            capability_checks: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A container exposing `dispatcher`.
    pub fn with_dispatcher(name: &'static str, dispatcher: RecordingDispatcher) -> Self {
        Self {
            dispatcher: Some(dispatcher),
            ..Self::without_dispatcher(name)
        }
    }

    /// Number of times `has_capability` was called.
    pub fn capability_checks(&self) -> usize {
        self.capability_checks.load(Ordering::SeqCst)
    }
}

impl Container for RecordingContainer {
    fn name(&self) -> &str {
        self.name
    }

    fn command_dispatcher(&self) -> Option<&dyn CommandDispatcher> {
        self.dispatcher.as_ref().map(|d| d as &dyn CommandDispatcher)
    }

    fn has_capability(&self, capability: Capability) -> bool {
        self.capability_checks.fetch_add(1, Ordering::SeqCst);
        capability == Capability::CommandDispatcher && self.dispatcher.is_some()
    }
}

// ============================================================================
// Fake Resolver
// ============================================================================

type ValueFactory = Box<dyn Fn() -> Box<dyn Any + Send> + Send + Sync>;

/// A resolver stub that records every key it receives.
///
/// Bindings are registered by identifier or by type; each lookup produces a
/// fresh value from the binding's factory.
///
/// # Example
///
/// ```rust,ignore
/// let resolver = FakeResolver::new().bind_type(|| 7u32);
/// inject_members(&mut target, &resolver)?;
/// assert_eq!(resolver.keys(), [RecordedKey::Type(TypeInfo::of::<u32>())]);
/// ```
#[derive(Default)]
pub struct FakeResolver {
    by_identifier: HashMap<String, ValueFactory>,
    by_type: HashMap<TypeInfo, ValueFactory>,
    keys: Mutex<Vec<RecordedKey>>,
}

/// An owned copy of an [`InjectionKey`] seen by [`FakeResolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedKey {
    /// Lookup by identifier.
    Identifier(String),
    /// Lookup by declared type.
    Type(TypeInfo),
}

impl From<&InjectionKey<'_>> for RecordedKey {
    fn from(key: &InjectionKey<'_>) -> Self {
        match key {
            InjectionKey::Identifier(id) => RecordedKey::Identifier((*id).to_string()),
            InjectionKey::Type(ty) => RecordedKey::Type(*ty),
        }
    }
}

impl FakeResolver {
    /// Create a resolver with no bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value under an identifier.
    pub fn bind_identifier<T, F>(mut self, identifier: impl Into<String>, factory: F) -> Self
    where
        T: Send + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.by_identifier.insert(
            identifier.into(),
            Box::new(move || Box::new(factory()) as Box<dyn Any + Send>),
        );
        self
    }

    /// Bind a value under its type.
    pub fn bind_type<T, F>(mut self, factory: F) -> Self
    where
        T: Send + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.by_type.insert(
            TypeInfo::of::<T>(),
            Box::new(move || Box::new(factory()) as Box<dyn Any + Send>),
        );
        self
    }

    /// The keys received so far, in order.
    pub fn keys(&self) -> Vec<RecordedKey> {
        self.keys.lock().unwrap().clone()
    }
}

impl Resolver for FakeResolver {
    fn resolve(&self, key: &InjectionKey<'_>) -> Option<Box<dyn Any + Send>> {
        self.keys.lock().unwrap().push(key.into());
        let factory = match key {
            InjectionKey::Identifier(id) => self.by_identifier.get(*id),
            InjectionKey::Type(ty) => self.by_type.get(ty),
        }?;
        Some(factory())
    }
}
