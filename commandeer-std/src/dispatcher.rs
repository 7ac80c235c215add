//! Factory-based command dispatcher.
//!
//! [`TypedCommandDispatcher`] maps command types to factories. Every
//! execution constructs a fresh command instance and drops it afterwards;
//! nothing is cached between dispatches.

use commandeer_core::{
    Command, CommandDispatcher, CommandFactory, RegistrationError, TypeInfo,
};
use std::{any::TypeId, collections::HashMap, fmt};

/// A command type paired with its factory.
///
/// This is the unit of both explicit registration and link-time discovery
/// (`#[derive(RegisterCommand)]` submits one per command type). Both fields
/// are function pointers so the value can be built in a `static`.
#[derive(Clone, Copy)]
pub struct CommandRegistration {
    type_info: fn() -> TypeInfo,
    factory: CommandFactory,
}

impl CommandRegistration {
    /// Create a registration from a type describer and a factory.
    pub const fn new(type_info: fn() -> TypeInfo, factory: CommandFactory) -> Self {
        Self { type_info, factory }
    }

    /// Registration for a `Default`-constructible command.
    pub fn of<C: Command + Default>() -> Self {
        Self {
            type_info: TypeInfo::of::<C>,
            factory: || Box::new(C::default()) as Box<dyn Command>,
        }
    }

    /// The registered command type.
    pub fn type_info(&self) -> TypeInfo {
        (self.type_info)()
    }

    /// Construct a new command instance.
    pub fn create(&self) -> Box<dyn Command> {
        (self.factory)()
    }
}

impl fmt::Debug for CommandRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CommandRegistration")
            .field(&self.type_info())
            .finish()
    }
}

/// A [`CommandDispatcher`] backed by registered factories.
#[derive(Default)]
pub struct TypedCommandDispatcher {
    order: Vec<TypeInfo>,
    factories: HashMap<TypeId, CommandFactory>,
}

impl TypedCommandDispatcher {
    /// Create a dispatcher with no registrations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a `Default`-constructible command type.
    pub fn register<C: Command + Default>(&mut self) -> Result<&mut Self, RegistrationError> {
        self.register_with(CommandRegistration::of::<C>())
    }

    /// Register a command from an explicit registration.
    pub fn register_with(
        &mut self,
        registration: CommandRegistration,
    ) -> Result<&mut Self, RegistrationError> {
        let info = registration.type_info();
        if self.factories.contains_key(&info.id()) {
            return Err(RegistrationError::DuplicateCommand(info));
        }
        self.factories.insert(info.id(), registration.factory);
        self.order.push(info);
        Ok(self)
    }

    /// Number of registered command types.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no command type is registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl CommandDispatcher for TypedCommandDispatcher {
    fn has_registration(&self, command: &TypeInfo) -> bool {
        self.factories.contains_key(&command.id())
    }

    fn execute(&self, command: &TypeInfo) {
        let Some(factory) = self.factories.get(&command.id()) else {
            #[cfg(feature = "tracing")]
            tracing::warn!(%command, "execute called for unregistered command");
            return;
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(%command, "executing command");

        let mut instance = factory();
        instance.execute();
    }

    fn registered_types(&self) -> Vec<TypeInfo> {
        self.order.clone()
    }
}

impl fmt::Debug for TypedCommandDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedCommandDispatcher")
            .field("commands", &self.order)
            .finish()
    }
}
