//! # commandeer - Multi-Container Command Dispatch
//!
//! `commandeer` routes commands across several independently configured DI
//! containers and lets struct members declare themselves as injection points.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use commandeer::prelude::*;
//!
//! #[derive(Default, RegisterCommand)]
//! struct Ping;
//!
//! impl Command for Ping {
//!     fn execute(&mut self) { /* ... */ }
//! }
//!
//! let dispatcher = TypedCommandDispatcher::from_discovery(&CommandDiscovery::new())?;
//! let registry = ContainerRegistry::builder()
//!     .register(DispatchContainer::named("ui"))?
//!     .register(DispatchContainer::named("game").with_dispatcher(dispatcher))?
//!     .build();
//!
//! Commander::new(registry).dispatch_type::<Ping>()?;
//! ```
//!
//! ## Injection Points
//!
//! ```rust,ignore
//! #[derive(Injectable)]
//! struct Greeter {
//!     #[inject]
//!     clock: Arc<dyn Clock>,
//!     #[inject("greeting")]
//!     greeting: String,
//! }
//!
//! inject_members(&mut greeter, &resolver)?;
//! ```
//!
//! ## Features
//!
//! - `macros` - `#[derive(Injectable)]` and `#[derive(RegisterCommand)]`
//! - `inventory` - link-time command discovery
//! - `tracing` - dispatch and discovery logging

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use commandeer_core::{
    // Error types
    BoxError,
    // Capabilities
    Capability,
    // Commands
    Command,
    CommandDispatcher,
    CommandError,
    CommandFactory,
    CommandeerError,
    // Containers
    Container,
    // Injection metadata
    Inject,
    InjectError,
    Injectable,
    InjectionKey,
    InjectionPoint,
    MemberKind,
    RegistrationError,
    Resolver,
    // Type references
    TypeInfo,
    downcast_member,
    inherit_points,
};

pub use commandeer_std::{
    // Dispatch
    Commander,
    CommandRegistration,
    ContainerEntry,
    ContainerRegistry,
    ContainerRegistryBuilder,
    DispatchContainer,
    // Diagnostics
    NO_NAMESPACE,
    TypedCommandDispatcher,
    group_by_namespace,
    // Injection
    inject_members,
};

// Discovery
#[cfg(feature = "inventory")]
pub use commandeer_std::{
    CommandDiscovery, RESERVED_NAMESPACES, discover_command_types, discovered_commands,
    register_command,
};

/// Testing utilities.
pub mod testing {
    pub use commandeer_std::testing::{
        FakeResolver, RecordedKey, RecordingContainer, RecordingDispatcher,
    };
}

/// Prelude module - common imports for Commandeer.
///
/// # Usage
///
/// ```rust,ignore
/// use commandeer::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Command, CommandDispatcher, CommandError, Commander, Container, ContainerRegistry,
        DispatchContainer, Inject, Injectable, InjectionPoint, Resolver, TypeInfo,
        TypedCommandDispatcher, inject_members,
    };

    #[cfg(feature = "inventory")]
    pub use crate::CommandDiscovery;

    #[cfg(feature = "macros")]
    pub use crate::RegisterCommand;
}

#[cfg(feature = "macros")]
pub use commandeer_macros::{Injectable, RegisterCommand};

#[cfg(feature = "inventory")]
pub use inventory;

#[doc(hidden)]
pub use commandeer_std::__private;
