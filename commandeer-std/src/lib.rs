//! # commandeer-std
//!
//! Standard implementations for the Commandeer command dispatch framework.
//!
//! This crate provides:
//! - **Container registry**: [`ContainerRegistry`], an immutable ordered snapshot
//! - **Dispatch**: [`Commander`], first-match routing across containers
//! - **Dispatchers**: [`TypedCommandDispatcher`], factory-backed, plus [`DispatchContainer`]
//! - **Discovery**: link-time command collection (`inventory` feature)
//! - **Injection**: [`inject_members`], a single-level injection driver
//! - **Diagnostics**: [`group_by_namespace`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use commandeer_core;

// Modules
pub mod commander;
pub mod container;
#[cfg(feature = "inventory")]
pub mod discovery;
pub mod dispatcher;
pub mod grouping;
pub mod injection;
pub mod registry;
pub mod testing;

pub use commander::Commander;
pub use container::DispatchContainer;
#[cfg(feature = "inventory")]
pub use discovery::{
    CommandDiscovery, RESERVED_NAMESPACES, discover_command_types, discovered_commands,
};
pub use dispatcher::{CommandRegistration, TypedCommandDispatcher};
pub use grouping::{NO_NAMESPACE, group_by_namespace};
pub use injection::inject_members;
pub use registry::{ContainerEntry, ContainerRegistry, ContainerRegistryBuilder};

#[cfg(feature = "inventory")]
pub use inventory;

/// Paths used by generated code. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use crate::dispatcher::CommandRegistration;
    pub use commandeer_core::{Command, TypeInfo};
    #[cfg(feature = "inventory")]
    pub use inventory;
}
