//! # commandeer-core
//!
//! Core contracts for the Commandeer command dispatch and injection framework.
//!
//! This crate only defines the seams between the framework and its external
//! collaborators (DI containers, command dispatchers, injectors). Concrete
//! registries and dispatchers live in `commandeer-std`.
//!
//! # Dispatch
//!
//! A host application owns several independently configured [`Container`]s.
//! Each container may expose a [`CommandDispatcher`] (the
//! [`Capability::CommandDispatcher`] capability). A command type, described by
//! a [`TypeInfo`], is dispatched to the first container whose dispatcher has a
//! registration for it.
//!
//! # Injection points
//!
//! Members of a type declare themselves as injection targets through an
//! [`Inject`] marker carried by an [`InjectionPoint`]. An injector reads the
//! marker's [`InjectionKey`] and asks a [`Resolver`] for the value.
//!
//! # Error Types
//!
//! - [`CommandeerError`] - Top-level error type
//! - [`CommandError`] - Dispatch errors
//! - [`RegistrationError`] - Registry and dispatcher assembly errors
//! - [`InjectError`] - Member injection errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod command;
mod container;
mod error;
mod inject;
mod type_info;

// Re-exports
pub use command::{Command, CommandDispatcher, CommandFactory};
pub use container::{Capability, Container};
pub use error::{BoxError, CommandError, CommandeerError, InjectError, RegistrationError};
pub use inject::{
    Inject, Injectable, InjectionKey, InjectionPoint, MemberKind, Resolver, downcast_member,
    inherit_points,
};
pub use type_info::TypeInfo;
