//! # Link-time command discovery
//!
//! Command types are collected through the `inventory` crate instead of
//! scanning loaded types at runtime. A type becomes discoverable when a
//! [`CommandRegistration`] is submitted for it, either by
//! `#[derive(RegisterCommand)]` or by [`register_command!`](crate::register_command).
//!
//! # Reserved namespaces
//!
//! Types living in the framework's own crates are never reported, so internal
//! scaffolding commands cannot register themselves with a host. Hosts with
//! their own internal crates can reserve more roots through
//! [`CommandDiscovery::reserve`].
//!
//! # Example
//!
//! ```rust,ignore
//! #[derive(Default, RegisterCommand)]
//! struct Ping;
//!
//! impl Command for Ping {
//!     fn execute(&mut self) {}
//! }
//!
//! let dispatcher = TypedCommandDispatcher::from_discovery(&CommandDiscovery::default())?;
//! ```

use crate::dispatcher::{CommandRegistration, TypedCommandDispatcher};
use commandeer_core::{RegistrationError, TypeInfo};
use std::collections::HashSet;

inventory::collect!(CommandRegistration);

/// Namespace roots reserved for the framework itself.
pub const RESERVED_NAMESPACES: &[&str] = &["commandeer", "commandeer_core", "commandeer_std"];

/// Submit a [`CommandRegistration`] for a `Default`-constructible command.
///
/// The namespace recorded for the type is the module the macro is invoked in.
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct Ping;
/// impl Command for Ping { fn execute(&mut self) {} }
///
/// commandeer::register_command!(Ping);
/// ```
#[macro_export]
macro_rules! register_command {
    ($command:ident) => {
        const _: () = {
            fn __type_info() -> $crate::__private::TypeInfo {
                $crate::__private::TypeInfo::named::<$command>(
                    ::core::module_path!(),
                    ::core::stringify!($command),
                )
            }

            fn __factory() -> ::std::boxed::Box<dyn $crate::__private::Command> {
                ::std::boxed::Box::new(<$command as ::core::default::Default>::default())
            }

            $crate::__private::inventory::submit! {
                $crate::__private::CommandRegistration::new(__type_info, __factory)
            }
        };
    };
}

/// Configurable discovery over the submitted registrations.
#[derive(Debug, Clone)]
pub struct CommandDiscovery {
    reserved: Vec<&'static str>,
}

impl Default for CommandDiscovery {
    fn default() -> Self {
        Self {
            reserved: RESERVED_NAMESPACES.to_vec(),
        }
    }
}

impl CommandDiscovery {
    /// Discovery reserving only the framework's own namespaces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve another namespace root.
    pub fn reserve(mut self, namespace: &'static str) -> Self {
        self.reserved.push(namespace);
        self
    }

    /// Whether `namespace` equals a reserved root or is nested under one.
    pub fn is_reserved(&self, namespace: Option<&str>) -> bool {
        let Some(namespace) = namespace else {
            return false;
        };
        self.reserved.iter().any(|root| {
            namespace
                .strip_prefix(root)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
        })
    }

    /// The submitted registrations outside reserved namespaces.
    ///
    /// A type submitted more than once is reported at its first occurrence.
    pub fn registrations(&self) -> Vec<CommandRegistration> {
        let mut seen = HashSet::new();
        inventory::iter::<CommandRegistration>
            .into_iter()
            .filter(|registration| {
                let info = registration.type_info();
                if self.is_reserved(info.namespace()) {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(command = %info, "skipping command in reserved namespace");
                    return false;
                }
                seen.insert(info)
            })
            .copied()
            .collect()
    }

    /// The distinct discoverable command types.
    pub fn command_types(&self) -> Vec<TypeInfo> {
        self.registrations()
            .iter()
            .map(CommandRegistration::type_info)
            .collect()
    }
}

/// The distinct command types outside the framework's reserved namespaces.
pub fn discover_command_types() -> Vec<TypeInfo> {
    CommandDiscovery::default().command_types()
}

/// The registrations outside the framework's reserved namespaces.
pub fn discovered_commands() -> Vec<CommandRegistration> {
    CommandDiscovery::default().registrations()
}

impl TypedCommandDispatcher {
    /// A dispatcher populated with every command `discovery` finds.
    pub fn from_discovery(discovery: &CommandDiscovery) -> Result<Self, RegistrationError> {
        let mut dispatcher = Self::new();
        for registration in discovery.registrations() {
            dispatcher.register_with(registration)?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(commands = dispatcher.len(), "populated dispatcher from discovery");

        Ok(dispatcher)
    }
}
