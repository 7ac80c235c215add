//! Error types for Commandeer.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`CommandeerError`] - Top-level error type for all Commandeer operations
//! - [`CommandError`] - Errors during command dispatch
//! - [`RegistrationError`] - Errors while assembling registries and dispatchers
//! - [`InjectError`] - Errors while assigning values into injection points

use crate::{inject::InjectionKey, type_info::TypeInfo};
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Commandeer operations.
#[derive(Error, Debug)]
pub enum CommandeerError {
    /// An error occurred during command dispatch.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// An error occurred while registering containers or commands.
    #[error("registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// An error occurred while injecting a member.
    #[error("injection error: {0}")]
    Inject(#[from] InjectError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur during command dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No container in the registry can dispatch the requested command type.
    #[error("no command registered for type {command}")]
    NoCommandBinding {
        /// The command type that was requested.
        command: TypeInfo,
    },
}

/// Errors raised while assembling a registry or a dispatcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// The same container instance was registered twice.
    #[error("container already registered: {0}")]
    DuplicateContainer(String),

    /// The same command type was registered twice with one dispatcher.
    #[error("command already registered: {0}")]
    DuplicateCommand(TypeInfo),
}

/// Errors that can occur while injecting values into members.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InjectError {
    /// The target has no injectable member with this name.
    #[error("{target} has no injectable member `{member}`")]
    UnknownMember {
        /// The type being injected into.
        target: TypeInfo,
        /// The requested member name.
        member: String,
    },

    /// The supplied value does not have the member's declared type.
    #[error("value for member `{member}` is not of type {expected}")]
    TypeMismatch {
        /// The member name.
        member: String,
        /// The declared type of the member.
        expected: TypeInfo,
    },

    /// The resolver had no binding for the member's key.
    #[error("no binding to inject into `{member}` ({key})")]
    Unresolved {
        /// The member name.
        member: String,
        /// Description of the key that was looked up.
        key: String,
    },
}

impl InjectError {
    /// Build an [`InjectError::Unresolved`] for `member` looked up under `key`.
    pub fn unresolved(member: &str, key: &InjectionKey<'_>) -> Self {
        InjectError::Unresolved {
            member: member.to_string(),
            key: key.to_string(),
        }
    }
}

// Convenience conversions
impl From<BoxError> for CommandeerError {
    fn from(err: BoxError) -> Self {
        CommandeerError::Custom(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;

    #[test]
    fn test_no_binding_names_command() {
        let err = CommandError::NoCommandBinding {
            command: TypeInfo::named::<Ping>("app::commands", "Ping"),
        };
        assert_eq!(
            err.to_string(),
            "no command registered for type app::commands::Ping"
        );
    }

    #[test]
    fn test_top_level_conversion() {
        let err: CommandeerError = CommandError::NoCommandBinding {
            command: TypeInfo::of::<u8>(),
        }
        .into();
        assert!(matches!(err, CommandeerError::Command(_)));
        assert!(err.to_string().starts_with("command error: "));
    }
}
