//! Command and dispatcher contracts.
//!
//! A [`Command`] is a unit of executable behavior registered under its own
//! type. A [`CommandDispatcher`] belongs to a single container and knows how to
//! construct and execute the command types registered with it.

use crate::type_info::TypeInfo;

/// A discrete unit of executable behavior.
///
/// Commands are constructed fresh for every dispatch and dropped afterwards.
///
/// # Example
///
/// ```rust
/// use commandeer_core::Command;
///
/// #[derive(Default)]
/// struct Ping;
///
/// impl Command for Ping {
///     fn execute(&mut self) {}
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a Command",
    label = "missing `Command` implementation",
    note = "Implement `Command` to make the type dispatchable."
)]
pub trait Command: 'static {
    /// Run the command.
    fn execute(&mut self);
}

/// Constructs a new instance of a command.
pub type CommandFactory = fn() -> Box<dyn Command>;

/// Per-container component that constructs and executes registered commands.
pub trait CommandDispatcher: Send + Sync {
    /// Whether `command` is registered with this dispatcher.
    fn has_registration(&self, command: &TypeInfo) -> bool;

    /// Construct and run `command`.
    ///
    /// Callers check [`has_registration`](Self::has_registration) first;
    /// executing an unregistered type does nothing.
    fn execute(&self, command: &TypeInfo);

    /// The command types registered with this dispatcher, in registration order.
    fn registered_types(&self) -> Vec<TypeInfo> {
        Vec::new()
    }
}

impl<D: CommandDispatcher + ?Sized> CommandDispatcher for std::sync::Arc<D> {
    fn has_registration(&self, command: &TypeInfo) -> bool {
        (**self).has_registration(command)
    }

    fn execute(&self, command: &TypeInfo) {
        (**self).execute(command)
    }

    fn registered_types(&self) -> Vec<TypeInfo> {
        (**self).registered_types()
    }
}
