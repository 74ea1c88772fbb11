//! The result protocol of a command invocation.

/// What a `Pending` acknowledgment asks the presentation layer to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckKind {
    Working,
}

/// The single outcome of one command invocation.
///
/// This is the only channel a command reports through; a command never
/// both returns a result and signals failure some other way. The value is
/// terminal: once produced it never transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// The command completed (any notifications were already emitted).
    Ok,
    /// Fewer positional arguments than the command's declared minimum.
    ArgsError,
    /// A domain failure with a user-facing message.
    Error(String),
    /// Work was handed to the background supervisor; a terminal
    /// notification will follow exactly once.
    Pending(AckKind),
}

impl CommandResult {
    pub fn ok() -> Self {
        Self::Ok
    }

    pub fn args_error() -> Self {
        Self::ArgsError
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    pub fn pending() -> Self {
        Self::Pending(AckKind::Working)
    }
}
