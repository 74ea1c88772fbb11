//! Command registry and dispatching.
//!
//! Commands are registered in a static table built at startup and share a
//! common `execute` capability. The dispatcher tokenizes the raw line,
//! enforces each command's minimum argument count before any remote call
//! is made, and returns the invocation's single `CommandResult`.
mod context;
mod image;
mod info;
mod input;
mod result;
mod video;
mod wiki;

pub use context::{CommandContext, Services};
pub use input::CommandInput;
pub use result::{AckKind, CommandResult};

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::lookup::LookupError;

/// A named command with fixed argument requirements.
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn usage(&self) -> &'static str;

    /// Minimum number of positional arguments; checked by the dispatcher
    /// before `execute` runs.
    fn min_args(&self) -> usize {
        1
    }

    async fn execute(&self, input: &CommandInput, context: &CommandContext) -> CommandResult;
}

/// The static command table.
pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Builds the registry with the built-in search commands plus `help`.
    pub fn with_builtin_commands() -> Self {
        let mut commands: Vec<Arc<dyn Command>> = vec![
            Arc::new(video::VideoCommand),
            Arc::new(image::ImageCommand),
            Arc::new(wiki::WikiCommand),
        ];
        let entries = commands
            .iter()
            .map(|command| info::HelpEntry::describing(command.as_ref()))
            .collect();
        commands.push(Arc::new(info::HelpCommand::new(entries)));
        Self { commands }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Command>> {
        self.commands.iter().find(|command| command.name() == name)
    }

    /// A one-line usage string for `name`, if such a command exists.
    pub fn usage_line(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(|command| format!("{} {}", command.name(), command.usage()))
    }

    /// Dispatches one raw command line.
    ///
    /// Blank input is a no-op. An unknown command name and a too-short
    /// argument list are both rejected before any handler runs.
    pub async fn dispatch(&self, line: &str, context: &CommandContext) -> CommandResult {
        let Some(input) = CommandInput::parse(line) else {
            return CommandResult::ok();
        };
        let Some(command) = self.get(&input.name) else {
            return CommandResult::error(format!(
                "Unknown command \"{}\". Type \"help\" for available commands.",
                input.name
            ));
        };
        if input.args.len() < command.min_args() {
            return CommandResult::args_error();
        }

        debug!(command = command.name(), "executing command");
        command.execute(&input, context).await
    }
}

/// Maps a lookup failure to its fixed user-facing message.
pub(crate) fn lookup_failure(err: &LookupError) -> String {
    match err {
        LookupError::QuotaExhausted => "This command is temporarily unavailable because the bot \
            has exceeded its API request quota. Please try again later."
            .to_string(),
        LookupError::Provider(status) => format!("The API reported an error:\n{}", status),
        LookupError::Transport(_) => "Could not connect to the server.".to_string(),
    }
}
