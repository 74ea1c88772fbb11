use async_trait::async_trait;

use crate::notify::Notification;

use super::{Command, CommandContext, CommandInput, CommandResult};

/// Display metadata of one registered command.
pub struct HelpEntry {
    name: &'static str,
    usage: &'static str,
    description: &'static str,
}

impl HelpEntry {
    pub fn describing(command: &dyn Command) -> Self {
        Self {
            name: command.name(),
            usage: command.usage(),
            description: command.description(),
        }
    }
}

pub struct HelpCommand {
    entries: Vec<HelpEntry>,
}

impl HelpCommand {
    pub fn new(entries: Vec<HelpEntry>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Show available commands."
    }

    fn usage(&self) -> &'static str {
        ""
    }

    fn min_args(&self) -> usize {
        0
    }

    async fn execute(&self, _input: &CommandInput, context: &CommandContext) -> CommandResult {
        let mut lines: Vec<String> = self
            .entries
            .iter()
            .map(|entry| format!("{} {} - {}", entry.name, entry.usage, entry.description))
            .collect();
        lines.push(format!("{} - {}", self.name(), self.description()));

        context.emit(Notification::info(lines.join("\n")).with_title("Available commands"));
        CommandResult::ok()
    }
}
