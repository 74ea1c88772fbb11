use async_trait::async_trait;

use crate::lookup::LookupOutcome;
use crate::notify::Notification;

use super::{lookup_failure, Command, CommandContext, CommandInput, CommandResult};

pub struct VideoCommand;

#[async_trait]
impl Command for VideoCommand {
    fn name(&self) -> &'static str {
        "yt"
    }

    fn description(&self) -> &'static str {
        "Search for videos on YouTube."
    }

    fn usage(&self) -> &'static str {
        "<search query>"
    }

    async fn execute(&self, input: &CommandInput, context: &CommandContext) -> CommandResult {
        let query = input.query();

        match context.services().video.search(&query).await {
            Ok(LookupOutcome::Found(candidates)) => {
                let video = &candidates[0];
                context.emit(Notification::info(format!(
                    "Video result for \"{}\":\n{}",
                    query, video.link
                )));
                CommandResult::ok()
            }
            Ok(LookupOutcome::Empty) => {
                CommandResult::error(format!("No video was found for \"{}\".", query))
            }
            Err(err) => CommandResult::error(lookup_failure(&err)),
        }
    }
}
