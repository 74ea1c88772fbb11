use async_trait::async_trait;

use crate::lookup::resolve::{self, ResolveError};
use crate::notify::Notification;

use super::{lookup_failure, Command, CommandContext, CommandInput, CommandResult};

pub struct WikiCommand;

#[async_trait]
impl Command for WikiCommand {
    fn name(&self) -> &'static str {
        "wiki"
    }

    fn description(&self) -> &'static str {
        "Search for information on Wikipedia."
    }

    fn usage(&self) -> &'static str {
        "<search query>"
    }

    async fn execute(&self, input: &CommandInput, context: &CommandContext) -> CommandResult {
        let query = input.query();
        let encyclopedia = &context.services().encyclopedia;

        let hits = match encyclopedia.search(&query, 1).await {
            Ok(hits) => hits,
            Err(err) => return CommandResult::error(lookup_failure(&err)),
        };
        let Some(first) = hits.into_iter().next() else {
            return CommandResult::error(format!("Nothing was found for \"{}\".", query));
        };

        match resolve::resolve_summary(encyclopedia, &first).await {
            Ok(page) => {
                let mut notification = Notification::info(page.extract).with_title(page.title);
                if let Some(thumbnail) = page.thumbnail {
                    notification = notification.with_image(thumbnail);
                }
                context.emit(notification);
                CommandResult::ok()
            }
            Err(ResolveError::NothingFound) => {
                CommandResult::error(format!("Nothing was found for \"{}\".", query))
            }
            Err(ResolveError::Lookup(err)) => CommandResult::error(lookup_failure(&err)),
        }
    }
}
