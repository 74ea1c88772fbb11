use async_trait::async_trait;

use crate::lookup::{select, ImageSearchClient, LookupOutcome};
use crate::notify::{Author, Notification};

use super::{lookup_failure, Command, CommandContext, CommandInput, CommandResult};

const UNAVAILABLE: &str = "This command does not work because the API key and/or CX are not \
    available. The bot is probably not running in a production environment.";

pub struct ImageCommand;

#[async_trait]
impl Command for ImageCommand {
    fn name(&self) -> &'static str {
        "img"
    }

    fn description(&self) -> &'static str {
        "Search for images on Google."
    }

    fn usage(&self) -> &'static str {
        "<search query> [--index=<index 0 - 4>]"
    }

    async fn execute(&self, input: &CommandInput, context: &CommandContext) -> CommandResult {
        // Re-checked on every invocation; the missing-credentials warning
        // was already logged once at startup.
        let Some(client) = context.services().image.clone() else {
            return CommandResult::error(UNAVAILABLE);
        };

        let index = input.option_int("index");
        let query = input.query();

        context
            .services()
            .tasks
            .submit("image-search", image_task(client, query, index));
        CommandResult::pending()
    }
}

/// The background half of the image command. Resolves to the task's
/// single terminal notification.
async fn image_task(client: ImageSearchClient, query: String, index: Option<i64>) -> Notification {
    match client.search(&query).await {
        Ok(LookupOutcome::Found(candidates)) => {
            let (chosen, image) = select::choose(&candidates, index);
            Notification::ok("")
                .with_title(format!("Image result for \"{}\" (index: {})", query, chosen))
                .with_author(Author {
                    name: image.title.clone(),
                    url: image.context_link.clone(),
                    icon_url: image.thumbnail.clone(),
                })
                .with_image(image.link.clone())
        }
        Ok(LookupOutcome::Empty) => {
            Notification::error(format!("No image was found for \"{}\"!", query))
        }
        Err(err) => Notification::error(lookup_failure(&err)),
    }
}
