//! The interactive client loop: reads command lines, dispatches them and
//! prints the notifications coming back from the command core.
use std::sync::Arc;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::commands::{CommandContext, CommandRegistry, Services};
use crate::config::build_http_client;
use crate::lookup::{EncyclopediaClient, ImageSearchClient, VideoSearchClient};
use crate::notify::Notifier;
use crate::tasks::TaskSupervisor;

use super::render;
use super::setup::PreparedApp;

pub async fn run(prepared: PreparedApp) -> Result<()> {
    let PreparedApp {
        image_config,
        endpoints,
    } = prepared;

    let http = build_http_client()?;
    let (notifier, mut notifications) = Notifier::channel();

    let services = Arc::new(Services {
        video: VideoSearchClient::new(http.clone(), &endpoints.video_api),
        image: image_config
            .map(|config| ImageSearchClient::new(http.clone(), &endpoints.image_api, config)),
        encyclopedia: EncyclopediaClient::new(http, &endpoints.encyclopedia_api),
        tasks: TaskSupervisor::new(notifier.clone()),
    });
    let context = CommandContext::new(services, notifier);
    let registry = CommandRegistry::with_builtin_commands();

    // Notifications arrive asynchronously (background tasks included) and
    // are printed as they come in.
    tokio::spawn(async move {
        while let Some(notification) = notifications.recv().await {
            render::print_notification(&notification);
        }
    });

    let mut editor = DefaultEditor::new()?;
    loop {
        let (returned, readline) = tokio::task::spawn_blocking(move || {
            let line = editor.readline("search> ");
            (editor, line)
        })
        .await?;
        editor = returned;

        match readline {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);
                if line == "exit" {
                    break;
                }

                debug!("dispatching command line: '{}'", line);
                let result = registry.dispatch(&line, &context).await;
                render::print_result(&result, &line, &registry);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}
