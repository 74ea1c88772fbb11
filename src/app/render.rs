//! Terminal rendering of notifications and command results.
//!
//! This is the stand-in presentation collaborator: the command core only
//! produces structured values, and everything user-visible is formatted
//! here.
use colored::Colorize;

use crate::commands::{AckKind, CommandRegistry, CommandResult};
use crate::notify::{Notification, Severity};

pub fn print_notification(notification: &Notification) {
    let marker = match notification.severity {
        Severity::Info => "ℹ️",
        Severity::Ok => "✅",
        Severity::Error => "❌",
    };

    match &notification.title {
        Some(title) => {
            println!("{} {}", marker, title.bold());
            if !notification.body.is_empty() {
                println!("{}", notification.body);
            }
        }
        None => println!("{} {}", marker, notification.body),
    }

    if let Some(author) = &notification.author {
        match &author.url {
            Some(url) => println!("{}", format!("by {} ({})", author.name, url).dimmed()),
            None => println!("{}", format!("by {}", author.name).dimmed()),
        }
    }
    if let Some(image) = &notification.image_url {
        println!("{}", image.underline());
    }
}

pub fn print_result(result: &CommandResult, line: &str, registry: &CommandRegistry) {
    match result {
        CommandResult::Ok => {}
        CommandResult::ArgsError => {
            let name = line.split_whitespace().next().unwrap_or_default();
            match registry.usage_line(name) {
                Some(usage) => println!("❌ Usage: {}", usage),
                None => println!("❌ Not enough arguments."),
            }
        }
        CommandResult::Error(message) => print_notification(&Notification::error(message.clone())),
        CommandResult::Pending(AckKind::Working) => println!("{}", "⏳ Working...".dimmed()),
    }
}
