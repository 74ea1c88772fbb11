//! This module defines the `CommandContext`, which provides access to the
//! shared lookup services and the notification channel for command
//! handlers.
use std::sync::Arc;

use crate::lookup::{EncyclopediaClient, ImageSearchClient, VideoSearchClient};
use crate::notify::{Notification, Notifier};
use crate::tasks::TaskSupervisor;

/// The shared services available to every command.
///
/// Constructed once at startup; read-only afterwards. The image client is
/// absent when its credentials were not configured.
pub struct Services {
    pub video: VideoSearchClient,
    pub image: Option<ImageSearchClient>,
    pub encyclopedia: EncyclopediaClient,
    pub tasks: TaskSupervisor,
}

/// Provides context and utilities to command handlers.
///
/// This struct allows command handlers to reach the lookup services and
/// send notifications back to the presentation layer.
#[derive(Clone)]
pub struct CommandContext {
    services: Arc<Services>,
    notifier: Notifier,
}

impl CommandContext {
    pub fn new(services: Arc<Services>, notifier: Notifier) -> Self {
        Self { services, notifier }
    }

    /// Returns the shared services.
    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Emits a notification to the presentation layer.
    pub fn emit(&self, notification: Notification) {
        self.notifier.send(notification);
    }
}
