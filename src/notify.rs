//! The outbound notification surface of the bot.
//!
//! Commands and background tasks never render anything themselves; they
//! produce `Notification` values and hand them to a `Notifier`. Whatever
//! sits on the receiving end of the channel (the terminal front end here,
//! a chat platform in production) decides how a notification is displayed.
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;

/// The severity class of a notification.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Ok,
    Error,
}

/// Attribution metadata for a notification, e.g. the source of an image.
#[derive(Serialize, Clone, Debug)]
pub struct Author {
    pub name: String,
    pub url: Option<String>,
    pub icon_url: Option<String>,
}

/// A structured message produced by a command invocation or a background
/// task, consumed by the presentation layer.
#[derive(Serialize, Clone, Debug)]
pub struct Notification {
    pub severity: Severity,
    pub title: Option<String>,
    pub body: String,
    pub image_url: Option<String>,
    pub author: Option<Author>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(severity: Severity, body: impl Into<String>) -> Self {
        Self {
            severity,
            title: None,
            body: body.into(),
            image_url: None,
            author: None,
            created_at: Utc::now(),
        }
    }

    pub fn info(body: impl Into<String>) -> Self {
        Self::new(Severity::Info, body)
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(Severity::Ok, body)
    }

    pub fn error(body: impl Into<String>) -> Self {
        Self::new(Severity::Error, body)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }
}

/// A cheaply clonable handle for emitting notifications.
///
/// Sending never fails from the caller's point of view; if the receiving
/// side has gone away there is nobody left to notify.
#[derive(Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl Notifier {
    /// Creates a notifier together with the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn send(&self, notification: Notification) {
        let _ = self.tx.send(notification);
    }
}
