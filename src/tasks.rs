//! Supervisor for fire-and-forget background tasks.
//!
//! A submitted task runs in its own tokio task, detached from the command
//! invocation that created it. The supervisor owns the task's terminal
//! notification: the task future resolves to exactly one `Notification`,
//! and timeouts and panics are converted into an error notification, so
//! every task produces exactly one notification, never zero and never
//! more than one.
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures::FutureExt;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::notify::{Notification, Notifier};

/// How long a background task may run before it is abandoned.
pub const BACKGROUND_TASK_TIMEOUT: Duration = Duration::from_secs(20);

const TIMEOUT_MESSAGE: &str = "Could not connect to the server.";
const PANIC_MESSAGE: &str = "Something went wrong while processing the request.";

/// Owns the lifetime of background tasks and guarantees their single
/// terminal notification.
#[derive(Clone)]
pub struct TaskSupervisor {
    notifier: Notifier,
    timeout: Duration,
}

impl TaskSupervisor {
    pub fn new(notifier: Notifier) -> Self {
        Self::with_timeout(notifier, BACKGROUND_TASK_TIMEOUT)
    }

    pub fn with_timeout(notifier: Notifier, timeout: Duration) -> Self {
        Self { notifier, timeout }
    }

    /// Spawns `task` independently of the submitting invocation.
    ///
    /// The caller gets no handle back; completion is reported solely
    /// through the notification channel. A task that outlives the timeout
    /// is abandoned and reported as a connection failure.
    pub fn submit<F>(&self, label: &str, task: F)
    where
        F: Future<Output = Notification> + Send + 'static,
    {
        let notifier = self.notifier.clone();
        let timeout = self.timeout;
        let label = label.to_string();
        let id = Uuid::new_v4();

        tokio::spawn(async move {
            debug!(task = %label, %id, "background task started");
            let notification =
                match tokio::time::timeout(timeout, AssertUnwindSafe(task).catch_unwind()).await {
                    Ok(Ok(notification)) => notification,
                    Ok(Err(_)) => {
                        warn!(task = %label, %id, "background task panicked");
                        Notification::error(PANIC_MESSAGE)
                    }
                    Err(_) => {
                        warn!(task = %label, %id, "background task timed out");
                        Notification::error(TIMEOUT_MESSAGE)
                    }
                };
            notifier.send(notification);
            debug!(task = %label, %id, "background task finished");
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Severity;
    use tokio::sync::mpsc::error::TryRecvError;

    #[tokio::test]
    async fn success_emits_exactly_one_notification() {
        let (notifier, mut notifications) = Notifier::channel();
        let supervisor = TaskSupervisor::with_timeout(notifier, Duration::from_secs(1));

        supervisor.submit("test", async { Notification::ok("done") });

        let notification = notifications.recv().await.unwrap();
        assert_eq!(notification.severity, Severity::Ok);
        assert_eq!(notification.body, "done");

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(matches!(notifications.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn timeout_emits_a_single_error_and_no_success() {
        let (notifier, mut notifications) = Notifier::channel();
        let supervisor = TaskSupervisor::with_timeout(notifier, Duration::from_millis(50));

        supervisor.submit("stalled", std::future::pending::<Notification>());

        let notification = notifications.recv().await.unwrap();
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.body, TIMEOUT_MESSAGE);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(matches!(notifications.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn panicking_task_still_notifies_exactly_once() {
        let (notifier, mut notifications) = Notifier::channel();
        let supervisor = TaskSupervisor::with_timeout(notifier, Duration::from_secs(1));

        supervisor.submit("broken", async { panic!("boom") });

        let notification = notifications.recv().await.unwrap();
        assert_eq!(notification.severity, Severity::Error);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(matches!(notifications.try_recv(), Err(TryRecvError::Empty)));
    }
}
