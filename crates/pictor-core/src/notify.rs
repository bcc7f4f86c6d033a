//! User-facing notifications emitted by a session.
//!
//! Sessions push short messages into an unbounded channel; whichever front
//! end owns the receiver decides how to show them.

use serde::Serialize;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    /// Diagnostic detail (failure class and cause) for error notifications
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Sending half held by a session. A notifier without a receiver drops
/// messages after logging them.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    tx: Option<mpsc::UnboundedSender<Notification>>,
}

impl Notifier {
    /// Create a connected notifier and its receiver.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx: Some(tx) }, rx)
    }

    /// Notifier that only logs.
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn success(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{message}");
        self.send(NotificationLevel::Success, message, None);
    }

    pub fn error(&self, message: impl Into<String>, detail: Option<String>) {
        let message = message.into();
        match &detail {
            Some(d) => tracing::warn!("{message} ({d})"),
            None => tracing::warn!("{message}"),
        }
        self.send(NotificationLevel::Error, message, detail);
    }

    fn send(&self, level: NotificationLevel, message: String, detail: Option<String>) {
        if let Some(tx) = &self.tx {
            // Receiver gone means the front end closed; nothing to do.
            let _ = tx.send(Notification {
                level,
                message,
                detail,
            });
        }
    }
}
