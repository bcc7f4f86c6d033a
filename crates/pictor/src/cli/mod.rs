//! Command implementations.

pub mod config;
pub mod generate;
pub mod interactive;
pub mod prompts;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use pictor_core::{Notification, NotificationLevel, Session};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

/// Environment variable read for the Clipdrop key.
pub const CREDENTIAL_ENV: &str = "CLIPDROP_API_KEY";

/// Print every queued notification to stderr, oldest first.
pub fn print_notifications(rx: &mut UnboundedReceiver<Notification>) {
    while let Ok(notification) = rx.try_recv() {
        eprintln!("{}", render_notification(&notification));
    }
}

/// Spinner shown while a session's request is outstanding.
pub fn create_spinner_for(session: &Session) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.magenta} [{elapsed}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!(
        "Generating {} image via {}...",
        session.profile(),
        session.backend_name()
    ));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn render_notification(notification: &Notification) -> String {
    let (symbol, style) = match notification.level {
        NotificationLevel::Success => ("✓", Style::new().for_stderr().green()),
        NotificationLevel::Error => ("✗", Style::new().for_stderr().red()),
    };

    let mut line = format!(
        "  {} {}",
        style.apply_to(symbol),
        style.apply_to(&notification.message)
    );
    if let Some(detail) = &notification.detail {
        let dim = Style::new().for_stderr().dim();
        line.push_str(&format!(" {}", dim.apply_to(format!("({detail})"))));
    }
    line
}
