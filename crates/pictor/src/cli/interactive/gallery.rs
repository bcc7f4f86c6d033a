//! Browsing a screen's results: details, download, regenerate.

use super::handle_interrupt;
use super::screen::ensure_credential;
use super::theme::{pictor_theme, print_dim, print_heading};
use crate::cli::{create_spinner_for, print_notifications};
use dialoguer::{Input, Select};
use pictor_core::{Config, GeneratedImage, Notification, Session};
use std::path::PathBuf;
use tokio::sync::mpsc::UnboundedReceiver;

/// Pick entries from the gallery until the user goes back.
pub async fn browse(
    session: &Session,
    rx: &mut UnboundedReceiver<Notification>,
    config: &Config,
) -> anyhow::Result<()> {
    let theme = pictor_theme();

    loop {
        let gallery = session.gallery();
        print_heading(&gallery.header());
        if gallery.is_empty() {
            print_dim("Nothing generated yet.");
            return Ok(());
        }

        let mut labels: Vec<String> = gallery.iter().map(|e| gallery.menu_label(e)).collect();
        labels.push("Back".to_string());

        let selection = Select::with_theme(&theme)
            .with_prompt("Select an image")
            .items(&labels)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(i) if i < gallery.len() => {
                if let Some(entry) = gallery.get(i) {
                    entry_menu(session, rx, config, entry).await?;
                }
            }
            _ => return Ok(()),
        }
    }
}

async fn entry_menu(
    session: &Session,
    rx: &mut UnboundedReceiver<Notification>,
    config: &Config,
    entry: &GeneratedImage,
) -> anyhow::Result<()> {
    let theme = pictor_theme();

    eprintln!();
    for line in session.gallery().describe(entry) {
        print_dim(&line);
    }
    print_dim(&entry.url);
    eprintln!();

    let mut items = vec!["Download"];
    if session.profile().supports_regenerate() {
        items.push("Regenerate");
    }
    items.push("Back");

    let selection = Select::with_theme(&theme)
        .with_prompt("Image")
        .items(&items)
        .default(0)
        .interact_opt()?;

    match selection.map(|i| items[i]) {
        Some("Download") => download(session, rx, config, entry).await,
        Some("Regenerate") => regenerate(session, rx, entry).await,
        _ => Ok(()),
    }
}

async fn download(
    session: &Session,
    rx: &mut UnboundedReceiver<Notification>,
    config: &Config,
    entry: &GeneratedImage,
) -> anyhow::Result<()> {
    let theme = pictor_theme();
    let Some(dir) = handle_interrupt(
        Input::<String>::with_theme(&theme)
            .with_prompt("Save into directory")
            .default(config.download_dir().display().to_string())
            .interact_text(),
    )?
    else {
        return Ok(());
    };
    let dir = PathBuf::from(shellexpand::tilde(&dir).into_owned());

    let saved = session.download(entry, &dir).await;
    print_notifications(rx);
    if let Ok(path) = saved {
        print_dim(&path.display().to_string());
    }
    Ok(())
}

async fn regenerate(
    session: &Session,
    rx: &mut UnboundedReceiver<Notification>,
    entry: &GeneratedImage,
) -> anyhow::Result<()> {
    ensure_credential(session)?;

    let spinner = create_spinner_for(session);
    let result = session.regenerate(entry).await;
    spinner.finish_and_clear();
    print_notifications(rx);

    if let Ok(fresh) = result {
        print_dim(&format!("New image: {}", fresh.url));
    }
    Ok(())
}
