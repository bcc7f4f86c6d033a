//! One screen's draft menu: prompt, style or examples, generate, gallery.

use super::theme::{pictor_theme, print_dim, print_heading};
use super::{gallery, handle_interrupt};
use crate::cli::{create_spinner_for, print_notifications, CREDENTIAL_ENV};
use console::Style as TermStyle;
use dialoguer::{Input, Password, Select};
use pictor_core::{Config, Notification, ScreenProfile, Session, Style};
use tokio::sync::mpsc::UnboundedReceiver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    EditPrompt,
    ChooseStyle,
    UseExample,
    Surprise,
    Generate,
    Gallery,
    Back,
}

/// Menu entries for the current draft.
fn actions(session: &Session) -> Vec<(Action, String)> {
    let profile = session.profile();
    let mut items = vec![(Action::EditPrompt, "Enter prompt".to_string())];

    if profile.uses_style() {
        items.push((
            Action::ChooseStyle,
            format!("Choose style ({})", session.style().label()),
        ));
        items.push((Action::Surprise, "Surprise me".to_string()));
    } else {
        items.push((Action::UseExample, "Use an example event".to_string()));
    }

    items.push((Action::Generate, "Generate".to_string()));
    items.push((
        Action::Gallery,
        format!("View generated images ({})", session.len()),
    ));
    items.push((Action::Back, "Back to main menu".to_string()));
    items
}

/// Run the screen until the user goes back.
pub async fn run(
    session: &Session,
    rx: &mut UnboundedReceiver<Notification>,
    config: &Config,
) -> anyhow::Result<()> {
    let theme = pictor_theme();
    let profile = session.profile();

    loop {
        print_heading(profile.title());
        let prompt = session.prompt();
        if prompt.is_empty() {
            print_dim("Prompt: (empty)");
        } else {
            print_dim(&format!("Prompt: {prompt}"));
        }
        if profile.uses_style() {
            print_dim(&format!("Style: {}", session.style().label()));
        }
        print_dim(&format!("Backend: {}", session.backend_name()));
        eprintln!();

        let items = actions(session);
        let labels: Vec<&str> = items.iter().map(|(_, label)| label.as_str()).collect();
        let selection = Select::with_theme(&theme)
            .with_prompt(profile.title())
            .items(&labels)
            .default(0)
            .interact_opt()?;

        let Some(action) = selection.map(|i| items[i].0) else {
            return Ok(());
        };

        match action {
            Action::EditPrompt => edit_prompt(session, profile)?,
            Action::ChooseStyle => choose_style(session)?,
            Action::UseExample => choose_example(session)?,
            Action::Surprise => {
                session.surprise_me();
                print_notifications(rx);
            }
            Action::Generate => {
                generate(session, rx).await?;
            }
            Action::Gallery => gallery::browse(session, rx, config).await?,
            Action::Back => return Ok(()),
        }
    }
}

fn edit_prompt(session: &Session, profile: ScreenProfile) -> anyhow::Result<()> {
    let theme = pictor_theme();
    let label = match profile {
        ScreenProfile::History => "Describe a historical event",
        ScreenProfile::Studio => "Describe the image you want",
    };

    if let Some(text) = handle_interrupt(
        Input::<String>::with_theme(&theme)
            .with_prompt(label)
            .with_initial_text(session.prompt())
            .allow_empty(true)
            .interact_text(),
    )? {
        session.set_prompt(text);
    }
    Ok(())
}

fn choose_style(session: &Session) -> anyhow::Result<()> {
    let theme = pictor_theme();
    let labels: Vec<&str> = Style::ALL.iter().map(|s| s.label()).collect();
    let current = Style::ALL
        .iter()
        .position(|s| *s == session.style())
        .unwrap_or(0);

    let selection = Select::with_theme(&theme)
        .with_prompt("Art style")
        .items(&labels)
        .default(current)
        .interact_opt()?;

    if let Some(i) = selection {
        session.set_style(Style::ALL[i]);
    }
    Ok(())
}

fn choose_example(session: &Session) -> anyhow::Result<()> {
    let theme = pictor_theme();
    let examples = session.profile().prompt_set();

    let selection = Select::with_theme(&theme)
        .with_prompt("Example events")
        .items(examples)
        .default(0)
        .interact_opt()?;

    if let Some(i) = selection {
        session.use_example(i);
    }
    Ok(())
}

/// Ask for the key once per run when the backend needs one.
///
/// The environment variable wins; a typed key stays in memory only.
pub(super) fn ensure_credential(session: &Session) -> anyhow::Result<()> {
    if !session.requires_credential() || session.has_credential() {
        return Ok(());
    }

    if let Ok(key) = std::env::var(CREDENTIAL_ENV) {
        if !key.trim().is_empty() {
            print_dim(&format!("Using API key from {CREDENTIAL_ENV}"));
            session.set_credential(key);
            return Ok(());
        }
    }

    let theme = pictor_theme();
    let warn = TermStyle::new().for_stderr().yellow();
    eprintln!("  {}", warn.apply_to(format!("{CREDENTIAL_ENV} not set.")));

    if let Some(key) = handle_interrupt(
        Password::with_theme(&theme)
            .with_prompt("Enter your Clipdrop API key (used for this session only)")
            .allow_empty_password(true)
            .interact(),
    )? {
        session.set_credential(key);
    }
    Ok(())
}

/// Generate from the draft and show the new entry.
async fn generate(
    session: &Session,
    rx: &mut UnboundedReceiver<Notification>,
) -> anyhow::Result<()> {
    ensure_credential(session)?;

    let spinner = create_spinner_for(session);
    let result = session.generate().await;
    spinner.finish_and_clear();
    print_notifications(rx);

    // Failures were already reported; the screen stays usable.
    if let Ok(entry) = result {
        let gallery = session.gallery();
        for line in gallery.describe(&entry) {
            print_dim(&line);
        }
        print_dim(&entry.url);
    }
    Ok(())
}
