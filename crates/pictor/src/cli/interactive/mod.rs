//! Interactive CLI mode, the guided experience for bare `pictor` invocation.
//!
//! Each screen keeps its own session for the whole run, so its gallery is
//! still there after returning to the main menu.

mod gallery;
mod screen;
pub mod theme;

use console::Style;
use dialoguer::Select;
use pictor_core::{Config, Notifier, ScreenProfile, Session};

/// Convert a dialoguer result into `Ok(Some(value))` on success, `Ok(None)` on
/// interrupt (Ctrl+C / terminal disconnect), and `Err` for other I/O failures.
fn handle_interrupt<T>(result: dialoguer::Result<T>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Main menu options presented to the user.
const MENU_ITEMS: &[&str] = &[
    "Studio: generate an image",
    "History: visualize an event",
    "Configure settings",
    "Exit",
];

/// Entry point for interactive mode.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    theme::print_banner();

    let theme = theme::pictor_theme();
    let (notifier, mut rx) = Notifier::channel();
    let studio =
        Session::from_config(ScreenProfile::Studio, config).with_notifier(notifier.clone());
    let history = Session::from_config(ScreenProfile::History, config).with_notifier(notifier);

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(MENU_ITEMS)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(0) => screen::run(&studio, &mut rx, config).await?,
            Some(1) => screen::run(&history, &mut rx, config).await?,
            Some(2) => show_config(config)?,
            Some(3) | None => break,
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// Summary of the current settings, with the full TOML on request.
fn show_config(config: &Config) -> anyhow::Result<()> {
    let theme = theme::pictor_theme();
    let dim = Style::new().for_stderr().dim();
    let cyan = Style::new().for_stderr().cyan();
    let label = Style::new().for_stderr().bold();

    loop {
        eprintln!();
        eprintln!("  {}", cyan.apply_to("Current configuration:"));
        eprintln!();

        let config_path = Config::default_path();
        let path_note = if config_path.exists() {
            "(exists)"
        } else {
            "(using defaults)"
        };

        let config_file = format!("{} {}", config_path.display(), dim.apply_to(path_note));
        let generation = &config.generation;
        let delay = format!("{}ms", config.simulated.delay_ms);
        let timeout = config.clipdrop.timeout_ms;
        let clipdrop = format!("{} ({timeout}ms timeout)", config.clipdrop.endpoint);

        let rows = [
            ("Config file:", config_file),
            ("Download dir:", config.download_dir().display().to_string()),
            ("Studio backend:", generation.studio_backend.to_string()),
            ("History backend:", generation.history_backend.to_string()),
            ("Simulated delay:", delay),
            ("Clipdrop:", clipdrop),
            ("Log level:", config.logging.level.clone()),
        ];
        for (name, value) in rows {
            eprintln!("    {:<20} {value}", label.apply_to(name));
        }
        eprintln!();

        let items = &["View full config (TOML)", "Show config file path", "Back"];

        let selection = Select::with_theme(&theme)
            .with_prompt("Configuration")
            .items(items)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(0) => match config.to_toml() {
                Ok(toml) => {
                    eprintln!();
                    eprintln!("{}", dim.apply_to("─".repeat(50)));
                    eprintln!("{toml}");
                    eprintln!("{}", dim.apply_to("─".repeat(50)));
                    eprintln!();
                }
                Err(e) => {
                    let err = Style::new().for_stderr().red();
                    eprintln!("  {} Failed to serialize config: {e}", err.apply_to("✗"));
                    eprintln!();
                }
            },
            Some(1) => {
                eprintln!();
                eprintln!("  {}", Config::default_path().display());
                eprintln!();
            }
            Some(2) | None => break,
            _ => unreachable!(),
        }
    }

    Ok(())
}
