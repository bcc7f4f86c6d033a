//! The `pictor generate` command.

use clap::Args;
use pictor_core::objects::is_object_url;
use pictor_core::{Backend, Config, GeneratedImage, Notifier, ScreenProfile, Session, Style};
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Text describing the image (or the historical event)
    #[arg(short, long)]
    pub prompt: String,

    /// Which screen's enhancement and backend to use
    #[arg(long, default_value = "studio")]
    pub screen: ScreenProfile,

    /// Art style (studio only)
    #[arg(short, long, default_value = "realistic")]
    pub style: Style,

    /// Override the configured backend for this screen
    #[arg(long)]
    pub backend: Option<Backend>,

    /// Clipdrop API key (kept in memory only)
    #[arg(long, env = super::CREDENTIAL_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Save the image into this directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the result as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Result printed with `--json`.
#[derive(Debug, Serialize)]
struct GenerateOutput<'a> {
    screen: ScreenProfile,
    backend: &'a str,
    image: &'a GeneratedImage,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved_to: Option<&'a PathBuf>,
}

/// Execute the generate command.
pub async fn execute(args: GenerateArgs, config: &Config) -> anyhow::Result<()> {
    let config = with_backend_override(config, args.screen, args.backend);

    let (notifier, mut rx) = Notifier::channel();
    let session = Session::from_config(args.screen, &config).with_notifier(notifier);
    if let Some(key) = args.api_key {
        session.set_credential(key);
    }
    if args.screen.uses_style() {
        session.set_style(args.style);
    } else if args.style != Style::default() {
        tracing::warn!("--style is ignored on the {} screen", args.screen);
    }
    session.set_prompt(args.prompt);

    let spinner = super::create_spinner_for(&session);
    let result = session.generate().await;
    spinner.finish_and_clear();
    super::print_notifications(&mut rx);
    let image = result?;

    // Inline images only live as long as this process, so keep them on disk.
    let target = match args.output {
        Some(dir) => Some(PathBuf::from(
            shellexpand::tilde(&dir.to_string_lossy()).into_owned(),
        )),
        None if is_object_url(&image.url) => Some(config.download_dir()),
        None => None,
    };
    let saved_to = match target {
        Some(dir) => {
            let saved = session.download(&image, &dir).await;
            super::print_notifications(&mut rx);
            Some(saved?)
        }
        None => None,
    };

    if args.json {
        let output = GenerateOutput {
            screen: args.screen,
            backend: session.backend_name(),
            image: &image,
            saved_to: saved_to.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match &saved_to {
            Some(path) => println!("{}", path.display()),
            None => println!("{}", image.url),
        }
    }

    Ok(())
}

/// Copy of `config` with the screen's backend replaced, if requested.
fn with_backend_override(
    config: &Config,
    screen: ScreenProfile,
    backend: Option<Backend>,
) -> Config {
    let mut config = config.clone();
    if let Some(backend) = backend {
        match screen {
            ScreenProfile::History => config.generation.history_backend = backend,
            ScreenProfile::Studio => config.generation.studio_backend = backend,
        }
    }
    config
}
