//! The `pictor config` command for configuration management.

use clap::{Args, Subcommand};
use pictor_core::Config;
use std::path::Path;

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display current configuration
    Show,

    /// Show config file path
    Path,

    /// Initialize a new config file with defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Set one value, e.g. `simulated.delay_ms 1500`
    Set {
        /// Dotted key: `<section>.<field>`
        key: String,

        /// New value (numbers and booleans are written unquoted)
        value: String,
    },
}

/// Execute the config command.
pub async fn execute(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = Config::load()?;
            let toml = config.to_toml()?;
            println!("{}", toml);
        }

        ConfigCommand::Path => {
            let path = Config::default_path();
            println!("{}", path.display());
        }

        ConfigCommand::Init { force } => {
            let path = Config::default_path();
            init_file(&path, force)?;
            tracing::info!("Config file created at: {}", path.display());
            println!("Configuration initialized at: {}", path.display());
        }

        ConfigCommand::Set { key, value } => {
            let path = Config::default_path();
            set_in_file(&path, &key, &value)?;
            tracing::info!("Set {key} in {}", path.display());
            println!("{key} = {value}");
        }
    }

    Ok(())
}

fn init_file(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at: {}\nUse --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, Config::default().to_toml()?)?;
    Ok(())
}

/// Update one key in the file at `path`, creating it if needed.
fn set_in_file(path: &Path, key: &str, raw: &str) -> anyhow::Result<()> {
    let content = if path.exists() {
        std::fs::read_to_string(path)?
    } else {
        String::new()
    };

    let updated = set_value(&content, key, raw)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, updated)?;
    Ok(())
}

/// Set `key` in a TOML document, keeping comments and layout.
///
/// Only keys present in the default configuration are accepted, and the
/// result must still load as a valid `Config`.
fn set_value(content: &str, key: &str, raw: &str) -> anyhow::Result<String> {
    let (section, field) = key
        .split_once('.')
        .ok_or_else(|| anyhow::anyhow!("Key must look like <section>.<field>, got: {key}"))?;

    if field.contains("key") || field.contains("token") {
        anyhow::bail!(
            "Credentials are never stored in the config file. \
             Pass --api-key or set {} instead.",
            super::CREDENTIAL_ENV
        );
    }

    let known: toml_edit::DocumentMut = Config::default().to_toml()?.parse()?;
    if known.get(section).and_then(|s| s.get(field)).is_none() {
        anyhow::bail!("Unknown config key: {key}");
    }

    let mut doc: toml_edit::DocumentMut = content.parse()?;
    match doc.get(section) {
        None => doc[section] = toml_edit::Item::Table(toml_edit::Table::new()),
        Some(item) if item.is_table_like() => {}
        Some(_) => anyhow::bail!("`{section}` in the config file is not a table"),
    }
    doc[section][field] = parse_scalar(raw);

    let updated = doc.to_string();
    Config::from_toml(&updated)?;
    Ok(updated)
}

fn parse_scalar(raw: &str) -> toml_edit::Item {
    if let Ok(n) = raw.parse::<i64>() {
        return toml_edit::value(n);
    }
    match raw {
        "true" => toml_edit::value(true),
        "false" => toml_edit::value(false),
        _ => toml_edit::value(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pictor_core::Backend;

    #[test]
    fn test_set_value_into_empty_document() {
        let updated = set_value("", "simulated.delay_ms", "1500").unwrap();
        let config = Config::from_toml(&updated).unwrap();
        assert_eq!(config.simulated.delay_ms, 1500);
    }

    #[test]
    fn test_set_value_preserves_comments() {
        let original = "# my settings\n[general]\n# where images go\ndownload_dir = \"/tmp/a\"\n";
        let updated = set_value(original, "generation.studio_backend", "simulated").unwrap();

        assert!(updated.contains("# my settings"));
        assert!(updated.contains("# where images go"));
        let config = Config::from_toml(&updated).unwrap();
        assert_eq!(config.generation.studio_backend, Backend::Simulated);
    }

    #[test]
    fn test_set_value_rejects_unknown_key() {
        let err = set_value("", "general.colour", "blue").unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));
        assert!(set_value("", "nodot", "1").is_err());
    }

    #[test]
    fn test_set_value_rejects_credentials() {
        let err = set_value("", "clipdrop.api_key", "sk-1").unwrap_err();
        assert!(err.to_string().contains("never stored"));
    }

    #[test]
    fn test_set_value_rejects_invalid_result() {
        assert!(set_value("", "simulated.delay_ms", "0").is_err());
        assert!(set_value("", "generation.history_backend", "dalle").is_err());
        assert!(set_value("", "clipdrop.timeout_ms", "soon").is_err());
    }

    #[test]
    fn test_init_and_set_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        init_file(&path, false).unwrap();
        assert!(init_file(&path, false).is_err());
        init_file(&path, true).unwrap();

        set_in_file(&path, "logging.format", "json").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.logging.format, "json");
    }
}
