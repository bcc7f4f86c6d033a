//! Logging initialization and configuration.
//!
//! Uses the `tracing` ecosystem with either human-readable or JSON output.
//! Everything goes to stderr; stdout carries command results.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// HTTP internals are only interesting when something is wrong.
const QUIET_DEPENDENCIES: &[&str] = &["hyper_util=warn", "reqwest=warn", "rustls=warn"];

/// Build the default filter directive for a base level.
///
/// `RUST_LOG`, when set, replaces this entirely.
fn default_directive(level: &str) -> String {
    let mut parts = vec![level.to_string()];
    parts.extend(QUIET_DEPENDENCIES.iter().map(|d| d.to_string()));
    parts.join(",")
}

/// Initialize the logging subsystem at `level` ("error" through "trace").
pub fn init(level: &str, json_format: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    if json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(true),
            )
            .init();
    }
}

/// Initialize logging from the `[logging]` config section.
///
/// `--verbose` raises the level to at least debug; `--json-logs` forces JSON.
pub fn init_from_config(
    config: &pictor_core::Config,
    verbose_override: bool,
    json_logs_override: bool,
) {
    let level = effective_level(&config.logging.level, verbose_override);
    let json_format = json_logs_override || config.logging.format == "json";
    init(level, json_format);
}

fn effective_level(configured: &str, verbose: bool) -> &str {
    match (verbose, configured) {
        (true, "trace") => "trace",
        (true, _) => "debug",
        (false, level) => level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_quiets_http_stack() {
        let directive = default_directive("info");
        assert!(directive.starts_with("info,"));
        assert!(directive.contains("reqwest=warn"));
    }

    #[test]
    fn test_effective_level() {
        assert_eq!(effective_level("warn", false), "warn");
        assert_eq!(effective_level("warn", true), "debug");
        assert_eq!(effective_level("trace", true), "trace");
    }
}
