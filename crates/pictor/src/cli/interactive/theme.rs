//! Dialoguer theme, banner, and headings for Pictor interactive mode.

use console::{style, Style};
use dialoguer::theme::ColorfulTheme;

/// Returns a `ColorfulTheme` in Pictor's magenta/cyan palette.
pub fn pictor_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("◆".to_string()).for_stderr().magenta(),
        prompt_style: Style::new().for_stderr().bold(),
        prompt_suffix: style("›".to_string()).for_stderr().bright().black(),
        active_item_prefix: style("▸".to_string()).for_stderr().magenta(),
        active_item_style: Style::new().for_stderr().magenta(),
        success_prefix: style("✓".to_string()).for_stderr().green(),
        success_suffix: style("·".to_string()).for_stderr().bright().black(),
        error_prefix: style("✗".to_string()).for_stderr().red(),
        error_style: Style::new().for_stderr().red(),
        values_style: Style::new().for_stderr().cyan(),
        ..ColorfulTheme::default()
    }
}

/// Prints the Pictor banner to stderr.
pub fn print_banner() {
    let version_line = format!("Pictor v{}", pictor_core::VERSION);
    let tagline = "Text prompts in, images out";

    let inner_width = tagline.len() + 6;

    let top = format!("  ┌{:─<width$}┐", "", width = inner_width);
    let mid1 = format!("  │{:^width$}│", version_line, width = inner_width);
    let mid2 = format!("  │{:^width$}│", tagline, width = inner_width);
    let bot = format!("  └{:─<width$}┘", "", width = inner_width);

    let magenta = Style::new().for_stderr().magenta();

    eprintln!();
    for line in [&top, &mid1, &mid2, &bot] {
        eprintln!("{}", magenta.apply_to(line));
    }
    eprintln!();
}

/// Screen title with an underline.
pub fn print_heading(title: &str) {
    let bold = Style::new().for_stderr().bold();
    let dim = Style::new().for_stderr().dim();
    eprintln!();
    eprintln!("  {}", bold.apply_to(title));
    eprintln!("  {}", dim.apply_to("─".repeat(title.chars().count())));
}

/// Indented dim line, used for summaries under a heading.
pub fn print_dim(line: &str) {
    let dim = Style::new().for_stderr().dim();
    eprintln!("    {}", dim.apply_to(line));
}
