//! Terminal output for CLI handlers.
//!
//! Handlers print through these helpers so that `--json` switches every
//! command to one machine-readable document and `--quiet` silences
//! decoration.

use std::fmt::Display;
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use parking_lot::RwLock;
use serde_json::json;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Disable ANSI colors.
    pub plain: bool,
}

impl OutputConfig {
    /// Create a new output configuration.
    #[must_use]
    pub const fn new(json: bool, quiet: bool, plain: bool) -> Self {
        Self { json, quiet, plain }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    *config_cell().read()
}

/// Check if decorative (non-JSON) output should be suppressed.
fn suppressed(config: OutputConfig) -> bool {
    config.json || config.quiet
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    *config_cell().write() = config;
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Return whether quiet mode is enabled.
#[must_use]
pub fn is_quiet() -> bool {
    read_config().quiet
}

/// Print a section header.
pub fn section(title: &str) {
    let config = read_config();
    if suppressed(config) {
        return;
    }

    println!();
    if config.plain {
        println!("{title}");
    } else {
        println!("{}", title.bold());
    }
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let config = read_config();
    if config.json {
        return;
    }
    if config.quiet {
        println!("{value}");
        return;
    }

    if config.plain {
        println!("  {label:<14} {value}");
    } else {
        println!("  {:<14} {}", label.dimmed(), value);
    }
}

/// Print a dimmed note.
pub fn note(message: &str) {
    let config = read_config();
    if suppressed(config) {
        return;
    }

    if config.plain {
        println!("  {message}");
    } else {
        println!("  {}", message.dimmed());
    }
}

/// Print a warning line.
pub fn warning(message: &str) {
    let config = read_config();
    if config.json {
        return;
    }

    if config.plain {
        println!("  ! {message}");
    } else {
        println!("  {} {}", "⚠".yellow(), message);
    }
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    let config = read_config();

    if config.json {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    if config.plain {
        eprintln!("  x {message}");
    } else {
        eprintln!("  {} {}", "×".red(), message);
    }
}

/// Print multiple lines of content, each indented.
pub fn lines(content: &str) {
    let config = read_config();
    if suppressed(config) {
        return;
    }

    for line in content.lines() {
        println!("  {line}");
    }
}

/// Emit a JSON value directly.
pub fn json_output(value: serde_json::Value) {
    println!("{value}");
}

/// Format a signed ISK amount, green when positive and red when negative.
pub fn signed(value: rust_decimal::Decimal) -> String {
    let config = read_config();
    let text = format!("{value} ISK");
    if config.json || config.plain || value.is_zero() {
        return text;
    }
    if value.is_sign_positive() {
        format!("{}", text.green())
    } else {
        format!("{}", text.red())
    }
}

/// Format a highlighted value in cyan.
pub fn highlight(value: impl Display) -> String {
    let config = read_config();
    let value = value.to_string();
    if config.json || config.plain {
        return value;
    }
    format!("{}", value.cyan())
}
