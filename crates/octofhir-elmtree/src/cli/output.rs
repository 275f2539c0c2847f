//! Output formatting utilities

use anyhow::{Context, Result};
use colored::Colorize;
use octofhir_elmtree_diagnostics::ElmError;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonPretty,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "pretty" | "json-pretty" => Ok(Self::JsonPretty),
            other => Err(format!("unknown output format `{}`", other)),
        }
    }
}

/// Colour output preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(format!("unknown colour mode `{}`", other)),
        }
    }
}

/// Set up color output based on user preference
pub fn setup_colors(mode: ColorMode) {
    let enabled = match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => atty::is(atty::Stream::Stdout),
    };
    colored::control::set_override(enabled);
}

/// Format an error for display, as a diagnostic when it comes from the library
pub fn format_error(error: &anyhow::Error) -> String {
    match error.downcast_ref::<ElmError>() {
        Some(elm) => elm.to_diagnostic().render_colored(),
        None => format!("{} {:#}", "error:".red().bold(), error),
    }
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "success:".green().bold(), message)
}

/// Write output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = File::create(path)
            .with_context(|| format!("failed to create output file: {}", path.display()))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("failed to write to output file: {}", path.display()))?;
        eprintln!(
            "{}",
            format_success(&format!("output written to {}", path.display()))
        );
    } else {
        print!("{}", content);
    }
    Ok(())
}

/// Serialize a value as JSON text
pub fn format_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let mut text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("failed to serialize JSON")?;
    text.push('\n');
    Ok(text)
}
