//! Final selection printed on exit.

use clap::ValueEnum;
use serde::Serialize;

/// How the selection is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One value per line
    #[default]
    Plain,
    /// `{"values": [...]}`
    Json,
}

#[derive(Serialize)]
struct JsonSelection<'a> {
    values: &'a [&'a str],
}

/// Render the selected values.
pub fn format_selection(values: &[&str], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Plain => Ok(values.join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string(&JsonSelection { values })?),
    }
}
