//! `dropdown`: pick values from a manifest in the terminal.
//!
//! Runs the control inline below the prompt and prints the selection on
//! exit, one value per line or as JSON.

mod app;
mod appearance;
mod logging;
mod output;

use std::io::stdout;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use dropdown_core::{DropdownConfig, DropdownError, DropdownManifest};
use ratatui::{DefaultTerminal, TerminalOptions, Viewport};
use tracing::{info, warn};

use crate::app::{App, viewport_height};
use crate::appearance::{Appearance, SizeArg, ThemeArg, VariantArg};
use crate::logging::setup_logging;
use crate::output::{OutputFormat, format_selection};

/// Interactive single- or multi-select dropdown.
#[derive(Parser, Debug)]
#[command(name = "dropdown", version, about)]
struct Args {
    /// Manifest with the options (.toml or .json)
    #[arg(short, long, env = "DROPDOWN_MANIFEST")]
    manifest: PathBuf,

    /// Allow selecting more than one value
    #[arg(long)]
    multiple: bool,

    /// Filter options by typing
    #[arg(long)]
    searchable: bool,

    /// Text shown when nothing is selected
    #[arg(long)]
    placeholder: Option<String>,

    /// Trigger style
    #[arg(long, value_enum, default_value_t = VariantArg::Default)]
    variant: VariantArg,

    /// Trigger size
    #[arg(long, value_enum, default_value_t = SizeArg::Medium)]
    size: SizeArg,

    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeArg::Dark)]
    theme: ThemeArg,

    /// How the selection is printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Append logs to this file
    #[arg(long, env = "DROPDOWN_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info", env = "DROPDOWN_LOG_LEVEL")]
    log_level: String,
}

impl Args {
    /// Command-line flags win over the manifest.
    fn apply(&self, config: &mut DropdownConfig) {
        config.multiple |= self.multiple;
        config.searchable |= self.searchable;
        if let Some(placeholder) = &self.placeholder {
            config.placeholder = placeholder.clone();
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<DropdownError>() {
            Some(dropdown_err) => {
                eprintln!("Error: {}", dropdown_err.user_message());
                ExitCode::from(u8::try_from(dropdown_err.exit_code()).unwrap_or(1))
            }
            None => {
                eprintln!("Error: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(args: Args) -> Result<()> {
    let _log_guard = setup_logging(args.log_file.as_deref(), &args.log_level)?;

    let mut manifest = DropdownManifest::load(&args.manifest)?;
    args.apply(&mut manifest.config);
    let appearance = Appearance::new(args.variant, args.size, args.theme);
    let height = viewport_height(
        manifest.config.max_visible,
        manifest.config.searchable,
        appearance.trigger_height(),
    );
    let dropdown = manifest.into_dropdown()?;
    info!(
        manifest = %args.manifest.display(),
        options = dropdown.catalog().len(),
        controlled = dropdown.selection().is_controlled(),
        "starting dropdown session"
    );

    let mut app = App::new(dropdown).with_appearance(appearance);
    let mut terminal = ratatui::init_with_options(TerminalOptions {
        viewport: Viewport::Inline(height),
    });
    let result = execute!(stdout(), EnableMouseCapture)
        .map_err(anyhow::Error::from)
        .and_then(|()| event_loop(&mut terminal, &mut app));

    if let Err(err) = execute!(stdout(), DisableMouseCapture) {
        warn!(error = %err, "failed to disable mouse capture");
    }
    if let Err(err) = terminal.clear() {
        warn!(error = %err, "failed to clear viewport");
    }
    ratatui::restore();
    result?;

    let values = app.finish();
    let values: Vec<&str> = values.iter().map(String::as_str).collect();
    info!(?values, "session finished");
    let printed = format_selection(&values, args.format)?;
    if !printed.is_empty() {
        println!("{printed}");
    }
    Ok(())
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_exit() {
        terminal.draw(|frame| app.draw(frame))?;
        match event::read()? {
            Event::Key(key) => app.on_key(key),
            Event::Mouse(mouse) => app.on_mouse(mouse),
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_manifest() {
        let args = Args::parse_from([
            "dropdown",
            "--manifest",
            "menu.toml",
            "--multiple",
            "--placeholder",
            "Pick one",
            "--format",
            "json",
            "--variant",
            "ghost",
            "--theme",
            "light",
        ]);
        let mut config = DropdownConfig::default().searchable();
        args.apply(&mut config);

        assert!(config.multiple);
        assert!(config.searchable);
        assert_eq!(config.placeholder, "Pick one");
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.variant, VariantArg::Ghost);
        assert_eq!(args.size, SizeArg::Medium);
        assert_eq!(args.theme, ThemeArg::Light);
    }
}
