use clap::Parser;
use explore_core::CriterionKind;
use std::io::{self, Write};
use std::path::PathBuf;

mod errors;
mod handlers;
mod operations;
mod state;
mod ui;

use handlers::{handle_command, run_interactive, Command};
use operations::{validate_criterion, validate_language, FileOperations};
use state::AppState;
use ui::{format_options, set_status, update_ui_from_state, StatusLevel};

/// &explore. - Browse, search and filter the countries of the world
///
/// Examples:
///   # List every country, grouped by first letter
///   explore countries.json
///
///   # Search by name (case-insensitive substring)
///   explore countries.json --search land
///
///   # Filter by continent (OR within continents)
///   explore countries.json --continent Europe --continent Asia
///
///   # Combine search, continents and time zones (AND between them)
///   explore countries.json -s an -c Europe -t UTC+01:00
///
///   # Show one country in detail
///   explore countries.json --detail FRA
///
///   # Browse interactively
///   explore countries.json --interactive
#[derive(Parser, Debug)]
#[command(name = "explore")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - The search matches any part of the common name, ignoring case\n  \
    - A country matches a continent filter by its first listed continent\n  \
    - A country matches a time zone filter if any of its time zones is selected\n  \
    - Multiple values of the same kind are combined with OR\n  \
    - Search, continents and time zones are combined with AND\n\n\
Data:\n  \
    - FILE is a JSON array of country objects, e.g. a saved response of\n    \
      https://restcountries.com/v3.1/all\n  \
    - Countries without a common name are skipped\n  \
    - Set RUST_LOG=debug to see what was skipped")]
struct Cli {
    /// Path to the country list JSON file
    #[arg(value_name = "FILE", env = "EXPLORE_DATA")]
    file: Option<PathBuf>,

    /// Only show countries whose name contains TEXT
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    search: String,

    /// Filter by continent (can be specified multiple times for OR logic)
    #[arg(short, long = "continent", value_name = "NAME")]
    continents: Vec<String>,

    /// Filter by time zone, e.g. UTC+01:00 (can be specified multiple times for OR logic)
    #[arg(short, long = "timezone", value_name = "TZ")]
    timezones: Vec<String>,

    /// Display language label
    #[arg(short, long, value_name = "NAME")]
    language: Option<String>,

    /// Show details for the country with this three-letter code
    #[arg(short, long, value_name = "CODE")]
    detail: Option<String>,

    /// List the available continents, time zones and languages
    #[arg(long)]
    options: bool,

    /// Read commands from standard input after the first listing
    #[arg(short, long)]
    interactive: bool,

    /// Print the visible sections as JSON instead of text
    #[arg(long, conflicts_with = "interactive")]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut state = AppState::new();

    match &cli.file {
        Some(path) => FileOperations::new(&mut state, &mut out).load_file(path)?,
        None => set_status(
            &mut out,
            "No country list given; pass FILE or set EXPLORE_DATA",
            StatusLevel::Warning,
        )?,
    }

    apply_cli_selection(&mut state, &cli)?;

    if cli.options {
        writeln!(out, "{}", format_options(&state.selection))?;
        return Ok(());
    }

    if let Some(code) = &cli.detail {
        handle_command(&mut out, &mut state, Command::Show(code.clone()))?;
        return Ok(());
    }

    if cli.json {
        let sections = state.visible_sections();
        writeln!(out, "{}", serde_json::to_string_pretty(&*sections)?)?;
        return Ok(());
    }

    if cli.interactive {
        let stdin = io::stdin();
        run_interactive(stdin.lock(), &mut out, &mut state)?;
    } else {
        update_ui_from_state(&mut out, &state)?;
    }

    Ok(())
}

/// Seed the selection from command line flags.
/// Rejected values are reported on stderr and skipped.
fn apply_cli_selection(state: &mut AppState, cli: &Cli) -> io::Result<()> {
    let mut warnings = io::stderr();
    state.set_search_text(&cli.search);

    let toggles = cli
        .continents
        .iter()
        .map(|c| (CriterionKind::Continent, c))
        .chain(cli.timezones.iter().map(|t| (CriterionKind::Timezone, t)));

    for (kind, value) in toggles {
        match validate_criterion(kind, value) {
            // A repeated flag must not toggle the value back off
            Ok(value) if state.selection.is_selected(kind, &value) => {}
            Ok(value) => {
                state.toggle_criterion(kind, &value);
            }
            Err(e) => set_status(&mut warnings, e.to_string(), StatusLevel::Warning)?,
        }
    }

    if let Some(language) = &cli.language {
        match validate_language(language) {
            Ok(language) => state.select_language(&language),
            Err(e) => set_status(&mut warnings, e.to_string(), StatusLevel::Warning)?,
        }
    }

    Ok(())
}
