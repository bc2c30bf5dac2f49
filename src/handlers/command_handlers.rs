use colored::Colorize;
use explore_core::CriterionKind;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::handlers::filter_handlers::{handle_language, handle_reset, handle_search, handle_toggle};
use crate::operations::FileOperations;
use crate::state::AppState;
use crate::ui::{format_active_filters, format_detail, format_options, set_status, update_ui_from_state, StatusLevel};

const HELP: &str = "\
Commands:
  search <text>      Filter by name (empty text clears the search)
  continent <name>   Toggle a continent
  timezone <tz>      Toggle a time zone, e.g. UTC+01:00
  reset              Clear continents and time zones
  language <name>    Pick a display language
  show <code>        Show details for a country, e.g. show FRA
  list               Show the current list
  filters            Show the active filters
  options            Show the available choices
  reload             Read the data file again
  help               Show this help
  quit               Leave";

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Toggle(CriterionKind, String),
    Reset,
    Language(String),
    Show(String),
    List,
    Filters,
    Options,
    Reload,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let require = |what: &str| {
            if rest.is_empty() {
                Err(format!("'{}' needs {}", word, what))
            } else {
                Ok(rest.to_string())
            }
        };

        match word.to_lowercase().as_str() {
            "search" | "s" => Ok(Command::Search(rest.to_string())),
            "continent" | "c" => Ok(Command::Toggle(CriterionKind::Continent, require("a continent")?)),
            "timezone" | "t" => Ok(Command::Toggle(CriterionKind::Timezone, require("a time zone")?)),
            "reset" => Ok(Command::Reset),
            "language" | "l" => Ok(Command::Language(require("a language")?)),
            "show" => Ok(Command::Show(require("a country code")?)),
            "list" | "ls" => Ok(Command::List),
            "filters" => Ok(Command::Filters),
            "options" => Ok(Command::Options),
            "reload" => Ok(Command::Reload),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "" => Err("Type 'help' for a list of commands".to_string()),
            other => Err(format!("Unknown command '{}'. Type 'help' for a list of commands", other)),
        }
    }
}

/// Whether the interactive loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one command to the state and print its result
pub fn handle_command(out: &mut impl Write, state: &mut AppState, command: Command) -> io::Result<Flow> {
    match command {
        Command::Search(text) => handle_search(out, state, &text)?,
        Command::Toggle(kind, value) => handle_toggle(out, state, kind, &value)?,
        Command::Reset => handle_reset(out, state)?,
        Command::Language(value) => handle_language(out, state, &value)?,
        Command::Show(code) => handle_show(out, state, &code)?,
        Command::List => update_ui_from_state(out, state)?,
        Command::Filters => {
            let text = format_active_filters(&state.selection);
            if text.is_empty() {
                set_status(out, "No active filters", StatusLevel::Info)?;
            } else {
                writeln!(out, "{}", text)?;
            }
        }
        Command::Options => writeln!(out, "{}", format_options(&state.selection))?,
        Command::Reload => {
            FileOperations::new(state, out).reload()?;
            update_ui_from_state(out, state)?;
        }
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

/// Print the detail view for a country code
pub fn handle_show(out: &mut impl Write, state: &mut AppState, code: &str) -> io::Result<()> {
    match state.select_country(code) {
        Some(record) => writeln!(out, "{}", format_detail(record)),
        None => set_status(out, format!("No country with code '{}'", code), StatusLevel::Warning),
    }
}

/// Read commands line by line until `quit` or end of input
pub fn run_interactive(input: impl BufRead, out: &mut impl Write, state: &mut AppState) -> io::Result<()> {
    update_ui_from_state(out, state)?;
    write!(out, "{} ", ">".bold())?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        log::debug!("command: {}", line);

        let flow = match line.parse::<Command>() {
            Ok(command) => handle_command(out, state, command)?,
            Err(message) => {
                set_status(out, message, StatusLevel::Warning)?;
                Flow::Continue
            }
        };

        if flow == Flow::Quit {
            break;
        }
        write!(out, "{} ", ">".bold())?;
        out.flush()?;
    }

    Ok(())
}
