use colored::Colorize;
use std::io::{self, Write};

use crate::state::AppState;
use crate::ui::formatting::{format_active_filters, format_sections};

/// Print the current list view: title, active filters and visible sections
pub fn update_ui_from_state(out: &mut impl Write, state: &AppState) -> io::Result<()> {
    writeln!(out, "{}", state.get_title().bold())?;

    let filters_text = format_active_filters(&state.selection);
    if !filters_text.is_empty() {
        writeln!(out, "{}", filters_text.dimmed())?;
    }
    writeln!(out)?;

    let sections = state.visible_sections();
    if sections.is_empty() {
        writeln!(out, "{}", "No countries match.".italic())?;
    } else {
        writeln!(out, "{}", format_sections(&sections))?;
    }

    Ok(())
}
