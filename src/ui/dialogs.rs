use colored::Colorize;
use std::io::{self, Write};

/// Semantic level of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Helper function to print a status message with semantic level
pub fn set_status(out: &mut impl Write, text: impl AsRef<str>, level: StatusLevel) -> io::Result<()> {
    let text = text.as_ref();
    let line = match level {
        StatusLevel::Info => text.normal(),
        StatusLevel::Success => text.green(),
        StatusLevel::Warning => text.yellow(),
        StatusLevel::Error => text.red(),
    };
    writeln!(out, "{}", line)
}

/// Helper function to print an error with title, message and details
pub fn show_error(
    out: &mut impl Write,
    title: impl AsRef<str>,
    message: impl AsRef<str>,
    details: impl AsRef<str>,
) -> io::Result<()> {
    writeln!(out, "{}", title.as_ref().red().bold())?;
    writeln!(out, "{}", message.as_ref())?;

    let details = details.as_ref();
    if !details.is_empty() {
        for line in details.lines() {
            writeln!(out, "  {}", line.dimmed())?;
        }
    }
    Ok(())
}
