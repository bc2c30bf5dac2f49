use std::io::{self, Write};
use std::path::Path;

use crate::errors::map_file_load_error;
use crate::state::AppState;
use crate::ui::{set_status, show_error, StatusLevel};

/// File operations orchestration
/// Loads country lists into the state and reports the outcome. A failed
/// load is shown to the user and leaves an empty catalog behind.
pub struct FileOperations<'a, W: Write> {
    state: &'a mut AppState,
    out: &'a mut W,
}

impl<'a, W: Write> FileOperations<'a, W> {
    pub fn new(state: &'a mut AppState, out: &'a mut W) -> Self {
        Self { state, out }
    }

    /// Load a country list from the given path
    pub fn load_file(&mut self, path: &Path) -> io::Result<()> {
        match self.state.load_from_file(path.to_path_buf()) {
            Ok(count) => set_status(
                self.out,
                format!("Loaded {} countries from {}", count, path.display()),
                StatusLevel::Success,
            ),
            Err(e) => {
                let (title, message, details) = map_file_load_error(&e, path);
                show_error(self.out, title, message, details)
            }
        }
    }

    /// Read the current file again
    pub fn reload(&mut self) -> io::Result<()> {
        match self.state.current_file.clone() {
            Some(path) => self.load_file(&path),
            None => set_status(self.out, "No file loaded", StatusLevel::Warning),
        }
    }
}
