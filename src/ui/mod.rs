pub mod dialogs;
pub mod formatting;
pub mod updates;

pub use dialogs::{set_status, show_error, StatusLevel};
pub use formatting::{format_active_filters, format_detail, format_options};
pub use updates::update_ui_from_state;
