//! Reusable terminal widgets.

mod confirmation_dialog;
mod entity_list;
mod header_bar;
mod input;
mod select_input;
mod status_bar;

pub use confirmation_dialog::ConfirmationDialog;
pub use entity_list::{EntityListView, RowMarker};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::TextInput;
pub use select_input::SelectInput;
pub use status_bar::{StatusBar, StatusLevel};
