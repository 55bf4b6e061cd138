//! UI screens.

mod app;
mod home_screen;
mod resource_screen;
mod screen;

pub use app::{App, AppOptions};
pub use home_screen::HomeScreen;
pub use resource_screen::ResourceScreen;
pub use screen::{AppEvent, Screen};
