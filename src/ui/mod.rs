pub mod display;
pub mod runner;

pub use display::{render_display, render_keypad, render_panel};
pub use runner::{OutputFormat, Runner};
