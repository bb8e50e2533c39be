//! Interactive terminal UI.

mod input;
mod menu;
mod text;

pub use text::print_help;

/// Run interactive mode.
pub fn run() {
    menu::run();
}
