//! Persisted user settings.

mod file;

use std::io;

use crate::pass::config::GenerationConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub generation: GenerationConfig,
    /// Passwords per run.
    pub count: usize,
    /// Append destination; empty means terminal output.
    pub output_file: String,
    /// Runtime flag, never persisted.
    pub to_clipboard: bool,
    /// Flags replayed when the binary is run bare.
    pub cli_command: String,
}

impl Settings {
    pub fn load_from_file() -> io::Result<Self> {
        file::load()
    }

    pub fn save_to_file(&self) -> io::Result<()> {
        file::save(self)
    }

    pub fn has_saved_command() -> bool {
        Self::load_from_file()
            .map(|s| !s.cli_command.is_empty())
            .unwrap_or(false)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            count: 1,
            output_file: String::new(),
            to_clipboard: false,
            cli_command: String::new(),
        }
    }
}
