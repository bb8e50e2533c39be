//! CLI context - bundles settings, flags, and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, prompts};
use crate::pass::alphabet::Alphabet;
use crate::pass::{output, strength};
use crate::rng;
use crate::settings::Settings;
use crate::tui::print_help;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub saved_settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
    args: Vec<String>,
}

impl Context {
    /// Parse command-line arguments into a fresh context. Returns the error
    /// message when parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let saved_settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });

        let settings = if flags.saved {
            saved_settings.clone()
        } else {
            Settings {
                cli_command: saved_settings.cli_command.clone(),
                ..Default::default()
            }
        };

        Ok(Self {
            settings,
            saved_settings,
            clipboard: None,
            flags,
            args,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        self.handle_command();
        self.apply_flags();
        prompts::set_quiet(self.flags.quiet);
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passforge {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// `-c FLAGS` saves the flags as the default command (and still runs
    /// them); a bare `-c` clears it. A saved command is replayed when the
    /// invocation carries no explicit generation arguments.
    fn handle_command(&mut self) {
        if self.flags.command {
            let command = self.args[1..]
                .iter()
                .filter(|a| *a != "-c" && *a != "--command")
                .cloned()
                .collect::<Vec<_>>()
                .join(" ");
            if command.is_empty() {
                prompts::command_cleared();
            } else {
                prompts::command_saved(&command);
            }
            self.saved_settings.cli_command = command.clone();
            if let Err(e) = self.saved_settings.save_to_file() {
                prompts::warn(&format!("Failed to save command: {}", e));
            }
            self.settings.cli_command = command;
        } else if !self.settings.cli_command.is_empty() && !self.flags.has_explicit_args() {
            let mut combined = vec![self.args[0].clone()];
            combined.extend(
                self.settings
                    .cli_command
                    .split_whitespace()
                    .map(String::from),
            );
            match super::parse(&combined) {
                Ok(saved_flags) => self.flags = saved_flags,
                Err(e) => prompts::warn(&format!("Saved command ignored: {}", e)),
            }
        }
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if self.flags.default {
            self.settings.generation = Default::default();
        }

        let g = &mut self.settings.generation;

        if let Some(len) = self.flags.length {
            g.length = len;
        }
        if self.flags.no_lower {
            g.lowercase = false;
        }
        if self.flags.no_upper {
            g.uppercase = false;
        }
        if self.flags.no_digits {
            g.digits = false;
        }
        if self.flags.no_symbols {
            g.symbols = false;
        }
        if self.flags.no_lookalikes {
            g.exclude_lookalikes = true;
        }
        if self.flags.allow_repeats {
            g.avoid_repeats = false;
        }
        if self.flags.allow_sequences {
            g.avoid_sequences = false;
        }
        if self.flags.all_classes {
            g.require_all_classes = true;
        }
        if let Some(ref chars) = self.flags.special {
            g.symbol_chars = chars.clone();
            g.symbols = true;
        }
        if let Some(ref chars) = self.flags.exclude {
            g.excluded_chars = chars.clone();
        }

        if let Some(num) = self.flags.number {
            self.settings.count = num;
        }

        if let Some(ref path) = self.flags.output {
            self.settings.output_file = if path.is_empty() {
                "passwords.txt".to_string()
            } else if path.ends_with('/') {
                format!("{}passwords.txt", path)
            } else {
                path.clone()
            };
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(ctx) => {
                    self.clipboard = Some(ctx);
                    self.settings.to_clipboard = true;
                }
                Err(_) => {
                    if prompts::clipboard_fallback_prompt() {
                        self.settings.to_clipboard = false;
                    } else {
                        std::process::exit(0);
                    }
                }
            }
        }
    }

    /// Generate passwords and hand them to the selected destination.
    fn generate_output(&mut self) -> Result<(), Done> {
        let mut rng = rng::system();

        match output::write_batch(&self.settings, &mut rng) {
            Ok(Some(payload)) => {
                if let Some(ctx) = self.clipboard.as_mut() {
                    match ctx.set_contents(payload.to_string()) {
                        Ok(()) => {
                            // Some providers only commit on read-back.
                            if let Ok(mut echoed) = ctx.get_contents() {
                                echoed.zeroize();
                            }
                            prompts::clipboard_copied();
                        }
                        Err(e) => prompts::clipboard_error(&e.to_string()),
                    }
                }
            }
            Ok(None) => {
                if !self.settings.output_file.is_empty() {
                    prompts::passwords_written(
                        self.settings.count.max(1),
                        &self.settings.output_file,
                    );
                }
            }
            Err(e) => {
                prompts::error(&e.to_string());
                std::process::exit(1);
            }
        }

        self.report_strength();
        Ok(())
    }

    fn report_strength(&self) {
        let g = &self.settings.generation;
        if let Ok(alphabet) = Alphabet::build(g) {
            let estimate = strength::estimate(g.length, alphabet.len());
            let distinct = g
                .avoid_repeats
                .then(|| strength::distinct_draw_bits(g.length, alphabet.len()));
            prompts::strength_line(&estimate, alphabet.len(), distinct);
        }
    }
}
