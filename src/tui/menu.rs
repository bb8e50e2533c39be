//! Interactive settings screen and generation loop.

use copypasta::{ClipboardContext, ClipboardProvider};
use crossterm::event::KeyCode;
use log::warn;
use zeroize::{Zeroize, Zeroizing};

use crate::pass::{self, output};
use crate::rng;
use crate::settings::Settings;
use crate::terminal::{clear, reset_terminal};

use super::input::{read_key, read_line, read_number};
use super::text;

pub fn run() {
    reset_terminal();

    let mut settings = Settings::load_from_file().unwrap_or_else(|e| {
        warn!("failed to load settings: {e}");
        Settings::default()
    });

    let mut last_batch = Zeroizing::new(String::new());
    let mut status = String::new();

    loop {
        clear();
        text::draw_screen(&settings, &last_batch, &status);
        status.clear();

        let Some(key) = read_key() else { break };
        let g = &mut settings.generation;

        match key {
            KeyCode::Enter | KeyCode::Char('g') => {
                generate_batch(&settings, &mut last_batch, &mut status);
            }
            KeyCode::Char('1') => {
                if let Some(len) = read_number("Password length", g.length) {
                    g.length = len;
                }
            }
            KeyCode::Char('2') => g.lowercase = !g.lowercase,
            KeyCode::Char('3') => g.uppercase = !g.uppercase,
            KeyCode::Char('4') => g.digits = !g.digits,
            KeyCode::Char('5') => g.symbols = !g.symbols,
            KeyCode::Char('6') => g.exclude_lookalikes = !g.exclude_lookalikes,
            KeyCode::Char('7') => {
                if let Some(chars) = read_line("Characters to exclude", &g.excluded_chars) {
                    g.excluded_chars = chars;
                }
            }
            KeyCode::Char('8') => g.avoid_repeats = !g.avoid_repeats,
            KeyCode::Char('9') => g.avoid_sequences = !g.avoid_sequences,
            KeyCode::Char('a') => g.require_all_classes = !g.require_all_classes,
            KeyCode::Char('n') => {
                if let Some(count) = read_number("Passwords per run", settings.count) {
                    settings.count = count;
                }
            }
            KeyCode::Char('o') => {
                if let Some(path) = read_line("Output file (empty for terminal)", &settings.output_file) {
                    settings.output_file = path.trim().to_string();
                }
            }
            KeyCode::Char('b') => copy_to_clipboard(&last_batch, &mut status),
            KeyCode::Char('w') => {
                status = match settings.save_to_file() {
                    Ok(()) => "Settings saved.".to_string(),
                    Err(e) => format!("Failed to save settings: {e}"),
                };
            }
            KeyCode::Char('f') => {
                match Settings::load_from_file() {
                    Ok(loaded) => {
                        settings = loaded;
                        status = "Settings loaded.".to_string();
                    }
                    Err(e) => status = format!("Failed to load settings: {e}"),
                }
            }
            KeyCode::Char('r') => {
                settings = Settings::default();
                status = "Defaults restored.".to_string();
            }
            KeyCode::Char('h') => {
                clear();
                text::print_help();
                println!("Press any key to return.");
                let _ = read_key();
            }
            KeyCode::Char('q') | KeyCode::Esc => break,
            _ => {}
        }
    }

    clear();
    reset_terminal();
}

fn generate_batch(settings: &Settings, last_batch: &mut Zeroizing<String>, status: &mut String) {
    let mut rng = rng::system();
    last_batch.zeroize();

    if !settings.output_file.is_empty() {
        *status = match output::write_batch(settings, &mut rng) {
            Ok(_) => format!(
                "{} password(s) \u{2192} {}",
                settings.count.max(1),
                settings.output_file
            ),
            Err(e) => format!("Error: {e}"),
        };
        return;
    }

    for _ in 0..settings.count.max(1) {
        match pass::generate(&settings.generation, &mut rng) {
            Ok(mut password) => {
                last_batch.push_str(&password);
                last_batch.push('\n');
                password.zeroize();
            }
            Err(e) => {
                last_batch.zeroize();
                *status = format!("Error: {e}");
                return;
            }
        }
    }
}

fn copy_to_clipboard(last_batch: &str, status: &mut String) {
    if last_batch.is_empty() {
        *status = "Nothing to copy; generate first.".to_string();
        return;
    }

    match ClipboardContext::new() {
        Ok(mut ctx) => match ctx.set_contents(last_batch.to_string()) {
            Ok(()) => {
                if let Ok(mut echoed) = ctx.get_contents() {
                    echoed.zeroize();
                }
                *status = "Copied to clipboard.".to_string();
            }
            Err(e) => *status = format!("Clipboard error: {e}"),
        },
        Err(e) => *status = format!("Clipboard unavailable: {e}"),
    }
}
