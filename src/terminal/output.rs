//! Terminal output helpers shared by the CLI and the interactive screen.

use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

pub const SCREEN_WIDTH: usize = 64;

/// Clear screen and scrollback, cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to a sane state.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

/// Section header with a trailing rule: `── Title ─────────…`
pub fn section(title: &str) {
    if title.is_empty() {
        println!("{}", "─".repeat(SCREEN_WIDTH));
    } else {
        let used = title.chars().count() + 4;
        println!("── {BOLD}{title}{RESET} {}", "─".repeat(SCREEN_WIDTH.saturating_sub(used)));
    }
}

/// Aligned option line with its hotkey: `  [k] Label    value`.
pub fn option_line(key: char, label: &str, value: &str) {
    println!("  [{key}] {label:<24} {value}");
}

/// Textual strength meter. Mirrors the bits-to-percent mapping of the
/// strength bar: full at 100 bits.
pub fn strength_meter(bits: f64) -> String {
    const WIDTH: usize = 25;
    let score = bits.clamp(0.0, 100.0);
    let filled = ((score / 100.0) * WIDTH as f64).round() as usize;
    let filled = filled.min(WIDTH);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_is_empty_at_zero_and_full_at_cap() {
        assert_eq!(strength_meter(0.0), format!("[{}]", "░".repeat(25)));
        assert_eq!(strength_meter(100.0), format!("[{}]", "█".repeat(25)));
        assert_eq!(strength_meter(250.0), format!("[{}]", "█".repeat(25)));
    }

    #[test]
    fn meter_fills_proportionally() {
        let half = strength_meter(50.0);
        assert_eq!(half.matches('█').count(), 13);
        assert_eq!(half.matches('░').count(), 12);
    }
}
