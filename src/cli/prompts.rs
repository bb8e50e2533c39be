//! Centralized warning and prompt messages for CLI output.
//!
//! Also owns the global quiet flag: warnings, prompts and the strength
//! line are suppressed when set, errors never are.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::pass::strength::Strength;
use crate::terminal::{RED, RESET, YELLOW};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress warnings and non-essential output for the rest of the run.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// True when interactive prompts should be skipped: quiet mode, or stdin
/// is not a tty.
fn skip_prompt() -> bool {
    quiet() || unsafe { libc::isatty(0) != 1 }
}

/// Warning to stderr (yellow), suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error to stderr (red). Never suppressed.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// One strength line per batch: the estimate describes the configuration
/// (length × alphabet), not any individual password. Stderr keeps stdout
/// clean for piping.
pub fn strength_line(estimate: &Strength, alphabet_len: usize, distinct_bits: Option<f64>) {
    if quiet() {
        return;
    }
    match distinct_bits {
        Some(bits) => eprintln!(
            "{:.1} bits ({}) • alphabet: {} chars • {:.1} bits as distinct draws",
            estimate.bits, estimate.band, alphabet_len, bits
        ),
        None => eprintln!(
            "{:.1} bits ({}) • alphabet: {} chars",
            estimate.bits, estimate.band, alphabet_len
        ),
    }
}

pub fn command_saved(command: &str) {
    if !quiet() {
        println!("Saved command: {command}");
    }
}

pub fn command_cleared() {
    if !quiet() {
        println!("Cleared saved command.");
    }
}

pub fn clipboard_copied() {
    if !quiet() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Clipboard errors are always shown.
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Prompt when no clipboard is available. Returns true to fall back to
/// terminal output, false to abort. Quiet/non-interactive runs fall back
/// silently.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn passwords_written(count: usize, path: &str) {
    if !quiet() {
        println!("{count} password(s) \u{2192} {path}");
    }
}
