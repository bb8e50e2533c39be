//! Keyboard input helpers for the interactive screen.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Block until the next key press. Ctrl+C exits the process cleanly.
pub fn read_key() -> Option<KeyCode> {
    let _guard = RawModeGuard::new().ok()?;
    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                if key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    reset_terminal();
                    println!();
                    std::process::exit(130);
                }
                return Some(key.code);
            }
            Ok(_) => {}
            Err(_) => return None,
        }
    }
}

/// Minimal line editor: printable characters and backspace, Enter submits,
/// Esc cancels (returns None).
pub fn read_line(prompt: &str, initial: &str) -> Option<String> {
    let mut input = initial.to_string();

    let guard = RawModeGuard::new().ok()?;
    print!("\r\x1b[2K{prompt}: {input}");
    flush();

    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    reset_terminal();
                    println!();
                    std::process::exit(130);
                }
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    input.clear();
                }
                KeyCode::Esc => return None,
                KeyCode::Enter => break,
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c) => input.push(c),
                _ => {}
            },
            Ok(_) => {}
            Err(_) => return None,
        }
        print!("\r\x1b[2K{prompt}: {input}");
        flush();
    }

    drop(guard);
    println!();
    Some(input)
}

/// Numeric prompt built on the line editor. Non-numeric input cancels.
pub fn read_number(prompt: &str, current: usize) -> Option<usize> {
    read_line(prompt, &current.to_string())?.trim().parse().ok()
}
