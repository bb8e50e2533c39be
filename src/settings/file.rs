//! Settings file persistence.
//!
//! Plain `key=value` lines. Unknown keys are ignored with a warning and
//! unparsable values keep their defaults, so older files keep loading
//! across upgrades.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;

use super::Settings;

pub fn save(settings: &Settings) -> io::Result<()> {
    let path = default_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    save_to(settings, &path)
}

pub fn load() -> io::Result<Settings> {
    let path = default_path();
    if !path.exists() {
        return Ok(Settings::default());
    }
    load_from(&path)
}

fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passforge/settings")
}

fn save_to(settings: &Settings, path: &Path) -> io::Result<()> {
    fs::write(path, serialize(settings))
}

fn load_from(path: &Path) -> io::Result<Settings> {
    let text = fs::read_to_string(path)?;
    Ok(parse(&text))
}

fn serialize(settings: &Settings) -> String {
    let g = &settings.generation;
    let mut out = String::new();
    let _ = writeln!(out, "length={}", g.length);
    let _ = writeln!(out, "lowercase={}", g.lowercase);
    let _ = writeln!(out, "uppercase={}", g.uppercase);
    let _ = writeln!(out, "digits={}", g.digits);
    let _ = writeln!(out, "symbols={}", g.symbols);
    let _ = writeln!(out, "exclude_lookalikes={}", g.exclude_lookalikes);
    let _ = writeln!(out, "excluded_chars={}", g.excluded_chars);
    let _ = writeln!(out, "symbol_chars={}", g.symbol_chars);
    let _ = writeln!(out, "require_all_classes={}", g.require_all_classes);
    let _ = writeln!(out, "avoid_repeats={}", g.avoid_repeats);
    let _ = writeln!(out, "avoid_sequences={}", g.avoid_sequences);
    let _ = writeln!(out, "count={}", settings.count);
    let _ = writeln!(out, "output_file={}", settings.output_file);
    let _ = writeln!(out, "command={}", settings.cli_command);
    out
}

fn parse(text: &str) -> Settings {
    let mut settings = Settings::default();

    for line in text.lines() {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        match line.split_once('=') {
            // Values keep leading/trailing spaces: excluded characters may
            // legitimately contain them.
            Some((key, value)) => apply(&mut settings, key.trim(), value),
            None => warn!("settings: skipping malformed line {line:?}"),
        }
    }

    settings
}

fn apply(settings: &mut Settings, key: &str, value: &str) {
    let g = &mut settings.generation;
    match key {
        "length" => set_num(&mut g.length, value),
        "lowercase" => set_bool(&mut g.lowercase, value),
        "uppercase" => set_bool(&mut g.uppercase, value),
        "digits" => set_bool(&mut g.digits, value),
        "symbols" => set_bool(&mut g.symbols, value),
        "exclude_lookalikes" => set_bool(&mut g.exclude_lookalikes, value),
        "excluded_chars" => g.excluded_chars = value.to_string(),
        "symbol_chars" => g.symbol_chars = value.to_string(),
        "require_all_classes" => set_bool(&mut g.require_all_classes, value),
        "avoid_repeats" => set_bool(&mut g.avoid_repeats, value),
        "avoid_sequences" => set_bool(&mut g.avoid_sequences, value),
        "count" => set_num(&mut settings.count, value),
        "output_file" => settings.output_file = value.to_string(),
        "command" => settings.cli_command = value.to_string(),
        _ => warn!("settings: unknown key {key:?}"),
    }
}

fn set_num(slot: &mut usize, value: &str) {
    if let Ok(parsed) = value.trim().parse() {
        *slot = parsed;
    }
}

fn set_bool(slot: &mut bool, value: &str) {
    match value.trim() {
        "true" => *slot = true,
        "false" => *slot = false,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_settings() {
        let mut settings = Settings::default();
        settings.generation.length = 24;
        settings.generation.symbols = false;
        settings.generation.exclude_lookalikes = true;
        settings.generation.excluded_chars = "xyz ".into();
        settings.count = 5;
        settings.output_file = "/tmp/out.txt".into();
        settings.cli_command = "-l 24 -n 5".into();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        save_to(&settings, &path).unwrap();
        let loaded = load_from(&path).unwrap();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn clipboard_flag_is_not_persisted() {
        let settings = Settings {
            to_clipboard: true,
            ..Default::default()
        };
        let text = serialize(&settings);
        assert!(!text.contains("clipboard"));
        assert!(!parse(&text).to_clipboard);
    }

    #[test]
    fn unknown_keys_and_bad_values_fall_back_to_defaults() {
        let text = "length=notanumber\nfrobnicate=yes\nsymbols=false\n";
        let loaded = parse(text);
        assert_eq!(loaded.generation.length, Settings::default().generation.length);
        assert!(!loaded.generation.symbols);
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let loaded = parse("length=32\n");
        assert_eq!(loaded.generation.length, 32);
        assert!(loaded.generation.lowercase);
        assert_eq!(loaded.count, 1);
    }
}
