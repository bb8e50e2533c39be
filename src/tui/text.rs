//! Screen rendering and help text.

use crate::pass::alphabet::Alphabet;
use crate::pass::strength;
use crate::settings::Settings;
use crate::terminal::{
    DIM, GREEN, RESET, option_line, print_error, section, strength_meter,
};

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

/// Draw the full settings screen with strength preview, the last generated
/// batch, and a status line.
pub fn draw_screen(settings: &Settings, last_batch: &str, status: &str) {
    let g = &settings.generation;

    section("Passforge");
    option_line('1', "Password length", &g.length.to_string());
    option_line('2', "Lowercase (a-z)", on_off(g.lowercase));
    option_line('3', "Uppercase (A-Z)", on_off(g.uppercase));
    option_line('4', "Digits (0-9)", on_off(g.digits));
    option_line('5', "Symbols (!@#$...)", on_off(g.symbols));
    option_line('6', "Exclude lookalikes", on_off(g.exclude_lookalikes));
    option_line('7', "Excluded characters", or_placeholder(&g.excluded_chars, "(none)"));
    option_line('8', "Avoid repeats", on_off(g.avoid_repeats));
    option_line('9', "Avoid sequences", on_off(g.avoid_sequences));
    option_line('a', "One of each class", on_off(g.require_all_classes));
    option_line('n', "Passwords per run", &settings.count.to_string());
    option_line('o', "Output file", or_placeholder(&settings.output_file, "(terminal)"));
    println!();

    draw_strength_preview(settings);

    if !last_batch.is_empty() {
        println!();
        section("Passwords");
        for line in last_batch.lines() {
            println!("  {line}");
        }
    }

    println!();
    if !status.is_empty() {
        println!("{GREEN}{status}{RESET}");
    }
    section("");
    println!(
        "{DIM}Enter generate · b copy · w save · f load · r reset · h help · q quit{RESET}"
    );
}

fn draw_strength_preview(settings: &Settings) {
    let g = &settings.generation;
    match g.validate().and_then(|_| Alphabet::build(g)) {
        Ok(alphabet) => {
            let estimate = strength::estimate(g.length, alphabet.len());
            println!(
                "  Strength: {} {:.1} bits ({})",
                strength_meter(estimate.bits),
                estimate.bits,
                estimate.band
            );
            if g.avoid_repeats {
                let distinct = strength::distinct_draw_bits(g.length, alphabet.len());
                println!(
                    "  {DIM}{} chars in alphabet · {distinct:.1} bits as distinct draws{RESET}",
                    alphabet.len()
                );
            } else {
                println!("  {DIM}{} chars in alphabet{RESET}", alphabet.len());
            }
        }
        Err(e) => print_error(&format!("  {e}")),
    }
}

/// Usage for `--help` and the interactive help screen.
pub fn print_help() {
    section("Passforge");
    println!("Constraint-aware password generator with strength estimation.");
    println!();
    println!("USAGE:");
    println!("  passforge [OPTIONS]");
    println!();
    println!("Run without arguments for the interactive screen.");
    println!();
    println!("OPTIONS:");
    opt("-l, --length <N>", "Characters per password (8-128, default 16)");
    opt("-n, --number <N>", "Passwords to generate (default 1)");
    opt("    --no-lower", "Disable lowercase letters");
    opt("    --no-upper", "Disable uppercase letters");
    opt("    --no-digits", "Disable digits");
    opt("    --no-symbols", "Disable symbols");
    opt("    --special <CHARS>", "Override the symbol set");
    opt("-x, --exclude <CHARS>", "Never use these characters");
    opt("-k, --no-lookalikes", "Drop easily-confused characters (O/0, l/1, ...)");
    opt("    --allow-repeats", "Permit repeated characters");
    opt("    --allow-sequences", "Permit runs like abc, 321, qwe");
    opt("    --all-classes", "Require one character from every enabled class");
    println!();
    opt("-b, --board", "Copy to clipboard instead of printing");
    opt("-o, --output [FILE]", "Append to file (default: passwords.txt)");
    opt("-q, --quiet", "Suppress everything except passwords");
    println!();
    opt("-c, --command [FLAGS]", "Save flags as defaults; bare -c clears them");
    opt("-s, --saved", "Start from saved settings");
    opt("-d, --default", "Start from built-in defaults");
    opt("-h, --help", "Show this help");
    opt("-v, --version", "Show version");
    println!();
    println!("EXAMPLES:");
    println!("  passforge -l 20              One 20-character password");
    println!("  passforge -n 5 -k            Five passwords, no lookalikes");
    println!("  passforge -l 12 --no-symbols -x aeiou");
    println!("  passforge -c -l 24 -b        Always 24 chars to clipboard");
    println!();
}

fn opt(flag: &str, desc: &str) {
    println!("  {flag:<26}{desc}");
}
