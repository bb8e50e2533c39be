//! Character classes and draw-alphabet construction.

use std::ops::Range;

use log::debug;

use super::config::GenerationConfig;
use super::error::GenerateError;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// Conservative, widely accepted symbol set.
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.?/`~|\\";
/// Easily-confused characters dropped when lookalike exclusion is on.
pub const LOOKALIKES: &str = "O0l1I|S5B8Z2G6q9";

/// A character class eligible for the draw pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// Full class membership before exclusions. The symbol class may be
    /// overridden per configuration; see [`Alphabet::build`].
    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Lower => LOWERCASE,
            CharClass::Upper => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }
}

/// Ordered set of characters eligible for password draws: the union of the
/// enabled classes minus every excluded character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    spans: Vec<(CharClass, Range<usize>)>,
}

impl Alphabet {
    /// Build the draw pool for `config`. Classes are laid out in a fixed
    /// order and deduplicated, so `len()` is the honest pool size even when
    /// a custom symbol set overlaps another class.
    pub fn build(config: &GenerationConfig) -> Result<Self, GenerateError> {
        let mut excluded: Vec<char> = config.excluded_chars.chars().collect();
        if config.exclude_lookalikes {
            excluded.extend(LOOKALIKES.chars());
        }

        let mut chars: Vec<char> = Vec::new();
        let mut spans = Vec::new();

        for class in config.enabled_classes() {
            let source = match class {
                CharClass::Symbol => config.symbol_chars.as_str(),
                _ => class.chars(),
            };

            let start = chars.len();
            for c in source.chars() {
                if !excluded.contains(&c) && !chars.contains(&c) {
                    chars.push(c);
                }
            }
            // A class emptied by exclusions places no representation demand.
            if chars.len() > start {
                spans.push((class, start..chars.len()));
            }
        }

        if chars.is_empty() {
            return Err(GenerateError::EmptyAlphabet);
        }

        debug!(
            "alphabet: {} chars across {} classes ({} excluded)",
            chars.len(),
            spans.len(),
            excluded.len()
        );
        Ok(Self { chars, spans })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Classes that survived exclusion, with their slice of the pool.
    pub fn class_slices(&self) -> impl Iterator<Item = (CharClass, &[char])> {
        self.spans
            .iter()
            .map(|(class, span)| (*class, &self.chars[span.clone()]))
    }

    /// True when `candidate` contains at least one character from every
    /// surviving class.
    pub fn classes_represented(&self, candidate: &str) -> bool {
        self.class_slices()
            .all(|(_, slice)| candidate.chars().any(|c| slice.contains(&c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_and_digits_is_36_chars() {
        let config = GenerationConfig {
            uppercase: false,
            symbols: false,
            avoid_repeats: false,
            avoid_sequences: false,
            ..Default::default()
        };
        let alphabet = Alphabet::build(&config).unwrap();
        assert_eq!(alphabet.len(), 36);
    }

    #[test]
    fn lookalike_exclusion_shrinks_uppercase() {
        let config = GenerationConfig {
            lowercase: false,
            digits: false,
            symbols: false,
            exclude_lookalikes: true,
            ..Default::default()
        };
        let alphabet = Alphabet::build(&config).unwrap();
        // O, I, S, B, Z, G are lookalikes; 26 - 6 = 20.
        assert_eq!(alphabet.len(), 20);
        assert!(!alphabet.contains('O'));
        assert!(!alphabet.contains('S'));
        assert!(alphabet.len() <= 24);
    }

    #[test]
    fn custom_exclusions_are_removed() {
        let config = GenerationConfig {
            uppercase: false,
            digits: false,
            symbols: false,
            excluded_chars: "abc".into(),
            ..Default::default()
        };
        let alphabet = Alphabet::build(&config).unwrap();
        assert_eq!(alphabet.len(), 23);
        assert!(!alphabet.contains('a'));
        assert!(alphabet.contains('d'));
    }

    #[test]
    fn fully_excluded_pool_is_an_error() {
        let config = GenerationConfig {
            uppercase: false,
            lowercase: false,
            symbols: false,
            excluded_chars: DIGITS.into(),
            ..Default::default()
        };
        assert!(matches!(
            Alphabet::build(&config),
            Err(GenerateError::EmptyAlphabet)
        ));
    }

    #[test]
    fn symbol_class_has_expected_size() {
        let config = GenerationConfig {
            lowercase: false,
            uppercase: false,
            digits: false,
            ..Default::default()
        };
        let alphabet = Alphabet::build(&config).unwrap();
        assert_eq!(alphabet.len(), SYMBOLS.chars().count());
    }

    #[test]
    fn overlapping_symbol_override_is_deduplicated() {
        let config = GenerationConfig {
            uppercase: false,
            digits: false,
            symbol_chars: "abc#".into(),
            ..Default::default()
        };
        let alphabet = Alphabet::build(&config).unwrap();
        // 26 lowercase + '#'; the a/b/c overlap must not inflate the pool.
        assert_eq!(alphabet.len(), 27);
    }

    #[test]
    fn emptied_class_demands_no_representation() {
        let config = GenerationConfig {
            symbols: false,
            excluded_chars: DIGITS.into(),
            ..Default::default()
        };
        let alphabet = Alphabet::build(&config).unwrap();
        assert_eq!(alphabet.class_slices().count(), 2);
        assert!(alphabet.classes_represented("aZ"));
    }
}
