//! Generation request configuration and validation.

use super::alphabet::{CharClass, SYMBOLS};
use super::error::GenerateError;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 128;

/// Everything a single generation request depends on. The UI layers clamp
/// their inputs, but [`GenerationConfig::validate`] re-checks here so an
/// unchecked caller cannot slip an invalid request through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    /// Drop easily-confused characters (O/0, l/1, S/5, ...).
    pub exclude_lookalikes: bool,
    /// Characters removed from every class.
    pub excluded_chars: String,
    /// The symbol class membership; replaceable from the command line.
    pub symbol_chars: String,
    /// Guarantee at least one character from each enabled class.
    pub require_all_classes: bool,
    /// No character value may appear twice.
    pub avoid_repeats: bool,
    /// No ascending/descending or keyboard-adjacent three-character run.
    pub avoid_sequences: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            exclude_lookalikes: false,
            excluded_chars: String::new(),
            symbol_chars: SYMBOLS.to_string(),
            require_all_classes: false,
            avoid_repeats: true,
            avoid_sequences: true,
        }
    }
}

impl GenerationConfig {
    /// Enabled classes in their fixed draw-pool order.
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|class| match class {
            CharClass::Lower => self.lowercase,
            CharClass::Upper => self.uppercase,
            CharClass::Digit => self.digits,
            CharClass::Symbol => self.symbols,
        })
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.length < MIN_LENGTH || self.length > MAX_LENGTH {
            return Err(GenerateError::InvalidLength(self.length));
        }
        if self.enabled_classes().next().is_none() {
            return Err(GenerateError::NoClasses);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GenerationConfig::default().validate().is_ok());
    }

    #[test]
    fn length_bounds_are_enforced() {
        let mut config = GenerationConfig::default();
        config.length = MIN_LENGTH - 1;
        assert!(matches!(
            config.validate(),
            Err(GenerateError::InvalidLength(7))
        ));

        config.length = MAX_LENGTH + 1;
        assert!(matches!(
            config.validate(),
            Err(GenerateError::InvalidLength(129))
        ));

        config.length = MIN_LENGTH;
        assert!(config.validate().is_ok());
        config.length = MAX_LENGTH;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn at_least_one_class_is_required() {
        let config = GenerationConfig {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GenerateError::NoClasses)));
    }
}
