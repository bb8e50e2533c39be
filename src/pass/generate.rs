//! Password synthesis under repeat/sequence constraints.

use log::debug;
use rand::{CryptoRng, Rng};

use super::alphabet::Alphabet;
use super::config::GenerationConfig;
use super::error::GenerateError;
use super::sequence;

/// Redraws allowed at a single position before giving up.
const MAX_REDRAWS: usize = 1000;

/// Whole-password retries allowed when every class must be represented.
const MAX_CLASS_RETRIES: usize = 100;

/// Generate one password satisfying every enabled constraint, or fail with
/// a typed error. Never returns a partial result.
pub fn generate<R: Rng + CryptoRng>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<String, GenerateError> {
    config.validate()?;
    let alphabet = Alphabet::build(config)?;

    if config.avoid_repeats && alphabet.len() < config.length {
        return Err(GenerateError::InsufficientAlphabet {
            alphabet: alphabet.len(),
            length: config.length,
        });
    }

    if !config.require_all_classes {
        return draw(config, &alphabet, rng);
    }

    for _ in 0..MAX_CLASS_RETRIES {
        let candidate = draw(config, &alphabet, rng)?;
        if alphabet.classes_represented(&candidate) {
            return Ok(candidate);
        }
    }
    Err(GenerateError::ConstraintUnsatisfiable {
        attempts: MAX_CLASS_RETRIES,
    })
}

/// Fill positions left to right. An invalid draw (repeat or run) is redrawn
/// at that position only, so earlier positions are never thrown away.
fn draw<R: Rng + CryptoRng>(
    config: &GenerationConfig,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Result<String, GenerateError> {
    let pool = alphabet.as_slice();
    let mut chars: Vec<char> = Vec::with_capacity(config.length);
    let mut total_redraws = 0usize;

    while chars.len() < config.length {
        let mut redraws = 0;
        let next = loop {
            let c = pool[rng.gen_range(0..pool.len())];

            let repeat = config.avoid_repeats && chars.contains(&c);
            let run = config.avoid_sequences
                && chars.len() >= 2
                && sequence::is_run(chars[chars.len() - 2], chars[chars.len() - 1], c);
            if !repeat && !run {
                break c;
            }

            redraws += 1;
            if redraws >= MAX_REDRAWS {
                return Err(GenerateError::ConstraintUnsatisfiable { attempts: redraws });
            }
        };
        total_redraws += redraws;
        chars.push(next);
    }

    if total_redraws > 0 {
        debug!(
            "drew {} chars with {} rejected draws",
            config.length, total_redraws
        );
    }
    Ok(chars.into_iter().collect())
}
