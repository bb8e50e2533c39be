//! Entropy estimation and qualitative banding.

use std::fmt;

/// Band thresholds in bits. Fixed constants, not derived.
const MODERATE_BITS: f64 = 45.0;
const STRONG_BITS: f64 = 60.0;
const VERY_STRONG_BITS: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Band {
    fn of(bits: f64) -> Band {
        if bits < MODERATE_BITS {
            Band::Weak
        } else if bits < STRONG_BITS {
            Band::Moderate
        } else if bits < VERY_STRONG_BITS {
            Band::Strong
        } else {
            Band::VeryStrong
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Band::Weak => "Weak",
            Band::Moderate => "Moderate",
            Band::Strong => "Strong",
            Band::VeryStrong => "Very strong",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strength {
    pub bits: f64,
    pub band: Band,
}

/// log2 estimate assuming independent uniform draws from the alphabet.
/// Constraints that trim the effective space (avoid-repeats,
/// avoid-sequences) are deliberately not subtracted; see
/// [`distinct_draw_bits`] for the tighter repeat-free figure.
pub fn estimate(length: usize, alphabet_len: usize) -> Strength {
    let bits = if alphabet_len == 0 {
        0.0
    } else {
        length as f64 * (alphabet_len as f64).log2()
    };
    Strength {
        bits,
        band: Band::of(bits),
    }
}

/// log2 of the falling factorial `n·(n−1)···(n−length+1)`: the space size
/// when every character must be distinct.
pub fn distinct_draw_bits(length: usize, alphabet_len: usize) -> f64 {
    (0..length.min(alphabet_len))
        .map(|i| ((alphabet_len - i) as f64).log2())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_chars_over_36_is_about_62_bits() {
        let est = estimate(12, 36);
        assert!((est.bits - 62.04).abs() < 0.1);
        assert_eq!(est.band, Band::Strong);
    }

    #[test]
    fn empty_alphabet_scores_zero() {
        let est = estimate(12, 0);
        assert_eq!(est.bits, 0.0);
        assert_eq!(est.band, Band::Weak);
    }

    #[test]
    fn monotone_in_length_and_alphabet() {
        for length in 8..32 {
            assert!(estimate(length + 1, 36).bits > estimate(length, 36).bits);
        }
        for size in 2..96 {
            assert!(estimate(16, size + 1).bits > estimate(16, size).bits);
        }
    }

    #[test]
    fn band_thresholds() {
        assert_eq!(Band::of(44.9), Band::Weak);
        assert_eq!(Band::of(45.0), Band::Moderate);
        assert_eq!(Band::of(59.9), Band::Moderate);
        assert_eq!(Band::of(60.0), Band::Strong);
        assert_eq!(Band::of(80.0), Band::VeryStrong);
    }

    #[test]
    fn distinct_draws_score_below_independent_draws() {
        let independent = estimate(16, 36).bits;
        let distinct = distinct_draw_bits(16, 36);
        assert!(distinct < independent);
        assert!(distinct > 0.0);
    }

    #[test]
    fn distinct_draws_with_full_alphabet_use_every_character() {
        // 10 draws from 10 characters: log2(10!) ≈ 21.79.
        assert!((distinct_draw_bits(10, 10) - 21.79).abs() < 0.01);
    }
}
