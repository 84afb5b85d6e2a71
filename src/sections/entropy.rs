//! Entropy section - estimates brute-force search space from class diversity.

use super::classes::CharacterClasses;

/// Entropy estimate plus the points it earns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyScore {
    pub points: u32,
    /// `length × log2(charset_range)`.
    pub bits: f64,
    /// `2^bits`.
    pub combinations: f64,
}

/// Scores the brute-force search space implied by length and the character
/// classes in use.
pub fn entropy_section(password: &str) -> EntropyScore {
    let range = CharacterClasses::of(password).charset_range();
    let length = password.chars().count();
    let bits = length as f64 * f64::from(range).log2();
    let combinations = bits.exp2();

    let points = if bits > 80.0 {
        30
    } else if bits >= 72.0 {
        20
    } else if bits >= 60.0 {
        10
    } else {
        0
    };

    EntropyScore { points, bits, combinations }
}
