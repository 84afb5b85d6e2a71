//! Composition section - rewards class combinations, with a bonus for
//! digits/symbols kept away from the password's edges.

use super::classes::{is_symbol, CharacterClasses};

/// Scores character-class composition. Rules are evaluated in priority
/// order; the first match wins.
pub fn composition_section(password: &str) -> u32 {
    let classes = CharacterClasses::of(password);

    if classes.lower && classes.upper && has_embedded_digit_or_symbol(password) {
        return 20;
    }
    if classes.lower && classes.upper && classes.digit && classes.symbol {
        return 15;
    }
    if classes.lower && classes.upper && classes.digit {
        return 5;
    }
    // Purely alphabetic or purely numeric passwords land here with nothing.
    0
}

/// True when a digit or symbol sits strictly between the first and last
/// character. Needs at least 3 characters to have an interior.
fn has_embedded_digit_or_symbol(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    if chars.len() < 3 {
        return false;
    }
    chars[1..chars.len() - 1]
        .iter()
        .any(|&c| c.is_ascii_digit() || is_symbol(c))
}
