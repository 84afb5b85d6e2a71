//! Leet-speak desubstitution
//!
//! Expands a password into every plausible unsubstituted original so the
//! blocklist detector can test obscured spellings of breached passwords.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Characters commonly used to stand in for each letter. `m`, `n` and `w`
/// have no common substitutions.
const SUBSTITUTION_TABLE: &[(char, &[char])] = &[
    ('a', &['@', '4', '^']),
    ('b', &['8', '6', 'ß']),
    ('c', &['©', '¢', '<', '[', '(', '{']),
    ('d', &[')', '?']),
    ('e', &['3', '&', '€', 'ë']),
    ('f', &['ƒ']),
    ('g', &['6', '9', '&']),
    ('h', &['#']),
    ('i', &['1', '!', '¡', '|', ']']),
    ('j', &[']', '¿']),
    ('k', &['X']),
    ('l', &['|', '1', '£', '¬']),
    ('m', &[]),
    ('n', &[]),
    ('o', &['0', '°']),
    ('p', &['¶', '9']),
    ('q', &['9']),
    ('r', &['2', '®']),
    ('s', &['5', '$', '§', 'z']),
    ('t', &['7', '+', '†']),
    ('u', &['µ', 'v']),
    ('v', &['^']),
    ('w', &[]),
    ('x', &['%', '*']),
    ('y', &['¥', 'J', 'j']),
    ('z', &['2', '%']),
];

/// Upper bound on the candidate set one expansion may produce. The real
/// table's fan-out stays far below this; the cap bounds network calls in
/// the blocklist detector if the table ever grows.
pub const MAX_CANDIDATES: usize = 512;

/// Maps each substitute character (lowercase-folded) to the canonical
/// letters it can stand for. Built once, read-only afterwards.
fn reverse_index() -> &'static HashMap<char, Vec<char>> {
    static INDEX: OnceLock<HashMap<char, Vec<char>>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index: HashMap<char, Vec<char>> = HashMap::new();
        for (letter, substitutes) in SUBSTITUTION_TABLE {
            for substitute in *substitutes {
                let originals = index.entry(substitute.to_ascii_lowercase()).or_default();
                if !originals.contains(letter) {
                    originals.push(*letter);
                }
            }
        }
        index
    })
}

/// Produces every string obtainable by replacing each character with a
/// letter it commonly substitutes for, or the character itself.
///
/// Characters are lowercase-folded before lookup; that is the only
/// normalization applied. The expansion is the position-by-position
/// Cartesian product, accumulated iteratively, and truncated at
/// [`MAX_CANDIDATES`]. An empty password expands to the single empty string.
pub fn expand(password: &str) -> Vec<String> {
    let index = reverse_index();
    let mut candidates = vec![String::new()];
    let mut truncated = false;

    for ch in password.chars() {
        let ch = ch.to_ascii_lowercase();
        let mut originals = vec![ch];
        if let Some(letters) = index.get(&ch) {
            originals.extend(letters.iter().copied().filter(|&l| l != ch));
        }

        let mut grown = Vec::with_capacity(candidates.len() * originals.len());
        for candidate in &candidates {
            for &original in &originals {
                let mut next = candidate.clone();
                next.push(original);
                grown.push(next);
            }
        }
        if grown.len() > MAX_CANDIDATES {
            grown.truncate(MAX_CANDIDATES);
            truncated = true;
        }
        candidates = grown;
    }

    if truncated {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            "candidate expansion truncated to {} entries",
            MAX_CANDIDATES
        );
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_empty_password() {
        assert_eq!(expand(""), vec![String::new()]);
    }

    #[test]
    fn test_expand_recovers_obscured_original() {
        assert!(expand("P@ssw0rd").contains(&"password".to_string()));
    }

    #[test]
    fn test_expand_plain_word_is_identity() {
        assert_eq!(expand("password"), vec!["password".to_string()]);
    }

    #[test]
    fn test_expand_folds_case() {
        assert_eq!(expand("PASSWORD"), vec!["password".to_string()]);
    }

    #[test]
    fn test_expand_keeps_the_substitute_itself() {
        let candidates = expand("1");
        assert!(candidates.contains(&"1".to_string()));
        assert!(candidates.contains(&"i".to_string()));
        assert!(candidates.contains(&"l".to_string()));
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn test_expand_grows_multiplicatively() {
        // '@' -> {@, a}, '0' -> {0, o}: 2 × 2 candidates.
        let candidates = expand("@0");
        assert_eq!(candidates.len(), 4);
        assert!(candidates.contains(&"ao".to_string()));
    }

    #[test]
    fn test_expand_truncates_at_cap() {
        // '&' -> {&, e, g}: 3^10 candidates untruncated.
        let candidates = expand(&"&".repeat(10));
        assert_eq!(candidates.len(), MAX_CANDIDATES);
    }

    #[test]
    fn test_reverse_index_covers_every_table_entry() {
        let index = reverse_index();
        for (letter, substitutes) in SUBSTITUTION_TABLE {
            for substitute in *substitutes {
                let originals = index
                    .get(&substitute.to_ascii_lowercase())
                    .expect("substitute missing from reverse index");
                assert!(
                    originals.contains(letter),
                    "{letter} not reachable from {substitute}"
                );
            }
        }
    }
}
