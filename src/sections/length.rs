//! Length section - awards points and fixes the score ceiling.

/// Points awarded for password length, plus the hard ceiling the aggregate
/// score may not exceed. Short passwords cannot be rescued by other checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthScore {
    pub points: u32,
    pub cap: u32,
}

/// Scores password length in characters (not bytes).
pub fn length_section(password: &str) -> LengthScore {
    let length = password.chars().count();
    let (points, cap) = match length {
        0..=7 => (0, 25),
        8..=11 => (20, 60),
        12..=14 => (35, 85),
        _ => (50, 100),
    };
    LengthScore { points, cap }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_short() {
        assert_eq!(length_section("short"), LengthScore { points: 0, cap: 25 });
        assert_eq!(length_section(""), LengthScore { points: 0, cap: 25 });
        assert_eq!(length_section("seven77"), LengthScore { points: 0, cap: 25 });
    }

    #[test]
    fn test_length_section_medium() {
        assert_eq!(length_section("eightchr"), LengthScore { points: 20, cap: 60 });
        assert_eq!(length_section("elevenchars"), LengthScore { points: 20, cap: 60 });
    }

    #[test]
    fn test_length_section_long() {
        assert_eq!(length_section("twelvechars!"), LengthScore { points: 35, cap: 85 });
        assert_eq!(length_section("fourteen-chars"), LengthScore { points: 35, cap: 85 });
    }

    #[test]
    fn test_length_section_very_long() {
        assert_eq!(
            length_section("fifteencharacters"),
            LengthScore { points: 50, cap: 100 }
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 8 characters, more than 8 bytes.
        assert_eq!(length_section("pässwörd"), LengthScore { points: 20, cap: 60 });
    }
}
