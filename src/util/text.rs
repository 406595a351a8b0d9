//! Text helpers for answer comparison and flag display.

/// First regional indicator code point (maps to 'a')
const REGIONAL_INDICATOR_BASE: u32 = 0x1F1E6;

/// Normalize a guess or answer for comparison: trim surrounding
/// whitespace and fold case. Interior whitespace is preserved.
pub fn normalize_answer(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Compare a typed guess to the expected country name.
/// Case-insensitive and ignores leading/trailing whitespace.
pub fn answers_match(guess: &str, country: &str) -> bool {
    normalize_answer(guess) == normalize_answer(country)
}

/// Resolve a flag code to a displayable glyph.
///
/// Two-letter codes become the corresponding regional-indicator emoji
/// (e.g. "fr" renders as the French flag on terminals with emoji fonts).
/// Anything else falls back to the uppercased code in brackets.
pub fn flag_glyph(code: &str) -> String {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() == 2 && chars.iter().all(|c| c.is_ascii_alphabetic()) {
        chars
            .iter()
            .map(|c| {
                let offset = c.to_ascii_lowercase() as u32 - 'a' as u32;
                // Offset is 0..26, always inside the regional indicator block
                char::from_u32(REGIONAL_INDICATOR_BASE + offset).unwrap_or('?')
            })
            .collect()
    } else {
        format!("[{}]", code.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_folds_case() {
        assert_eq!(normalize_answer(" France "), "france");
        assert_eq!(normalize_answer("FRANCE"), "france");
        assert_eq!(normalize_answer(""), "");
        assert_eq!(normalize_answer("  "), "");
    }

    #[test]
    fn test_normalize_keeps_interior_whitespace() {
        assert_eq!(normalize_answer(" South  Korea "), "south  korea");
    }

    #[test]
    fn test_answers_match_variants() {
        assert!(answers_match(" France ", "France"));
        assert!(answers_match("france", "France"));
        assert!(answers_match("FRANCE", "France"));
        assert!(!answers_match("Franc", "France"));
        assert!(!answers_match("", "France"));
    }

    #[test]
    fn test_flag_glyph_regional_indicators() {
        // 'f' = base + 5, 'r' = base + 17
        let glyph = flag_glyph("fr");
        let mut chars = glyph.chars();
        assert_eq!(chars.next().unwrap() as u32, 0x1F1E6 + 5);
        assert_eq!(chars.next().unwrap() as u32, 0x1F1E6 + 17);
        assert!(chars.next().is_none());
    }

    #[test]
    fn test_flag_glyph_fallback() {
        assert_eq!(flag_glyph("gb-eng"), "[GB-ENG]");
        assert_eq!(flag_glyph("f1"), "[F1]");
        assert_eq!(flag_glyph(""), "[]");
    }
}
