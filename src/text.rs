//! Text normalization and word counting for submitted answers.
//!
//! ## Normalization
//!
//! ```text
//! detection_form(text) = lowercase(trim(text))
//! word_count(text)     = |split_whitespace(trim(text))|
//! ```
//!
//! Whitespace is the Unicode `White_Space` property, so tabs, newlines and
//! non-breaking spaces all separate words. No locale-aware tokenization is
//! attempted: `"don't"` is one word, `"co-op"` is one word.

/// Maximum length of an answer that is ever marked, in UTF-16 code units.
pub const MAX_ANSWER_CHARS: usize = 6000;

/// Maximum length of a submitted access code that is compared, in UTF-16 code units.
pub const MAX_CODE_CHARS: usize = 80;

/// Count whitespace-delimited words in `text`.
///
/// Leading and trailing whitespace is ignored. Whitespace-only or empty
/// input counts as zero words.
///
/// # Example
///
/// ```rust
/// use prompt_automarker::text::word_count;
///
/// assert_eq!(word_count("a  b   c"), 3);
/// assert_eq!(word_count("   "), 0);
/// ```
pub fn word_count(text: &str) -> usize {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.split_whitespace().count()
}

/// Normalize text into the form keyword detection runs against.
///
/// Trims surrounding whitespace and lower-cases the result.
pub fn normalize_for_detection(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Cap `text` at `max_units` UTF-16 code units.
///
/// Lengths are measured the way browsers measure form input, so a character
/// outside the Basic Multilingual Plane costs two units. A character that
/// would straddle the cap is dropped whole rather than split.
pub fn clamp_utf16(text: &str, max_units: usize) -> &str {
    let mut units = 0;
    for (byte_idx, ch) in text.char_indices() {
        units += ch.len_utf16();
        if units > max_units {
            return &text[..byte_idx];
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_empty() {
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_word_count_whitespace_only() {
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("\n\t \r\n"), 0);
    }

    #[test]
    fn test_word_count_collapses_runs() {
        assert_eq!(word_count("a  b   c"), 3);
        assert_eq!(word_count("  leading and trailing  "), 3);
    }

    #[test]
    fn test_word_count_mixed_separators() {
        assert_eq!(word_count("Role:\nAct as a tutor.\tTask: help"), 6);
    }

    #[test]
    fn test_word_count_punctuation_stays_attached() {
        assert_eq!(word_count("don't stop, co-op!"), 3);
    }

    #[test]
    fn test_normalize_for_detection() {
        assert_eq!(normalize_for_detection("  Act AS a Planner \n"), "act as a planner");
    }

    #[test]
    fn test_clamp_short_text_untouched() {
        assert_eq!(clamp_utf16("hello", 80), "hello");
        assert_eq!(clamp_utf16("hello", 5), "hello");
    }

    #[test]
    fn test_clamp_truncates() {
        assert_eq!(clamp_utf16("abcdef", 3), "abc");
    }

    #[test]
    fn test_clamp_respects_char_boundaries() {
        // 'é' is two bytes in UTF-8 but one UTF-16 unit
        assert_eq!(clamp_utf16("éééé", 2), "éé");
    }

    #[test]
    fn test_clamp_counts_astral_chars_as_two_units() {
        assert_eq!(clamp_utf16("😀😀😀", 4), "😀😀");
        assert_eq!(clamp_utf16("a😀b", 3), "a😀");
    }

    #[test]
    fn test_clamp_drops_straddling_astral_char() {
        assert_eq!(clamp_utf16("😀😀", 3), "😀");
        assert_eq!(clamp_utf16("😀", 1), "");
    }

    #[test]
    fn test_clamp_zero() {
        assert_eq!(clamp_utf16("abc", 0), "");
    }
}
