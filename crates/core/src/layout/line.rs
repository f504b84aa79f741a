//! Line assembly: grouping positioned glyphs into text lines.

use std::collections::BTreeMap;

use crate::source::Char;

/// Maximum length for the running header/footer filter.
const BANNER_MAX_LEN: usize = 15;
/// Maximum word count for the running header/footer filter.
const BANNER_MAX_WORDS: usize = 2;

/// A horizontal text line: the glyphs sharing one rounded vertical
/// position, with their concatenated, trimmed text.
#[derive(Debug, Clone)]
pub struct Line {
    /// Rounded distance from the page top.
    pub top: i64,
    pub chars: Vec<Char>,
    pub text: String,
}

/// Group a page's glyphs into lines keyed on rounded vertical position.
///
/// The extractor yields glyphs in reading order within a line, so insertion
/// order is kept as-is; lines come out sorted top to bottom. Lines whose
/// trimmed text is empty are dropped, as are short all-uppercase lines (see
/// [`is_running_banner`]).
pub fn assemble_lines(chars: &[Char]) -> Vec<Line> {
    let mut rows: BTreeMap<i64, Vec<Char>> = BTreeMap::new();
    for ch in chars {
        rows.entry(ch.top.round() as i64)
            .or_default()
            .push(ch.clone());
    }

    rows.into_iter()
        .filter_map(|(top, chars)| {
            let joined: String = chars.iter().map(|c| c.text.as_str()).collect();
            let text = joined.trim().to_string();
            if text.is_empty() || is_running_banner(&text) {
                return None;
            }
            Some(Line { top, chars, text })
        })
        .collect()
}

/// True for short all-uppercase lines like page headers, footers and
/// watermarks: no lowercase letters, at most two words, under 15
/// characters.
///
/// The filter can also discard short uppercase body text (e.g. a lone
/// "SUMMARY" heading); that loss of recall is accepted in exchange for
/// keeping repeated banners out of every page.
pub fn is_running_banner(text: &str) -> bool {
    let has_upper = text.chars().any(char::is_uppercase);
    let has_lower = text.chars().any(char::is_lowercase);
    has_upper
        && !has_lower
        && text.split_whitespace().count() <= BANNER_MAX_WORDS
        && text.chars().count() < BANNER_MAX_LEN
}

/// True when a line is numeric data continuing the previous paragraph:
/// after stripping spaces, hyphens, periods and percent signs the
/// remainder is non-empty and all digits.
pub fn is_number_line(text: &str) -> bool {
    let stripped: String = text
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '%'))
        .collect();
    !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_requires_cased_text() {
        // Digits only: nothing uppercase, so not a banner.
        assert!(!is_running_banner("1234"));
        assert!(is_running_banner("PAGE 7"));
    }

    #[test]
    fn number_line_strips_formatting() {
        assert!(is_number_line("1 234"));
        assert!(is_number_line("12.5%"));
        assert!(is_number_line("-42"));
        assert!(!is_number_line("3,000"));
        assert!(!is_number_line("..."));
        assert!(!is_number_line("12a"));
    }
}
