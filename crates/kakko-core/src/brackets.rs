//! Full-width to half-width parenthesis substitution.

use std::borrow::Cow;

/// FULLWIDTH LEFT PARENTHESIS
pub const FULLWIDTH_LEFT_PAREN: char = '\u{FF08}';
/// FULLWIDTH RIGHT PARENTHESIS
pub const FULLWIDTH_RIGHT_PAREN: char = '\u{FF09}';

/// Returns `true` if `content` holds at least one full-width parenthesis.
pub fn contains_fullwidth(content: &str) -> bool {
    content.contains([FULLWIDTH_LEFT_PAREN, FULLWIDTH_RIGHT_PAREN])
}

/// Replace every `（` with `(` and every `）` with `)`.
///
/// Returns the input borrowed when there is nothing to replace, so callers can
/// detect "no change" without comparing strings.
pub fn normalize(content: &str) -> Cow<'_, str> {
    if !contains_fullwidth(content) {
        return Cow::Borrowed(content);
    }

    let normalized = content
        .chars()
        .map(|c| match c {
            FULLWIDTH_LEFT_PAREN => '(',
            FULLWIDTH_RIGHT_PAREN => ')',
            other => other,
        })
        .collect();

    Cow::Owned(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_both_parentheses() {
        assert_eq!(normalize("settings（beta）"), "settings(beta)");
    }

    #[test]
    fn test_replaces_every_occurrence() {
        assert_eq!(normalize("（x）（y）"), "(x)(y)");
        assert_eq!(normalize("（（nested））"), "((nested))");
    }

    #[test]
    fn test_unbalanced_parentheses_are_replaced_independently() {
        assert_eq!(normalize("open（ only"), "open( only");
        assert_eq!(normalize("close） only"), "close) only");
    }

    #[test]
    fn test_ascii_input_is_borrowed() {
        let result = normalize("hello (world)");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "hello (world)");
    }

    #[test]
    fn test_other_fullwidth_characters_untouched() {
        // Full-width square brackets, braces and corner brackets stay as-is.
        let input = "［a］｛b｝「c」（d）";
        assert_eq!(normalize(input), "［a］｛b｝「c」(d)");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "",
            "plain",
            "settings（beta）",
            "混在（mixed）text (ascii) （",
            "\u{FF08}\u{FF09}\u{FF08}",
        ];
        for input in inputs {
            let once = normalize(input).into_owned();
            let twice = normalize(&once).into_owned();
            assert_eq!(once, twice, "normalize not idempotent for {input:?}");
            assert!(!contains_fullwidth(&once));
        }
    }

    #[test]
    fn test_preserves_surrounding_multibyte_text() {
        assert_eq!(
            normalize("関数（引数）を呼ぶ\n"),
            "関数(引数)を呼ぶ\n"
        );
    }

    #[test]
    fn test_contains_fullwidth() {
        assert!(contains_fullwidth("a（"));
        assert!(contains_fullwidth("）"));
        assert!(!contains_fullwidth("(ascii)"));
        assert!(!contains_fullwidth(""));
    }
}
