//! Rewriting of free-form input into canonical expression text.
//!
//! Canonical text uses only the variable letters, the operator symbols
//! `¬ ∧ ∨ ⊕ → ↔` and round parentheses, with no whitespace.

use log::debug;

/// Word aliases, matched case-insensitively (input is lower-cased first).
///
/// `xor` must come before `or`, otherwise its tail would be rewritten first.
const WORD_ALIASES: [(&str, &str); 4] = [("and", "∧"), ("xor", "⊕"), ("or", "∨"), ("not", "¬")];

/// Symbolic aliases. `<->` must come before `->`.
const SYMBOL_ALIASES: [(&str, &str); 7] = [
    ("<->", "↔"),
    ("<=>", "↔"),
    ("->", "→"),
    ("&", "∧"),
    ("|", "∨"),
    ("!", "¬"),
    ("^", "⊕"),
];

/// Normalizes brackets, whitespace, letter case and operator aliases.
///
/// Words at the start of a space-delimited token are replaced first, so `x or y` and
/// `x or(y)` keep their `x`. Words glued to their operands (`pxorq`) are replaced
/// afterwards, longest first.
///
/// No validation happens here: malformed input passes through and is reported
/// by the parser. Normalizing canonical text is a no-op.
pub fn normalize(input: &str) -> String {
    let lowered: String = input
        .chars()
        .map(|c| match c {
            '[' | '{' => '(',
            ']' | '}' => ')',
            c => c,
        })
        .collect::<String>()
        .to_lowercase();

    let mut text: String = lowered.split_whitespace().map(replace_leading_word).collect();

    for &(alias, symbol) in WORD_ALIASES.iter().chain(SYMBOL_ALIASES.iter()) {
        if text.contains(alias) {
            text = text.replace(alias, symbol);
        }
    }

    debug!("normalize({:?}) -> {:?}", input, text);
    text
}

/// Replaces an alias word opening `token` when it is not followed by a letter.
fn replace_leading_word(token: &str) -> String {
    for &(alias, symbol) in WORD_ALIASES.iter() {
        if let Some(rest) = token.strip_prefix(alias) {
            if !rest.starts_with(|c: char| c.is_alphabetic()) {
                return format!("{}{}", symbol, rest);
            }
        }
    }
    token.to_string()
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_word_and_symbol_aliases_agree() {
        let expected = "p∧q";
        assert_eq!(normalize("p and q"), expected);
        assert_eq!(normalize("p&q"), expected);
        assert_eq!(normalize("p∧q"), expected);
        assert_eq!(normalize("P AND Q"), expected);
    }

    #[test]
    fn test_all_operator_aliases() {
        assert_eq!(normalize("p or q"), "p∨q");
        assert_eq!(normalize("p | q"), "p∨q");
        assert_eq!(normalize("not p"), "¬p");
        assert_eq!(normalize("!p"), "¬p");
        assert_eq!(normalize("p xor q"), "p⊕q");
        assert_eq!(normalize("p ^ q"), "p⊕q");
        assert_eq!(normalize("p -> q"), "p→q");
        assert_eq!(normalize("p <-> q"), "p↔q");
        assert_eq!(normalize("p <=> q"), "p↔q");
    }

    #[test]
    fn test_brackets() {
        assert_eq!(normalize("[p & q] | {r}"), "(p∧q)∨(r)");
    }

    #[test]
    fn test_whitespace_is_stripped() {
        assert_eq!(normalize("  p \t&\n q  "), "p∧q");
    }

    #[test]
    fn test_mixed_words_without_spaces() {
        assert_eq!(normalize("NOTp AND (qXORr)"), "¬p∧(q⊕r)");
    }

    #[test]
    fn test_standalone_words_win() {
        assert_eq!(normalize("x or y"), "x∨y");
        assert_eq!(normalize("x xor y"), "x⊕y");
        assert_eq!(normalize("p xor q"), "p⊕q");
        assert_eq!(normalize("pxorq"), "p⊕q");
    }

    #[test]
    fn test_word_glued_to_following_group() {
        assert_eq!(normalize("x or(y)"), "x∨(y)");
        assert_eq!(normalize("p and(q)"), "p∧(q)");
        assert_eq!(normalize("x or!y"), "x∨¬y");
        assert_eq!(normalize("x xor(y)"), "x⊕(y)");
        assert_eq!(normalize("not(p)"), "¬(p)");
    }

    #[test]
    fn test_idempotent() {
        for input in ["(p and q) or (not r -> s)", "p <-> !q", "[p ^ q] xor r"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_malformed_passes_through() {
        assert_eq!(normalize("p & & z"), "p∧∧z");
    }
}
