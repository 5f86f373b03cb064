//! Punctuation tables used by the splitter
//!
//! These are plain data. The splitter consults them through the predicates
//! below and never hard-codes a mark itself.

/// Single marks that may be split off either end of a word.
pub const SIMPLE: &[char] = &[',', '.', ';', ':', '?', '!', '(', ')', '[', ']', '{', '}'];

/// Marks that may only be split off the front of a word.
pub const OPENERS: &[char] = &['(', '[', '{', '\'', '"'];

/// Two-character combinations of a simple mark and a quote, in either order.
pub const QUOTE_ADJACENT: &[&str] = &[
    ",\"", ",'", "\",", "',", //
    ".\"", ".'", "\".", "'.", //
    ";\"", ";'", "\";", "';", //
    ":\"", ":'", "\":", "':", //
    "?\"", "?'", "\"?", "'?", //
    "!\"", "!'", "\"!", "'!",
];

/// Two-character combinations where a bracket touches another mark,
/// including doubled brackets.
pub const PAIRED_ADJACENT: &[&str] = &[
    ".)", ").", ",)", "),", "):", ":)", ");", ";)", ")?", "?)", ")!", "!)", ")\"", "\")", ")'",
    "')", //
    ".]", "].", ",]", "],", "]:", ":]", "];", ";]", "]?", "?]", "]!", "!]", "]\"", "\"]", "]'",
    "']", //
    "((", "))", "{{", "}}", "[[", "]]", //
    "('", "{'", "'}", "['", "(\"", "{\"", "\"}", "[\"",
];

/// The possessive suffix.
pub const POSSESSIVE: &str = "'s";

pub fn is_simple(c: char) -> bool {
    SIMPLE.contains(&c)
}

pub fn is_opener(c: char) -> bool {
    OPENERS.contains(&c)
}

pub fn is_quote_adjacent(pair: &str) -> bool {
    QUOTE_ADJACENT.contains(&pair)
}

pub fn is_paired_adjacent(pair: &str) -> bool {
    PAIRED_ADJACENT.contains(&pair)
}

pub fn is_possessive(suffix: &str) -> bool {
    suffix == POSSESSIVE
}
