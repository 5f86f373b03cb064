//! Reassembly of translated tokens into an output line
//!
//! Tokens are joined with single spaces, then a fixed list of literal
//! substring replacements pulls punctuation back against its word. The
//! replacements run in [`SPACING_RULES`] order, each over the whole line;
//! changing the order changes the output on inputs with adjacent marks.

/// Ordered `(pattern, replacement)` pairs applied after joining.
pub const SPACING_RULES: &[(&str, &str)] = &[
    (" ,", ","),
    (" .", "."),
    (" ;", ";"),
    (" :", ":"),
    (" ?", "?"),
    (" !", "!"),
    (" 's", "'s"),
    ("( ", "("),
    (" )", ")"),
    (") ", ")"),
];

/// Appended to every reassembled line.
pub const LINE_TERMINATOR: &str = "\n";

/// Builds one output line from translated tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reassembler;

impl Reassembler {
    pub fn new() -> Self {
        Reassembler
    }

    /// Join tokens with a single space.
    pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
        let mut line = String::new();
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(token.as_ref());
        }
        line
    }

    /// Apply [`SPACING_RULES`] in order.
    ///
    /// On a line produced by [`Reassembler::join`] this is idempotent: a
    /// second pass finds nothing left to replace.
    pub fn normalize(line: &str) -> String {
        SPACING_RULES
            .iter()
            .fold(line.to_string(), |acc, (pattern, replacement)| {
                acc.replace(pattern, replacement)
            })
    }

    /// Join, normalize and terminate.
    pub fn reassemble<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        let mut line = Self::normalize(&Self::join(tokens));
        line.push_str(LINE_TERMINATOR);
        line
    }
}
