/// Classification of a token produced by the splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A punctuation mark or punctuation combination, including the possessive `'s`.
    /// Never looked up in the translation table.
    Punctuation,
    /// A word stem. Looked up in the translation table.
    Word,
}

/// A single unit of a line's token sequence.
///
/// Tokens carry nothing but their text and kind; their position is their index
/// in the sequence returned by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn word(text: &str) -> Self {
        Token {
            kind: TokenKind::Word,
            text: text.to_owned(),
        }
    }

    pub fn punctuation(text: &str) -> Self {
        Token {
            kind: TokenKind::Punctuation,
            text: text.to_owned(),
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}
