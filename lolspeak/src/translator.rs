use crate::table::TranslationTable;
use crate::token::Token;

/// Substitutes word tokens through a [`TranslationTable`].
///
/// Punctuation tokens are never looked up. Words missing from the table pass
/// through unchanged. Any token that ends up empty, whether from an empty
/// replacement such as `a → ""` or an empty stem such as the inside of `()`,
/// is dropped so it cannot leave a gap in the joined line.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    table: &'a TranslationTable,
}

impl<'a> Translator<'a> {
    pub fn new(table: &'a TranslationTable) -> Self {
        Translator { table }
    }

    /// Translate a single token, returning `None` if it should be dropped.
    pub fn translate_token<'t>(&self, token: &'t Token) -> Option<&'t str>
    where
        'a: 't,
    {
        let text = if token.is_word() {
            self.table
                .lookup(&token.text)
                .unwrap_or(token.as_str())
        } else {
            token.as_str()
        };
        (!text.is_empty()).then_some(text)
    }

    /// Translate a line's tokens, preserving order.
    pub fn translate<'t>(&self, tokens: &'t [Token]) -> Vec<&'t str>
    where
        'a: 't,
    {
        tokens
            .iter()
            .filter_map(|token| self.translate_token(token))
            .collect()
    }
}
