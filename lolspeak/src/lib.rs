//! English to lolspeak translation
//!
//! A line goes through three steps:
//!
//! 1. [`tokenize_line`] lowercases it, splits it on whitespace and separates
//!    punctuation from every word stem.
//! 2. [`Translator`] replaces each word stem through a [`TranslationTable`],
//!    dropping words whose replacement is empty.
//! 3. [`Reassembler`] joins the result with spaces and pulls punctuation back
//!    against its word.
//!
//! ```ignore
//! use lolspeak::{TranslationTable, translate_line};
//!
//! let table = TranslationTable::new()
//!     .with_entry("the", "teh")
//!     .with_entry("cat", "kitteh")
//!     .with_entry("a", "");
//!
//! assert_eq!(translate_line("The cat's a (cat)", &table), "teh kitteh's (kitteh)\n");
//! ```
//!
//! Loading the table is left to the caller; see [`loader`] for the JSON format.

pub mod error;
pub mod loader;
pub mod punctuation;
pub mod reassembly;
pub mod table;
pub mod token;
pub mod tokenizer;
pub mod translator;

pub use error::{LolError, LolResult};
pub use loader::{load_table_from_file, parse_table, table_from_value};
pub use reassembly::{LINE_TERMINATOR, Reassembler, SPACING_RULES};
pub use table::TranslationTable;
pub use token::{Token, TokenKind};
pub use tokenizer::{SplitRule, split_unit, tokenize_line};
pub use translator::Translator;

use tracing::debug;

/// Translate one line. The result always ends with `\n`.
pub fn translate_line(line: &str, table: &TranslationTable) -> String {
    let tokens = tokenize_line(line);
    let translated = Translator::new(table).translate(&tokens);
    Reassembler::new().reassemble(&translated)
}

/// Translate lines in order, one output line per input line.
///
/// `on_progress(current, total)` is called after each line, with `current`
/// counting from 1.
pub fn translate_lines<S, F>(
    lines: &[S],
    table: &TranslationTable,
    mut on_progress: F,
) -> Vec<String>
where
    S: AsRef<str>,
    F: FnMut(usize, usize),
{
    let total = lines.len();

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let translated = translate_line(line.as_ref(), table);
            debug!("Line {} of {} translated", i + 1, total);
            on_progress(i + 1, total);
            translated
        })
        .collect()
}
