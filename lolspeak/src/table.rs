use std::collections::HashMap;

/// Mapping from lowercase English stem to its lolspeak replacement.
///
/// An empty replacement means the word is deleted on translation.
/// The table is built once and only read while translating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable(HashMap<String, String>);

impl TranslationTable {
    pub fn new() -> Self {
        TranslationTable(HashMap::new())
    }

    pub fn with_entry(mut self, source: &str, replacement: &str) -> Self {
        self.0.insert(source.to_owned(), replacement.to_owned());
        self
    }

    pub fn insert(&mut self, source: String, replacement: String) -> Option<String> {
        self.0.insert(source, replacement)
    }

    /// Exact-match lookup. No case folding or partial matching.
    pub fn lookup(&self, source: &str) -> Option<&str> {
        self.0.get(source).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
