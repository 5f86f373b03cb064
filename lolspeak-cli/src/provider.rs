//! Dictionary provider trait
//!
//! A `TableProvider` produces the [`TranslationTable`] once, before any line is
//! translated. The translation core never sees where the table came from, so
//! a network download, a local file and a test fixture are interchangeable.

use crate::error::CliResult;
use async_trait::async_trait;
use lolspeak::TranslationTable;

/// Source of a translation table
///
/// Implementations may perform I/O, so loading is async.
#[async_trait]
pub trait TableProvider: Send + Sync {
    /// Load the complete table
    ///
    /// # Returns
    ///
    /// * `Ok(TranslationTable)` - A non-empty table
    /// * `Err(CliError)` - If the source cannot be read or is not a valid table
    async fn load_table(&self) -> CliResult<TranslationTable>;

    /// Name of this provider, used in log messages
    fn provider_name(&self) -> &str;
}
