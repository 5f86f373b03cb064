//! Mock dictionary provider for testing
//!
//! Hands back a preset table, or fails in a preset way, without touching the
//! network or the filesystem.
//!
//! # Example
//!
//! ```ignore
//! use lolspeak::TranslationTable;
//! use lolspeak_cli::{MockMode, MockTableProvider, TableProvider};
//!
//! #[tokio::test]
//! async fn test_with_fixture() {
//!     let table = TranslationTable::new().with_entry("cat", "kitteh");
//!     let mock = MockTableProvider::new(MockMode::Table(table));
//!     assert_eq!(mock.load_table().await.unwrap().lookup("cat"), Some("kitteh"));
//! }
//! ```

use crate::error::{CliError, CliResult};
use crate::provider::TableProvider;
use async_trait::async_trait;
use lolspeak::{LolError, TranslationTable};
use std::time::Duration;

/// What the mock returns from `load_table`
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Return this table
    Table(TranslationTable),

    /// Simulate a download that produced no entries
    Empty,

    /// Simulate a network failure with this message
    Error(String),
}

#[derive(Debug, Clone)]
pub struct MockTableProvider {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
}

impl MockTableProvider {
    pub fn new(mode: MockMode) -> Self {
        Self { mode, delay_ms: 0 }
    }

    /// Create a mock that waits `delay_ms` before answering
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self { mode, delay_ms }
    }
}

#[async_trait]
impl TableProvider for MockTableProvider {
    async fn load_table(&self) -> CliResult<TranslationTable> {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        match &self.mode {
            MockMode::Table(table) => Ok(table.clone()),
            MockMode::Empty => Err(LolError::EmptyTable.into()),
            MockMode::Error(msg) => Err(CliError::Network(msg.clone())),
        }
    }

    fn provider_name(&self) -> &str {
        "Mock dictionary"
    }
}
