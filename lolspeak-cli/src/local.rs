use crate::error::CliResult;
use crate::provider::TableProvider;
use async_trait::async_trait;
use lolspeak::{TranslationTable, load_table_from_file};
use std::path::PathBuf;
use tracing::info;

/// Reads the translation table from a JSON file, for offline use
#[derive(Debug, Clone)]
pub struct FileTableProvider {
    path: PathBuf,
}

impl FileTableProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TableProvider for FileTableProvider {
    async fn load_table(&self) -> CliResult<TranslationTable> {
        info!("Loading dictionary from {}", self.path.display());

        Ok(load_table_from_file(&self.path)?)
    }

    fn provider_name(&self) -> &str {
        "Dictionary file"
    }
}
