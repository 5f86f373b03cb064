//! Dictionary providers and file driver for the lolspeak translator
//!
//! The [`lolspeak`] core translates lines against a table it is handed. This
//! crate supplies that table and moves text between files:
//!
//! # Workflow Example
//!
//! ```ignore
//! use lolspeak_cli::{DEFAULT_DICTIONARY_URL, RemoteTableProvider, derive_output_path, run};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Choose where the dictionary comes from
//!     let provider = RemoteTableProvider::new(DEFAULT_DICTIONARY_URL.to_string())?;
//!
//!     // 2. Load it and translate the file line by line
//!     let input = Path::new("story.txt");
//!     let output = derive_output_path(input);
//!     let summary = run(&provider, input, &output, |n, total| {
//!         println!("Line {} of {} translated", n, total)
//!     })
//!     .await?;
//!
//!     println!("Your file is ready at the following path: {}", summary.output.display());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod local;
pub mod mock;
pub mod provider;
pub mod remote;

// Re-export main types for convenient access
pub use config::{Config, DictionarySource, build_command};
pub use driver::{
    DriveSummary, OUTPUT_SUFFIX, derive_output_path, read_lines, run, translate_file, write_lines,
};
pub use error::{CliError, CliResult};
pub use local::FileTableProvider;
pub use mock::{MockMode, MockTableProvider};
pub use provider::TableProvider;
pub use remote::{DEFAULT_DICTIONARY_URL, DICTIONARY_URL_ENV, RemoteTableProvider};
