//! Line driver
//!
//! Reads an input file line by line, translates every line in order and
//! writes one output line per input line. Progress is reported through a
//! callback after each line so the caller decides how (or whether) to show it.

use crate::error::CliResult;
use crate::provider::TableProvider;
use lolspeak::{TranslationTable, translate_lines};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Appended to the input's name to form the default output name
pub const OUTPUT_SUFFIX: &str = "_lolcat.txt";

/// Outcome of translating one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveSummary {
    /// Number of lines written
    pub lines: usize,
    /// Where they were written
    pub output: PathBuf,
}

/// Name the output file after the input: `story.txt` → `story_lolcat.txt`
///
/// Only an exact `.txt` suffix is removed. Other extensions stay part of the
/// name (`notes.md` → `notes.md_lolcat.txt`).
pub fn derive_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.strip_suffix(".txt").unwrap_or(&name);
    input.with_file_name(format!("{}{}", stem, OUTPUT_SUFFIX))
}

/// Read all lines of a file, without terminators.
pub fn read_lines(path: &Path) -> CliResult<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Write already terminated lines to a file, replacing it.
pub fn write_lines(path: &Path, lines: &[String]) -> CliResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Translate `input` into `output` with a table that is already loaded.
pub fn translate_file<F>(
    input: &Path,
    output: &Path,
    table: &TranslationTable,
    on_progress: F,
) -> CliResult<DriveSummary>
where
    F: FnMut(usize, usize),
{
    let lines = read_lines(input)?;
    let translated = translate_lines(&lines, table, on_progress);
    write_lines(output, &translated)?;

    info!(
        "Wrote {} lines from {} to {}",
        translated.len(),
        input.display(),
        output.display()
    );

    Ok(DriveSummary {
        lines: translated.len(),
        output: output.to_path_buf(),
    })
}

/// Load the table from `provider`, then translate `input` into `output`.
pub async fn run<F>(
    provider: &dyn TableProvider,
    input: &Path,
    output: &Path,
    on_progress: F,
) -> CliResult<DriveSummary>
where
    F: FnMut(usize, usize),
{
    let table = provider.load_table().await?;
    info!(
        "{} loaded {} entries",
        provider.provider_name(),
        table.len()
    );
    translate_file(input, output, &table, on_progress)
}
