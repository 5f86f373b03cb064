//! Command-line configuration
//!
//! Arguments are declared with clap's builder API. The dictionary URL can also
//! come from `LOLSPEAK_DICTIONARY_URL`; a local `--dictionary` file wins over
//! any URL.

use crate::driver::derive_output_path;
use crate::error::{CliError, CliResult};
use crate::local::FileTableProvider;
use crate::provider::TableProvider;
use crate::remote::{DEFAULT_DICTIONARY_URL, DICTIONARY_URL_ENV, RemoteTableProvider};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};

/// Where the translation table is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    Remote(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File to translate; `None` means ask on stdin
    pub input: Option<PathBuf>,
    /// Explicit output path; `None` means derive it from the input
    pub output: Option<PathBuf>,
    pub dictionary: DictionarySource,
    /// Suppress per-line progress
    pub quiet: bool,
}

pub fn build_command() -> Command {
    Command::new("lolspeak")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate a text file from English to lolspeak")
        .arg(
            Arg::new("input")
                .help("Text file to translate (prompted for if omitted)")
                .value_parser(clap::value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file (default: <input>_lolcat.txt next to the input)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("dictionary")
                .long("dictionary")
                .short('d')
                .help("Read the dictionary from a local JSON file instead of downloading it")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("url")
                .long("url")
                .help("URL of the JSON dictionary")
                .env(DICTIONARY_URL_ENV)
                .default_value(DEFAULT_DICTIONARY_URL),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Do not print progress for every translated line")
                .action(ArgAction::SetTrue),
        )
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> CliResult<Self> {
        let dictionary = match matches.get_one::<PathBuf>("dictionary") {
            Some(path) => DictionarySource::File(path.clone()),
            None => {
                let url = matches
                    .get_one::<String>("url")
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_DICTIONARY_URL.to_string());
                DictionarySource::Remote(url)
            }
        };

        Ok(Config {
            input: matches.get_one::<PathBuf>("input").cloned(),
            output: matches.get_one::<PathBuf>("output").cloned(),
            dictionary,
            quiet: matches.get_flag("quiet"),
        })
    }

    /// Output path for `input`, honouring `--output`.
    pub fn output_for(&self, input: &Path) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| derive_output_path(input))
    }

    /// Output path for `input`, refusing one that would overwrite the input.
    pub fn resolve_output(&self, input: &Path) -> CliResult<PathBuf> {
        let output = self.output_for(input);
        if same_file(input, &output) {
            return Err(CliError::Config(format!(
                "Output path '{}' must differ from the input path",
                output.display()
            )));
        }
        Ok(output)
    }

    /// Build the provider for the configured dictionary source.
    pub fn provider(&self) -> CliResult<Box<dyn TableProvider>> {
        Ok(match &self.dictionary {
            DictionarySource::Remote(url) => Box::new(RemoteTableProvider::new(url.clone())?),
            DictionarySource::File(path) => Box::new(FileTableProvider::new(path.clone())),
        })
    }
}

/// Absolute form of `path`. The file itself need not exist; its parent is
/// canonicalized instead, and as a last resort the path is kept as given.
fn absolute(path: &Path) -> PathBuf {
    if let Ok(path) = path.canonicalize() {
        return path;
    }
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match (parent.canonicalize(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    absolute(a) == absolute(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliResult<Config> {
        let matches = build_command()
            .try_get_matches_from(std::iter::once("lolspeak").chain(args.iter().copied()))
            .unwrap();
        Config::from_matches(&matches)
    }

    #[test]
    fn test_command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn test_input_and_derived_output() {
        let config = parse(&["story.txt"]).unwrap();
        assert_eq!(config.input, Some(PathBuf::from("story.txt")));
        assert_eq!(
            config.output_for(Path::new("story.txt")),
            PathBuf::from("story_lolcat.txt")
        );
        assert!(!config.quiet);
    }

    #[test]
    fn test_no_input_means_prompt() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.input, None);
    }

    #[test]
    fn test_explicit_output() {
        let config = parse(&["story.txt", "-o", "out.txt", "-q"]).unwrap();
        assert_eq!(config.output_for(Path::new("story.txt")), PathBuf::from("out.txt"));
        assert!(config.quiet);
    }

    #[test]
    fn test_output_equal_to_input_is_rejected() {
        let config = parse(&["story.txt", "--output", "story.txt"]).unwrap();
        match config.resolve_output(Path::new("story.txt")) {
            Err(CliError::Config(msg)) => assert!(msg.contains("differ")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_output_spelled_differently_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("story.txt");
        std::fs::write(&input, "the cat\n").unwrap();
        let output = dir.path().join(".").join("story.txt");

        let args = [
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ];
        let config = parse(&args).unwrap();
        assert!(matches!(
            config.resolve_output(&input),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_same_file_for_missing_output() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("new.txt");
        let b = dir.path().join("sub").join("..").join("new.txt");
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        assert!(same_file(&a, &b));
        assert!(!same_file(&a, &dir.path().join("other.txt")));
    }

    #[test]
    fn test_derived_output_is_accepted() {
        let config = parse(&["story.txt"]).unwrap();
        assert_eq!(
            config.resolve_output(Path::new("story.txt")).unwrap(),
            PathBuf::from("story_lolcat.txt")
        );
    }

    #[test]
    fn test_dictionary_file_wins_over_url() {
        let config = parse(&["story.txt", "-d", "dict.json", "--url", "http://x/y.json"]).unwrap();
        assert_eq!(
            config.dictionary,
            DictionarySource::File(PathBuf::from("dict.json"))
        );
        assert_eq!(config.provider().unwrap().provider_name(), "Dictionary file");
    }

    #[test]
    fn test_explicit_url() {
        let config = parse(&["story.txt", "--url", "http://localhost/d.json"]).unwrap();
        assert_eq!(
            config.dictionary,
            DictionarySource::Remote("http://localhost/d.json".to_string())
        );
        assert_eq!(config.provider().unwrap().provider_name(), "Remote dictionary");
    }

    #[test]
    fn test_bad_url_fails_when_building_provider() {
        let config = parse(&["story.txt", "--url", "nope"]).unwrap();
        assert!(matches!(config.provider(), Err(CliError::Config(_))));
    }
}
