use lolspeak_cli::{CliError, Config, build_command, run};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Ask for the input path on stdin.
fn prompt_for_input() -> Result<PathBuf, CliError> {
    print!("Please enter a file path for a .txt file to be translated: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(CliError::Config("No input file given".to_string()));
    }
    Ok(PathBuf::from(answer))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let matches = build_command().get_matches();
    let config = Config::from_matches(&matches)?;

    println!("Hello. This program takes a .txt file and translates that text into lolcat.");

    let input = match &config.input {
        Some(path) => path.clone(),
        None => prompt_for_input()?,
    };
    let output = config.resolve_output(&input)?;

    println!("Thank you! Beginning translation process for: {}", input.display());

    let provider = config.provider()?;
    let quiet = config.quiet;
    let summary = match run(provider.as_ref(), &input, &output, |current, total| {
        if !quiet {
            println!("Line {} of {} translated", current, total);
        }
    })
    .await
    {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("❌ Translation failed: {}", e);
            return Err(e.into());
        }
    };

    println!(
        "Your file is ready at the following path: {}",
        summary.output.display()
    );

    Ok(())
}
