use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, bail};
use log::info;

mod cli;

use cli::Cli;
use ytnotes::NotesError;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytnotes.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytnotes")
        .join("logs")
}

/// Choose the user-facing message for an error kind.
fn failure_message(err: &NotesError) -> String {
    match err {
        // Keep the parse detail; the fixed invalid-link text belongs to the
        // no-identifier case, not the unparseable one
        NotesError::InvalidUrl(_) => err.to_string(),
        NotesError::TranscriptUnavailable(reason) => format!("Could not fetch the transcript: {reason}"),
        NotesError::GenerationFailed(reason) => format!("Could not generate notes: {reason}"),
        NotesError::MissingApiKey(var) => format!("Set {var} to enable notes generation."),
    }
}

fn fail(err: &NotesError) -> ! {
    eprintln!("{}", failure_message(err));
    std::process::exit(1);
}

/// Post-fetch gate: an empty transcript never reaches the summarizer.
fn should_summarize(transcript: &str) -> bool {
    !transcript.is_empty()
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();
    let config = ytnotes::config::Config::load().unwrap_or_default();

    let lang = cli.lang.clone().or(config.default_lang).unwrap_or_else(|| "en".to_string());
    let model = cli
        .model
        .clone()
        .or(config.default_model)
        .unwrap_or_else(|| ytnotes::summarize::DEFAULT_MODEL.to_string());

    let url_input = match cli.url {
        Some(ref url) => url.clone(),
        None => {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        }
    };
    let url_input = url_input.trim().to_string();

    if url_input.is_empty() {
        bail!("no URL provided\n\nUsage: ytnotes <URL>\n       echo <URL> | ytnotes");
    }

    let video_id = match ytnotes::parse_video_id(&url_input) {
        Ok(Some(id)) => id,
        Ok(None) => {
            eprintln!("Invalid YouTube link. Please provide a valid URL!");
            std::process::exit(1);
        }
        Err(ref err) => fail(err),
    };

    info!("Resolved video ID {video_id} from {url_input}");
    println!("Thumbnail: {}", ytnotes::thumbnail_url(&video_id));

    if cli.verbose {
        eprintln!("Video ID: {video_id}\nLanguage: {lang}");
    }

    let client = reqwest::Client::new();

    if cli.transcript_only {
        let transcript = ytnotes::transcript::fetch_transcript(&client, &video_id, &lang)
            .await
            .unwrap_or_else(|err| fail(&err));
        println!("{transcript}");
        return Ok(());
    }

    // Credential check happens before any network work, not inside the generation call
    let api_key = ytnotes::config::api_key_from_env().unwrap_or_else(|err| fail(&err));

    let transcript = ytnotes::transcript::fetch_transcript(&client, &video_id, &lang)
        .await
        .unwrap_or_else(|err| fail(&err));

    if !should_summarize(&transcript) {
        eprintln!("No transcript text available; nothing to summarize.");
        return Ok(());
    }

    if cli.verbose {
        eprintln!("Transcript: {} chars", transcript.len());
    }

    let summary = ytnotes::summarize::summarize(&client, &api_key, &model, &transcript)
        .await
        .unwrap_or_else(|err| fail(&err));

    println!("\n## Detailed Notes:\n\n{summary}");
    Ok(())
}
