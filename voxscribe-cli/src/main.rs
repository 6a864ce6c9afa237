use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use voxscribe::{TranscribeOptions, API_URL, DEFAULT_API_KEY, DEFAULT_LANGUAGE, DEFAULT_MODEL};

#[derive(Parser)]
#[command(name = "voxscribe", about = "Transcribe audio files using the Mistral API")]
struct Cli {
    /// Path to the audio file to transcribe.
    file_path: PathBuf,

    /// Mistral API key (overrides the built-in key).
    #[arg(long)]
    api_key: Option<String>,

    /// Model to use.
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Language code.
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Include segment timestamps in the transcription.
    #[arg(long)]
    timestamps: bool,

    /// Transcription endpoint.
    #[arg(long, default_value = API_URL, hide = true)]
    endpoint: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voxscribe=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        report(&e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> voxscribe::Result<()> {
    let api_key =
        voxscribe::resolve_api_key(cli.api_key.as_deref(), DEFAULT_API_KEY, prompt_api_key)?;

    voxscribe::audio::ensure_exists(&cli.file_path)?;

    let opts = TranscribeOptions::new()
        .model(&cli.model)?
        .language(&cli.language)?
        .timestamps(cli.timestamps)
        .endpoint(cli.endpoint);

    eprintln!("Transcribing '{}'...", cli.file_path.display());

    let spinner = spinner();
    let result = voxscribe::transcribe_file_with_options(&cli.file_path, &api_key, &opts).await;
    spinner.finish_and_clear();
    let transcript = result?;

    let rendered = transcript.render(opts.timestamps)?;
    println!("\nTranscription:");
    print!("{rendered}");

    Ok(())
}

fn prompt_api_key() -> io::Result<String> {
    eprint!("Enter your Mistral API key: ");
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Waiting for transcription");
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

fn report(e: &voxscribe::Error) {
    if e.is_input_error() {
        eprintln!("Error: {e}");
    } else if e.is_request_error() {
        eprintln!("Error making API request: {e}");
        if let Some(body) = e.response_body() {
            eprintln!("Response: {body}");
        }
    } else {
        eprintln!("Error during transcription: {e}");
    }
}
