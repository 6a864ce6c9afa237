//! Mistral Voxtral transcription client: audio file in, transcript with timestamps out.
//!
//! **voxscribe** uploads a local audio file to the Mistral audio transcription
//! endpoint and hands back the parsed response, either as plain text or as
//! timestamped segments.
//!
//! # Quick start
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> voxscribe::Result<()> {
//! let transcript = voxscribe::transcribe_file("meeting.mp3", "my-api-key").await?;
//! println!("{}", transcript.text());
//!
//! // With segment timestamps
//! let opts = voxscribe::TranscribeOptions::new().timestamps(true);
//! let transcript =
//!     voxscribe::transcribe_file_with_options("meeting.mp3", "my-api-key", &opts).await?;
//! print!("{}", transcript.render(true)?);
//! # Ok(())
//! # }
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub(crate) mod transcribe;
pub mod types;

pub use config::{
    resolve_api_key, TranscribeOptions, API_URL, DEFAULT_API_KEY, DEFAULT_LANGUAGE, DEFAULT_MODEL,
};
pub use error::{Error, Result};
pub use types::{Segment, Transcript};

use std::path::Path;

/// Transcribe a local audio file with default options.
pub async fn transcribe_file(path: impl AsRef<Path>, api_key: &str) -> Result<Transcript> {
    transcribe_file_with_options(path, api_key, &TranscribeOptions::default()).await
}

/// Transcribe a local audio file with custom options.
pub async fn transcribe_file_with_options(
    path: impl AsRef<Path>,
    api_key: &str,
    options: &TranscribeOptions,
) -> Result<Transcript> {
    if api_key.trim().is_empty() {
        return Err(Error::MissingApiKey);
    }

    // File is read and closed here, before any network activity
    let upload = audio::load_audio(path.as_ref()).await?;

    let client = reqwest::Client::new();
    transcribe::transcribe_upload(&client, upload, api_key, options).await
}
