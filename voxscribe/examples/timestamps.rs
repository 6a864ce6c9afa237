//! Transcribe with a custom model and language, printing segment timestamps.
//!
//! Usage: cargo run --example timestamps -- path/to/audio.mp3 <api-key>

use voxscribe::TranscribeOptions;

#[tokio::main]
async fn main() -> voxscribe::Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args.next().expect("usage: timestamps <audio-file> <api-key>");
    let api_key = args.next().expect("usage: timestamps <audio-file> <api-key>");

    let opts = TranscribeOptions::new()
        .model("voxtral-mini-latest")?
        .language("en")?
        .timestamps(true);

    let transcript = voxscribe::transcribe_file_with_options(&path, &api_key, &opts).await?;

    for segment in transcript.segments()?.unwrap_or_default() {
        println!("{:>8}s  {}", segment.start(), segment.text().trim());
    }

    Ok(())
}
