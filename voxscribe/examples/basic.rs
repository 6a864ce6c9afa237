//! Transcribe a local audio file and print the text.
//!
//! Usage: cargo run --example basic -- path/to/audio.mp3 <api-key>

#[tokio::main]
async fn main() -> voxscribe::Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args.next().expect("usage: basic <audio-file> <api-key>");
    let api_key = args.next().expect("usage: basic <audio-file> <api-key>");

    let transcript = voxscribe::transcribe_file(&path, &api_key).await?;

    println!("{}", transcript.text());

    Ok(())
}
