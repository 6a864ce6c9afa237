use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::audio::AudioUpload;
use crate::config::{TranscribeOptions, UPLOAD_MIME};
use crate::error::{Error, Result};
use crate::types::Transcript;

/// Granularity sent when segment timestamps are requested.
const SEGMENT_GRANULARITY: &str = "segment";

/// Build the multipart body: file, model, language, and the timestamp
/// granularity only when timestamps were asked for.
pub(crate) fn build_form(upload: AudioUpload, options: &TranscribeOptions) -> Result<Form> {
    let file_part = Part::bytes(upload.bytes)
        .file_name(upload.file_name)
        .mime_str(UPLOAD_MIME)?;

    let mut form = Form::new()
        .part("file", file_part)
        .text("model", options.model.clone())
        .text("language", options.language.clone());

    if options.timestamps {
        form = form.text("timestamp_granularities", SEGMENT_GRANULARITY);
    }

    Ok(form)
}

/// Upload audio to the transcription endpoint and parse the response.
pub(crate) async fn transcribe_upload(
    client: &Client,
    upload: AudioUpload,
    api_key: &str,
    options: &TranscribeOptions,
) -> Result<Transcript> {
    info!(
        file = %upload.file_name,
        bytes = upload.bytes.len(),
        model = %options.model,
        language = %options.language,
        timestamps = options.timestamps,
        "uploading audio"
    );

    let form = build_form(upload, options)?;

    let response = client
        .post(&options.endpoint)
        .bearer_auth(api_key)
        .multipart(form)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let url = response.url().to_string();
        let body = response.text().await.ok().filter(|b| !b.trim().is_empty());
        warn!(status = status.as_u16(), %url, "transcription request rejected");
        return Err(Error::Api { status, url, body });
    }

    let body = response.bytes().await?;
    debug!(status = status.as_u16(), bytes = body.len(), "transcription response received");

    Transcript::from_json(&body)
}
