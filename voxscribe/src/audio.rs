use std::path::Path;

use tokio::io::AsyncReadExt;
use tracing::debug;

use crate::error::{Error, Result};

/// Audio file contents ready for upload.
pub(crate) struct AudioUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Fail with [`Error::FileNotFound`] unless `path` exists.
pub fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Read an audio file for upload.
///
/// The handle lives only inside this function, so it is closed before any
/// network activity starts, whatever the request later does.
pub(crate) async fn load_audio(path: &Path) -> Result<AudioUpload> {
    ensure_exists(path)?;

    let mut bytes = Vec::new();
    {
        let mut file = tokio::fs::File::open(path).await?;
        file.read_to_end(&mut bytes).await?;
    }

    let file_name = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| "audio".into());

    debug!(file = %file_name, bytes = bytes.len(), "audio loaded");

    Ok(AudioUpload { file_name, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_ensure_exists_missing() {
        let result = ensure_exists(Path::new("/nonexistent/audio.mp3"));
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_ensure_exists_dir_counts() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ensure_exists(dir.path()).is_ok());
    }

    #[tokio::test]
    async fn test_load_audio_reads_bytes_and_name() {
        let mut tmp = tempfile::Builder::new()
            .prefix("voxscribe-load-")
            .suffix(".ogg")
            .tempfile()
            .unwrap();
        tmp.write_all(b"OggS fake audio").unwrap();
        tmp.flush().unwrap();

        let upload = load_audio(tmp.path()).await.unwrap();
        assert_eq!(
            upload.file_name,
            tmp.path().file_name().unwrap().to_string_lossy()
        );
        assert!(upload.file_name.ends_with(".ogg"));
        assert_eq!(upload.bytes, b"OggS fake audio");
    }

    #[tokio::test]
    async fn test_load_audio_missing() {
        let result = load_audio(&PathBuf::from("/nonexistent/audio.wav")).await;
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[tokio::test]
    async fn test_load_audio_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = load_audio(dir.path()).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
