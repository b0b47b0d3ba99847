//! Core `Transcriber` trait and its error type.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::Credential;
use crate::stt::job::JobStatus;

// ---------------------------------------------------------------------------
// TranscribeError
// ---------------------------------------------------------------------------

/// All errors that can arise while transcribing through a remote service.
#[derive(Debug, Error)]
pub enum TranscribeError {
    /// The service rejected the credential (HTTP 401 / 403).
    #[error("authentication failed (HTTP {status})")]
    Unauthorized { status: u16 },

    /// HTTP transport or connection error.
    #[error("transcription request failed: {0}")]
    Request(String),

    /// A request did not complete within the configured timeout.
    #[error("transcription request timed out")]
    Timeout,

    /// The service answered with an unexpected non-success status.
    #[error("transcription service returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The service answered with a body this client cannot read.
    #[error("cannot parse transcription service response: {0}")]
    Parse(String),

    /// The job ended without a transcript.
    #[error("job {id} finished with status {status}")]
    JobFailed { id: String, status: JobStatus },

    /// The audio file could not be read.
    #[error("cannot read audio {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl TranscribeError {
    /// `true` when the failure is due to the credential.
    pub fn is_auth(&self) -> bool {
        matches!(self, TranscribeError::Unauthorized { .. })
    }
}

impl From<reqwest::Error> for TranscribeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TranscribeError::Timeout
        } else {
            TranscribeError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Transcriber trait
// ---------------------------------------------------------------------------

/// Async trait for speech-to-text services.
///
/// `transcribe` blocks (asynchronously) until the service reports the job
/// complete and returns the plain-text transcript.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(
        &self,
        audio: &Path,
        credential: &Credential,
        language: &str,
    ) -> Result<String, TranscribeError>;
}
