//! Wire types for the Speechmatics batch API (v2).
//!
//! [`JobConfig`] is serialised into the `config` part of the job submission.
//! The response types mirror only the fields the client reads.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Job configuration sent alongside the audio.
///
/// ```
/// use pdf_roundtrip::stt::JobConfig;
///
/// let json = serde_json::to_value(JobConfig::transcription("en", true)).unwrap();
/// assert_eq!(json["type"], "transcription");
/// assert_eq!(json["transcription_config"]["language"], "en");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub transcription_config: TranscriptionSettings,
}

/// The `transcription_config` object of a [`JobConfig`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptionSettings {
    /// ISO-639-1 language code of the audio.
    pub language: String,
    /// Format entities (numbers, dates, currencies) in the transcript.
    pub enable_entities: bool,
}

impl JobConfig {
    /// A plain transcription job.
    pub fn transcription(language: impl Into<String>, enable_entities: bool) -> Self {
        Self {
            kind: "transcription".into(),
            transcription_config: TranscriptionSettings {
                language: language.into(),
                enable_entities,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Body of a successful `POST /jobs/`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    pub id: String,
}

/// Body of `GET /jobs/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct JobEnvelope {
    pub job: JobDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobDetails {
    pub id: String,
    pub status: JobStatus,
}

/// Lifecycle state of a transcription job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Running,
    Done,
    Rejected,
    Deleted,
    Expired,
    /// A status this client does not know; treated as still in progress.
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    /// `true` for states the job can never leave without producing a
    /// transcript.
    pub fn is_failed(self) -> bool {
        matches!(
            self,
            JobStatus::Rejected | JobStatus::Deleted | JobStatus::Expired
        )
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            JobStatus::Running => "running",
            JobStatus::Done => "done",
            JobStatus::Rejected => "rejected",
            JobStatus::Deleted => "deleted",
            JobStatus::Expired => "expired",
            JobStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_config_wire_shape() {
        let json = serde_json::to_value(JobConfig::transcription("de", true)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "transcription",
                "transcription_config": {
                    "language": "de",
                    "enable_entities": true
                }
            })
        );
    }

    #[test]
    fn job_status_parses_known_and_unknown_values() {
        let env: JobEnvelope =
            serde_json::from_str(r#"{"job":{"id":"a1","status":"done","duration":3}}"#).unwrap();
        assert_eq!(env.job.id, "a1");
        assert_eq!(env.job.status, JobStatus::Done);

        let env: JobEnvelope =
            serde_json::from_str(r#"{"job":{"id":"a1","status":"queued"}}"#).unwrap();
        assert_eq!(env.job.status, JobStatus::Unknown);
    }

    #[test]
    fn failed_states() {
        assert!(JobStatus::Rejected.is_failed());
        assert!(JobStatus::Deleted.is_failed());
        assert!(JobStatus::Expired.is_failed());
        assert!(!JobStatus::Running.is_failed());
        assert!(!JobStatus::Done.is_failed());
        assert!(!JobStatus::Unknown.is_failed());
    }

    #[test]
    fn submit_response_ignores_extra_fields() {
        let r: SubmitResponse =
            serde_json::from_str(r#"{"id":"xyz","created_at":"now"}"#).unwrap();
        assert_eq!(r.id, "xyz");
    }
}
