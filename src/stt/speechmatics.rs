//! Speechmatics batch API client.
//!
//! One transcription is three kinds of request:
//!
//! ```text
//! POST {base}/jobs/                       multipart: config + data_file  → { id }
//! GET  {base}/jobs/{id}                   (repeated)                     → { job: { status } }
//! GET  {base}/jobs/{id}/transcript?format=txt                            → plain text
//! ```
//!
//! Every request carries `Authorization: Bearer <credential>`.  HTTP 401 and
//! 403 surface as [`TranscribeError::Unauthorized`] so the caller can point
//! the user at their token.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{Credential, TranscriptionConfig};
use crate::stt::job::{JobConfig, JobEnvelope, JobStatus, SubmitResponse};
use crate::stt::transcriber::{TranscribeError, Transcriber};

/// Speechmatics batch client.
///
/// Holds no credential; the token is passed per call.
pub struct SpeechmaticsClient {
    client: reqwest::Client,
    base_url: String,
    enable_entities: bool,
    poll_interval: Duration,
}

impl SpeechmaticsClient {
    /// Build a client from application config.
    pub fn from_config(config: &TranscriptionConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            enable_entities: config.enable_entities,
            poll_interval: Duration::from_secs(config.poll_interval_secs),
        }
    }

    /// Override the delay between job status checks.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Upload `audio` and return the new job id.
    pub async fn submit_job(
        &self,
        audio: &Path,
        credential: &Credential,
        job: &JobConfig,
    ) -> Result<String, TranscribeError> {
        let bytes = tokio::fs::read(audio)
            .await
            .map_err(|source| TranscribeError::Io {
                path: audio.display().to_string(),
                source,
            })?;
        let file_name = audio
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.mp3")
            .to_string();

        let config_json =
            serde_json::to_string(job).map_err(|e| TranscribeError::Parse(e.to_string()))?;

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("audio/mpeg")?;
        let form = reqwest::multipart::Form::new()
            .text("config", config_json)
            .part("data_file", part);

        let response = self
            .client
            .post(format!("{}/jobs/", self.base_url))
            .bearer_auth(credential.token())
            .multipart(form)
            .send()
            .await?;
        let response = check_status(response).await?;

        let submitted: SubmitResponse = response
            .json()
            .await
            .map_err(|e| TranscribeError::Parse(e.to_string()))?;
        Ok(submitted.id)
    }

    /// Current status of job `id`.
    pub async fn job_status(
        &self,
        id: &str,
        credential: &Credential,
    ) -> Result<JobStatus, TranscribeError> {
        let response = self
            .client
            .get(format!("{}/jobs/{id}", self.base_url))
            .bearer_auth(credential.token())
            .send()
            .await?;
        let response = check_status(response).await?;

        let envelope: JobEnvelope = response
            .json()
            .await
            .map_err(|e| TranscribeError::Parse(e.to_string()))?;
        Ok(envelope.job.status)
    }

    /// Plain-text transcript of a finished job.
    pub async fn fetch_transcript(
        &self,
        id: &str,
        credential: &Credential,
    ) -> Result<String, TranscribeError> {
        let response = self
            .client
            .get(format!("{}/jobs/{id}/transcript", self.base_url))
            .query(&[("format", "txt")])
            .bearer_auth(credential.token())
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.text().await?)
    }

    /// Poll job `id` until it is done, then fetch its transcript.
    ///
    /// There is no deadline: a job that never finishes is waited on forever.
    pub async fn wait_for_completion(
        &self,
        id: &str,
        credential: &Credential,
    ) -> Result<String, TranscribeError> {
        loop {
            let status = self.job_status(id, credential).await?;
            log::debug!("speechmatics: job {id} is {status}");

            if status == JobStatus::Done {
                return self.fetch_transcript(id, credential).await;
            }
            if status.is_failed() {
                return Err(TranscribeError::JobFailed {
                    id: id.to_string(),
                    status,
                });
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

#[async_trait]
impl Transcriber for SpeechmaticsClient {
    async fn transcribe(
        &self,
        audio: &Path,
        credential: &Credential,
        language: &str,
    ) -> Result<String, TranscribeError> {
        let job = JobConfig::transcription(language, self.enable_entities);
        let id = self.submit_job(audio, credential, &job).await?;
        log::info!("Job {id} submitted successfully, waiting for transcript");
        self.wait_for_completion(&id, credential).await
    }
}

/// Map auth failures and other non-success statuses to errors.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, TranscribeError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(TranscribeError::Unauthorized {
            status: status.as_u16(),
        });
    }
    let body = response.text().await.unwrap_or_default();
    Err(TranscribeError::Api {
        status: status.as_u16(),
        body,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
