//! Pipeline orchestrator — drives the PDF → speech → playback → transcript run.
//!
//! [`PipelineOrchestrator`] owns one implementation of each stage trait and
//! runs them strictly one after another.
//!
//! # Pipeline flow
//!
//! ```text
//! credential?  ── no ──▶ MissingCredential (nothing else touched)
//!   └─▶ ask file name, append ".pdf", check it exists
//!         └─▶ spawn_blocking(extractor.extract)        [Extracting]   halt on error
//!               └─▶ synthesizer.synthesize (async)     [Synthesizing] halt on error
//!                     └─▶ spawn_blocking(player.play)  [Playing]      warn and continue
//!                           └─▶ transcriber.transcribe [Transcribing]
//!                                 └─▶ artifact.remove()  (always, once)
//! ```
//!
//! Blocking stages go through `tokio::task::spawn_blocking` and are awaited
//! immediately, so exactly one stage runs at a time.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::audio::{AudioArtifact, AudioPlayer, RodioPlayer, SilentPlayer};
use crate::config::{AppConfig, Credential};
use crate::pdf::{ExtractError, PdfTextExtractor, TextExtractor};
use crate::stt::{SpeechmaticsClient, TranscribeError, Transcriber};
use crate::tts::{GoogleTts, SpeechSynthesizer, SynthesisError};

use super::input::resolve_pdf_path;
use super::state::{RunReport, Stage};

// ---------------------------------------------------------------------------
// PipelineError
// ---------------------------------------------------------------------------

/// Everything that can halt a run.
///
/// Playback failures never appear here; they are recorded in
/// [`RunReport::playback_failed`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The transcription credential is not set.
    #[error("{var} is not set; add it to the environment or a .env file")]
    MissingCredential { var: String },

    /// The file name could not be read from the user.
    #[error("cannot read file name: {0}")]
    Prompt(#[source] std::io::Error),

    /// The requested PDF does not exist.
    #[error("file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("text extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("speech synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("transcription failed: {0}")]
    Transcription(#[from] TranscribeError),

    /// A blocking stage panicked or was cancelled.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PipelineError {
    /// The stage that failed, or `None` for precondition failures.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            PipelineError::Extract(_) => Some(Stage::Extracting),
            PipelineError::Synthesis(_) => Some(Stage::Synthesizing),
            PipelineError::Transcription(_) => Some(Stage::Transcribing),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// PipelineOrchestrator
// ---------------------------------------------------------------------------

/// Drives one round-trip run.
///
/// ```rust,no_run
/// use pdf_roundtrip::config::{AppConfig, Credential};
/// use pdf_roundtrip::pipeline::PipelineOrchestrator;
///
/// # async fn example() {
/// let config = AppConfig::default();
/// let credential = Credential::from_env(&config.transcription.credential_env);
/// let orchestrator = PipelineOrchestrator::from_config(&config);
///
/// let report = orchestrator
///     .run(credential.as_ref(), || Ok("notes".to_string()))
///     .await
///     .unwrap();
/// println!("{}", report.transcript);
/// # }
/// ```
pub struct PipelineOrchestrator {
    extractor: Arc<dyn TextExtractor>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    player: Arc<dyn AudioPlayer>,
    transcriber: Arc<dyn Transcriber>,
    language: String,
    credential_env: String,
}

impl PipelineOrchestrator {
    /// Create an orchestrator from explicit stage implementations.
    ///
    /// # Arguments
    ///
    /// * `extractor`   — PDF text extractor (e.g. `PdfTextExtractor`).
    /// * `synthesizer` — TTS engine (e.g. `GoogleTts`).
    /// * `player`      — audio player (e.g. `RodioPlayer`).
    /// * `transcriber` — STT service (e.g. `SpeechmaticsClient`).
    /// * `language`    — language code for synthesis and transcription.
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        player: Arc<dyn AudioPlayer>,
        transcriber: Arc<dyn Transcriber>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            extractor,
            synthesizer,
            player,
            transcriber,
            language: language.into(),
            credential_env: "SPEECHMATICS_AUTH_TOKEN".into(),
        }
    }

    /// Wire the production stages from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let player: Arc<dyn AudioPlayer> = if config.playback.enabled {
            Arc::new(RodioPlayer::from_config(&config.playback))
        } else {
            Arc::new(SilentPlayer)
        };

        Self::new(
            Arc::new(PdfTextExtractor::new()),
            Arc::new(GoogleTts::from_config(&config.tts)),
            player,
            Arc::new(SpeechmaticsClient::from_config(&config.transcription)),
            config.language.clone(),
        )
        .with_credential_env(config.transcription.credential_env.clone())
    }

    /// Name of the environment variable quoted in credential messages.
    pub fn with_credential_env(mut self, var: impl Into<String>) -> Self {
        self.credential_env = var.into();
        self
    }

    // -----------------------------------------------------------------------
    // Entry points
    // -----------------------------------------------------------------------

    /// Run the whole pipeline.
    ///
    /// `ask_file_name` is called only once the credential has been checked.
    pub async fn run<F>(
        &self,
        credential: Option<&Credential>,
        ask_file_name: F,
    ) -> Result<RunReport, PipelineError>
    where
        F: FnOnce() -> std::io::Result<String>,
    {
        let Some(credential) = credential else {
            let err = PipelineError::MissingCredential {
                var: self.credential_env.clone(),
            };
            self.log_failure(&err);
            return Err(err);
        };

        let file_name = match ask_file_name() {
            Ok(name) => name,
            Err(e) => {
                let err = PipelineError::Prompt(e);
                self.log_failure(&err);
                return Err(err);
            }
        };

        self.run_file(credential, &file_name).await
    }

    /// Run the pipeline on a file name the caller already has.
    pub async fn run_file(
        &self,
        credential: &Credential,
        file_name: &str,
    ) -> Result<RunReport, PipelineError> {
        let result = self.run_stages(credential, resolve_pdf_path(file_name)).await;
        if let Err(e) = &result {
            self.log_failure(e);
        }
        result
    }

    // -----------------------------------------------------------------------
    // Stages
    // -----------------------------------------------------------------------

    async fn run_stages(
        &self,
        credential: &Credential,
        input: PathBuf,
    ) -> Result<RunReport, PipelineError> {
        if !input.exists() {
            return Err(PipelineError::InputNotFound(input));
        }

        // ── 1. Extract (blocking → thread pool) ──────────────────────────
        log::info!("{}: {}", Stage::Extracting, input.display());
        let extractor = Arc::clone(&self.extractor);
        let path = input.clone();
        let text = tokio::task::spawn_blocking(move || extractor.extract(&path))
            .await
            .map_err(|e| PipelineError::Internal(e.to_string()))??;
        log::debug!("pipeline: extracted {} chars", text.len());

        // ── 2. Synthesize ────────────────────────────────────────────────
        log::info!("{} ({})", Stage::Synthesizing, self.language);
        let artifact = self.synthesizer.synthesize(&text, &self.language).await?;

        // ── 3 + 4. Play, transcribe ──────────────────────────────────────
        let playback_failed = !self.play(&artifact).await;
        let transcript = self.transcribe(&artifact, credential).await;

        // ── 5. Cleanup, whatever the transcription outcome ───────────────
        let cleanup_failed = remove_artifact(artifact);

        Ok(RunReport {
            input,
            transcript: transcript?,
            playback_failed,
            cleanup_failed,
        })
    }

    /// Best-effort playback; returns `true` on success.
    async fn play(&self, artifact: &AudioArtifact) -> bool {
        log::info!("{}", Stage::Playing);
        let player = Arc::clone(&self.player);
        let path = artifact.path().to_path_buf();

        match tokio::task::spawn_blocking(move || player.play(&path)).await {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                log::warn!("Error playing audio: {e}");
                false
            }
            Err(e) => {
                log::warn!("playback task failed: {e}");
                false
            }
        }
    }

    async fn transcribe(
        &self,
        artifact: &AudioArtifact,
        credential: &Credential,
    ) -> Result<String, PipelineError> {
        log::info!("Now transcribing the generated audio...");
        let transcript = self
            .transcriber
            .transcribe(artifact.path(), credential, &self.language)
            .await?;
        Ok(transcript)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn log_failure(&self, err: &PipelineError) {
        match err {
            PipelineError::Transcription(e) if e.is_auth() => {
                log::error!("{err}");
                log::error!(
                    "Invalid API key - check {} in your .env file!",
                    self.credential_env
                );
            }
            _ => match err.stage() {
                Some(stage) => log::error!("pipeline halted while {stage}: {err}"),
                None => log::error!("{err}"),
            },
        }
    }
}

/// Delete the artifact; returns `true` when deletion failed.
fn remove_artifact(artifact: AudioArtifact) -> bool {
    let path = artifact.path().to_path_buf();
    match artifact.remove() {
        Ok(()) => {
            log::debug!("pipeline: removed {}", path.display());
            false
        }
        Err(e) => {
            log::warn!("could not remove {}: {e}", path.display());
            true
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
