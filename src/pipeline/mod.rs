//! Pipeline orchestrator module for the PDF speech round-trip.
//!
//! This module wires the extractor → synthesizer → player → transcriber
//! chain and owns the failure policy between the stages.
//!
//! # Architecture
//!
//! ```text
//! main()
//!   │  Credential::from_env, AppConfig::load
//!   ▼
//! PipelineOrchestrator::run()   ← current-thread tokio runtime
//!   │
//!   ├─ prompt_file_name + resolve_pdf_path
//!   ├─ spawn_blocking(TextExtractor::extract)     → Extracting
//!   ├─ SpeechSynthesizer::synthesize              → Synthesizing
//!   ├─ spawn_blocking(AudioPlayer::play)          → Playing (best-effort)
//!   ├─ Transcriber::transcribe                    → Transcribing
//!   └─ AudioArtifact::remove
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use pdf_roundtrip::config::{AppConfig, Credential};
//! use pdf_roundtrip::pipeline::PipelineOrchestrator;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let credential = Credential::from_env(&config.transcription.credential_env);
//!
//!     let report = PipelineOrchestrator::from_config(&config)
//!         .run(credential.as_ref(), || Ok("notes".into()))
//!         .await;
//!
//!     if let Ok(report) = report {
//!         println!("{}", report.transcript);
//!     }
//! }
//! ```

pub mod input;
pub mod runner;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use input::{prompt_file_name, resolve_pdf_path, PROMPT};
pub use runner::{PipelineError, PipelineOrchestrator};
pub use state::{RunReport, Stage};
