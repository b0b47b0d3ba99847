//! STT (speech-to-text) module: remote batch transcription.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 Transcriber (trait)                  │
//! │                                                      │
//! │   ┌─────────────┐    ┌────────────────────┐          │
//! │   │  JobConfig  │───▶│ SpeechmaticsClient │          │
//! │   │ - language  │    │ - submit_job       │          │
//! │   │ - entities  │    │ - wait_for_compl.  │          │
//! │   └─────────────┘    └─────────┬──────────┘          │
//! │                                ▼                     │
//! │                      ┌──────────────────┐            │
//! │                      │ fetch_transcript │            │
//! │                      │ (format=txt)     │            │
//! │                      └──────────────────┘            │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use pdf_roundtrip::config::{Credential, TranscriptionConfig};
//! use pdf_roundtrip::stt::{SpeechmaticsClient, Transcriber};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = SpeechmaticsClient::from_config(&TranscriptionConfig::default());
//!     let token = Credential::from_env("SPEECHMATICS_AUTH_TOKEN").unwrap();
//!     let text = client
//!         .transcribe("speech.mp3".as_ref(), &token, "en")
//!         .await
//!         .unwrap();
//!     println!("{text}");
//! }
//! ```

pub mod job;
pub mod speechmatics;
pub mod transcriber;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use job::{JobConfig, JobStatus, TranscriptionSettings};
pub use speechmatics::SpeechmaticsClient;
pub use transcriber::{TranscribeError, Transcriber};
