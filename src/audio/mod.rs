//! Audio side of the pipeline: the transient artifact file and playback.
//!
//! # Flow
//!
//! ```text
//! SpeechSynthesizer → AudioArtifact (.mp3 temp file)
//!                          │
//!                          ├─▶ AudioPlayer::play   (blocking, best-effort)
//!                          ├─▶ Transcriber::transcribe
//!                          └─▶ AudioArtifact::remove
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use pdf_roundtrip::audio::{AudioArtifact, AudioPlayer, RodioPlayer};
//!
//! let artifact = AudioArtifact::create(&std::fs::read("speech.mp3").unwrap()).unwrap();
//! RodioPlayer::new(Duration::from_millis(100)).play(artifact.path()).unwrap();
//! artifact.remove().unwrap();
//! ```

pub mod artifact;
pub mod playback;

pub use artifact::{AudioArtifact, ARTIFACT_SUFFIX};
pub use playback::{AudioPlayer, PlaybackError, RodioPlayer, SilentPlayer};
