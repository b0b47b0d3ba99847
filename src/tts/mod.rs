//! Text-to-speech module.
//!
//! This module provides:
//! * [`SpeechSynthesizer`] — async trait implemented by all TTS backends.
//! * [`GoogleTts`] — Google Translate `translate_tts` client.
//! * [`split_text`] — cuts text into request-sized chunks.
//! * [`SynthesisError`] — error variants for synthesis.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use pdf_roundtrip::config::TtsConfig;
//! use pdf_roundtrip::tts::{GoogleTts, SpeechSynthesizer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let tts = GoogleTts::from_config(&TtsConfig::default());
//!     let artifact = tts.synthesize("Hello world.", "en").await.unwrap();
//!     println!("{}", artifact.path().display());
//!     artifact.remove().unwrap();
//! }
//! ```

pub mod chunk;
pub mod synthesizer;

pub use chunk::split_text;
pub use synthesizer::{GoogleTts, SpeechSynthesizer, SynthesisError};
