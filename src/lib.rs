//! Read a PDF aloud and round-trip the speech through a transcription
//! service.
//!
//! The binary in `main.rs` wires these modules together; every stage sits
//! behind a trait so the orchestrator can be exercised with test doubles.

pub mod audio;
pub mod config;
pub mod pdf;
pub mod pipeline;
pub mod stt;
pub mod tts;
