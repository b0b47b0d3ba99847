//! Configuration module for the PDF speech round-trip.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for each pipeline
//! stage, `AppPaths` for the platform config directory, TOML persistence via
//! `AppConfig::load` / `AppConfig::save`, and the [`Credential`] read from the
//! environment.

pub mod credential;
pub mod paths;
pub mod settings;

pub use credential::Credential;
pub use paths::AppPaths;
pub use settings::{AppConfig, PlaybackConfig, TranscriptionConfig, TtsConfig};
