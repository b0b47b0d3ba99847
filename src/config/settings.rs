//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files.  Every section is
//! `#[serde(default)]`, so a `settings.toml` only needs the keys it changes.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// TtsConfig
// ---------------------------------------------------------------------------

/// Settings for the Google Translate text-to-speech endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TtsConfig {
    /// Scheme and host prefix of the endpoint, without the top-level domain.
    ///
    /// The request URL is `{base_url}.{tld}/translate_tts`.
    pub base_url: String,
    /// Top-level domain of the Google host (`"com"`, `"co.uk"`, `"com.au"` …).
    /// Changes the regional accent for some languages.
    pub tld: String,
    /// Request the slower speech rate.
    pub slow: bool,
    /// Longest chunk of text sent in a single request.  Google rejects
    /// requests above 100 characters.
    pub max_chunk_chars: usize,
    /// Per-request timeout in seconds.  `None` means no timeout.
    pub timeout_secs: Option<u64>,
}

impl TtsConfig {
    /// Full endpoint URL for a synthesis request.
    pub fn endpoint(&self) -> String {
        if self.tld.is_empty() {
            format!("{}/translate_tts", self.base_url.trim_end_matches('/'))
        } else {
            format!("{}.{}/translate_tts", self.base_url, self.tld)
        }
    }
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://translate.google".into(),
            tld: "com".into(),
            slow: false,
            max_chunk_chars: 100,
            timeout_secs: None,
        }
    }
}

// ---------------------------------------------------------------------------
// PlaybackConfig
// ---------------------------------------------------------------------------

/// Settings for local playback of the synthesized audio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Play the audio before transcribing.  Disable on headless machines.
    pub enabled: bool,
    /// How often the player checks whether playback has finished.
    pub poll_interval_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            poll_interval_ms: 100,
        }
    }
}

// ---------------------------------------------------------------------------
// TranscriptionConfig
// ---------------------------------------------------------------------------

/// Settings for the Speechmatics batch transcription API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptionConfig {
    /// Base URL of the batch API (v2).
    pub base_url: String,
    /// Environment variable holding the bearer token.
    pub credential_env: String,
    /// Ask the service to format entities (numbers, dates, currencies).
    pub enable_entities: bool,
    /// Seconds between job status checks.
    pub poll_interval_secs: u64,
    /// Per-request timeout in seconds.  `None` means no timeout.
    pub timeout_secs: Option<u64>,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://asr.api.speechmatics.com/v2".into(),
            credential_env: "SPEECHMATICS_AUTH_TOKEN".into(),
            enable_entities: true,
            poll_interval_secs: 5,
            timeout_secs: None,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use pdf_roundtrip::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
/// assert!(!config.language.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// ISO-639-1 language code used for both synthesis and transcription.
    pub language: String,
    /// Text-to-speech settings.
    pub tts: TtsConfig,
    /// Playback settings.
    pub playback: PlaybackConfig,
    /// Transcription service settings.
    pub transcription: TranscriptionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: "en".into(),
            tts: TtsConfig::default(),
            playback: PlaybackConfig::default(),
            transcription: TranscriptionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
