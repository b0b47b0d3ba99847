//! Core `SpeechSynthesizer` trait and the Google Translate implementation.
//!
//! [`GoogleTts`] speaks to the same `translate_tts` endpoint gTTS uses.  The
//! text is split into ≤100-character chunks (see [`split_text`]), each chunk
//! is fetched as MP3, and the frames are concatenated into one
//! [`AudioArtifact`].  MP3 frames are self-delimiting, so plain concatenation
//! yields a playable file.

use async_trait::async_trait;
use thiserror::Error;

use crate::audio::AudioArtifact;
use crate::config::TtsConfig;
use crate::tts::chunk::split_text;

// ---------------------------------------------------------------------------
// SynthesisError
// ---------------------------------------------------------------------------

/// Errors that can occur during speech synthesis.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// Nothing speakable in the input (empty or punctuation only).
    #[error("no speakable text to synthesize")]
    EmptyText,

    /// HTTP transport or connection error.
    #[error("TTS request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("TTS request timed out")]
    Timeout,

    /// The endpoint answered with a non-success status.
    #[error("TTS endpoint returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The endpoint answered successfully but sent no audio.
    #[error("TTS endpoint returned no audio for chunk {index}")]
    EmptyAudio { index: usize },

    /// The audio file could not be written.
    #[error("cannot write audio file: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for SynthesisError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SynthesisError::Timeout
        } else {
            SynthesisError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// SpeechSynthesizer trait
// ---------------------------------------------------------------------------

/// Async trait for text-to-speech engines.
///
/// # Arguments
/// * `text`     – Text to speak.
/// * `language` – ISO-639-1 language code (e.g. `"en"`).
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, language: &str)
        -> Result<AudioArtifact, SynthesisError>;
}

// ---------------------------------------------------------------------------
// GoogleTts
// ---------------------------------------------------------------------------

/// Google Translate text-to-speech client.
pub struct GoogleTts {
    client: reqwest::Client,
    config: TtsConfig,
}

impl GoogleTts {
    /// Build a `GoogleTts` from application config.
    ///
    /// The HTTP client gets a per-request timeout only when
    /// `config.timeout_secs` is set.
    pub fn from_config(config: &TtsConfig) -> Self {
        let mut builder = reqwest::Client::builder().user_agent(
            "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/47.0.2526.106 Safari/537.36",
        );
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }

    async fn fetch_chunk(
        &self,
        chunk: &str,
        language: &str,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, SynthesisError> {
        let speed = if self.config.slow { "0.3" } else { "1" };
        let total = total.to_string();
        let idx = index.to_string();
        let textlen = chunk.chars().count().to_string();

        let response = self
            .client
            .get(self.config.endpoint())
            .query(&[
                ("ie", "UTF-8"),
                ("q", chunk),
                ("tl", language),
                ("client", "tw-ob"),
                ("ttsspeed", speed),
                ("total", total.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SynthesisError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(SynthesisError::EmptyAudio { index });
        }
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTts {
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
    ) -> Result<AudioArtifact, SynthesisError> {
        let chunks = split_text(text, self.config.max_chunk_chars);
        if chunks.is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        log::debug!(
            "tts: {} chunk(s), {} chars, language={language}",
            chunks.len(),
            text.len()
        );

        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let bytes = self
                .fetch_chunk(chunk, language, index, chunks.len())
                .await?;
            audio.extend_from_slice(&bytes);
        }

        let artifact = AudioArtifact::create(&audio)?;
        log::debug!(
            "tts: wrote {} bytes to {}",
            audio.len(),
            artifact.path().display()
        );
        Ok(artifact)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn config_for(server: &mockito::ServerGuard) -> TtsConfig {
        TtsConfig {
            base_url: server.url(),
            tld: String::new(),
            ..TtsConfig::default()
        }
    }

    #[tokio::test]
    async fn short_phrase_produces_non_empty_mp3() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/translate_tts")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "Hello world.".into()),
                Matcher::UrlEncoded("tl".into(), "en".into()),
                Matcher::UrlEncoded("client".into(), "tw-ob".into()),
                Matcher::UrlEncoded("total".into(), "1".into()),
                Matcher::UrlEncoded("idx".into(), "0".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "audio/mpeg")
            .with_body("ID3-frames")
            .expect(1)
            .create_async()
            .await;

        let tts = GoogleTts::from_config(&config_for(&server));
        let artifact = tts.synthesize("Hello world.", "en").await.unwrap();

        mock.assert_async().await;
        assert!(artifact.path().exists());
        assert!(artifact.path().to_string_lossy().ends_with(".mp3"));
        assert!(artifact.size_bytes().unwrap() > 0);
        artifact.remove().unwrap();
    }

    #[tokio::test]
    async fn chunks_are_concatenated_in_order() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("GET", "/translate_tts")
            .match_query(Matcher::UrlEncoded("idx".into(), "0".into()))
            .with_body("AAA")
            .create_async()
            .await;
        let second = server
            .mock("GET", "/translate_tts")
            .match_query(Matcher::UrlEncoded("idx".into(), "1".into()))
            .with_body("BBB")
            .create_async()
            .await;

        let mut config = config_for(&server);
        config.max_chunk_chars = 12;
        let tts = GoogleTts::from_config(&config);

        let artifact = tts
            .synthesize("Hello world. How are you?", "en")
            .await
            .unwrap();

        first.assert_async().await;
        second.assert_async().await;
        assert_eq!(std::fs::read(artifact.path()).unwrap(), b"AAABBB");
        artifact.remove().unwrap();
    }

    #[tokio::test]
    async fn slow_speech_sets_tts_speed() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/translate_tts")
            .match_query(Matcher::UrlEncoded("ttsspeed".into(), "0.3".into()))
            .with_body("x")
            .create_async()
            .await;

        let mut config = config_for(&server);
        config.slow = true;
        let artifact = GoogleTts::from_config(&config)
            .synthesize("Slowly now.", "en")
            .await
            .unwrap();

        mock.assert_async().await;
        artifact.remove().unwrap();
    }

    #[tokio::test]
    async fn empty_text_makes_no_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/translate_tts")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let tts = GoogleTts::from_config(&config_for(&server));
        let err = tts.synthesize("  ...  ", "en").await.unwrap_err();

        assert!(matches!(err, SynthesisError::EmptyText));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn error_status_is_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/translate_tts")
            .match_query(Matcher::Any)
            .with_status(429)
            .with_body("slow down")
            .create_async()
            .await;

        let tts = GoogleTts::from_config(&config_for(&server));
        let err = tts.synthesize("Hello.", "en").await.unwrap_err();

        match err {
            SynthesisError::Api { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "slow down");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_body_is_rejected() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/translate_tts")
            .match_query(Matcher::Any)
            .with_status(200)
            .create_async()
            .await;

        let tts = GoogleTts::from_config(&config_for(&server));
        let err = tts.synthesize("Hello.", "en").await.unwrap_err();
        assert!(matches!(err, SynthesisError::EmptyAudio { index: 0 }));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_request_error() {
        let config = TtsConfig {
            base_url: "http://127.0.0.1:9".into(),
            tld: String::new(),
            ..TtsConfig::default()
        };
        let err = GoogleTts::from_config(&config)
            .synthesize("Hello.", "en")
            .await
            .unwrap_err();
        assert!(matches!(err, SynthesisError::Request(_)), "got {err:?}");
    }

    #[test]
    fn synthesizer_is_object_safe() {
        let tts: Box<dyn SpeechSynthesizer> =
            Box::new(GoogleTts::from_config(&TtsConfig::default()));
        drop(tts);
    }
}
