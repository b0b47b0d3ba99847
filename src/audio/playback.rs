//! Blocking audio playback via `rodio`.
//!
//! [`RodioPlayer`] opens the file, decodes it, opens the default output
//! device, starts playback and then blocks the calling thread, polling at a
//! fixed interval until the sink has drained.  The output stream is released
//! when `play` returns.
//!
//! The decoder is built before the output device is touched, so a missing or
//! undecodable file fails without any audio hardware present.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use thiserror::Error;

use crate::config::PlaybackConfig;

// ---------------------------------------------------------------------------
// PlaybackError
// ---------------------------------------------------------------------------

/// Errors that can occur while playing an audio file.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The audio file could not be opened.
    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not in a format rodio can decode.
    #[error("cannot decode audio: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),

    /// No usable output device.
    #[error("no audio output available: {0}")]
    Output(#[from] rodio::StreamError),

    /// The output device rejected the sink.
    #[error("cannot start playback: {0}")]
    Play(#[from] rodio::PlayError),
}

// ---------------------------------------------------------------------------
// AudioPlayer trait
// ---------------------------------------------------------------------------

/// Object-safe, thread-safe interface for synchronous playback.
///
/// `play` returns only once playback has finished.
pub trait AudioPlayer: Send + Sync {
    fn play(&self, path: &Path) -> Result<(), PlaybackError>;
}

// ---------------------------------------------------------------------------
// RodioPlayer
// ---------------------------------------------------------------------------

/// Plays through the system default output device.
#[derive(Debug, Clone)]
pub struct RodioPlayer {
    poll_interval: Duration,
}

impl RodioPlayer {
    pub fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }

    pub fn from_config(config: &PlaybackConfig) -> Self {
        Self::new(Duration::from_millis(config.poll_interval_ms))
    }
}

impl AudioPlayer for RodioPlayer {
    fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        let file = File::open(path).map_err(|source| PlaybackError::Open {
            path: path.display().to_string(),
            source,
        })?;
        let source = rodio::Decoder::new(BufReader::new(file))?;

        // `_stream` must outlive the sink; dropping it releases the device.
        let (_stream, handle) = rodio::OutputStream::try_default()?;
        let sink = rodio::Sink::try_new(&handle)?;
        sink.append(source);

        log::debug!("playback: started {}", path.display());
        while !sink.empty() {
            std::thread::sleep(self.poll_interval);
        }
        log::debug!("playback: finished");

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SilentPlayer
// ---------------------------------------------------------------------------

/// Player used when playback is disabled in `settings.toml`.
///
/// Checks that the file exists, logs, and returns immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPlayer;

impl AudioPlayer for SilentPlayer {
    fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        File::open(path).map_err(|source| PlaybackError::Open {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("playback disabled; skipping {}", path.display());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_open_error() {
        let dir = tempdir().unwrap();
        let player = RodioPlayer::new(Duration::from_millis(10));

        let err = player.play(&dir.path().join("gone.mp3")).unwrap_err();
        assert!(matches!(err, PlaybackError::Open { .. }));
    }

    #[test]
    fn undecodable_file_is_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("noise.mp3");
        std::fs::write(&path, b"definitely not audio").unwrap();

        let player = RodioPlayer::new(Duration::from_millis(10));
        let err = player.play(&path).unwrap_err();
        assert!(matches!(err, PlaybackError::Decode(_)), "got {err:?}");
    }

    #[test]
    fn from_config_uses_poll_interval() {
        let player = RodioPlayer::from_config(&PlaybackConfig {
            enabled: true,
            poll_interval_ms: 250,
        });
        assert_eq!(player.poll_interval, Duration::from_millis(250));
    }

    #[test]
    fn silent_player_accepts_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("speech.mp3");
        std::fs::write(&path, b"x").unwrap();

        assert!(SilentPlayer.play(&path).is_ok());
    }

    #[test]
    fn silent_player_rejects_missing_file() {
        let dir = tempdir().unwrap();
        assert!(SilentPlayer.play(&dir.path().join("gone.mp3")).is_err());
    }

    #[test]
    fn players_are_object_safe() {
        let players: Vec<Box<dyn AudioPlayer>> = vec![
            Box::new(RodioPlayer::new(Duration::from_millis(100))),
            Box::new(SilentPlayer),
        ];
        assert_eq!(players.len(), 2);
    }
}
