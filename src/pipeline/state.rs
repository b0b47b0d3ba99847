//! Pipeline stages and the summary of a finished run.
//!
//! [`Stage`] names the four stages in execution order and carries the one
//! failure policy of the pipeline: a failing stage halts the run, except
//! playback, which is best-effort.
//!
//! [`RunReport`] is what a successful run hands back to `main`.

use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// Stages of the round-trip pipeline.
///
/// ```text
/// Extracting ──▶ Synthesizing ──▶ Playing ──▶ Transcribing
///     │               │              │             │
///   halt            halt         continue        halt
/// ```
///
/// The audio artifact is removed after `Transcribing` whether it succeeded
/// or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading text out of the PDF.
    Extracting,
    /// Turning the text into an MP3 artifact.
    Synthesizing,
    /// Playing the artifact on the local output device.
    Playing,
    /// Round-tripping the artifact through the transcription service.
    Transcribing,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Stage; 4] = [
        Stage::Extracting,
        Stage::Synthesizing,
        Stage::Playing,
        Stage::Transcribing,
    ];

    /// Whether a failure in this stage stops the remaining stages.
    ///
    /// ```
    /// use pdf_roundtrip::pipeline::Stage;
    ///
    /// assert!(Stage::Extracting.halts_on_failure());
    /// assert!(!Stage::Playing.halts_on_failure());
    /// ```
    pub fn halts_on_failure(self) -> bool {
        !matches!(self, Stage::Playing)
    }

    /// A short human-readable label for log lines.
    pub fn label(self) -> &'static str {
        match self {
            Stage::Extracting => "extracting text",
            Stage::Synthesizing => "synthesizing speech",
            Stage::Playing => "playing audio",
            Stage::Transcribing => "transcribing audio",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// RunReport
// ---------------------------------------------------------------------------

/// Outcome of a run that reached the end of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// The PDF that was read (with the `.pdf` suffix applied).
    pub input: PathBuf,
    /// Transcript returned by the transcription service.
    pub transcript: String,
    /// Playback failed; the transcript was still produced.
    pub playback_failed: bool,
    /// The audio artifact could not be deleted.
    pub cleanup_failed: bool,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_playback_is_best_effort() {
        let best_effort: Vec<Stage> = Stage::ALL
            .into_iter()
            .filter(|s| !s.halts_on_failure())
            .collect();
        assert_eq!(best_effort, vec![Stage::Playing]);
    }

    #[test]
    fn stages_are_listed_in_execution_order() {
        assert_eq!(Stage::ALL[0], Stage::Extracting);
        assert_eq!(Stage::ALL[3], Stage::Transcribing);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Stage::Synthesizing.to_string(), "synthesizing speech");
    }
}
