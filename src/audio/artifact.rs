//! The transient audio file handed between synthesis, playback and
//! transcription.
//!
//! [`AudioArtifact`] wraps a `tempfile::TempPath`.  It is created by the
//! synthesizer, owned by the orchestrator, and deleted exactly once by
//! [`AudioArtifact::remove`] (which consumes it).  If it is dropped without
//! `remove` (early return, panic) the file is still deleted.

use std::io::Write;
use std::path::Path;

use tempfile::TempPath;

/// File suffix of every artifact.
pub const ARTIFACT_SUFFIX: &str = ".mp3";

/// A synthesized speech file on local disk.
#[derive(Debug)]
pub struct AudioArtifact {
    path: TempPath,
}

impl AudioArtifact {
    /// Write `bytes` to a new `.mp3` file in the system temp directory.
    pub fn create(bytes: &[u8]) -> std::io::Result<Self> {
        Self::create_in(std::env::temp_dir(), bytes)
    }

    /// Write `bytes` to a new `.mp3` file inside `dir`.
    pub fn create_in(dir: impl AsRef<Path>, bytes: &[u8]) -> std::io::Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("pdf-roundtrip-")
            .suffix(ARTIFACT_SUFFIX)
            .tempfile_in(dir)?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(Self {
            path: file.into_temp_path(),
        })
    }

    /// Location of the file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size of the file in bytes.
    pub fn size_bytes(&self) -> std::io::Result<u64> {
        Ok(std::fs::metadata(&self.path)?.len())
    }

    /// Delete the file.
    pub fn remove(self) -> std::io::Result<()> {
        self.path.close()
    }
}
