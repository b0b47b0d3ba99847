//! Transcription service credential.
//!
//! The token is read once at startup (after `.env` has been loaded by
//! `dotenvy`) and handed to the orchestrator explicitly.  It is never
//! printed: the `Debug` impl redacts it.

use std::fmt;

/// Opaque bearer token for the transcription service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Read the credential from the environment variable `var`.
    ///
    /// Returns `None` when the variable is unset, not valid UTF-8, or empty.
    pub fn from_env(var: &str) -> Option<Self> {
        Self::from_value(std::env::var(var).ok())
    }

    /// Build a credential from an optional raw value.
    ///
    /// Surrounding whitespace is stripped; a blank value counts as missing.
    pub fn from_value(value: Option<String>) -> Option<Self> {
        let token = value?.trim().to_string();
        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    /// The raw token, for the `Authorization` header only.
    pub fn token(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
