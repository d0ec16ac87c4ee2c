//! Shared access-code gate checked before the monitor may run.
//!
//! The expected code is configured as plaintext or as a SHA-256 hex
//! digest; attempts are hashed and compared digest-to-digest so the
//! plaintext never participates in the comparison.

use sha2::{Digest, Sha256};
use tracing::warn;

use crate::config::{AccessConfig, DEFAULT_ACCESS_CODE};
use crate::error::{MonitorError, Result};

/// Outcome of an access attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Granted,
    Denied,
}

/// Verifies attempts against the digest of the shared code.
pub struct AccessGate {
    expected: [u8; 32],
}

impl AccessGate {
    /// Build the gate from configuration. The digest variant wins over
    /// plaintext; with neither set, the built-in default code applies.
    pub fn from_config(access: &AccessConfig) -> Result<Self> {
        if let Some(hex_digest) = &access.code_sha256 {
            let bytes = hex::decode(hex_digest.trim())
                .map_err(|e| MonitorError::Config(format!("access-code digest: {}", e)))?;
            let expected = <[u8; 32]>::try_from(bytes.as_slice()).map_err(|_| {
                MonitorError::Config("access-code digest must be 32 bytes".to_string())
            })?;
            return Ok(Self { expected });
        }

        let code = access.code.as_deref().unwrap_or(DEFAULT_ACCESS_CODE);
        Ok(Self {
            expected: digest(code),
        })
    }

    pub fn verify(&self, attempt: &str) -> GateDecision {
        if digest(attempt) == self.expected {
            GateDecision::Granted
        } else {
            warn!("access denied");
            GateDecision::Denied
        }
    }
}

fn digest(code: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plaintext_code_grants_and_denies() {
        let gate = AccessGate::from_config(&AccessConfig {
            code: Some("hunter2".to_string()),
            code_sha256: None,
        })
        .unwrap();
        assert_eq!(gate.verify("hunter2"), GateDecision::Granted);
        assert_eq!(gate.verify("hunter3"), GateDecision::Denied);
        assert_eq!(gate.verify(""), GateDecision::Denied);
    }

    #[test]
    fn test_default_code_applies_when_nothing_is_configured() {
        let gate = AccessGate::from_config(&AccessConfig::default()).unwrap();
        assert_eq!(gate.verify(DEFAULT_ACCESS_CODE), GateDecision::Granted);
    }

    #[test]
    fn test_digest_config_wins_over_plaintext() {
        // sha256("abc")
        let digest_hex = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
        let gate = AccessGate::from_config(&AccessConfig {
            code: Some("not-abc".to_string()),
            code_sha256: Some(digest_hex.to_string()),
        })
        .unwrap();
        assert_eq!(gate.verify("abc"), GateDecision::Granted);
        assert_eq!(gate.verify("not-abc"), GateDecision::Denied);
    }

    #[test]
    fn test_malformed_digest_is_a_config_error() {
        let bad_hex = AccessGate::from_config(&AccessConfig {
            code: None,
            code_sha256: Some("zz".to_string()),
        });
        assert!(matches!(bad_hex, Err(MonitorError::Config(_))));

        let wrong_len = AccessGate::from_config(&AccessConfig {
            code: None,
            code_sha256: Some("abcd".to_string()),
        });
        assert!(matches!(wrong_len, Err(MonitorError::Config(_))));
    }
}
