// ─── Mod Manifest ───
// Reads `fabric.mod.json` out of a candidate archive and decides whether the
// candidate is the expected artifact at the expected version.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use super::inspector::read_entry;
use crate::core::artifact::ArtifactLayout;

/// Subset of a Fabric `fabric.mod.json`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ModManifest {
    pub id: String,
    pub version: String,
}

impl ModManifest {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// The archive belongs to another mod.
    ForeignMod { found_id: String },
    /// Right mod, wrong version.
    Outdated { installed: String, expected: String },
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::ForeignMod { found_id } => write!(f, "foreign mod '{}'", found_id),
            InvalidReason::Outdated {
                installed,
                expected,
            } => write!(f, "installed {}, expected {}", installed, expected),
        }
    }
}

/// Outcome of inspecting the single candidate in a managed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateStatus {
    Valid,
    Invalid(InvalidReason),
    /// The manifest could not be read or parsed.
    Unverifiable(String),
}

impl CandidateStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, CandidateStatus::Valid)
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateStatus::Valid => write!(f, "valid"),
            CandidateStatus::Invalid(reason) => write!(f, "invalid ({})", reason),
            CandidateStatus::Unverifiable(reason) => write!(f, "unverifiable ({})", reason),
        }
    }
}

/// Classify `candidate` against the expected mod id and fingerprint.
pub fn inspect_candidate(
    candidate: &Path,
    layout: &ArtifactLayout,
    expected_fingerprint: &str,
) -> CandidateStatus {
    let bytes = match read_entry(candidate, layout.manifest_entry()) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            return CandidateStatus::Unverifiable(format!(
                "{} not found in archive",
                layout.manifest_entry()
            ))
        }
        Err(e) => return CandidateStatus::Unverifiable(e.to_string()),
    };

    let manifest = match ModManifest::from_slice(&bytes) {
        Ok(manifest) => manifest,
        Err(e) => {
            return CandidateStatus::Unverifiable(format!(
                "malformed {}: {}",
                layout.manifest_entry(),
                e
            ))
        }
    };

    if manifest.id != layout.mod_id() {
        return CandidateStatus::Invalid(InvalidReason::ForeignMod {
            found_id: manifest.id,
        });
    }

    if manifest.version == expected_fingerprint {
        CandidateStatus::Valid
    } else {
        CandidateStatus::Invalid(InvalidReason::Outdated {
            installed: manifest.version,
            expected: expected_fingerprint.to_string(),
        })
    }
}
