//! Shot length compliance checking.
//!
//! A read-only scan of the final shot list against the target length band.
//! The band is advisory: violations are reported, never corrected, and the
//! check cannot fail the pipeline.

use serde::{Deserialize, Serialize};

use crate::shot::Shot;

/// Minimum compliant shot length in characters.
pub const MIN_SHOT_CHARS: usize = 20;

/// Maximum compliant shot length in characters.
pub const MAX_SHOT_CHARS: usize = 35;

/// Diagnostic summary produced by the quality gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Total number of shots scanned
    pub total: usize,

    /// Shots whose length falls outside the target band
    pub non_compliant: usize,
}

impl ComplianceReport {
    /// Whether every shot fell inside the target band.
    pub fn all_compliant(&self) -> bool {
        self.non_compliant == 0
    }
}

impl std::fmt::Display for ComplianceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} shots, {} outside the {}-{} character band",
            self.total, self.non_compliant, MIN_SHOT_CHARS, MAX_SHOT_CHARS
        )
    }
}

/// Scan a shot list and count shots outside `[MIN_SHOT_CHARS, MAX_SHOT_CHARS]`.
pub fn check_compliance(shots: &[Shot]) -> ComplianceReport {
    let non_compliant = shots
        .iter()
        .filter(|shot| {
            let len = shot.char_len();
            len < MIN_SHOT_CHARS || len > MAX_SHOT_CHARS
        })
        .count();

    ComplianceReport {
        total: shots.len(),
        non_compliant,
    }
}
