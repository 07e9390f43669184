//! # Core Type Definitions
//!
//! This module contains the snapshot shapes handed over by the rating engine:
//! - Identifiers (`UserId`, `GroupId`)
//! - Display points (`Sp`) and match progress (`MatchProgress`)
//! - Team and member skill differences
//! - Error types (`SkillDeltaError`)
//!
//! ## Field Presence
//!
//! Upstream omits fields that do not apply to a record's current state.
//! Every such field is an explicit `Option`; counters default to zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Identifier of a user (group member).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct UserId(pub u64);

/// Identifier of a group in the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub u64);

// =============================================================================
// SKILL POINTS
// =============================================================================

/// A rating expressed in display points.
///
/// Opaque display value: compared against zero and shown, never computed on.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Sp(pub f64);

impl Sp {
    /// Create a new SP value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether the upstream renderer would treat this value as present.
    ///
    /// Zero and NaN count as "no value yet".
    #[must_use]
    pub fn is_truthy(self) -> bool {
        self.0 != 0.0 && !self.0.is_nan()
    }

    /// Whether this is exactly zero (either sign).
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Strictly greater than zero.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    /// Absolute value.
    #[must_use]
    pub fn magnitude(self) -> Self {
        Self(self.0.abs())
    }
}

impl From<f64> for Sp {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Sp> for f64 {
    fn from(sp: Sp) -> Self {
        sp.0
    }
}

impl fmt::Display for Sp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// MATCH PROGRESS
// =============================================================================

/// Matches played toward a recalculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MatchProgress {
    pub matches_count: u32,
    pub matches_count_needed: u32,
}

impl MatchProgress {
    #[must_use]
    pub const fn new(matches_count: u32, matches_count_needed: u32) -> Self {
        Self {
            matches_count,
            matches_count_needed,
        }
    }

    /// Count has reached the threshold exactly.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.matches_count == self.matches_count_needed
    }
}

impl fmt::Display for MatchProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.matches_count, self.matches_count_needed)
    }
}

// =============================================================================
// SKILL DIFFERENCES
// =============================================================================

/// Team-level skill difference snapshot.
///
/// When `calculated` is set, `old_sp` and `new_sp` are expected. Otherwise
/// `new_sp` may already carry a provisional value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSkillDifference {
    pub calculated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_sp: Option<Sp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_sp: Option<Sp>,
    #[serde(default)]
    pub matches_count: u32,
    #[serde(default)]
    pub matches_count_needed: u32,
}

impl TeamSkillDifference {
    /// A finalized team delta.
    #[must_use]
    pub fn resolved(old_sp: Sp, new_sp: Sp) -> Self {
        Self {
            calculated: true,
            old_sp: Some(old_sp),
            new_sp: Some(new_sp),
            ..Self::default()
        }
    }

    /// A team delta still accumulating matches.
    #[must_use]
    pub fn in_progress(new_sp: Option<Sp>, matches_count: u32, matches_count_needed: u32) -> Self {
        Self {
            calculated: false,
            old_sp: None,
            new_sp,
            matches_count,
            matches_count_needed,
        }
    }

    #[must_use]
    pub const fn progress(&self) -> MatchProgress {
        MatchProgress::new(self.matches_count, self.matches_count_needed)
    }
}

/// Member-level skill difference snapshot.
///
/// When `calculated` is set, `sp_diff` carries the signed change.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSkillDifference {
    pub calculated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_sp: Option<Sp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sp_diff: Option<Sp>,
    #[serde(default)]
    pub matches_count: u32,
    #[serde(default)]
    pub matches_count_needed: u32,
}

impl MemberSkillDifference {
    /// A finalized member delta.
    #[must_use]
    pub fn resolved(sp_diff: Sp) -> Self {
        Self {
            calculated: true,
            sp_diff: Some(sp_diff),
            ..Self::default()
        }
    }

    /// A member delta still accumulating matches.
    #[must_use]
    pub fn in_progress(new_sp: Option<Sp>, matches_count: u32, matches_count_needed: u32) -> Self {
        Self {
            calculated: false,
            new_sp,
            sp_diff: None,
            matches_count,
            matches_count_needed,
        }
    }

    #[must_use]
    pub const fn progress(&self) -> MatchProgress {
        MatchProgress::new(self.matches_count, self.matches_count_needed)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised while loading snapshots or configuration.
///
/// Classification itself is total and never produces one of these.
#[derive(Debug, Error)]
pub enum SkillDeltaError {
    /// A snapshot could not be decoded.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Input was decoded but cannot be used.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A configuration file is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for SkillDeltaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialization(err.to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================
