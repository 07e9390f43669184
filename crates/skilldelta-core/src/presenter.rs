//! # Skill Delta Presenter
//!
//! Classifies a skill difference snapshot into exactly one presentation state.
//!
//! ## Branch Order
//!
//! | Level  | 1st check            | 2nd check               | Fallback |
//! |--------|----------------------|-------------------------|----------|
//! | Team   | `calculated`         | `new_sp` truthy         | Pending  |
//! | Member | `calculated`         | `matches_count == needed` | Pending |
//!
//! A calculated member delta of exactly zero renders nothing.
//!
//! The member-level count check is not equivalent to `calculated`: a record
//! can reach its threshold while the flag is still unset, and it is then
//! shown as provisional rather than resolved.

use crate::types::{MatchProgress, MemberSkillDifference, Sp, TeamSkillDifference};
use serde::{Deserialize, Serialize};

// =============================================================================
// TEAM LEVEL
// =============================================================================

/// Presentation state of a team delta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TeamDeltaState {
    /// Finalized: old rating and new rating.
    Resolved {
        old_sp: Option<Sp>,
        new_sp: Option<Sp>,
    },
    /// A value is known but not yet marked final.
    Provisional { new_sp: Sp },
    /// Still accumulating matches.
    Pending(MatchProgress),
}

/// Classify a team-level snapshot.
#[must_use]
pub fn present_team_delta(diff: &TeamSkillDifference) -> TeamDeltaState {
    if diff.calculated {
        return TeamDeltaState::Resolved {
            old_sp: diff.old_sp,
            new_sp: diff.new_sp,
        };
    }

    match diff.new_sp {
        Some(new_sp) if new_sp.is_truthy() => TeamDeltaState::Provisional { new_sp },
        _ => TeamDeltaState::Pending(diff.progress()),
    }
}

// =============================================================================
// MEMBER LEVEL
// =============================================================================

/// Sign of a finalized member delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// `Up` iff strictly positive.
    #[must_use]
    pub fn of(sp_diff: Sp) -> Self {
        if sp_diff.is_positive() {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

/// Presentation state of a member delta.
///
/// "Render nothing" is expressed as `None` by [`present_member_delta`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MemberDeltaState {
    /// Finalized non-zero change.
    Resolved { direction: Direction, magnitude: Sp },
    /// Threshold reached without the calculated flag.
    Provisional { new_sp: Option<Sp> },
    /// Still accumulating matches.
    Pending(MatchProgress),
}

/// Classify a member-level snapshot.
///
/// Returns `None` when there is nothing worth displaying: a finalized delta
/// of zero, or a finalized record without a delta.
#[must_use]
pub fn present_member_delta(diff: &MemberSkillDifference) -> Option<MemberDeltaState> {
    if diff.calculated {
        let sp_diff = diff.sp_diff.filter(|d| !d.is_zero())?;
        return Some(MemberDeltaState::Resolved {
            direction: Direction::of(sp_diff),
            magnitude: sp_diff.magnitude(),
        });
    }

    let progress = diff.progress();
    if progress.is_complete() {
        Some(MemberDeltaState::Provisional { new_sp: diff.new_sp })
    } else {
        Some(MemberDeltaState::Pending(progress))
    }
}

// =============================================================================
// TESTS
// =============================================================================
