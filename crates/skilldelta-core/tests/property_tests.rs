//! # Property-Based Tests
//!
//! Classification invariants for team and member deltas, checked with proptest.

use proptest::option;
use proptest::prelude::*;
use skilldelta_core::{
    Direction, MatchProgress, MemberDeltaState, MemberSkillDifference, Sp, TeamDeltaState,
    TeamSkillDifference, present_member_delta, present_team_delta,
};

// =============================================================================
// STRATEGIES
// =============================================================================

/// SP values with zero over-represented.
fn sp() -> impl Strategy<Value = Sp> {
    prop_oneof![
        1 => Just(Sp(0.0)),
        1 => (-400i32..400).prop_map(|v| Sp(v as f64)),
        2 => (-5000.0f64..5000.0).prop_map(Sp),
    ]
}

fn team_diff() -> impl Strategy<Value = TeamSkillDifference> {
    (any::<bool>(), option::of(sp()), option::of(sp()), 0u32..12, 0u32..12).prop_map(
        |(calculated, old_sp, new_sp, matches_count, matches_count_needed)| TeamSkillDifference {
            calculated,
            old_sp,
            new_sp,
            matches_count,
            matches_count_needed,
        },
    )
}

fn member_diff() -> impl Strategy<Value = MemberSkillDifference> {
    (any::<bool>(), option::of(sp()), option::of(sp()), 0u32..12, 0u32..12).prop_map(
        |(calculated, new_sp, sp_diff, matches_count, matches_count_needed)| {
            MemberSkillDifference {
                calculated,
                new_sp,
                sp_diff,
                matches_count,
                matches_count_needed,
            }
        },
    )
}

// =============================================================================
// TEAM PROPERTIES
// =============================================================================

proptest! {
    /// Calculated team deltas are resolved whatever the other fields hold.
    #[test]
    fn team_calculated_is_resolved(mut diff in team_diff()) {
        diff.calculated = true;
        prop_assert_eq!(
            present_team_delta(&diff),
            TeamDeltaState::Resolved { old_sp: diff.old_sp, new_sp: diff.new_sp }
        );
    }

    /// Uncalculated team deltas with a truthy value are provisional.
    #[test]
    fn team_truthy_value_is_provisional(mut diff in team_diff(), value in 1i32..3000) {
        diff.calculated = false;
        diff.new_sp = Some(Sp(value as f64));
        prop_assert_eq!(
            present_team_delta(&diff),
            TeamDeltaState::Provisional { new_sp: Sp(value as f64) }
        );
    }

    /// Uncalculated team deltas without a truthy value are pending.
    #[test]
    fn team_missing_value_is_pending(mut diff in team_diff(), zero in any::<bool>()) {
        diff.calculated = false;
        diff.new_sp = if zero { Some(Sp(0.0)) } else { None };
        prop_assert_eq!(
            present_team_delta(&diff),
            TeamDeltaState::Pending(MatchProgress::new(diff.matches_count, diff.matches_count_needed))
        );
    }

    /// Exactly one branch applies and it matches the branch order.
    #[test]
    fn team_branches_are_exhaustive(diff in team_diff()) {
        let state = present_team_delta(&diff);
        let truthy = diff.new_sp.is_some_and(Sp::is_truthy);
        match state {
            TeamDeltaState::Resolved { .. } => prop_assert!(diff.calculated),
            TeamDeltaState::Provisional { .. } => prop_assert!(!diff.calculated && truthy),
            TeamDeltaState::Pending(_) => prop_assert!(!diff.calculated && !truthy),
        }
    }

    /// Presenting twice yields the same state.
    #[test]
    fn team_is_idempotent(diff in team_diff()) {
        prop_assert_eq!(present_team_delta(&diff), present_team_delta(&diff));
    }
}

// =============================================================================
// MEMBER PROPERTIES
// =============================================================================

proptest! {
    /// A finalized zero delta renders nothing.
    #[test]
    fn member_zero_delta_is_hidden(mut diff in member_diff()) {
        diff.calculated = true;
        diff.sp_diff = Some(Sp(0.0));
        prop_assert_eq!(present_member_delta(&diff), None);
    }

    /// A finalized non-zero delta points the right way with its absolute size.
    #[test]
    fn member_nonzero_delta_direction(mut diff in member_diff(), value in -3000i32..3000) {
        prop_assume!(value != 0);
        diff.calculated = true;
        diff.sp_diff = Some(Sp(value as f64));

        let expected_direction = if value > 0 { Direction::Up } else { Direction::Down };
        prop_assert_eq!(
            present_member_delta(&diff),
            Some(MemberDeltaState::Resolved {
                direction: expected_direction,
                magnitude: Sp(value.unsigned_abs() as f64),
            })
        );
    }

    /// Reaching the threshold without the flag is provisional, not resolved.
    #[test]
    fn member_threshold_without_flag_is_provisional(mut diff in member_diff(), count in 0u32..12) {
        diff.calculated = false;
        diff.matches_count = count;
        diff.matches_count_needed = count;
        prop_assert_eq!(
            present_member_delta(&diff),
            Some(MemberDeltaState::Provisional { new_sp: diff.new_sp })
        );
    }

    /// Below or beyond the threshold without the flag is pending.
    #[test]
    fn member_off_threshold_is_pending(mut diff in member_diff()) {
        prop_assume!(diff.matches_count != diff.matches_count_needed);
        diff.calculated = false;
        prop_assert_eq!(
            present_member_delta(&diff),
            Some(MemberDeltaState::Pending(diff.progress()))
        );
    }

    /// Presenting twice yields the same state.
    #[test]
    fn member_is_idempotent(diff in member_diff()) {
        prop_assert_eq!(present_member_delta(&diff), present_member_delta(&diff));
    }
}
