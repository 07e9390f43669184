//! # Scenario Tests
//!
//! Concrete snapshots as they arrive from the rating engine, decoded from
//! upstream JSON and pushed through presenter and labels.
//!
//! ## Groups
//! - Team deltas
//! - Member deltas
//! - Group card end to end

use skilldelta_core::{
    Direction, LabelStyle, MatchProgress, MemberDeltaState, MemberSkillDifference, Sp,
    TeamDeltaState, TeamSkillDifference, member_label, present_member_delta, present_team_delta,
    team_label,
};

fn team(json: &str) -> TeamSkillDifference {
    serde_json::from_str(json).expect("team snapshot")
}

fn member(json: &str) -> MemberSkillDifference {
    serde_json::from_str(json).expect("member snapshot")
}

// =============================================================================
// TEAM DELTAS
// =============================================================================

mod team_deltas {
    use super::*;

    #[test]
    fn resolved() {
        let state = present_team_delta(&team(r#"{"calculated":true,"oldSp":1200,"newSp":1250}"#));

        assert_eq!(
            state,
            TeamDeltaState::Resolved {
                old_sp: Some(Sp(1200.0)),
                new_sp: Some(Sp(1250.0)),
            }
        );
        assert_eq!(
            team_label(&state, &LabelStyle::default()).text,
            "Team SP 1200 ➜ 1250"
        );
    }

    #[test]
    fn provisional() {
        let state = present_team_delta(&team(
            r#"{"calculated":false,"newSp":1300,"matchesCount":3,"matchesCountNeeded":5}"#,
        ));

        assert_eq!(
            state,
            TeamDeltaState::Provisional {
                new_sp: Sp(1300.0)
            }
        );
    }

    #[test]
    fn pending() {
        let state = present_team_delta(&team(
            r#"{"calculated":false,"matchesCount":2,"matchesCountNeeded":5}"#,
        ));

        assert_eq!(state, TeamDeltaState::Pending(MatchProgress::new(2, 5)));
        assert_eq!(
            team_label(&state, &LabelStyle::default()).text,
            "Team SP calculating... (2/5)"
        );
    }

    #[test]
    fn resolved_with_missing_old_value_still_renders() {
        let state = present_team_delta(&team(r#"{"calculated":true,"newSp":1250}"#));
        assert_eq!(
            team_label(&state, &LabelStyle::default()).text,
            "Team SP  ➜ 1250"
        );
    }
}

// =============================================================================
// MEMBER DELTAS
// =============================================================================

mod member_deltas {
    use super::*;

    #[test]
    fn zero_renders_nothing() {
        assert_eq!(
            present_member_delta(&member(r#"{"calculated":true,"spDiff":0}"#)),
            None
        );
    }

    #[test]
    fn negative_delta_points_down() {
        let state = present_member_delta(&member(r#"{"calculated":true,"spDiff":-8}"#))
            .expect("visible");

        assert_eq!(
            state,
            MemberDeltaState::Resolved {
                direction: Direction::Down,
                magnitude: Sp(8.0),
            }
        );
        assert_eq!(member_label(&state, &LabelStyle::default()).text, "▼8SP");
    }

    #[test]
    fn fractional_delta_keeps_its_precision() {
        let state = present_member_delta(&member(r#"{"calculated":true,"spDiff":12.25}"#))
            .expect("visible");
        assert_eq!(member_label(&state, &LabelStyle::default()).text, "▲12.25SP");
    }

    #[test]
    fn threshold_reached_without_flag() {
        let state = present_member_delta(&member(
            r#"{"calculated":false,"matchesCount":5,"matchesCountNeeded":5,"newSp":1420}"#,
        ))
        .expect("visible");

        assert_eq!(
            state,
            MemberDeltaState::Provisional {
                new_sp: Some(Sp(1420.0))
            }
        );
        assert_eq!(
            member_label(&state, &LabelStyle::default()).text,
            "Calculated: 1420SP"
        );
    }

    #[test]
    fn still_calculating() {
        let state = present_member_delta(&member(
            r#"{"calculated":false,"matchesCount":1,"matchesCountNeeded":5}"#,
        ))
        .expect("visible");

        assert_eq!(
            member_label(&state, &LabelStyle::default()).text,
            "Calculating... (1/5)"
        );
    }
}

// =============================================================================
// GROUP CARD
// =============================================================================

mod group_card {
    use skilldelta_core::{
        CardOptions, GroupAction, LanguageCatalog, LeaveControl, LookingGroup, MemberRole, Tone,
        UserId, Viewer, build_card,
    };

    const GROUP: &str = r#"{
        "id": 42,
        "tier": {"name": "PLATINUM", "isPlus": false},
        "skillDifference": {"calculated": false, "newSp": 1510, "matchesCount": 4, "matchesCountNeeded": 7},
        "members": [
            {
                "id": 1, "discordName": "Ika", "role": "OWNER",
                "vc": "YES", "languages": ["en"], "weapons": [40],
                "skillDifference": {"calculated": true, "spDiff": 14}
            },
            {
                "id": 2, "discordName": "Tako", "role": "REGULAR",
                "vc": "LISTEN_ONLY", "languages": ["ja"],
                "skillDifference": {"calculated": false, "matchesCount": 2, "matchesCountNeeded": 7}
            }
        ]
    }"#;

    #[test]
    fn own_group_as_owner() {
        let group: LookingGroup = serde_json::from_str(GROUP).expect("group");
        let viewer = Viewer {
            id: UserId(1),
            languages: vec!["en".to_string()],
        };
        let options = CardOptions {
            action: Some(GroupAction::MatchUp),
            own_role: Some(MemberRole::Owner),
            own_group: true,
            ..CardOptions::default()
        };

        let view = build_card(&group, &options, Some(&viewer), &LanguageCatalog::default());

        assert_eq!(view.members.len(), 2);
        assert_eq!(view.placeholders, 0);
        assert_eq!(view.leave, Some(LeaveControl::ConfirmLeaveGroup));
        assert_eq!(
            view.action.as_ref().map(|a| a.label),
            Some("Start match")
        );

        let own_voice = view.members[0].voice.as_ref().expect("vc");
        assert_eq!(own_voice.tone, Tone::Success);

        let other_voice = view.members[1].voice.as_ref().expect("vc");
        assert_eq!(other_voice.tone, Tone::Error);
        assert_eq!(other_voice.languages.as_deref(), Some("(日本語)"));

        let json = serde_json::to_value(&view).expect("serialize");
        assert_eq!(json["delta"]["state"], "provisional");
        assert_eq!(json["members"][0]["delta"]["direction"], "up");
    }
}
