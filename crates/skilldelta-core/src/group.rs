//! # Group Card
//!
//! View model for a queue group card: which members, badges, deltas and
//! controls a renderer should show for a group.
//!
//! ## Controls
//!
//! | Control       | Shown when                                              |
//! |---------------|---------------------------------------------------------|
//! | Action button | action given, own role Owner/Manager, group not expired |
//! | Leave group   | own group with more than one member (confirmed)         |
//! | Leave queue   | own group with exactly one member (immediate)           |
//! | Role star     | own group and own role Owner, or display-only           |

use crate::language::LanguageCatalog;
use crate::presenter::{MemberDeltaState, TeamDeltaState, present_member_delta, present_team_delta};
use crate::types::{GroupId, MemberSkillDifference, Sp, TeamSkillDifference, UserId};
use crate::voice::{Viewer, VoiceChat, VoiceIndicator, voice_indicator};
use serde::{Deserialize, Serialize};

/// Members in a full group; hidden rosters show this many placeholders.
pub const FULL_GROUP_SIZE: usize = 4;

// =============================================================================
// INPUT SHAPES
// =============================================================================

/// Role of a member within their group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    Owner,
    Manager,
    Regular,
}

impl MemberRole {
    /// Translation key suffix (`q:roles.OWNER` and friends).
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            MemberRole::Owner => "OWNER",
            MemberRole::Manager => "MANAGER",
            MemberRole::Regular => "REGULAR",
        }
    }

    /// Owners and managers may act on behalf of the group.
    #[must_use]
    pub fn can_act(&self) -> bool {
        matches!(self, MemberRole::Owner | MemberRole::Manager)
    }
}

/// Action the viewer's group can take toward this group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupAction {
    Like,
    Unlike,
    GroupUp,
    MatchUp,
}

/// Skill tier badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    pub name: String,
    #[serde(default)]
    pub is_plus: bool,
}

impl Tier {
    /// `LEVIATHAN+` style label.
    #[must_use]
    pub fn label(&self) -> String {
        if self.is_plus {
            format!("{}+", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// A member's own tier, with the rounded SP behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSkill {
    pub tier: Tier,
    /// Too few matches for the SP value to be meaningful.
    #[serde(default)]
    pub approximate: bool,
    #[serde(default)]
    pub sp: Option<Sp>,
}

/// A member as listed in the queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub id: UserId,
    pub discord_name: String,
    pub role: MemberRole,
    #[serde(default)]
    pub vc: Option<VoiceChat>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub plus_tier: Option<u8>,
    #[serde(default)]
    pub weapons: Vec<u32>,
    #[serde(default)]
    pub skill: Option<MemberSkill>,
    #[serde(default)]
    pub skill_difference: Option<MemberSkillDifference>,
}

/// A group as listed in the queue. `members` is hidden for some groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookingGroup {
    pub id: GroupId,
    #[serde(default)]
    pub members: Option<Vec<GroupMember>>,
    #[serde(default)]
    pub tier: Option<Tier>,
    #[serde(default)]
    pub is_replay: bool,
    #[serde(default)]
    pub skill_difference: Option<TeamSkillDifference>,
}

/// How the card is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardOptions {
    pub action: Option<GroupAction>,
    pub own_role: Option<MemberRole>,
    pub own_group: bool,
    pub is_expired: bool,
    pub display_only: bool,
    pub hide_vc: bool,
    pub hide_weapons: bool,
}

// =============================================================================
// VIEW MODEL
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonVariant {
    Outlined,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionButton {
    pub action: GroupAction,
    pub label: &'static str,
    pub variant: ButtonVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveControl {
    /// "Leave group" behind a confirmation dialog.
    ConfirmLeaveGroup,
    /// "Leave queue", no confirmation.
    LeaveQueue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleAction {
    GiveManager,
    RemoveManager,
}

/// Star shown next to a member, with the popover's role action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleControl {
    pub role: MemberRole,
    pub filled: bool,
    pub inactive: bool,
    pub action: Option<RoleAction>,
}

/// Group tier badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTierView {
    pub label: String,
    pub compact: bool,
    pub replay: bool,
}

/// Member tier badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberTierView {
    pub label: String,
    pub sp: Option<Sp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberView {
    pub id: UserId,
    pub name: String,
    pub role_control: Option<RoleControl>,
    pub tier: Option<MemberTierView>,
    pub voice: Option<VoiceIndicator>,
    pub plus_tier: Option<u8>,
    pub weapons: Vec<u32>,
    pub delta: Option<MemberDeltaState>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupCardView {
    pub id: GroupId,
    pub members: Vec<MemberView>,
    pub placeholders: usize,
    pub tier: Option<GroupTierView>,
    pub delta: Option<TeamDeltaState>,
    pub action: Option<ActionButton>,
    pub leave: Option<LeaveControl>,
}

// =============================================================================
// RULES
// =============================================================================

/// Button text for an action. Liking a group with a hidden roster is a challenge.
#[must_use]
pub fn action_label(action: GroupAction, members_visible: bool) -> &'static str {
    match action {
        GroupAction::MatchUp => "Start match",
        GroupAction::Like if !members_visible => "Challenge",
        GroupAction::Like => "Invite",
        GroupAction::GroupUp => "Group up",
        GroupAction::Unlike => "Undo",
    }
}

fn action_button(group: &LookingGroup, options: &CardOptions) -> Option<ActionButton> {
    let action = options.action?;
    let role = options.own_role?;

    if !role.can_act() || options.is_expired {
        return None;
    }

    let variant = if action == GroupAction::Unlike {
        ButtonVariant::Destructive
    } else {
        ButtonVariant::Outlined
    };

    Some(ActionButton {
        action,
        label: action_label(action, group.members.is_some()),
        variant,
    })
}

fn leave_control(group: &LookingGroup, options: &CardOptions) -> Option<LeaveControl> {
    if !options.own_group {
        return None;
    }

    match group.members.as_ref().map_or(0, Vec::len) {
        0 => None,
        1 => Some(LeaveControl::LeaveQueue),
        _ => Some(LeaveControl::ConfirmLeaveGroup),
    }
}

fn role_control(member: &GroupMember, options: &CardOptions) -> Option<RoleControl> {
    let show_actions = options.own_group && options.own_role == Some(MemberRole::Owner);
    if !show_actions && !options.display_only {
        return None;
    }
    if options.display_only && member.role != MemberRole::Owner {
        return None;
    }

    let action = if options.display_only {
        None
    } else {
        match member.role {
            MemberRole::Regular => Some(RoleAction::GiveManager),
            MemberRole::Manager => Some(RoleAction::RemoveManager),
            MemberRole::Owner => None,
        }
    };

    Some(RoleControl {
        role: member.role,
        filled: member.role == MemberRole::Owner,
        inactive: member.role == MemberRole::Regular,
        action,
    })
}

fn member_view(
    member: &GroupMember,
    options: &CardOptions,
    viewer: Option<&Viewer>,
    catalog: &LanguageCatalog,
) -> MemberView {
    let voice = if options.hide_vc {
        None
    } else {
        voice_indicator(
            member.id,
            member.vc,
            member.languages.as_deref(),
            viewer,
            catalog,
        )
    };

    let weapons = if options.hide_weapons {
        Vec::new()
    } else {
        member.weapons.clone()
    };

    let tier = member.skill.as_ref().map(|skill| MemberTierView {
        label: skill.tier.label(),
        sp: if skill.approximate { None } else { skill.sp },
    });

    MemberView {
        id: member.id,
        name: member.discord_name.clone(),
        role_control: role_control(member, options),
        tier,
        voice,
        plus_tier: member.plus_tier,
        weapons,
        delta: member
            .skill_difference
            .as_ref()
            .and_then(present_member_delta),
    }
}

/// Build the card view for a group.
#[must_use]
pub fn build_card(
    group: &LookingGroup,
    options: &CardOptions,
    viewer: Option<&Viewer>,
    catalog: &LanguageCatalog,
) -> GroupCardView {
    let members: Vec<MemberView> = group
        .members
        .iter()
        .flatten()
        .map(|m| member_view(m, options, viewer, catalog))
        .collect();

    let placeholders = if group.members.is_none() {
        FULL_GROUP_SIZE
    } else {
        0
    };

    let tier = group.tier.as_ref().map(|tier| GroupTierView {
        label: tier.label(),
        compact: options.display_only,
        replay: group.is_replay && !options.display_only,
    });

    GroupCardView {
        id: group.id,
        members,
        placeholders,
        tier,
        delta: group.skill_difference.as_ref().map(present_team_delta),
        action: action_button(group, options),
        leave: leave_control(group, options),
    }
}

// =============================================================================
// TESTS
// =============================================================================
