//! # Memento Module
//!
//! The snapshot stored with a finished match: the groups that played, the
//! users in them, and the skill differences attributed to each.
//!
//! `summarize` presents every delta in the memento at once. Users are keyed
//! by `UserId` in a BTreeMap so the summary order is stable.

use crate::presenter::{MemberDeltaState, TeamDeltaState, present_member_delta, present_team_delta};
use crate::types::{MemberSkillDifference, SkillDeltaError, TeamSkillDifference, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-group entry of a memento.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMemento {
    #[serde(default)]
    pub skill_difference: Option<TeamSkillDifference>,
}

/// Per-user entry of a memento.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMemento {
    #[serde(default)]
    pub skill_difference: Option<MemberSkillDifference>,
}

/// Snapshot stored with a finished match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Memento {
    #[serde(default)]
    pub groups: Vec<GroupMemento>,
    #[serde(default)]
    pub users: BTreeMap<UserId, UserMemento>,
}

impl Memento {
    /// Decode a memento from its JSON form.
    pub fn from_json(bytes: &[u8]) -> Result<Self, SkillDeltaError> {
        let memento: Memento = serde_json::from_slice(bytes)?;
        Ok(memento)
    }
}

/// Presented deltas of a memento.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MatchSummary {
    /// One entry per group, in memento order. `None` when the group has no delta.
    pub teams: Vec<Option<TeamDeltaState>>,
    /// Users whose delta has something to show.
    pub members: BTreeMap<UserId, MemberDeltaState>,
}

impl MatchSummary {
    /// Nothing to display.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.iter().all(Option::is_none) && self.members.is_empty()
    }
}

/// Present every delta carried by a memento.
#[must_use]
pub fn summarize(memento: &Memento) -> MatchSummary {
    let teams = memento
        .groups
        .iter()
        .map(|g| g.skill_difference.as_ref().map(present_team_delta))
        .collect();

    let members = memento
        .users
        .iter()
        .filter_map(|(id, user)| {
            let diff = user.skill_difference.as_ref()?;
            present_member_delta(diff).map(|state| (*id, state))
        })
        .collect();

    MatchSummary { teams, members }
}
