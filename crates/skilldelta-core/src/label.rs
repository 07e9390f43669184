//! # Label Module
//!
//! Reference text rendering of presentation states.
//!
//! Renderers are free to format states however they like; this module is the
//! default used by the CLI and mirrors the queue UI wording:
//!
//! - `Team SP 1200 ➜ 1250`
//! - `Team SP calculated: 1300`
//! - `Team SP calculating... (2/5)`
//! - `▲8SP` / `▼8SP`
//! - `Calculated: 1420SP`
//! - `Calculating... (2/5)`

use crate::presenter::{Direction, MemberDeltaState, TeamDeltaState};
use crate::types::Sp;
use serde::{Deserialize, Serialize};

/// Styling hint attached to a rendered label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Neutral,
    Lighter,
    Success,
    Warning,
    Error,
}

/// Words and glyphs used when rendering labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    pub team_prefix: String,
    pub arrow: String,
    pub up: String,
    pub down: String,
    pub unit: String,
    pub calculating: String,
    pub calculated: String,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            team_prefix: "Team SP".to_string(),
            arrow: "➜".to_string(),
            up: "▲".to_string(),
            down: "▼".to_string(),
            unit: "SP".to_string(),
            calculating: "Calculating...".to_string(),
            calculated: "Calculated:".to_string(),
        }
    }
}

/// A rendered label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaLabel {
    pub text: String,
    pub tone: Tone,
}

impl DeltaLabel {
    fn new(text: String, tone: Tone) -> Self {
        Self { text, tone }
    }
}

impl std::fmt::Display for DeltaLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

fn optional(sp: Option<Sp>) -> String {
    sp.map(|v| v.to_string()).unwrap_or_default()
}

/// Render a team delta state.
#[must_use]
pub fn team_label(state: &TeamDeltaState, style: &LabelStyle) -> DeltaLabel {
    let text = match state {
        TeamDeltaState::Resolved { old_sp, new_sp } => format!(
            "{} {} {} {}",
            style.team_prefix,
            optional(*old_sp),
            style.arrow,
            optional(*new_sp)
        ),
        TeamDeltaState::Provisional { new_sp } => {
            format!(
                "{} {} {}",
                style.team_prefix,
                style.calculated.to_lowercase(),
                new_sp
            )
        }
        TeamDeltaState::Pending(progress) => format!(
            "{} {} ({})",
            style.team_prefix,
            style.calculating.to_lowercase(),
            progress
        ),
    };

    DeltaLabel::new(text, Tone::Neutral)
}

/// Render a member delta state.
#[must_use]
pub fn member_label(state: &MemberDeltaState, style: &LabelStyle) -> DeltaLabel {
    match state {
        MemberDeltaState::Resolved {
            direction,
            magnitude,
        } => {
            let (glyph, tone) = match direction {
                Direction::Up => (&style.up, Tone::Success),
                Direction::Down => (&style.down, Tone::Warning),
            };
            DeltaLabel::new(format!("{}{}{}", glyph, magnitude, style.unit), tone)
        }
        MemberDeltaState::Provisional { new_sp } => {
            let text = match new_sp {
                Some(sp) if sp.is_truthy() => {
                    format!("{} {}{}", style.calculated, sp, style.unit)
                }
                _ => style.calculated.clone(),
            };
            DeltaLabel::new(text, Tone::Lighter)
        }
        MemberDeltaState::Pending(progress) => DeltaLabel::new(
            format!("{} ({})", style.calculating, progress),
            Tone::Lighter,
        ),
    }
}

// =============================================================================
// TESTS
// =============================================================================
