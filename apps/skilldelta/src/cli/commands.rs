//! # CLI Command Implementations
//!
//! Every command returns its rendered output; `execute` prints it.

use crate::config::AppConfig;
use serde::Serialize;
use serde::de::DeserializeOwned;
use skilldelta_core::{
    ButtonVariant, CardOptions, GroupCardView, LabelStyle, LeaveControl, LookingGroup,
    MatchSummary, Memento, MemberSkillDifference, RoleAction, SkillDeltaError, TeamSkillDifference,
    Tone, Viewer, build_card, member_label, present_member_delta, present_team_delta, summarize,
    team_label,
};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum snapshot file size (10 MB).
///
/// Snapshots are small JSON documents; anything larger is a mistake.
const MAX_SNAPSHOT_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), SkillDeltaError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| SkillDeltaError::Io(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(SkillDeltaError::InvalidInput(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Resolve symlinks and `..`, and require a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, SkillDeltaError> {
    let canonical = path.canonicalize().map_err(|e| {
        SkillDeltaError::Io(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(SkillDeltaError::Io(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Read and decode a JSON snapshot.
pub fn read_snapshot<T: DeserializeOwned>(file: &Path) -> Result<T, SkillDeltaError> {
    let validated_path = validate_file_path(file)?;
    validate_file_size(&validated_path, MAX_SNAPSHOT_FILE_SIZE)?;

    let contents = std::fs::read(&validated_path)
        .map_err(|e| SkillDeltaError::Io(format!("Read file: {}", e)))?;

    tracing::debug!("Read {} bytes from {:?}", contents.len(), validated_path);
    Ok(serde_json::from_slice(&contents)?)
}

fn tone_name(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => "neutral",
        Tone::Lighter => "lighter",
        Tone::Success => "success",
        Tone::Warning => "warning",
        Tone::Error => "error",
    }
}

fn pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

// =============================================================================
// TEAM COMMAND
// =============================================================================

/// Render a team delta.
pub fn render_team(diff: &TeamSkillDifference, style: &LabelStyle, json_mode: bool) -> String {
    let state = present_team_delta(diff);
    let label = team_label(&state, style);

    if json_mode {
        return pretty(&serde_json::json!({
            "state": state,
            "label": label.text,
            "tone": tone_name(label.tone),
        }));
    }

    label.text
}

/// Render a team snapshot file.
pub fn cmd_team(config: &AppConfig, json_mode: bool, file: &Path) -> Result<String, SkillDeltaError> {
    let diff: TeamSkillDifference = read_snapshot(file)?;
    Ok(render_team(&diff, &config.labels, json_mode))
}

// =============================================================================
// MEMBER COMMAND
// =============================================================================

/// Render a member delta. Hidden deltas render as an empty line.
pub fn render_member(diff: &MemberSkillDifference, style: &LabelStyle, json_mode: bool) -> String {
    let state = present_member_delta(diff);
    let label = state.as_ref().map(|s| member_label(s, style));

    if json_mode {
        return pretty(&serde_json::json!({
            "state": state,
            "label": label.as_ref().map(|l| l.text.as_str()),
            "tone": label.as_ref().map(|l| tone_name(l.tone)),
        }));
    }

    label.map(|l| l.text).unwrap_or_default()
}

/// Render a member snapshot file.
pub fn cmd_member(
    config: &AppConfig,
    json_mode: bool,
    file: &Path,
) -> Result<String, SkillDeltaError> {
    let diff: MemberSkillDifference = read_snapshot(file)?;
    Ok(render_member(&diff, &config.labels, json_mode))
}

// =============================================================================
// MEMENTO COMMAND
// =============================================================================

/// Render a match summary.
pub fn render_summary(summary: &MatchSummary, style: &LabelStyle, json_mode: bool) -> String {
    if json_mode {
        return pretty(summary);
    }

    let mut lines = vec!["Match Summary".to_string(), "=============".to_string()];

    for (index, team) in summary.teams.iter().enumerate() {
        let text = team
            .as_ref()
            .map(|state| team_label(state, style).text)
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!("Group {}: {}", index + 1, text));
    }

    if !summary.members.is_empty() {
        lines.push(String::new());
    }
    for (id, state) in &summary.members {
        lines.push(format!("User {}: {}", id.0, member_label(state, style).text));
    }

    lines.join("\n")
}

/// Summarize a memento file.
pub fn cmd_memento(
    config: &AppConfig,
    json_mode: bool,
    file: &Path,
) -> Result<String, SkillDeltaError> {
    let memento: Memento = read_snapshot(file)?;
    let summary = summarize(&memento);

    tracing::info!(
        "Summarized {} groups, {} visible member deltas",
        summary.teams.len(),
        summary.members.len()
    );

    Ok(render_summary(&summary, &config.labels, json_mode))
}

// =============================================================================
// CARD COMMAND
// =============================================================================

/// Render a group card view.
pub fn render_card(view: &GroupCardView, style: &LabelStyle, json_mode: bool) -> String {
    if json_mode {
        return pretty(view);
    }

    let mut lines = vec![format!("Group {}", view.id.0)];

    if let Some(tier) = &view.tier {
        let replay = if tier.replay { " / REPLAY" } else { "" };
        lines.push(format!("  Tier: {}{}", tier.label, replay));
    }

    for member in &view.members {
        let mut parts = vec![member.name.clone()];

        if let Some(control) = &member.role_control {
            let star = if control.filled { "★" } else { "☆" };
            let action = match control.action {
                Some(RoleAction::GiveManager) => " give manager",
                Some(RoleAction::RemoveManager) => " remove manager",
                None => "",
            };
            parts.push(format!("[{} {}{}]", star, control.role.key(), action));
        }
        if let Some(tier) = &member.tier {
            match tier.sp {
                Some(sp) => parts.push(format!("{} {}{}", tier.label, sp, style.unit)),
                None => parts.push(tier.label.clone()),
            }
        }
        if let Some(voice) = &member.voice {
            let languages = voice.languages.as_deref().unwrap_or("");
            parts.push(format!(
                "vc {} {} ({})",
                voice.vc.key(),
                languages,
                tone_name(voice.tone)
            ));
        }
        if let Some(plus) = member.plus_tier {
            parts.push(format!("+{}", plus));
        }
        if !member.weapons.is_empty() {
            let weapons: Vec<String> = member.weapons.iter().map(u32::to_string).collect();
            parts.push(format!("weapons {}", weapons.join(",")));
        }
        if let Some(delta) = &member.delta {
            parts.push(member_label(delta, style).text);
        }

        lines.push(format!("  {}", parts.join("  ")));
    }

    if view.placeholders > 0 {
        lines.push(format!("  {}", vec!["?"; view.placeholders].join(" ")));
    }

    if let Some(delta) = &view.delta {
        lines.push(format!("  {}", team_label(delta, style).text));
    }

    if let Some(button) = &view.action {
        let variant = match button.variant {
            ButtonVariant::Outlined => "outlined",
            ButtonVariant::Destructive => "destructive",
        };
        lines.push(format!("  [{}] ({})", button.label, variant));
    }

    match view.leave {
        Some(LeaveControl::ConfirmLeaveGroup) => lines.push("  [Leave group] (confirm)".into()),
        Some(LeaveControl::LeaveQueue) => lines.push("  [Leave queue]".into()),
        None => {}
    }

    lines.join("\n")
}

/// Build and render a group card from a file.
pub fn cmd_card(
    config: &AppConfig,
    json_mode: bool,
    file: &Path,
    options: &CardOptions,
    viewer: Option<&Viewer>,
) -> Result<String, SkillDeltaError> {
    let group: LookingGroup = read_snapshot(file)?;

    if viewer.is_none() {
        tracing::warn!("No viewer given; voice chat will show as mismatched");
    }

    let view = build_card(&group, options, viewer, &config.catalog());
    Ok(render_card(&view, &config.labels, json_mode))
}

// =============================================================================
// LANGUAGES COMMAND
// =============================================================================

/// List the language catalog.
pub fn cmd_languages(config: &AppConfig, json_mode: bool) -> String {
    let catalog = config.catalog();

    if json_mode {
        let entries: serde_json::Map<String, serde_json::Value> = catalog
            .iter()
            .map(|(code, name)| (code.to_string(), serde_json::Value::from(name)))
            .collect();
        return pretty(&entries);
    }

    catalog
        .iter()
        .map(|(code, name)| format!("{:<4}{}", code, name))
        .collect::<Vec<_>>()
        .join("\n")
}
