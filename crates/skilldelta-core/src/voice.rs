//! # Voice Chat Indicator
//!
//! Icon and tone for a member's voice-chat preference, relative to the viewer.
//!
//! The viewer is always an explicit argument. A member who shares no spoken
//! language with the viewer is shown in the error tone whatever their
//! preference; the viewer's own entry always counts as a match.

use crate::label::Tone;
use crate::language::LanguageCatalog;
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// A member's voice-chat preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoiceChat {
    Yes,
    ListenOnly,
    No,
}

/// Icon shown for a preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceIcon {
    Microphone,
    Speaker,
    SpeakerMuted,
}

impl VoiceChat {
    #[must_use]
    pub fn icon(&self) -> VoiceIcon {
        match self {
            VoiceChat::Yes => VoiceIcon::Microphone,
            VoiceChat::ListenOnly => VoiceIcon::Speaker,
            VoiceChat::No => VoiceIcon::SpeakerMuted,
        }
    }

    /// Tone when the viewer can talk to this member.
    #[must_use]
    pub fn tone(&self) -> Tone {
        match self {
            VoiceChat::Yes => Tone::Success,
            VoiceChat::ListenOnly => Tone::Warning,
            VoiceChat::No => Tone::Error,
        }
    }

    /// Translation key suffix (`q:vc.YES` and friends).
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            VoiceChat::Yes => "YES",
            VoiceChat::ListenOnly => "LISTEN_ONLY",
            VoiceChat::No => "NO",
        }
    }
}

/// The user looking at the card.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewer {
    pub id: UserId,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// Rendered voice-chat indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceIndicator {
    pub vc: VoiceChat,
    pub icon: VoiceIcon,
    pub tone: Tone,
    /// `(English, Deutsch)`, absent when the member lists no language.
    pub languages: Option<String>,
}

/// Build the indicator for a member.
///
/// Returns `None` when the member has no preference or no language list.
#[must_use]
pub fn voice_indicator(
    member_id: UserId,
    vc: Option<VoiceChat>,
    languages: Option<&[String]>,
    viewer: Option<&Viewer>,
    catalog: &LanguageCatalog,
) -> Option<VoiceIndicator> {
    let vc = vc?;
    let languages = languages?;

    let languages_match = viewer.is_some_and(|v| {
        v.id == member_id || languages.iter().any(|l| v.languages.contains(l))
    });

    let tone = if languages_match {
        vc.tone()
    } else {
        Tone::Error
    };

    Some(VoiceIndicator {
        vc,
        icon: vc.icon(),
        tone,
        languages: catalog.describe(languages),
    })
}
