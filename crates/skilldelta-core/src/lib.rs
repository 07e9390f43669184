//! # skilldelta-core
//!
//! Presentation rules for SendouQ skill deltas - THE LOGIC.
//!
//! A skill delta arrives from the rating engine as a snapshot that is either
//! finalized (`calculated`), partially known (a provisional SP value), or
//! still accumulating matches. This crate classifies each snapshot into one
//! explicit state so that renderers never re-derive the branch order from
//! raw optional fields.
//!
//! ## Layout
//!
//! - `types` → snapshot shapes, identifiers, `Sp`, `SkillDeltaError`
//! - `presenter` → team and member classification
//! - `label` → reference text rendering of the states
//! - `language` / `voice` → voice-chat indicator relative to a viewer
//! - `group` → group card view model
//! - `memento` → post-match snapshot summary
//!
//! ## Constraints
//!
//! - No I/O: callers hand in bytes or values, never paths
//! - Pure functions: same input, same output
//! - No float arithmetic on SP values

// =============================================================================
// MODULES
// =============================================================================

pub mod group;
pub mod label;
pub mod language;
pub mod memento;
pub mod presenter;
pub mod types;
pub mod voice;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    GroupId, MatchProgress, MemberSkillDifference, SkillDeltaError, Sp, TeamSkillDifference,
    UserId,
};

// =============================================================================
// RE-EXPORTS: Presentation
// =============================================================================

pub use group::{
    ActionButton, ButtonVariant, CardOptions, FULL_GROUP_SIZE, GroupAction, GroupCardView,
    GroupMember, LeaveControl, LookingGroup, MemberRole, MemberView, RoleAction, Tier, build_card,
};
pub use label::{DeltaLabel, LabelStyle, Tone, member_label, team_label};
pub use language::LanguageCatalog;
pub use memento::{GroupMemento, MatchSummary, Memento, UserMemento, summarize};
pub use presenter::{
    Direction, MemberDeltaState, TeamDeltaState, present_member_delta, present_team_delta,
};
pub use voice::{Viewer, VoiceChat, VoiceIcon, VoiceIndicator, voice_indicator};
