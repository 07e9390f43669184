//! # Skilldelta CLI Module
//!
//! ## Available Commands
//!
//! - `team` - Render a team skill difference snapshot
//! - `member` - Render a member skill difference snapshot
//! - `memento` - Summarize every delta in a match memento
//! - `card` - Build the group card view for a queue group
//! - `languages` - List the language catalog

mod commands;

use crate::config::AppConfig;
use clap::{Parser, Subcommand, ValueEnum};
use skilldelta_core::{GroupAction, MemberRole, SkillDeltaError};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Skilldelta - render matchmaking skill deltas
///
/// Reads rating-engine snapshots and prints what the queue UI would show.
#[derive(Parser, Debug)]
#[command(name = "skilldelta")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML config file
    #[arg(short, long, global = true, env = "SKILLDELTA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a team skill difference
    Team {
        /// JSON file holding one team snapshot
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Render a member skill difference
    Member {
        /// JSON file holding one member snapshot
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Summarize a match memento
    Memento {
        /// JSON file holding the memento
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Build a group card view
    Card {
        /// JSON file holding the looking group
        #[arg(short, long)]
        file: PathBuf,

        /// Action available toward this group
        #[arg(short, long, value_enum)]
        action: Option<ActionArg>,

        /// Viewer's role in their own group
        #[arg(short = 'r', long, value_enum)]
        own_role: Option<RoleArg>,

        /// The card shows the viewer's own group
        #[arg(long)]
        own_group: bool,

        /// The group's queue entry has expired
        #[arg(long)]
        expired: bool,

        /// Read-only rendering (match page)
        #[arg(long)]
        display_only: bool,

        /// Hide voice-chat indicators
        #[arg(long)]
        hide_vc: bool,

        /// Hide weapon pools
        #[arg(long)]
        hide_weapons: bool,

        /// Viewer user ID
        #[arg(long)]
        viewer_id: Option<u64>,

        /// Viewer languages (comma-separated codes)
        #[arg(long, value_delimiter = ',')]
        viewer_languages: Vec<String>,
    },

    /// List known languages
    Languages,
}

/// `--action` values.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionArg {
    Like,
    Unlike,
    GroupUp,
    MatchUp,
}

impl From<ActionArg> for GroupAction {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Like => GroupAction::Like,
            ActionArg::Unlike => GroupAction::Unlike,
            ActionArg::GroupUp => GroupAction::GroupUp,
            ActionArg::MatchUp => GroupAction::MatchUp,
        }
    }
}

/// `--own-role` values.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleArg {
    Owner,
    Manager,
    Regular,
}

impl From<RoleArg> for MemberRole {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Owner => MemberRole::Owner,
            RoleArg::Manager => MemberRole::Manager,
            RoleArg::Regular => MemberRole::Regular,
        }
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), SkillDeltaError> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let json_mode = cli.json_mode;

    let output = match cli.command {
        Commands::Team { file } => cmd_team(&config, json_mode, &file)?,
        Commands::Member { file } => cmd_member(&config, json_mode, &file)?,
        Commands::Memento { file } => cmd_memento(&config, json_mode, &file)?,
        Commands::Card {
            file,
            action,
            own_role,
            own_group,
            expired,
            display_only,
            hide_vc,
            hide_weapons,
            viewer_id,
            viewer_languages,
        } => {
            let options = skilldelta_core::CardOptions {
                action: action.map(GroupAction::from),
                own_role: own_role.map(MemberRole::from),
                own_group,
                is_expired: expired,
                display_only,
                hide_vc,
                hide_weapons,
            };
            let viewer = viewer_id.map(|id| skilldelta_core::Viewer {
                id: skilldelta_core::UserId(id),
                languages: viewer_languages,
            });
            cmd_card(&config, json_mode, &file, &options, viewer.as_ref())?
        }
        Commands::Languages => cmd_languages(&config, json_mode),
    };

    println!("{}", output);
    Ok(())
}
