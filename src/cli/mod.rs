use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

pub mod commands;

#[derive(Parser)]
#[command(name = "gaffer")]
#[command(about = "Workflow and permission engine for maintenance events")]
#[command(long_about = "Gaffer evaluates maintenance-event snapshots: which status transitions \
                       are legal, which inspection actions are permitted, and what a viewer \
                       should do next. Point any subcommand at a JSON snapshot with --event \
                       to get started.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate the full capability record for an event snapshot
    State {
        /// Path to the event snapshot (JSON)
        #[arg(long, value_name = "PATH", help = "JSON file with the event snapshot")]
        event: PathBuf,
        /// Evaluate as an admin viewer
        #[arg(long, help = "Treat the viewer as an admin")]
        admin: bool,
        /// Evaluate as the event owner
        #[arg(long, help = "Treat the viewer as the event owner")]
        owner: bool,
        /// Resolve ownership by username instead of --owner
        #[arg(long, value_name = "NAME", help = "Username compared against the event creator")]
        user: Option<String>,
        /// Output format
        #[arg(long, value_enum, help = "Render as text or json")]
        format: Option<OutputFormat>,
    },
    /// Validate a proposed status transition (nonzero exit when rejected)
    Check {
        /// Path to the event snapshot (JSON)
        #[arg(long, value_name = "PATH", help = "JSON file with the event snapshot")]
        event: PathBuf,
        /// Target status to validate
        #[arg(long, value_name = "STATUS", help = "Target status, e.g. in_progress")]
        to: String,
        /// Validate as an admin viewer
        #[arg(long, help = "Treat the viewer as an admin")]
        admin: bool,
        /// Validate as the event owner
        #[arg(long, help = "Treat the viewer as the event owner")]
        owner: bool,
        /// Resolve ownership by username instead of --owner
        #[arg(long, value_name = "NAME", help = "Username compared against the event creator")]
        user: Option<String>,
        /// Output format
        #[arg(long, value_enum, help = "Render as text or json")]
        format: Option<OutputFormat>,
    },
    /// Authorize inspection actions against an event snapshot
    Actions {
        /// Path to the event snapshot (JSON)
        #[arg(long, value_name = "PATH", help = "JSON file with the event snapshot")]
        event: PathBuf,
        /// Single action to check instead of the full table
        #[arg(long, value_name = "ACTION", help = "One action, e.g. create or daily_report")]
        action: Option<String>,
        /// Output format
        #[arg(long, value_enum, help = "Render as text or json")]
        format: Option<OutputFormat>,
    },
    /// List the legal next statuses for an event or a bare status
    Next {
        /// Path to the event snapshot (JSON)
        #[arg(long, value_name = "PATH", conflicts_with = "status",
              help = "JSON file with the event snapshot")]
        event: Option<PathBuf>,
        /// Bare status instead of a snapshot
        #[arg(long, value_name = "STATUS", help = "Status name, e.g. planned or in_progress")]
        status: Option<String>,
        /// Output format
        #[arg(long, value_enum, help = "Render as text or json")]
        format: Option<OutputFormat>,
    },
    /// Print the whole transition table
    Matrix {
        /// Output format
        #[arg(long, value_enum, help = "Render as text or json")]
        format: Option<OutputFormat>,
    },
}
