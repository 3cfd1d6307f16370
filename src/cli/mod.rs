//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod auth;
pub mod context;
pub mod status;
pub mod task;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// taskop - command-line client for the task-tracking service
#[derive(Parser, Debug)]
#[command(name = "taskop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json, html)
    #[arg(
        long,
        global = true,
        env = "TASKOP_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "TASKOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override session file location
    #[arg(long, global = true, env = "TASKOP_SESSION", hide_env = true)]
    pub session: Option<String>,

    /// Override the task service URL
    #[arg(long, global = true, env = "TASKOP_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "TASKOP_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Answer yes to confirmation prompts
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session token
    Login {
        /// Account username (prompted when omitted)
        #[arg(long)]
        username: Option<String>,

        /// Account password (prompted when omitted)
        #[arg(long, env = "TASKOP_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Create an account
    Register {
        /// Account username (prompted when omitted)
        #[arg(long)]
        username: Option<String>,

        /// Account email (prompted when omitted)
        #[arg(long)]
        email: Option<String>,

        /// Account password (prompted when omitted)
        #[arg(long, env = "TASKOP_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Log out and clear the stored session
    Logout,

    /// Show session and configuration status
    Status,

    /// List tasks with completion statistics
    #[command(visible_alias = "ls")]
    List,

    /// Add a task
    Add {
        /// Task title
        title: String,

        /// Task description
        #[arg(long, default_value = "")]
        text: String,

        /// Due date, e.g. 2025-03-01T09:30
        #[arg(long, default_value = "")]
        due: String,
    },

    /// Mark a task completed
    Done {
        /// Task ID
        id: i64,
    },

    /// Mark a task pending again
    Undo {
        /// Task ID
        id: i64,
    },

    /// Edit a task
    Edit {
        /// Task ID
        id: i64,
    },

    /// Delete a task (asks for confirmation unless --yes)
    #[command(visible_alias = "rm")]
    Delete {
        /// Task ID
        id: i64,
    },

    /// Display version information
    Version,
}
