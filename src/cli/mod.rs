//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completion;
pub mod context;
pub mod debts;
pub mod events;
pub mod forgot_password;
pub mod login;
pub mod logout;
pub mod news;
pub mod profile;
pub mod requests;
pub mod schedules;
pub mod status;
pub mod subjects;
pub mod tasks;
pub mod videos;

pub use args::OutputFormat;
pub use context::CommandContext;

/// UASD Portal CLI - Your student portal from the terminal
#[derive(Parser, Debug)]
#[command(name = "uasd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "UASD_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "UASD_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the portal API host
    #[arg(long, global = true, env = "UASD_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Use this session token for a single run instead of the saved one
    #[arg(long, global = true, env = "UASD_TOKEN", hide_env = true)]
    pub token: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "UASD_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in to the portal
    Login {
        /// Student username (prompted if omitted)
        username: Option<String>,

        /// Password (prompted if omitted)
        #[arg(long, env = "UASD_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Sign out and forget the saved session
    Logout,

    /// Show session and configuration status
    Status,

    /// Show your student profile
    Profile,

    /// Latest university news
    News {
        /// Maximum items to show
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Your assignments
    Tasks {
        /// Only show tasks that are not completed
        #[arg(long)]
        pending: bool,
    },

    /// Subject offer and preselection
    #[command(subcommand)]
    Subjects(SubjectCommands),

    /// Student requests (scholarships, letters, transcripts)
    #[command(subcommand)]
    Requests(RequestCommands),

    /// Class schedules
    Schedules {
        /// Filter by room (substring match, case-insensitive)
        #[arg(long)]
        room: Option<String>,

        /// Show one schedule with its map link
        #[arg(long, value_name = "ID")]
        show: Option<String>,
    },

    /// Your outstanding and paid debts
    Debts {
        /// Only show unpaid debts
        #[arg(long)]
        unpaid: bool,

        /// Print the payment link for a debt
        #[arg(long, value_name = "ID")]
        pay: Option<String>,
    },

    /// University events
    Events {
        /// Show one event in full
        #[arg(long, value_name = "ID")]
        show: Option<String>,
    },

    /// University videos
    Videos,

    /// Request a password reset email
    ForgotPassword {
        /// Student username (prompted if omitted)
        #[arg(long)]
        username: Option<String>,

        /// Email on file (prompted if omitted)
        #[arg(long)]
        email: Option<String>,
    },

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   uasd completion bash > /etc/bash_completion.d/uasd
  zsh:    uasd completion zsh > \"${fpath[1]}/_uasd\"
  fish:   uasd completion fish > ~/.config/fish/completions/uasd.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Display version information
    Version,
}

/// Subject subcommands
#[derive(Subcommand, Debug)]
pub enum SubjectCommands {
    /// Offer and preselection side by side
    Overview,

    /// Subjects open for preselection
    Available {
        /// Filter by code or name (substring match, case-insensitive)
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Subjects you have preselected
    Preselected,

    /// Preselect a subject
    Preselect {
        /// Subject code, e.g. INF-101
        code: String,
    },

    /// Cancel a preselection
    Cancel {
        /// Subject code
        code: String,
    },
}

/// Student request subcommands
#[derive(Subcommand, Debug)]
pub enum RequestCommands {
    /// Requests you have filed
    List,

    /// Request types you can file
    Types,

    /// File a new request
    Create {
        /// Request type code (see `uasd requests types`)
        #[arg(long = "type", short = 't')]
        kind: String,

        /// What the request is for
        #[arg(long, short = 'd')]
        description: String,
    },

    /// Cancel a request
    Cancel {
        /// Request ID
        id: i64,
    },
}
