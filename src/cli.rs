//! CLI argument parsing using clap v4
//!
//! Defines the command-line interface for the ReSurve console.

use clap::{Parser, Subcommand};

use resurve_console::catalog::{CameraStatus, SortKey};

/// ReSurve Console - persona-based access control for the security dashboard
///
/// Select the active persona, check which dashboard pages it may open, and
/// preview the navigation and camera list it would see.
#[derive(Parser, Debug)]
#[command(name = "resurve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, env = "RESURVE_CONFIG", global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Persona management (select and inspect the active role)
    Persona {
        #[command(subcommand)]
        subcommand: PersonaSubcommand,
    },

    /// Route access checks
    Route {
        #[command(subcommand)]
        subcommand: RouteSubcommand,
    },

    /// Show the sidebar navigation for the active persona
    Nav {
        /// Page currently displayed, marked active
        #[arg(long, default_value = "/dashboard")]
        current: String,
    },

    /// List dashboard cameras visible to the active persona
    Cameras {
        /// Only show cameras with this status (online, offline, maintenance)
        #[arg(long)]
        status: Option<CameraStatus>,

        /// Sort order: name, location, client, status
        #[arg(long, default_value = "name")]
        sort: SortKey,
    },

    /// Display version and build information
    Version,

    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// Persona subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum PersonaSubcommand {
    /// List all personas, marking the active one
    List,

    /// Show the active persona
    Show,

    /// Select the active persona
    Select {
        /// Persona: security-officer, supervisor, client, admin, super-admin
        persona: String,
    },

    /// Check whether the active persona has a permission tag
    HasPermission {
        /// Permission tag, e.g. view_reports
        permission: String,
    },
}

/// Route subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum RouteSubcommand {
    /// Decide whether the active persona may open a page
    Check {
        /// Route path, e.g. /users
        path: String,

        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Display the current configuration
    Show,

    /// Initialize a new configuration file
    Init {
        /// Path where to create the config file
        #[arg(short, long)]
        path: Option<String>,

        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Validate the configuration
    Validate,
}
