//! ReSurve console - persona-based access control for the security dashboard
//!
//! Entry point for the `resurve` binary. Every command below goes through the
//! same session and guard calls the dashboard views make.

mod cli;
mod version;

use clap::Parser;
use tracing::{debug, error};

use resurve_console::catalog::{self, CameraQuery, CameraStatus, SortKey};
use resurve_console::config::{self, ConsoleConfig};
use resurve_console::error::{Error, Result};
use resurve_console::guard::{self, GuardDecision};
use resurve_console::logging;
use resurve_console::navigation::{self, RoutePreview};
use resurve_console::persona::{FileStore, PersonaSession};

use crate::cli::{Cli, Commands, ConfigSubcommand, PersonaSubcommand, RouteSubcommand};

type Session = PersonaSession<FileStore>;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!(error = %e.format_for_log(), "Command failed");
        eprint!("{}", e.format_for_terminal());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Version => {
            version::print_version();
            return Ok(());
        }
        Commands::Config { ref subcommand } => {
            logging::init_simple(tracing::Level::WARN)?;
            return handle_config_command(subcommand.clone(), cli.config.as_deref());
        }
        _ => {}
    }

    let config = ConsoleConfig::load(cli.config.as_deref())?;
    let _log_guards = logging::init_logging(&config.logging, cli.verbose, cli.quiet)?;

    let build = version::BuildInfo::current();
    debug!(version = %build.full_version(), state = %config.state_path().display(), "Starting ReSurve console");

    let mut session = PersonaSession::load_with_default(
        FileStore::new(config.state_path()),
        config.session.default_persona,
    );

    match cli.command {
        Commands::Persona { subcommand } => handle_persona_command(&mut session, subcommand),
        Commands::Route { subcommand } => handle_route_command(&session, subcommand),
        Commands::Nav { current } => {
            print_nav(&session, &current);
            Ok(())
        }
        Commands::Cameras { status, sort } => {
            print_cameras(&session, status, sort);
            Ok(())
        }
        Commands::Version | Commands::Config { .. } => {
            Err(Error::Internal("command already handled".to_string()))
        }
    }
}

/// Handle persona subcommands
fn handle_persona_command(session: &mut Session, subcommand: PersonaSubcommand) -> Result<()> {
    match subcommand {
        PersonaSubcommand::List => {
            let active = session.active_id();
            for persona in session.all() {
                let marker = if persona.id == active { "*" } else { " " };
                println!(
                    "{} {:<17} {:<20} {}",
                    marker,
                    persona.id.slug(),
                    persona.display_name,
                    persona.description
                );
                println!("  {:<17} {}", "", RoutePreview::of(persona));
            }
        }
        PersonaSubcommand::Show => {
            let persona = session.current();
            println!("Persona:     {} ({})", persona.display_name, persona.id);
            println!("Short name:  {}", persona.short_name);
            println!("Description: {}", persona.description);
            println!("Pages:");
            for route in persona.allowed_routes {
                println!("  {:<11} {}", route.label(), route.path());
            }
            println!("Permissions:");
            for tag in persona.permissions {
                println!("  {}", tag);
            }
        }
        PersonaSubcommand::Select { persona } => {
            let selected = session.select(&persona)?;
            println!(
                "Active persona: {} ({})",
                selected.display_name, selected.id
            );
        }
        PersonaSubcommand::HasPermission { permission } => {
            let answer = if session.has_permission(&permission) {
                "yes"
            } else {
                "no"
            };
            println!("{}", answer);
        }
    }

    Ok(())
}

/// Handle route subcommands
fn handle_route_command(session: &Session, subcommand: RouteSubcommand) -> Result<()> {
    match subcommand {
        RouteSubcommand::Check { path, json } => {
            let decision = guard::check(session, &path);
            if json {
                println!("{}", serde_json::to_string_pretty(&decision)?);
                return Ok(());
            }
            match decision {
                GuardDecision::Allowed { route } => {
                    println!("Access granted: {} ({})", route.label(), route.path());
                }
                GuardDecision::Denied(denial) => print!("{}", denial),
            }
        }
    }

    Ok(())
}

fn print_nav(session: &Session, current: &str) {
    let persona = session.current();
    println!("ReSurve - Security Monitoring [{}]", persona.short_name);
    for item in navigation::menu(session, current) {
        let marker = if item.active { ">" } else { " " };
        println!(
            "{} {:<10} {:<18} {}",
            marker, item.label, item.description, item.path
        );
    }
}

fn print_cameras(session: &Session, status: Option<CameraStatus>, sort: SortKey) {
    let persona = session.active_id();
    let listing = catalog::query(persona, &CameraQuery { status, sort });

    println!("Camera Dashboard: {}", catalog::headline(persona));
    println!(
        "  {} of {} cameras ({})",
        listing.cameras.len(),
        listing.in_scope,
        catalog::access_scope(persona)
    );
    for camera in &listing.cameras {
        println!(
            "  #{:<2} {:<18} {:<26} {:<19} {:<11} {}",
            camera.id, camera.name, camera.location, camera.client, camera.status, camera.last_seen
        );
    }
    if listing.cameras.is_empty() {
        println!("  No cameras found. Try adjusting your filters.");
    }
}

/// Handle configuration subcommands
fn handle_config_command(subcommand: ConfigSubcommand, config_path: Option<&str>) -> Result<()> {
    match subcommand {
        ConfigSubcommand::Show => {
            let cfg = ConsoleConfig::load(config_path)?;
            println!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigSubcommand::Init { path, force } => {
            let created = config::init_config(path.as_deref(), force)?;
            println!("Configuration file created: {}", created.display());
        }
        ConfigSubcommand::Validate => {
            ConsoleConfig::load(config_path)?;
            println!("Configuration is valid.");
        }
    }

    Ok(())
}
