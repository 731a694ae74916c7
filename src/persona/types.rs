//! Core types for the persona system.
//!
//! A persona bundles a permission set and an ordered list of pages the
//! dashboard will render for it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────
// Persona Id
// ─────────────────────────────────────────────────────────────────

/// The five dashboard roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonaId {
    /// Monitors assigned cameras and raises events.
    SecurityOfficer,
    /// Oversees officers and the stores assigned to them.
    Supervisor,
    /// Store owner viewing their own dashboards and reports.
    Client,
    /// Manages users and sees all data.
    #[default]
    Admin,
    /// Full system access.
    SuperAdmin,
}

impl PersonaId {
    /// Slug used in persisted state and CLI args.
    pub fn slug(&self) -> &'static str {
        match self {
            PersonaId::SecurityOfficer => "security-officer",
            PersonaId::Supervisor => "supervisor",
            PersonaId::Client => "client",
            PersonaId::Admin => "admin",
            PersonaId::SuperAdmin => "super-admin",
        }
    }

    /// All persona ids in selection order.
    pub fn all() -> &'static [PersonaId] {
        &[
            PersonaId::SecurityOfficer,
            PersonaId::Supervisor,
            PersonaId::Client,
            PersonaId::Admin,
            PersonaId::SuperAdmin,
        ]
    }

    /// Exact registry key lookup. Unlike `FromStr`, no trimming, case
    /// folding or `_` mapping is applied.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::all().iter().copied().find(|id| id.slug() == slug)
    }

    /// Position in the registry table.
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.slug())
    }
}

impl FromStr for PersonaId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "security-officer" => Ok(PersonaId::SecurityOfficer),
            "supervisor" => Ok(PersonaId::Supervisor),
            "client" => Ok(PersonaId::Client),
            "admin" => Ok(PersonaId::Admin),
            "super-admin" => Ok(PersonaId::SuperAdmin),
            _ => Err(format!(
                "Unknown persona '{}'. Valid: security-officer, supervisor, client, admin, super-admin",
                s
            )),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Route
// ─────────────────────────────────────────────────────────────────

/// A page of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Dashboard,
    Clients,
    Cameras,
    Reports,
    Users,
    Alerts,
    Settings,
}

/// Route used when a persona has nothing else to fall back to.
pub const DEFAULT_ROUTE: Route = Route::Dashboard;

impl Route {
    /// All routes in sidebar order.
    pub const ALL: &'static [Route] = &[
        Route::Dashboard,
        Route::Clients,
        Route::Cameras,
        Route::Reports,
        Route::Users,
        Route::Alerts,
        Route::Settings,
    ];

    pub fn all() -> &'static [Route] {
        Self::ALL
    }

    /// Canonical path.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Clients => "/clients",
            Route::Cameras => "/cameras",
            Route::Reports => "/reports",
            Route::Users => "/users",
            Route::Alerts => "/alerts",
            Route::Settings => "/settings",
        }
    }

    /// Page title shown in navigation and denial views.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Clients => "Clients",
            Route::Cameras => "Cameras",
            Route::Reports => "Reports",
            Route::Users => "Users",
            Route::Alerts => "Alerts",
            Route::Settings => "Settings",
        }
    }

    /// Sidebar subtitle.
    pub fn description(&self) -> &'static str {
        match self {
            Route::Dashboard => "Camera Views",
            Route::Clients => "Client Management",
            Route::Cameras => "Camera Management",
            Route::Reports => "Incident Reports",
            Route::Users => "Staff Management",
            Route::Alerts => "Real-time Alerts",
            Route::Settings => "System Settings",
        }
    }

    /// Resolve a requested path to a known route.
    ///
    /// Surrounding whitespace, any query or fragment, and trailing slashes are
    /// ignored. The root path is an alias for the dashboard. Matching is
    /// otherwise exact; unknown paths return `None`.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.trim();
        let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
        let path = path.trim_end_matches('/');

        if path.is_empty() {
            return Some(Route::Dashboard);
        }

        Route::all().iter().copied().find(|r| r.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.path())
    }
}

// ─────────────────────────────────────────────────────────────────
// Persona Definition
// ─────────────────────────────────────────────────────────────────

/// Static description of one persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonaDefinition {
    /// Registry key.
    pub id: PersonaId,

    /// Full role name (e.g. "Store Owner").
    pub display_name: &'static str,

    /// Compact name for badges.
    pub short_name: &'static str,

    /// One-line summary of the role.
    pub description: &'static str,

    /// Pages this persona may open. The first entry is the fallback target
    /// when access is denied.
    pub allowed_routes: &'static [Route],

    /// Capability tags consulted by view logic.
    pub permissions: &'static [&'static str],
}

impl PersonaDefinition {
    /// Whether this persona carries a permission tag.
    pub fn has_permission(&self, tag: &str) -> bool {
        self.permissions.contains(&tag)
    }

    /// Whether this persona may open a route.
    pub fn allows(&self, route: Route) -> bool {
        self.allowed_routes.contains(&route)
    }

    /// Where to send this persona after a denial.
    pub fn fallback_route(&self) -> Route {
        self.allowed_routes.first().copied().unwrap_or(DEFAULT_ROUTE)
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
