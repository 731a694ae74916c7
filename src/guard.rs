//! Route guard - per-request allow/deny decisions for dashboard navigation.
//!
//! The guard keeps no state of its own; every navigation is decided from the
//! active persona at the time of the request.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::persona::{PersonaDefinition, PersonaSession, Route, SessionStore};

/// Outcome of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GuardDecision {
    /// Render the requested page.
    Allowed { route: Route },
    /// Render the denial view instead.
    Denied(Denial),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allowed { .. })
    }
}

/// Everything the denial view needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Denial {
    /// Path as requested.
    pub requested: String,
    /// Known route the path resolved to, if any.
    pub resolved: Option<Route>,
    /// Display name of the persona that was denied.
    pub persona_name: &'static str,
    /// Pages the persona may open.
    pub allowed: &'static [Route],
    /// Single navigation target offered to the user.
    pub fallback: Route,
}

/// Decide a navigation request for the session's active persona.
pub fn check<S: SessionStore>(session: &PersonaSession<S>, requested: &str) -> GuardDecision {
    check_persona(session.current(), requested)
}

/// Decide a navigation request for a given persona.
pub fn check_persona(persona: &'static PersonaDefinition, requested: &str) -> GuardDecision {
    let resolved = Route::from_path(requested);

    match resolved {
        Some(route) if persona.allows(route) => {
            debug!(persona = %persona.id, route = %route, "Route allowed");
            GuardDecision::Allowed { route }
        }
        _ => {
            let fallback = persona.fallback_route();
            info!(
                persona = %persona.id,
                requested = %requested,
                known = resolved.is_some(),
                fallback = %fallback,
                "Route denied"
            );
            GuardDecision::Denied(Denial {
                requested: requested.to_string(),
                resolved,
                persona_name: persona.display_name,
                allowed: persona.allowed_routes,
                fallback,
            })
        }
    }
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Access Restricted")?;
        writeln!(f)?;
        writeln!(
            f,
            "Your current role {} does not have permission to access {}.",
            self.persona_name, self.requested
        )?;
        writeln!(f)?;
        writeln!(f, "Available Pages:")?;
        for route in self.allowed {
            writeln!(f, "  • {}", route.label())?;
        }
        writeln!(f)?;
        writeln!(f, "[Go to {}] -> {}", self.fallback.label(), self.fallback.path())
    }
}
