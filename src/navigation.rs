//! Sidebar and persona-selector view models.

use serde::Serialize;

use crate::persona::{PersonaDefinition, PersonaSession, Route, SessionStore};

/// Number of route labels shown before collapsing into "+N more".
const PREVIEW_ROUTES: usize = 3;

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub route: Route,
    pub path: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// The item matches the page currently shown.
    pub active: bool,
}

/// Sidebar entries the active persona may open, in route order.
pub fn menu<S: SessionStore>(session: &PersonaSession<S>, current_path: &str) -> Vec<MenuItem> {
    let current = Route::from_path(current_path);

    Route::all()
        .iter()
        .copied()
        .filter(|route| session.can_access_route(*route))
        .map(|route| MenuItem {
            route,
            path: route.path(),
            label: route.label(),
            description: route.description(),
            active: current == Some(route),
        })
        .collect()
}

/// Compact route summary shown under each persona in the selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePreview {
    pub labels: Vec<&'static str>,
    pub remaining: usize,
}

impl RoutePreview {
    pub fn of(persona: &PersonaDefinition) -> Self {
        let labels = persona
            .allowed_routes
            .iter()
            .take(PREVIEW_ROUTES)
            .map(|r| r.label())
            .collect();
        Self {
            labels,
            remaining: persona.allowed_routes.len().saturating_sub(PREVIEW_ROUTES),
        }
    }
}

impl std::fmt::Display for RoutePreview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.labels.join(", "))?;
        if self.remaining > 0 {
            write!(f, " +{} more", self.remaining)?;
        }
        Ok(())
    }
}
