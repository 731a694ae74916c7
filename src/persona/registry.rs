//! Bundled persona registry - the static role table the dashboard gates on.

use super::types::{PersonaDefinition, PersonaId, Route};

/// Indexed by `PersonaId::index`, so entries follow the enum's declaration order.
static DEFINITIONS: [PersonaDefinition; 5] = [
    PersonaDefinition {
        id: PersonaId::SecurityOfficer,
        display_name: "Security Officer",
        short_name: "SecOf",
        description: "Monitor assigned cameras and create events",
        allowed_routes: &[Route::Dashboard, Route::Alerts, Route::Settings],
        permissions: &[
            "view_assigned_cameras",
            "create_events",
            "modify_events",
            "delete_events",
            "alert_sos",
            "chat_supervisors",
        ],
    },
    PersonaDefinition {
        id: PersonaId::Supervisor,
        display_name: "Supervisor",
        short_name: "Supervisor",
        description: "Oversee security officers and stores",
        allowed_routes: &[
            Route::Dashboard,
            Route::Cameras,
            Route::Reports,
            Route::Alerts,
            Route::Settings,
        ],
        permissions: &[
            "view_all_cameras",
            "review_events",
            "chat_security_officers",
            "chat_store_owners",
            "manage_assigned_stores",
        ],
    },
    PersonaDefinition {
        id: PersonaId::Client,
        display_name: "Store Owner",
        short_name: "Client",
        description: "View store dashboards and reports",
        allowed_routes: &[Route::Dashboard, Route::Reports, Route::Settings],
        permissions: &[
            "view_own_stores",
            "view_dashboards",
            "view_reports",
            "chat_supervisors",
        ],
    },
    PersonaDefinition {
        id: PersonaId::Admin,
        display_name: "Administrator",
        short_name: "Admin",
        description: "Manage users and view all data",
        allowed_routes: Route::ALL,
        permissions: &[
            "create_users",
            "modify_users",
            "delete_users",
            "view_all_dashboards",
            "view_all_reports",
            "view_logs",
            "assume_roles",
        ],
    },
    PersonaDefinition {
        id: PersonaId::SuperAdmin,
        display_name: "Super Administrator",
        short_name: "SuperAdmin",
        description: "Full system access and control",
        allowed_routes: Route::ALL,
        permissions: &[
            "create_any_role",
            "modify_any_role",
            "delete_any_role",
            "view_all_dashboards",
            "view_all_reports",
            "view_all_logs",
            "full_system_access",
        ],
    },
];

/// Registry of persona definitions.
///
/// Total over [`PersonaId`]; there is no way to add or change entries at
/// runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonaRegistry;

impl PersonaRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Definition for a persona id.
    pub fn get(&self, id: PersonaId) -> &'static PersonaDefinition {
        &DEFINITIONS[id.index()]
    }

    /// All definitions in selection order.
    pub fn all(&self) -> &'static [PersonaDefinition] {
        &DEFINITIONS
    }

    /// Resolve a textual persona id.
    pub fn lookup(&self, id: &str) -> Option<&'static PersonaDefinition> {
        id.parse::<PersonaId>().ok().map(|pid| self.get(pid))
    }
}
