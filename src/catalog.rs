//! Dashboard camera catalog scoped by persona.
//!
//! The camera list is static fixture data; the interesting part is which
//! cameras each persona gets to see and how the dashboard filters and orders
//! them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::persona::PersonaId;

/// Client whose stores a Store Owner persona represents.
const OWN_CLIENT: &str = "TechCorp Inc.";

/// Connection state of a camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraStatus {
    Online,
    Offline,
    Maintenance,
}

impl CameraStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraStatus::Online => "online",
            CameraStatus::Offline => "offline",
            CameraStatus::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for CameraStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CameraStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(CameraStatus::Online),
            "offline" => Ok(CameraStatus::Offline),
            "maintenance" => Ok(CameraStatus::Maintenance),
            _ => Err(format!(
                "Unknown camera status '{}'. Valid: online, offline, maintenance",
                s
            )),
        }
    }
}

/// A monitored camera.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Camera {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    pub client: &'static str,
    pub status: CameraStatus,
    pub last_seen: &'static str,
}

static CAMERAS: [Camera; 6] = [
    Camera {
        id: 1,
        name: "Main Entrance",
        location: "Building A - Floor 1",
        client: "TechCorp Inc.",
        status: CameraStatus::Online,
        last_seen: "2 minutes ago",
    },
    Camera {
        id: 2,
        name: "Parking Lot North",
        location: "Outdoor - North Side",
        client: "TechCorp Inc.",
        status: CameraStatus::Online,
        last_seen: "1 minute ago",
    },
    Camera {
        id: 3,
        name: "Reception Area",
        location: "Building A - Floor 1",
        client: "MediCare Center",
        status: CameraStatus::Offline,
        last_seen: "15 minutes ago",
    },
    Camera {
        id: 4,
        name: "Emergency Exit",
        location: "Building B - Floor 2",
        client: "TechCorp Inc.",
        status: CameraStatus::Online,
        last_seen: "30 seconds ago",
    },
    Camera {
        id: 5,
        name: "Server Room",
        location: "Building A - Basement",
        client: "DataFlow Systems",
        status: CameraStatus::Online,
        last_seen: "1 minute ago",
    },
    Camera {
        id: 6,
        name: "Loading Dock",
        location: "Building C - Ground Floor",
        client: "LogiTech Warehouse",
        status: CameraStatus::Maintenance,
        last_seen: "2 hours ago",
    },
];

/// Ordering applied to the dashboard list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Location,
    Client,
    Status,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "location" => Ok(SortKey::Location),
            "client" => Ok(SortKey::Client),
            "status" => Ok(SortKey::Status),
            _ => Err(format!(
                "Unknown sort key '{}'. Valid: name, location, client, status",
                s
            )),
        }
    }
}

/// Status filter and sort order for the dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraQuery {
    /// `None` shows every status.
    pub status: Option<CameraStatus>,
    pub sort: SortKey,
}

/// Cameras within a persona's scope, in catalog order.
pub fn visible_cameras(persona: PersonaId) -> Vec<&'static Camera> {
    match persona {
        PersonaId::SecurityOfficer => CAMERAS.iter().take(3).collect(),
        PersonaId::Supervisor => CAMERAS[..CAMERAS.len() - 1].iter().collect(),
        PersonaId::Client => CAMERAS.iter().filter(|c| c.client == OWN_CLIENT).collect(),
        PersonaId::Admin | PersonaId::SuperAdmin => CAMERAS.iter().collect(),
    }
}

/// Dashboard headline describing what the persona does with its cameras.
pub fn headline(persona: PersonaId) -> &'static str {
    match persona {
        PersonaId::SecurityOfficer => "Monitor your assigned cameras and create incident reports",
        PersonaId::Supervisor => "Oversee security operations and review officer activities",
        PersonaId::Client => "View your store cameras and security reports",
        PersonaId::Admin => "Manage system users and monitor all security operations",
        PersonaId::SuperAdmin => "Full system administration and oversight",
    }
}

/// Short description of what a persona's camera scope covers.
pub fn access_scope(persona: PersonaId) -> &'static str {
    match persona {
        PersonaId::SecurityOfficer => "Assigned cameras only",
        PersonaId::Supervisor => "Supervised locations",
        PersonaId::Client => "Your stores only",
        PersonaId::Admin => "All system cameras",
        PersonaId::SuperAdmin => "Full system access",
    }
}

/// Result of a dashboard query.
#[derive(Debug, Clone, Serialize)]
pub struct CameraListing {
    /// Cameras matching the query, sorted.
    pub cameras: Vec<&'static Camera>,
    /// Size of the persona's scope before the status filter.
    pub in_scope: usize,
}

/// Apply a query to a persona's scope.
pub fn query(persona: PersonaId, query: &CameraQuery) -> CameraListing {
    let scoped = visible_cameras(persona);
    let in_scope = scoped.len();

    let mut cameras: Vec<_> = scoped
        .into_iter()
        .filter(|c| query.status.map_or(true, |s| c.status == s))
        .collect();

    match query.sort {
        SortKey::Name => cameras.sort_by(|a, b| a.name.cmp(b.name)),
        SortKey::Location => cameras.sort_by(|a, b| a.location.cmp(b.location)),
        SortKey::Client => cameras.sort_by(|a, b| a.client.cmp(b.client)),
        SortKey::Status => cameras.sort_by(|a, b| a.status.as_str().cmp(b.status.as_str())),
    }

    CameraListing { cameras, in_scope }
}
