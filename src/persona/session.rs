//! Persona session - the active role, its queries, and its persistence.
//!
//! Built once from a [`SessionStore`] and handed to whatever renders views.

use tracing::{debug, info, warn};

use crate::error::{Error, Result};

use super::registry::PersonaRegistry;
use super::store::SessionStore;
use super::types::{PersonaDefinition, PersonaId, Route};

/// Storage key holding the active persona id.
pub const PERSONA_KEY: &str = "currentPersona";

/// The active persona plus the store it is persisted to.
pub struct PersonaSession<S: SessionStore> {
    registry: PersonaRegistry,
    store: S,
    active: PersonaId,
}

impl<S: SessionStore> PersonaSession<S> {
    /// Load with the built-in default persona.
    pub fn load(store: S) -> Self {
        Self::load_with_default(store, PersonaId::default())
    }

    /// Load the persisted persona, falling back to `default` when the stored
    /// value is missing or not a known id.
    pub fn load_with_default(store: S, default: PersonaId) -> Self {
        let active = match store.get(PERSONA_KEY) {
            Some(saved) => match PersonaId::from_slug(&saved) {
                Some(id) => {
                    debug!(persona = %id, "Restored persona from session state");
                    id
                }
                None => {
                    warn!(saved = %saved, fallback = %default, "Ignoring unknown persisted persona");
                    default
                }
            },
            None => {
                debug!(persona = %default, "No persisted persona, using default");
                default
            }
        };

        Self {
            registry: PersonaRegistry::new(),
            store,
            active,
        }
    }

    /// Active persona id.
    pub fn active_id(&self) -> PersonaId {
        self.active
    }

    /// Definition of the active persona.
    pub fn current(&self) -> &'static PersonaDefinition {
        self.registry.get(self.active)
    }

    /// All personas, for selection lists.
    pub fn all(&self) -> &'static [PersonaDefinition] {
        self.registry.all()
    }

    /// Switch to the persona whose registry key is exactly `id`.
    ///
    /// Anything else, including differently cased or spaced spellings of a
    /// known id, is rejected with [`Error::InvalidPersonaSelection`] and leaves
    /// the session untouched.
    pub fn select(&mut self, id: &str) -> Result<&'static PersonaDefinition> {
        let persona = PersonaId::from_slug(id).ok_or_else(|| {
            warn!(requested = %id, current = %self.active, "Rejected persona selection");
            Error::invalid_persona(id)
        })?;
        Ok(self.select_id(persona))
    }

    /// Switch to a known persona and persist it.
    ///
    /// The write is best effort: a storage failure is logged and the new
    /// persona stays active for this process.
    pub fn select_id(&mut self, id: PersonaId) -> &'static PersonaDefinition {
        let previous = self.active;
        self.active = id;

        if let Err(e) = self.store.set(PERSONA_KEY, id.slug()) {
            warn!(persona = %id, error = %e.format_for_log(), "Failed to persist persona selection");
        }

        info!(from = %previous, to = %id, "Persona selected");
        self.current()
    }

    /// Whether the active persona carries a permission tag.
    pub fn has_permission(&self, tag: &str) -> bool {
        self.current().has_permission(tag)
    }

    /// Whether the active persona may open `path`. Unknown paths are denied.
    pub fn can_access(&self, path: &str) -> bool {
        Route::from_path(path).map_or(false, |route| self.can_access_route(route))
    }

    /// Whether the active persona may open a known route.
    pub fn can_access_route(&self, route: Route) -> bool {
        self.current().allows(route)
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the session, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
