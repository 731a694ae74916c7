//! Persona system - role definitions, the active-persona session, and its storage.
//!
//! Every dashboard session operates as one persona (Security Officer,
//! Supervisor, Store Owner, Administrator, or Super Administrator). The persona
//! decides which pages open and which permission tags views may consult.

pub mod registry;
pub mod session;
pub mod store;
pub mod types;

pub use registry::PersonaRegistry;
pub use session::{PersonaSession, PERSONA_KEY};
pub use store::{FileStore, MemoryStore, SessionStore};
pub use types::{PersonaDefinition, PersonaId, Route, DEFAULT_ROUTE};
