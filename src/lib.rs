//! ReSurve console - persona-based access control for the security monitoring
//! dashboard.
//!
//! The dashboard shows cameras, clients, staff, incident reports, and alerts.
//! Which of those pages open depends on the active persona:
//!
//! - [`persona`] holds the static role table, the active-persona session, and
//!   the key-value store the selection is persisted to.
//! - [`guard`] decides each navigation request and builds the denial view.
//! - [`navigation`] and [`catalog`] derive the sidebar and the dashboard camera
//!   list from the active persona.

pub mod catalog;
pub mod config;
pub mod error;
pub mod guard;
pub mod logging;
pub mod navigation;
pub mod persona;

pub use error::{Error, Result};
