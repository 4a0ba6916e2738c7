//! Application state for the shift book API.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::engine::PayEngine;
use crate::roster::Roster;

/// Shared application state.
///
/// The pay engine is read-only; the roster sits behind a lock because shift
/// edits mutate it.
#[derive(Clone)]
pub struct AppState {
    /// Prices shifts and months.
    pub engine: PayEngine,
    /// The shift book.
    pub roster: Arc<RwLock<Roster>>,
}

impl AppState {
    /// Creates state around an engine and an empty roster.
    pub fn new(engine: PayEngine) -> Self {
        Self::with_roster(engine, Roster::new())
    }

    /// Creates state around an engine and an existing roster.
    pub fn with_roster(engine: PayEngine, roster: Roster) -> Self {
        Self {
            engine,
            roster: Arc::new(RwLock::new(roster)),
        }
    }
}
