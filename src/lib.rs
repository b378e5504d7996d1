use std::sync::Arc;

// --- Module Structure ---

// Core stores and components.
pub mod config;
pub mod engine;
pub mod errors;
pub mod menu;
pub mod models;
pub mod pages;
pub mod provenance;
pub mod session;
pub mod storage;

// Module for guard segregation (blanket auth, per-route role, dispatch).
pub mod guards;

// --- Public Re-exports ---

// Makes the core types easily accessible to the shell entry point (main.rs)
// and to integration tests.
pub use config::{AppConfig, Env};
pub use errors::{AuthError, StorageError};
pub use models::{
    Decision, NavRequest, NavigationCommand, Principal, ProvenanceHint, Role, RouteEntry, Session,
};
pub use provenance::{FixedLoadTiming, LoadTiming, NavigationKind, ProvenanceTracker, TimingState};
pub use session::SessionStore;
pub use storage::{DurableState, EphemeralState, FailingStore, FileStore, KeyValueStore, MemoryStore};

/// ConsoleState
///
/// The single shared container holding the core's lifecycled stores and
/// configuration, injected into every guard and page flow. Decisions are
/// computed from this state plus constructed inputs, never from ambient
/// globals, so `decide` unit-tests deterministically.
#[derive(Clone)]
pub struct ConsoleState {
    /// Session lifecycle over the durable region.
    pub sessions: Arc<SessionStore>,
    /// Provenance heuristics over the ephemeral region and timing signal.
    pub tracker: Arc<ProvenanceTracker>,
    /// The loaded, immutable shell configuration.
    pub config: AppConfig,
}

impl ConsoleState {
    /// Assembles the state from the two storage regions and the timing
    /// source. The ephemeral handle is shared between the session store
    /// (logout clears provenance) and the tracker (which owns its reads
    /// and writes).
    pub fn new(
        durable: DurableState,
        ephemeral: EphemeralState,
        timing: TimingState,
        config: AppConfig,
    ) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new(durable, Arc::clone(&ephemeral))),
            tracker: Arc::new(ProvenanceTracker::new(ephemeral, timing)),
            config,
        }
    }
}

/// decide
///
/// The collaborator-facing decision contract: the full guard pipeline for
/// one navigation. Runs the blanket entry decision first; only when that
/// admits the visitor does the layout-level role/path decision run. The
/// first non-`Render` outcome wins, so no input combination reaches
/// protected content without passing both.
pub fn decide(state: &ConsoleState, req: &NavRequest) -> Decision {
    match guards::auth::require_auth(state, req) {
        Decision::Render => guards::auth::layout_gate(state, req),
        decision => decision,
    }
}
