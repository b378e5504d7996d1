use std::sync::Arc;

use crate::storage::EphemeralState;

/// Ephemeral key holding the most recent path reached via an in-app
/// transition. Matches the sessionStorage key the web console writes, so an
/// open tab keeps its provenance.
pub const LAST_INTERNAL_PATH_KEY: &str = "lastInternalPath";

// 1. Load Timing Contract

/// NavigationKind
///
/// How the current document load was initiated, per the host's
/// navigation-timing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// Fresh navigation (typed URL, link from outside, script navigation).
    Navigate,
    /// Reload of an already-open document.
    Reload,
    /// History traversal (back/forward).
    BackForward,
}

/// LoadTiming
///
/// Narrow seam over the browser's navigation-timing signal. The host shell
/// supplies the real record; tests supply a fixed one. `None` means the
/// signal is unavailable (old host, probe threw), which reads as "not a
/// reload" — the heuristic degrades, it never errors out.
pub trait LoadTiming: Send + Sync {
    fn current_load(&self) -> Option<NavigationKind>;
}

/// TimingState
///
/// Shared handle to the navigation-timing source.
pub type TimingState = Arc<dyn LoadTiming>;

/// FixedLoadTiming
///
/// A `LoadTiming` that always reports the same record. The host shell
/// constructs one per document load; tests use it to pin the reload signal.
pub struct FixedLoadTiming(Option<NavigationKind>);

impl FixedLoadTiming {
    pub fn of(kind: NavigationKind) -> Self {
        Self(Some(kind))
    }

    pub fn navigate() -> Self {
        Self::of(NavigationKind::Navigate)
    }

    pub fn reload() -> Self {
        Self::of(NavigationKind::Reload)
    }

    /// No timing record at all (legacy host, probe failure).
    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl LoadTiming for FixedLoadTiming {
    fn current_load(&self) -> Option<NavigationKind> {
        self.0
    }
}

// 2. The Tracker

/// ProvenanceTracker
///
/// Records the last path reached via an in-app transition in the ephemeral
/// per-tab region, and answers the two provenance queries the engine asks:
/// "does the stored path match this one?" and "was this document load a
/// reload?". Best-effort heuristic, not a security boundary: every storage
/// failure is swallowed and reads as absence of evidence.
pub struct ProvenanceTracker {
    store: EphemeralState,
    timing: TimingState,
}

impl ProvenanceTracker {
    pub fn new(store: EphemeralState, timing: TimingState) -> Self {
        Self { store, timing }
    }

    /// record_internal_transition
    ///
    /// Called at the moment any in-app navigation to `path` is initiated
    /// (menu click, post-login redirect, not-found recovery). Never fails
    /// loudly.
    pub fn record_internal_transition(&self, path: &str) {
        if let Err(err) = self.store.set(LAST_INTERNAL_PATH_KEY, path) {
            tracing::debug!(%err, path, "could not record internal transition");
        }
    }

    /// last_internal_path_matches
    ///
    /// True iff the stored last internal path equals `path` exactly.
    /// Unreadable storage counts as no match.
    pub fn last_internal_path_matches(&self, path: &str) -> bool {
        match self.store.get(LAST_INTERNAL_PATH_KEY) {
            Ok(Some(stored)) => stored == path,
            Ok(None) => false,
            Err(err) => {
                tracing::debug!(%err, "ephemeral region unreadable, treating as no match");
                false
            }
        }
    }

    /// is_reload
    ///
    /// True iff the timing record for the current document load is
    /// reload-type.
    pub fn is_reload(&self) -> bool {
        matches!(self.timing.current_load(), Some(NavigationKind::Reload))
    }

    /// clear
    ///
    /// Drops the recorded path (logout). Idempotent; failures swallowed.
    pub fn clear(&self) {
        if let Err(err) = self.store.remove(LAST_INTERNAL_PATH_KEY) {
            tracing::debug!(%err, "could not clear internal transition record");
        }
    }
}
