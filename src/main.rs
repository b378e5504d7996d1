use std::sync::Arc;

use tiketku_console::{
    ConsoleState, decide,
    config::{AppConfig, Env},
    models::{NavRequest, ProvenanceHint},
    pages,
    provenance::FixedLoadTiming,
    storage::{DurableState, EphemeralState, FileStore, MemoryStore},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// Demo shell for the console core: initializes configuration, logging and
/// the two storage regions, then walks a scripted set of navigations
/// through the decision contract, logging each verdict. Stands in for the
/// browser host until the chrome collaborators embed the crate.
fn main() {
    // 1. Configuration & Environment Loading (Fail-Fast)
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tiketku_console=debug".into());

    // 3. Initialize Logging based on Environment
    match config.env {
        Env::Local => {
            // LOCAL: Pretty print output for human readability.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            // PROD: JSON format output for log aggregators.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Console core starting in {:?} mode", config.env);

    // 4. Storage Region Initialization
    // Durable region: file-backed stand-in for localStorage. Ephemeral
    // region: in-memory, one tab's lifetime. The timing source says this
    // process is a fresh navigation.
    let durable: DurableState = Arc::new(FileStore::new(&config.session_store_path));
    let ephemeral: EphemeralState = Arc::new(MemoryStore::new());
    let timing = Arc::new(FixedLoadTiming::navigate());

    // 5. Unified State Assembly
    let state = ConsoleState::new(durable, ephemeral, timing, config);

    // 6. Scripted Navigation Walk
    // Start from a clean slate so the walk is reproducible.
    state.sessions.logout();

    let walk = |label: &str, req: &NavRequest| {
        let decision = decide(&state, req);
        tracing::info!(path = %req.path, hint = ?req.hint, ?decision, "{label}");
        decision
    };

    // A stranger pastes a protected URL: not-found, route existence hidden.
    walk("anonymous deep link", &NavRequest::direct("/users"));

    // An unauthenticated visitor clicks a stale menu link: login redirect
    // carrying the origin.
    walk(
        "anonymous menu click",
        &NavRequest::new("/dashboard", ProvenanceHint::FromMenu),
    );

    // Sign in as the superadmin and follow the post-login redirect.
    match pages::login_submit(&state, "superadmin@tiketku.id", "superadmin", Some("/dashboard")) {
        Ok((session, command)) => {
            tracing::info!(email = %session.email, to = %command.to, "login flow complete");
            walk(
                "post-login landing",
                &NavRequest::new(command.to, command.hint),
            );
        }
        Err(err) => tracing::error!(%err, "demo login failed"),
    }

    // Typing a same-role URL directly still hides the route...
    walk("typed superadmin URL", &NavRequest::direct("/banner"));

    // ...while reaching it through the menu renders it.
    state.tracker.record_internal_transition("/banner");
    walk(
        "menu click to /banner",
        &NavRequest::new("/banner", ProvenanceHint::FromMenu),
    );

    // An event-admin-only path never renders for this session.
    walk(
        "wrong-role path",
        &NavRequest::new("/orders", ProvenanceHint::FromMenu),
    );

    // Sign out; the next navigation starts from nothing.
    let command = pages::logout_flow(&state);
    tracing::info!(to = %command.to, "logged out");
    walk("post-logout deep link", &NavRequest::direct("/dashboard"));
}
