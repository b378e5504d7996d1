use std::env;
use std::path::PathBuf;

/// AppConfig
///
/// Holds the shell's configuration state. Immutable once loaded, shared by
/// value inside `ConsoleState`. The core itself is injected with store
/// handles and never reads configuration ambiently; this struct only tells
/// the shell where the durable region lives and how to format its logs.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Path of the JSON file backing the durable session region
    /// (the desktop-shell stand-in for browser localStorage).
    pub session_store_path: PathBuf,
    /// Runtime environment marker. Controls log formatting in the shell.
    pub env: Env,
}

/// Env
///
/// Runtime context marker, used to switch between human-readable local
/// logging and JSON production logging.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// default
    ///
    /// Safe, non-panicking configuration for test setup. Tests that touch
    /// the durable region build their own in-memory or tempfile-backed
    /// stores, so the path here is never written by them.
    fn default() -> Self {
        Self {
            session_store_path: PathBuf::from("tiketku_session.json"),
            env: Env::Local,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Canonical startup initialization from environment variables.
    ///
    /// # Panics
    /// Panics if `SESSION_STORE_PATH` is unset in Production: starting
    /// without a durable region would silently drop every login on restart.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let session_store_path = match env {
            Env::Production => env::var("SESSION_STORE_PATH")
                .expect("FATAL: SESSION_STORE_PATH must be set in production.")
                .into(),
            Env::Local => env::var("SESSION_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("tiketku_session.json")),
        };

        Self {
            session_store_path,
            env,
        }
    }
}
