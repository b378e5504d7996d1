use thiserror::Error;

/// AuthError
///
/// Failures surfaced to the user at the login boundary. These are the only
/// errors in the core that ever reach a caller; everything else degrades to
/// a safe decision outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// One or both credential fields were empty.
    #[error("email and password are required")]
    MissingInput,
    /// No registered (email, password) pair matched.
    #[error("invalid email or password")]
    InvalidCredentials,
}

/// StorageError
///
/// Failures of the two client storage regions (durable session storage and
/// ephemeral per-tab storage). Never surfaced past the engine boundary:
/// an unavailable or corrupt region reads as "absent session" or
/// "no provenance evidence".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The storage region could not be read or written.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The region was readable but its contents did not parse.
    #[error("storage record corrupt: {0}")]
    Corrupt(String),
}
