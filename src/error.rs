//! Error types for the rehearsal planner.
//!
//! Referential gaps in the snapshot are not errors — the engine fails closed
//! on those. Errors here are the fatal kind (configuration, credentials,
//! load failures) plus per-record store failures that the run loop catches
//! and logs.

use thiserror::Error;

/// Main error type for the planner.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown show ID '{0}'")]
    UnknownShow(String),

    #[error("missing credential: {0} is not set")]
    MissingCredential(String),

    #[error("failed to read show configuration '{path}': {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid show configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("record store error on table '{table}' ({status}): {message}")]
    Api {
        table: String,
        status: reqwest::StatusCode,
        message: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
