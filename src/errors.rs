//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! The main error type [`WispError`] covers all failure modes:
//! - Animator registration errors (stale handles, bad parameters)
//! - Scene selection errors
//! - Settings parsing errors
//!
//! All public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, WispError>`. Per-tick evaluation never fails:
//! animator specs are validated at registration time, so `tick` has no
//! error path at all.

use thiserror::Error;

/// The main error type for the Wisp engine.
#[derive(Error, Debug)]
pub enum WispError {
    // ========================================================================
    // Animator Registration Errors
    // ========================================================================
    /// The registration referenced a handle that does not belong to the
    /// active scene, or names a node that cannot be driven by the given
    /// spec (e.g. an intensity animator on a node without a light).
    #[error("invalid animation target: {0}")]
    InvalidObject(String),

    /// A numeric parameter of an animator spec is missing, non-finite or
    /// out of range. Scene construction aborts on this rather than running
    /// with partially-initialized animators.
    #[error("malformed animator spec: {0}")]
    MalformedSpec(String),

    /// Registration was attempted while no scene is loaded.
    #[error("no scene is loaded")]
    NoActiveScene,

    // ========================================================================
    // Scene Selection Errors
    // ========================================================================
    /// A scene switch or settings import named a scene that is not in the
    /// library. The engine falls back to the default scene and reports
    /// this to the host.
    #[error("unknown scene name: {0:?}")]
    UnknownScene(String),

    // ========================================================================
    // Settings Errors
    // ========================================================================
    /// Settings JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, WispError>`.
pub type Result<T> = std::result::Result<T, WispError>;
