//! Error types for Meridian operations.
//!
//! This module provides the main error type [`MeridianError`] which wraps
//! the error conditions that can occur while loading and rendering
//! diagrams.

use std::io;

use thiserror::Error;

use meridian_core::measure::MeasureError;

/// The main error type for Meridian operations.
///
/// Layout itself is a pure one-shot computation with no recovery logic;
/// a failing label measurement surfaces here unretried.
#[derive(Debug, Error)]
pub enum MeridianError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Label measurement error: {0}")]
    Measure(#[from] MeasureError),

    #[error("Invalid diagram description: {0}")]
    Model(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
