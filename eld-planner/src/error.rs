/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured errors for trip planning requests.
//!
//! The scheduler and renderer are total, so every failure a caller can see is
//! a request that should never have reached them.  [`PlanError`] names each
//! such case; an HTTP front end maps them with [`PlanError::status_code`]:
//!
//! | Variant | Status |
//! |---|---|
//! | `EmptyRoute` | 400 |
//! | `InvalidCurrentHours` | 400 |
//! | `InvalidSegmentDuration` | 400 |
//! | `InvalidStopDuration` / `InvalidFuelStopDuration` | 400 |
//!
//! Anything outside this enum (I/O, malformed files) travels as
//! `anyhow::Error` and is a server-side failure.

use thiserror::Error;

/// A planning request rejected before scheduling.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// The route has no segments to drive.
    #[error("route has no segments")]
    EmptyRoute,

    /// `current_hours` is negative, NaN or infinite.
    #[error("current cycle hours must be a finite, non-negative number (got {0})")]
    InvalidCurrentHours(f64),

    #[error("segment {index} has invalid duration {hours}h (must be finite and non-negative)")]
    InvalidSegmentDuration { index: usize, hours: f64 },

    #[error("stop {index} has invalid duration {hours}h (must be finite and non-negative)")]
    InvalidStopDuration { index: usize, hours: f64 },

    #[error("fuel stop {index} has invalid duration {hours}h (must be finite and non-negative)")]
    InvalidFuelStopDuration { index: usize, hours: f64 },
}

impl PlanError {
    /// HTTP status for this error.  Every variant is a client error.
    pub fn status_code(&self) -> u16 {
        match self {
            PlanError::EmptyRoute
            | PlanError::InvalidCurrentHours(_)
            | PlanError::InvalidSegmentDuration { .. }
            | PlanError::InvalidStopDuration { .. }
            | PlanError::InvalidFuelStopDuration { .. } => 400,
        }
    }
}
