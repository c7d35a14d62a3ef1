/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Placement of a day's events on the 96-interval grid.
//!
//! The renderer only asks an [`IntervalAllocator`] *where* each event sits;
//! filling the grid and totalling hours is independent of the strategy.
//!
//! * [`OrdinalAllocator`] spaces events evenly by their position in the day,
//!   ignoring how long anything took.  This is the default.
//! * [`DurationWeightedAllocator`] places each event at the on-duty time that
//!   had elapsed when its activity began.

use std::fmt;

use crate::plan::ScheduleEvent;

use super::grid::{INTERVALS_PER_HOUR, LAST_INTERVAL};

/// Maps a day's events (in trip order) to grid intervals.
///
/// Implementations must return one interval per event, each in
/// `0..=LAST_INTERVAL`.
pub trait IntervalAllocator: fmt::Debug + Send + Sync {
    fn allocate(&self, events: &[&ScheduleEvent]) -> Vec<usize>;
}

// ── OrdinalAllocator ──────────────────────────────────────────────────────────

/// First event at interval 0, last at 95, the rest at
/// `round(i / (n − 1) × 95)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalAllocator;

impl IntervalAllocator for OrdinalAllocator {
    fn allocate(&self, events: &[&ScheduleEvent]) -> Vec<usize> {
        let n = events.len();
        (0..n)
            .map(|i| {
                if i == 0 {
                    0
                } else if i == n - 1 {
                    LAST_INTERVAL
                } else {
                    let fraction = i as f64 / (n - 1) as f64;
                    (fraction * LAST_INTERVAL as f64).round() as usize
                }
            })
            .collect()
    }
}

// ── DurationWeightedAllocator ─────────────────────────────────────────────────

/// Event `i` sits at the quarter-hour of on-duty time recorded by event
/// `i − 1`, measured from the day's first event.  Each event's activity thus
/// spans the interval up to the next event.  Positions never decrease and are
/// clamped to the grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationWeightedAllocator;

impl IntervalAllocator for DurationWeightedAllocator {
    fn allocate(&self, events: &[&ScheduleEvent]) -> Vec<usize> {
        let Some(first) = events.first() else {
            return Vec::new();
        };
        let base = first.hours_on_duty_today;

        let mut positions = Vec::with_capacity(events.len());
        let mut last = 0usize;
        positions.push(0);

        for pair in events.windows(2) {
            let elapsed = (pair[0].hours_on_duty_today - base).max(0.0);
            let interval = ((elapsed * INTERVALS_PER_HOUR as f64).round() as usize)
                .min(LAST_INTERVAL)
                .max(last);
            positions.push(interval);
            last = interval;
        }

        positions
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
