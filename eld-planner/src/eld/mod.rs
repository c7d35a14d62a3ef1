/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! ELD daily log rendering.
//!
//! [`LogRenderer`] turns a finished [`HosPlan`] into one [`LogSheet`] per trip
//! day that has events:
//!
//! ```text
//! HosPlan ──(events_for_day)──► [&ScheduleEvent] ──(allocator)──► intervals
//!                                                       │
//!                                grid + hour totals ◄───┘ (fill with previous status)
//! ```
//!
//! Between two consecutive events the grid is filled with the *earlier*
//! event's status.  The final interval of a day is the closing marker and is
//! never filled, so a day with at least two events always totals 23.75 hours
//! under the default [`OrdinalAllocator`].

pub mod allocator;
pub mod grid;
pub mod status;

pub use allocator::{DurationWeightedAllocator, IntervalAllocator, OrdinalAllocator};
pub use grid::{EldGrid, INTERVALS_PER_DAY, INTERVALS_PER_HOUR, LAST_INTERVAL};
pub use status::DutyStatus;

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, info};

use crate::plan::{EventStatus, HosPlan, ScheduleEvent};

// ── Output types ──────────────────────────────────────────────────────────────

/// Hours spent in each duty status over one day.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct StatusHours {
    pub off_duty: f64,
    pub sleeper_berth: f64,
    pub driving: f64,
    pub on_duty_not_driving: f64,
}

impl StatusHours {
    pub fn get(&self, status: DutyStatus) -> f64 {
        match status {
            DutyStatus::OffDuty => self.off_duty,
            DutyStatus::SleeperBerth => self.sleeper_berth,
            DutyStatus::Driving => self.driving,
            DutyStatus::OnDutyNotDriving => self.on_duty_not_driving,
        }
    }

    fn add(&mut self, status: DutyStatus, hours: f64) {
        match status {
            DutyStatus::OffDuty => self.off_duty += hours,
            DutyStatus::SleeperBerth => self.sleeper_berth += hours,
            DutyStatus::Driving => self.driving += hours,
            DutyStatus::OnDutyNotDriving => self.on_duty_not_driving += hours,
        }
    }

    pub fn total(&self) -> f64 {
        DutyStatus::ALL.iter().map(|&s| self.get(s)).sum()
    }
}

/// A location remark on the log: where each event of the day happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRemark {
    pub time: String,
    pub location: String,
    pub status: EventStatus,
}

/// One day's ELD record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogSheet {
    pub day: u32,
    /// Synthetic calendar label; not derived from any real clock.
    pub date: String,
    pub grid: EldGrid,
    pub hours: StatusHours,
    pub locations: Vec<LocationRemark>,
    /// Sum of the four status totals.
    pub total_hours: f64,
}

/// Synthetic date label for trip day `day`.
pub fn date_label(day: u32) -> String {
    format!("2025-04-{day:02}")
}

// ── LogRenderer ───────────────────────────────────────────────────────────────

/// Renders [`LogSheet`]s from a [`HosPlan`].  Holds no per-render state.
#[derive(Debug)]
pub struct LogRenderer {
    allocator: Box<dyn IntervalAllocator>,
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl LogRenderer {
    /// A renderer using the [`OrdinalAllocator`].
    pub fn new() -> Self {
        Self::with_allocator(OrdinalAllocator)
    }

    pub fn with_allocator(allocator: impl IntervalAllocator + 'static) -> Self {
        Self {
            allocator: Box::new(allocator),
        }
    }

    /// One sheet per day present in `plan.schedule`, ordered by day.
    pub fn render(&self, plan: &HosPlan) -> Vec<LogSheet> {
        let days: BTreeSet<u32> = plan.schedule.iter().map(|e| e.day).collect();

        let sheets: Vec<LogSheet> = days
            .into_iter()
            .map(|day| {
                let events: Vec<&ScheduleEvent> = plan.events_for_day(day).collect();
                self.render_day(day, &events)
            })
            .collect();

        info!(
            days = sheets.len(),
            trip_days = plan.total_trip_days,
            "ELD log sheets rendered"
        );
        sheets
    }

    /// Renders a single day from its events (in trip order).
    ///
    /// Zero or one event leaves the grid empty and every total at zero.
    pub fn render_day(&self, day: u32, events: &[&ScheduleEvent]) -> LogSheet {
        let positions = self.allocator.allocate(events);

        let mut grid = EldGrid::new();
        let mut hours = StatusHours::default();
        let mut previous = DutyStatus::OffDuty;
        let mut previous_interval = 0usize;

        for (event, &interval) in events.iter().zip(&positions) {
            let current = DutyStatus::from_event(&event.status, previous);

            if interval > previous_interval {
                grid.fill(previous, previous_interval..interval);
                hours.add(
                    previous,
                    (interval - previous_interval) as f64 / INTERVALS_PER_HOUR as f64,
                );
            }

            previous = current;
            previous_interval = interval;
        }

        let locations = events
            .iter()
            .map(|e| LocationRemark {
                time: e.time.clone(),
                location: e.location.clone(),
                status: e.status.clone(),
            })
            .collect();

        debug!(
            day = day,
            events = events.len(),
            off_duty = hours.off_duty,
            sleeper = hours.sleeper_berth,
            driving = hours.driving,
            on_duty = hours.on_duty_not_driving,
            "day rendered"
        );

        LogSheet {
            day,
            date: date_label(day),
            grid,
            hours,
            locations,
            total_hours: hours.total(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
