/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Output of the duty-status scheduler.
//!
//! A [`HosPlan`] is built append-only by
//! [`HosScheduler`](crate::scheduler::HosScheduler) and then only read: the
//! ELD renderer borrows it and never mutates it.  Event order is the
//! chronological order of the trip.

use serde::{Deserialize, Serialize};

use crate::route::StopKind;

// ── EventStatus ───────────────────────────────────────────────────────────────

/// Status tag of a [`ScheduleEvent`].
///
/// Serialised as its display label (`"Rest Start"`, `"Pickup"`, ...).  Labels
/// that are not produced by the scheduler survive a round trip through
/// [`EventStatus::Other`] so plans produced elsewhere can still be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventStatus {
    Start,
    Driving,
    RestStart,
    RestEnd,
    Pickup,
    Dropoff,
    End,
    Other(String),
}

impl EventStatus {
    pub fn label(&self) -> &str {
        match self {
            EventStatus::Start => "Start",
            EventStatus::Driving => "Driving",
            EventStatus::RestStart => "Rest Start",
            EventStatus::RestEnd => "Rest End",
            EventStatus::Pickup => "Pickup",
            EventStatus::Dropoff => "Dropoff",
            EventStatus::End => "End",
            EventStatus::Other(label) => label,
        }
    }

    /// Parses a label case-insensitively.  Unknown labels become `Other`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "start" => EventStatus::Start,
            "driving" => EventStatus::Driving,
            "rest start" => EventStatus::RestStart,
            "rest end" => EventStatus::RestEnd,
            "pickup" => EventStatus::Pickup,
            "dropoff" => EventStatus::Dropoff,
            "end" => EventStatus::End,
            _ => EventStatus::Other(label.to_string()),
        }
    }

    /// `true` for statuses that add on-duty time (driving and stops).
    pub fn is_on_duty(&self) -> bool {
        matches!(
            self,
            EventStatus::Driving | EventStatus::Pickup | EventStatus::Dropoff
        )
    }
}

impl From<String> for EventStatus {
    fn from(label: String) -> Self {
        EventStatus::parse(&label)
    }
}

impl From<EventStatus> for String {
    fn from(status: EventStatus) -> Self {
        status.label().to_string()
    }
}

impl From<StopKind> for EventStatus {
    fn from(kind: StopKind) -> Self {
        match kind {
            StopKind::Pickup => EventStatus::Pickup,
            StopKind::Dropoff => EventStatus::Dropoff,
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── ScheduleEvent ─────────────────────────────────────────────────────────────

/// One entry of the trip log, carrying the running totals *after* the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    /// 1-based trip day.
    pub day: u32,

    /// Positional marker: the day's on-duty clock as `HH:MM`.  Not wall time.
    pub time: String,

    pub status: EventStatus,

    /// Address where the event happens.
    pub location: String,

    #[serde(rename = "hours_driven")]
    pub hours_driven_today: f64,

    #[serde(rename = "hours_on_duty")]
    pub hours_on_duty_today: f64,

    /// Sum of the rolling cycle window.
    #[serde(rename = "weekly_hours")]
    pub cycle_hours: f64,
}

/// Renders cumulative hours as an `HH:MM` marker.
pub fn clock_marker(hours: f64) -> String {
    let minutes = if hours.is_finite() && hours > 0.0 {
        (hours * 60.0).round() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

// ── RestStop ──────────────────────────────────────────────────────────────────

/// Why a [`RestStop`] is in the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestKind {
    /// Off-duty period inserted to satisfy an hour limit.
    #[default]
    Mandatory,
    /// Refuelling break passed through from the route.
    Fuel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestStop {
    pub day: u32,
    pub location: String,
    #[serde(rename = "duration")]
    pub duration_hours: f64,
    pub reason: String,
    #[serde(default)]
    pub kind: RestKind,
}

// ── HosPlan ───────────────────────────────────────────────────────────────────

/// The scheduler's complete result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HosPlan {
    pub schedule: Vec<ScheduleEvent>,
    pub rest_stops: Vec<RestStop>,
    pub total_trip_days: u32,
}

impl HosPlan {
    /// Events recorded on `day`, in trip order.
    pub fn events_for_day(&self, day: u32) -> impl Iterator<Item = &ScheduleEvent> {
        self.schedule.iter().filter(move |e| e.day == day)
    }

    /// Number of mandatory rests (fuel stops excluded).
    pub fn rest_count(&self) -> usize {
        self.rest_stops
            .iter()
            .filter(|r| r.kind == RestKind::Mandatory)
            .count()
    }

    /// Hours spent in every rest stop, fuel included.
    pub fn total_rest_hours(&self) -> f64 {
        self.rest_stops.iter().map(|r| r.duration_hours).sum()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
