/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! The four ELD duty-status rows and the event → row mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::plan::EventStatus;

/// One row of the ELD grid, in grid order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDutyNotDriving,
}

impl DutyStatus {
    /// Rows in grid order.
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDutyNotDriving,
    ];

    /// Grid row index (0–3).
    pub fn row(self) -> usize {
        match self {
            DutyStatus::OffDuty => 0,
            DutyStatus::SleeperBerth => 1,
            DutyStatus::Driving => 2,
            DutyStatus::OnDutyNotDriving => 3,
        }
    }

    /// Key used in the per-status hour totals.
    pub fn key(self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "off_duty",
            DutyStatus::SleeperBerth => "sleeper_berth",
            DutyStatus::Driving => "driving",
            DutyStatus::OnDutyNotDriving => "on_duty_not_driving",
        }
    }

    /// Maps a schedule event status onto a grid row.
    ///
    /// | Event status | Row |
    /// |---|---|
    /// | Start, Rest Start, Rest End, End | off duty |
    /// | label containing "rest" and "berth" | sleeper berth |
    /// | Driving | driving |
    /// | Pickup, Dropoff, Fuel | on duty (not driving) |
    /// | anything else | `previous` |
    ///
    /// "Fuel" must match the whole label (case-insensitive); "rest" and
    /// "berth" only need to appear somewhere in it.
    pub fn from_event(status: &EventStatus, previous: DutyStatus) -> DutyStatus {
        match status {
            EventStatus::Start | EventStatus::RestStart | EventStatus::RestEnd | EventStatus::End => {
                DutyStatus::OffDuty
            }
            EventStatus::Driving => DutyStatus::Driving,
            EventStatus::Pickup | EventStatus::Dropoff => DutyStatus::OnDutyNotDriving,
            EventStatus::Other(label) => Self::from_label(label).unwrap_or(previous),
        }
    }

    /// Rows recognisable from a free-form label.
    fn from_label(label: &str) -> Option<DutyStatus> {
        let label = label.to_ascii_lowercase();
        if label.contains("rest") && label.contains("berth") {
            Some(DutyStatus::SleeperBerth)
        } else if label.trim() == "fuel" {
            Some(DutyStatus::OnDutyNotDriving)
        } else {
            None
        }
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
