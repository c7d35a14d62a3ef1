/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! 24-hour duty-status grid at 15-minute resolution.

use std::ops::Range;

use serde::ser::{Serialize, Serializer};

use super::status::DutyStatus;

pub const INTERVALS_PER_HOUR: usize = 4;
pub const INTERVALS_PER_DAY: usize = 24 * INTERVALS_PER_HOUR;
/// Index of the final 15-minute interval (23:45).
pub const LAST_INTERVAL: usize = INTERVALS_PER_DAY - 1;

/// Four rows (one per [`DutyStatus`]) × 96 intervals.  A cell is `1` when the
/// driver was in that row's status during that interval.
///
/// Serialised as four arrays of 96 `0`/`1` values in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EldGrid {
    rows: [[u8; INTERVALS_PER_DAY]; 4],
}

impl Default for EldGrid {
    fn default() -> Self {
        Self {
            rows: [[0; INTERVALS_PER_DAY]; 4],
        }
    }
}

impl EldGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `intervals` in `status`'s row.  The range is clipped to the day.
    pub fn fill(&mut self, status: DutyStatus, intervals: Range<usize>) {
        let end = intervals.end.min(INTERVALS_PER_DAY);
        let start = intervals.start.min(end);
        self.rows[status.row()][start..end].fill(1);
    }

    pub fn is_marked(&self, status: DutyStatus, interval: usize) -> bool {
        self.rows[status.row()]
            .get(interval)
            .is_some_and(|&cell| cell == 1)
    }

    /// The status marked at `interval`, if any row is marked there.
    pub fn status_at(&self, interval: usize) -> Option<DutyStatus> {
        DutyStatus::ALL
            .into_iter()
            .find(|&status| self.is_marked(status, interval))
    }

    /// Number of marked intervals in `status`'s row.
    pub fn marked_intervals(&self, status: DutyStatus) -> usize {
        self.rows[status.row()].iter().filter(|&&c| c == 1).count()
    }
}

impl Serialize for EldGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows.iter().map(|row| row.as_slice()))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
