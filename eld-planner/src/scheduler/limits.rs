/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Hour-limit capacity checks.
//!
//! Before every segment (and every stop) the scheduler computes how many hours
//! are left under each limit and asks whether the next activity fits:
//!
//! | Limit | Remaining | Applies to |
//! |---|---|---|
//! | 11-hour driving | `max_driving − driven_today` | segments |
//! | 14-hour on-duty | `max_on_duty − on_duty_today` | segments, stops |
//! | 70-hour / 8-day | `max_cycle − Σ window` | segments, stops |
//!
//! When several limits are exceeded at once, the first in table order is
//! reported.  An activity that exactly uses up the remaining capacity fits.

use std::fmt;

use crate::config::HosRules;

use super::state::SchedulerState;

// ── LimitKind ─────────────────────────────────────────────────────────────────

/// The hour limit that forced a rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    Driving,
    OnDuty,
    Cycle,
}

impl LimitKind {
    /// Human-readable limit name using the configured values, e.g.
    /// `"Exceeded 11-hour driving limit"`.
    pub fn describe(self, rules: &HosRules) -> String {
        match self {
            LimitKind::Driving => {
                format!("Exceeded {}-hour driving limit", rules.max_driving_hours)
            }
            LimitKind::OnDuty => {
                format!("Exceeded {}-hour on-duty limit", rules.max_on_duty_hours)
            }
            LimitKind::Cycle => format!(
                "Exceeded {}-hour/{}-day limit",
                rules.max_cycle_hours, rules.cycle_days
            ),
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitKind::Driving => f.write_str("driving"),
            LimitKind::OnDuty => f.write_str("on-duty"),
            LimitKind::Cycle => f.write_str("cycle"),
        }
    }
}

// ── RestReason ────────────────────────────────────────────────────────────────

/// Why a mandatory rest was inserted: which limit, and whether it was checked
/// ahead of a stop rather than a drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestReason {
    pub limit: LimitKind,
    pub before_stop: bool,
}

impl RestReason {
    pub fn before_drive(limit: LimitKind) -> Self {
        Self {
            limit,
            before_stop: false,
        }
    }

    pub fn before_stop(limit: LimitKind) -> Self {
        Self {
            limit,
            before_stop: true,
        }
    }

    /// Reason string stored on the [`RestStop`](crate::plan::RestStop).
    pub fn describe(&self, rules: &HosRules) -> String {
        let context = if self.before_stop { " before stop" } else { "" };
        format!(
            "Required {}-hour rest period{}: {}",
            rules.required_rest_hours,
            context,
            self.limit.describe(rules)
        )
    }
}

// ── Capacity ──────────────────────────────────────────────────────────────────

/// Hours left under each limit.  Values may be negative when the seed hours
/// already exceed a limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capacity {
    pub driving: f64,
    pub on_duty: f64,
    pub cycle: f64,
}

impl Capacity {
    pub fn remaining(state: &SchedulerState, rules: &HosRules) -> Self {
        Self {
            driving: rules.max_driving_hours - state.hours_driven_today,
            on_duty: rules.max_on_duty_hours - state.hours_on_duty_today,
            cycle: rules.max_cycle_hours - state.cycle_hours(),
        }
    }

    /// First limit a drive of `hours` would break, if any.
    pub fn check_drive(&self, hours: f64) -> Option<LimitKind> {
        if hours > self.driving {
            Some(LimitKind::Driving)
        } else {
            self.check_stop(hours)
        }
    }

    /// First limit a stationary stop of `hours` would break, if any.  The
    /// driving limit does not apply.
    pub fn check_stop(&self, hours: f64) -> Option<LimitKind> {
        if hours > self.on_duty {
            Some(LimitKind::OnDuty)
        } else if hours > self.cycle {
            Some(LimitKind::Cycle)
        } else {
            None
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
