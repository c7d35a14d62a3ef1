/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Duty-status scheduler.
//!
//! [`HosScheduler`] walks a route one segment at a time, enforcing the
//! driving, on-duty and rolling-cycle limits of its [`HosRules`], and records
//! the trip as an ordered [`HosPlan`].
//!
//! # Algorithm
//! For each segment `i`:
//! 1. Compute remaining capacity under the three limits.
//! 2. If the drive does not fit, insert a mandatory rest (new day, window
//!    shift, daily totals reset).
//! 3. Drive the segment and emit a `Driving` event.
//! 4. If `stops[i]` exists, repeat the check for the on-duty and cycle limits
//!    only, then perform the stop.
//!
//! Fuel stops are appended to the rest-stop list afterwards, tagged with the
//! final day, and a closing `End` event is emitted.
//!
//! # Design decisions
//!
//! | Topic | Choice |
//! |---|---|
//! | Limits | Immutable [`HosRules`] value, no module constants |
//! | State | Explicit [`SchedulerState`] moved through pure transitions |
//! | Errors | None: total over any input; validation happens in [`crate::trip`] |
//! | Thread safety | `Send + Sync`, every call builds its own state |
//!
//! # Example
//! ```rust
//! use eld_planner::config::HosRules;
//! use eld_planner::route::{Location, RouteSegment};
//! use eld_planner::scheduler::HosScheduler;
//!
//! let segment = RouteSegment {
//!     origin: Location::new("Chicago, IL", 41.88, -87.63),
//!     destination: Location::new("Denver, CO", 39.74, -104.99),
//!     distance_miles: 1003.0,
//!     duration_hours: 12.0,
//!     geometry: None,
//! };
//! let plan = HosScheduler::new(HosRules::default()).schedule(&[segment], &[], &[], 0.0);
//! assert_eq!(plan.total_trip_days, 2);
//! ```

pub mod limits;
pub mod state;

pub use limits::{Capacity, LimitKind, RestReason};
pub use state::{RollingWindow, SchedulerState, Step};

use tracing::{debug, info, warn};

use crate::config::HosRules;
use crate::plan::{EventStatus, HosPlan, RestKind, RestStop};
use crate::route::{FuelStop, Route, RouteSegment, Stop};

// ── HosScheduler ──────────────────────────────────────────────────────────────

/// The duty-status scheduler.
///
/// Holds only the rule set.  All per-run state lives inside
/// [`schedule()`](Self::schedule) and is dropped when it returns.
#[derive(Debug, Clone, Default)]
pub struct HosScheduler {
    rules: HosRules,
}

impl HosScheduler {
    pub fn new(rules: HosRules) -> Self {
        Self { rules }
    }

    /// Schedules a whole [`Route`].
    pub fn schedule_route(&self, route: &Route, current_hours: f64) -> HosPlan {
        self.schedule(&route.segments, &route.stops, &route.fuel_stops, current_hours)
    }

    /// Builds the duty schedule for `segments`, performing `stops[i]` after
    /// `segments[i]`.
    ///
    /// `current_hours` (hours already used in the current cycle) seeds both
    /// today's on-duty total and today's cycle bucket.
    ///
    /// An empty `segments` slice is a caller error; it yields a plan holding
    /// only `Start` and `End` at an empty location.
    pub fn schedule(
        &self,
        segments: &[RouteSegment],
        stops: &[Stop],
        fuel_stops: &[FuelStop],
        current_hours: f64,
    ) -> HosPlan {
        let rules = &self.rules;

        info!(
            segments = segments.len(),
            stops = stops.len(),
            fuel_stops = fuel_stops.len(),
            current_hours = current_hours,
            "=== HosScheduler::schedule() ==="
        );

        let origin = segments
            .first()
            .map(|s| s.origin.address.clone())
            .unwrap_or_default();
        if segments.is_empty() {
            warn!("no route segments supplied; plan will contain only Start/End");
        }
        if stops.len() > segments.len() {
            warn!(
                unmatched = stops.len() - segments.len(),
                "stops without a preceding segment are ignored"
            );
        }

        let mut plan = HosPlan::default();
        let mut state = SchedulerState::initial(origin, current_hours, rules);
        plan.schedule.push(state.event(EventStatus::Start));

        for (i, segment) in segments.iter().enumerate() {
            state = Self::apply(&mut plan, state.drive(segment, rules));

            if let Some(stop) = stops.get(i) {
                state = Self::apply(&mut plan, state.stop(stop, rules));
            }
        }

        // Fuel stops are not placed in time; they carry the final day.
        for fuel in fuel_stops {
            debug!(location = %fuel.location, day = state.day, "fuel stop recorded");
            plan.rest_stops.push(RestStop {
                day: state.day,
                location: fuel.location.clone(),
                duration_hours: fuel.duration_hours,
                reason: String::from("Fuel stop"),
                kind: RestKind::Fuel,
            });
        }

        plan.schedule.push(state.event(EventStatus::End));
        plan.total_trip_days = state.day;

        info!(
            days = plan.total_trip_days,
            events = plan.schedule.len(),
            rests = plan.rest_count(),
            total_on_duty = state.total_hours,
            "=== Scheduling complete ==="
        );

        plan
    }

    /// Appends what a transition emitted and hands back its state.
    fn apply(plan: &mut HosPlan, step: Step) -> SchedulerState {
        plan.rest_stops.extend(step.rest_stop);
        plan.schedule.extend(step.events);
        step.state
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
