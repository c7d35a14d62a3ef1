/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Scheduler state and its transitions.
//!
//! Every step of the schedule is a transition `(state, input) → Step`: the
//! state is moved in, and a [`Step`] carrying the next state plus whatever
//! was emitted comes out.  Nothing outside the returned value is touched, so
//! each transition is testable on its own.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::config::HosRules;
use crate::plan::{clock_marker, EventStatus, RestKind, RestStop, ScheduleEvent};
use crate::route::{RouteSegment, Stop};

use super::limits::{Capacity, RestReason};

// ── RollingWindow ─────────────────────────────────────────────────────────────

/// Daily on-duty totals for the rolling cycle.
///
/// Index 0 is today.  Starting a new day pushes an empty bucket at the front
/// and drops the oldest bucket from the back, so the length never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingWindow {
    buckets: VecDeque<f64>,
}

impl RollingWindow {
    /// A window of `days` buckets with `seed_hours` already booked today.
    pub fn new(days: usize, seed_hours: f64) -> Self {
        let mut buckets: VecDeque<f64> = std::iter::repeat(0.0).take(days.max(1)).collect();
        buckets[0] = seed_hours;
        Self { buckets }
    }

    pub fn today(&self) -> f64 {
        self.buckets[0]
    }

    pub fn add_today(&mut self, hours: f64) {
        self.buckets[0] += hours;
    }

    /// Starts a new day.
    pub fn shift(&mut self) {
        self.buckets.pop_back();
        self.buckets.push_front(0.0);
    }

    pub fn total(&self) -> f64 {
        self.buckets.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Buckets from today backwards.
    pub fn buckets(&self) -> impl Iterator<Item = f64> + '_ {
        self.buckets.iter().copied()
    }
}

// ── SchedulerState ────────────────────────────────────────────────────────────

/// Running totals threaded through the whole schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerState {
    /// 1-based trip day.
    pub day: u32,
    pub hours_driven_today: f64,
    pub hours_on_duty_today: f64,
    pub window: RollingWindow,
    /// Address of the driver's current position.
    pub location: String,
    /// On-duty hours accumulated over the whole trip, seed included.
    pub total_hours: f64,
}

/// Result of one transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: SchedulerState,
    pub events: Vec<ScheduleEvent>,
    pub rest_stop: Option<RestStop>,
}

impl Step {
    fn unchanged(state: SchedulerState) -> Self {
        Self {
            state,
            events: Vec::new(),
            rest_stop: None,
        }
    }
}

impl SchedulerState {
    /// State at the start of the trip.  `current_hours` is booked both as
    /// today's on-duty time and in today's cycle bucket.
    pub fn initial(origin: impl Into<String>, current_hours: f64, rules: &HosRules) -> Self {
        Self {
            day: 1,
            hours_driven_today: 0.0,
            hours_on_duty_today: current_hours,
            window: RollingWindow::new(rules.cycle_days, current_hours),
            location: origin.into(),
            total_hours: current_hours,
        }
    }

    /// Sum of the rolling window.
    pub fn cycle_hours(&self) -> f64 {
        self.window.total()
    }

    /// Snapshot of the current totals as a schedule event.
    pub fn event(&self, status: EventStatus) -> ScheduleEvent {
        ScheduleEvent {
            day: self.day,
            time: clock_marker(self.hours_on_duty_today),
            status,
            location: self.location.clone(),
            hours_driven_today: self.hours_driven_today,
            hours_on_duty_today: self.hours_on_duty_today,
            cycle_hours: self.cycle_hours(),
        }
    }

    /// Inserts a mandatory rest: records the rest stop, closes the day with a
    /// `Rest Start`, opens the next day with fresh daily totals and emits
    /// `Rest End`.
    pub fn rest(mut self, reason: RestReason, rules: &HosRules) -> Step {
        let description = reason.describe(rules);
        warn!(
            day = self.day,
            location = %self.location,
            limit = %reason.limit,
            driven = self.hours_driven_today,
            on_duty = self.hours_on_duty_today,
            cycle = self.cycle_hours(),
            "inserting {}h rest",
            rules.required_rest_hours
        );

        let rest_stop = RestStop {
            day: self.day,
            location: self.location.clone(),
            duration_hours: rules.required_rest_hours,
            reason: description,
            kind: RestKind::Mandatory,
        };

        let mut events = vec![self.event(EventStatus::RestStart)];

        self.day += 1;
        self.window.shift();
        self.hours_driven_today = 0.0;
        self.hours_on_duty_today = 0.0;

        events.push(self.event(EventStatus::RestEnd));

        Step {
            state: self,
            events,
            rest_stop: Some(rest_stop),
        }
    }

    /// Drives `segment`, resting first if any limit would be exceeded.
    ///
    /// A segment is never split: after a rest it is driven in full even if it
    /// is longer than a fresh day allows.
    pub fn drive(self, segment: &RouteSegment, rules: &HosRules) -> Step {
        let hours = segment.duration_hours;
        let capacity = Capacity::remaining(&self, rules);

        let mut step = match capacity.check_drive(hours) {
            Some(limit) => self.rest(RestReason::before_drive(limit), rules),
            None => Step::unchanged(self),
        };

        let state = &mut step.state;
        state.hours_driven_today += hours;
        state.hours_on_duty_today += hours;
        state.window.add_today(hours);
        state.total_hours += hours;
        state.location = segment.destination.address.clone();

        debug!(
            day = state.day,
            to = %state.location,
            hours = hours,
            driven = state.hours_driven_today,
            on_duty = state.hours_on_duty_today,
            cycle = state.cycle_hours(),
            "segment driven"
        );

        let event = state.event(EventStatus::Driving);
        step.events.push(event);
        step
    }

    /// Performs a pickup or dropoff at the current location, resting first if
    /// the on-duty or cycle limit would be exceeded.
    pub fn stop(self, stop: &Stop, rules: &HosRules) -> Step {
        let hours = stop.duration_hours;
        let capacity = Capacity::remaining(&self, rules);

        let mut step = match capacity.check_stop(hours) {
            Some(limit) => self.rest(RestReason::before_stop(limit), rules),
            None => Step::unchanged(self),
        };

        let state = &mut step.state;
        state.hours_on_duty_today += hours;
        state.window.add_today(hours);
        state.total_hours += hours;

        debug!(
            day = state.day,
            kind = stop.kind.label(),
            hours = hours,
            on_duty = state.hours_on_duty_today,
            cycle = state.cycle_hours(),
            "stop performed"
        );

        let event = state.event(stop.kind.into());
        step.events.push(event);
        step
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{Location, StopKind};
    use crate::scheduler::limits::LimitKind;

    fn segment(to: &str, hours: f64) -> RouteSegment {
        RouteSegment {
            origin: Location::new("origin", 0.0, 0.0),
            destination: Location::new(to, 1.0, 1.0),
            distance_miles: hours * 55.0,
            duration_hours: hours,
            geometry: None,
        }
    }

    fn stop(kind: StopKind, hours: f64) -> Stop {
        Stop {
            kind,
            location: Location::new("stop", 0.0, 0.0),
            duration_hours: hours,
        }
    }

    // ── RollingWindow ─────────────────────────────────────────────────────────

    #[test]
    fn window_seed_lands_in_today() {
        let w = RollingWindow::new(8, 5.0);
        assert_eq!(w.len(), 8);
        assert_eq!(w.today(), 5.0);
        assert_eq!(w.total(), 5.0);
    }

    #[test]
    fn shift_keeps_length_and_drops_oldest() {
        let mut w = RollingWindow::new(3, 1.0);
        w.shift();
        w.add_today(2.0);
        w.shift();
        w.add_today(3.0);
        assert_eq!(w.buckets().collect::<Vec<_>>(), vec![3.0, 2.0, 1.0]);

        w.shift();
        assert_eq!(w.len(), 3);
        assert_eq!(w.buckets().collect::<Vec<_>>(), vec![0.0, 3.0, 2.0]);
        assert_eq!(w.total(), 5.0);
    }

    #[test]
    fn zero_day_window_still_has_today() {
        let w = RollingWindow::new(0, 2.0);
        assert_eq!(w.len(), 1);
        assert!(!w.is_empty());
        assert_eq!(w.today(), 2.0);
    }

    // ── Transitions ───────────────────────────────────────────────────────────

    #[test]
    fn drive_within_limits_emits_single_event() {
        let rules = HosRules::default();
        let state = SchedulerState::initial("Chicago", 2.0, &rules);
        let step = state.drive(&segment("Indianapolis", 3.0), &rules);

        assert!(step.rest_stop.is_none());
        assert_eq!(step.events.len(), 1);
        let ev = &step.events[0];
        assert_eq!(ev.status, EventStatus::Driving);
        assert_eq!(ev.location, "Indianapolis");
        assert_eq!(ev.hours_driven_today, 3.0);
        assert_eq!(ev.hours_on_duty_today, 5.0);
        assert_eq!(ev.cycle_hours, 5.0);
        assert_eq!(ev.time, "05:00");
        assert_eq!(step.state.total_hours, 5.0);
    }

    #[test]
    fn rest_resets_daily_totals_and_advances_day() {
        let rules = HosRules::default();
        let state = SchedulerState::initial("A", 0.0, &rules)
            .drive(&segment("B", 9.0), &rules)
            .state;
        let step = state.rest(RestReason::before_drive(LimitKind::Driving), &rules);

        assert_eq!(step.events.len(), 2);
        assert_eq!(step.events[0].status, EventStatus::RestStart);
        assert_eq!(step.events[0].day, 1);
        assert_eq!(step.events[0].hours_driven_today, 9.0);
        assert_eq!(step.events[1].status, EventStatus::RestEnd);
        assert_eq!(step.events[1].day, 2);
        assert_eq!(step.events[1].hours_driven_today, 0.0);
        assert_eq!(step.events[1].hours_on_duty_today, 0.0);
        // yesterday's hours still count toward the cycle
        assert_eq!(step.events[1].cycle_hours, 9.0);

        let rest = step.rest_stop.unwrap();
        assert_eq!(rest.day, 1);
        assert_eq!(rest.location, "B");
        assert_eq!(rest.duration_hours, 10.0);
        assert_eq!(rest.kind, RestKind::Mandatory);
    }

    #[test]
    fn drive_over_limit_rests_first() {
        let rules = HosRules::default();
        let state = SchedulerState::initial("A", 0.0, &rules)
            .drive(&segment("B", 8.0), &rules)
            .state;
        let step = state.drive(&segment("C", 4.0), &rules);

        let statuses: Vec<_> = step.events.iter().map(|e| e.status.clone()).collect();
        assert_eq!(
            statuses,
            vec![EventStatus::RestStart, EventStatus::RestEnd, EventStatus::Driving]
        );
        assert_eq!(step.state.day, 2);
        assert_eq!(step.state.hours_driven_today, 4.0);
        assert_eq!(step.state.cycle_hours(), 12.0);
        assert!(step.rest_stop.unwrap().reason.contains("11-hour driving"));
    }

    #[test]
    fn stop_adds_on_duty_but_not_driving() {
        let rules = HosRules::default();
        let state = SchedulerState::initial("A", 0.0, &rules)
            .drive(&segment("B", 3.0), &rules)
            .state;
        let step = state.stop(&stop(StopKind::Pickup, 1.0), &rules);

        assert!(step.rest_stop.is_none());
        let ev = &step.events[0];
        assert_eq!(ev.status, EventStatus::Pickup);
        assert_eq!(ev.location, "B");
        assert_eq!(ev.hours_driven_today, 3.0);
        assert_eq!(ev.hours_on_duty_today, 4.0);
        assert_eq!(ev.cycle_hours, 4.0);
    }

    #[test]
    fn stop_past_on_duty_window_rests_first() {
        let rules = HosRules::default();
        let state = SchedulerState::initial("A", 6.0, &rules)
            .drive(&segment("B", 7.5), &rules)
            .state;
        // 13.5h on duty; a 1h dropoff would reach 14.5h
        let step = state.stop(&stop(StopKind::Dropoff, 1.0), &rules);

        let rest = step.rest_stop.unwrap();
        assert!(rest.reason.contains("before stop"));
        assert!(rest.reason.contains("14-hour on-duty"));
        assert_eq!(step.events.last().unwrap().status, EventStatus::Dropoff);
        assert_eq!(step.state.hours_on_duty_today, 1.0);
        assert_eq!(step.state.day, 2);
    }

    #[test]
    fn transitions_do_not_touch_the_input_state() {
        let rules = HosRules::default();
        let state = SchedulerState::initial("A", 1.0, &rules);
        let before = state.clone();
        let _ = state.clone().drive(&segment("B", 12.0), &rules);
        assert_eq!(state, before);
    }
}
