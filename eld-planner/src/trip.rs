/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Trip planning: request validation, scheduling and log rendering in one
//! call.
//!
//! ```text
//! PlanRequest ──validate()──► HosScheduler ──► HosPlan ──► LogRenderer ──► TripPlan
//! ```

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::HosRules;
use crate::eld::{IntervalAllocator, LogRenderer, LogSheet};
use crate::error::PlanError;
use crate::plan::HosPlan;
use crate::route::Route;
use crate::scheduler::HosScheduler;

// ── Request ───────────────────────────────────────────────────────────────────

/// A route plus the hours the driver has already used in the current cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub route: Route,
    pub current_hours: f64,
}

fn valid_hours(hours: f64) -> bool {
    hours.is_finite() && hours >= 0.0
}

impl PlanRequest {
    pub fn new(route: Route, current_hours: f64) -> Self {
        Self {
            route,
            current_hours,
        }
    }

    /// Rejects requests the scheduler must never see.  The first problem
    /// found is reported.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.route.segments.is_empty() {
            return Err(PlanError::EmptyRoute);
        }
        if !valid_hours(self.current_hours) {
            return Err(PlanError::InvalidCurrentHours(self.current_hours));
        }
        if let Some((index, s)) = self
            .route
            .segments
            .iter()
            .enumerate()
            .find(|(_, s)| !valid_hours(s.duration_hours))
        {
            return Err(PlanError::InvalidSegmentDuration {
                index,
                hours: s.duration_hours,
            });
        }
        if let Some((index, s)) = self
            .route
            .stops
            .iter()
            .enumerate()
            .find(|(_, s)| !valid_hours(s.duration_hours))
        {
            return Err(PlanError::InvalidStopDuration {
                index,
                hours: s.duration_hours,
            });
        }
        if let Some((index, f)) = self
            .route
            .fuel_stops
            .iter()
            .enumerate()
            .find(|(_, f)| !valid_hours(f.duration_hours))
        {
            return Err(PlanError::InvalidFuelStopDuration {
                index,
                hours: f.duration_hours,
            });
        }
        Ok(())
    }
}

// ── Response ──────────────────────────────────────────────────────────────────

/// The input route echoed back with its totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    #[serde(flatten)]
    pub route: Route,
    pub total_distance: f64,
    pub total_driving_duration: f64,
    pub total_duration: f64,
}

impl From<&Route> for RouteReport {
    fn from(route: &Route) -> Self {
        Self {
            route: route.clone(),
            total_distance: route.total_distance(),
            total_driving_duration: route.total_driving_duration(),
            total_duration: route.total_duration(),
        }
    }
}

/// Everything produced for one trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripPlan {
    pub route: RouteReport,
    pub hos_plan: HosPlan,
    pub eld_logs: Vec<LogSheet>,
}

// ── TripPlanner ───────────────────────────────────────────────────────────────

/// Validates, schedules and renders.  Stateless between calls.
#[derive(Debug, Default)]
pub struct TripPlanner {
    scheduler: HosScheduler,
    renderer: LogRenderer,
}

impl TripPlanner {
    /// A planner for `rules` using the default ordinal log layout.
    pub fn new(rules: HosRules) -> Self {
        Self {
            scheduler: HosScheduler::new(rules),
            renderer: LogRenderer::new(),
        }
    }

    pub fn with_allocator(rules: HosRules, allocator: impl IntervalAllocator + 'static) -> Self {
        Self {
            scheduler: HosScheduler::new(rules),
            renderer: LogRenderer::with_allocator(allocator),
        }
    }

    pub fn plan(&self, request: &PlanRequest) -> Result<TripPlan, PlanError> {
        if let Err(e) = request.validate() {
            warn!(error = %e, "planning request rejected");
            return Err(e);
        }

        let route = &request.route;
        info!(
            segments = route.segments.len(),
            distance = route.total_distance(),
            current_hours = request.current_hours,
            "planning trip"
        );

        let hos_plan = self.scheduler.schedule_route(route, request.current_hours);
        let eld_logs = self.renderer.render(&hos_plan);

        info!(
            days = hos_plan.total_trip_days,
            rests = hos_plan.rest_count(),
            rest_hours = hos_plan.total_rest_hours(),
            sheets = eld_logs.len(),
            "trip planned"
        );

        Ok(TripPlan {
            route: RouteReport::from(route),
            hos_plan,
            eld_logs,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
