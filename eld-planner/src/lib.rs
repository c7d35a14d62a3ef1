/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! ELD planner – hours-of-service trip scheduling and daily log rendering.
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── config/      – HosRules and its YAML loader
//! ├── route.rs     – route input: segments, stops, fuel stops
//! ├── plan.rs      – scheduler output: events, rest stops, HosPlan
//! ├── scheduler/   – duty-status scheduler (limits + state transitions)
//! ├── eld/         – ELD log renderer (status rows, allocators, grid)
//! ├── error.rs     – PlanError request validation taxonomy
//! └── trip.rs      – TripPlanner: validate → schedule → render
//! ```

pub mod config;
pub mod eld;
pub mod error;
pub mod plan;
pub mod route;
pub mod scheduler;
pub mod trip;
