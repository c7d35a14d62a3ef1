/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Route data consumed by the duty-status scheduler.
//!
//! The route-acquisition subsystem (geocoding, distance lookup, fuel-stop
//! placement) lives outside this crate.  What it hands over is modelled here:
//!
//! ```text
//! route acquisition ──► Route { segments, stops, fuel_stops } ──► HosScheduler
//! ```
//!
//! Stops are associated **positionally** with segments: `stops[i]` is
//! considered only after `segments[i]` has been driven.  `stops` may be shorter
//! than `segments`.
//!
//! Field names follow the route wire format (`from`, `to`, `duration`, `type`,
//! `estimated_location`) so route files produced upstream load unchanged.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

// ── Location ──────────────────────────────────────────────────────────────────

/// A geocoded point: display address plus coordinates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            address: address.into(),
            latitude,
            longitude,
        }
    }
}

// ── RouteSegment ──────────────────────────────────────────────────────────────

/// One leg of driving between two locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    #[serde(rename = "from")]
    pub origin: Location,

    #[serde(rename = "to")]
    pub destination: Location,

    /// Distance in miles.  Informational only; the scheduler uses hours.
    #[serde(rename = "distance", default)]
    pub distance_miles: f64,

    /// Driving time in hours.
    #[serde(rename = "duration")]
    pub duration_hours: f64,

    /// Map geometry from route acquisition, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<serde_json::Value>,
}

// ── Stop ──────────────────────────────────────────────────────────────────────

/// On-duty, not-driving activity performed at a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopKind {
    Pickup,
    Dropoff,
}

impl StopKind {
    /// Capitalised label used for the schedule event emitted at this stop.
    pub fn label(self) -> &'static str {
        match self {
            StopKind::Pickup => "Pickup",
            StopKind::Dropoff => "Dropoff",
        }
    }
}

/// A pickup or dropoff that follows the segment with the same index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    #[serde(rename = "type")]
    pub kind: StopKind,

    pub location: Location,

    /// Time spent at the stop in hours.
    #[serde(rename = "duration")]
    pub duration_hours: f64,
}

// ── FuelStop ──────────────────────────────────────────────────────────────────

/// A refuelling break.
///
/// Fuel stops carry only a descriptive location: they are not placed in time
/// by the scheduler and end up in the rest-stop list verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelStop {
    #[serde(rename = "estimated_location")]
    pub location: String,

    #[serde(rename = "duration")]
    pub duration_hours: f64,

    /// Miles from the trip origin at which the stop is expected.
    #[serde(default)]
    pub distance_from_start: f64,
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// Ordered driving segments with their interleaved stops.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Route {
    pub segments: Vec<RouteSegment>,

    #[serde(default)]
    pub stops: Vec<Stop>,

    #[serde(default)]
    pub fuel_stops: Vec<FuelStop>,
}

impl Route {
    /// Parses a route file.  YAML and JSON are both accepted.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not describe a route.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading route from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open route file: {}", path.display()))?;

        let route: Route = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse route file: {}", path.display()))?;

        debug!(
            segments = route.segments.len(),
            stops = route.stops.len(),
            fuel_stops = route.fuel_stops.len(),
            "route loaded"
        );

        Ok(route)
    }

    /// Sum of segment distances in miles.
    pub fn total_distance(&self) -> f64 {
        self.segments.iter().map(|s| s.distance_miles).sum()
    }

    /// Sum of segment driving times in hours.
    pub fn total_driving_duration(&self) -> f64 {
        self.segments.iter().map(|s| s.duration_hours).sum()
    }

    /// Driving time plus every stop and fuel stop, in hours.
    pub fn total_duration(&self) -> f64 {
        self.total_driving_duration()
            + self.stops.iter().map(|s| s.duration_hours).sum::<f64>()
            + self.fuel_stops.iter().map(|f| f.duration_hours).sum::<f64>()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ROUTE_YAML: &str = r#"
segments:
  - from: { address: "Chicago, IL", latitude: 41.88, longitude: -87.63 }
    to: { address: "Indianapolis, IN", latitude: 39.77, longitude: -86.16 }
    distance: 183.0
    duration: 3.0
  - from: { address: "Indianapolis, IN", latitude: 39.77, longitude: -86.16 }
    to: { address: "Nashville, TN", latitude: 36.16, longitude: -86.78 }
    distance: 287.0
    duration: 4.5
stops:
  - type: pickup
    location: { address: "Indianapolis, IN", latitude: 39.77, longitude: -86.16 }
    duration: 1.0
  - type: dropoff
    location: { address: "Nashville, TN", latitude: 36.16, longitude: -86.78 }
    duration: 1.0
fuel_stops:
  - estimated_location: "Along route to Nashville, TN"
    duration: 0.5
    distance_from_start: 300.0
"#;

    fn route_file(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn load_route_yaml_uses_wire_field_names() {
        let f = route_file(ROUTE_YAML);
        let route = Route::load_from_file(f.path()).unwrap();

        assert_eq!(route.segments.len(), 2);
        assert_eq!(route.segments[0].origin.address, "Chicago, IL");
        assert_eq!(route.segments[1].destination.address, "Nashville, TN");
        assert_eq!(route.segments[1].duration_hours, 4.5);
        assert_eq!(route.stops[0].kind, StopKind::Pickup);
        assert_eq!(route.stops[1].kind, StopKind::Dropoff);
        assert_eq!(route.fuel_stops[0].location, "Along route to Nashville, TN");
    }

    #[test]
    fn load_route_json() {
        let json = r#"{"segments": [{"from": {"address": "A", "latitude": 0.0, "longitude": 0.0},
            "to": {"address": "B", "latitude": 1.0, "longitude": 1.0}, "duration": 2.0}]}"#;
        let f = route_file(json);
        let route = Route::load_from_file(f.path()).unwrap();
        assert_eq!(route.segments.len(), 1);
        assert!(route.stops.is_empty());
        assert!(route.fuel_stops.is_empty());
        assert_eq!(route.segments[0].distance_miles, 0.0);
    }

    #[test]
    fn geometry_is_carried_through_and_omitted_when_absent() {
        let json = r#"{"segments": [{"from": {"address": "A", "latitude": 0.0, "longitude": 0.0},
            "to": {"address": "B", "latitude": 1.0, "longitude": 1.0}, "duration": 2.0,
            "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}}],
            "fuel_stops": [{"type": "fuel", "estimated_location": "Along route to B", "duration": 0.5}],
            "total_distance": 120.0, "total_duration": 2.5}"#;
        let route = Route::load_from_file(route_file(json).path()).unwrap();

        let geometry = route.segments[0].geometry.as_ref().unwrap();
        assert_eq!(geometry["type"], "LineString");
        assert_eq!(route.fuel_stops[0].location, "Along route to B");

        let echoed = serde_json::to_value(&route.segments[0]).unwrap();
        assert_eq!(echoed["geometry"]["coordinates"][1][0], 1.0);

        let plain = route_file(ROUTE_YAML);
        let plain = Route::load_from_file(plain.path()).unwrap();
        assert!(plain.segments[0].geometry.is_none());
        let echoed = serde_json::to_value(&plain.segments[0]).unwrap();
        assert!(echoed.get("geometry").is_none());
    }

    #[test]
    fn missing_route_file_returns_error() {
        assert!(Route::load_from_file(Path::new("/nonexistent/route.yaml")).is_err());
    }

    #[test]
    fn unknown_stop_type_is_rejected() {
        let yaml = r#"
segments: []
stops:
  - type: lunch
    location: { address: "X", latitude: 0.0, longitude: 0.0 }
    duration: 1.0
"#;
        let f = route_file(yaml);
        assert!(Route::load_from_file(f.path()).is_err());
    }

    #[test]
    fn totals_include_stops_and_fuel() {
        let f = route_file(ROUTE_YAML);
        let route = Route::load_from_file(f.path()).unwrap();
        assert!((route.total_distance() - 470.0).abs() < 1e-9);
        assert!((route.total_driving_duration() - 7.5).abs() < 1e-9);
        assert!((route.total_duration() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn stop_kind_labels_are_capitalised() {
        assert_eq!(StopKind::Pickup.label(), "Pickup");
        assert_eq!(StopKind::Dropoff.label(), "Dropoff");
    }
}
