/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Hours-of-service rule set and its YAML loader.
//!
//! The scheduler never reads module-level constants: every threshold lives in
//! an immutable [`HosRules`] value handed to
//! [`HosScheduler::new`](crate::scheduler::HosScheduler::new).
//!
//! The expected YAML structure is:
//! ```yaml
//! rules:
//!   max_driving_hours: 11.0
//!   max_on_duty_hours: 14.0
//!   max_cycle_hours: 70.0
//!   cycle_days: 8
//!   required_rest_hours: 10.0
//! ```

use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

// ── Private YAML deserialization types ────────────────────────────────────────

/// Top-level wrapper that maps directly onto the YAML file layout.
#[derive(Debug, Deserialize)]
struct RulesFile {
    #[serde(default)]
    rules: Option<RulesEntry>,
}

/// Rule fields as they appear in the YAML file.
///
/// Every field is optional so partial files are accepted; missing values fall
/// back to the property-carrying defaults.
#[derive(Debug, Default, Deserialize)]
struct RulesEntry {
    max_driving_hours: Option<f64>,
    max_on_duty_hours: Option<f64>,
    max_cycle_hours: Option<f64>,
    cycle_days: Option<usize>,
    required_rest_hours: Option<f64>,
}

// ── Public data structures ────────────────────────────────────────────────────

/// Limits applied by the duty-status scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HosRules {
    /// Driving hours allowed after a full rest (11-hour rule).
    pub max_driving_hours: f64,
    /// On-duty window after coming on duty (14-hour rule).
    pub max_on_duty_hours: f64,
    /// On-duty hours allowed over the rolling cycle (70-hour rule).
    pub max_cycle_hours: f64,
    /// Number of daily buckets in the rolling cycle (8 days).
    pub cycle_days: usize,
    /// Off-duty period inserted whenever a limit would be exceeded.
    pub required_rest_hours: f64,
}

impl HosRules {
    /// The property-carrying driver rule set: 11 / 14 / 70-in-8 / 10.
    pub const fn property_carrying() -> Self {
        Self {
            max_driving_hours: 11.0,
            max_on_duty_hours: 14.0,
            max_cycle_hours: 70.0,
            cycle_days: 8,
            required_rest_hours: 10.0,
        }
    }

    /// Parses `path` and returns the rule set it describes.
    ///
    /// A file without a `rules:` section (or with an empty one) yields
    /// [`HosRules::property_carrying`].
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, the YAML is structurally
    /// invalid, or the resulting rules fail [`validate`](Self::validate).
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading HOS rules from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open rules file: {}", path.display()))?;

        let file: RulesFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML file: {}", path.display()))?;

        let entry = file.rules.unwrap_or_else(|| {
            warn!("No rules section found in configuration file, using property-carrying defaults");
            RulesEntry::default()
        });

        let defaults = Self::property_carrying();
        let rules = Self {
            max_driving_hours: entry.max_driving_hours.unwrap_or(defaults.max_driving_hours),
            max_on_duty_hours: entry.max_on_duty_hours.unwrap_or(defaults.max_on_duty_hours),
            max_cycle_hours: entry.max_cycle_hours.unwrap_or(defaults.max_cycle_hours),
            cycle_days: entry.cycle_days.unwrap_or(defaults.cycle_days),
            required_rest_hours: entry
                .required_rest_hours
                .unwrap_or(defaults.required_rest_hours),
        };

        rules
            .validate()
            .with_context(|| format!("Invalid rules in {}", path.display()))?;

        debug!(
            driving = rules.max_driving_hours,
            on_duty = rules.max_on_duty_hours,
            cycle = rules.max_cycle_hours,
            cycle_days = rules.cycle_days,
            rest = rules.required_rest_hours,
            "HOS rules loaded"
        );

        Ok(rules)
    }

    /// Checks that every limit is a positive finite number and that the cycle
    /// has at least one day.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("max_driving_hours", self.max_driving_hours),
            ("max_on_duty_hours", self.max_on_duty_hours),
            ("max_cycle_hours", self.max_cycle_hours),
            ("required_rest_hours", self.required_rest_hours),
        ] {
            ensure!(
                value.is_finite() && value > 0.0,
                "{name} must be a positive number of hours, got {value}"
            );
        }
        ensure!(self.cycle_days > 0, "cycle_days must be at least 1");
        Ok(())
    }
}

impl Default for HosRules {
    fn default() -> Self {
        Self::property_carrying()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
