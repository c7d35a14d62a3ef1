/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use eld_planner::config::HosRules;
use eld_planner::eld::{DurationWeightedAllocator, LogRenderer, OrdinalAllocator};
use eld_planner::plan::HosPlan;
use eld_planner::route::Route;
use eld_planner::trip::{PlanRequest, TripPlanner};

// ── CLI argument definition ───────────────────────────────────────────────────

/// Hours-of-service trip planner with ELD log rendering.
///
/// Example:
///   eld-planner plan --route demos/route.yaml --current-hours 12 --pretty
#[derive(Debug, Parser)]
#[command(
    name = "eld-planner",
    about = "HOS trip planner and ELD log renderer",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Schedule a route and render its daily logs.
    Plan {
        /// Route file (YAML or JSON).
        #[arg(short = 'r', long = "route")]
        route: PathBuf,

        /// Hours already used in the current cycle.
        #[arg(short = 'c', long = "current-hours", default_value_t = 0.0)]
        current_hours: f64,

        /// YAML rule-set file; defaults to 70-hour/8-day property-carrying.
        #[arg(long = "rules")]
        rules: Option<PathBuf>,

        #[arg(short = 'a', long = "allocator", value_enum, default_value_t = Allocator::Ordinal)]
        allocator: Allocator,

        /// Write JSON here instead of stdout.
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,

        #[arg(long = "pretty", default_value_t = false)]
        pretty: bool,
    },

    /// Render daily logs for an existing HOS plan (JSON, as written by `plan`
    /// or just its `hos_plan` object).
    Render {
        #[arg(short = 'p', long = "plan")]
        plan: PathBuf,

        #[arg(short = 'a', long = "allocator", value_enum, default_value_t = Allocator::Ordinal)]
        allocator: Allocator,

        #[arg(long = "pretty", default_value_t = false)]
        pretty: bool,
    },
}

/// How events are placed on the 96-interval grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Allocator {
    /// Evenly by position in the day.
    Ordinal,
    /// By on-duty time elapsed.
    DurationWeighted,
}

impl Allocator {
    fn renderer(self) -> LogRenderer {
        match self {
            Allocator::Ordinal => LogRenderer::with_allocator(OrdinalAllocator),
            Allocator::DurationWeighted => LogRenderer::with_allocator(DurationWeightedAllocator),
        }
    }

    fn planner(self, rules: HosRules) -> TripPlanner {
        match self {
            Allocator::Ordinal => TripPlanner::with_allocator(rules, OrdinalAllocator),
            Allocator::DurationWeighted => {
                TripPlanner::with_allocator(rules, DurationWeightedAllocator)
            }
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Level is controlled by RUST_LOG (e.g. RUST_LOG=debug).  Logs go to
    // stderr; stdout carries only JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Plan {
            route,
            current_hours,
            rules,
            allocator,
            output,
            pretty,
        } => {
            info!(
                route = %route.display(),
                current_hours = current_hours,
                rules = ?rules,
                allocator = ?allocator,
                "Configuration"
            );

            let rules = match &rules {
                Some(path) => HosRules::load_from_file(path)?,
                None => {
                    warn!("No rules file provided, using 70-hour/8-day property-carrying rules");
                    HosRules::property_carrying()
                }
            };

            let route = Route::load_from_file(&route)?;
            let request = PlanRequest::new(route, current_hours);
            let trip = allocator
                .planner(rules)
                .plan(&request)
                .context("planning request rejected")?;

            write_json(&trip, pretty, output.as_deref())
        }

        Command::Render {
            plan,
            allocator,
            pretty,
        } => {
            let raw = fs::read_to_string(&plan)
                .with_context(|| format!("cannot read HOS plan '{}'", plan.display()))?;
            let document: PlanDocument = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse HOS plan '{}'", plan.display()))?;

            let sheets = allocator.renderer().render(document.hos_plan());
            write_json(&sheets, pretty, None)
        }
    }
}

/// `render` accepts a bare HOS plan or the full output of `plan`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PlanDocument {
    Trip { hos_plan: HosPlan },
    Plan(HosPlan),
}

impl PlanDocument {
    fn hos_plan(&self) -> &HosPlan {
        match self {
            PlanDocument::Trip { hos_plan } | PlanDocument::Plan(hos_plan) => hos_plan,
        }
    }
}

fn write_json<T: Serialize>(value: &T, pretty: bool, output: Option<&Path>) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("failed to serialise output")?;

    match output {
        Some(path) => {
            fs::write(path, json + "\n")
                .with_context(|| format!("cannot write output '{}'", path.display()))?;
            info!("Output written to: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").context("cannot write to stdout")?;
        }
    }
    Ok(())
}
