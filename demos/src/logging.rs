// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structured logging for diagram builds.

use minkowski_diagram::{BuildPlan, BuildTrace, DatasetEvent, Diagram};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Installs a global `fmt` subscriber writing to stderr.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
}

/// Forwards build callbacks to `tracing`.
///
/// The plan and the finished diagram are logged at `info`; every dataset is
/// logged at `debug`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl BuildTrace for TracingSink {
    fn begin(&mut self, plan: &BuildPlan) {
        info!(
            actors = plan.actor_count,
            steps = plan.step_count,
            slots = plan.slot_count,
            grid_extent = plan.grid_extent,
            "building diagram"
        );
    }

    fn dataset(&mut self, event: &DatasetEvent<'_>) {
        debug!(
            actor = event.actor.name(),
            step = event.step,
            u = event.velocity.get(),
            points = event.dataset.worldline.len(),
            omitted = event.actor.dot_count() - event.dataset.worldline.len(),
            grid_angle = event.dataset.grid_angle,
            "dataset ready"
        );
    }

    fn finish(&mut self, diagram: &Diagram) {
        let info = diagram.debug_info();
        info!(
            slots = info.slot_count,
            worldline_points = info.worldline_points,
            active_step = info.active_step,
            "diagram built"
        );
    }
}
