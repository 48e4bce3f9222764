// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hooks for observing a diagram build.
//!
//! The core does no I/O of its own. Hosts that want logs, progress, or
//! counters pass a [`BuildTrace`] to
//! [`Diagram::build_with_trace`](crate::Diagram::build_with_trace).

use minkowski_lorentz::Velocity;

use crate::{Actor, Diagram, TraceDataset};

/// Summary of a build, reported before any dataset is generated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildPlan {
    /// Number of actors.
    pub actor_count: usize,
    /// Number of boost steps.
    pub step_count: usize,
    /// Total slots in the trace table.
    pub slot_count: usize,
    /// Half-length of every grid line.
    pub grid_extent: f64,
}

/// One generated dataset, as reported to a [`BuildTrace`].
#[derive(Clone, Copy, Debug)]
pub struct DatasetEvent<'a> {
    /// Index of the actor.
    pub actor_index: usize,
    /// The actor.
    pub actor: &'a Actor,
    /// Boost step.
    pub step: usize,
    /// Boost velocity at `step`.
    pub velocity: Velocity,
    /// The generated dataset.
    pub dataset: &'a TraceDataset,
}

/// A callback sink for diagram builds.
///
/// All methods have empty defaults, so sinks only implement what they need.
pub trait BuildTrace {
    /// Called once validation has passed, before generation starts.
    fn begin(&mut self, plan: &BuildPlan) {
        let _ = plan;
    }

    /// Called after each `(actor, step)` dataset is complete.
    fn dataset(&mut self, event: &DatasetEvent<'_>) {
        let _ = event;
    }

    /// Called with the finished diagram.
    fn finish(&mut self, diagram: &Diagram) {
        let _ = diagram;
    }
}

/// A sink that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl BuildTrace for NoTrace {}

/// Counts what a build produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Datasets generated.
    pub datasets: usize,
    /// Worldline points emitted.
    pub worldline_points: usize,
    /// Worldline samples left out by `positive_only`.
    pub omitted_points: usize,
    /// Grid-line segments emitted.
    pub grid_segments: usize,
}

impl BuildTrace for BuildStats {
    fn dataset(&mut self, event: &DatasetEvent<'_>) {
        let emitted = event.dataset.worldline.len();
        self.datasets += 1;
        self.worldline_points += emitted;
        self.omitted_points += event.actor.dot_count().saturating_sub(emitted);
        self.grid_segments += event.dataset.grid.segments().count();
    }
}
