// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;
use minkowski_lorentz::{Boost, Velocity};

use crate::grid::{grid_angle, grid_lines};
use crate::{Actor, GridConfig, SegmentPath};

/// Everything drawn for one actor at one boost.
///
/// Points use `x` for position and `y` for time, both in the boosted frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceDataset {
    /// The boost this dataset was computed for.
    pub boost: Velocity,
    /// Worldline samples, in proper-time order.
    pub worldline: Vec<Point>,
    /// Tilt of the grid lines, in radians.
    pub grid_angle: f64,
    /// Position and simultaneity grid lines.
    pub grid: SegmentPath,
}

/// Worldline samples of `actor` as seen after `boost`.
///
/// When the actor is `positive_only`, samples before lab time zero are left
/// out rather than padded, so the result can be shorter than `dot_count`.
#[must_use]
pub fn worldline(actor: &Actor, boost: &Boost) -> Vec<Point> {
    actor
        .proper_times()
        .map(|tau| actor.lab_event(tau))
        .filter(|e| e.t >= 0.0 || !actor.positive_only())
        .map(|e| {
            let e = boost.apply(e);
            Point::new(e.x, e.t)
        })
        .collect()
}

/// Computes the dataset for `actor` under the boost `u`.
///
/// `extent` is the half-length of each grid line; see
/// [`GridConfig::extent`].
#[must_use]
pub fn trace_dataset(actor: &Actor, u: Velocity, extent: f64, grid: &GridConfig) -> TraceDataset {
    let angle = grid_angle(actor.velocity(), u);
    TraceDataset {
        boost: u,
        worldline: worldline(actor, &Boost::new(u)),
        grid_angle: angle,
        grid: grid_lines(angle, extent, grid),
    }
}
