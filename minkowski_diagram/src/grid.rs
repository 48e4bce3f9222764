// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid lines for a moving frame, and the light-ray reference.

use kurbo::{Line, Rect};
use minkowski_lorentz::{Velocity, add_velocity};

use crate::{GridConfig, SegmentPath};

/// Tilt of the grid drawn for an actor moving at `actor` under boost `boost`.
///
/// This is `atan` of the relativistic sum of the two velocities, in radians.
#[must_use]
pub fn grid_angle(actor: Velocity, boost: Velocity) -> f64 {
    libm::atan(add_velocity(actor, boost).get())
}

/// Builds both grid-line families for a frame tilted by `angle`.
///
/// The first `grid.segments` lines are lines of constant position, running
/// from time `-extent` to `extent`. The next `grid.segments` are lines of
/// constant time, running from position `-extent` to `extent`. Every line is
/// its own segment.
#[must_use]
pub fn grid_lines(angle: f64, extent: f64, grid: &GridConfig) -> SegmentPath {
    let slope = libm::tan(angle);
    let half = (grid.segments / 2) as f64;
    let offsets = (0..grid.segments).map(move |k| (k as f64 - half) * grid.spacing);

    let position_lines = offsets
        .clone()
        .map(|o| Line::new((o - extent * slope, -extent), (o + extent * slope, extent)));
    let simultaneity_lines =
        offsets.map(|o| Line::new((-extent, o - extent * slope), (extent, o + extent * slope)));

    let mut path = SegmentPath::with_line_capacity(2 * grid.segments);
    for line in position_lines.chain(simultaneity_lines) {
        path.push_line(line);
    }
    path
}

/// The two light rays through the origin, spanning `scale` times `bounds`.
#[must_use]
pub fn light_rays(bounds: Rect, scale: f64) -> SegmentPath {
    let (x0, x1) = (scale * bounds.x0, scale * bounds.x1);
    let (y0, y1) = (scale * bounds.y0, scale * bounds.y1);
    [Line::new((x0, y0), (x1, y1)), Line::new((x1, y0), (x0, y1))]
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use kurbo::Point;

    use super::*;

    #[test]
    fn rest_frame_grid_is_axis_aligned() {
        let grid = GridConfig::default();
        let path = grid_lines(grid_angle(Velocity::ZERO, Velocity::ZERO), 20.0, &grid);
        assert_eq!(path.len(), 2 * 42 * 3);

        let lines: Vec<Line> = path.segments().collect();
        assert_eq!(lines.len(), 84);

        // Position lines are vertical, offsets run -21..=20.
        assert_eq!(lines[0], Line::new((-21.0, -20.0), (-21.0, 20.0)));
        assert_eq!(lines[41], Line::new((20.0, -20.0), (20.0, 20.0)));
        // Simultaneity lines are horizontal.
        assert_eq!(lines[42], Line::new((-20.0, -21.0), (20.0, -21.0)));
        assert_eq!(lines[83], Line::new((-20.0, 20.0), (20.0, 20.0)));
    }

    #[test]
    fn tilted_grid_follows_the_combined_velocity() {
        let half = Velocity::new(0.5).unwrap();
        let angle = grid_angle(half, half);
        assert!((libm::tan(angle) - 0.8).abs() < 1e-12);

        let grid = GridConfig {
            segments: 2,
            ..GridConfig::default()
        };
        let path = grid_lines(angle, 10.0, &grid);
        let lines: Vec<Line> = path.segments().collect();
        assert_eq!(lines.len(), 4);

        // Constant-position line through offset -1: x = -1 + 0.8 t.
        let p = lines[0];
        assert!((p.p0.x - (-1.0 - 8.0)).abs() < 1e-9);
        assert!((p.p1.x - (-1.0 + 8.0)).abs() < 1e-9);
        assert_eq!((p.p0.y, p.p1.y), (-10.0, 10.0));

        // Constant-time line through offset 0: t = 0.8 x.
        let s = lines[3];
        assert_eq!((s.p0.x, s.p1.x), (-10.0, 10.0));
        assert!((s.p0.y + 8.0).abs() < 1e-9);
        assert!((s.p1.y - 8.0).abs() < 1e-9);
    }

    #[test]
    fn light_rays_cross_at_the_origin() {
        let rays = light_rays(Rect::new(-10.0, -10.0, 10.0, 10.0), 2.0);
        let lines: Vec<Line> = rays.segments().collect();
        assert_eq!(
            lines,
            [
                Line::new((-20.0, -20.0), (20.0, 20.0)),
                Line::new((20.0, -20.0), (-20.0, 20.0)),
            ]
        );
        for line in lines {
            assert_eq!(line.midpoint(), Point::ZERO);
        }
    }
}
