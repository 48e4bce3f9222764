// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Line, Point};

/// A sequence of points where `None` marks a break between disjoint runs.
///
/// This is the layout plotting front ends expect for "many separate lines in
/// one trace": consecutive points are joined, and a `None` lifts the pen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmentPath {
    points: Vec<Option<Point>>,
}

impl SegmentPath {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates an empty path with room for `lines` separate lines.
    #[must_use]
    pub fn with_line_capacity(lines: usize) -> Self {
        Self {
            points: Vec::with_capacity(lines * 3),
        }
    }

    /// Appends `line` as its own disjoint segment.
    pub fn push_line(&mut self, line: Line) {
        self.points.push(Some(line.p0));
        self.points.push(Some(line.p1));
        self.points.push(None);
    }

    /// Returns the raw points, breaks included.
    #[must_use]
    pub fn points(&self) -> &[Option<Point>] {
        &self.points
    }

    /// Returns the number of entries, breaks included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the path has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over every drawn segment, skipping across breaks.
    pub fn segments(&self) -> impl Iterator<Item = Line> + '_ {
        self.points
            .split(Option::is_none)
            .flat_map(|run| run.windows(2))
            .filter_map(|pair| match pair {
                [Some(p0), Some(p1)] => Some(Line::new(*p0, *p1)),
                _ => None,
            })
    }

    /// X column, with `None` at every break.
    #[must_use]
    pub fn xs(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.map(|p| p.x)).collect()
    }

    /// Y column, with `None` at every break.
    #[must_use]
    pub fn ys(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.map(|p| p.y)).collect()
    }
}

impl FromIterator<Line> for SegmentPath {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        let mut path = Self::new();
        for line in iter {
            path.push_line(line);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;
    use std::vec::Vec;

    use super::*;

    #[test]
    fn lines_are_separated_by_breaks() {
        let path: SegmentPath = [
            Line::new((0.0, 0.0), (1.0, 1.0)),
            Line::new((2.0, 0.0), (3.0, 1.0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(path.len(), 6);
        assert_eq!(path.points()[2], None);
        assert_eq!(path.points()[5], None);
        assert_eq!(
            path.xs(),
            vec![Some(0.0), Some(1.0), None, Some(2.0), Some(3.0), None]
        );
        assert_eq!(
            path.ys(),
            vec![Some(0.0), Some(1.0), None, Some(0.0), Some(1.0), None]
        );
    }

    #[test]
    fn segments_never_bridge_a_break() {
        let mut path = SegmentPath::with_line_capacity(2);
        path.push_line(Line::new((0.0, 0.0), (1.0, 0.0)));
        path.push_line(Line::new((5.0, 5.0), (6.0, 5.0)));

        let segs: Vec<Line> = path.segments().collect();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].p1, Point::new(1.0, 0.0));
        assert_eq!(segs[1].p0, Point::new(5.0, 5.0));
    }

    #[test]
    fn empty_path_has_no_segments() {
        let path = SegmentPath::new();
        assert!(path.is_empty());
        assert_eq!(path.segments().count(), 0);
    }
}
