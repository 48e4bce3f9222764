// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A JSON-ready scene in the shape plotting front ends expect.
//!
//! Each trace is a pair of `x`/`y` columns where `null` breaks the line, and
//! the slider is a list of per-step visibility masks.

use kurbo::Point;
use minkowski_diagram::{ActorStyle, Diagram, SegmentPath, SlotTrace};
use peniko::Color;
use serde::Serialize;

/// Color of the light-ray reference trace.
const LIGHT_RAY_COLOR: Color = Color::from_rgba8(255, 200, 0, 255);

/// A whole diagram, ready to hand to a plotting front end.
#[derive(Clone, Debug, Serialize)]
pub struct Scene {
    /// Title shown before the slider moves.
    pub title: String,
    /// `[xmin, xmax]`.
    pub x_range: [f64; 2],
    /// `[ymin, ymax]`.
    pub y_range: [f64; 2],
    /// Every trace, in slot order.
    pub traces: Vec<SceneTrace>,
    /// The boost slider.
    pub slider: SceneSlider,
}

/// One drawable trace.
#[derive(Clone, Debug, Serialize)]
pub struct SceneTrace {
    /// Display name.
    pub name: String,
    /// `"worldline"`, `"grid"` or `"reference"`.
    pub kind: &'static str,
    /// `"lines+markers"` or `"lines"`.
    pub mode: &'static str,
    /// CSS color.
    pub color: String,
    /// Marker size.
    pub marker_size: f64,
    /// Line width.
    pub line_width: f64,
    /// X column; `null` breaks the line.
    pub x: Vec<Option<f64>>,
    /// Y column; `null` breaks the line.
    pub y: Vec<Option<f64>>,
    /// Initial visibility.
    pub visible: bool,
}

/// The boost slider.
#[derive(Clone, Debug, Serialize)]
pub struct SceneSlider {
    /// Initially active step.
    pub active: usize,
    /// One entry per boost step.
    pub steps: Vec<SceneStep>,
}

/// One slider stop.
#[derive(Clone, Debug, Serialize)]
pub struct SceneStep {
    /// Slider label.
    pub label: String,
    /// Title while this step is active.
    pub title: String,
    /// Boost velocity.
    pub u: f64,
    /// Visibility mask over `Scene::traces`.
    pub visible: Vec<bool>,
}

/// Formats `color` as a CSS `rgba()` string.
#[must_use]
pub fn css_color(color: Color) -> String {
    let c = color.to_rgba8();
    format!("rgba({},{},{},{})", c.r, c.g, c.b, f64::from(c.a) / 255.0)
}

fn columns(points: &[Point]) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
    points.iter().map(|p| (Some(p.x), Some(p.y))).unzip()
}

fn path_trace(
    name: &str,
    kind: &'static str,
    color: Color,
    style: Option<&ActorStyle>,
    line_width: f64,
    path: &SegmentPath,
) -> SceneTrace {
    SceneTrace {
        name: name.into(),
        kind,
        mode: "lines",
        color: css_color(color),
        marker_size: style.map_or(0.0, |s| s.size),
        line_width,
        x: path.xs(),
        y: path.ys(),
        visible: false,
    }
}

/// Flattens `diagram` into a [`Scene`].
#[must_use]
pub fn scene(diagram: &Diagram) -> Scene {
    let initial = diagram.scrubber().initial_visibility();
    let traces = diagram
        .slot_traces()
        .map(|(slot, trace)| {
            let mut out = match trace {
                SlotTrace::Worldline {
                    name,
                    style,
                    points,
                } => {
                    let (x, y) = columns(points);
                    SceneTrace {
                        name: name.into(),
                        kind: "worldline",
                        mode: "lines+markers",
                        color: css_color(style.color),
                        marker_size: style.size,
                        line_width: 0.3,
                        x,
                        y,
                        visible: false,
                    }
                }
                SlotTrace::Grid { name, style, path } => {
                    path_trace(name, "grid", style.color, Some(style), 0.1, path)
                }
                SlotTrace::Reference { path } => {
                    path_trace("Light Ray", "reference", LIGHT_RAY_COLOR, None, 1.0, path)
                }
            };
            out.visible = initial[slot.get()];
            out
        })
        .collect();

    let steps = diagram
        .scrubber()
        .steps()
        .iter()
        .map(|step| SceneStep {
            label: step.label.clone(),
            title: step.title.clone(),
            u: step.velocity.get(),
            visible: step.visible.clone(),
        })
        .collect();

    let bounds = diagram.config().plot_bounds;
    Scene {
        title: "Minkowski Diagram".into(),
        x_range: [bounds.x0, bounds.x1],
        y_range: [bounds.y0, bounds.y1],
        traces,
        slider: SceneSlider {
            active: diagram.scrubber().active(),
            steps,
        },
    }
}
