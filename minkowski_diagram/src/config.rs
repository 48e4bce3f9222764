// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use minkowski_lorentz::BoostSteps;

use crate::DiagramError;

/// Whether grid lines follow the active scrubber step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GridVisibility {
    /// Grid traces are generated but never switched on by the scrubber.
    ///
    /// Hosts that want them toggle them by hand.
    #[default]
    Hidden,
    /// The active step's grid traces are shown alongside its worldlines.
    Shown,
}

/// Shape of the per-actor grid lines.
///
/// The lines are drawn far past the plot bounds so their ends never show up
/// inside the visible region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Lines per family (position lines and simultaneity lines).
    pub segments: usize,
    /// Offset between neighboring lines of one family.
    pub spacing: f64,
    /// Multiple of the largest plot-bound coordinate the lines extend to.
    pub extent_scale: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            segments: 42,
            spacing: 1.0,
            extent_scale: 2.0,
        }
    }
}

impl GridConfig {
    /// Half-length of every grid line for the given plot bounds.
    ///
    /// For the default `[-10, 10]` bounds this is `20`.
    #[must_use]
    pub fn extent(&self, bounds: Rect) -> f64 {
        let reach = bounds
            .x0
            .abs()
            .max(bounds.x1.abs())
            .max(bounds.y0.abs())
            .max(bounds.y1.abs());
        self.extent_scale * reach
    }

    fn validate(&self) -> Result<(), DiagramError> {
        if self.segments == 0 {
            return Err(DiagramError::InvalidGrid {
                reason: "segment count must be at least 1",
            });
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(DiagramError::InvalidGrid {
                reason: "spacing must be positive",
            });
        }
        if !(self.extent_scale.is_finite() && self.extent_scale > 0.0) {
            return Err(DiagramError::InvalidGrid {
                reason: "extent scale must be positive",
            });
        }
        Ok(())
    }
}

/// Options for building a [`Diagram`](crate::Diagram).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagramConfig {
    /// Number of discretized boosts the scrubber moves through.
    ///
    /// An odd count puts the rest frame in the exact middle.
    pub step_count: usize,
    /// Visible region, `x` for position and `y` for time.
    ///
    /// Only used to size the grid lines and the light-ray reference.
    pub plot_bounds: Rect,
    /// Grid-line shape.
    pub grid: GridConfig,
    /// Multiple of the plot bounds spanned by the light-ray reference.
    pub light_ray_scale: f64,
    /// Default grid visibility for the scrubber.
    pub grid_visibility: GridVisibility,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            step_count: 21,
            plot_bounds: Rect::new(-10.0, -10.0, 10.0, 10.0),
            grid: GridConfig::default(),
            light_ray_scale: 2.0,
            grid_visibility: GridVisibility::Hidden,
        }
    }
}

impl DiagramConfig {
    /// Sets the number of boost steps.
    #[must_use]
    pub fn with_step_count(mut self, step_count: usize) -> Self {
        self.step_count = step_count;
        self
    }

    /// Sets the plot bounds from `(xmin, xmax, ymin, ymax)`.
    #[must_use]
    pub fn with_plot_bounds(mut self, xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        self.plot_bounds = Rect::new(xmin, ymin, xmax, ymax);
        self
    }

    /// Sets the grid-line shape.
    #[must_use]
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the default grid visibility.
    #[must_use]
    pub fn with_grid_visibility(mut self, visibility: GridVisibility) -> Self {
        self.grid_visibility = visibility;
        self
    }

    /// Half-length of the grid lines for the current bounds.
    #[must_use]
    pub fn grid_extent(&self) -> f64 {
        self.grid.extent(self.plot_bounds)
    }

    /// Checks every setting, returning the boost discretization on success.
    pub fn validate(&self) -> Result<BoostSteps, DiagramError> {
        let steps = BoostSteps::new(self.step_count)?;
        let b = self.plot_bounds;
        let finite = b.x0.is_finite() && b.x1.is_finite() && b.y0.is_finite() && b.y1.is_finite();
        if !finite || b.x0 >= b.x1 || b.y0 >= b.y1 {
            return Err(DiagramError::InvalidBounds { bounds: b });
        }
        self.grid.validate()?;
        if !(self.light_ray_scale.is_finite() && self.light_ray_scale > 0.0) {
            return Err(DiagramError::InvalidLightRayScale {
                scale: self.light_ray_scale,
            });
        }
        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use minkowski_lorentz::StepError;

    use super::*;

    #[test]
    fn default_extent_matches_twice_the_bounds() {
        let config = DiagramConfig::default();
        assert_eq!(config.grid_extent(), 20.0);

        let wide = config.with_plot_bounds(-3.0, 30.0, -5.0, 5.0);
        assert_eq!(wide.grid_extent(), 60.0);
    }

    #[test]
    fn default_config_is_valid() {
        let steps = DiagramConfig::default().validate().unwrap();
        assert_eq!(steps.len(), 21);
        assert_eq!(steps.center(), 10);
    }

    #[test]
    fn rejects_bad_settings() {
        let base = DiagramConfig::default();

        assert_eq!(
            base.with_step_count(1).validate(),
            Err(DiagramError::Steps(StepError::TooFewSteps { step_count: 1 }))
        );
        assert!(matches!(
            base.with_plot_bounds(5.0, -5.0, -1.0, 1.0).validate(),
            Err(DiagramError::InvalidBounds { .. })
        ));
        assert!(matches!(
            base.with_plot_bounds(-1.0, 1.0, f64::NAN, 1.0).validate(),
            Err(DiagramError::InvalidBounds { .. })
        ));
        assert!(matches!(
            base.with_grid(GridConfig {
                segments: 0,
                ..GridConfig::default()
            })
            .validate(),
            Err(DiagramError::InvalidGrid { .. })
        ));
        assert!(matches!(
            base.with_grid(GridConfig {
                spacing: 0.0,
                ..GridConfig::default()
            })
            .validate(),
            Err(DiagramError::InvalidGrid { .. })
        ));

        let mut no_rays = base;
        no_rays.light_ray_scale = -1.0;
        assert_eq!(
            no_rays.validate(),
            Err(DiagramError::InvalidLightRayScale { scale: -1.0 })
        );
    }
}
