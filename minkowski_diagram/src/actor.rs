// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use minkowski_lorentz::{Event, Velocity, VelocityError};
use peniko::Color;

use crate::DiagramError;

/// Rendering hints for an actor's traces.
///
/// The diagram core never reads these; they are carried through to whatever
/// draws the traces.
#[derive(Clone, Copy, Debug)]
pub struct ActorStyle {
    /// Marker and line color.
    pub color: Color,
    /// Marker size.
    pub size: f64,
}

impl Default for ActorStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgba8(0, 255, 0, 255),
            size: 5.0,
        }
    }
}

/// One object moving at a constant velocity.
///
/// The worldline is sampled at `dot_count` proper times spaced `dot_spacing`
/// apart and centered on proper time zero, where the actor sits at `position`.
#[derive(Clone, Debug)]
pub struct Actor {
    name: String,
    velocity: Velocity,
    gamma: f64,
    position: f64,
    dot_count: usize,
    dot_spacing: f64,
    positive_only: bool,
    style: ActorStyle,
}

impl Actor {
    /// Default number of worldline samples.
    pub const DEFAULT_DOT_COUNT: usize = 20;
    /// Default proper-time spacing between worldline samples.
    pub const DEFAULT_DOT_SPACING: f64 = 1.0;

    /// Creates an actor moving at `velocity` (in units of light speed).
    pub fn new(name: impl Into<String>, velocity: f64) -> Result<Self, VelocityError> {
        Ok(Self::with_velocity(name, Velocity::new(velocity)?))
    }

    /// Creates an actor moving at an already validated velocity.
    #[must_use]
    pub fn with_velocity(name: impl Into<String>, velocity: Velocity) -> Self {
        Self {
            name: name.into(),
            velocity,
            gamma: velocity.gamma(),
            position: 0.0,
            dot_count: Self::DEFAULT_DOT_COUNT,
            dot_spacing: Self::DEFAULT_DOT_SPACING,
            positive_only: false,
            style: ActorStyle::default(),
        }
    }

    /// Sets the position at proper time zero.
    #[must_use]
    pub fn with_position(mut self, position: f64) -> Self {
        self.position = position;
        self
    }

    /// Sets the number of worldline samples and their proper-time spacing.
    #[must_use]
    pub fn with_dots(mut self, count: usize, spacing: f64) -> Self {
        self.dot_count = count;
        self.dot_spacing = spacing;
        self
    }

    /// Drops samples with negative lab time when `positive_only` is set.
    #[must_use]
    pub fn with_positive_only(mut self, positive_only: bool) -> Self {
        self.positive_only = positive_only;
        self
    }

    /// Sets the rendering hints.
    #[must_use]
    pub fn with_style(mut self, style: ActorStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the rendering color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.style.color = color;
        self
    }

    /// Changes the velocity, recomputing the Lorentz factor.
    ///
    /// On error the actor is left unchanged.
    pub fn set_velocity(&mut self, velocity: f64) -> Result<(), VelocityError> {
        let velocity = Velocity::new(velocity)?;
        self.velocity = velocity;
        self.gamma = velocity.gamma();
        Ok(())
    }

    /// Returns the label used for this actor's traces.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the velocity.
    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Returns the Lorentz factor of the velocity.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns the position at proper time zero.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Returns the number of worldline samples.
    #[must_use]
    pub fn dot_count(&self) -> usize {
        self.dot_count
    }

    /// Returns the proper-time spacing between worldline samples.
    #[must_use]
    pub fn dot_spacing(&self) -> f64 {
        self.dot_spacing
    }

    /// Returns whether samples before lab time zero are dropped.
    #[must_use]
    pub fn positive_only(&self) -> bool {
        self.positive_only
    }

    /// Returns the rendering hints.
    #[must_use]
    pub fn style(&self) -> &ActorStyle {
        &self.style
    }

    /// Proper times of the worldline samples, in order.
    ///
    /// Sample `k` sits at `(k - dot_count / 2) * dot_spacing`.
    pub fn proper_times(&self) -> impl ExactSizeIterator<Item = f64> {
        let half = (self.dot_count / 2) as f64;
        let spacing = self.dot_spacing;
        (0..self.dot_count).map(move |k| (k as f64 - half) * spacing)
    }

    /// Lab-frame event reached at proper time `tau`.
    #[must_use]
    pub fn lab_event(&self, tau: f64) -> Event {
        let t = self.gamma * tau;
        Event::new(t, self.position + self.velocity.get() * t)
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), DiagramError> {
        if self.dot_count == 0 {
            return Err(DiagramError::ZeroDotCount { actor: index });
        }
        if !(self.dot_spacing.is_finite() && self.dot_spacing > 0.0) {
            return Err(DiagramError::NonPositiveDotSpacing {
                actor: index,
                spacing: self.dot_spacing,
            });
        }
        if !self.position.is_finite() {
            return Err(DiagramError::NonFinitePosition {
                actor: index,
                position: self.position,
            });
        }
        Ok(())
    }
}
