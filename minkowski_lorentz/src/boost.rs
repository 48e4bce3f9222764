// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::velocity::{Velocity, VelocityError};

/// A spacetime event in 1+1D: a time `t` and a position `x`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Event {
    /// Time coordinate.
    pub t: f64,
    /// Spatial coordinate.
    pub x: f64,
}

impl Event {
    /// Creates an event at time `t` and position `x`.
    #[must_use]
    pub const fn new(t: f64, x: f64) -> Self {
        Self { t, x }
    }
}

/// A prepared Lorentz boost into a frame moving at velocity `u`.
///
/// The Lorentz factor is computed once, so applying the same boost to many
/// events does not repeat the square root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boost {
    velocity: Velocity,
    gamma: f64,
}

impl Boost {
    /// The identity boost.
    pub const IDENTITY: Self = Self {
        velocity: Velocity::ZERO,
        gamma: 1.0,
    };

    /// Prepares a boost into the frame moving at `velocity`.
    #[must_use]
    pub fn new(velocity: Velocity) -> Self {
        Self {
            velocity,
            gamma: velocity.gamma(),
        }
    }

    /// Returns the velocity of the target frame.
    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Returns the cached Lorentz factor.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns the boost back into the original frame.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            velocity: self.velocity.reversed(),
            gamma: self.gamma,
        }
    }

    /// Transformed time, `t' = gamma * (t - x * u)`.
    #[must_use]
    pub fn time(&self, t: f64, x: f64) -> f64 {
        self.gamma * (t - x * self.velocity.get())
    }

    /// Transformed position, `x' = gamma * (x - u * t)`.
    #[must_use]
    pub fn position(&self, t: f64, x: f64) -> f64 {
        self.gamma * (x - self.velocity.get() * t)
    }

    /// Transforms an event into the boosted frame.
    #[must_use]
    pub fn apply(&self, event: Event) -> Event {
        Event {
            t: self.time(event.t, event.x),
            x: self.position(event.t, event.x),
        }
    }
}

impl Default for Boost {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Time of the event `(t, x)` as seen from a frame moving at `u`.
#[must_use]
pub fn boost_time(t: f64, x: f64, u: Velocity) -> f64 {
    Boost::new(u).time(t, x)
}

/// Position of the event `(t, x)` as seen from a frame moving at `u`.
#[must_use]
pub fn boost_position(t: f64, x: f64, u: Velocity) -> f64 {
    Boost::new(u).position(t, x)
}

/// [`boost_time`] for an unvalidated boost velocity.
pub fn try_boost_time(t: f64, x: f64, u: f64) -> Result<f64, VelocityError> {
    Ok(boost_time(t, x, Velocity::new(u)?))
}

/// [`boost_position`] for an unvalidated boost velocity.
pub fn try_boost_position(t: f64, x: f64, u: f64) -> Result<f64, VelocityError> {
    Ok(boost_position(t, x, Velocity::new(u)?))
}
