// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::velocity::{Velocity, VelocityError};

/// Distance by which a step landing exactly on `±1` is moved inward.
pub const SINGULARITY_NUDGE: f64 = 0.001;

/// Error returned by the boost discretizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepError {
    /// Fewer than two steps leaves no room for a rest frame and an edge.
    TooFewSteps {
        /// The configured step count.
        step_count: usize,
    },
    /// A step index at or past the step count.
    OutOfRange {
        /// The requested step.
        index: usize,
        /// The configured step count.
        step_count: usize,
    },
    /// The discretized velocity is not subluminal.
    Domain(VelocityError),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSteps { step_count } => {
                write!(f, "boost step count {step_count} is below the minimum of 2")
            }
            Self::OutOfRange { index, step_count } => {
                write!(f, "boost step {index} is out of range for {step_count} steps")
            }
            Self::Domain(err) => write!(f, "boost step velocity: {err}"),
        }
    }
}

impl core::error::Error for StepError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Domain(err) => Some(err),
            _ => None,
        }
    }
}

impl From<VelocityError> for StepError {
    fn from(err: VelocityError) -> Self {
        Self::Domain(err)
    }
}

/// A uniform grid of boost velocities over roughly `[-1, 1]`.
///
/// Step `i` maps to `u = i / (step_count / 2) - 1`, so the center step
/// `step_count / 2` is exactly the rest frame. A step that lands exactly on
/// `±1` is moved [`SINGULARITY_NUDGE`] toward zero so its Lorentz factor stays
/// finite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoostSteps {
    step_count: usize,
}

impl BoostSteps {
    /// Creates a discretizer with `step_count` steps.
    pub fn new(step_count: usize) -> Result<Self, StepError> {
        if step_count < 2 {
            return Err(StepError::TooFewSteps { step_count });
        }
        Ok(Self { step_count })
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.step_count
    }

    /// Always `false`; a discretizer has at least two steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the step that maps to the rest frame.
    #[must_use]
    pub fn center(&self) -> usize {
        self.step_count / 2
    }

    /// Returns the boost velocity for step `index`.
    pub fn velocity(&self, index: usize) -> Result<Velocity, StepError> {
        if index >= self.step_count {
            return Err(StepError::OutOfRange {
                index,
                step_count: self.step_count,
            });
        }
        let half = (self.step_count / 2) as f64;
        let mut u = index as f64 / half - 1.0;
        if 1.0 - u * u == 0.0 {
            if u > 0.0 {
                u -= SINGULARITY_NUDGE;
            } else {
                u += SINGULARITY_NUDGE;
            }
        }
        Ok(Velocity::new(u)?)
    }

    /// Iterates over `(index, velocity)` for every step in order.
    #[must_use]
    pub fn iter(&self) -> BoostStepsIter {
        BoostStepsIter {
            steps: *self,
            next: 0,
        }
    }
}

impl IntoIterator for BoostSteps {
    type Item = (usize, Velocity);
    type IntoIter = BoostStepsIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the steps of a [`BoostSteps`].
#[derive(Clone, Debug)]
pub struct BoostStepsIter {
    steps: BoostSteps,
    next: usize,
}

impl Iterator for BoostStepsIter {
    type Item = (usize, Velocity);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next;
        // Every in-range step is nudged off the light cone, so this only
        // stops at the end of the range.
        let velocity = self.steps.velocity(index).ok()?;
        self.next += 1;
        Some((index, velocity))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps.step_count.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoostStepsIter {}

/// Maps step `index` of `step_count` to its boost velocity.
pub fn step_to_velocity(index: usize, step_count: usize) -> Result<Velocity, StepError> {
    BoostSteps::new(step_count)?.velocity(index)
}
