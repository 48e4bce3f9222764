// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Rect;
use minkowski_lorentz::{StepError, VelocityError};

/// Error returned when a diagram cannot be built.
///
/// All validation runs before any dataset is generated, so an error never
/// comes with partial output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DiagramError {
    /// The actor list is empty.
    NoActors,
    /// An actor asks for zero worldline samples.
    ZeroDotCount {
        /// Index of the offending actor.
        actor: usize,
    },
    /// An actor's sample spacing is zero, negative, or not finite.
    NonPositiveDotSpacing {
        /// Index of the offending actor.
        actor: usize,
        /// The rejected spacing.
        spacing: f64,
    },
    /// An actor's starting position is not finite.
    NonFinitePosition {
        /// Index of the offending actor.
        actor: usize,
        /// The rejected position.
        position: f64,
    },
    /// The plot bounds are degenerate or not finite.
    InvalidBounds {
        /// The rejected bounds.
        bounds: Rect,
    },
    /// The grid-line configuration cannot produce any lines.
    InvalidGrid {
        /// Which setting was rejected.
        reason: &'static str,
    },
    /// The light-ray scale is zero, negative, or not finite.
    InvalidLightRayScale {
        /// The rejected scale.
        scale: f64,
    },
    /// The boost discretization is misconfigured.
    Steps(StepError),
    /// A velocity is at or beyond light speed.
    Velocity(VelocityError),
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActors => f.write_str("a diagram needs at least one actor"),
            Self::ZeroDotCount { actor } => {
                write!(f, "actor {actor} has a dot count of zero")
            }
            Self::NonPositiveDotSpacing { actor, spacing } => {
                write!(f, "actor {actor} has non-positive dot spacing {spacing}")
            }
            Self::NonFinitePosition { actor, position } => {
                write!(f, "actor {actor} has non-finite position {position}")
            }
            Self::InvalidBounds { bounds } => write!(f, "invalid plot bounds {bounds:?}"),
            Self::InvalidGrid { reason } => write!(f, "invalid grid configuration: {reason}"),
            Self::InvalidLightRayScale { scale } => {
                write!(f, "light-ray scale {scale} must be positive")
            }
            Self::Steps(err) => write!(f, "{err}"),
            Self::Velocity(err) => write!(f, "{err}"),
        }
    }
}

impl core::error::Error for DiagramError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Steps(err) => Some(err),
            Self::Velocity(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StepError> for DiagramError {
    fn from(err: StepError) -> Self {
        Self::Steps(err)
    }
}

impl From<VelocityError> for DiagramError {
    fn from(err: VelocityError) -> Self {
        Self::Velocity(err)
    }
}
