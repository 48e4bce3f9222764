// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Largest representable speed strictly below light speed.
const MAX_SPEED: f64 = 1.0 - f64::EPSILON / 2.0;

/// Error returned when a speed is at or beyond light speed, or not finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityError {
    /// The rejected value.
    pub value: f64,
}

impl fmt::Display for VelocityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "velocity {} is outside the open interval (-1, 1)",
            self.value
        )
    }
}

impl core::error::Error for VelocityError {}

/// A speed in units of the speed of light, strictly inside `(-1, 1)`.
///
/// Construction is the only place the domain is checked; every operation on a
/// `Velocity` can assume a finite Lorentz factor.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Velocity(f64);

impl Velocity {
    /// The rest frame.
    pub const ZERO: Self = Self(0.0);

    /// Validates `value` as a subluminal speed.
    pub fn new(value: f64) -> Result<Self, VelocityError> {
        if value.is_finite() && value.abs() < 1.0 {
            Ok(Self(value))
        } else {
            Err(VelocityError { value })
        }
    }

    /// Clamps a finite `value` into the open interval `(-1, 1)`.
    ///
    /// Used where the exact result is known to be subluminal but rounding may
    /// have landed on the boundary.
    fn saturating(value: f64) -> Self {
        Self(value.clamp(-MAX_SPEED, MAX_SPEED))
    }

    /// Returns the raw speed.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns the Lorentz factor `1 / sqrt(1 - v^2)`.
    #[must_use]
    pub fn gamma(self) -> f64 {
        1.0 / libm::sqrt(1.0 - self.0 * self.0)
    }

    /// Returns the same speed in the opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self(-self.0)
    }
}

impl TryFrom<f64> for Velocity {
    type Error = VelocityError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Velocity> for f64 {
    fn from(v: Velocity) -> Self {
        v.0
    }
}

/// Lorentz factor of `v`. Always `>= 1`, and exactly `1` only at rest.
#[must_use]
pub fn gamma(v: Velocity) -> f64 {
    v.gamma()
}

/// Einstein velocity addition, `(v1 + v2) / (1 + v1 * v2)`.
///
/// The result is always strictly inside `(-1, 1)`, even when rounding would
/// otherwise land exactly on light speed.
#[must_use]
pub fn add_velocity(v1: Velocity, v2: Velocity) -> Velocity {
    let (a, b) = (v1.0, v2.0);
    Velocity::saturating((a + b) / (1.0 + a * b))
}

/// [`add_velocity`] for unvalidated inputs.
pub fn try_add_velocity(v1: f64, v2: f64) -> Result<f64, VelocityError> {
    Ok(add_velocity(Velocity::new(v1)?, Velocity::new(v2)?).get())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn rejects_light_speed_and_beyond() {
        assert_eq!(Velocity::new(1.0), Err(VelocityError { value: 1.0 }));
        assert!(Velocity::new(-1.0).is_err());
        assert!(Velocity::new(1.5).is_err());
        assert!(Velocity::new(f64::NAN).is_err());
        assert!(Velocity::new(f64::INFINITY).is_err());
    }

    #[test]
    fn accepts_values_arbitrarily_close_to_light_speed() {
        let v = Velocity::new(MAX_SPEED).unwrap();
        assert!(v.gamma().is_finite());
        assert!(v.gamma() > 1.0e7);
    }

    #[test]
    fn gamma_is_one_at_rest() {
        assert_eq!(gamma(Velocity::ZERO), 1.0);
        let g = gamma(Velocity::new(0.6).unwrap());
        assert!((g - 1.25).abs() < 1e-12);
    }

    #[test]
    fn addition_of_near_light_speeds_stays_subluminal() {
        let v = Velocity::new(MAX_SPEED).unwrap();
        let sum = add_velocity(v, v);
        assert!(sum.get() < 1.0);
        assert!(sum.gamma().is_finite());

        let neg = add_velocity(v.reversed(), v.reversed());
        assert!(neg.get() > -1.0);
    }

    #[test]
    fn addition_matches_textbook_case() {
        // 0.5c + 0.5c = 0.8c
        let half = Velocity::new(0.5).unwrap();
        assert!((add_velocity(half, half).get() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn try_add_velocity_reports_domain_violation() {
        assert_eq!(
            try_add_velocity(0.2, 1.0),
            Err(VelocityError { value: 1.0 })
        );
        assert!((try_add_velocity(0.2, 0.0).unwrap() - 0.2).abs() < 1e-15);
    }

    #[test]
    fn error_message_names_the_value() {
        let msg = VelocityError { value: 1.25 }.to_string();
        assert_eq!(msg, "velocity 1.25 is outside the open interval (-1, 1)");
    }
}
