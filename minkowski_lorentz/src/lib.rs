// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minkowski Lorentz: 1+1D special-relativity kernel.
//!
//! This crate provides the small, pure numeric core behind a Minkowski
//! spacetime diagram. Units are chosen so that the speed of light is `1`.
//!
//! - [`Velocity`]: a validated speed strictly inside `(-1, 1)`, with its
//!   Lorentz factor available through [`Velocity::gamma`].
//! - [`Boost`]: a prepared change of frame, applied to [`Event`]s.
//! - [`boost_time`] / [`boost_position`]: the two components of the boost.
//! - [`add_velocity`]: Einstein velocity addition.
//! - [`BoostSteps`]: maps an integer step index onto a symmetric grid of boost
//!   velocities centered on the rest frame, avoiding the `±1` singularity.
//!
//! ## Minimal example
//!
//! ```rust
//! use minkowski_lorentz::{Boost, Event, Velocity};
//!
//! let u = Velocity::new(0.6).unwrap();
//! let boost = Boost::new(u);
//! assert!((boost.gamma() - 1.25).abs() < 1e-12);
//!
//! let e = Event::new(2.0, 1.0);
//! let back = boost.inverse().apply(boost.apply(e));
//! assert!((back.t - e.t).abs() < 1e-12);
//! assert!((back.x - e.x).abs() < 1e-12);
//! ```
//!
//! ## Discretizing boosts
//!
//! ```rust
//! use minkowski_lorentz::BoostSteps;
//!
//! let steps = BoostSteps::new(21).unwrap();
//! assert_eq!(steps.center(), 10);
//! assert_eq!(steps.velocity(10).unwrap().get(), 0.0);
//!
//! // The outermost steps are nudged away from the light cone.
//! let edge = steps.velocity(20).unwrap().get();
//! assert!(edge < 1.0);
//! ```
//!
//! Passing a speed at or beyond light speed is a domain error, reported as
//! [`VelocityError`]. Nothing is clamped silently beyond the documented
//! [`SINGULARITY_NUDGE`].
//!
//! This crate is `no_std`.

#![no_std]

mod boost;
mod steps;
mod velocity;

pub use boost::{Boost, Event, boost_position, boost_time, try_boost_position, try_boost_time};
pub use steps::{BoostSteps, BoostStepsIter, SINGULARITY_NUDGE, StepError, step_to_velocity};
pub use velocity::{Velocity, VelocityError, add_velocity, gamma, try_add_velocity};
