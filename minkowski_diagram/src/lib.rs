// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minkowski Diagram: headless data for scrubbable spacetime diagrams.
//!
//! Given a set of [`Actor`]s moving at constant velocities, this crate
//! computes what a viewer needs to scrub an observer's boost across a range
//! of velocities:
//!
//! - For every actor and every discretized boost, a [`TraceDataset`] holding
//!   the boosted worldline samples and a pair of tilted grid-line families.
//! - A [`TraceTable`] that places every dataset in a flat, ordered trace list
//!   (two slots per actor per step, one trailing reference slot).
//! - A [`Scrubber`] with one visibility vector and label per boost step.
//!
//! It does **not** draw anything. Points are plain [`kurbo::Point`]s with `x`
//! for position and `y` for time; breaks between disjoint line segments are
//! `None` entries in a [`SegmentPath`]. Colors and sizes in [`ActorStyle`]
//! are carried through untouched for the renderer.
//!
//! ## Minimal example
//!
//! ```rust
//! use minkowski_diagram::{Actor, Diagram, DiagramConfig, TraceKey};
//!
//! let actors = [
//!     Actor::new("earth", 0.0).unwrap(),
//!     Actor::new("rocket", 0.6).unwrap().with_position(-2.0),
//! ];
//! let diagram = Diagram::build(&DiagramConfig::default(), &actors).unwrap();
//!
//! // 21 boost steps; the middle one is the rest frame.
//! let scrubber = diagram.scrubber();
//! assert_eq!(scrubber.steps().len(), 21);
//! assert_eq!(scrubber.active(), 10);
//!
//! // The rocket's worldline is visible at the active step.
//! let slot = diagram.table().slot(TraceKey::worldline(1, 10)).unwrap();
//! assert!(scrubber.initial_visibility()[slot.get()]);
//! ```
//!
//! ## Observing a build
//!
//! [`Diagram::build_with_trace`] reports progress to a [`BuildTrace`] sink.
//! [`BuildStats`] is a ready-made sink that counts what was generated:
//!
//! ```rust
//! use minkowski_diagram::{Actor, BuildStats, Diagram, DiagramConfig};
//!
//! let actors = [Actor::new("probe", -0.3).unwrap().with_positive_only(true)];
//! let mut stats = BuildStats::default();
//! Diagram::build_with_trace(&DiagramConfig::default(), &actors, &mut stats).unwrap();
//! assert_eq!(stats.datasets, 21);
//! assert_eq!(stats.omitted_points, 21 * 10);
//! ```
//!
//! ## Grid lines
//!
//! Grid lines are tilted by `atan` of the relativistic sum of the actor's
//! velocity and the boost, and extend to [`GridConfig::extent`], well past
//! the plot bounds. By default the scrubber never switches them on
//! ([`GridVisibility::Hidden`]); hosts toggle them by hand, or opt in with
//! [`GridVisibility::Shown`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod actor;
mod config;
mod dataset;
mod diagram;
mod error;
pub mod grid;
mod path;
mod scrubber;
pub mod table;
pub mod trace;

pub use actor::{Actor, ActorStyle};
pub use config::{DiagramConfig, GridConfig, GridVisibility};
pub use dataset::{TraceDataset, trace_dataset, worldline};
pub use diagram::{ActorTraces, Diagram, DiagramDebugInfo, SlotTrace, StepTraces};
pub use error::DiagramError;
pub use path::SegmentPath;
pub use scrubber::{Scrubber, ScrubberStep, step_label, step_title};
pub use table::{SlotContent, TraceKey, TraceKind, TraceSlot, TraceTable, step_visibility};
pub use trace::{BuildPlan, BuildStats, BuildTrace, DatasetEvent, NoTrace};

pub use minkowski_lorentz::{Velocity, VelocityError};
