// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Minkowski demos.
//!
//! - [`logging`]: a [`BuildTrace`](minkowski_diagram::BuildTrace) sink that
//!   reports builds through `tracing`, plus subscriber setup.
//! - [`scene`]: a serializable, plotting-front-end-shaped view of a
//!   [`Diagram`](minkowski_diagram::Diagram).

pub mod logging;
pub mod scene;
