// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_fling --heading-base-level=0

//! Loupe Fling: momentum simulations for 2D viewports.
//!
//! After a single‑pointer drag is released fast enough, the content keeps
//! moving and decays to rest. This crate models that motion as pure functions
//! of time since release; it owns no timer and touches no transform.
//!
//! Two models are provided, selected with [`FlingModel`]:
//! - [`AxisFling`]: horizontal and vertical axes simulated independently
//!   against their [`ScrollMetrics`], with an elastic spring past the edges.
//! - [`FrictionFling`]: a scalar distance along the release direction, with
//!   the drag picked from the release speed by a [`FrictionModel`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use loupe_fling::{Fling, FlingModel, FlingSimulation};
//! use loupe_view::OffsetLimits;
//!
//! let fling = Fling::new(
//!     &FlingModel::default(),
//!     Vec2::new(1200.0, 0.0),
//!     Vec2::ZERO,
//!     &OffsetLimits::UNBOUNDED,
//! );
//!
//! // Sample at 60 Hz until the simulation reports rest.
//! let mut t = 0.0;
//! while !fling.is_done(t) {
//!     t += 1.0 / 60.0;
//! }
//! assert!(fling.offset_at(t).x > 0.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod axis;
mod fling;
mod friction;

pub use axis::{AxisFling, AxisSimulation, BallisticConfig, ScrollMetrics};
pub use fling::{
    DISTANCE_TOLERANCE, Fling, FlingModel, FlingSimulation, MAX_FLING_VELOCITY,
    MIN_FLING_VELOCITY, NEGLIGIBLE_DISPLACEMENT, VELOCITY_TOLERANCE, clamp_release_velocity,
    exceeds_fling_threshold,
};
pub use friction::{FrictionFling, FrictionModel, FrictionTier, TieredFriction};
