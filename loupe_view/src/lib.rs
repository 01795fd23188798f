// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_view --heading-base-level=0

//! Loupe View: transform state for interactive 2D viewports.
//!
//! This crate holds the headless model behind a pan/zoom/rotate viewer:
//! - [`ViewTransform`]: scale, rotation and offset applied to content.
//! - [`ViewController`]: the single owner of a transform, with update, zoom,
//!   pan and constrain operations and optional fixed‑duration animation.
//! - [`OffsetLimits`]: the bounds policy keeping content over the viewport.
//! - [`ScrollMode`]: the axis mask applied to every pan delta.
//!
//! It does **not** interpret input events or paint anything. Gesture handling
//! lives in `loupe_gesture`; a renderer reads [`ViewController::transform`]
//! once per frame and uses [`ViewTransform::to_affine`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use loupe_view::ViewController;
//!
//! let mut view = ViewController::new().with_scale_limits(0.5, 4.0);
//!
//! // Zoom in by +1.0 about the viewport center, keeping that point fixed.
//! let focal = Point::new(200.0, 200.0);
//! view.zoom(1.0, focal, false);
//! assert_eq!(view.scale(), 2.0);
//!
//! // Keep an 800x800 image covering a 400x400 viewport.
//! view.constrain_to_bounds(Size::new(800.0, 800.0), Size::new(400.0, 400.0));
//!
//! let content_pt = view.transform().view_to_content_point(focal);
//! assert!((content_pt.x - 200.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Content is rendered at `offset + rotate(rotation) * (scale * p)`.
//! - Scale is always inside the controller's limits; offset limits are a
//!   policy applied by [`ViewController::constrain_to_bounds`], not an
//!   invariant of the type.
//! - Content smaller than the viewport is pinned to offset `0` on that axis.
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod bounds;
mod controller;
mod modes;
mod transform;

pub use animation::TransformAnimation;
pub use bounds::OffsetLimits;
pub use controller::{
    DEFAULT_ANIMATION_DURATION, TransformUpdate, ViewController, ViewControllerDebugInfo,
};
pub use modes::ScrollMode;
pub use transform::ViewTransform;
