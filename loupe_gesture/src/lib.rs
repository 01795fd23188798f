// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_gesture --heading-base-level=0

//! Loupe Gesture: turns pointer gestures into viewport transforms.
//!
//! [`GestureEngine`] consumes already‑recognized gestures (scale start,
//! update and end, wheel events, tap‑down and double‑tap) and drives a
//! [`ViewController`](loupe_view::ViewController):
//! - pinch and rotate about the gesture focal point, which stays fixed on
//!   screen;
//! - single‑pointer pan and wheel scroll filtered by a
//!   [`ScrollMode`](loupe_view::ScrollMode);
//! - wheel zoom while a modifier is held;
//! - double‑tap zoom toggling between `1.0` and a configured factor;
//! - momentum after a fast release, using either fling model from
//!   `loupe_fling`;
//! - the bounds policy after every change.
//!
//! Layout is provided by the embedding UI through [`ViewportHost`]. Time is
//! passed in explicitly: the host calls [`GestureEngine::tick`] with its
//! monotonic clock while [`GestureEngine::needs_tick`] is `true`.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//!
//! use kurbo::{Point, Size};
//! use loupe_gesture::{
//!     GestureEngine, InteractionConfig, Phase, ScaleEnd, ScaleStart, ScaleUpdate,
//!     StaticViewport,
//! };
//!
//! let host = StaticViewport::new(Size::new(400.0, 400.0), Some(Size::new(800.0, 800.0)));
//! let mut engine = GestureEngine::new(InteractionConfig::default());
//!
//! let focal = Point::new(200.0, 200.0);
//! engine.on_scale_start(&host, ScaleStart { focal_point: focal, pointer_count: 2 });
//! engine.on_scale_update(
//!     &host,
//!     ScaleUpdate { focal_point: focal, scale: 2.0, rotation: 0.0, pointer_count: 2 },
//! );
//! assert_eq!(engine.transform().scale, 2.0);
//! assert_eq!(engine.phase(), Phase::GestureActive);
//!
//! engine.on_scale_end(&host, ScaleEnd::default(), Duration::ZERO);
//! assert_eq!(engine.phase(), Phase::Idle);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod engine;
mod events;
mod host;
mod session;

pub use config::{DEFAULT_SCROLL_ZOOM_STEP, InteractionConfig};
pub use engine::{GestureEngine, Phase};
pub use events::{ScaleEnd, ScaleStart, ScaleUpdate, ScrollEvent};
pub use host::{StaticViewport, ViewportHost};
pub use session::GestureSession;
