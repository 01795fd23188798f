// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per‑gesture baseline captured when a scale gesture starts.
//!
//! ## Usage
//!
//! 1) Capture a session with [`GestureSession::start`] from the current scale
//!    and rotation and the gesture's first local focal point.
//! 2) On each update, call [`GestureSession::update_focal`] to get the focal
//!    movement since the last update.
//! 3) Drop the session when the gesture ends.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use loupe_gesture::GestureSession;
//!
//! let mut session = GestureSession::start(Point::new(10.0, 20.0), 1.5, 0.0, 1);
//! assert_eq!(session.start_scale, 1.5);
//!
//! let delta = session.update_focal(Point::new(15.0, 25.0), 1);
//! assert_eq!(delta, Vec2::new(5.0, 5.0));
//! ```

use kurbo::{Point, Vec2};

/// Baseline for incremental gesture updates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    /// Local focal point when the gesture started.
    pub start_focal_point: Point,
    /// Scale when the gesture started.
    pub start_scale: f64,
    /// Rotation when the gesture started.
    pub start_rotation: f64,
    last_focal_point: Point,
    peak_pointer_count: usize,
}

impl GestureSession {
    /// Captures a new session.
    #[must_use]
    pub fn start(focal: Point, scale: f64, rotation: f64, pointer_count: usize) -> Self {
        Self {
            start_focal_point: focal,
            start_scale: scale,
            start_rotation: rotation,
            last_focal_point: focal,
            peak_pointer_count: pointer_count,
        }
    }

    /// Records a new focal point, returning the movement since the last one.
    pub fn update_focal(&mut self, focal: Point, pointer_count: usize) -> Vec2 {
        let delta = focal - self.last_focal_point;
        self.last_focal_point = focal;
        self.peak_pointer_count = self.peak_pointer_count.max(pointer_count);
        delta
    }

    /// Most recent focal point.
    #[must_use]
    pub fn last_focal_point(&self) -> Point {
        self.last_focal_point
    }

    /// Largest number of pointers seen during the gesture.
    #[must_use]
    pub fn peak_pointer_count(&self) -> usize {
        self.peak_pointer_count
    }
}
