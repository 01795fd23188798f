// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Point, Vec2};
use loupe_fling::{Fling, FlingSimulation, NEGLIGIBLE_DISPLACEMENT, exceeds_fling_threshold};
use loupe_timing::{TaskHandle, Ticker};
use loupe_view::{OffsetLimits, TransformUpdate, ViewController, ViewTransform};

use crate::config::InteractionConfig;
use crate::events::{ScaleEnd, ScaleStart, ScaleUpdate, ScrollEvent};
use crate::host::ViewportHost;
use crate::session::GestureSession;

/// Interaction phase of a [`GestureEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No gesture and no momentum.
    Idle,
    /// A scale gesture is in progress.
    GestureActive,
    /// Momentum from the last release is playing.
    Flinging,
}

#[derive(Clone, Copy, Debug)]
struct FlingRun {
    handle: TaskHandle,
    simulation: Fling,
    applied: Vec2,
    defer_bounds: bool,
}

/// Turns gesture, wheel and tap events into transform updates.
///
/// The engine owns the [`ViewController`] for one viewport and is the only
/// thing that mutates it in response to input. Programmatic callers may use
/// [`GestureEngine::controller_mut`] for zoom‑to‑point, reset and so on.
///
/// All work happens on the caller's thread. Momentum and animated zoom are
/// advanced by [`GestureEngine::tick`], which the host calls from its frame
/// or timer callback while [`GestureEngine::needs_tick`] is `true`.
#[derive(Clone, Debug)]
pub struct GestureEngine {
    config: InteractionConfig,
    controller: ViewController,
    session: Option<GestureSession>,
    fling: Option<FlingRun>,
    ticker: Ticker,
    tap_position: Option<Point>,
    zoom_modifier: bool,
}

impl GestureEngine {
    /// Creates an engine with an identity transform.
    ///
    /// `config` is passed through [`InteractionConfig::validated`].
    #[must_use]
    pub fn new(config: InteractionConfig) -> Self {
        let config = config.validated();
        Self {
            controller: ViewController::new().with_scale_limits(config.min_scale, config.max_scale),
            config,
            session: None,
            fling: None,
            ticker: Ticker::default(),
            tap_position: None,
            zoom_modifier: false,
        }
    }

    /// Replaces the fling tick cadence.
    #[must_use]
    pub fn with_ticker(mut self, ticker: Ticker) -> Self {
        self.cancel_fling();
        self.ticker = ticker;
        self
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// The transform owner.
    #[must_use]
    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    /// Mutable access to the transform owner for programmatic changes.
    pub fn controller_mut(&mut self) -> &mut ViewController {
        &mut self.controller
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.controller.transform()
    }

    /// Current interaction phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.session.is_some() {
            Phase::GestureActive
        } else if self.fling.is_some() {
            Phase::Flinging
        } else {
            Phase::Idle
        }
    }

    /// The active gesture session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Returns `true` while momentum or an animated transition needs frames.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.fling.is_some() || self.controller.is_animating()
    }

    /// When the next fling tick is due, if a fling is running.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.ticker.next_deadline()
    }

    /// Sets whether the zoom modifier key (usually Ctrl) is held.
    pub fn set_zoom_modifier(&mut self, held: bool) {
        self.zoom_modifier = held;
    }

    /// Returns `true` while the zoom modifier key is held.
    #[must_use]
    pub fn zoom_modifier(&self) -> bool {
        self.zoom_modifier
    }

    /// Starts a gesture session.
    ///
    /// Any fling or animated transition in flight is cancelled first.
    pub fn on_scale_start(&mut self, host: &impl ViewportHost, event: ScaleStart) {
        self.cancel_fling();
        self.controller.cancel_animation();
        let Some(focal) = host.global_to_local(event.focal_point) else {
            return;
        };
        let t = self.controller.transform();
        self.session = Some(GestureSession::start(focal, t.scale, t.rotation, event.pointer_count));
        log::debug!("gesture started at {focal:?} with {} pointer(s)", event.pointer_count);
    }

    /// Applies a gesture update.
    ///
    /// Scale and rotation are computed against the session baseline and
    /// applied about the current focal point, which stays fixed on screen.
    /// An update that changes neither is treated as a pan by the focal
    /// movement, filtered through the scroll mode.
    pub fn on_scale_update(&mut self, host: &impl ViewportHost, event: ScaleUpdate) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(focal) = host.global_to_local(event.focal_point) else {
            return;
        };
        let pan = session.update_focal(focal, event.pointer_count);
        let current = self.controller.transform();

        let scale_changed = self.config.enable_zoom
            && event.scale != 1.0
            && event.scale.is_finite()
            && event.scale > 0.0;
        let new_scale =
            scale_changed.then(|| self.controller.clamp_scale(session.start_scale * event.scale));
        let rotation_active =
            self.config.enable_rotation && event.pointer_count >= 2 && event.rotation.is_finite();
        let new_rotation = rotation_active
            .then_some(session.start_rotation + event.rotation)
            .filter(|rotation| *rotation != current.rotation);

        if new_scale.is_some() || new_rotation.is_some() {
            let next = current.scale_rotate_about(focal, new_scale, new_rotation);
            self.controller.update(TransformUpdate {
                scale: new_scale,
                rotation: new_rotation,
                offset: Some(next.offset),
            });
        } else {
            self.controller.pan(self.config.scroll_mode.mask(pan), false);
        }
        self.constrain(host);
    }

    /// Ends the gesture session, starting a fling if the release qualifies.
    ///
    /// A fling needs fling enabled, a gesture that only ever had one pointer,
    /// and an axis‑masked release speed above the fling threshold. `now` is
    /// the host's monotonic time, used as the fling's start.
    pub fn on_scale_end(&mut self, host: &impl ViewportHost, event: ScaleEnd, now: Duration) {
        let Some(session) = self.session.take() else {
            return;
        };
        let pointers = session.peak_pointer_count().max(event.pointer_count);
        let velocity = self.config.scroll_mode.mask(event.velocity);
        log::debug!("gesture ended with velocity {velocity:?}");

        if self.config.enable_fling && pointers == 1 && exceeds_fling_threshold(velocity) {
            self.start_fling(host, velocity, now);
        } else {
            self.constrain(host);
        }
    }

    /// Applies a wheel event.
    ///
    /// With the zoom modifier held and wheel zoom enabled, scrolling up zooms
    /// in by one step about the pointer and scrolling down zooms out.
    /// Otherwise the content pans by the negated, axis‑masked delta. Neither
    /// path is animated.
    pub fn on_scroll(&mut self, host: &impl ViewportHost, event: ScrollEvent) {
        let Some(position) = host.global_to_local(event.position) else {
            return;
        };
        self.cancel_fling();
        self.controller.cancel_animation();
        if self.zoom_modifier && self.config.enable_ctrl_scroll_to_scale {
            let step = self.config.scroll_zoom_step;
            let delta = if event.delta.y < 0.0 {
                step
            } else if event.delta.y > 0.0 {
                -step
            } else {
                return;
            };
            self.controller.zoom(delta, position, false);
        } else {
            self.controller.pan(self.config.scroll_mode.mask(-event.delta), false);
        }
        self.constrain(host);
    }

    /// Records the position of a tap‑down for a possible double‑tap.
    pub fn on_tap_down(&mut self, global: Point) {
        if self.config.enable_double_tap_zoom {
            self.tap_position = Some(global);
        }
    }

    /// Handles a confirmed double‑tap at the recorded tap‑down position.
    ///
    /// Below the configured factor this zooms in by `factor - 1`; otherwise
    /// it zooms out by `scale - 1`, so repeated double‑taps toggle between
    /// `1.0` and the factor. The zoom is animated.
    pub fn on_double_tap(&mut self, host: &impl ViewportHost) {
        if !self.config.enable_double_tap_zoom {
            return;
        }
        let Some(global) = self.tap_position.take() else {
            return;
        };
        let Some(focal) = host.global_to_local(global) else {
            return;
        };
        let scale = self.controller.scale();
        let target = self.config.double_tap_zoom_factor;
        let delta = if scale < target {
            target - 1.0
        } else {
            -(scale - 1.0)
        };
        self.cancel_fling();
        self.controller.zoom(delta, focal, true);
        self.constrain(host);
    }

    /// Returns to the identity transform, cancelling any fling.
    pub fn reset(&mut self, host: &impl ViewportHost, animate: bool) {
        self.cancel_fling();
        self.controller.reset(animate);
        self.constrain(host);
    }

    /// Advances momentum and animated transitions to `now`.
    ///
    /// Returns [`GestureEngine::needs_tick`] after the update.
    pub fn tick(&mut self, host: &impl ViewportHost, now: Duration) -> bool {
        if let Some(tick) = self.ticker.poll(now) {
            self.step_fling(host, tick.handle, tick.elapsed);
        }

        self.controller.advance_to(now);
        self.needs_tick()
    }

    /// Stops any fling immediately; later ticks of it are ignored.
    pub fn cancel_fling(&mut self) {
        if let Some(run) = self.fling.take() {
            self.ticker.cancel_handle(run.handle);
            log::debug!("fling cancelled");
        }
    }

    fn start_fling(&mut self, host: &impl ViewportHost, velocity: Vec2, now: Duration) {
        self.cancel_fling();
        let t = self.controller.transform();
        let limits = OffsetLimits::resolve(
            self.config.constrain_bounds,
            host.content_size(),
            host.viewport_size(),
            t.scale,
        );
        let model = self.config.fling_model;
        let handle = self.ticker.start(now);
        self.fling = Some(FlingRun {
            handle,
            simulation: Fling::new(&model, velocity, t.offset, &limits),
            applied: Vec2::ZERO,
            defer_bounds: model.defers_bounds() && !limits.is_unbounded(),
        });
        log::debug!("fling started with velocity {velocity:?}");
    }

    fn step_fling(&mut self, host: &impl ViewportHost, handle: TaskHandle, elapsed: Duration) {
        let Some(run) = self.fling.as_mut() else {
            return;
        };
        if run.handle != handle {
            return;
        }
        let t = elapsed.as_secs_f64();
        let target = self.config.scroll_mode.mask(run.simulation.offset_at(t));
        let delta = target - run.applied;
        let done = run.simulation.is_done(t);
        log::trace!("fling tick at {t:.3}s: delta {delta:?}");

        if done && delta.hypot() < NEGLIGIBLE_DISPLACEMENT {
            self.cancel_fling();
            self.constrain(host);
            log::debug!("fling settled after {t:.3}s");
            return;
        }
        run.applied = target;
        let defer_bounds = run.defer_bounds;
        self.controller.pan(delta, false);
        if !defer_bounds {
            self.constrain(host);
        }
    }

    fn constrain(&mut self, host: &impl ViewportHost) {
        if !self.config.constrain_bounds {
            return;
        }
        if let (Some(content), Some(viewport)) = (host.content_size(), host.viewport_size()) {
            self.controller.constrain_to_bounds(content, viewport);
        }
    }
}
