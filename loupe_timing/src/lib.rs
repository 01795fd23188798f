// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_timing --heading-base-level=0

//! Loupe Timing: a host‑agnostic, cancellable fixed‑interval ticker.
//!
//! [`Ticker`] models a repeating scheduled callback without owning a clock or
//! a thread. The host drives it:
//! 1) [`Ticker::start`] begins a run and returns its [`TaskHandle`]. Any run
//!    already in progress is cancelled first.
//! 2) The host arms its own timer for [`Ticker::next_deadline`] and calls
//!    [`Ticker::poll`] with the current monotonic time when it fires.
//! 3) [`Ticker::cancel`] stops the run immediately; later polls yield nothing.
//!
//! Each [`Tick`] carries the handle of the run that produced it, so callers
//! can discard ticks from a run they have since replaced. Missed intervals are
//! coalesced: one poll yields at most one tick, so ticks never overlap.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use loupe_timing::Ticker;
//!
//! let mut ticker = Ticker::new(Duration::from_millis(10));
//! let run = ticker.start(Duration::ZERO);
//!
//! assert!(ticker.poll(Duration::from_millis(5)).is_none());
//! let tick = ticker.poll(Duration::from_millis(10)).unwrap();
//! assert_eq!(tick.handle, run);
//! assert_eq!(tick.elapsed, Duration::from_millis(10));
//!
//! ticker.cancel();
//! assert!(ticker.poll(Duration::from_millis(50)).is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use core::time::Duration;

/// Roughly 60 Hz.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_nanos(16_666_667);

/// Identifies one run of a [`Ticker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

/// One firing of a [`Ticker`] run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// The run that produced this tick.
    pub handle: TaskHandle,
    /// 1‑based tick count within the run.
    pub index: u64,
    /// Time since the run was started.
    pub elapsed: Duration,
}

#[derive(Clone, Copy, Debug)]
struct Run {
    handle: TaskHandle,
    started: Duration,
    next_due: Duration,
    ticks: u64,
}

/// Repeating task with at most one active run.
#[derive(Clone, Debug)]
pub struct Ticker {
    interval: Duration,
    run: Option<Run>,
    next_id: u64,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl Ticker {
    /// Creates an idle ticker firing every `interval`.
    ///
    /// A zero interval is replaced by [`DEFAULT_TICK_INTERVAL`].
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: if interval.is_zero() {
                DEFAULT_TICK_INTERVAL
            } else {
                interval
            },
            run: None,
            next_id: 0,
        }
    }

    /// The tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Starts a new run at `now`, cancelling any run in progress.
    pub fn start(&mut self, now: Duration) -> TaskHandle {
        if let Some(previous) = self.cancel() {
            log::trace!("ticker run {previous:?} superseded");
        }
        self.next_id = self.next_id.wrapping_add(1);
        let handle = TaskHandle(self.next_id);
        self.run = Some(Run {
            handle,
            started: now,
            next_due: now.saturating_add(self.interval),
            ticks: 0,
        });
        handle
    }

    /// Cancels the active run, returning its handle.
    pub fn cancel(&mut self) -> Option<TaskHandle> {
        self.run.take().map(|run| run.handle)
    }

    /// Cancels the active run only if it is `handle`.
    pub fn cancel_handle(&mut self, handle: TaskHandle) -> bool {
        if self.is_current(handle) {
            self.run = None;
            true
        } else {
            false
        }
    }

    /// Returns `true` while a run is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.run.is_some()
    }

    /// Handle of the active run, if any.
    #[must_use]
    pub fn handle(&self) -> Option<TaskHandle> {
        self.run.map(|run| run.handle)
    }

    /// Returns `true` if `handle` is the active run.
    #[must_use]
    pub fn is_current(&self, handle: TaskHandle) -> bool {
        self.handle() == Some(handle)
    }

    /// When the next tick is due, if a run is active.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.run.map(|run| run.next_due)
    }

    /// Yields a tick if one is due at `now`.
    ///
    /// If the host fell behind by several intervals only one tick is
    /// produced and the schedule restarts from `now`.
    pub fn poll(&mut self, now: Duration) -> Option<Tick> {
        let interval = self.interval;
        let run = self.run.as_mut()?;
        if now < run.next_due {
            return None;
        }
        run.ticks += 1;
        let behind = now >= run.next_due.saturating_add(interval);
        run.next_due = if behind {
            now.saturating_add(interval)
        } else {
            run.next_due.saturating_add(interval)
        };
        Some(Tick {
            handle: run.handle,
            index: run.ticks,
            elapsed: now.saturating_sub(run.started),
        })
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::{DEFAULT_TICK_INTERVAL, Ticker};

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn idle_ticker_never_ticks() {
        let mut t = Ticker::default();
        assert!(!t.is_active());
        assert!(t.poll(ms(1000)).is_none());
        assert!(t.next_deadline().is_none());
    }

    #[test]
    fn ticks_on_schedule() {
        let mut t = Ticker::new(ms(10));
        t.start(ms(100));
        assert_eq!(t.next_deadline(), Some(ms(110)));
        assert!(t.poll(ms(109)).is_none());

        let first = t.poll(ms(110)).unwrap();
        assert_eq!(first.index, 1);
        assert_eq!(first.elapsed, ms(10));

        let second = t.poll(ms(121)).unwrap();
        assert_eq!(second.index, 2);
        assert_eq!(second.elapsed, ms(21));
        assert_eq!(t.next_deadline(), Some(ms(130)));
    }

    #[test]
    fn missed_intervals_coalesce() {
        let mut t = Ticker::new(ms(10));
        t.start(ms(0));
        let tick = t.poll(ms(95)).unwrap();
        assert_eq!(tick.index, 1);
        assert!(t.poll(ms(95)).is_none(), "one poll, one tick");
        assert_eq!(t.next_deadline(), Some(ms(105)));
    }

    #[test]
    fn restart_supersedes_previous_run() {
        let mut t = Ticker::new(ms(10));
        let a = t.start(ms(0));
        let b = t.start(ms(5));
        assert_ne!(a, b);
        assert!(!t.is_current(a));
        assert!(t.is_current(b));
        assert!(t.poll(ms(10)).is_none(), "old schedule is gone");
        assert_eq!(t.poll(ms(15)).unwrap().handle, b);
    }

    #[test]
    fn cancel_is_immediate() {
        let mut t = Ticker::new(ms(10));
        let a = t.start(ms(0));
        assert_eq!(t.cancel(), Some(a));
        assert!(t.poll(ms(10)).is_none());
        assert_eq!(t.cancel(), None);
    }

    #[test]
    fn cancel_handle_ignores_stale_handles() {
        let mut t = Ticker::new(ms(10));
        let a = t.start(ms(0));
        let b = t.start(ms(0));
        assert!(!t.cancel_handle(a));
        assert!(t.is_active());
        assert!(t.cancel_handle(b));
        assert!(!t.is_active());
    }

    #[test]
    fn zero_interval_uses_default() {
        assert_eq!(Ticker::new(Duration::ZERO).interval(), DEFAULT_TICK_INTERVAL);
    }
}
