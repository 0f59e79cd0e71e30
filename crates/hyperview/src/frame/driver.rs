//! Frame timing seam: who calls the scheduler, and how it stops.
//!
//! The host owns the timing primitive (a vsync callback, a timer, a test loop).
//! The only contract: one callback per frame, in order, never re-entrant, and
//! no callback at all once the [`FrameHandle`] is cancelled.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::FrameConfig;

use super::draw::DrawList;
use super::surface::Surface;
use super::FrameScheduler;

/// Per-frame timing context passed to the scheduler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameTick {
    /// Frame number, counted by the driver across runs.
    pub index: u64,
    /// Time since the driver's first frame.
    pub elapsed: Duration,
}

/// Cancellation token shared between the host and the frame callback.
#[derive(Clone, Debug, Default)]
pub struct FrameHandle {
    cancelled: Arc<AtomicBool>,
}

impl FrameHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop requesting frames; takes effect before the next callback.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Host-side frame loop.
pub trait AnimationDriver {
    /// Invoke `frame` once per frame until `handle` is cancelled (or the
    /// driver runs out of frames). Cancellation is checked before every call.
    fn run(&mut self, handle: &FrameHandle, frame: &mut dyn FnMut(FrameTick));
}

/// Headless driver: a fixed number of frames per run at a nominal interval.
///
/// Frame indices and elapsed time continue across runs, mirroring a display
/// loop that was stopped and restarted.
#[derive(Clone, Debug)]
pub struct FixedStepDriver {
    frames_per_run: u64,
    interval: Duration,
    next: u64,
}

impl FixedStepDriver {
    /// Nominal 60 Hz.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_micros(16_667);

    pub fn new(frames_per_run: u64) -> Self {
        Self {
            frames_per_run,
            interval: Self::DEFAULT_INTERVAL,
            next: 0,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Total frames issued so far.
    pub fn frames_issued(&self) -> u64 {
        self.next
    }
}

impl AnimationDriver for FixedStepDriver {
    fn run(&mut self, handle: &FrameHandle, frame: &mut dyn FnMut(FrameTick)) {
        for _ in 0..self.frames_per_run {
            if handle.is_cancelled() {
                break;
            }
            let index = self.next;
            self.next += 1;
            let elapsed = self.interval.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
            frame(FrameTick { index, elapsed });
        }
    }
}

/// Drive `scheduler` onto `surface` with `driver`, asking `controller` for the
/// configuration at the start of every frame. Returns the last frame drawn.
pub fn animate<D, S>(
    driver: &mut D,
    handle: &FrameHandle,
    scheduler: &mut FrameScheduler,
    surface: &mut S,
    controller: &mut dyn FnMut(FrameTick) -> FrameConfig,
) -> Option<DrawList>
where
    D: AnimationDriver + ?Sized,
    S: Surface + ?Sized,
{
    let mut last = None;
    driver.run(handle, &mut |tick| {
        let cfg = controller(tick);
        last = Some(scheduler.render(tick, &cfg, surface));
    });
    last
}
