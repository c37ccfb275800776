use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::clock::FrameClock;
use crate::frame::Frame;

/// Cancellation handle for a [`FrameLoop`].
///
/// Cloning shares the same flag, so a frame callback can hold a clone and
/// stop the loop it is running in. The loop is single-threaded by contract.
#[derive(Debug, Clone, Default)]
pub struct LoopHandle {
    stopped: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

/// Perpetual frame scheduler.
///
/// Each iteration asks the clock for the next slot and invokes the frame
/// callback once. Rescheduling is iteration, so the call stack never grows
/// no matter how long the loop runs.
#[derive(Debug)]
pub struct FrameLoop<C: FrameClock> {
    clock: C,
    handle: LoopHandle,
    last: Option<Frame>,
}

impl<C: FrameClock> FrameLoop<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            handle: LoopHandle::new(),
            last: None,
        }
    }

    pub fn handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    pub fn last_frame(&self) -> Option<Frame> {
        self.last
    }

    /// Schedule and run exactly one frame, unless the loop has been stopped.
    pub fn step(&mut self, on_frame: impl FnOnce(Frame)) -> Option<Frame> {
        if self.handle.is_stopped() {
            return None;
        }
        let dt_s = self.clock.next_delta();
        let frame = match self.last {
            Some(prev) => prev.following(dt_s),
            None => Frame::first(dt_s),
        };
        self.last = Some(frame);
        on_frame(frame);
        Some(frame)
    }

    /// Run frames until the handle is stopped. Returns the number of frames run.
    pub fn run(&mut self, mut on_frame: impl FnMut(Frame)) -> u64 {
        let mut ran = 0u64;
        while self.step(&mut on_frame).is_some() {
            ran += 1;
        }
        debug!(frames = ran, "frame loop stopped");
        ran
    }
}
