//! Cancellable scheduled tasks: counter frame loops and delayed actions.
//!
//! Every task is tied to a [`TaskHandle`]. Cancelling the handle, or
//! dropping it, stops the task before its next tick, so a component that
//! owns the handle tears its timers down with itself.

use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::counter::CounterAnimation;

/// Default frame interval (~60 fps)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// How a frame loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameLoopEnd {
    /// Reached progress 1 and delivered the final frame
    Completed,
    /// Handle was cancelled or dropped first
    Cancelled,
}

/// Owner side of a scheduled task
#[derive(Debug)]
pub struct TaskHandle {
    token: CancellationToken,
}

impl TaskHandle {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Token to hand to the task body
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Default for TaskHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Drive `animation` frame by frame until it finishes or `token` fires.
///
/// `on_frame` receives each displayed value; the last call of a completed
/// loop is always the exact target. Executor-agnostic apart from the tokio
/// timer, so UI runtimes can run it on their local task queue.
pub async fn run_counter<F>(
    animation: &CounterAnimation,
    frame: Duration,
    token: CancellationToken,
    mut on_frame: F,
) -> FrameLoopEnd
where
    F: FnMut(u64),
{
    let start = Instant::now();
    let mut ticker = tokio::time::interval(frame.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::debug!(target = animation.target(), "Counter animation cancelled");
                return FrameLoopEnd::Cancelled;
            }
            _ = ticker.tick() => {
                let elapsed = start.elapsed();
                on_frame(animation.value_at(elapsed));
                if animation.is_finished(elapsed) {
                    return FrameLoopEnd::Completed;
                }
            }
        }
    }
}

/// Spawn [`run_counter`] on the tokio runtime
pub fn spawn_counter<F>(animation: CounterAnimation, frame: Duration, on_frame: F) -> TaskHandle
where
    F: FnMut(u64) + Send + 'static,
{
    let handle = TaskHandle::new();
    let token = handle.token();
    tokio::spawn(async move {
        run_counter(&animation, frame, token, on_frame).await;
    });
    handle
}

/// Run `action` once after `delay` unless `token` fires first.
///
/// Returns whether the action ran.
pub async fn run_after<F>(delay: Duration, token: CancellationToken, action: F) -> bool
where
    F: FnOnce(),
{
    tokio::select! {
        biased;
        _ = token.cancelled() => false,
        _ = tokio::time::sleep(delay) => {
            action();
            true
        }
    }
}

/// Spawn [`run_after`] on the tokio runtime
pub fn spawn_after<F>(delay: Duration, action: F) -> TaskHandle
where
    F: FnOnce() + Send + 'static,
{
    let handle = TaskHandle::new();
    let token = handle.token();
    tokio::spawn(async move {
        if !run_after(delay, token, action).await {
            tracing::debug!("Delayed action cancelled");
        }
    });
    handle
}
