//! Cosmetic upload progress.
//!
//! DESIGN
//! ======
//! The endpoint gives no byte-level progress, so a fixed-interval counter
//! stands in for it: +10 every 500 ms, stopping at 90. Only a confirmed
//! success moves the bar to 100 (see [`crate::Uploader::finish`]).
//!
//! [`with_simulated_progress`] owns both the request and the tick stream.
//! When the request settles the function returns and the tick stream is
//! dropped with it, so no tick can be observed after settlement on any exit
//! path, including cancellation of the outer future.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{Either, select};
use futures::{Stream, StreamExt};

/// Interval between simulated progress steps, in milliseconds.
pub const PROGRESS_TICK_MS: u32 = 500;
/// Interval between simulated progress steps.
pub const PROGRESS_TICK: Duration = Duration::from_millis(500);
/// Percentage added per tick.
pub const PROGRESS_STEP: u8 = 10;
/// Highest value the simulation reaches on its own.
pub const PROGRESS_CAP: u8 = 90;

/// Counter behind the simulated progress bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressSimulation {
    value: u8,
}

impl ProgressSimulation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.value
    }

    #[must_use]
    pub fn is_capped(self) -> bool {
        self.value >= PROGRESS_CAP
    }

    /// Advance one step. Returns the new value, or `None` once capped.
    pub fn tick(&mut self) -> Option<u8> {
        if self.is_capped() {
            return None;
        }
        self.value = self.value.saturating_add(PROGRESS_STEP).min(PROGRESS_CAP);
        Some(self.value)
    }
}

/// Await `request` while feeding simulated progress to `on_progress`.
///
/// Each item from `ticks` advances a [`ProgressSimulation`]; the callback sees
/// every new value (never above 90). Once the cap is reached, or the tick
/// stream ends, ticks are no longer polled. Returns the request's output as
/// soon as it is ready.
pub async fn with_simulated_progress<R, S>(request: R, ticks: S, mut on_progress: impl FnMut(u8)) -> R::Output
where
    R: Future,
    S: Stream,
{
    let mut request = pin!(request);
    let mut ticks = pin!(ticks);
    let mut simulation = ProgressSimulation::new();

    while !simulation.is_capped() {
        let tick = match select(request.as_mut(), ticks.next()).await {
            Either::Left((output, _)) => return output,
            Either::Right((tick, _)) => tick,
        };
        if tick.is_none() {
            break;
        }
        if let Some(value) = simulation.tick() {
            on_progress(value);
        }
    }

    tracing::debug!(progress = simulation.value(), "progress simulation idle, awaiting request");
    request.await
}
