//! Rotation timer background task

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, error};

use crate::{
    error::{BoardError, Result},
    state::CarouselState,
};

/// Shortest allowed rotation interval; shorter periods are raised to this
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Carousel state shared between the board and its timer task
pub type SharedCarousel = Arc<Mutex<CarouselState>>;

/// Owned handle to the single repeating timer of one carousel.
///
/// The timer stops when the handle is stopped or dropped, so a container
/// can only leak a timer by leaking its handle.
#[derive(Debug)]
pub struct RotationTimer {
    handle: JoinHandle<()>,
    epoch: u64,
}

impl RotationTimer {
    /// Start ticking every `period`; the first fire is one full period away.
    ///
    /// Starting a timer invalidates any earlier timer on the same carousel.
    pub fn start(container_id: &str, carousel: SharedCarousel, period: Duration) -> Result<Self> {
        let period = period.max(MIN_INTERVAL);
        let epoch = carousel
            .lock()
            .map_err(|e| BoardError::LockPoisoned(format!("carousel {}: {}", container_id, e)))?
            .begin_timer_epoch();

        debug!(
            "Starting rotation timer for {} (epoch {}, every {:?})",
            container_id, epoch, period
        );
        let handle = tokio::spawn(rotation_timer_task(
            container_id.to_string(),
            carousel,
            period,
            epoch,
        ));

        Ok(Self { handle, epoch })
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Stop the timer, consuming the handle
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for RotationTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Fires `advance_to_next` at a fixed cadence. Pause is checked by the
/// carousel at fire time, so the cadence is unaffected by hovering.
async fn rotation_timer_task(
    container_id: String,
    carousel: SharedCarousel,
    period: Duration,
    epoch: u64,
) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let keep_running = match carousel.lock() {
            Ok(mut state) => {
                if state.timer_epoch() != epoch {
                    debug!("Rotation timer for {} superseded", container_id);
                    false
                } else {
                    if state.advance_to_next() {
                        debug!("{} advanced to slide {}", container_id, state.current_index());
                    }
                    true
                }
            }
            Err(e) => {
                error!("Failed to lock carousel {}: {}", container_id, e);
                false
            }
        };

        if !keep_running {
            break;
        }
    }
}
