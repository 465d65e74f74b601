//! Rolling banner carousel state machine
//!
//! One `CarouselState` exists per rolling container. It tracks which slide is
//! visible, whether rotation is suspended by hover, and the active markers for
//! slides and indicators. Timing lives in [`crate::tasks::RotationTimer`];
//! this type only knows how to move between slides.

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

/// State of one rolling banner container
#[derive(Debug, Clone)]
pub struct CarouselState {
    current_index: usize,
    total_banners: usize,
    is_paused: bool,
    slide_active: Vec<bool>,
    /// Empty when indicators are not rendered
    indicator_active: Vec<bool>,
    /// Identifies the one timer allowed to advance this carousel
    timer_epoch: u64,
}

impl CarouselState {
    /// Create the state for `total_banners` slides with slide 0 active
    pub fn new(total_banners: usize, with_indicators: bool) -> Result<Self> {
        if total_banners == 0 {
            return Err(BoardError::NoEligibleBanners);
        }

        let mut slide_active = vec![false; total_banners];
        slide_active[0] = true;
        let indicator_active = if with_indicators {
            slide_active.clone()
        } else {
            Vec::new()
        };

        Ok(Self {
            current_index: 0,
            total_banners,
            is_paused: false,
            slide_active,
            indicator_active,
            timer_epoch: 0,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_banners(&self) -> usize {
        self.total_banners
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    /// Whether this carousel rotates at all
    pub fn is_rolling(&self) -> bool {
        self.total_banners > 1
    }

    pub fn slide_markers(&self) -> &[bool] {
        &self.slide_active
    }

    pub fn indicator_markers(&self) -> &[bool] {
        &self.indicator_active
    }

    /// Timer-driven advance. Suppressed while paused.
    ///
    /// Returns `true` when the visible slide changed.
    pub fn advance_to_next(&mut self) -> bool {
        if self.is_paused {
            return false;
        }
        let next = (self.current_index + 1) % self.total_banners;
        // `next` is always in range, so this cannot fail
        self.go_to_slide(next).unwrap_or(false)
    }

    /// Move the active markers to `target`.
    ///
    /// Selecting the current slide is a no-op and returns `Ok(false)`.
    pub fn go_to_slide(&mut self, target: usize) -> Result<bool> {
        if target >= self.total_banners {
            return Err(BoardError::InvalidSlide {
                index: target,
                total: self.total_banners,
            });
        }
        if target == self.current_index {
            return Ok(false);
        }

        self.slide_active[self.current_index] = false;
        if !self.indicator_active.is_empty() {
            self.indicator_active[self.current_index] = false;
        }

        self.slide_active[target] = true;
        if !self.indicator_active.is_empty() {
            self.indicator_active[target] = true;
        }

        self.current_index = target;
        Ok(true)
    }

    pub fn pause(&mut self) {
        self.is_paused = true;
    }

    pub fn resume(&mut self) {
        self.is_paused = false;
    }

    pub(crate) fn timer_epoch(&self) -> u64 {
        self.timer_epoch
    }

    /// Claim the carousel for a new timer, invalidating any previous one
    pub(crate) fn begin_timer_epoch(&mut self) -> u64 {
        self.timer_epoch += 1;
        self.timer_epoch
    }

    pub fn snapshot(&self, timer_running: bool) -> CarouselSnapshot {
        CarouselSnapshot {
            current_index: self.current_index,
            total_banners: self.total_banners,
            is_paused: self.is_paused,
            timer_running,
        }
    }
}

/// Serializable view of a carousel for the control API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselSnapshot {
    pub current_index: usize,
    pub total_banners: usize,
    pub is_paused: bool,
    pub timer_running: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(markers: &[bool]) -> usize {
        markers.iter().filter(|a| **a).count()
    }

    fn assert_single_active(state: &CarouselState) {
        assert_eq!(active_count(state.slide_markers()), 1);
        assert!(state.slide_markers()[state.current_index()]);
        if !state.indicator_markers().is_empty() {
            assert_eq!(active_count(state.indicator_markers()), 1);
            assert!(state.indicator_markers()[state.current_index()]);
        }
    }

    #[test]
    fn zero_banners_is_rejected() {
        assert!(matches!(
            CarouselState::new(0, true),
            Err(BoardError::NoEligibleBanners)
        ));
    }

    #[test]
    fn exactly_one_slide_active_through_any_sequence() {
        for total in 2..=6 {
            let mut state = CarouselState::new(total, true).unwrap();
            assert_single_active(&state);
            for step in 0..(total * 3) {
                if step % 4 == 3 {
                    state.go_to_slide((step * 7) % total).unwrap();
                } else {
                    state.advance_to_next();
                }
                assert_single_active(&state);
            }
        }
    }

    #[test]
    fn selecting_current_slide_changes_nothing() {
        let mut state = CarouselState::new(4, true).unwrap();
        state.go_to_slide(2).unwrap();
        let slides = state.slide_markers().to_vec();
        let indicators = state.indicator_markers().to_vec();

        assert!(!state.go_to_slide(2).unwrap());
        assert_eq!(state.current_index(), 2);
        assert_eq!(state.slide_markers(), slides.as_slice());
        assert_eq!(state.indicator_markers(), indicators.as_slice());
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut state = CarouselState::new(5, true).unwrap();
        for _ in 0..10 {
            state.advance_to_next();
        }
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn pause_then_resume_keeps_index() {
        let mut state = CarouselState::new(3, true).unwrap();
        state.advance_to_next();
        state.pause();
        state.resume();
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn three_banner_pause_scenario() {
        let mut state = CarouselState::new(3, true).unwrap();
        assert!(state.advance_to_next());
        assert_eq!(state.slide_markers(), &[false, true, false]);

        state.pause();
        assert!(!state.advance_to_next());
        assert_eq!(state.slide_markers(), &[false, true, false]);

        state.resume();
        assert!(state.advance_to_next());
        assert_eq!(state.slide_markers(), &[false, false, true]);
        assert_eq!(state.indicator_markers(), &[false, false, true]);
    }

    #[test]
    fn single_banner_never_moves() {
        let mut state = CarouselState::new(1, true).unwrap();
        assert!(!state.is_rolling());
        for _ in 0..5 {
            assert!(!state.advance_to_next());
        }
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.slide_markers(), &[true]);
    }

    #[test]
    fn out_of_range_target_is_rejected() {
        let mut state = CarouselState::new(2, false).unwrap();
        assert!(matches!(
            state.go_to_slide(2),
            Err(BoardError::InvalidSlide { index: 2, total: 2 })
        ));
        assert_eq!(state.current_index(), 0);
        assert!(state.indicator_markers().is_empty());
    }

    #[test]
    fn epochs_are_monotonic() {
        let mut state = CarouselState::new(2, true).unwrap();
        let first = state.begin_timer_epoch();
        let second = state.begin_timer_epoch();
        assert!(second > first);
        assert_eq!(state.timer_epoch(), second);
    }
}
