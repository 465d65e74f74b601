//! Per-container carousel registry
//!
//! The board replaces page-global carousel bookkeeping with an explicit
//! container keyed by container id. Each entry owns its carousel state and,
//! for rotating carousels, exactly one [`RotationTimer`]. Replacing or
//! disposing an entry drops that timer before anything else is created.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};
use tracing::{debug, info};

use super::{
    Banner, CarouselSnapshot, CarouselState, ContainerView, Indicator, Layout, RenderedSlide,
    SlideView, Viewport,
};
use crate::{
    config::CarouselSettings,
    error::{BoardError, Result},
    tasks::{RotationTimer, SharedCarousel, MIN_INTERVAL},
};

#[derive(Debug)]
struct ContainerSlot {
    layout: Layout,
    slides: Vec<SlideView>,
    carousel: Option<SharedCarousel>,
    timer: Option<RotationTimer>,
}

impl ContainerSlot {
    fn carousel(&self, container_id: &str) -> Result<&SharedCarousel> {
        self.carousel
            .as_ref()
            .ok_or_else(|| BoardError::NotRolling(container_id.to_string()))
    }
}

/// All rendered containers of a page
#[derive(Debug)]
pub struct Board {
    settings: CarouselSettings,
    containers: HashMap<String, ContainerSlot>,
}

impl Board {
    pub fn new(mut settings: CarouselSettings) -> Self {
        settings.interval = settings.interval.max(MIN_INTERVAL);
        settings.max_banners = settings.max_banners.max(1);
        Self {
            settings,
            containers: HashMap::new(),
        }
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    /// Render `banners` into a container, replacing whatever it showed.
    ///
    /// The list is capped to the layout's capacity first and then filtered
    /// for the viewport. Returns `None` when nothing is eligible, in which
    /// case the container is hidden and holds no carousel state.
    pub fn render(
        &mut self,
        container_id: &str,
        layout: Layout,
        banners: &[Banner],
        viewport: Viewport,
    ) -> Result<Option<ContainerView>> {
        self.dispose(container_id);

        let capped = &banners[..banners.len().min(layout.capacity(self.settings.max_banners))];
        let eligible = viewport.eligible(capped);
        if eligible.is_empty() {
            debug!("{}: no eligible banners for width {}", container_id, viewport.width);
            return Ok(None);
        }

        // Only the first slide of a rotating carousel loads eagerly
        let rotating = layout == Layout::Rolling && eligible.len() > 1;
        let slides: Vec<SlideView> = eligible
            .iter()
            .enumerate()
            .map(|(i, banner)| SlideView::from_banner(banner, viewport, rotating && i == 0))
            .collect();
        let count = slides.len();

        self.containers.insert(
            container_id.to_string(),
            ContainerSlot {
                layout,
                slides,
                carousel: None,
                timer: None,
            },
        );

        if layout == Layout::Rolling {
            self.initialize(container_id, count)?;
        }

        info!("{}: rendered {} {:?} banner(s)", container_id, count, layout);
        Ok(self.view(container_id))
    }

    /// Create fresh carousel state for a rendered container.
    ///
    /// Any previous carousel and timer of the container are discarded first.
    /// A timer is only started when there is more than one banner.
    pub fn initialize(&mut self, container_id: &str, banner_count: usize) -> Result<()> {
        let period = self.settings.interval;
        let with_indicators = self.settings.show_indicators && banner_count > 1;
        let banner_count = banner_count.min(self.settings.max_banners);

        let slot = self
            .containers
            .get_mut(container_id)
            .ok_or_else(|| BoardError::UnknownContainer(container_id.to_string()))?;
        if let Some(timer) = slot.timer.take() {
            timer.stop();
        }
        slot.carousel = None;

        let carousel = Arc::new(Mutex::new(CarouselState::new(banner_count, with_indicators)?));
        if banner_count > 1 {
            slot.timer = Some(RotationTimer::start(container_id, Arc::clone(&carousel), period)?);
        }
        slot.carousel = Some(carousel);
        Ok(())
    }

    /// Simulate one timer fire
    pub fn advance_to_next(&mut self, container_id: &str) -> Result<bool> {
        let slot = self.slot(container_id)?;
        let mut state = lock(slot.carousel(container_id)?, container_id)?;
        Ok(state.advance_to_next())
    }

    pub fn go_to_slide(&mut self, container_id: &str, target: usize) -> Result<bool> {
        let slot = self.slot(container_id)?;
        let mut state = lock(slot.carousel(container_id)?, container_id)?;
        state.go_to_slide(target)
    }

    /// Indicator click: move to `target` and, unless paused, restart the
    /// countdown so the next auto-advance is a full interval away.
    pub fn jump_to_slide(&mut self, container_id: &str, target: usize) -> Result<bool> {
        let period = self.settings.interval;
        let slot = self
            .containers
            .get_mut(container_id)
            .ok_or_else(|| BoardError::UnknownContainer(container_id.to_string()))?;
        let carousel = Arc::clone(slot.carousel(container_id)?);

        let (moved, restart) = {
            let mut state = lock(&carousel, container_id)?;
            let moved = state.go_to_slide(target)?;
            (moved, !state.is_paused() && state.is_rolling())
        };

        if restart {
            if let Some(timer) = slot.timer.take() {
                timer.stop();
            }
            slot.timer = Some(RotationTimer::start(container_id, carousel, period)?);
        }
        Ok(moved)
    }

    pub fn pause(&mut self, container_id: &str) -> Result<()> {
        let slot = self.slot(container_id)?;
        lock(slot.carousel(container_id)?, container_id)?.pause();
        Ok(())
    }

    pub fn resume(&mut self, container_id: &str) -> Result<()> {
        let slot = self.slot(container_id)?;
        lock(slot.carousel(container_id)?, container_id)?.resume();
        Ok(())
    }

    /// Pointer entered the carousel. Returns whether it paused rotation.
    pub fn pointer_enter(&mut self, container_id: &str) -> Result<bool> {
        if !self.settings.pause_on_hover {
            self.slot(container_id)?;
            return Ok(false);
        }
        self.pause(container_id)?;
        Ok(true)
    }

    /// Pointer left the carousel. Returns whether it resumed rotation.
    pub fn pointer_leave(&mut self, container_id: &str) -> Result<bool> {
        if !self.settings.pause_on_hover {
            self.slot(container_id)?;
            return Ok(false);
        }
        self.resume(container_id)?;
        Ok(true)
    }

    /// Drop a container together with its timer. Missing ids are ignored.
    pub fn dispose(&mut self, container_id: &str) -> bool {
        match self.containers.remove(container_id) {
            Some(slot) => {
                if let Some(timer) = slot.timer {
                    debug!("{}: stopping rotation timer", container_id);
                    timer.stop();
                }
                true
            }
            None => false,
        }
    }

    /// Release every live timer and forget all containers
    pub fn teardown(&mut self) -> usize {
        let timers = self.live_timers();
        for (_, slot) in self.containers.drain() {
            if let Some(timer) = slot.timer {
                timer.stop();
            }
        }
        info!("Board torn down, {} rotation timer(s) cleared", timers);
        timers
    }

    pub fn contains(&self, container_id: &str) -> bool {
        self.containers.contains_key(container_id)
    }

    pub fn live_timers(&self) -> usize {
        self.containers.values().filter(|s| s.timer.is_some()).count()
    }

    pub fn container_ids(&self) -> impl Iterator<Item = &str> {
        self.containers.keys().map(String::as_str)
    }

    pub fn snapshot(&self, container_id: &str) -> Option<CarouselSnapshot> {
        let slot = self.containers.get(container_id)?;
        let carousel = slot.carousel.as_ref()?;
        let state = carousel.lock().ok()?;
        Some(state.snapshot(slot.timer.is_some()))
    }

    /// Current declarative view of a rendered container
    pub fn view(&self, container_id: &str) -> Option<ContainerView> {
        let slot = self.containers.get(container_id)?;

        let (slides, indicators, carousel) = match &slot.carousel {
            Some(carousel) => {
                let state = carousel.lock().ok()?;
                let slides: Vec<RenderedSlide> = slot
                    .slides
                    .iter()
                    .zip(state.slide_markers())
                    .map(|(slide, active)| RenderedSlide {
                        slide: slide.clone(),
                        active: *active,
                    })
                    .collect();
                let indicators: Vec<Indicator> = state
                    .indicator_markers()
                    .iter()
                    .enumerate()
                    .map(|(index, active)| Indicator {
                        index,
                        active: *active,
                    })
                    .collect();
                (slides, indicators, Some(state.snapshot(slot.timer.is_some())))
            }
            None => {
                let slides = slot
                    .slides
                    .iter()
                    .map(|slide| RenderedSlide {
                        slide: slide.clone(),
                        active: true,
                    })
                    .collect();
                (slides, Vec::new(), None)
            }
        };

        Some(ContainerView {
            container_id: container_id.to_string(),
            layout: Some(slot.layout),
            visible: true,
            slides,
            indicators,
            carousel,
        })
    }

    fn slot(&self, container_id: &str) -> Result<&ContainerSlot> {
        self.containers
            .get(container_id)
            .ok_or_else(|| BoardError::UnknownContainer(container_id.to_string()))
    }
}

impl Drop for Board {
    fn drop(&mut self) {
        if !self.containers.is_empty() {
            self.teardown();
        }
    }
}

fn lock<'a>(
    carousel: &'a SharedCarousel,
    container_id: &str,
) -> Result<MutexGuard<'a, CarouselState>> {
    carousel
        .lock()
        .map_err(|e| BoardError::LockPoisoned(format!("carousel {}: {}", container_id, e)))
}
