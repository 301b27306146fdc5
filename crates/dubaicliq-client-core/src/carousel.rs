//! Homepage carousel: cyclic slide index plus a single auto-advance timer.

use tracing::debug;

/// Repeating timer source. Dropping or cancelling a handle must stop its ticks.
pub trait IntervalScheduler {
    type Handle;

    fn schedule(&mut self, period_ms: u32) -> Self::Handle;
    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    PrevClicked,
    NextClicked,
    DotClicked(usize),
    PointerEntered,
    PointerLeft,
    FocusIn,
    FocusOut,
    Tick,
}

pub struct CarouselState<S: IntervalScheduler> {
    index: usize,
    slide_count: usize,
    reduced_motion: bool,
    period_ms: u32,
    scheduler: S,
    timer: Option<S::Handle>,
}

/// `((i % n) + n) % n`, so stepping back from slide 0 lands on the last one.
#[must_use]
pub fn normalize_index(index: i64, slide_count: usize) -> usize {
    let count = i64::try_from(slide_count).unwrap_or(i64::MAX);
    if count == 0 {
        return 0;
    }
    usize::try_from(((index % count) + count) % count).unwrap_or(0)
}

impl<S: IntervalScheduler> CarouselState<S> {
    /// A carousel without slides has nothing to rotate and is treated as absent.
    pub fn new(
        slide_count: usize,
        reduced_motion: bool,
        period_ms: u32,
        scheduler: S,
    ) -> Option<Self> {
        if slide_count == 0 {
            return None;
        }
        Some(Self {
            index: 0,
            slide_count,
            reduced_motion,
            period_ms,
            scheduler,
            timer: None,
        })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[must_use]
    pub fn auto_advance_active(&self) -> bool {
        self.timer.is_some()
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn set_active(&mut self, index: i64) -> usize {
        self.index = normalize_index(index, self.slide_count);
        self.index
    }

    pub fn next(&mut self) -> usize {
        self.set_active(self.signed_index() + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.set_active(self.signed_index() - 1)
    }

    pub fn start(&mut self) {
        if self.reduced_motion || self.timer.is_some() {
            return;
        }
        self.timer = Some(self.scheduler.schedule(self.period_ms));
        debug!(period_ms = self.period_ms, "carousel auto-advance started");
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
            debug!("carousel auto-advance stopped");
        }
    }

    /// Returns the new index when the visible slide may have changed.
    pub fn handle(&mut self, event: CarouselEvent) -> Option<usize> {
        match event {
            CarouselEvent::PrevClicked => Some(self.restarting(Self::prev)),
            CarouselEvent::NextClicked => Some(self.restarting(Self::next)),
            CarouselEvent::DotClicked(dot) => {
                let target = i64::try_from(dot).unwrap_or(i64::MAX);
                Some(self.restarting(|state| state.set_active(target)))
            }
            CarouselEvent::PointerEntered | CarouselEvent::FocusIn => {
                self.stop();
                None
            }
            CarouselEvent::PointerLeft | CarouselEvent::FocusOut => {
                self.start();
                None
            }
            CarouselEvent::Tick => Some(self.next()),
        }
    }

    // Manual navigation resets the auto-advance clock instead of letting a
    // pending tick fire right after the click.
    fn restarting(&mut self, step: impl FnOnce(&mut Self) -> usize) -> usize {
        self.stop();
        let index = step(self);
        self.start();
        index
    }

    fn signed_index(&self) -> i64 {
        i64::try_from(self.index).unwrap_or(0)
    }
}

impl<S: IntervalScheduler> Drop for CarouselState<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
