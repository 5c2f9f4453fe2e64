//! Slide index state shared by the testimonial slider and the item gallery.
//!
//! Navigation wraps in both directions. Auto-advance runs on its own
//! interval; manual navigation moves the index but leaves the timer phase
//! alone.

use log::{debug, warn};
use std::time::Duration;

use super::timers::Interval;

#[derive(Debug, Clone)]
pub struct Carousel {
    current: usize,
    count: usize,
    autoplay: Option<Interval>,
}

impl Carousel {
    pub fn new(count: usize) -> Self {
        Self {
            current: 0,
            count,
            autoplay: None,
        }
    }

    pub fn with_autoplay(count: usize, period: Duration) -> Self {
        Self {
            autoplay: Some(Interval::new(period)),
            ..Self::new(count)
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// `(current + 1) mod count`
    pub fn next(&mut self) -> usize {
        if self.count > 0 {
            self.current = (self.current + 1) % self.count;
        }
        self.current
    }

    /// `(current - 1 + count) mod count`
    pub fn previous(&mut self) -> usize {
        if self.count > 0 {
            self.current = (self.current + self.count - 1) % self.count;
        }
        self.current
    }

    /// Jump straight to a slide. Returns `None` for an index past the end.
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        if index >= self.count {
            warn!("Ignoring slide {} of {}", index, self.count);
            return None;
        }
        self.current = index;
        Some(self.current)
    }

    /// Advance the auto-play timer. Returns the index if the timer fired.
    pub fn tick(&mut self, dt: Duration) -> Option<usize> {
        let fired = self.autoplay.as_mut().map_or(0, |interval| interval.advance(dt));
        if fired == 0 || self.count == 0 {
            return None;
        }

        let before = self.current;
        // Both operands are below `count`, so the sum cannot overflow.
        let steps = (fired % self.count as u64) as usize;
        self.current = (self.current + steps) % self.count;
        debug!("Auto-advanced carousel {} -> {}", before, self.current);
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_zero() {
        let mut carousel = Carousel::new(4);
        carousel.go_to(3);

        assert_eq!(carousel.next(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut carousel = Carousel::new(4);

        assert_eq!(carousel.previous(), 3);
        assert_eq!(carousel.previous(), 2);
    }

    #[test]
    fn test_go_to_out_of_range_is_ignored() {
        let mut carousel = Carousel::new(3);
        carousel.go_to(1);

        assert_eq!(carousel.go_to(3), None);
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_empty_carousel_stays_at_zero() {
        let mut carousel = Carousel::new(0);

        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.previous(), 0);
        assert_eq!(carousel.go_to(0), None);
    }

    #[test]
    fn test_autoplay_advances_every_period() {
        let mut carousel = Carousel::with_autoplay(3, Duration::from_secs(5));

        assert_eq!(carousel.tick(Duration::from_secs(4)), None);
        assert_eq!(carousel.tick(Duration::from_secs(1)), Some(1));
        assert_eq!(carousel.tick(Duration::from_secs(10)), Some(0));
    }

    #[test]
    fn test_manual_navigation_keeps_timer_phase() {
        let mut carousel = Carousel::with_autoplay(5, Duration::from_secs(5));

        carousel.tick(Duration::from_secs(3));
        carousel.go_to(3);

        // Two more seconds complete the original period.
        assert_eq!(carousel.tick(Duration::from_secs(2)), Some(4));
    }

    #[test]
    fn test_long_pause_advances_by_whole_periods() {
        let mut carousel = Carousel::with_autoplay(3, Duration::from_secs(5));

        // 1_000_000 periods, one more than a multiple of three.
        assert_eq!(carousel.tick(Duration::from_secs(5_000_000)), Some(1));
        assert_eq!(carousel.tick(Duration::from_secs(u64::MAX)), Some(1));
    }

    #[test]
    fn test_without_autoplay_tick_does_nothing() {
        let mut carousel = Carousel::new(3);

        assert_eq!(carousel.tick(Duration::from_secs(60)), None);
    }
}
