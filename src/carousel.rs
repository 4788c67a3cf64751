// 🎠 Testimonial Carousel - timed rotation over a fixed list
//
// The carousel owns its timer; elapsed time is fed in through `tick`.
// Reduced motion disables auto-advance entirely. Manual navigation always
// works and never touches the timer.

use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(6);

#[derive(Debug, Clone)]
pub struct TestimonialCarousel {
    len: usize,
    index: usize,
    interval: Duration,
    reduced_motion: bool,
    elapsed: Duration,
}

impl TestimonialCarousel {
    pub fn new(len: usize, interval: Duration, reduced_motion: bool) -> Self {
        TestimonialCarousel {
            len,
            index: 0,
            interval,
            reduced_motion,
            elapsed: Duration::ZERO,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the timer is allowed to move the carousel on its own
    pub fn auto_advances(&self) -> bool {
        !self.reduced_motion && self.len > 1 && !self.interval.is_zero()
    }

    /// Feed elapsed wall time. Advances once per whole interval.
    /// Returns how many slides the carousel moved.
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        if !self.auto_advances() {
            return 0;
        }

        self.elapsed += elapsed;
        let mut advanced = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.index = (self.index + 1) % self.len;
            advanced += 1;
        }
        advanced
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to slide `i`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, i: usize) -> bool {
        if i >= self.len {
            return false;
        }
        self.index = i;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_advance_wraps() {
        let mut carousel = TestimonialCarousel::new(3, DEFAULT_INTERVAL, false);

        assert_eq!(carousel.tick(Duration::from_secs(5)), 0);
        assert_eq!(carousel.index(), 0);

        assert_eq!(carousel.tick(Duration::from_secs(1)), 1);
        assert_eq!(carousel.index(), 1);

        assert_eq!(carousel.tick(Duration::from_secs(12)), 2);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_reduced_motion_disables_auto_advance() {
        let mut carousel = TestimonialCarousel::new(5, DEFAULT_INTERVAL, true);

        assert!(!carousel.auto_advances());
        assert_eq!(carousel.tick(Duration::from_secs(60)), 0);
        assert_eq!(carousel.index(), 0);

        carousel.next();
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_manual_navigation() {
        let mut carousel = TestimonialCarousel::new(4, DEFAULT_INTERVAL, false);

        carousel.prev();
        assert_eq!(carousel.index(), 3);
        carousel.next();
        assert_eq!(carousel.index(), 0);

        assert!(carousel.go_to(2));
        assert_eq!(carousel.index(), 2);
        assert!(!carousel.go_to(4));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_manual_navigation_keeps_timer() {
        let mut carousel = TestimonialCarousel::new(4, DEFAULT_INTERVAL, false);

        carousel.tick(Duration::from_secs(4));
        carousel.go_to(2);
        // 4s already accumulated before the jump
        assert_eq!(carousel.tick(Duration::from_secs(2)), 1);
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn test_empty_and_single_item() {
        let mut empty = TestimonialCarousel::new(0, DEFAULT_INTERVAL, false);
        empty.next();
        empty.prev();
        assert_eq!(empty.index(), 0);
        assert!(!empty.go_to(0));

        let mut single = TestimonialCarousel::new(1, DEFAULT_INTERVAL, false);
        assert_eq!(single.tick(Duration::from_secs(30)), 0);
        assert_eq!(single.index(), 0);
    }
}
