//! Smooth-scroll animation between page sections

use std::time::{Duration, Instant};

/// Animation phase for a section scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPhase {
    /// Target section sliding into place
    Scrolling,
    /// Animation finished
    Complete,
}

/// Which way the page moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Towards later sections; content enters from the bottom
    Down,
    /// Towards earlier sections; content enters from the top
    Up,
}

/// Section scroll animation state
#[derive(Debug)]
pub struct ScrollAnimation {
    pub start_time: Instant,
    pub direction: ScrollDirection,
    pub phase: ScrollPhase,
    /// Fraction of the distance still to travel (1.0 at start, 0.0 at rest)
    pub remaining: f32,
}

impl ScrollAnimation {
    const ANIMATION_DURATION: Duration = Duration::from_millis(400);

    pub fn new(direction: ScrollDirection) -> Self {
        Self {
            start_time: Instant::now(),
            direction,
            phase: ScrollPhase::Scrolling,
            remaining: 1.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self) {
        if self.is_complete() {
            return;
        }
        let elapsed = self.start_time.elapsed();

        if elapsed < Self::ANIMATION_DURATION {
            self.phase = ScrollPhase::Scrolling;
            let progress = elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
            // cubic ease-out: fast start, gentle landing
            self.remaining = 1.0 - simple_easing::cubic_out(progress);
        } else {
            self.skip();
        }
    }

    /// Rows the incoming section is still displaced by, for a viewport height
    pub fn row_offset(&self, height: u16) -> u16 {
        let rows = (self.remaining.clamp(0.0, 1.0) * height as f32).round() as u16;
        rows.min(height)
    }

    /// Jump to the end
    pub fn skip(&mut self) {
        self.phase = ScrollPhase::Complete;
        self.remaining = 0.0;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == ScrollPhase::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_fully_displaced() {
        let anim = ScrollAnimation::new(ScrollDirection::Down);
        assert_eq!(anim.phase, ScrollPhase::Scrolling);
        assert_eq!(anim.remaining, 1.0);
        assert_eq!(anim.row_offset(30), 30);
    }

    #[test]
    fn test_update_right_away_keeps_scrolling() {
        let mut anim = ScrollAnimation::new(ScrollDirection::Up);
        anim.update();
        assert!(!anim.is_complete());
        assert!(anim.remaining > 0.0);
    }

    #[test]
    fn test_skip_lands_on_target() {
        let mut anim = ScrollAnimation::new(ScrollDirection::Down);
        anim.skip();
        assert!(anim.is_complete());
        assert_eq!(anim.row_offset(40), 0);
    }

    #[test]
    fn test_update_after_skip_stays_complete() {
        let mut anim = ScrollAnimation::new(ScrollDirection::Down);
        anim.skip();
        anim.update();
        assert!(anim.is_complete());
        assert_eq!(anim.row_offset(40), 0);
    }

    #[test]
    fn test_update_after_duration_completes() {
        let mut anim = ScrollAnimation::new(ScrollDirection::Down);
        anim.start_time = Instant::now() - Duration::from_secs(1);
        anim.update();
        assert!(anim.is_complete());
        assert_eq!(anim.remaining, 0.0);
    }

    #[test]
    fn test_halfway_offset_is_within_viewport() {
        let mut anim = ScrollAnimation::new(ScrollDirection::Down);
        anim.start_time = Instant::now() - Duration::from_millis(200);
        anim.update();
        let offset = anim.row_offset(20);
        assert!(offset < 20);
    }

    #[test]
    fn test_row_offset_zero_height() {
        let anim = ScrollAnimation::new(ScrollDirection::Up);
        assert_eq!(anim.row_offset(0), 0);
    }
}
