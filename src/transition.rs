//! Timed fades and slide transitions
//!
//! Everything here is linear interpolation of accumulated elapsed time
//! over a fixed duration, clamped to [0, 1]. Screens own these as plain
//! values and advance them once per frame; a transition in progress blocks
//! input-driven transitions at the screen level.

/// Which way a slide moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// Offset runs from `distance` down to 0 (screen entering)
    In,
    /// Offset runs from 0 up to `distance` (screen exiting)
    Out,
}

/// A single-axis slide over a fixed distance and duration
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    direction: SlideDirection,
    distance: f32,
    duration: f32,
    elapsed: f32,
}

impl Slide {
    pub fn new(direction: SlideDirection, distance: f32, duration: f32) -> Self {
        Self {
            direction,
            distance,
            duration,
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }

    /// Normalized progress, clamped to [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Current pixel offset
    pub fn offset(&self) -> f32 {
        match self.direction {
            SlideDirection::In => self.distance * (1.0 - self.progress()),
            SlideDirection::Out => self.distance * self.progress(),
        }
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn direction(&self) -> SlideDirection {
        self.direction
    }
}

/// Alpha ramp for an overlay that fades in, holds, then fades out.
/// Returns 0..=255.
pub fn fade_alpha(elapsed: f32, fade_in: f32, stay: f32, fade_out: f32) -> u8 {
    let t = if elapsed < fade_in {
        elapsed / fade_in
    } else if elapsed < fade_in + stay {
        1.0
    } else {
        1.0 - ((elapsed - fade_in - stay) / fade_out).min(1.0)
    };
    (255.0 * t.clamp(0.0, 1.0)) as u8
}

/// Linear fade from opaque to transparent over `duration`.
/// Returns 0..=255.
pub fn fade_out_alpha(elapsed: f32, duration: f32) -> u8 {
    let t = 1.0 - (elapsed / duration).clamp(0.0, 1.0);
    (255.0 * t) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_out_monotonic_and_lands_on_distance() {
        let mut slide = Slide::new(SlideDirection::Out, 960.0, 1.0);
        let mut last = slide.offset();
        assert!((last - 0.0).abs() < 0.001);

        for _ in 0..20 {
            slide.advance(0.1);
            let offset = slide.offset();
            assert!(offset >= last);
            last = offset;
        }

        assert!(slide.finished());
        assert!((slide.offset() - 960.0).abs() < 0.001);
    }

    #[test]
    fn test_slide_in_runs_from_distance_to_zero() {
        let mut slide = Slide::new(SlideDirection::In, 960.0, 1.0);
        assert!((slide.offset() - 960.0).abs() < 0.001);

        slide.advance(0.5);
        assert!((slide.offset() - 480.0).abs() < 0.5);

        slide.advance(10.0);
        assert!(slide.finished());
        assert!(slide.offset().abs() < 0.001);
    }

    #[test]
    fn test_slide_zero_duration_finishes_immediately() {
        let slide = Slide::new(SlideDirection::Out, 100.0, 0.0);
        assert!(slide.finished());
        assert!((slide.offset() - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_fade_alpha_ramp() {
        assert_eq!(fade_alpha(0.0, 2.0, 3.0, 2.0), 0);
        let mid_in = fade_alpha(1.0, 2.0, 3.0, 2.0);
        assert!((mid_in as i32 - 127).abs() <= 1);
        assert_eq!(fade_alpha(2.0, 2.0, 3.0, 2.0), 255);
        assert_eq!(fade_alpha(4.9, 2.0, 3.0, 2.0), 255);
        let mid_out = fade_alpha(6.0, 2.0, 3.0, 2.0);
        assert!((mid_out as i32 - 127).abs() <= 1);
        assert_eq!(fade_alpha(7.0, 2.0, 3.0, 2.0), 0);
        assert_eq!(fade_alpha(100.0, 2.0, 3.0, 2.0), 0);
    }

    #[test]
    fn test_fade_out_alpha_bounds() {
        assert_eq!(fade_out_alpha(0.0, 1.0), 255);
        assert_eq!(fade_out_alpha(1.0, 1.0), 0);
        assert_eq!(fade_out_alpha(5.0, 1.0), 0);

        let mut last = 255;
        for step in 0..=10 {
            let alpha = fade_out_alpha(step as f32 * 0.1, 1.0);
            assert!(alpha <= last);
            last = alpha;
        }
    }
}
