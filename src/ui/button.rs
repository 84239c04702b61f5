//! Immediate-mode buttons and hover tracking

use macroquad::prelude::*;

use super::{theme, MouseState, Rect};

/// Hit-test result for one button in one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonResponse {
    pub hovered: bool,
    pub clicked: bool,
}

/// Hit-test a rect against this frame's pointer
pub fn hit_test(mouse: &MouseState, rect: &Rect) -> ButtonResponse {
    ButtonResponse {
        hovered: mouse.inside(rect),
        clicked: mouse.clicked(rect),
    }
}

/// Draw a filled rectangle button with a text label (options screen style)
pub fn draw_rect_button(rect: &Rect, label: &str, hovered: bool) {
    let fill = if hovered {
        theme::BUTTON_HOVER_COLOR
    } else {
        theme::BUTTON_COLOR
    };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
    draw_text(
        label,
        rect.x + 40.0,
        rect.y + 32.0,
        theme::OPTION_FONT_SIZE,
        WHITE,
    );
}

/// Tracks which button the pointer is over so hover feedback fires once
/// per entry instead of every frame.
#[derive(Debug, Default)]
pub struct HoverTracker {
    current: Option<usize>,
}

impl HoverTracker {
    /// Feed this frame's hovered button index, if any. Returns true when
    /// the pointer moved onto a button it wasn't on last frame.
    pub fn entered(&mut self, hovered: Option<usize>) -> bool {
        let entered = hovered.is_some() && hovered != self.current;
        self.current = hovered;
        entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_fires_once_per_entry() {
        let mut tracker = HoverTracker::default();
        assert!(tracker.entered(Some(0)));
        assert!(!tracker.entered(Some(0)));
        assert!(!tracker.entered(Some(0)));
    }

    #[test]
    fn test_hover_fires_when_switching_buttons() {
        let mut tracker = HoverTracker::default();
        assert!(tracker.entered(Some(0)));
        assert!(tracker.entered(Some(1)));
        assert!(!tracker.entered(Some(1)));
    }

    #[test]
    fn test_hover_fires_again_after_leaving() {
        let mut tracker = HoverTracker::default();
        assert!(tracker.entered(Some(2)));
        assert!(!tracker.entered(None));
        assert!(tracker.entered(Some(2)));
    }

    #[test]
    fn test_no_hover_no_fire() {
        let mut tracker = HoverTracker::default();
        assert!(!tracker.entered(None));
        assert!(!tracker.entered(None));
    }

    #[test]
    fn test_hit_test() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let mouse = MouseState {
            x: 10.0,
            y: 10.0,
            left_pressed: true,
            left_released: false,
        };
        let response = hit_test(&mouse, &rect);
        assert!(response.hovered);
        assert!(response.clicked);

        let outside = MouseState {
            x: 200.0,
            y: 10.0,
            left_pressed: true,
            left_released: false,
        };
        let response = hit_test(&outside, &rect);
        assert!(!response.hovered);
        assert!(!response.clicked);
    }
}
