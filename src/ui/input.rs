//! Per-frame pointer state in world coordinates

use macroquad::prelude::*;

use super::Rect;
use crate::view::View;

/// Mouse state sampled once per frame, positions in world space
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_pressed: bool,
    pub left_released: bool,
}

impl MouseState {
    /// Sample the current frame's pointer through the view's camera
    pub fn sample(view: &View) -> Self {
        let world = view.mouse_world();
        Self {
            x: world.x,
            y: world.y,
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            left_released: is_mouse_button_released(MouseButton::Left),
        }
    }

    /// Check if the pointer is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if the pointer just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && self.inside(rect)
    }
}
