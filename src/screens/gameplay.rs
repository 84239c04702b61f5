//! Placeholder gameplay screen: a draggable circle over the background

use macroquad::prelude::*;

use crate::app::{App, ScreenRequest};
use crate::ui::MouseState;
use crate::view::{draw_cover, BASE_X, BASE_Y};

const CIRCLE_RADIUS: f32 = 30.0;

pub struct GameplayState {
    circle_pos: Vec2,
    dragging: bool,
}

impl GameplayState {
    pub fn new() -> Self {
        Self {
            circle_pos: vec2(100.0, 50.0),
            dragging: false,
        }
    }

    pub fn update(&mut self, app: &mut App) -> Option<ScreenRequest> {
        let mouse = MouseState::sample(&app.view);
        let mouse_pos = vec2(mouse.x, mouse.y);

        if mouse.left_pressed && mouse_pos.distance(self.circle_pos) <= CIRCLE_RADIUS {
            self.dragging = true;
        }
        if mouse.left_released {
            self.dragging = false;
        }
        if self.dragging {
            self.circle_pos = mouse_pos;
        }

        clear_background(BLACK);
        draw_cover(&app.assets.background, 0.0, WHITE);
        draw_circle(self.circle_pos.x, self.circle_pos.y, CIRCLE_RADIUS, BLUE);
        draw_text("Hello, Test!", BASE_X + 20.0, BASE_Y + 40.0, 20.0, WHITE);

        None
    }
}
