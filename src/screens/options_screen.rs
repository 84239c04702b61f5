//! Options screen
//!
//! Five world-space rows: difficulty, resolution, target fps, fullscreen,
//! back. Every click mutates the live options and re-applies them to the
//! window immediately. The click that opened the screen is swallowed by a
//! first-frame guard.

use macroquad::prelude::*;

use crate::app::{App, Screen, ScreenRequest};
use crate::ui::{draw_rect_button, hit_test, ButtonResponse, MouseState, Rect};
use crate::view::{draw_cover, BASE_X, BASE_Y};

const DIFFICULTY: usize = 0;
const RESOLUTION: usize = 1;
const FPS: usize = 2;
const FULLSCREEN: usize = 3;
const BACK: usize = 4;

fn row_rects() -> [Rect; 5] {
    [
        Rect::new(BASE_X + 100.0, BASE_Y + 30.0, 200.0, 50.0),
        Rect::new(BASE_X + 100.0, BASE_Y + 120.0, 200.0, 50.0),
        Rect::new(BASE_X + 100.0, BASE_Y + 220.0, 200.0, 50.0),
        Rect::new(BASE_X + 100.0, BASE_Y + 320.0, 200.0, 50.0),
        Rect::new(BASE_X + 100.0, BASE_Y + 480.0, 200.0, 50.0),
    ]
}

pub struct OptionsScreenState {
    first_frame: bool,
}

impl OptionsScreenState {
    pub fn new() -> Self {
        Self { first_frame: true }
    }

    pub fn update(&mut self, app: &mut App) -> Option<ScreenRequest> {
        let rects = row_rects();
        let mouse = MouseState::sample(&app.view);

        let mut responses = [ButtonResponse::default(); 5];
        for (response, rect) in responses.iter_mut().zip(&rects) {
            *response = hit_test(&mouse, rect);
        }

        let mut request = None;
        if !self.first_frame {
            if responses[DIFFICULTY].clicked {
                app.options.difficulty = app.options.difficulty.next();
            } else if responses[RESOLUTION].clicked {
                let next = app.options.resolution.toggle();
                app.view.set_resolution(&mut app.options, next);
            } else if responses[FPS].clicked {
                app.options.fps = app.options.fps.next();
            } else if responses[FULLSCREEN].clicked {
                app.view.toggle_fullscreen(&mut app.options);
            } else if responses[BACK].clicked {
                request = Some(ScreenRequest::Goto(Screen::MainMenu { play_fade: false }));
            }
        }
        self.first_frame = false;

        clear_background(BLACK);
        draw_cover(&app.assets.background, 0.0, WHITE);

        let difficulty_label = format!("Difficulty: {}", app.options.difficulty.label());
        let resolution_label = app.options.resolution.label();
        let fps_label = format!("Fps: {}", app.options.fps.label());
        let labels = [
            difficulty_label.as_str(),
            resolution_label.as_str(),
            fps_label.as_str(),
            "Fullscreen",
            "Back",
        ];
        for i in 0..rects.len() {
            draw_rect_button(&rects[i], labels[i], responses[i].hovered);
        }

        request
    }
}
