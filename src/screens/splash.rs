//! Splash screen
//!
//! Pure timed phases, no input: the studio background appears under a
//! fading white cover, the logo overlay fades in, holds, fades out, then
//! the menu takes over with a cross-fade.

use macroquad::audio::play_sound_once;
use macroquad::prelude::*;

use crate::app::{App, Screen, ScreenRequest};
use crate::transition::{fade_alpha, fade_out_alpha};
use crate::view::{draw_cover, BASE_HEIGHT, BASE_WIDTH, BASE_X, BASE_Y};

const WHITE_IN: f32 = 1.0;
const FADE_IN: f32 = 2.0;
const STAY: f32 = 3.0;
const FADE_OUT: f32 = 2.0;
/// Background-only beat before the menu
const TAIL: f32 = 3.0;

pub struct SplashState {
    elapsed: f32,
    jingle_played: bool,
}

impl SplashState {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            jingle_played: false,
        }
    }

    pub fn update(&mut self, app: &mut App, dt: f32) -> Option<ScreenRequest> {
        self.elapsed += dt;

        if !self.jingle_played && self.elapsed >= WHITE_IN {
            play_sound_once(&app.assets.meow);
            self.jingle_played = true;
        }

        clear_background(crate::ui::theme::CLEAR_COLOR);
        draw_cover(&app.assets.splash_background, 0.0, WHITE);

        if self.elapsed < WHITE_IN {
            let alpha = fade_out_alpha(self.elapsed, WHITE_IN);
            draw_rectangle(
                BASE_X,
                BASE_Y,
                BASE_WIDTH,
                BASE_HEIGHT,
                Color::from_rgba(255, 255, 255, alpha),
            );
        } else {
            let alpha = fade_alpha(self.elapsed - WHITE_IN, FADE_IN, STAY, FADE_OUT);
            draw_cover(
                &app.assets.splash_overlay,
                0.0,
                Color::from_rgba(255, 255, 255, alpha),
            );
        }

        if self.elapsed >= WHITE_IN + FADE_IN + STAY + FADE_OUT + TAIL {
            return Some(ScreenRequest::Goto(Screen::MainMenu { play_fade: true }));
        }
        None
    }
}
