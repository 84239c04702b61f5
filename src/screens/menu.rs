//! Main menu
//!
//! Falling treats rain behind and in front of the window overlay while
//! three text buttons wait on the sidebar. Start and Options slide the
//! sidebar out before switching; Exit quits on the spot. Clicks are
//! ignored while a slide is running.

use macroquad::audio::play_sound_once;
use macroquad::prelude::*;

use crate::app::{App, Screen, ScreenRequest};
use crate::transition::{fade_out_alpha, Slide, SlideDirection};
use crate::ui::{theme, HoverTracker, MouseState, Rect};
use crate::view::{cover_scale, draw_cover, BASE_HEIGHT, BASE_WIDTH, BASE_X, BASE_Y};

use super::falling::{FallingItemPool, Layer};

/// Half the base width: how far the sidebar slides off
const SLIDE_DISTANCE: f32 = BASE_WIDTH / 2.0;
/// Duration for a 900 px/s slide across that distance
const SLIDE_DURATION: f32 = SLIDE_DISTANCE / 900.0;
/// Seconds for the splash cross-fade on first entry
const ENTRY_FADE: f32 = 1.0;

const BUTTON_LABELS: [&str; 3] = ["Start Game", "Options", "Exit"];
const START: usize = 0;
const OPTIONS: usize = 1;
const EXIT: usize = 2;

pub struct MenuState {
    items: FallingItemPool,
    slide: Option<Slide>,
    /// Screen to enter once an exit slide completes
    pending: Option<Screen>,
    hover: HoverTracker,
    /// Elapsed time of the splash cross-fade, if entering from the splash
    entry_fade: Option<f32>,
}

impl MenuState {
    pub fn new(play_fade: bool) -> Self {
        Self {
            items: FallingItemPool::new(macroquad::rand::rand()),
            slide: if play_fade {
                None
            } else {
                Some(Slide::new(SlideDirection::In, SLIDE_DISTANCE, SLIDE_DURATION))
            },
            pending: None,
            hover: HoverTracker::default(),
            entry_fade: if play_fade { Some(0.0) } else { None },
        }
    }

    pub fn update(&mut self, app: &mut App, dt: f32) -> Option<ScreenRequest> {
        self.items.update(dt);

        let mut offset = 0.0;
        let mut finished_exit = false;
        if let Some(slide) = &mut self.slide {
            slide.advance(dt);
            offset = slide.offset();
            if slide.finished() {
                match slide.direction() {
                    SlideDirection::In => self.slide = None,
                    SlideDirection::Out => finished_exit = true,
                }
            }
        }
        let transitioning = self.slide.is_some();

        let buttons = button_rects(offset);
        let mouse = MouseState::sample(&app.view);

        let mut hovered = None;
        for (i, rect) in buttons.iter().enumerate() {
            if mouse.inside(rect) {
                hovered = Some(i);
            }
        }
        if self.hover.entered(hovered) {
            play_sound_once(&app.assets.hover);
        }

        // A transition in progress blocks input-driven transitions
        let mut request = None;
        if !transitioning && mouse.left_pressed {
            match hovered {
                Some(START) => {
                    play_sound_once(&app.assets.select);
                    self.begin_exit(Screen::Gameplay);
                }
                Some(OPTIONS) => {
                    play_sound_once(&app.assets.select);
                    self.begin_exit(Screen::Options);
                }
                Some(EXIT) => {
                    play_sound_once(&app.assets.select);
                    request = Some(ScreenRequest::Exit);
                }
                _ => {}
            }
        }

        self.draw(app, offset, &buttons, hovered, dt);

        if finished_exit {
            if let Some(next) = self.pending.take() {
                return Some(ScreenRequest::Goto(next));
            }
        }
        request
    }

    fn begin_exit(&mut self, next: Screen) {
        self.slide = Some(Slide::new(
            SlideDirection::Out,
            SLIDE_DISTANCE,
            SLIDE_DURATION,
        ));
        self.pending = Some(next);
    }

    fn draw(&mut self, app: &App, offset: f32, buttons: &[Rect; 3], hovered: Option<usize>, dt: f32) {
        clear_background(theme::CLEAR_COLOR);

        draw_cover(&app.assets.background, 0.0, WHITE);
        self.items.draw(Layer::Back, &app.assets.falling_items);
        draw_cover(&app.assets.background_overlay, 0.0, WHITE);
        self.items.draw(Layer::Front, &app.assets.falling_items);

        // Mask everything outside the base area so falling items spawned
        // above the screen stay hidden in wide or tall windows
        const MASK: f32 = 2000.0;
        draw_rectangle(BASE_X, BASE_Y - MASK, BASE_WIDTH, MASK, BLACK);
        draw_rectangle(BASE_X, BASE_Y + BASE_HEIGHT, BASE_WIDTH, MASK, BLACK);
        draw_rectangle(BASE_X - MASK, BASE_Y, MASK, BASE_HEIGHT, BLACK);
        draw_rectangle(BASE_X + BASE_WIDTH, BASE_Y, MASK, BASE_HEIGHT, BLACK);

        // Sidebar and logo slide together with the buttons
        draw_cover(&app.assets.sidebar, -offset, WHITE);
        let logo = &app.assets.logo;
        let logo_scale = cover_scale(logo.width(), logo.height()) / 4.0;
        draw_texture_ex(
            logo,
            BASE_X - offset,
            BASE_Y - 50.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(
                    logo.width() * logo_scale,
                    logo.height() * logo_scale,
                )),
                ..Default::default()
            },
        );

        for (i, rect) in buttons.iter().enumerate() {
            let color = if hovered == Some(i) {
                if i == EXIT {
                    theme::EXIT_TEXT_HOVER
                } else {
                    theme::MENU_TEXT_HOVER
                }
            } else {
                theme::MENU_TEXT_COLOR
            };
            draw_text_ex(
                BUTTON_LABELS[i],
                rect.x + 40.0,
                rect.y + 65.0,
                TextParams {
                    font: Some(&app.assets.display_font),
                    font_size: theme::MENU_FONT_SIZE,
                    color,
                    ..Default::default()
                },
            );
        }

        // Cross-fade the splash background out on first entry
        if let Some(elapsed) = &mut self.entry_fade {
            *elapsed += dt;
            let alpha = fade_out_alpha(*elapsed, ENTRY_FADE);
            if alpha > 0 {
                draw_cover(
                    &app.assets.splash_background,
                    0.0,
                    Color::from_rgba(255, 255, 255, alpha),
                );
            } else {
                self.entry_fade = None;
            }
        }

        draw_text(
            &format!("FPS: {}", get_fps()),
            BASE_X + 5.0,
            BASE_Y + 20.0,
            20.0,
            DARKGREEN,
        );
    }
}

fn button_rects(offset: f32) -> [Rect; 3] {
    [
        Rect::new(BASE_X + 50.0 - offset, BASE_Y + 660.0, 400.0, 100.0),
        Rect::new(BASE_X + 50.0 - offset, BASE_Y + 760.0, 400.0, 100.0),
        Rect::new(BASE_X + 50.0 - offset, BASE_Y + 950.0, 400.0, 100.0),
    ]
}
