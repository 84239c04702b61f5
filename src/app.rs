//! Application context and screen dispatch types
//!
//! Screens never call into each other: each per-frame update returns an
//! optional `ScreenRequest`, and the run loop in `main` owns the switch.
//! All shared state lives in the `App` context passed to every update.

use crate::assets::GameAssets;
use crate::options::GameOptions;
use crate::view::View;

/// The mutually exclusive UI modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    MainMenu {
        /// Cross-fade the splash background out on entry
        play_fade: bool,
    },
    Options,
    Gameplay,
}

/// What a screen wants the run loop to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenRequest {
    Goto(Screen),
    Exit,
}

/// Owned application state passed to every screen update
pub struct App {
    pub options: GameOptions,
    pub assets: GameAssets,
    pub view: View,
}

impl App {
    pub fn new(assets: GameAssets) -> Self {
        Self {
            options: GameOptions::default(),
            assets,
            view: View::new(),
        }
    }
}
