//! SuperMeowMeow: a cozy cat cafe game shell
//!
//! Splash screen, animated main menu with falling treats, options screen,
//! and a placeholder gameplay screen. One blocking frame loop owns the
//! current screen; screens request transitions as data instead of calling
//! into each other's loops.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod assets;
mod options;
mod screens;
mod transition;
mod ui;
mod view;

use macroquad::prelude::*;

use app::{App, Screen, ScreenRequest};
use assets::GameAssets;
use screens::{GameplayState, MenuState, OptionsScreenState, SplashState};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("SuperMeowMeow v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        fullscreen: false,
        sample_count: 4,
        ..Default::default()
    }
}

/// Live state of the current screen
enum ScreenState {
    Splash(SplashState),
    MainMenu(MenuState),
    Options(OptionsScreenState),
    Gameplay(GameplayState),
}

impl ScreenState {
    fn enter(screen: Screen) -> Self {
        match screen {
            Screen::Splash => ScreenState::Splash(SplashState::new()),
            Screen::MainMenu { play_fade } => ScreenState::MainMenu(MenuState::new(play_fade)),
            Screen::Options => ScreenState::Options(OptionsScreenState::new()),
            Screen::Gameplay => ScreenState::Gameplay(GameplayState::new()),
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    macroquad::rand::srand(macroquad::miniquad::date::now() as u64);

    println!("=== SuperMeowMeow v{} ===", VERSION);

    let assets = match GameAssets::load().await {
        Ok(assets) => {
            println!("All assets loaded");
            assets
        }
        Err(e) => {
            eprintln!("Failed to start: {}", e);
            return;
        }
    };

    let mut app = App::new(assets);
    let mut screen = ScreenState::enter(Screen::Splash);

    loop {
        // Frame start time for FPS limiting
        let frame_start = get_time();
        let dt = get_frame_time();

        app.view.update(&mut app.options);
        app.view.apply();

        let request = match &mut screen {
            ScreenState::Splash(state) => state.update(&mut app, dt),
            ScreenState::MainMenu(state) => state.update(&mut app, dt),
            ScreenState::Options(state) => state.update(&mut app),
            ScreenState::Gameplay(state) => state.update(&mut app),
        };

        set_default_camera();

        match request {
            Some(ScreenRequest::Goto(next)) => screen = ScreenState::enter(next),
            Some(ScreenRequest::Exit) => break,
            None => {}
        }

        // FPS limiting: macroquad has no frame cap of its own
        if let Some(target_frame_time) = app.options.fps.frame_time() {
            let elapsed = get_time() - frame_start;
            if elapsed < target_frame_time {
                #[cfg(not(target_arch = "wasm32"))]
                {
                    // Sleep for the bulk, then spin-wait for precision
                    let spin_margin = 0.002;
                    while get_time() - frame_start + spin_margin < target_frame_time {
                        std::thread::sleep(std::time::Duration::from_millis(1));
                    }
                    while get_time() - frame_start < target_frame_time {
                        std::hint::spin_loop();
                    }
                }
                #[cfg(target_arch = "wasm32")]
                {
                    while get_time() - frame_start < target_frame_time {
                        std::hint::spin_loop();
                    }
                }
            }
        }

        next_frame().await;
    }

    println!("Bye!");
}
