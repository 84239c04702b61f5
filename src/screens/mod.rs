//! Screen implementations
//!
//! Each screen owns its state and renders one frame per `update` call,
//! returning a `ScreenRequest` when it wants the run loop to switch.

pub mod falling;
mod gameplay;
mod menu;
mod options_screen;
mod splash;

pub use gameplay::GameplayState;
pub use menu::MenuState;
pub use options_screen::OptionsScreenState;
pub use splash::SplashState;
