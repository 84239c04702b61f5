//! Shared colors and text sizes

use macroquad::prelude::{Color, BLACK, BLUE, RED, SKYBLUE};

/// Options row fill
pub const BUTTON_COLOR: Color = BLUE;

/// Options row fill under the pointer
pub const BUTTON_HOVER_COLOR: Color = SKYBLUE;

/// Menu label at rest
pub const MENU_TEXT_COLOR: Color = BLACK;

/// Menu label under the pointer (warm brown, cafe palette)
pub const MENU_TEXT_HOVER: Color = Color::new(0.588, 0.408, 0.318, 1.0);

/// Exit label under the pointer
pub const EXIT_TEXT_HOVER: Color = RED;

/// Clear color behind the menu layers
pub const CLEAR_COLOR: Color = Color::new(0.96, 0.96, 0.96, 1.0);

/// Menu button label size
pub const MENU_FONT_SIZE: u16 = 60;

/// Options row label size
pub const OPTION_FONT_SIZE: f32 = 20.0;
