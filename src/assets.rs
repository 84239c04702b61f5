//! Asset loading
//!
//! Everything the shell uses is loaded up front, before the first screen
//! runs. A load failure is reported with the offending path and stops the
//! game instead of rendering blank.

use macroquad::audio::{load_sound, Sound};
use macroquad::prelude::*;

/// Number of distinct falling-item sprites
pub const FALLING_ITEM_TEXTURES: usize = 8;

/// Asset loading error
#[derive(Debug)]
pub enum AssetError {
    /// A file failed to load or decode
    Load(String),
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Load(msg) => write!(f, "asset load error: {}", msg),
        }
    }
}

impl std::error::Error for AssetError {}

async fn texture(path: &str) -> Result<Texture2D, AssetError> {
    let tex = load_texture(path)
        .await
        .map_err(|e| AssetError::Load(format!("{}: {}", path, e)))?;
    tex.set_filter(FilterMode::Linear);
    Ok(tex)
}

async fn sound(path: &str) -> Result<Sound, AssetError> {
    load_sound(path)
        .await
        .map_err(|e| AssetError::Load(format!("{}: {}", path, e)))
}

async fn font(path: &str) -> Result<Font, AssetError> {
    load_ttf_font(path)
        .await
        .map_err(|e| AssetError::Load(format!("{}: {}", path, e)))
}

/// Every texture, font and sound the shell uses
pub struct GameAssets {
    pub background: Texture2D,
    /// Window frame drawn over the back layer of falling items
    pub background_overlay: Texture2D,
    /// White sidebar that slides with the menu buttons
    pub sidebar: Texture2D,
    pub logo: Texture2D,
    pub splash_background: Texture2D,
    pub splash_overlay: Texture2D,
    pub display_font: Font,
    pub hover: Sound,
    pub select: Sound,
    pub meow: Sound,
    pub falling_items: [Texture2D; FALLING_ITEM_TEXTURES],
}

impl GameAssets {
    pub async fn load() -> Result<Self, AssetError> {
        let falling_items = [
            texture("assets/image/falling_items/cara.png").await?,
            texture("assets/image/falling_items/cmilk.png").await?,
            texture("assets/image/falling_items/cocoa.png").await?,
            texture("assets/image/falling_items/gar.png").await?,
            texture("assets/image/falling_items/marshmello.png").await?,
            texture("assets/image/falling_items/matcha.png").await?,
            texture("assets/image/falling_items/milk.png").await?,
            texture("assets/image/falling_items/wcream.png").await?,
        ];
        println!("Loaded {} falling item textures", FALLING_ITEM_TEXTURES);

        Ok(Self {
            background: texture("assets/image/backgrounds/main.png").await?,
            background_overlay: texture("assets/image/backgrounds/main_overlay_1.png").await?,
            sidebar: texture("assets/image/backgrounds/main_overlay_2.png").await?,
            logo: texture("assets/image/elements/studio_logo.png").await?,
            splash_background: texture("assets/image/backgrounds/splash.png").await?,
            splash_overlay: texture("assets/image/backgrounds/splash_overlay.png").await?,
            display_font: font("assets/font/meows.ttf").await?,
            hover: sound("assets/audio/hover.wav").await?,
            select: sound("assets/audio/select.wav").await?,
            meow: sound("assets/audio/meow.ogg").await?,
            falling_items,
        })
    }
}
