//! World-space view and window management
//!
//! The game renders into a fixed 1920x1080 world centered on the origin.
//! The camera letterboxes that world into whatever window size the user
//! picks; all UI hit testing happens in world space, so buttons keep
//! working at any resolution.

use macroquad::prelude::*;

use crate::options::{GameOptions, Resolution};

/// Width of the base world area in pixels
pub const BASE_WIDTH: f32 = 1920.0;
/// Height of the base world area in pixels
pub const BASE_HEIGHT: f32 = 1080.0;
/// Left edge of the world area (the origin is the screen center)
pub const BASE_X: f32 = -BASE_WIDTH / 2.0;
/// Top edge of the world area
pub const BASE_Y: f32 = -BASE_HEIGHT / 2.0;

const TARGET_ASPECT: f32 = BASE_WIDTH / BASE_HEIGHT;

/// Letterbox scale for a window size: fit the base area inside the window
/// while preserving its aspect ratio.
pub fn letterbox_scale(screen_w: f32, screen_h: f32) -> f32 {
    let aspect = screen_w / screen_h;
    if aspect > TARGET_ASPECT {
        screen_h / BASE_HEIGHT
    } else {
        screen_w / BASE_WIDTH
    }
}

/// Scale factor that makes a texture cover the full base area
pub fn cover_scale(tex_w: f32, tex_h: f32) -> f32 {
    (BASE_WIDTH / tex_w).max(BASE_HEIGHT / tex_h)
}

/// Draw a texture scaled to cover the base area, optionally shifted
/// horizontally (slide transitions move full-height layers this way)
pub fn draw_cover(tex: &Texture2D, offset_x: f32, tint: Color) {
    let scale = cover_scale(tex.width(), tex.height());
    draw_texture_ex(
        tex,
        BASE_X + offset_x,
        BASE_Y,
        tint,
        DrawTextureParams {
            dest_size: Some(vec2(tex.width() * scale, tex.height() * scale)),
            ..Default::default()
        },
    );
}

/// Camera over the base world area, rebuilt whenever the window changes
pub struct View {
    camera: Camera2D,
    screen_w: f32,
    screen_h: f32,
}

impl View {
    pub fn new() -> Self {
        let mut view = Self {
            camera: Camera2D::default(),
            screen_w: 0.0,
            screen_h: 0.0,
        };
        view.rebuild(screen_width(), screen_height());
        view
    }

    /// Recompute the camera for a window size. World y grows downward,
    /// matching macroquad's default screen space.
    fn rebuild(&mut self, screen_w: f32, screen_h: f32) {
        let scale = letterbox_scale(screen_w, screen_h);
        self.camera = Camera2D {
            target: vec2(0.0, 0.0),
            zoom: vec2(2.0 * scale / screen_w, -2.0 * scale / screen_h),
            ..Default::default()
        };
        self.screen_w = screen_w;
        self.screen_h = screen_h;
    }

    /// Activate this camera for world-space drawing
    pub fn apply(&self) {
        set_camera(&self.camera);
    }

    /// Pointer position in world coordinates
    pub fn mouse_world(&self) -> Vec2 {
        let (mx, my) = mouse_position();
        self.camera.screen_to_world(vec2(mx, my))
    }

    /// Per-frame window upkeep: picks up live resizes and the Alt+Enter
    /// fullscreen toggle. Must run before input handling so hit testing
    /// uses the current camera.
    pub fn update(&mut self, options: &mut GameOptions) {
        let (sw, sh) = (screen_width(), screen_height());
        if sw != self.screen_w || sh != self.screen_h {
            self.rebuild(sw, sh);
            options.resolution = Resolution {
                x: sw as i32,
                y: sh as i32,
            };
        }

        let alt = is_key_down(KeyCode::LeftAlt) || is_key_down(KeyCode::RightAlt);
        if alt && is_key_pressed(KeyCode::Enter) {
            options.fullscreen = !options.fullscreen;
            self.set_resolution(options, Resolution::FULL_HD);
            set_fullscreen(options.fullscreen);
        }
    }

    /// Apply a resolution choice to the live window and camera
    pub fn set_resolution(&mut self, options: &mut GameOptions, resolution: Resolution) {
        options.resolution = resolution;
        request_new_screen_size(resolution.x as f32, resolution.y as f32);
        self.rebuild(resolution.x as f32, resolution.y as f32);
    }

    /// Flip between windowed and fullscreen at the current resolution
    pub fn toggle_fullscreen(&mut self, options: &mut GameOptions) {
        options.fullscreen = !options.fullscreen;
        let resolution = options.resolution;
        self.set_resolution(options, resolution);
        set_fullscreen(options.fullscreen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letterbox_scale_at_base_size() {
        assert!((letterbox_scale(1920.0, 1080.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_letterbox_scale_fits_smaller_window() {
        let scale = letterbox_scale(1280.0, 720.0);
        assert!((scale - 1280.0 / 1920.0).abs() < 0.001);
    }

    #[test]
    fn test_letterbox_scale_wide_window_pins_height() {
        // Ultrawide: height is the limiting dimension
        assert!((letterbox_scale(3840.0, 1080.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_letterbox_scale_tall_window_pins_width() {
        assert!((letterbox_scale(1920.0, 2160.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_cover_scale_uses_larger_axis() {
        assert!((cover_scale(960.0, 540.0) - 2.0).abs() < 0.001);
        // Wide texture still has to cover the full height
        assert!((cover_scale(1920.0, 540.0) - 2.0).abs() < 0.001);
        assert!((cover_scale(1920.0, 1080.0) - 1.0).abs() < 0.001);
    }
}
