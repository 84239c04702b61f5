//! Falling-item pool for the main menu
//!
//! A fixed pool of decorative sprites that drift down the menu, spin, and
//! respawn above the screen once they scroll past the bottom. Slots are
//! recycled forever; nothing is ever freed. Each item carries an explicit
//! draw layer so the menu can sandwich the window overlay between the two
//! groups.

use macroquad::prelude::*;

use crate::assets::FALLING_ITEM_TEXTURES;
use crate::view::{BASE_HEIGHT, BASE_WIDTH, BASE_X, BASE_Y};

/// Total pool size
pub const POOL_SIZE: usize = 20;
/// Items drawn behind the window overlay
pub const BACK_COUNT: usize = 11;
/// How far past the bottom an item may drift before it respawns
const RESPAWN_MARGIN: f32 = 1000.0;

/// Draw layer relative to the window overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Back,
    Front,
}

/// One decorative sprite
#[derive(Debug, Clone, Copy)]
pub struct FallingItem {
    pub position: Vec2,
    /// Degrees
    pub rotation: f32,
    pub texture_index: usize,
    /// Pixels per second
    pub falling_speed: f32,
    /// Degrees per second, capped by `falling_speed`, never zero
    pub rotation_speed: f32,
    pub layer: Layer,
}

/// Fixed pool of falling items with its own deterministic PRNG
pub struct FallingItemPool {
    items: Vec<FallingItem>,
    rng_state: u32,
}

impl FallingItemPool {
    pub fn new(seed: u32) -> Self {
        let mut pool = Self {
            items: Vec::with_capacity(POOL_SIZE),
            rng_state: seed.max(1),
        };
        for i in 0..POOL_SIZE {
            let layer = if i < BACK_COUNT {
                Layer::Back
            } else {
                Layer::Front
            };
            let item = pool.spawn(layer);
            pool.items.push(item);
        }
        pool
    }

    /// xorshift32, deterministic and dependency-free
    fn next_random(&mut self) -> u32 {
        self.rng_state ^= self.rng_state << 13;
        self.rng_state ^= self.rng_state >> 17;
        self.rng_state ^= self.rng_state << 5;
        self.rng_state
    }

    /// Random integer in [min, max]
    fn random_range(&mut self, min: i32, max: i32) -> i32 {
        let span = (max - min + 1) as u32;
        min + (self.next_random() % span) as i32
    }

    /// Fresh item somewhere above the visible area
    fn spawn(&mut self, layer: Layer) -> FallingItem {
        let x = self.random_range(BASE_X as i32, (BASE_X + BASE_WIDTH) as i32 - 20) as f32;
        let y = BASE_Y - self.random_range(200, 1000) as f32;
        let texture_index = self.random_range(0, FALLING_ITEM_TEXTURES as i32 - 1) as usize;
        let rotation = self.random_range(-360, 360) as f32;
        let falling_speed = self.random_range(1, 3) as f32 * 100.0;

        // Spin is capped by the fall speed and must never be zero, or the
        // item would drift down frozen at one angle.
        let mut rotation_speed = self.random_range(-3, 3) as f32;
        if rotation_speed == 0.0 {
            rotation_speed = 1.0;
        }
        rotation_speed *= 100.0;
        if rotation_speed.abs() > falling_speed {
            rotation_speed = falling_speed.copysign(rotation_speed);
        }

        FallingItem {
            position: vec2(x, y),
            rotation,
            texture_index,
            falling_speed,
            rotation_speed,
            layer,
        }
    }

    /// Advance all items and respawn the ones that scrolled out
    pub fn update(&mut self, dt: f32) {
        for i in 0..self.items.len() {
            self.items[i].position.y += self.items[i].falling_speed * dt;
            self.items[i].rotation += self.items[i].rotation_speed * dt;

            if self.items[i].position.y > BASE_Y + BASE_HEIGHT + RESPAWN_MARGIN {
                let layer = self.items[i].layer;
                let fresh = self.spawn(layer);
                self.items[i] = fresh;
            }
        }
    }

    /// Draw one layer of the pool, rotating each sprite around its center
    pub fn draw(&self, layer: Layer, textures: &[Texture2D; FALLING_ITEM_TEXTURES]) {
        for item in self.items.iter().filter(|i| i.layer == layer) {
            let tex = &textures[item.texture_index];
            draw_texture_ex(
                tex,
                item.position.x - tex.width() / 2.0,
                item.position.y - tex.height() / 2.0,
                WHITE,
                DrawTextureParams {
                    rotation: item.rotation.to_radians(),
                    ..Default::default()
                },
            );
        }
    }

    pub fn items(&self) -> &[FallingItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_item_valid(item: &FallingItem) {
        assert!(item.texture_index < FALLING_ITEM_TEXTURES);
        assert!(item.rotation_speed != 0.0);
        assert!(item.rotation_speed.abs() <= item.falling_speed);
        assert!(item.falling_speed >= 100.0 && item.falling_speed <= 300.0);
    }

    #[test]
    fn test_pool_size_and_layer_split() {
        let pool = FallingItemPool::new(7);
        assert_eq!(pool.items().len(), POOL_SIZE);
        let back = pool.items().iter().filter(|i| i.layer == Layer::Back).count();
        let front = pool.items().iter().filter(|i| i.layer == Layer::Front).count();
        assert_eq!(back, BACK_COUNT);
        assert_eq!(front, POOL_SIZE - BACK_COUNT);
    }

    #[test]
    fn test_spawned_items_are_valid() {
        for seed in [1, 42, 12345, u32::MAX] {
            let pool = FallingItemPool::new(seed);
            for item in pool.items() {
                assert_item_valid(item);
                // Above the visible area, within the horizontal band
                assert!(item.position.y <= BASE_Y - 200.0);
                assert!(item.position.y >= BASE_Y - 1000.0);
                assert!(item.position.x >= BASE_X);
                assert!(item.position.x <= BASE_X + BASE_WIDTH - 20.0);
            }
        }
    }

    #[test]
    fn test_update_advances_by_speed() {
        let mut pool = FallingItemPool::new(99);
        let before: Vec<_> = pool.items().to_vec();
        pool.update(0.5);
        for (old, new) in before.iter().zip(pool.items()) {
            assert!((new.position.y - (old.position.y + old.falling_speed * 0.5)).abs() < 0.001);
            assert!((new.rotation - (old.rotation + old.rotation_speed * 0.5)).abs() < 0.001);
        }
    }

    #[test]
    fn test_items_respawn_after_leaving_screen() {
        let mut pool = FallingItemPool::new(3);
        // One huge step pushes every item far past the respawn threshold
        pool.update(10_000.0);
        for item in pool.items() {
            assert_item_valid(item);
            assert!(item.position.y <= BASE_Y - 200.0);
            assert!(item.position.y >= BASE_Y - 1000.0);
        }
        // Layer assignment survives recycling
        let back = pool.items().iter().filter(|i| i.layer == Layer::Back).count();
        assert_eq!(back, BACK_COUNT);
    }

    #[test]
    fn test_pool_is_deterministic_for_a_seed() {
        let a = FallingItemPool::new(2024);
        let b = FallingItemPool::new(2024);
        for (x, y) in a.items().iter().zip(b.items()) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.texture_index, y.texture_index);
            assert_eq!(x.falling_speed, y.falling_speed);
            assert_eq!(x.rotation_speed, y.rotation_speed);
        }
    }
}
