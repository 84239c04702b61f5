//! In-memory game options
//!
//! No persistence: options reset to defaults on every launch and are
//! mutated directly by the options screen's click handlers.

/// Difficulty setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Cycle to next value
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Target frame rate ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FpsTarget {
    Fps30,
    Fps60,
    Fps120,
    Fps144,
    #[default]
    Fps240,
    /// Render as fast as possible
    Unlimited,
}

impl FpsTarget {
    /// Target frame time in seconds (None = no cap)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsTarget::Fps30 => Some(1.0 / 30.0),
            FpsTarget::Fps60 => Some(1.0 / 60.0),
            FpsTarget::Fps120 => Some(1.0 / 120.0),
            FpsTarget::Fps144 => Some(1.0 / 144.0),
            FpsTarget::Fps240 => Some(1.0 / 240.0),
            FpsTarget::Unlimited => None,
        }
    }

    /// Cycle to next value
    pub fn next(self) -> Self {
        match self {
            FpsTarget::Fps30 => FpsTarget::Fps60,
            FpsTarget::Fps60 => FpsTarget::Fps120,
            FpsTarget::Fps120 => FpsTarget::Fps144,
            FpsTarget::Fps144 => FpsTarget::Fps240,
            FpsTarget::Fps240 => FpsTarget::Unlimited,
            FpsTarget::Unlimited => FpsTarget::Fps30,
        }
    }

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            FpsTarget::Fps30 => "30",
            FpsTarget::Fps60 => "60",
            FpsTarget::Fps120 => "120",
            FpsTarget::Fps144 => "144",
            FpsTarget::Fps240 => "240",
            FpsTarget::Unlimited => "Unlimited",
        }
    }
}

/// Window size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub x: i32,
    pub y: i32,
}

impl Resolution {
    pub const HD: Resolution = Resolution { x: 1280, y: 720 };
    pub const FULL_HD: Resolution = Resolution { x: 1920, y: 1080 };

    /// Toggle between the two presets. A custom size left over from a live
    /// window resize snaps to the nearer preset instead of toggling.
    pub fn toggle(self) -> Self {
        match self.x {
            1920 => Self::HD,
            1280 => Self::FULL_HD,
            x if x > 1600 => Self::FULL_HD,
            _ => Self::HD,
        }
    }

    pub fn label(&self) -> String {
        format!("{}x{}", self.x, self.y)
    }
}

/// All user-tunable settings, owned by the app context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    pub resolution: Resolution,
    pub fps: FpsTarget,
    pub fullscreen: bool,
    pub difficulty: Difficulty,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            resolution: Resolution::HD,
            fps: FpsTarget::Fps240,
            fullscreen: false,
            difficulty: Difficulty::Medium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_cycle_is_closed() {
        let start = Difficulty::Easy;
        assert_eq!(start.next().next().next(), start);
        assert_eq!(Difficulty::Medium.next(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
    }

    #[test]
    fn test_fps_cycle_is_closed() {
        let mut fps = FpsTarget::Fps240;
        for _ in 0..6 {
            fps = fps.next();
        }
        assert_eq!(fps, FpsTarget::Fps240);
    }

    #[test]
    fn test_fps_ladder_order() {
        assert_eq!(FpsTarget::Fps30.next(), FpsTarget::Fps60);
        assert_eq!(FpsTarget::Fps144.next(), FpsTarget::Fps240);
        assert_eq!(FpsTarget::Fps240.next(), FpsTarget::Unlimited);
        assert_eq!(FpsTarget::Unlimited.next(), FpsTarget::Fps30);
    }

    #[test]
    fn test_fps_frame_time() {
        let ft = FpsTarget::Fps60.frame_time().unwrap();
        assert!((ft - 1.0 / 60.0).abs() < 1e-9);
        assert!(FpsTarget::Unlimited.frame_time().is_none());
    }

    #[test]
    fn test_resolution_toggle_round_trip() {
        let start = Resolution::FULL_HD;
        assert_eq!(start.toggle(), Resolution::HD);
        assert_eq!(start.toggle().toggle(), start);
    }

    #[test]
    fn test_resolution_snaps_custom_sizes() {
        // Anything above 1600 wide snaps up, the rest snaps down
        assert_eq!(Resolution { x: 1700, y: 900 }.toggle(), Resolution::FULL_HD);
        assert_eq!(Resolution { x: 1366, y: 768 }.toggle(), Resolution::HD);
        assert_eq!(Resolution { x: 1600, y: 900 }.toggle(), Resolution::HD);
    }

    #[test]
    fn test_default_options() {
        let options = GameOptions::default();
        assert_eq!(options.resolution, Resolution::HD);
        assert_eq!(options.fps, FpsTarget::Fps240);
        assert!(!options.fullscreen);
        assert_eq!(options.difficulty, Difficulty::Medium);
    }
}
