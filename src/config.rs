//! Game configuration
//!
//! Every tunable constant of the game lives here, grouped by the system that
//! reads it. All groups implement [`Default`] with the shipped values and offer
//! `with_*` builders for the few values worth overriding.

use std::path::PathBuf;

use cgmath::Vector3;

/// Environment variable that overrides [`GameConfig::level_path`].
pub const LEVEL_PATH_ENV: &str = "LABYRINTH_LEVEL";

/// Level file loaded when nothing else is configured.
pub const DEFAULT_LEVEL_PATH: &str = "models/lab.obj";

/// Window creation parameters.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_color: [f64; 3],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Labirinto Interativo".to_string(),
            width: 1280,
            height: 720,
            clear_color: [0.05, 0.05, 0.1],
        }
    }
}

/// Player body, movement and mouse look.
#[derive(Debug, Clone, Copy)]
pub struct PlayerConfig {
    pub start_position: Vector3<f32>,
    /// Degrees. -90 looks down the negative Z axis.
    pub start_yaw: f32,
    pub start_pitch: f32,
    /// Horizontal radius of the collision cylinder.
    pub radius: f32,
    /// The camera never sinks below this height.
    pub eye_height: f32,
    /// Units per second.
    pub move_speed: f32,
    /// Degrees per pixel of mouse motion.
    pub mouse_sensitivity: f32,
    pub pitch_limit: f32,
    pub fov_y: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start_position: Vector3::new(9.0, 1.5, 20.0),
            start_yaw: -90.0,
            start_pitch: 0.0,
            radius: 0.4,
            eye_height: 1.5,
            move_speed: 5.0,
            mouse_sensitivity: 0.1,
            pitch_limit: 89.0,
            fov_y: 45.0,
            z_near: 0.1,
            z_far: 100.0,
        }
    }
}

impl PlayerConfig {
    pub fn with_start_position(mut self, position: Vector3<f32>) -> Self {
        self.start_position = position;
        self
    }
}

/// Chest lid animation and light fade.
#[derive(Debug, Clone, Copy)]
pub struct ChestConfig {
    /// Vertical lid offset when fully open.
    pub open_offset: f32,
    /// Lid speed in units per second.
    pub lid_speed: f32,
    /// Distance at which the lid snaps onto its target.
    pub snap_epsilon: f32,
    pub light_color: [f32; 3],
    /// Intensity the light settles at while the chest is open.
    pub lit_intensity: f32,
    /// Intensity change per second.
    pub light_fade_speed: f32,
    /// Height of the light above the base box center.
    pub light_height: f32,
}

impl Default for ChestConfig {
    fn default() -> Self {
        Self {
            open_offset: 0.7,
            lid_speed: 2.0,
            snap_epsilon: 0.01,
            light_color: [1.0, 0.85, 0.4],
            lit_intensity: 2.5,
            light_fade_speed: 3.0,
            light_height: 0.3,
        }
    }
}

/// Win condition and interaction reach.
#[derive(Debug, Clone, Copy)]
pub struct RulesConfig {
    pub interaction_range: f32,
    pub chests_to_win: u32,
    /// Seconds the "more chests needed" warning stays on screen.
    pub message_duration: f32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            interaction_range: 3.5,
            chests_to_win: 3,
            message_duration: 3.0,
        }
    }
}

impl RulesConfig {
    pub fn with_chests_to_win(mut self, goal: u32) -> Self {
        self.chests_to_win = goal;
        self
    }
}

/// Mesh naming convention that classifies level objects.
///
/// All tokens are matched case-insensitively.
#[derive(Debug, Clone)]
pub struct LevelNaming {
    /// Followed directly by the chest's numeric id, e.g. `bau_3`.
    pub chest_token: String,
    pub chest_base_token: String,
    pub chest_lid_token: String,
    /// Name prefixes of objects the player collides with.
    pub collider_prefixes: Vec<String>,
    pub portal_token: String,
}

impl Default for LevelNaming {
    fn default() -> Self {
        Self {
            chest_token: "bau_".to_string(),
            chest_base_token: "base".to_string(),
            chest_lid_token: "tampa".to_string(),
            collider_prefixes: vec!["paredes".to_string(), "piso".to_string()],
            portal_token: "portal".to_string(),
        }
    }
}

/// Scene lighting that does not depend on game state.
#[derive(Debug, Clone, Copy)]
pub struct LightingConfig {
    pub object_color: [f32; 3],
    pub sun_direction: [f32; 3],
    pub sun_color: [f32; 3],
    /// Constant, linear and quadratic falloff of the chest light.
    pub chest_attenuation: [f32; 3],
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            object_color: [0.6, 0.5, 0.4],
            sun_direction: [-0.5, -1.0, -0.5],
            sun_color: [0.8, 0.8, 0.8],
            chest_attenuation: [1.0, 0.05, 0.01],
        }
    }
}

/// Complete game configuration.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub level_path: PathBuf,
    pub window: WindowConfig,
    pub player: PlayerConfig,
    pub chest: ChestConfig,
    pub rules: RulesConfig,
    pub naming: LevelNaming,
    pub lighting: LightingConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            level_path: PathBuf::from(DEFAULT_LEVEL_PATH),
            window: WindowConfig::default(),
            player: PlayerConfig::default(),
            chest: ChestConfig::default(),
            rules: RulesConfig::default(),
            naming: LevelNaming::default(),
            lighting: LightingConfig::default(),
        }
    }
}

impl GameConfig {
    /// Defaults, with the level path taken from `LABYRINTH_LEVEL` when set.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(LEVEL_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => {
                log::info!("Level path overridden by {}: {}", LEVEL_PATH_ENV, path);
                config.with_level_path(path)
            }
            _ => config,
        }
    }

    pub fn with_level_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.level_path = path.into();
        self
    }

    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_player(mut self, player: PlayerConfig) -> Self {
        self.player = player;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = GameConfig::default();
        assert_eq!(config.level_path, PathBuf::from("models/lab.obj"));
        assert_eq!(config.player.radius, 0.4);
        assert_eq!(config.player.eye_height, 1.5);
        assert_eq!(config.rules.interaction_range, 3.5);
        assert_eq!(config.rules.chests_to_win, 3);
        assert_eq!(config.chest.open_offset, 0.7);
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 720);
    }

    #[test]
    fn test_builders_override_fields() {
        let config = GameConfig::default()
            .with_level_path("levels/other.obj")
            .with_rules(RulesConfig::default().with_chests_to_win(5));
        assert_eq!(config.level_path, PathBuf::from("levels/other.obj"));
        assert_eq!(config.rules.chests_to_win, 5);
        assert_eq!(config.rules.message_duration, 3.0);
    }
}
