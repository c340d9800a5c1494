//! Per-frame game loop
//!
//! [`GameController`] owns everything that changes while playing: the camera,
//! the scene, the classified level and the win progress. The window layer
//! feeds it input through its queue and calls [`GameController::frame`] once
//! per redraw, then reads back lighting and HUD data for rendering.

use std::path::Path;

use cgmath::Vector3;

use crate::{
    config::GameConfig,
    error::LevelError,
    gfx::{
        camera::{CameraController, CameraManager, FpsCamera},
        resources::SceneLighting,
        scene::{self, Scene},
    },
    ui::hud::{self, HudLine},
};

use super::{
    collision::CollisionChecker,
    input::{GameInput, InputQueue},
    interaction::{self, Interaction},
    level::Level,
    progress::GameProgress,
};

pub struct GameController {
    config: GameConfig,
    pub camera_manager: CameraManager,
    pub scene: Scene,
    pub level: Level,
    pub progress: GameProgress,
    collision: CollisionChecker,
    input: InputQueue,
    elapsed: f32,
    exit_requested: bool,
}

impl GameController {
    /// Loads and classifies the level named by `config.level_path`
    pub fn load(config: GameConfig) -> Result<Self, LevelError> {
        let scene = scene::load_scene(Path::new(&config.level_path))?;
        Ok(Self::new(scene, config))
    }

    pub fn new(mut scene: Scene, config: GameConfig) -> Self {
        let level = Level::classify(&mut scene, &config.naming, config.chest);
        let aspect = config.window.width as f32 / config.window.height.max(1) as f32;
        let camera = FpsCamera::new(&config.player, aspect);
        let controller = CameraController::from_config(&config.player);

        Self {
            camera_manager: CameraManager::new(camera, controller),
            progress: GameProgress::new(config.rules.chests_to_win),
            collision: CollisionChecker::new(config.player.radius),
            input: InputQueue::new(),
            elapsed: 0.0,
            exit_requested: false,
            scene,
            level,
            config,
        }
    }

    pub fn push_input(&mut self, input: GameInput) {
        self.input.push(input);
    }

    /// Input, then movement, then chest animation and timers
    pub fn frame(&mut self, dt: f32) {
        self.process_input();
        self.move_player(dt);
        self.update(dt);
    }

    fn process_input(&mut self) {
        let events: Vec<GameInput> = self.input.drain().collect();
        for event in events {
            match event {
                GameInput::Move { direction, pressed } => {
                    self.camera_manager
                        .controller
                        .set_direction(direction, pressed);
                }
                GameInput::Look { dx, dy } => self.camera_manager.process_mouse_motion(dx, dy),
                GameInput::Interact => {
                    self.interact();
                }
                GameInput::FocusLost => self.camera_manager.controller.release_all(),
                GameInput::Exit => self.exit_requested = true,
            }
        }
    }

    /// Resolves a click from the current camera position
    pub fn interact(&mut self) -> Interaction {
        let result = interaction::resolve(
            self.camera_manager.camera.position,
            &self.scene,
            &mut self.level,
            &mut self.progress,
            &self.config.rules,
        );
        log::debug!("Interaction: {:?}", result);
        result
    }

    fn move_player(&mut self, dt: f32) {
        let camera = &self.camera_manager.camera;
        let displacement = self.camera_manager.controller.displacement(camera, dt);

        let mut position = self.collision.slide(
            &self.scene,
            &self.level.colliders,
            camera.position,
            displacement,
        );
        position.y = position.y.max(self.config.player.eye_height);

        self.camera_manager.camera.position = position;
    }

    fn update(&mut self, dt: f32) {
        self.level.update(dt, &mut self.scene);
        self.progress.tick(dt);
        self.elapsed += dt;
        self.camera_manager.camera.update_view_proj();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera_manager.camera.resize_projection(width, height);
    }

    /// Lighting for this frame; at most one chest light is forwarded
    pub fn lighting(&self) -> SceneLighting {
        SceneLighting::from_config(&self.config.lighting)
            .with_chest_light(self.level.active_chest_light(&self.scene))
    }

    pub fn hud_lines(&self, display_size: [f32; 2]) -> Vec<HudLine> {
        hud::build_hud(&self.progress, self.elapsed, display_size)
    }

    pub fn camera_position(&self) -> Vector3<f32> {
        self.camera_manager.camera.position
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
