//! Chest lid animation and light state machine
//!
//! A chest is a base mesh and a lid mesh sharing a numeric id. Toggling it
//! starts the lid sliding up (open) or down (closed); independently its light
//! fades toward the lit intensity while open and toward zero while closed.

use cgmath::{Matrix4, Vector3};

use crate::{
    config::ChestConfig,
    gfx::{
        resources::PointLight,
        scene::{ObjectId, Scene},
    },
};

#[derive(Debug, Clone)]
pub struct Chest {
    pub id: u32,
    pub base: ObjectId,
    pub lid: ObjectId,
    is_open: bool,
    has_been_counted: bool,
    is_animating: bool,
    lid_offset: f32,
    target_offset: f32,
    light_intensity: f32,
    config: ChestConfig,
}

impl Chest {
    /// A closed, dark chest. Call [`Chest::update`] once to place the lid.
    pub fn new(id: u32, base: ObjectId, lid: ObjectId, config: ChestConfig) -> Self {
        Self {
            id,
            base,
            lid,
            is_open: false,
            has_been_counted: false,
            is_animating: false,
            lid_offset: 0.0,
            target_offset: 0.0,
            light_intensity: 0.0,
            config,
        }
    }

    /// Flips the chest between open and closed and starts the lid moving.
    ///
    /// Returns `true` only for the first time this chest is ever opened.
    pub fn toggle_open(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.target_offset = if self.is_open {
            self.config.open_offset
        } else {
            0.0
        };
        self.is_animating = true;

        if self.is_open && !self.has_been_counted {
            self.has_been_counted = true;
            return true;
        }
        false
    }

    /// Advances lid and light by `dt` seconds without touching the scene.
    pub fn advance(&mut self, dt: f32) {
        if self.is_animating {
            if (self.lid_offset - self.target_offset).abs() < self.config.snap_epsilon {
                self.lid_offset = self.target_offset;
                self.is_animating = false;
            } else {
                self.lid_offset = approach(
                    self.lid_offset,
                    self.target_offset,
                    self.config.lid_speed * dt,
                );
            }
        }

        self.light_intensity = approach(
            self.light_intensity,
            self.target_light_intensity(),
            self.config.light_fade_speed * dt,
        );
    }

    /// Advances the state and moves the lid to `base * translate(0, offset, 0)`.
    pub fn update(&mut self, dt: f32, scene: &mut Scene) {
        self.advance(dt);

        let base_transform = scene.get(self.base).transform;
        scene.get_mut(self.lid).transform =
            base_transform * Matrix4::from_translation(Vector3::new(0.0, self.lid_offset, 0.0));
    }

    /// Center of the base's bounding box, raised by the configured light height
    pub fn light_world_position(&self, scene: &Scene) -> Vector3<f32> {
        scene.get(self.base).bounds.center() + Vector3::new(0.0, self.config.light_height, 0.0)
    }

    /// Center of the base's bounding box, used for interaction distance
    pub fn base_center(&self, scene: &Scene) -> Vector3<f32> {
        scene.get(self.base).bounds.center()
    }

    /// The chest's light, or `None` while it is fully dark
    pub fn light(&self, scene: &Scene) -> Option<PointLight> {
        (self.light_intensity > 0.0).then(|| PointLight {
            position: self.light_world_position(scene).into(),
            color: self.config.light_color,
            intensity: self.light_intensity,
        })
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn has_been_counted(&self) -> bool {
        self.has_been_counted
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn lid_offset(&self) -> f32 {
        self.lid_offset
    }

    pub fn light_intensity(&self) -> f32 {
        self.light_intensity
    }

    pub fn target_light_intensity(&self) -> f32 {
        if self.is_open {
            self.config.lit_intensity
        } else {
            0.0
        }
    }
}

/// Moves `current` toward `target` by at most `step`, landing on it exactly.
fn approach(current: f32, target: f32, step: f32) -> f32 {
    if current < target {
        (current + step).min(target)
    } else {
        (current - step).max(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::SceneObject;
    use cgmath::{InnerSpace, SquareMatrix};

    fn chest_scene() -> (Scene, Chest) {
        let mut scene = Scene::new();
        let base = scene.insert(SceneObject::new(
            "bau_1_base",
            &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0],
            &[],
            vec![0, 1, 2],
        ));
        let lid = scene.insert(SceneObject::new(
            "bau_1_tampa",
            &[0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.2, 1.0],
            &[],
            vec![0, 1, 2],
        ));
        let chest = Chest::new(1, base, lid, ChestConfig::default());
        (scene, chest)
    }

    fn run(chest: &mut Chest, scene: &mut Scene, steps: usize) {
        for _ in 0..steps {
            chest.update(1.0 / 60.0, scene);
        }
    }

    #[test]
    fn test_first_open_counts_once() {
        let (_, mut chest) = chest_scene();

        assert!(chest.toggle_open());
        assert!(chest.is_open());
        assert!(!chest.toggle_open());
        assert!(!chest.is_open());
        assert!(!chest.toggle_open());
        assert!(!chest.toggle_open());
        assert!(chest.has_been_counted());
    }

    #[test]
    fn test_initial_update_keeps_lid_in_place() {
        let (mut scene, mut chest) = chest_scene();
        chest.update(0.0, &mut scene);

        assert_eq!(scene.get(chest.lid).transform, Matrix4::identity());
        assert!(!chest.is_animating());
        assert_eq!(chest.light_intensity(), 0.0);
    }

    #[test]
    fn test_lid_and_light_converge_exactly() {
        let (mut scene, mut chest) = chest_scene();
        chest.toggle_open();
        run(&mut chest, &mut scene, 120);

        assert_eq!(chest.lid_offset(), 0.7);
        assert_eq!(chest.light_intensity(), 2.5);
        assert!(!chest.is_animating());
        assert_eq!(
            scene.get(chest.lid).transform,
            Matrix4::from_translation(Vector3::new(0.0, 0.7, 0.0))
        );

        // Steady state: further updates change nothing.
        run(&mut chest, &mut scene, 10);
        assert_eq!(chest.lid_offset(), 0.7);
        assert_eq!(chest.light_intensity(), 2.5);
    }

    #[test]
    fn test_light_fade_outlasts_lid() {
        let (mut scene, mut chest) = chest_scene();
        chest.toggle_open();

        // Lid takes 0.35s at 2 units/s; the light needs ~0.83s at 3/s.
        run(&mut chest, &mut scene, 30);
        assert_eq!(chest.lid_offset(), 0.7);
        assert!(!chest.is_animating());
        assert!(chest.light_intensity() > 0.0 && chest.light_intensity() < 2.5);

        run(&mut chest, &mut scene, 30);
        assert_eq!(chest.light_intensity(), 2.5);
    }

    #[test]
    fn test_closing_fades_to_dark() {
        let (mut scene, mut chest) = chest_scene();
        chest.toggle_open();
        run(&mut chest, &mut scene, 120);
        chest.toggle_open();
        run(&mut chest, &mut scene, 120);

        assert_eq!(chest.lid_offset(), 0.0);
        assert_eq!(chest.light_intensity(), 0.0);
        assert!(chest.light(&scene).is_none());
    }

    #[test]
    fn test_lid_follows_base_transform() {
        let (mut scene, mut chest) = chest_scene();
        scene.get_mut(chest.base).transform = Matrix4::from_translation(Vector3::new(5.0, 0.0, 0.0));
        chest.toggle_open();
        run(&mut chest, &mut scene, 120);

        assert_eq!(
            scene.get(chest.lid).transform,
            Matrix4::from_translation(Vector3::new(5.0, 0.7, 0.0))
        );
    }

    #[test]
    fn test_light_position_above_base_center() {
        let (mut scene, mut chest) = chest_scene();
        let position = chest.light_world_position(&scene);
        assert!((position - Vector3::new(0.5, 0.8, 0.5)).magnitude() < 1e-6);

        chest.toggle_open();
        chest.update(0.1, &mut scene);
        let light = chest.light(&scene).unwrap();
        assert_eq!(light.color, [1.0, 0.85, 0.4]);
        assert!(light.intensity > 0.0);
    }
}
