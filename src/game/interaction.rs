//! Click resolution against the portal and the chests

use cgmath::{InnerSpace, Vector3};

use crate::{config::RulesConfig, gfx::scene::Scene};

use super::{level::Level, progress::GameProgress};

/// Outcome of one interaction click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// The game is already won; clicks do nothing.
    Ignored,
    /// No portal or chest within range.
    NothingInRange,
    Won,
    PortalLocked {
        remaining: u32,
    },
    ChestToggled {
        chest_id: u32,
        opened: bool,
        first_time: bool,
        portal_activated: bool,
    },
}

pub fn portal_locked_message(remaining: u32) -> String {
    let noun = if remaining == 1 { "chest" } else { "chests" };
    format!("{} more {} needed to open the portal!", remaining, noun)
}

/// Resolves a click made from `eye`.
///
/// The portal is checked first and, when in range, consumes the click even if
/// a chest is closer. Otherwise the chest whose base center is nearest wins;
/// on equal distances the lower chest id is kept.
pub fn resolve(
    eye: Vector3<f32>,
    scene: &Scene,
    level: &mut Level,
    progress: &mut GameProgress,
    rules: &RulesConfig,
) -> Interaction {
    if progress.game_won {
        return Interaction::Ignored;
    }

    if let Some(portal) = level.portal {
        let distance = (eye - scene.get(portal).bounds.center()).magnitude();
        if distance < rules.interaction_range {
            if progress.goal_reached() {
                progress.game_won = true;
                log::info!("Portal reached with {} chests open", progress.chests_opened);
                return Interaction::Won;
            }

            let remaining = progress.chests_remaining();
            progress.post_message(portal_locked_message(remaining), rules.message_duration);
            return Interaction::PortalLocked { remaining };
        }
    }

    let mut nearest: Option<(usize, f32)> = None;
    for (index, chest) in level.chests.iter().enumerate() {
        let distance = (eye - chest.base_center(scene)).magnitude();
        match nearest {
            Some((_, best)) if distance >= best => {}
            _ => nearest = Some((index, distance)),
        }
    }

    let Some((index, distance)) = nearest else {
        return Interaction::NothingInRange;
    };
    if distance >= rules.interaction_range {
        return Interaction::NothingInRange;
    }

    let chest = &mut level.chests[index];
    let first_time = chest.toggle_open();
    let portal_activated = first_time && progress.record_chest_opened();

    log::info!(
        "Chest {} {} ({} / {} opened)",
        chest.id,
        if chest.is_open() { "opened" } else { "closed" },
        progress.chests_opened,
        progress.chests_to_win
    );
    if portal_activated {
        log::info!("All chests opened, portal is active");
    }

    Interaction::ChestToggled {
        chest_id: chest.id,
        opened: chest.is_open(),
        first_time,
        portal_activated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{ChestConfig, LevelNaming},
        gfx::scene::SceneObject,
    };

    /// Unit cube named `name` with its minimum corner at `(x, 0, z)`
    fn cube(name: &str, x: f32, z: f32) -> SceneObject {
        SceneObject::new(name, &[x, 0.0, z, x + 1.0, 1.0, z + 1.0], &[], vec![])
    }

    /// Three chests along +X at x = 0, 10, 20 and a portal at x = 40
    fn world() -> (Scene, Level, GameProgress, RulesConfig) {
        let mut scene = Scene::new();
        for (n, x) in [(1, 0.0), (2, 10.0), (3, 20.0)] {
            scene.insert(cube(&format!("bau_{}_base", n), x, 0.0));
            scene.insert(cube(&format!("bau_{}_tampa", n), x, 0.0));
        }
        scene.insert(cube("Portal", 40.0, 0.0));

        let level = Level::classify(&mut scene, &LevelNaming::default(), ChestConfig::default());
        let rules = RulesConfig::default();
        (scene, level, GameProgress::new(rules.chests_to_win), rules)
    }

    fn near(x: f32) -> Vector3<f32> {
        Vector3::new(x + 0.5, 1.5, 2.0)
    }

    #[test]
    fn test_nothing_in_range() {
        let (scene, mut level, mut progress, rules) = world();
        let result = resolve(near(30.0), &scene, &mut level, &mut progress, &rules);
        assert_eq!(result, Interaction::NothingInRange);
    }

    #[test]
    fn test_open_three_chests_then_win() {
        let (scene, mut level, mut progress, rules) = world();

        for (i, x) in [0.0, 10.0, 20.0].into_iter().enumerate() {
            let result = resolve(near(x), &scene, &mut level, &mut progress, &rules);
            assert_eq!(
                result,
                Interaction::ChestToggled {
                    chest_id: i as u32 + 1,
                    opened: true,
                    first_time: true,
                    portal_activated: i == 2,
                }
            );
            assert_eq!(progress.chests_opened, i as u32 + 1);
            assert_eq!(progress.portal_active, i == 2);
        }
        assert!(!progress.game_won);

        let result = resolve(near(40.0), &scene, &mut level, &mut progress, &rules);
        assert_eq!(result, Interaction::Won);
        assert!(progress.game_won);

        let result = resolve(near(0.0), &scene, &mut level, &mut progress, &rules);
        assert_eq!(result, Interaction::Ignored);
    }

    #[test]
    fn test_reopening_does_not_count_twice() {
        let (scene, mut level, mut progress, rules) = world();

        resolve(near(0.0), &scene, &mut level, &mut progress, &rules);
        let closed = resolve(near(0.0), &scene, &mut level, &mut progress, &rules);
        let reopened = resolve(near(0.0), &scene, &mut level, &mut progress, &rules);

        assert!(matches!(
            closed,
            Interaction::ChestToggled { opened: false, first_time: false, .. }
        ));
        assert!(matches!(
            reopened,
            Interaction::ChestToggled { opened: true, first_time: false, .. }
        ));
        assert_eq!(progress.chests_opened, 1);
    }

    #[test]
    fn test_locked_portal_posts_message() {
        let (scene, mut level, mut progress, rules) = world();
        resolve(near(0.0), &scene, &mut level, &mut progress, &rules);

        let result = resolve(near(40.0), &scene, &mut level, &mut progress, &rules);
        assert_eq!(result, Interaction::PortalLocked { remaining: 2 });
        assert!(!progress.game_won);

        let message = progress.message().unwrap();
        assert_eq!(message.text, "2 more chests needed to open the portal!");
        assert_eq!(message.remaining, 3.0);
    }

    #[test]
    fn test_locked_message_pluralizes() {
        assert_eq!(
            portal_locked_message(1),
            "1 more chest needed to open the portal!"
        );
        assert_eq!(
            portal_locked_message(3),
            "3 more chests needed to open the portal!"
        );
    }

    #[test]
    fn test_portal_takes_priority_over_nearer_chest() {
        let mut scene = Scene::new();
        scene.insert(cube("bau_1_base", 0.0, 0.0));
        scene.insert(cube("bau_1_tampa", 0.0, 0.0));
        scene.insert(cube("Portal", 3.0, 0.0));
        let mut level = Level::classify(&mut scene, &LevelNaming::default(), ChestConfig::default());
        let rules = RulesConfig::default();
        let mut progress = GameProgress::new(rules.chests_to_win);

        // 0.5 from the chest center, 2.5 from the portal center.
        let eye = Vector3::new(1.0, 0.5, 0.5);
        let result = resolve(eye, &scene, &mut level, &mut progress, &rules);

        assert_eq!(result, Interaction::PortalLocked { remaining: 3 });
        assert!(!level.chests[0].is_open());
    }

    #[test]
    fn test_equidistant_chests_pick_lower_id() {
        let mut scene = Scene::new();
        scene.insert(cube("bau_1_base", -2.0, 0.0));
        scene.insert(cube("bau_1_tampa", -2.0, 0.0));
        scene.insert(cube("bau_2_base", 2.0, 0.0));
        scene.insert(cube("bau_2_tampa", 2.0, 0.0));
        let mut level = Level::classify(&mut scene, &LevelNaming::default(), ChestConfig::default());
        let rules = RulesConfig::default();
        let mut progress = GameProgress::new(rules.chests_to_win);

        let eye = Vector3::new(0.5, 0.5, 0.5);
        let result = resolve(eye, &scene, &mut level, &mut progress, &rules);
        assert!(matches!(result, Interaction::ChestToggled { chest_id: 1, .. }));
    }

    #[test]
    fn test_no_chests_is_a_no_op() {
        let mut scene = Scene::new();
        scene.insert(cube("Paredes", 0.0, 0.0));
        let mut level = Level::classify(&mut scene, &LevelNaming::default(), ChestConfig::default());
        let rules = RulesConfig::default();
        let mut progress = GameProgress::new(rules.chests_to_win);

        let result = resolve(Vector3::new(0.0, 1.5, 0.0), &scene, &mut level, &mut progress, &rules);
        assert_eq!(result, Interaction::NothingInRange);
        assert_eq!(progress.chests_opened, 0);
    }
}
