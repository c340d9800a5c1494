//! Level classification
//!
//! After loading, every object is assigned a role from its name: chest base or
//! lid, collider (walls and floor), the portal, or plain scenery. Base and lid
//! objects sharing a numeric id become one [`Chest`].

use std::collections::BTreeMap;

use crate::{
    config::{ChestConfig, LevelNaming},
    gfx::{
        resources::PointLight,
        scene::{ObjectId, Scene},
    },
};

use super::chest::Chest;

/// What an object is for, decided by its name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectRole {
    ChestBase(u32),
    ChestLid(u32),
    Collider,
    Portal,
    Scenery,
}

/// Assigns a role to one object name. Matching ignores case.
///
/// A name carrying the chest token is never a collider or the portal, even
/// when its id cannot be parsed.
pub fn classify_name(name: &str, naming: &LevelNaming) -> ObjectRole {
    let lower = name.to_lowercase();

    let chest_token = naming.chest_token.to_lowercase();
    if let Some(pos) = lower.find(&chest_token) {
        let after = &lower[pos + chest_token.len()..];
        let digits_end = after
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after.len());

        return match after[..digits_end].parse::<u32>() {
            Ok(id) if lower.contains(&naming.chest_base_token.to_lowercase()) => {
                ObjectRole::ChestBase(id)
            }
            Ok(id) if lower.contains(&naming.chest_lid_token.to_lowercase()) => {
                ObjectRole::ChestLid(id)
            }
            Ok(_) => ObjectRole::Scenery,
            Err(_) => {
                log::debug!("Object '{}' has a chest token but no numeric id", name);
                ObjectRole::Scenery
            }
        };
    }

    if naming
        .collider_prefixes
        .iter()
        .any(|prefix| lower.starts_with(&prefix.to_lowercase()))
    {
        return ObjectRole::Collider;
    }

    if lower.contains(&naming.portal_token.to_lowercase()) {
        return ObjectRole::Portal;
    }

    ObjectRole::Scenery
}

/// The interactive layout of a loaded level
pub struct Level {
    pub colliders: Vec<ObjectId>,
    pub portal: Option<ObjectId>,
    /// Ordered by ascending chest id
    pub chests: Vec<Chest>,
}

impl Level {
    /// Classifies every object of `scene`, in ascending name order.
    ///
    /// When several objects qualify as the portal the last one wins. Chest
    /// parts without a partner are dropped. Each chest runs one zero-length
    /// update so its lid transform is in place before the first frame.
    pub fn classify(scene: &mut Scene, naming: &LevelNaming, chest_config: ChestConfig) -> Self {
        let mut colliders = Vec::new();
        let mut portal = None;
        let mut bases = BTreeMap::new();
        let mut lids = BTreeMap::new();

        let named: Vec<(String, ObjectId)> = scene
            .named_ids()
            .map(|(name, id)| (name.to_string(), id))
            .collect();

        for (name, id) in named {
            match classify_name(&name, naming) {
                ObjectRole::ChestBase(n) => {
                    bases.insert(n, id);
                }
                ObjectRole::ChestLid(n) => {
                    lids.insert(n, id);
                }
                ObjectRole::Collider => colliders.push(id),
                ObjectRole::Portal => {
                    if let Some(previous) = portal {
                        log::warn!(
                            "Multiple portal objects, '{}' replaces '{}'",
                            name,
                            scene.get(previous).name
                        );
                    }
                    portal = Some(id);
                }
                ObjectRole::Scenery => {}
            }
        }

        let mut chests = Vec::new();
        for (&n, &base) in &bases {
            match lids.get(&n) {
                Some(&lid) => {
                    let mut chest = Chest::new(n, base, lid, chest_config);
                    chest.update(0.0, scene);
                    chests.push(chest);
                }
                None => log::info!("Chest {} has a base but no lid, skipping", n),
            }
        }
        for n in lids.keys().filter(|n| !bases.contains_key(n)) {
            log::info!("Chest {} has a lid but no base, skipping", n);
        }

        log::info!(
            "Level classified: {} colliders, {} chests, portal {}",
            colliders.len(),
            chests.len(),
            if portal.is_some() { "present" } else { "missing" }
        );

        Self {
            colliders,
            portal,
            chests,
        }
    }

    /// Advances every chest by `dt` seconds
    pub fn update(&mut self, dt: f32, scene: &mut Scene) {
        for chest in &mut self.chests {
            chest.update(dt, scene);
        }
    }

    /// Light of the first chest that is not fully dark.
    ///
    /// Only one chest light reaches the shader even when several are lit.
    pub fn active_chest_light(&self, scene: &Scene) -> Option<PointLight> {
        self.chests.iter().find_map(|chest| chest.light(scene))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::SceneObject;

    fn naming() -> LevelNaming {
        LevelNaming::default()
    }

    fn scene_with(names: &[&str]) -> Scene {
        let mut scene = Scene::new();
        for (i, name) in names.iter().enumerate() {
            let x = i as f32 * 10.0;
            scene.insert(SceneObject::new(
                *name,
                &[x, 0.0, 0.0, x + 1.0, 1.0, 1.0],
                &[],
                vec![],
            ));
        }
        scene
    }

    #[test]
    fn test_classify_name_roles() {
        let naming = naming();
        assert_eq!(classify_name("Bau_2_Base", &naming), ObjectRole::ChestBase(2));
        assert_eq!(classify_name("BAU_12_TAMPA.001", &naming), ObjectRole::ChestLid(12));
        assert_eq!(classify_name("Paredes_Norte", &naming), ObjectRole::Collider);
        assert_eq!(classify_name("piso", &naming), ObjectRole::Collider);
        assert_eq!(classify_name("Portal_Final", &naming), ObjectRole::Portal);
        assert_eq!(classify_name("Arvore", &naming), ObjectRole::Scenery);
    }

    #[test]
    fn test_chest_token_without_id_is_scenery() {
        let naming = naming();
        assert_eq!(classify_name("bau_x_base", &naming), ObjectRole::Scenery);
        assert_eq!(classify_name("bau_3_tampo", &naming), ObjectRole::Scenery);
        // Never falls through to the portal rule.
        assert_eq!(classify_name("bau_portal", &naming), ObjectRole::Scenery);
    }

    #[test]
    fn test_collider_token_must_be_prefix() {
        assert_eq!(classify_name("Velho_Paredes", &naming()), ObjectRole::Scenery);
    }

    #[test]
    fn test_level_classification() {
        let mut scene = scene_with(&[
            "Paredes",
            "Piso",
            "Portal",
            "bau_1_base",
            "bau_1_tampa",
            "bau_2_base",
            "bau_2_tampa",
            "Decoracao",
        ]);
        let level = Level::classify(&mut scene, &naming(), ChestConfig::default());

        assert_eq!(level.colliders.len(), 2);
        assert_eq!(level.portal, scene.id_of("Portal"));
        assert_eq!(level.chests.len(), 2);
        assert_eq!(level.chests[0].id, 1);
        assert_eq!(level.chests[1].id, 2);
        assert_eq!(level.chests[1].lid, scene.id_of("bau_2_tampa").unwrap());
    }

    #[test]
    fn test_unpaired_chest_parts_are_dropped() {
        let mut scene = scene_with(&["bau_1_base", "bau_2_tampa", "bau_3_base", "bau_3_tampa"]);
        let level = Level::classify(&mut scene, &naming(), ChestConfig::default());

        assert_eq!(level.chests.len(), 1);
        assert_eq!(level.chests[0].id, 3);
    }

    #[test]
    fn test_last_portal_wins() {
        let mut scene = scene_with(&["Portal_B", "Portal_A"]);
        let level = Level::classify(&mut scene, &naming(), ChestConfig::default());
        assert_eq!(level.portal, scene.id_of("Portal_B"));
    }

    #[test]
    fn test_missing_portal() {
        let mut scene = scene_with(&["Paredes"]);
        let level = Level::classify(&mut scene, &naming(), ChestConfig::default());
        assert!(level.portal.is_none());
        assert!(level.chests.is_empty());
    }

    #[test]
    fn test_active_light_is_first_lit_chest() {
        let mut scene = scene_with(&["bau_1_base", "bau_1_tampa", "bau_2_base", "bau_2_tampa"]);
        let mut level = Level::classify(&mut scene, &naming(), ChestConfig::default());
        assert!(level.active_chest_light(&scene).is_none());

        level.chests[1].toggle_open();
        level.update(0.1, &mut scene);
        let light = level.active_chest_light(&scene).unwrap();
        let expected = level.chests[1].light_world_position(&scene);
        assert_eq!(light.position, [expected.x, expected.y, expected.z]);

        level.chests[0].toggle_open();
        level.update(0.1, &mut scene);
        let light = level.active_chest_light(&scene).unwrap();
        let expected = level.chests[0].light_world_position(&scene);
        assert_eq!(light.position, [expected.x, expected.y, expected.z]);
    }
}
