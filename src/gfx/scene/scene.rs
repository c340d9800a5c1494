use std::collections::BTreeMap;

use wgpu::Device;

use super::object::SceneObject;

/// Stable handle to an object owned by a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

/// Arena of every mesh in the level, addressed by name or by [`ObjectId`].
///
/// Objects are never removed, so handles stay valid for the scene's lifetime.
#[derive(Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    by_name: BTreeMap<String, ObjectId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object, keyed by its name.
    ///
    /// An object whose name is already present replaces the earlier one and
    /// keeps its handle.
    pub fn insert(&mut self, object: SceneObject) -> ObjectId {
        if let Some(&id) = self.by_name.get(&object.name) {
            log::warn!("Duplicate mesh name '{}', keeping the later one", object.name);
            self.objects[id.0] = object;
            return id;
        }

        let id = ObjectId(self.objects.len());
        self.by_name.insert(object.name.clone(), id);
        self.objects.push(object);
        id
    }

    pub fn id_of(&self, name: &str) -> Option<ObjectId> {
        self.by_name.get(name).copied()
    }

    /// Panics if `id` was not issued by this scene.
    pub fn get(&self, id: ObjectId) -> &SceneObject {
        &self.objects[id.0]
    }

    pub fn get_mut(&mut self, id: ObjectId) -> &mut SceneObject {
        &mut self.objects[id.0]
    }

    pub fn by_name(&self, name: &str) -> Option<&SceneObject> {
        self.id_of(name).map(|id| self.get(id))
    }

    /// Object names with their handles, in ascending name order
    pub fn named_ids(&self) -> impl Iterator<Item = (&str, ObjectId)> + '_ {
        self.by_name.iter().map(|(name, &id)| (name.as_str(), id))
    }

    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Initializes GPU resources for all objects
    ///
    /// Must be called after the GPU context is available and before rendering.
    pub fn init_gpu_resources(&mut self, device: &Device, transform_layout: &wgpu::BindGroupLayout) {
        for object in self.objects.iter_mut() {
            object.init_gpu_resources(device, transform_layout);
        }
        log::info!("Uploaded {} scene objects to the GPU", self.objects.len());
    }

    /// Syncs all object transforms to the GPU
    pub fn update_all_transforms(&self, queue: &wgpu::Queue) {
        for object in &self.objects {
            object.update_transform(queue);
        }
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        SceneStatistics {
            object_count: self.objects.len(),
            total_triangles: self.objects.iter().map(|o| o.mesh.index_count() / 3).sum(),
            total_vertices: self.objects.iter().map(|o| o.mesh.vertex_count()).sum(),
        }
    }
}

/// Scene statistics logged after loading
#[derive(Debug, PartialEq, Eq)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub total_triangles: u32,
    pub total_vertices: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(name: &str, x: f32) -> SceneObject {
        SceneObject::new(
            name,
            &[x, 0.0, 0.0, x + 1.0, 0.0, 0.0, x, 1.0, 0.0],
            &[],
            vec![0, 1, 2],
        )
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut scene = Scene::new();
        let wall = scene.insert(triangle("Paredes", 0.0));
        let floor = scene.insert(triangle("Piso", 5.0));

        assert_ne!(wall, floor);
        assert_eq!(scene.id_of("Piso"), Some(floor));
        assert_eq!(scene.get(wall).name, "Paredes");
        assert!(scene.by_name("Portal").is_none());
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_duplicate_name_replaces_object() {
        let mut scene = Scene::new();
        let first = scene.insert(triangle("Portal", 0.0));
        let second = scene.insert(triangle("Portal", 10.0));

        assert_eq!(first, second);
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.get(first).bounds.min.x, 10.0);
    }

    #[test]
    fn test_names_iterate_in_sorted_order() {
        let mut scene = Scene::new();
        scene.insert(triangle("b", 0.0));
        scene.insert(triangle("C", 0.0));
        scene.insert(triangle("a", 0.0));

        let names: Vec<&str> = scene.named_ids().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["C", "a", "b"]);
    }

    #[test]
    fn test_statistics() {
        let mut scene = Scene::new();
        scene.insert(triangle("one", 0.0));
        scene.insert(triangle("two", 2.0));

        assert_eq!(
            scene.get_statistics(),
            SceneStatistics {
                object_count: 2,
                total_triangles: 2,
                total_vertices: 6,
            }
        );
    }
}
