//! Wavefront OBJ level loading
//!
//! Every shape of the file becomes one [`SceneObject`] named after the shape.
//! Materials are ignored; the level is drawn with a single object color.

use std::{io::BufRead, path::Path};

use crate::error::LevelError;

use super::{object::SceneObject, scene::Scene};

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    }
}

/// Loads a level file from disk.
pub fn load_scene(path: &Path) -> Result<Scene, LevelError> {
    log::info!("Loading level '{}'", path.display());

    let (models, _materials) =
        tobj::load_obj(path, &load_options()).map_err(|source| LevelError::Load {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(scene_from_models(models))
}

/// Loads a level from any buffered reader. `mtllib` references are not followed.
pub fn load_scene_from_reader<R: BufRead>(reader: &mut R) -> Result<Scene, LevelError> {
    let (models, _materials) = tobj::load_obj_buf(reader, &load_options(), |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })
    .map_err(LevelError::Parse)?;

    Ok(scene_from_models(models))
}

fn scene_from_models(models: Vec<tobj::Model>) -> Scene {
    let mut scene = Scene::new();

    for (index, model) in models.into_iter().enumerate() {
        let name = if model.name.is_empty() {
            format!("shape_{}", index)
        } else {
            model.name
        };

        let mesh = model.mesh;
        if mesh.normals.is_empty() {
            log::debug!("Shape '{}' has no normals, defaulting to up-vector", name);
        }

        scene.insert(SceneObject::new(
            name,
            &mesh.positions,
            &mesh.normals,
            mesh.indices,
        ));
    }

    let stats = scene.get_statistics();
    log::info!(
        "Level loaded: {} objects, {} triangles, {} vertices",
        stats.object_count,
        stats.total_triangles,
        stats.total_vertices
    );

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::vertex::Vertex3D;
    use cgmath::Vector3;

    const LEVEL: &str = "\
o Piso
v -10 0 -10
v 10 0 -10
v 10 0 10
v -10 0 10
vn 0 1 0
f 1//1 2//1 3//1 4//1
o Bau_1_Base
v 1 0 1
v 2 0 1
v 2 1 2
f 5 6 7
";

    fn load(source: &str) -> Scene {
        load_scene_from_reader(&mut source.as_bytes()).unwrap()
    }

    #[test]
    fn test_shapes_become_named_objects() {
        let scene = load(LEVEL);

        assert_eq!(scene.len(), 2);
        let floor = scene.by_name("Piso").unwrap();
        assert_eq!(floor.mesh.index_count(), 6);
        assert_eq!(floor.bounds.min, Vector3::new(-10.0, 0.0, -10.0));
        assert_eq!(floor.bounds.max, Vector3::new(10.0, 0.0, 10.0));
        assert!(floor.mesh.vertices().iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
    }

    #[test]
    fn test_shape_without_normals_gets_up_normals() {
        let scene = load(LEVEL);
        let base = scene.by_name("Bau_1_Base").unwrap();

        assert_eq!(base.mesh.vertex_count(), 3);
        assert!(base.mesh.vertices().iter().all(|v| v.normal == Vertex3D::UP));
        assert_eq!(base.bounds.center(), Vector3::new(1.5, 0.5, 1.5));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_scene(Path::new("does/not/exist.obj"));
        assert!(matches!(result, Err(LevelError::Load { .. })));
    }
}
