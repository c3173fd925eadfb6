//! Scene object types mirroring the engine's live id → object table.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::InstanceId;

/// An object exposed by the simulation engine's segmentation id map.
///
/// Two variants cover everything the renderer can attribute a pixel to: a
/// whole rigid body, or a link of an articulated object. Both expose a
/// per-scene id and the raw engine name; links additionally reference the
/// per-scene id of their articulation root.
///
/// # Example
///
/// ```
/// use afford_types::{InstanceId, SceneObject};
///
/// let link = SceneObject::link(5, "drawer-Handle_0", 9);
/// assert_eq!(link.root(), InstanceId::new(9));
/// assert_eq!(link.name(), "drawer-Handle_0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneObject {
    /// A whole (single- or rigid-body) object.
    Body {
        /// Per-scene segmentation id.
        id: InstanceId,
        /// Raw engine-assigned name.
        name: String,
    },
    /// A rigid sub-part of an articulated object.
    Link {
        /// Per-scene segmentation id of the link itself.
        id: InstanceId,
        /// Raw engine-assigned name.
        name: String,
        /// Per-scene id of the articulation root body.
        root: InstanceId,
    },
}

impl SceneObject {
    /// Creates a whole-body object.
    #[must_use]
    pub fn body(id: u32, name: impl Into<String>) -> Self {
        Self::Body {
            id: InstanceId::new(id),
            name: name.into(),
        }
    }

    /// Creates an articulated link with its root body id.
    #[must_use]
    pub fn link(id: u32, name: impl Into<String>, root: u32) -> Self {
        Self::Link {
            id: InstanceId::new(id),
            name: name.into(),
            root: InstanceId::new(root),
        }
    }

    /// Returns the per-scene id.
    #[must_use]
    pub const fn id(&self) -> InstanceId {
        match self {
            Self::Body { id, .. } | Self::Link { id, .. } => *id,
        }
    }

    /// Returns the raw engine name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Body { name, .. } | Self::Link { name, .. } => name,
        }
    }

    /// Returns the root instance id: the link's articulation root, or the
    /// object's own id for whole bodies.
    #[must_use]
    pub const fn root(&self) -> InstanceId {
        match self {
            Self::Body { id, .. } => *id,
            Self::Link { root, .. } => *root,
        }
    }

    /// Returns `true` if this is an articulated link.
    #[must_use]
    pub const fn is_link(&self) -> bool {
        matches!(self, Self::Link { .. })
    }
}

/// The engine's live id → object table for one scene.
///
/// Rebuilt by the glue layer whenever a scene is loaded; the registry's lazy
/// registration and the augmentor's root lookups both read it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneObjectMap {
    objects: HashMap<InstanceId, SceneObject>,
}

impl SceneObjectMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an object, replacing any previous entry with the same id.
    pub fn insert(&mut self, object: SceneObject) {
        self.objects.insert(object.id(), object);
    }

    /// Looks up an object by its per-scene id.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Iterates over all objects, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }

    /// Returns the number of objects in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl<'a> IntoIterator for &'a SceneObjectMap {
    type Item = &'a SceneObject;
    type IntoIter = hashbrown::hash_map::Values<'a, InstanceId, SceneObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.values()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn body_root_is_self() {
        let body = SceneObject::body(3, "obj_kettle_0");
        assert_eq!(body.id(), InstanceId::new(3));
        assert_eq!(body.root(), InstanceId::new(3));
        assert!(!body.is_link());
    }

    #[test]
    fn link_root_is_parent() {
        let link = SceneObject::link(5, "drawer-Handle_0", 9);
        assert_eq!(link.root(), InstanceId::new(9));
        assert!(link.is_link());
    }

    #[test]
    fn map_insert_and_get() {
        let mut map = SceneObjectMap::new();
        map.insert(SceneObject::body(1, "obj_mug_3"));
        map.insert(SceneObject::link(2, "cab-Door_0", 1));

        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get(InstanceId::new(2)).map(SceneObject::root),
            Some(InstanceId::new(1))
        );
        assert!(map.get(InstanceId::new(99)).is_none());
    }

    #[test]
    fn map_insert_replaces_same_id() {
        let mut map = SceneObjectMap::new();
        map.insert(SceneObject::body(1, "first"));
        map.insert(SceneObject::body(1, "second"));

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(InstanceId::new(1)).map(SceneObject::name), Some("second"));
    }

    #[test]
    fn map_iteration() {
        let mut map = SceneObjectMap::new();
        map.insert(SceneObject::body(1, "a"));
        map.insert(SceneObject::body(2, "b"));

        let mut ids: Vec<u32> = map.iter().map(|o| o.id().as_u32()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
    }
}
