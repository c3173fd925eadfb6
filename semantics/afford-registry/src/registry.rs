//! The per-session annotation registry.

use hashbrown::HashMap;
use tracing::{debug, info};

use afford_taxonomy::TaxonomyHandle;
use afford_types::{AffordanceVector, ClassId, InstanceId, SceneObject, SceneObjectMap};

use crate::error::Result;
use crate::resolve::{check_if_known, resolve_name};

/// Maps opaque per-scene segmentation ids to classes and affordances.
///
/// One registry exists per simulation session; it is recreated fresh for
/// every new environment. Entries are created the first time an object is
/// registered — explicitly at load time when metadata is known, or lazily
/// through [`AnnotationRegistry::register_missing_objects`] — and never
/// removed during the session.
///
/// # Example
///
/// ```
/// use afford_registry::AnnotationRegistry;
/// use afford_taxonomy::Taxonomy;
/// use afford_types::{InstanceId, SceneObject, SceneObjectMap};
/// use std::sync::Arc;
///
/// let taxonomy = Arc::new(Taxonomy::load().unwrap());
/// let mut registry = AnnotationRegistry::new(taxonomy);
///
/// let mut scene = SceneObjectMap::new();
/// scene.insert(SceneObject::body(7, "obj_kettle_0"));
/// registry.register_missing_objects(&scene);
///
/// assert!(registry.class_id(InstanceId::new(7)).is_some());
/// ```
#[derive(Debug)]
pub struct AnnotationRegistry {
    taxonomy: TaxonomyHandle,
    class_ids: HashMap<InstanceId, ClassId>,
    affordances: HashMap<InstanceId, AffordanceVector>,
}

impl AnnotationRegistry {
    /// Creates an empty registry backed by a shared taxonomy.
    #[must_use]
    pub fn new(taxonomy: TaxonomyHandle) -> Self {
        Self {
            taxonomy,
            class_ids: HashMap::new(),
            affordances: HashMap::new(),
        }
    }

    /// Returns the affordance vocabulary size (channel count of derived
    /// affordance frames).
    #[must_use]
    pub fn affordance_count(&self) -> usize {
        self.taxonomy.affordance_count()
    }

    /// Returns the taxonomy handle this registry resolves through.
    #[must_use]
    pub fn taxonomy(&self) -> &TaxonomyHandle {
        &self.taxonomy
    }

    /// Registers every structural link of an articulated object.
    ///
    /// All links share the object's class id (minted through the taxonomy's
    /// get-or-create accessor). Each link's affordance vector is the union
    /// of the whole-class profile and the link's override from
    /// `link_overrides` — overrides are additive, not replacing. Call once
    /// per object at load time, before the first observation.
    ///
    /// # Errors
    ///
    /// Returns an error if an override names an affordance outside the
    /// closed vocabulary — a reference-data bug, not a runtime condition.
    pub fn register_object(
        &mut self,
        links: &[SceneObject],
        class_name: &str,
        link_overrides: &HashMap<String, Vec<String>>,
    ) -> Result<()> {
        let class_id = self.taxonomy.class_id(class_name);
        let profile = self.taxonomy.affordance_profile(class_name);

        for link in links {
            let mut vector = profile.vector.clone();
            if let Some(extra) = link_overrides.get(link.name()) {
                for name in extra {
                    vector.set(self.taxonomy.affordance_id(name)?);
                }
            }

            self.class_ids.insert(link.id(), class_id);
            self.affordances.insert(link.id(), vector);
        }

        debug!(
            "registered {} link(s) of {class_name:?} as {class_id}",
            links.len()
        );
        Ok(())
    }

    /// Registers every scene object not yet present in the registry.
    ///
    /// The catch-all that guarantees every id the renderer can emit has an
    /// entry: names are resolved best-effort, normalized against the
    /// taxonomy, and the class-level profile becomes the instance's
    /// affordance vector. No link-specific override is applied on this
    /// late-discovery path — override data only exists at explicit load
    /// time.
    pub fn register_missing_objects(&mut self, scene: &SceneObjectMap) {
        let mut added = 0usize;
        for object in scene {
            if self.class_ids.contains_key(&object.id()) {
                continue;
            }

            let (parsed, display) = resolve_name(object);
            let class_name = check_if_known(&self.taxonomy, parsed, display);

            let class_id = self.taxonomy.class_id(&class_name);
            let profile = self.taxonomy.affordance_profile(&class_name);

            self.class_ids.insert(object.id(), class_id);
            self.affordances.insert(object.id(), profile.vector);
            added += 1;
        }

        if added > 0 {
            info!("lazily registered {added} scene object(s)");
        }
    }

    /// Returns the registered class id for an instance.
    ///
    /// `None` means "unclassified" (never registered), not background;
    /// tensor writers map it to [`ClassId::UNCLASSIFIED`].
    #[must_use]
    pub fn class_id(&self, id: InstanceId) -> Option<ClassId> {
        self.class_ids.get(&id).copied()
    }

    /// Returns the affordance vector for an instance.
    ///
    /// Three-tier fallback, most specific first: the explicit per-instance
    /// vector, then the class-level profile if only a class id is known,
    /// then the all-zero vector. Unknown instances are common (fixtures,
    /// distractors) and must not abort rendering, so this never errors.
    #[must_use]
    pub fn affordances(&self, id: InstanceId) -> AffordanceVector {
        if let Some(vector) = self.affordances.get(&id) {
            return vector.clone();
        }

        if let Some(&class_id) = self.class_ids.get(&id) {
            if let Some(class_name) = self.taxonomy.class_name(class_id) {
                return self.taxonomy.affordance_profile(&class_name).vector;
            }
        }

        self.taxonomy.zero_affordances()
    }

    /// Returns `true` if the instance has a registry entry.
    #[must_use]
    pub fn is_registered(&self, id: InstanceId) -> bool {
        self.class_ids.contains_key(&id)
    }

    /// Returns the number of registered instances.
    #[must_use]
    pub fn registered_count(&self) -> usize {
        self.class_ids.len()
    }

    /// Seeds a class-only entry with no explicit affordance vector.
    ///
    /// Both registration paths store an explicit vector, so the class-profile
    /// tier of [`AnnotationRegistry::affordances`] is only reachable through
    /// direct seeding.
    #[cfg(test)]
    fn insert_class_only(&mut self, id: InstanceId, class_id: ClassId) {
        self.class_ids.insert(id, class_id);
    }
}
