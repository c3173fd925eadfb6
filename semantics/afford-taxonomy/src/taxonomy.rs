//! The class/affordance taxonomy store.

use std::sync::{Arc, Mutex, OnceLock};

use hashbrown::{HashMap, HashSet};
use tracing::{debug, info};

use afford_types::{AffordanceId, AffordanceVector, ClassId};

use crate::error::{Result, TaxonomyError};
use crate::record::{ClassRecord, PartRecord};

const CLASS_TABLE_JSON: &str = include_str!("../data/class_affordances.json");
const PART_TABLE_JSON: &str = include_str!("../data/part_affordances.json");

/// A shared, immutable-after-init taxonomy handle.
///
/// Constructed once and passed explicitly to every consumer; cheap to clone.
pub type TaxonomyHandle = Arc<Taxonomy>;

/// The affordance annotation of one class: names plus the precomputed
/// multi-hot vector over the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassProfile {
    /// Annotated affordance names, in reference-table order.
    pub affordances: Vec<String>,
    /// Multi-hot vector, one bit per vocabulary affordance.
    pub vector: AffordanceVector,
}

impl ClassProfile {
    fn empty(vocabulary_len: usize) -> Self {
        Self {
            affordances: Vec::new(),
            vector: AffordanceVector::zeros(vocabulary_len),
        }
    }
}

/// The append-only class table: dense names plus a name → id side table.
#[derive(Debug)]
struct ClassTable {
    names: Vec<String>,
    index: HashMap<String, ClassId>,
}

impl ClassTable {
    fn with_background() -> Self {
        let mut table = Self {
            names: Vec::new(),
            index: HashMap::new(),
        };
        table.push("Background");
        table
    }

    fn push(&mut self, name: &str) -> ClassId {
        let id = ClassId::from_index(self.names.len());
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        id
    }

    fn get_or_create(&mut self, name: &str) -> ClassId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.push(name);
        debug!("minted new class {name:?} with id {id}");
        id
    }
}

/// Per-category part metadata carried for the asset loader.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PartMeta {
    scale_range: [f64; 2],
    is_large: bool,
}

/// The class and affordance taxonomy built from the reference tables.
///
/// Holds three tables:
///
/// - the **class table**: dense, zero-based, `Background` at index 0,
///   append-only through [`Taxonomy::class_id`] (get-or-create). Growth is
///   guarded by a mutex so concurrent sessions agree on ids; existing ids
///   are never renumbered.
/// - the **affordance vocabulary**: the sorted union of every affordance
///   name in the class table, immutable after construction (closed-world).
/// - the **part override index**: per `(category, link_name)` affordance
///   lists for articulated objects.
///
/// # Example
///
/// ```
/// use afford_taxonomy::Taxonomy;
///
/// let taxonomy = Taxonomy::load().unwrap();
/// let id = taxonomy.class_id("Kettle");
/// assert_eq!(taxonomy.class_id("Kettle"), id);
/// assert_eq!(taxonomy.class_name(id).as_deref(), Some("Kettle"));
/// ```
#[derive(Debug)]
pub struct Taxonomy {
    vocabulary: Vec<String>,
    vocabulary_index: HashMap<String, AffordanceId>,
    profiles: HashMap<String, ClassProfile>,
    annotated: Vec<String>,
    part_overrides: HashMap<(String, String), Vec<String>>,
    part_meta: HashMap<String, PartMeta>,
    classes: Mutex<ClassTable>,
}

impl Taxonomy {
    /// Loads the taxonomy from the bundled reference tables.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError::MalformedReference`] if the bundled data is
    /// malformed (fatal; indicates a packaging problem).
    pub fn load() -> Result<Self> {
        Self::from_json(CLASS_TABLE_JSON, PART_TABLE_JSON)
    }

    /// Loads the taxonomy from two reference table files on disk.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError::Io`] if a file cannot be read, or
    /// [`TaxonomyError::MalformedReference`] if it does not parse.
    pub fn from_files(
        class_path: impl AsRef<std::path::Path>,
        part_path: impl AsRef<std::path::Path>,
    ) -> Result<Self> {
        let read = |path: &std::path::Path| {
            std::fs::read_to_string(path).map_err(|source| TaxonomyError::Io {
                path: path.display().to_string(),
                source,
            })
        };
        let class_json = read(class_path.as_ref())?;
        let part_json = read(part_path.as_ref())?;
        Self::from_json(&class_json, &part_json)
    }

    /// Parses the taxonomy from raw JSON reference tables.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError::MalformedReference`] if either table fails
    /// to parse (missing required columns included).
    pub fn from_json(class_json: &str, part_json: &str) -> Result<Self> {
        let class_rows: Vec<ClassRecord> = serde_json::from_str(class_json)
            .map_err(|e| TaxonomyError::malformed_class_table(e.to_string()))?;
        let part_rows: Vec<PartRecord> = serde_json::from_str(part_json)
            .map_err(|e| TaxonomyError::malformed_part_table(e.to_string()))?;
        Ok(Self::from_records(class_rows, part_rows))
    }

    /// Builds the taxonomy from already-parsed reference records.
    #[must_use]
    pub fn from_records(class_rows: Vec<ClassRecord>, part_rows: Vec<PartRecord>) -> Self {
        // Vocabulary: sorted union of every affordance in the class table.
        let union: HashSet<&str> = class_rows
            .iter()
            .flat_map(|row| row.affordances.iter().map(String::as_str))
            .collect();
        let mut vocabulary: Vec<String> = union.into_iter().map(str::to_string).collect();
        vocabulary.sort_unstable();

        let vocabulary_index: HashMap<String, AffordanceId> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), AffordanceId::new(i)))
            .collect();

        // Class table: Background first, then first appearance order.
        let mut classes = ClassTable::with_background();
        let mut profiles: HashMap<String, ClassProfile> = HashMap::new();
        let mut annotated = Vec::new();
        for row in &class_rows {
            if profiles.contains_key(&row.class_name) {
                // Duplicate rows keep the first annotation.
                continue;
            }
            classes.get_or_create(&row.class_name);
            annotated.push(row.class_name.clone());

            let mut vector = AffordanceVector::zeros(vocabulary.len());
            for name in &row.affordances {
                if let Some(&id) = vocabulary_index.get(name) {
                    vector.set(id);
                }
            }
            profiles.insert(
                row.class_name.clone(),
                ClassProfile {
                    affordances: row.affordances.clone(),
                    vector,
                },
            );
        }

        let mut part_overrides = HashMap::new();
        let mut part_meta = HashMap::new();
        for row in part_rows {
            part_meta.entry(row.category.clone()).or_insert(PartMeta {
                scale_range: row.scaling_factor_range,
                is_large: row.is_large_object,
            });
            part_overrides.insert((row.category, row.link_name), row.affordances);
        }

        info!(
            "loaded taxonomy: {} annotated classes, {} affordances, {} part overrides",
            annotated.len(),
            vocabulary.len(),
            part_overrides.len()
        );

        Self {
            vocabulary,
            vocabulary_index,
            profiles,
            annotated,
            part_overrides,
            part_meta,
            classes: Mutex::new(classes),
        }
    }

    /// Returns the process-wide shared taxonomy, building it from the
    /// bundled tables on first call.
    ///
    /// First builder wins; later callers receive the same handle. Prefer
    /// passing a [`TaxonomyHandle`] explicitly; this accessor exists for
    /// entry points that own no configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError::MalformedReference`] if the bundled tables
    /// fail to parse on the first call.
    pub fn shared() -> Result<TaxonomyHandle> {
        static SHARED: OnceLock<TaxonomyHandle> = OnceLock::new();
        if let Some(handle) = SHARED.get() {
            return Ok(handle.clone());
        }
        let built = Arc::new(Self::load()?);
        Ok(SHARED.get_or_init(|| built).clone())
    }

    fn table(&self) -> std::sync::MutexGuard<'_, ClassTable> {
        match self.classes.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Returns the id for a class name, minting a new one for unknown names.
    ///
    /// Idempotent: repeated calls for the same name return the same id, and
    /// ids handed out earlier stay valid after any number of later mints.
    pub fn class_id(&self, name: &str) -> ClassId {
        self.table().get_or_create(name)
    }

    /// Returns `true` if the name is already in the class table.
    #[must_use]
    pub fn is_known_class(&self, name: &str) -> bool {
        self.table().index.contains_key(name)
    }

    /// Reverse lookup: the class name for a dense id.
    #[must_use]
    pub fn class_name(&self, id: ClassId) -> Option<String> {
        let index = id.index()?;
        self.table().names.get(index).cloned()
    }

    /// Returns the current number of classes (including `Background`).
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.table().names.len()
    }

    /// Returns a snapshot of all class names in id order.
    #[must_use]
    pub fn class_names(&self) -> Vec<String> {
        self.table().names.clone()
    }

    /// Returns the classes carrying a reference annotation, in table order.
    #[must_use]
    pub fn annotated_classes(&self) -> &[String] {
        &self.annotated
    }

    /// Returns the affordance profile for a class.
    ///
    /// Unannotated classes get an empty name list and an all-zero vector —
    /// most scene content (fixtures, distractors) is legitimately
    /// un-annotated, so this is not an error.
    #[must_use]
    pub fn affordance_profile(&self, class_name: &str) -> ClassProfile {
        self.profiles
            .get(class_name)
            .cloned()
            .unwrap_or_else(|| ClassProfile::empty(self.vocabulary.len()))
    }

    /// Returns the vocabulary id for an affordance name.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError::UnknownAffordance`] for names outside the
    /// closed vocabulary.
    pub fn affordance_id(&self, name: &str) -> Result<AffordanceId> {
        self.vocabulary_index
            .get(name)
            .copied()
            .ok_or_else(|| TaxonomyError::UnknownAffordance(name.to_string()))
    }

    /// Returns the affordance name for a vocabulary id.
    #[must_use]
    pub fn affordance_name(&self, id: AffordanceId) -> Option<&str> {
        self.vocabulary.get(id.index()).map(String::as_str)
    }

    /// Returns the vocabulary size.
    #[must_use]
    pub fn affordance_count(&self) -> usize {
        self.vocabulary.len()
    }

    /// Returns the sorted vocabulary.
    #[must_use]
    pub fn affordance_names(&self) -> &[String] {
        &self.vocabulary
    }

    /// Returns an all-zero affordance vector of vocabulary length.
    #[must_use]
    pub fn zero_affordances(&self) -> AffordanceVector {
        AffordanceVector::zeros(self.vocabulary.len())
    }

    /// Returns the override affordances for a link of an articulated
    /// category, if the reference data annotates it.
    #[must_use]
    pub fn part_affordances(&self, category: &str, link_name: &str) -> Option<&[String]> {
        self.part_overrides
            .get(&(category.to_string(), link_name.to_string()))
            .map(Vec::as_slice)
    }

    /// Returns the spawn scale range for an articulated category.
    #[must_use]
    pub fn scale_range(&self, category: &str) -> Option<[f64; 2]> {
        self.part_meta.get(category).map(|m| m.scale_range)
    }

    /// Returns whether an articulated category is a large fixture.
    #[must_use]
    pub fn is_large_object(&self, category: &str) -> Option<bool> {
        self.part_meta.get(category).map(|m| m.is_large)
    }
}
