//! healthscan-taxonomy
//!
//! Reference tables for symptom analysis. Pure data; the only I/O is
//! reading a replacement table from disk. Defines the symptoms and their
//! match keywords, the conditions built from them, and the static
//! recommendation ladders, plus the keyword tables used by the emotional
//! and report analyzers.
//!
//! A [`Taxonomy`] is validated once on construction and never mutated, so a
//! single instance can be shared by any number of readers.

pub mod error;
pub mod recommendations;
pub mod tables;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::info;

use healthscan_core::models::condition::{Condition, SeverityBand};
use healthscan_core::models::symptom::{Symptom, SymptomCategory};

use error::TaxonomyError;
use recommendations::{CategoryRecommendations, SeverityLadder};

/// Serialized shape of a taxonomy, as read from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyData {
    pub symptoms: Vec<Symptom>,
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub category_recommendations: Vec<CategoryRecommendations>,
    #[serde(default)]
    pub severity_ladder: SeverityLadder,
}

/// Validated, immutable reference tables.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    symptoms: Vec<Symptom>,
    conditions: Vec<Condition>,
    category_recommendations: BTreeMap<SymptomCategory, Vec<String>>,
    severity_ladder: SeverityLadder,
    symptom_index: HashMap<String, usize>,
}

impl Taxonomy {
    /// Validate `data` and build a taxonomy from it.
    ///
    /// Keywords are lowercased; a symptom without keywords matches on its
    /// lowercased name. Repeated ids inside a condition's required set
    /// collapse to one.
    pub fn new(data: TaxonomyData) -> Result<Self, TaxonomyError> {
        let TaxonomyData {
            mut symptoms,
            mut conditions,
            category_recommendations,
            severity_ladder,
        } = data;

        let mut symptom_index = HashMap::with_capacity(symptoms.len());
        for (idx, symptom) in symptoms.iter_mut().enumerate() {
            if symptom_index.insert(symptom.id.clone(), idx).is_some() {
                return Err(TaxonomyError::DuplicateId {
                    kind: "symptom",
                    id: symptom.id.clone(),
                });
            }
            if symptom.keywords.is_empty() {
                symptom.keywords.push(symptom.name.to_lowercase());
            }
            for keyword in symptom.keywords.iter_mut() {
                // Text sentences are whitespace-collapsed before matching.
                let normalized = keyword
                    .to_lowercase()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ");
                if normalized.is_empty() {
                    return Err(TaxonomyError::EmptyKeyword {
                        symptom_id: symptom.id.clone(),
                    });
                }
                *keyword = normalized;
            }
        }

        let mut condition_ids = HashSet::with_capacity(conditions.len());
        for condition in conditions.iter_mut() {
            if !condition_ids.insert(condition.id.clone()) {
                return Err(TaxonomyError::DuplicateId {
                    kind: "condition",
                    id: condition.id.clone(),
                });
            }
            if condition.required_symptoms.is_empty() {
                return Err(TaxonomyError::EmptyRequiredSymptoms {
                    condition_id: condition.id.clone(),
                });
            }
            let mut seen = HashSet::new();
            condition.required_symptoms.retain(|id| seen.insert(id.clone()));
            if let Some(missing) = condition
                .required_symptoms
                .iter()
                .find(|id| !symptom_index.contains_key(id.as_str()))
            {
                return Err(TaxonomyError::UnknownSymptomReference {
                    condition_id: condition.id.clone(),
                    symptom_id: missing.clone(),
                });
            }
        }

        let mut by_category: BTreeMap<SymptomCategory, Vec<String>> = BTreeMap::new();
        for entry in category_recommendations {
            by_category
                .entry(entry.category)
                .or_default()
                .extend(entry.recommendations);
        }

        Ok(Self {
            symptoms,
            conditions,
            category_recommendations: by_category,
            severity_ladder,
            symptom_index,
        })
    }

    /// Parse and validate a taxonomy from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, TaxonomyError> {
        let data: TaxonomyData = serde_json::from_str(json)?;
        Self::new(data)
    }

    /// Read, parse and validate a taxonomy file.
    pub fn from_path(path: &Path) -> Result<Self, TaxonomyError> {
        let contents = std::fs::read_to_string(path)?;
        let taxonomy = Self::from_json(&contents)?;
        info!(
            path = %path.display(),
            symptoms = taxonomy.symptoms.len(),
            conditions = taxonomy.conditions.len(),
            "taxonomy loaded"
        );
        Ok(taxonomy)
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.symptom_index.get(id).map(|&idx| &self.symptoms[idx])
    }

    pub fn condition(&self, id: &str) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.id == id)
    }

    /// Look up every id, failing on the first one the taxonomy does not know.
    pub fn resolve_symptoms<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Result<Vec<&Symptom>, TaxonomyError> {
        ids.iter()
            .map(|id| {
                let id = id.as_ref();
                self.symptom(id)
                    .ok_or_else(|| TaxonomyError::UnknownSymptomId(id.to_string()))
            })
            .collect()
    }

    pub fn symptoms_by_category(&self, category: SymptomCategory) -> Vec<&Symptom> {
        self.symptoms
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    /// Symptoms whose name or category contains `query`, ignoring case.
    pub fn search_symptoms(&self, query: &str) -> Vec<&Symptom> {
        let query = query.trim().to_lowercase();
        self.symptoms
            .iter()
            .filter(|s| {
                s.name.to_lowercase().contains(&query)
                    || s.category.as_str().to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Distinct categories that have at least one symptom, in category order.
    pub fn categories(&self) -> Vec<SymptomCategory> {
        let mut categories: Vec<_> = self.symptoms.iter().map(|s| s.category).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    pub fn category_recommendations(&self, category: SymptomCategory) -> &[String] {
        self.category_recommendations
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn severity_recommendations(&self, band: SeverityBand) -> &[String] {
        self.severity_ladder.for_band(band)
    }
}

/// The taxonomy compiled into the binary.
///
/// # Panics
///
/// Panics on first use if the compiled-in tables fail validation. The tables
/// are constants, so a panic indicates a table definition bug.
pub fn builtin() -> &'static Taxonomy {
    static BUILTIN: LazyLock<Taxonomy> = LazyLock::new(|| {
        Taxonomy::new(tables::builtin_data())
            .unwrap_or_else(|e| panic!("built-in taxonomy is invalid: {e}"))
    });
    &BUILTIN
}
