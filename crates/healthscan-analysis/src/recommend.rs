//! Recommendation aggregation.

use std::collections::HashSet;

use healthscan_core::models::analysis::RankedCondition;
use healthscan_core::models::condition::SeverityBand;
use healthscan_core::models::symptom::SymptomCategory;
use healthscan_taxonomy::Taxonomy;

/// Insertion-ordered set of recommendation strings.
#[derive(Debug, Default)]
pub struct RecommendationSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl RecommendationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `item` unless an identical string is already present.
    pub fn insert(&mut self, item: impl AsRef<str>) {
        let item = item.as_ref();
        if self.seen.insert(item.to_string()) {
            self.items.push(item.to_string());
        }
    }

    pub fn extend<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            self.insert(item);
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// Combine severity, top-condition and category advice.
///
/// Order: the severity ladder entry, then the recommendations of the first
/// ranked condition only, then each category's advice in the order given
/// (the pipeline passes categories with the most keyword hits first).
/// Later duplicates are dropped.
pub fn aggregate(
    ranked: &[RankedCondition],
    severity: SeverityBand,
    categories: &[SymptomCategory],
    taxonomy: &Taxonomy,
) -> Vec<String> {
    let mut set = RecommendationSet::new();

    set.extend(taxonomy.severity_recommendations(severity));

    if let Some(top) = ranked.first()
        && let Some(condition) = taxonomy.condition(&top.condition_id)
    {
        set.extend(&condition.recommendations);
    }

    for &category in categories {
        set.extend(taxonomy.category_recommendations(category));
    }

    set.into_vec()
}
