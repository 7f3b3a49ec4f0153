//! Condition ranking by symptom overlap.

use std::collections::HashSet;

use healthscan_core::models::analysis::RankedCondition;
use healthscan_core::models::condition::Condition;
use healthscan_taxonomy::error::TaxonomyError;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;

/// Percentage of `condition`'s required symptoms present in `matched`,
/// rounded to the nearest integer.
pub fn overlap_probability(
    condition: &Condition,
    matched: &HashSet<&str>,
) -> Result<u8, AnalysisError> {
    let required: HashSet<&str> = condition
        .required_symptoms
        .iter()
        .map(String::as_str)
        .collect();
    if required.is_empty() {
        return Err(TaxonomyError::EmptyRequiredSymptoms {
            condition_id: condition.id.clone(),
        }
        .into());
    }

    let present = required.intersection(matched).count();
    let percent = (100.0 * present as f64 / required.len() as f64).round();
    Ok(percent as u8)
}

/// Rank `conditions` against the matched symptom ids.
///
/// Conditions at or below `config.min_probability` are dropped. The rest are
/// ordered by probability descending, then by condition id ascending, and
/// truncated to `config.max_conditions`.
pub fn rank<'a, I>(
    matched_ids: I,
    conditions: &[Condition],
    config: &AnalysisConfig,
) -> Result<Vec<RankedCondition>, AnalysisError>
where
    I: IntoIterator<Item = &'a str>,
{
    let matched: HashSet<&str> = matched_ids.into_iter().collect();

    let mut ranked = Vec::new();
    for condition in conditions {
        let probability = overlap_probability(condition, &matched)?;
        if u32::from(probability) <= config.min_probability {
            continue;
        }
        ranked.push(RankedCondition {
            condition_id: condition.id.clone(),
            name: condition.name.clone(),
            severity: condition.severity,
            probability,
        });
    }

    ranked.sort_by(|a, b| {
        b.probability
            .cmp(&a.probability)
            .then_with(|| a.condition_id.cmp(&b.condition_id))
    });
    ranked.truncate(config.max_conditions);

    Ok(ranked)
}
