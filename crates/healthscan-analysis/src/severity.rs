//! Severity scoring: averages symptom weights into a band.

use healthscan_core::models::condition::SeverityBand;
use healthscan_core::models::symptom::Symptom;

/// Mean at or above which the band is severe.
pub const SEVERE_THRESHOLD: f64 = 2.5;
/// Mean at or above which the band is moderate.
pub const MODERATE_THRESHOLD: f64 = 1.5;

/// Arithmetic mean of the weights, or `None` when there are none.
pub fn mean_weight<I>(weights: I) -> Option<f64>
where
    I: IntoIterator<Item = u32>,
{
    let (sum, count) = weights
        .into_iter()
        .fold((0u32, 0u32), |(sum, count), w| (sum + w, count + 1));
    (count > 0).then(|| f64::from(sum) / f64::from(count))
}

/// Map a mean weight onto a band.
pub fn band_for_mean(mean: f64) -> SeverityBand {
    if mean >= SEVERE_THRESHOLD {
        SeverityBand::Severe
    } else if mean >= MODERATE_THRESHOLD {
        SeverityBand::Moderate
    } else {
        SeverityBand::Mild
    }
}

/// Band for a set of symptoms. No symptoms means mild.
pub fn score<'a, I>(symptoms: I) -> SeverityBand
where
    I: IntoIterator<Item = &'a Symptom>,
{
    mean_weight(symptoms.into_iter().map(|s| s.severity.weight()))
        .map(band_for_mean)
        .unwrap_or(SeverityBand::Mild)
}
