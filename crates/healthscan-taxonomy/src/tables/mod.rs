//! Compiled-in reference tables.

pub mod clinical;
pub mod conditions;
pub mod emotions;
pub mod recommendations;
pub mod severity;
pub mod symptoms;

use crate::TaxonomyData;

/// Raw built-in tables, before validation.
pub fn builtin_data() -> TaxonomyData {
    TaxonomyData {
        symptoms: symptoms::symptoms(),
        conditions: conditions::conditions(),
        category_recommendations: recommendations::category_recommendations(),
        severity_ladder: recommendations::severity_ladder(),
    }
}
