pub mod analysis;
pub mod condition;
pub mod emotion;
pub mod insights;
pub mod report;
pub mod symptom;
