//! healthscan-core
//!
//! Pure domain types shared by the taxonomy, the analyzers and the CLI.
//! No matching or scoring logic lives here; this is the shared vocabulary
//! of the healthscan system.

pub mod error;
pub mod models;
