//! healthscan-analysis
//!
//! Rule-based symptom and report analysis. Everything here is synchronous,
//! deterministic and free of I/O: text extraction happens before these
//! functions are called, and the taxonomy is borrowed read-only.
//!
//! The main entry point is [`analyze`] (or [`pipeline::Analyzer`] when the
//! same taxonomy and config serve many calls). [`emotion`] and [`report`]
//! hold the journal-mood and clinical-report analyzers; [`insights`] runs
//! the symptom and mood analyzers over one journal entry together.

pub mod config;
pub mod emotion;
pub mod error;
pub mod insights;
pub mod matcher;
pub mod normalize;
pub mod pipeline;
pub mod ranker;
pub mod recommend;
pub mod report;
pub mod severity;

pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use pipeline::{analyze, Analyzer};
