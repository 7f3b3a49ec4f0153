//! healthscan-cli library root.
//!
//! Exposes the argument definitions, config file handling and command
//! implementations so integration tests can drive them without spawning
//! the binary.

pub mod cli;
pub mod commands;
pub mod config;
