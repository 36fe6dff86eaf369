//! Command implementations for the inigen CLI
//!
//! Each command is organized into its own module.

pub mod config;
pub mod generate;
pub mod inspect;
pub mod version;
