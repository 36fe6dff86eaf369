//! INI to Go code generation
//!
//! The pipeline has two stages that run back to back:
//!
//! - [`parser`] reads the INI source and produces one [`SectionDescriptor`]
//!   per named section, with a type inferred for every key
//! - [`emit`] renders the descriptors into Go source and writes it out
//!
//! Nothing here exits the process. Every failure comes back as a
//! [`GenerateError`] and the caller decides what to do with it.

pub mod descriptor;
pub mod emit;
pub mod infer;
pub mod naming;
pub mod parser;

pub use descriptor::{OutputRouting, SectionDescriptor};
pub use emit::{EmitOptions, RenderedFile};
pub use infer::{FieldKind, infer_kind};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while generating code
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("No output path configured for section [{section}]")]
    MissingOutputTarget { section: String },

    #[error("Sections [{first}] and [{second}] are both routed to {}", .path.display())]
    SharedOutputTarget {
        path: PathBuf,
        first: String,
        second: String,
    },

    #[error("Failed to render section [{section}]")]
    Render {
        section: String,
        #[source]
        source: std::fmt::Error,
    },

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of a generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub descriptors: Vec<SectionDescriptor>,
    pub files: Vec<RenderedFile>,
}

impl GenerationReport {
    pub fn field_count(&self) -> usize {
        self.descriptors.iter().map(|d| d.fields.len()).sum()
    }
}

/// Parse and render without touching the filesystem beyond reading `input`
pub fn plan(
    input: &Path,
    routing: &OutputRouting,
    options: &EmitOptions,
) -> Result<GenerationReport, GenerateError> {
    let descriptors = parser::parse_file(input, routing)?;
    tracing::debug!("Parsed {} sections from {}", descriptors.len(), input.display());

    let files = emit::render(&descriptors, routing, options)?;
    Ok(GenerationReport { descriptors, files })
}

/// Parse, render and write every output file.
///
/// All sections are parsed and rendered before the first file is created,
/// so a missing output target or render failure leaves no output behind.
pub fn generate(
    input: &Path,
    routing: &OutputRouting,
    options: &EmitOptions,
) -> Result<GenerationReport, GenerateError> {
    let report = plan(input, routing, options)?;

    for file in &report.files {
        emit::write_file(file)?;
    }

    Ok(report)
}
