//! # inigen - typed config loaders from INI files
//!
//! inigen reads an INI file and emits Go source: one struct per section and
//! a `Load<Section>` function that fills it from a parsed `*ini.File`.
//!
//! ## Pipeline
//!
//! - **Section parser**: skips the `DEFAULT` section and infers a type for
//!   every key (integer, then boolean, else string)
//! - **Code emitter**: renders the sections into one combined file or one
//!   file per section, optionally with an `init()` startup hook
//!
//! ## Quick Start
//!
//! ```bash
//! # Write config/config.go from config/config.ini
//! inigen generate
//!
//! # One file per section
//! inigen generate app.ini -m Server=server/server.go -m Database=db/db.go
//! ```
//!
//! ## Library use
//!
//! ```rust
//! use inigen::generator::{FieldKind, OutputRouting, parser};
//!
//! let routing = OutputRouting::Combined("config/config.go".into());
//! let sections = parser::parse_str("[Server]\nport = 8080\n", &routing).unwrap();
//!
//! assert_eq!(sections[0].loader_name, "LoadServer");
//! assert_eq!(sections[0].fields["port"], FieldKind::Integer);
//! ```

pub mod cli;
pub mod config;
pub mod generator;

pub use cli::{Cli, Output};
pub use config::GeneratorConfig;
pub use generator::{GenerateError, generate};

/// Result type alias for inigen operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
