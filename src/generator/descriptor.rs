//! Section descriptors and output routing

use super::GenerateError;
use super::infer::FieldKind;
use super::naming::loader_name;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Everything the emitter needs to know about one INI section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionDescriptor {
    /// Section name, also used as the record type name
    pub name: String,

    /// Field name -> inferred kind, ordered by field name
    pub fields: BTreeMap<String, FieldKind>,

    /// Generated loader function name (`Load<Name>`)
    pub loader_name: String,

    /// File the section is rendered into
    pub output_path: PathBuf,
}

impl SectionDescriptor {
    pub fn new(
        name: impl Into<String>,
        fields: BTreeMap<String, FieldKind>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        let name = name.into();
        Self {
            loader_name: loader_name(&name),
            name,
            fields,
            output_path: output_path.into(),
        }
    }
}

/// Where generated sections are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputRouting {
    /// Every section goes into one file
    Combined(PathBuf),
    /// Each section goes to its own file, looked up by section name
    PerSection(BTreeMap<String, PathBuf>),
}

impl OutputRouting {
    /// Destination for a section, or `MissingOutputTarget` if unmapped
    pub fn target_for(&self, section: &str) -> Result<PathBuf, GenerateError> {
        match self {
            OutputRouting::Combined(path) => Ok(path.clone()),
            OutputRouting::PerSection(targets) => targets
                .get(section)
                .cloned()
                .ok_or_else(|| GenerateError::MissingOutputTarget {
                    section: section.to_string(),
                }),
        }
    }

    /// The single destination of a combined routing
    pub fn combined_path(&self) -> Option<&Path> {
        match self {
            OutputRouting::Combined(path) => Some(path),
            OutputRouting::PerSection(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_derives_loader_name() {
        let descriptor = SectionDescriptor::new("server", BTreeMap::new(), "server.go");
        assert_eq!(descriptor.loader_name, "LoadServer");
        assert_eq!(descriptor.output_path, PathBuf::from("server.go"));
    }

    #[test]
    fn test_combined_routing_targets_every_section() {
        let routing = OutputRouting::Combined(PathBuf::from("config/config.go"));
        assert_eq!(routing.target_for("A").unwrap(), PathBuf::from("config/config.go"));
        assert_eq!(routing.target_for("B").unwrap(), PathBuf::from("config/config.go"));
    }

    #[test]
    fn test_per_section_routing_reports_missing_target() {
        let mut targets = BTreeMap::new();
        targets.insert("Server".to_string(), PathBuf::from("server/server.go"));
        let routing = OutputRouting::PerSection(targets);

        assert_eq!(routing.target_for("Server").unwrap(), PathBuf::from("server/server.go"));
        match routing.target_for("Redis") {
            Err(GenerateError::MissingOutputTarget { section }) => assert_eq!(section, "Redis"),
            other => panic!("expected missing target, got {other:?}"),
        }
    }
}
