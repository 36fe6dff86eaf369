//! Section parser
//!
//! Reads an INI source and turns every named section into a
//! [`SectionDescriptor`]. The default section (keys before the first header,
//! or an explicit `[DEFAULT]`) never produces a descriptor.

use super::GenerateError;
use super::descriptor::{OutputRouting, SectionDescriptor};
use super::infer::{FieldKind, infer_kind};
use ini::Ini;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the reserved section for un-sectioned keys
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Parse an INI file into descriptors, in order of first appearance
pub fn parse_file(
    path: &Path,
    routing: &OutputRouting,
) -> Result<Vec<SectionDescriptor>, GenerateError> {
    tracing::debug!("Reading {}", path.display());

    let source = fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_source(&source, path, routing)
}

/// Parse INI text that did not come from a file
pub fn parse_str(
    source: &str,
    routing: &OutputRouting,
) -> Result<Vec<SectionDescriptor>, GenerateError> {
    parse_source(source, Path::new("<string>"), routing)
}

fn parse_source(
    source: &str,
    origin: &Path,
    routing: &OutputRouting,
) -> Result<Vec<SectionDescriptor>, GenerateError> {
    // Backslashes stay literal and ` ;` / ` #` start a trailing comment,
    // the way the generated code's runtime reads the same file
    let ini = Ini::load_from_str_noescape(source).map_err(|err| GenerateError::Parse {
        path: origin.to_path_buf(),
        message: err.to_string(),
    })?;

    describe_sections(&ini, routing)
}

fn describe_sections(
    ini: &Ini,
    routing: &OutputRouting,
) -> Result<Vec<SectionDescriptor>, GenerateError> {
    // Repeated headers are folded into the first occurrence
    let mut sections: Vec<(String, PathBuf, BTreeMap<String, FieldKind>)> = Vec::new();

    for (section, properties) in ini.iter() {
        let name = match section {
            Some(name) if name != DEFAULT_SECTION => name,
            _ => {
                tracing::trace!("Skipping default section");
                continue;
            }
        };

        let index = match sections.iter().position(|(existing, _, _)| existing == name) {
            Some(index) => index,
            None => {
                let target = routing.target_for(name)?;
                sections.push((name.to_string(), target, BTreeMap::new()));
                sections.len() - 1
            }
        };

        let fields = &mut sections[index].2;
        for (key, value) in properties.iter() {
            let kind = infer_kind(value);
            tracing::debug!("[{}] {} = {:?} -> {}", name, key, value, kind);
            fields.insert(key.to_string(), kind);
        }
    }

    Ok(sections
        .into_iter()
        .map(|(name, target, fields)| SectionDescriptor::new(name, fields, target))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combined() -> OutputRouting {
        OutputRouting::Combined(PathBuf::from("config/config.go"))
    }

    #[test]
    fn test_server_section() {
        let source = "[Server]\nport = 8080\ndebug = true\nname = api\n";
        let descriptors = parse_str(source, &combined()).unwrap();

        assert_eq!(descriptors.len(), 1);
        let server = &descriptors[0];
        assert_eq!(server.name, "Server");
        assert_eq!(server.loader_name, "LoadServer");
        assert_eq!(server.fields["port"], FieldKind::Integer);
        assert_eq!(server.fields["debug"], FieldKind::Boolean);
        assert_eq!(server.fields["name"], FieldKind::String);
        assert_eq!(server.output_path, PathBuf::from("config/config.go"));
    }

    #[test]
    fn test_default_section_is_skipped() {
        let source = "\
app_mode = development

[DEFAULT]
shared = 1

[Database]
host = localhost

[Redis]
port = 6379
";
        let descriptors = parse_str(source, &combined()).unwrap();
        let names: Vec<&str> = descriptors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Database", "Redis"]);
    }

    #[test]
    fn test_sections_keep_file_order() {
        let source = "[Zeta]\na = 1\n[Alpha]\nb = 2\n[Mid]\nc = 3\n";
        let descriptors = parse_str(source, &combined()).unwrap();
        let names: Vec<&str> = descriptors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_empty_section_has_no_fields() {
        let descriptors = parse_str("[Empty]\n", &combined()).unwrap();
        assert_eq!(descriptors.len(), 1);
        assert!(descriptors[0].fields.is_empty());
    }

    #[test]
    fn test_repeated_section_is_merged() {
        let source = "[Server]\nport = 80\n[Other]\nx = y\n[Server]\nport = tcp\nhost = h\n";
        let descriptors = parse_str(source, &combined()).unwrap();

        assert_eq!(descriptors.len(), 2);
        let server = &descriptors[0];
        assert_eq!(server.name, "Server");
        assert_eq!(server.fields.len(), 2);
        assert_eq!(server.fields["port"], FieldKind::String);
        assert_eq!(server.fields["host"], FieldKind::String);
    }

    #[test]
    fn test_missing_per_section_target() {
        let mut targets = BTreeMap::new();
        targets.insert("Server".to_string(), PathBuf::from("server.go"));
        let routing = OutputRouting::PerSection(targets);

        let err = parse_str("[Server]\na = 1\n[Cache]\nb = 2\n", &routing).unwrap_err();
        match err {
            GenerateError::MissingOutputTarget { section } => assert_eq!(section, "Cache"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_per_section_targets_are_attached() {
        let mut targets = BTreeMap::new();
        targets.insert("Server".to_string(), PathBuf::from("server/server.go"));
        targets.insert("Cache".to_string(), PathBuf::from("cache/cache.go"));
        let routing = OutputRouting::PerSection(targets);

        let descriptors = parse_str("[Server]\na = 1\n[Cache]\nb = 2\n", &routing).unwrap();
        assert_eq!(descriptors[0].output_path, PathBuf::from("server/server.go"));
        assert_eq!(descriptors[1].output_path, PathBuf::from("cache/cache.go"));
    }

    #[test]
    fn test_inline_comments_are_stripped() {
        let source = "[Server]\nport = 8080 ; http port\ndebug = true # on\nname = api\t; service\n";
        let server = &parse_str(source, &combined()).unwrap()[0];

        assert_eq!(server.fields["port"], FieldKind::Integer);
        assert_eq!(server.fields["debug"], FieldKind::Boolean);
        assert_eq!(server.fields["name"], FieldKind::String);
    }

    #[test]
    fn test_comment_marker_needs_leading_whitespace() {
        let source = "[Server]\nport = 8080;http\ncolor = #fff\n";
        let server = &parse_str(source, &combined()).unwrap()[0];

        assert_eq!(server.fields["port"], FieldKind::String);
        assert_eq!(server.fields["color"], FieldKind::String);
    }

    #[test]
    fn test_quoted_values_are_unquoted() {
        let source = "[Server]\nport = \"8080\"\ndebug = 'false'\nretries = \"3\" ; after quote\nlabel = \"a ; b\"\n";
        let server = &parse_str(source, &combined()).unwrap()[0];

        assert_eq!(server.fields["port"], FieldKind::Integer);
        assert_eq!(server.fields["debug"], FieldKind::Boolean);
        assert_eq!(server.fields["retries"], FieldKind::Integer);
        assert_eq!(server.fields["label"], FieldKind::String);
    }

    #[test]
    fn test_backslashes_are_literal() {
        let source = "[Paths]\nroot = C:\\data\nratio = 4\\2\nflag = \\true\n";
        let paths = &parse_str(source, &combined()).unwrap()[0];

        assert_eq!(paths.fields["root"], FieldKind::String);
        // An escaping parser would read these as 42 and true
        assert_eq!(paths.fields["ratio"], FieldKind::String);
        assert_eq!(paths.fields["flag"], FieldKind::String);
    }

    #[test]
    fn test_unreadable_file() {
        let err = parse_file(Path::new("does/not/exist.ini"), &combined()).unwrap_err();
        assert!(matches!(err, GenerateError::Read { .. }));
    }

    #[test]
    fn test_malformed_source() {
        let err = parse_str("[Server\nport = 1\n", &combined()).unwrap_err();
        assert!(matches!(err, GenerateError::Parse { .. }));
    }

    #[test]
    fn test_parse_file_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        fs::write(&path, "[Server]\nport = 8080\n").unwrap();

        let descriptors = parse_file(&path, &combined()).unwrap();
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].fields["port"], FieldKind::Integer);
    }
}
