//! Code emitter
//!
//! Renders section descriptors into Go source built on `gopkg.in/ini.v1`.
//! Each section becomes an exported struct plus a `Load<Name>` function;
//! an optional `init()` hook loads a fixed file at process start.
//!
//! Rendering is done entirely in memory. Files are only created once every
//! one of them has rendered.

use super::GenerateError;
use super::descriptor::{OutputRouting, SectionDescriptor};
use super::naming::{go_quote, title_case};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// First line of every generated file
pub const GENERATED_HEADER: &str = "// Code generated by inigen. DO NOT EDIT.";

/// Import path of the INI runtime used by generated loaders
pub const INI_RUNTIME: &str = "gopkg.in/ini.v1";

/// Knobs that shape the rendered source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Package clause for the combined file
    pub package: String,
    /// Emit an `init()` hook that loads `startup_config`
    pub startup_hook: bool,
    /// File the startup hook loads
    pub startup_config: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            package: "config".to_string(),
            startup_hook: false,
            startup_config: "config.ini".to_string(),
        }
    }
}

/// A rendered, not yet written, output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    /// Sections rendered into this file, in order
    pub sections: Vec<String>,
    pub contents: String,
}

/// Render descriptors according to the routing.
///
/// A combined routing yields exactly one file, even when there are no
/// sections. A per-section routing yields one file per descriptor, and two
/// descriptors may not share a path.
pub fn render(
    descriptors: &[SectionDescriptor],
    routing: &OutputRouting,
    options: &EmitOptions,
) -> Result<Vec<RenderedFile>, GenerateError> {
    match routing.combined_path() {
        Some(path) => {
            let refs: Vec<&SectionDescriptor> = descriptors.iter().collect();
            let contents = render_file(&options.package, &refs, options)?;
            Ok(vec![RenderedFile {
                path: path.to_path_buf(),
                sections: descriptors.iter().map(|d| d.name.clone()).collect(),
                contents,
            }])
        }
        None => {
            check_distinct_targets(descriptors)?;
            descriptors
                .iter()
                .map(|descriptor| -> Result<RenderedFile, GenerateError> {
                    let contents = render_file(&descriptor.name, &[descriptor], options)?;
                    Ok(RenderedFile {
                        path: descriptor.output_path.clone(),
                        sections: vec![descriptor.name.clone()],
                        contents,
                    })
                })
                .collect()
        }
    }
}

// Each per-section file carries its own package clause, so a shared path
// would leave only the last section on disk
fn check_distinct_targets(descriptors: &[SectionDescriptor]) -> Result<(), GenerateError> {
    let mut claimed: BTreeMap<&Path, &str> = BTreeMap::new();

    for descriptor in descriptors {
        let previous = claimed.insert(descriptor.output_path.as_path(), descriptor.name.as_str());
        if let Some(first) = previous {
            return Err(GenerateError::SharedOutputTarget {
                path: descriptor.output_path.clone(),
                first: first.to_string(),
                second: descriptor.name.clone(),
            });
        }
    }

    Ok(())
}

/// Create (or truncate) the destination and write the rendered source
pub fn write_file(file: &RenderedFile) -> Result<(), GenerateError> {
    let write_error = |source| GenerateError::Write {
        path: file.path.clone(),
        source,
    };

    let handle = File::create(&file.path).map_err(write_error)?;
    let mut writer = BufWriter::new(handle);
    writer.write_all(file.contents.as_bytes()).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    tracing::info!("Wrote {} ({} sections)", file.path.display(), file.sections.len());
    Ok(())
}

fn render_file(
    package: &str,
    sections: &[&SectionDescriptor],
    options: &EmitOptions,
) -> Result<String, GenerateError> {
    let mut out = String::new();
    let scope = sections.first().map(|d| d.name.as_str()).unwrap_or(package);

    write_preamble(&mut out, package, !sections.is_empty()).map_err(|source| {
        GenerateError::Render {
            section: scope.to_string(),
            source,
        }
    })?;

    for descriptor in sections {
        write_section(&mut out, descriptor).map_err(|source| GenerateError::Render {
            section: descriptor.name.clone(),
            source,
        })?;
    }

    if options.startup_hook && !sections.is_empty() {
        write_startup_hook(&mut out, sections, &options.startup_config).map_err(|source| {
            GenerateError::Render {
                section: scope.to_string(),
                source,
            }
        })?;
    }

    Ok(out)
}

fn write_preamble(out: &mut String, package: &str, with_imports: bool) -> std::fmt::Result {
    writeln!(out, "{GENERATED_HEADER}")?;
    writeln!(out)?;
    writeln!(out, "package {package}")?;

    if with_imports {
        writeln!(out)?;
        writeln!(out, "import (")?;
        writeln!(out, "\t\"log\"")?;
        writeln!(out)?;
        writeln!(out, "\t{}", go_quote(INI_RUNTIME))?;
        writeln!(out, ")")?;
    }

    Ok(())
}

fn write_section(out: &mut String, descriptor: &SectionDescriptor) -> std::fmt::Result {
    let name = &descriptor.name;
    let loader = &descriptor.loader_name;

    // Struct fields, aligned the way gofmt aligns them
    let rows: Vec<(String, &str, String)> = descriptor
        .fields
        .iter()
        .map(|(key, kind)| {
            let tag = format!("`ini:{}`", go_quote(key));
            (title_case(key), kind.go_type(), tag)
        })
        .collect();
    let name_width = rows.iter().map(|(field, _, _)| field.chars().count()).max().unwrap_or(0);
    let type_width = rows.iter().map(|(_, ty, _)| ty.len()).max().unwrap_or(0);

    writeln!(out)?;
    writeln!(out, "// {name} holds the [{name}] section.")?;
    writeln!(out, "type {name} struct {{")?;
    for (field, ty, tag) in &rows {
        writeln!(out, "\t{field:<name_width$} {ty:<type_width$} {tag}")?;
    }
    writeln!(out, "}}")?;

    writeln!(out)?;
    writeln!(out, "// {loader} maps the [{name}] section of file onto a new {name}.")?;
    writeln!(out, "func {loader}(file *ini.File) (*{name}, error) {{")?;
    writeln!(out, "\tcfg := &{name}{{}}")?;
    writeln!(out, "\tif err := file.Section({}).MapTo(cfg); err != nil {{", go_quote(name))?;
    writeln!(
        out,
        "\t\tlog.Printf({}, err)",
        go_quote(&format!("failed to load {name} config: %v"))
    )?;
    writeln!(out, "\t\treturn nil, err")?;
    writeln!(out, "\t}}")?;
    writeln!(out, "\treturn cfg, nil")?;
    writeln!(out, "}}")?;

    Ok(())
}

fn write_startup_hook(
    out: &mut String,
    sections: &[&SectionDescriptor],
    startup_config: &str,
) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "func init() {{")?;
    writeln!(out, "\tfile, err := ini.Load({})", go_quote(startup_config))?;
    writeln!(out, "\tif err != nil {{")?;
    writeln!(
        out,
        "\t\tlog.Fatalf({}, err)",
        go_quote(&format!("failed to load {startup_config}: %v"))
    )?;
    writeln!(out, "\t}}")?;
    for descriptor in sections {
        writeln!(out, "\tif _, err := {}(file); err != nil {{", descriptor.loader_name)?;
        writeln!(
            out,
            "\t\tlog.Fatalf({}, err)",
            go_quote(&format!("failed to initialise {} config: %v", descriptor.name))
        )?;
        writeln!(out, "\t}}")?;
    }
    writeln!(out, "}}")?;

    Ok(())
}
