//! Value type sniffing
//!
//! Every INI value is classified into one of three kinds. The checks run in a
//! fixed order and the first one that accepts the value wins, so `"1"` is an
//! integer rather than a boolean.

use serde::Serialize;
use std::fmt;

/// Inferred kind of a configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Integer,
    Boolean,
    String,
}

impl FieldKind {
    /// Go type used for this kind in generated records
    pub fn go_type(self) -> &'static str {
        match self {
            FieldKind::Integer => "int",
            FieldKind::Boolean => "bool",
            FieldKind::String => "string",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::String => "string",
        };
        f.write_str(name)
    }
}

/// Classify a raw value: integer, then boolean, else string
pub fn infer_kind(value: &str) -> FieldKind {
    if is_integer(value) {
        FieldKind::Integer
    } else if is_boolean(value) {
        FieldKind::Boolean
    } else {
        FieldKind::String
    }
}

/// Signed decimal that fits the generated code's `int`
fn is_integer(value: &str) -> bool {
    value.parse::<i64>().is_ok()
}

/// Spellings the generated loader's runtime accepts as booleans
fn is_boolean(value: &str) -> bool {
    matches!(
        value,
        "1" | "t" | "T" | "TRUE" | "true" | "True" | "0" | "f" | "F" | "FALSE" | "false" | "False"
    )
}
