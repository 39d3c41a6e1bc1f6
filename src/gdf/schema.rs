//! GDF field definitions: `name [TYPE] [default VALUE]`.
//!
//! Type keywords are matched loosely: anything mentioning `int` is an
//! integer (`TINYINT`, `BIGINT`, `INTEGER`, ...), anything mentioning
//! `float`, `real` or `double` is a float, `BOOLEAN` is a boolean, and the
//! rest (`VARCHAR`, unknown words) are strings.

use crate::config::CodecOptions;
use crate::model::{ElementKind, Value};
use crate::{Error, Result};

/// Value type of a GDF column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Int,
    Float,
    Boolean,
    Str,
}

impl FieldKind {
    /// Classify a type keyword.
    pub fn from_keyword(keyword: &str) -> Self {
        let kw = keyword.to_ascii_lowercase();
        if kw.contains("int") {
            FieldKind::Int
        } else if ["float", "real", "double"].iter().any(|t| kw.contains(*t)) {
            FieldKind::Float
        } else if kw == "boolean" {
            FieldKind::Boolean
        } else {
            FieldKind::Str
        }
    }
}

/// Node properties GUESS/Gephi give a non-string type when none is declared.
const PREDEFINED_NODE_PROPS: &[(&str, FieldKind)] = &[
    ("x", FieldKind::Float),
    ("y", FieldKind::Float),
    ("visible", FieldKind::Boolean),
    ("fixed", FieldKind::Boolean),
    ("style", FieldKind::Int),
    ("width", FieldKind::Float),
    ("height", FieldKind::Float),
];

/// Edge counterpart of [`PREDEFINED_NODE_PROPS`].
const PREDEFINED_EDGE_PROPS: &[(&str, FieldKind)] = &[
    ("visible", FieldKind::Boolean),
    ("weight", FieldKind::Float),
    ("width", FieldKind::Float),
    ("directed", FieldKind::Boolean),
    ("labelvisible", FieldKind::Boolean),
];

/// Type of a predefined property, if `name` is one.
pub fn predefined_kind(section: ElementKind, name: &str) -> Option<FieldKind> {
    let table = match section {
        ElementKind::Node => PREDEFINED_NODE_PROPS,
        ElementKind::Edge => PREDEFINED_EDGE_PROPS,
    };
    let name = name.to_ascii_lowercase();
    table.iter().find(|(n, _)| *n == name).map(|(_, k)| *k)
}

/// One column of a `nodedef>`/`edgedef>` header.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub kind: FieldKind,
    /// Used when a cell is missing.
    pub default: Option<Value>,
}

impl FieldDef {
    /// Read one field spec.
    ///
    /// Without a type keyword, predefined properties keep their known type
    /// and everything else is a string.
    pub fn read(spec: &str, section: ElementKind, line_no: usize) -> Result<Self> {
        let mut tokens = spec.split_whitespace();
        let name = tokens.next().ok_or_else(|| Error::Parse {
            line: line_no,
            message: "Empty field definition".into(),
        })?;

        let Some(keyword) = tokens.next() else {
            return Ok(Self {
                name: name.to_owned(),
                kind: predefined_kind(section, name).unwrap_or(FieldKind::Str),
                default: None,
            });
        };

        let kind = FieldKind::from_keyword(keyword);
        let default = match (tokens.next(), tokens.next()) {
            (Some("default"), Some(raw)) => Some(parse_field(Some(raw), kind, None, line_no)?),
            _ => None,
        };

        Ok(Self { name: name.to_owned(), kind, default })
    }
}

/// Read the comma-separated field specs following `nodedef>`/`edgedef>`.
///
/// Trailing commas are ignored; an empty spec between two fields is an error.
pub fn read_header(specs: &str, section: ElementKind, line_no: usize) -> Result<Vec<FieldDef>> {
    let specs = specs.trim().trim_end_matches(',').trim_end();
    if specs.is_empty() {
        return Ok(Vec::new());
    }
    specs
        .split(',')
        .map(|spec| FieldDef::read(spec.trim_matches(|c: char| c == ' ' || c == '\t'), section, line_no))
        .collect()
}

/// Convert a cell to a value of the given kind.
///
/// A missing cell (`None`) takes `default`; without one, numbers are zero,
/// booleans are `false` and strings are empty. Booleans are true unless the
/// cell is empty, `null` or `false` (case-insensitive).
pub fn parse_field(
    cell: Option<&str>,
    kind: FieldKind,
    default: Option<&Value>,
    line_no: usize,
) -> Result<Value> {
    let invalid = |raw: &str| Error::Parse {
        line: line_no,
        message: format!("Invalid {kind:?} value '{raw}'"),
    };

    let value = match kind {
        FieldKind::Int => match cell.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Value::Int(raw.parse().map_err(|_| invalid(raw))?),
            None => default.cloned().unwrap_or(Value::Int(0)),
        },
        FieldKind::Float => match cell.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Value::Float(raw.parse().map_err(|_| invalid(raw))?),
            None => default.cloned().unwrap_or(Value::Float(0.0)),
        },
        FieldKind::Boolean => match cell {
            Some(raw) => Value::Bool(
                !(raw.is_empty()
                    || raw.eq_ignore_ascii_case("null")
                    || raw.eq_ignore_ascii_case("false")),
            ),
            None => default.cloned().unwrap_or(Value::Bool(false)),
        },
        FieldKind::Str => match cell {
            Some(raw) => Value::Str(raw.to_owned()),
            None => default.cloned().unwrap_or_else(|| Value::Str(String::new())),
        },
    };
    Ok(value)
}

/// GDF type keyword for a runtime value.
///
/// Integers outside the 32-bit range are `BIGINT` unless
/// [`CodecOptions::compat_int`] is set.
pub fn type_keyword(value: &Value, opts: &CodecOptions) -> &'static str {
    match value {
        Value::Bool(_) => "BOOLEAN",
        Value::Float(_) => "FLOAT",
        Value::Int(i) if opts.compat_int || i32::try_from(*i).is_ok() => "INT",
        Value::Int(_) => "BIGINT",
        Value::Str(_) => "VARCHAR",
    }
}
