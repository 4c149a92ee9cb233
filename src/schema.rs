//! Skillmap schema validation
//!
//! Structural check of untrusted JSON against the skillmap shape. Fields are
//! visited in declaration order and arrays in index order, so the error
//! always names the first mismatch. Unknown fields are ignored.

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::{Module, Objective, Skillmap};

/// JSON value kinds as reported in validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Missing,
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    #[must_use]
    pub const fn of(value: Option<&Value>) -> Self {
        match value {
            None => Self::Missing,
            Some(Value::Null) => Self::Null,
            Some(Value::Bool(_)) => Self::Bool,
            Some(Value::Number(_)) => Self::Number,
            Some(Value::String(_)) => Self::String,
            Some(Value::Array(_)) => Self::Array,
            Some(Value::Object(_)) => Self::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Missing => "missing",
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        })
    }
}

/// First shape mismatch found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: expected {expected}, received {received}")]
pub struct ValidationError {
    /// Dotted field path, e.g. `modules[0].objectives[1].goal`; `(root)` for the document itself.
    pub path: String,
    pub expected: JsonKind,
    pub received: JsonKind,
}

type Validated<T> = std::result::Result<T, ValidationError>;

/// Validate a parsed JSON value and build the document from it.
pub fn validate(raw: &Value) -> Validated<Skillmap> {
    let root = FieldPath::root();
    let object = expect_object(Some(raw), &root)?;
    Ok(Skillmap {
        title: string_field(object, &root, "title")?,
        description: string_field(object, &root, "description")?,
        modules: array_field(object, &root, "modules", module)?,
    })
}

fn module(value: &Value, path: &FieldPath) -> Validated<Module> {
    let object = expect_object(Some(value), path)?;
    Ok(Module {
        title: string_field(object, path, "title")?,
        objectives: array_field(object, path, "objectives", objective)?,
    })
}

fn objective(value: &Value, path: &FieldPath) -> Validated<Objective> {
    let object = expect_object(Some(value), path)?;
    Ok(Objective {
        goal: string_field(object, path, "goal")?,
        skills: array_field(object, path, "skills", |value, path| {
            expect_string(Some(value), path)
        })?,
    })
}

fn string_field(object: &Map<String, Value>, parent: &FieldPath, name: &str) -> Validated<String> {
    expect_string(object.get(name), &parent.field(name))
}

fn array_field<T>(
    object: &Map<String, Value>,
    parent: &FieldPath,
    name: &str,
    item: impl Fn(&Value, &FieldPath) -> Validated<T>,
) -> Validated<Vec<T>> {
    let path = parent.field(name);
    let Some(Value::Array(values)) = object.get(name) else {
        return Err(mismatch(&path, JsonKind::Array, object.get(name)));
    };
    values
        .iter()
        .enumerate()
        .map(|(index, value)| item(value, &path.index(index)))
        .collect()
}

fn expect_object<'a>(
    value: Option<&'a Value>,
    path: &FieldPath,
) -> Validated<&'a Map<String, Value>> {
    match value {
        Some(Value::Object(object)) => Ok(object),
        other => Err(mismatch(path, JsonKind::Object, other)),
    }
}

fn expect_string(value: Option<&Value>, path: &FieldPath) -> Validated<String> {
    match value {
        Some(Value::String(text)) => Ok(text.clone()),
        other => Err(mismatch(path, JsonKind::String, other)),
    }
}

fn mismatch(path: &FieldPath, expected: JsonKind, received: Option<&Value>) -> ValidationError {
    ValidationError {
        path: path.to_string(),
        expected,
        received: JsonKind::of(received),
    }
}

#[derive(Debug, Clone)]
struct FieldPath(String);

impl FieldPath {
    const fn root() -> Self {
        Self(String::new())
    }

    fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{name}", self.0))
        }
    }

    fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("(root)")
        } else {
            f.write_str(&self.0)
        }
    }
}
