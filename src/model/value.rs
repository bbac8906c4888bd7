// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use smol_str::SmolStr;

/// A leaf value as it appears in a digest or flattened message.
///
/// Digest scalars arrive as arbitrary JSON scalars; message scalars are only ever
/// [`Scalar::Null`] or [`Scalar::Text`].
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("None"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Ordered mapping of field names to values. Insertion resolves key collisions
/// last-write-wins.
pub type FieldMap = BTreeMap<SmolStr, Value>;

/// A structured value: the common shape behind both digests and messages, and the
/// domain of the pretty printer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Map(FieldMap),
    List(Vec<Value>),
}

impl Value {
    pub fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::Text(value.into()))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Converts a parsed JSON value into the viewer's value shape, verbatim.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Scalar(Scalar::Null),
            serde_json::Value::Bool(b) => Self::Scalar(Scalar::Bool(*b)),
            serde_json::Value::Number(n) => Self::Scalar(Scalar::Number(n.clone())),
            serde_json::Value::String(s) => Self::Scalar(Scalar::Text(s.clone())),
            serde_json::Value::Array(items) => {
                Self::List(items.iter().map(Self::from_json).collect())
            }
            serde_json::Value::Object(map) => Self::Map(field_map_from_json(map)),
        }
    }
}

pub fn field_map_from_json(map: &serde_json::Map<String, serde_json::Value>) -> FieldMap {
    map.iter().map(|(key, value)| (SmolStr::new(key), Value::from_json(value))).collect()
}

#[cfg(test)]
mod tests {
    use super::{Scalar, Value};

    #[test]
    fn scalar_display_renders_null_as_none() {
        assert_eq!(Scalar::Null.to_string(), "None");
        assert_eq!(Scalar::Bool(true).to_string(), "true");
        assert_eq!(Scalar::Text("plain".to_owned()).to_string(), "plain");
    }

    #[test]
    fn from_json_preserves_scalars_and_nesting() {
        let json: serde_json::Value = serde_json::from_str(
            r#"{"id": "x", "count": 3, "ok": false, "missing": null, "tags": ["a", "b"]}"#,
        )
        .expect("valid json");

        let value = Value::from_json(&json);
        let Value::Map(fields) = value else {
            panic!("expected map");
        };
        assert_eq!(fields.get("id"), Some(&Value::text("x")));
        assert_eq!(fields.get("ok"), Some(&Value::Scalar(Scalar::Bool(false))));
        assert_eq!(fields.get("missing"), Some(&Value::null()));
        assert_eq!(
            fields.get("tags"),
            Some(&Value::List(vec![Value::text("a"), Value::text("b")]))
        );
    }
}
