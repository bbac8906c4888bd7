// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Parsing of the raw export text (a JSON array of records) into a [`Dataset`].

use std::fmt;

use serde::Deserialize;

use crate::model::{field_map_from_json, Dataset, Digest, Record};

use super::message_xml::flatten;

#[derive(Debug)]
pub enum DatasetParseError {
    /// The raw text is not valid JSON at all.
    Json { source: serde_json::Error },
    /// The top-level JSON value is not an array.
    NotAnArray { found: &'static str },
    /// An array element is not a record object.
    Element { index: usize, source: serde_json::Error },
}

impl fmt::Display for DatasetParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "raw text is not valid JSON: {source}"),
            Self::NotAnArray { found } => {
                write!(f, "expected a JSON array of records, found {found}")
            }
            Self::Element { index, source } => {
                write!(f, "record #{} is not an object: {source}", index + 1)
            }
        }
    }
}

impl std::error::Error for DatasetParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } | Self::Element { source, .. } => Some(source),
            Self::NotAnArray { .. } => None,
        }
    }
}

/// One element of the export array. Both fields are optional in the wire format;
/// absence means an empty digest and an empty (hence degenerate) message.
#[derive(Debug, Deserialize)]
struct RecordEnvelope {
    #[serde(default)]
    digest: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    xml: String,
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Parses the whole export. All-or-nothing: either a complete new [`Dataset`]
/// comes back, or an error and the caller's state is untouched.
pub fn load_dataset(raw: &str) -> Result<Dataset, DatasetParseError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|source| DatasetParseError::Json { source })?;

    let serde_json::Value::Array(items) = value else {
        return Err(DatasetParseError::NotAnArray { found: json_kind(&value) });
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let envelope: RecordEnvelope = serde_json::from_value(item)
            .map_err(|source| DatasetParseError::Element { index, source })?;
        let digest = Digest::new(field_map_from_json(&envelope.digest));
        let message = flatten(&envelope.xml);
        records.push(Record::new(digest, message));
    }

    Ok(Dataset::new(records))
}

#[cfg(test)]
mod tests;
