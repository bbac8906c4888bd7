// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::value::{FieldMap, Value};

/// Placeholder shown for digest fields that are absent (or not scalar). Display-only:
/// it never enters the data itself.
pub const MISSING_FIELD_PLACEHOLDER: &str = "—";

/// Key under which a failed flatten reports itself inside a [`Message`].
pub const FLATTEN_ERROR_KEY: &str = "_error";

/// Value stored under [`FLATTEN_ERROR_KEY`] when the payload has no usable `<message>`.
pub const FLATTEN_ERROR_NO_MESSAGE: &str = "No <message>";

/// Opaque metadata mapping attached to a record, taken verbatim from the JSON
/// `digest` field. Used mainly for display labeling.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Digest {
    fields: FieldMap,
}

impl Digest {
    pub fn new(fields: FieldMap) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Scalar field rendered for a display label, or the placeholder when the key is
    /// absent or holds a non-scalar value.
    pub fn label_field(&self, key: &str) -> String {
        match self.fields.get(key).and_then(Value::as_scalar) {
            Some(scalar) => scalar.to_string(),
            None => MISSING_FIELD_PLACEHOLDER.to_owned(),
        }
    }
}

/// The flattened form of a record's embedded XML payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Message {
    fields: FieldMap,
}

impl Message {
    pub fn new(fields: FieldMap) -> Self {
        Self { fields }
    }

    /// The degenerate message produced when the XML payload is empty, malformed, or
    /// contains no `<message>` element.
    pub fn no_message() -> Self {
        let mut fields = FieldMap::new();
        fields.insert(FLATTEN_ERROR_KEY.into(), Value::text(FLATTEN_ERROR_NO_MESSAGE));
        Self { fields }
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    pub fn is_degenerate(&self) -> bool {
        self.fields.len() == 1 && self.fields.contains_key(FLATTEN_ERROR_KEY)
    }
}

/// One digest/message pair derived from one JSON array element. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    digest: Digest,
    message: Message,
}

impl Record {
    pub fn new(digest: Digest, message: Message) -> Self {
        Self { digest, message }
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Selector label: `#<1-based index>  <integrationId>  <date>`, with the
    /// placeholder standing in for absent digest fields.
    pub fn display_label(&self, index: usize) -> String {
        format!(
            "#{}  {}  {}",
            index + 1,
            self.digest.label_field("integrationId"),
            self.digest.label_field("date")
        )
    }
}
