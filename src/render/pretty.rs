// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Deterministic pretty-printing of field mappings for the derived pane.
//!
//! Output is a pure function of the mapping: attribute keys (`@`-prefixed)
//! first, then the rest, alphabetical within each group, recursively at every
//! nesting level. `Null` renders as `None`.

use smol_str::SmolStr;

use crate::model::{FieldMap, Record, Value};

const INDENT_STEP: &str = "  ";

/// Renders one mapping. Lines are joined with `\n`; no trailing newline.
pub fn render_fields(fields: &FieldMap) -> String {
    let mut lines = Vec::new();
    write_fields(fields, "", &mut lines);
    lines.join("\n")
}

/// Renders the full derived body for one record:
/// `DIGEST:` section followed by `MESSAGE:` section.
pub fn render_record(record: &Record) -> String {
    format!(
        "DIGEST:\n{}\n\nMESSAGE:\n{}",
        render_fields(record.digest().fields()),
        render_fields(record.message().fields())
    )
}

/// Attribute keys sort strictly before plain keys; plain string order inside
/// each group.
fn sorted_keys(fields: &FieldMap) -> Vec<&SmolStr> {
    let mut keys: Vec<&SmolStr> = fields.keys().collect();
    keys.sort_by(|a, b| {
        (!a.starts_with('@'), a.as_str()).cmp(&(!b.starts_with('@'), b.as_str()))
    });
    keys
}

fn write_fields(fields: &FieldMap, indent: &str, lines: &mut Vec<String>) {
    let child_indent = format!("{indent}{INDENT_STEP}");
    for key in sorted_keys(fields) {
        match &fields[key] {
            Value::Scalar(scalar) => lines.push(format!("{indent}{key}: {scalar}")),
            Value::Map(nested) => {
                lines.push(format!("{indent}{key}:"));
                write_fields(nested, &child_indent, lines);
            }
            Value::List(items) => {
                lines.push(format!("{indent}{key}:"));
                write_list(items, &child_indent, lines);
            }
        }
    }
}

fn write_list(items: &[Value], indent: &str, lines: &mut Vec<String>) {
    if items.is_empty() {
        lines.push(format!("{indent}[]"));
        return;
    }

    let child_indent = format!("{indent}{INDENT_STEP}");
    let mut index = itoa::Buffer::new();
    for (i, item) in items.iter().enumerate() {
        match item {
            Value::Map(row) => {
                lines.push(format!("{indent}[{}]", index.format(i + 1)));
                write_fields(row, &child_indent, lines);
            }
            Value::List(nested) => {
                lines.push(format!("{indent}[{}]", index.format(i + 1)));
                write_list(nested, &child_indent, lines);
            }
            Value::Scalar(scalar) => lines.push(format!("{indent}- {scalar}")),
        }
    }
}
