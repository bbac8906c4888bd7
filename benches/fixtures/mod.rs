// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

use std::fmt::Write as _;

/// One `<message>` payload with `scalars` plain fields and `rows` list rows.
/// Fully deterministic so bench case IDs stay comparable across runs.
pub fn message_xml(scalars: usize, rows: usize) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<message id="m-1" name="bench" date="2026-01-01">"#);
    for index in 0..scalars {
        if index % 7 == 3 {
            let _ = write!(xml, r#"<scalar name="field{index}" nil="true"/>"#);
        } else {
            let _ = write!(xml, r#"<scalar name="field{index}">value-{index}</scalar>"#);
        }
    }
    xml.push_str(r#"<list name="rows">"#);
    for row in 0..rows {
        let _ = write!(
            xml,
            r#"<complex><scalar name="sku">SKU-{row}</scalar><scalar name="qty">{}</scalar><scalar name="lot" nil="true"/></complex>"#,
            row % 9 + 1
        );
    }
    xml.push_str("</list></message>");
    xml
}

/// A whole export: `records` array elements, each with a digest and a message
/// payload of the given shape.
pub fn export_json(records: usize, scalars: usize, rows: usize) -> String {
    let payload = message_xml(scalars, rows).replace('"', "\\\"");
    let mut json = String::from("[");
    for index in 0..records {
        if index > 0 {
            json.push(',');
        }
        let _ = write!(
            json,
            r#"{{"digest":{{"integrationId":"ORD-{index}","date":"2026-01-{:02}","attempt":{},"final":{}}},"xml":"{payload}"}}"#,
            index % 28 + 1,
            index % 5,
            index % 2 == 0
        );
    }
    json.push(']');
    json
}
