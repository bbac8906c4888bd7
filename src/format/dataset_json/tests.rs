// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::rstest;

use super::{load_dataset, DatasetParseError};
use crate::model::{fixtures, Message, Value};

#[test]
fn round_trips_a_single_record() {
    let raw = r#"[{"digest":{"integrationId":"I1","date":"D1"},"xml":"<message><scalar name=\"f\">v</scalar></message>"}]"#;
    let dataset = load_dataset(raw).expect("load");

    assert_eq!(dataset.len(), 1);
    let record = dataset.get(0).expect("record");
    assert_eq!(record.digest().fields().get("integrationId"), Some(&Value::text("I1")));
    assert_eq!(record.digest().fields().get("date"), Some(&Value::text("D1")));
    assert_eq!(record.message().fields().get("f"), Some(&Value::text("v")));
    assert_eq!(record.display_label(0), "#1  I1  D1");
}

#[rstest]
#[case(r#"{"a":1}"#, "an object")]
#[case(r#""text""#, "a string")]
#[case("42", "a number")]
#[case("null", "null")]
fn rejects_non_array_top_level(#[case] raw: &str, #[case] expected_kind: &str) {
    let err = load_dataset(raw).expect_err("must fail");
    let DatasetParseError::NotAnArray { found } = err else {
        panic!("expected NotAnArray, got {err:?}");
    };
    assert_eq!(found, expected_kind);
}

#[test]
fn rejects_invalid_json() {
    let err = load_dataset("[{").expect_err("must fail");
    assert!(matches!(err, DatasetParseError::Json { .. }));
}

#[test]
fn rejects_non_object_elements_with_their_index() {
    let err = load_dataset(r#"[{"digest":{}}, 7]"#).expect_err("must fail");
    let DatasetParseError::Element { index, .. } = err else {
        panic!("expected Element, got {err:?}");
    };
    assert_eq!(index, 1);
}

#[test]
fn missing_fields_default_to_empty() {
    let dataset = load_dataset("[{}]").expect("load");
    let record = dataset.get(0).expect("record");
    assert!(record.digest().fields().is_empty());
    assert_eq!(record.message(), &Message::no_message());
}

#[test]
fn one_bad_xml_payload_does_not_abort_the_load() {
    let raw = r#"[
        {"digest":{"integrationId":"A"},"xml":"<message><scalar name=\"f\">v</scalar></message>"},
        {"digest":{"integrationId":"B"},"xml":"<message><scalar"}
    ]"#;
    let dataset = load_dataset(raw).expect("load");
    assert_eq!(dataset.len(), 2);
    assert!(!dataset.get(0).expect("first").message().is_degenerate());
    assert!(dataset.get(1).expect("second").message().is_degenerate());
}

#[test]
fn demo_export_loads_in_order() {
    let dataset = load_dataset(fixtures::demo_export_json()).expect("demo loads");
    assert_eq!(dataset.len(), 4);
    let labels = dataset.labels();
    assert_eq!(labels[0], "#1  ORD-1042  2026-02-11");
    assert_eq!(labels[3], "#4  —  2026-02-14");
    // Third record's XML is truncated on purpose.
    assert!(dataset.get(2).expect("third").message().is_degenerate());
}
