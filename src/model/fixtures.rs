// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in demo export used by `--demo`, tests, and benches.

/// A small but representative export: scalar fields, nil scalars, message
/// attributes, list rows, a record with a digest-only body, and one record whose
/// XML is broken on purpose.
pub fn demo_export_json() -> &'static str {
    r#"[
  {
    "digest": { "integrationId": "ORD-1042", "date": "2026-02-11", "source": "erp", "attempt": 1 },
    "xml": "<message id=\"m-1042\" name=\"order-sync\" date=\"2026-02-11\"><scalar name=\"state\">confirmed</scalar><scalar name=\"carrier\" nil=\"true\"/><scalar name=\"note\">  priority  </scalar><list name=\"lines\"><complex><scalar name=\"sku\">A-77</scalar><scalar name=\"qty\">2</scalar></complex><complex><scalar name=\"sku\">B-12</scalar><scalar name=\"qty\">1</scalar></complex></list></message>"
  },
  {
    "digest": { "integrationId": "ORD-1043", "date": "2026-02-12", "retried": true },
    "xml": "<envelope><message id=\"m-1043\"><scalar name=\"state\">pending</scalar><scalar name=\"reason\" nil=\"true\"/><list><complex><scalar name=\"code\">W1</scalar></complex><complex><scalar>ignored</scalar></complex></list></message></envelope>"
  },
  {
    "digest": { "integrationId": "ORD-1044" },
    "xml": "<message id=\"m-1044\" name=\"order-sync\"><scalar name=\"state\">failed</scalar></message"
  },
  {
    "digest": { "date": "2026-02-14" }
  }
]"#
}

#[cfg(test)]
mod tests {
    use super::demo_export_json;

    #[test]
    fn demo_export_is_valid_json_array() {
        let value: serde_json::Value =
            serde_json::from_str(demo_export_json()).expect("demo export parses");
        let items = value.as_array().expect("demo export is an array");
        assert_eq!(items.len(), 4);
    }
}
