// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::record::Record;

/// Ordered collection of records parsed from one export. Replaced wholesale on
/// every (re)load, never partially mutated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Selector labels in record order.
    pub fn labels(&self) -> Vec<String> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| record.display_label(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Dataset;
    use crate::model::record::{Digest, Message, Record};
    use crate::model::value::{FieldMap, Value};

    fn record(id: &str) -> Record {
        let mut fields = FieldMap::new();
        fields.insert("integrationId".into(), Value::text(id));
        Record::new(Digest::new(fields), Message::default())
    }

    #[test]
    fn labels_are_ordered_and_one_based() {
        let dataset = Dataset::new(vec![record("A"), record("B")]);
        assert_eq!(dataset.labels(), vec!["#1  A  —", "#2  B  —"]);
    }

    #[test]
    fn get_out_of_range_is_none() {
        let dataset = Dataset::new(vec![record("A")]);
        assert!(dataset.get(0).is_some());
        assert!(dataset.get(1).is_none());
        assert!(Dataset::default().is_empty());
    }
}
