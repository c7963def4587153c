// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

use std::collections::HashMap;

/// One node's attribute dump, keyed by attribute name.
///
/// scontrol's field set is open-ended, so the record keeps every
/// attribute as a raw string and exposes named accessors for the fields
/// consumed downstream. The map is only ever queried by key; aggregation
/// order comes solely from the order records were built in.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    attrs: HashMap<String, String>,
}

impl NodeRecord {
    pub fn new(attrs: HashMap<String, String>) -> Self {
        Self { attrs }
    }

    /// Raw value of an attribute, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Node hostname. The record builder guarantees this field exists.
    pub fn name(&self) -> &str {
        self.get("NodeName").unwrap_or("")
    }

    /// Comma-separated partition membership list, if reported.
    pub fn partitions(&self) -> Option<&str> {
        self.get("Partitions")
    }

    /// Scheduling state string (e.g. IDLE, MIXED, ALLOCATED+DRAIN).
    pub fn state(&self) -> &str {
        self.get("State").unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> NodeRecord {
        NodeRecord::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_accessors() {
        let r = record(&[
            ("NodeName", "node01"),
            ("Partitions", "compute,gpu"),
            ("State", "MIXED"),
        ]);
        assert_eq!(r.name(), "node01");
        assert_eq!(r.partitions(), Some("compute,gpu"));
        assert_eq!(r.state(), "MIXED");
        assert_eq!(r.get("CPUTot"), None);
    }

    #[test]
    fn test_missing_fields_default_empty() {
        let r = record(&[("NodeName", "node01")]);
        assert_eq!(r.partitions(), None);
        assert_eq!(r.state(), "");
    }
}
