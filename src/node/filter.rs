// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Partition membership filtering.

use super::types::NodeRecord;

/// Keep the nodes whose `Partitions` list contains `criterion`, in input
/// order. An empty or absent criterion passes every record; a record
/// without a `Partitions` field never matches a set criterion.
///
/// The reserved criterion `debug` also matches the element `debug*`, the
/// marker Slurm attaches to the cluster's default partition. No other
/// criterion matches a `*`-suffixed variant.
pub fn filter_partition(records: Vec<NodeRecord>, criterion: Option<&str>) -> Vec<NodeRecord> {
    let Some(criterion) = criterion.filter(|c| !c.is_empty()) else {
        return records;
    };
    records
        .into_iter()
        .filter(|r| matches_partition(r, criterion))
        .collect()
}

fn matches_partition(record: &NodeRecord, criterion: &str) -> bool {
    let Some(partitions) = record.partitions() else {
        return false;
    };
    partitions
        .split(',')
        .map(str::trim)
        .any(|p| p == criterion || (criterion == "debug" && p == "debug*"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::parser::build_record;

    fn records() -> Vec<NodeRecord> {
        [
            "NodeName=node01 Partitions=compute State=MIXED",
            "NodeName=node02 Partitions=compute,gpu State=IDLE",
            "NodeName=debug01 Partitions=debug* State=IDLE",
            "NodeName=debug02 Partitions=debug State=IDLE",
            "NodeName=stray01 State=DOWN",
        ]
        .iter()
        .map(|l| build_record(l).unwrap())
        .collect()
    }

    #[test]
    fn test_no_criterion_passes_all() {
        let all = records();
        assert_eq!(filter_partition(all.clone(), None), all);
        assert_eq!(filter_partition(all.clone(), Some("")), all);
    }

    #[test]
    fn test_exact_element_match() {
        let out = filter_partition(records(), Some("gpu"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name(), "node02");
    }

    #[test]
    fn test_preserves_input_order() {
        let out = filter_partition(records(), Some("compute"));
        let names: Vec<&str> = out.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["node01", "node02"]);
    }

    #[test]
    fn test_debug_matches_default_partition_marker() {
        let out = filter_partition(records(), Some("debug"));
        let names: Vec<&str> = out.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["debug01", "debug02"]);
    }

    #[test]
    fn test_star_suffix_not_generalized() {
        let all = vec![build_record("NodeName=node01 Partitions=compute* State=IDLE").unwrap()];
        assert!(filter_partition(all, Some("compute")).is_empty());
    }

    #[test]
    fn test_missing_partitions_field_fails() {
        let out = filter_partition(records(), Some("compute"));
        assert!(out.iter().all(|r| r.name() != "stray01"));
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(filter_partition(records(), Some("largemem")).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = filter_partition(records(), Some("compute"));
        let twice = filter_partition(once.clone(), Some("compute"));
        assert_eq!(once, twice);
    }
}
