// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Per-node usage rows and cluster-wide totals.

use crate::node::NodeRecord;

/// Resource usage derived from one node record.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeUsage {
    pub name: String,
    pub state: String,
    pub cpu_alloc: u64,
    pub cpu_total: u64,
    pub cpu_percent: u8,
    /// Allocated memory in MB as reported by scontrol.
    pub mem_alloc_mb: u64,
    /// Total memory in MB as reported by scontrol.
    pub mem_total_mb: u64,
    pub mem_percent: u8,
}

impl NodeUsage {
    pub fn from_record(record: &NodeRecord) -> Self {
        let cpu_alloc = parse_or_zero(record.get("CPUAlloc").map(first_component));
        let cpu_total = parse_or_zero(record.get("CPUTot").map(last_component));
        let mem_alloc_mb = parse_or_zero(record.get("AllocMem"));
        let mem_total_mb = parse_or_zero(record.get("RealMemory"));
        Self {
            name: record.name().to_string(),
            state: record.state().to_string(),
            cpu_percent: percent(cpu_alloc, cpu_total),
            mem_percent: percent(mem_alloc_mb, mem_total_mb),
            cpu_alloc,
            cpu_total,
            mem_alloc_mb,
            mem_total_mb,
        }
    }
}

/// Cluster-wide totals over a set of usage rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterTotals {
    pub nodes: u64,
    pub cpu_alloc: u64,
    pub cpu_total: u64,
    pub mem_alloc_mb: u64,
    pub mem_total_mb: u64,
}

impl ClusterTotals {
    pub fn cpu_percent(&self) -> u8 {
        percent(self.cpu_alloc, self.cpu_total)
    }

    pub fn mem_percent(&self) -> u8 {
        percent(self.mem_alloc_mb, self.mem_total_mb)
    }
}

/// Build one usage row per record, then fold the rows into cluster totals.
///
/// Rows and totals derive from the same parsed values in input order, so
/// the sum of any row column always equals the matching totals column.
pub fn aggregate(records: &[NodeRecord]) -> (Vec<NodeUsage>, ClusterTotals) {
    let rows: Vec<NodeUsage> = records.iter().map(NodeUsage::from_record).collect();
    let totals = rows.iter().fold(ClusterTotals::default(), |mut acc, row| {
        acc.nodes += 1;
        acc.cpu_alloc += row.cpu_alloc;
        acc.cpu_total += row.cpu_total;
        acc.mem_alloc_mb += row.mem_alloc_mb;
        acc.mem_total_mb += row.mem_total_mb;
        acc
    });
    (rows, totals)
}

/// Parse an integer attribute value, defaulting to 0 on absence or garbage.
///
/// One malformed attribute on one node must not abort the whole report;
/// the documented default for anything unparseable is exactly 0.
pub fn parse_or_zero(value: Option<&str>) -> u64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

// CPU fields may be discrete (`CPUAlloc=8 CPUTot=16`) or combined
// slash-form (`8/6/2/16`, alloc/idle/other/total); the allocated side
// takes the first component, the total side the last.
fn first_component(value: &str) -> &str {
    value.split('/').next().unwrap_or(value)
}

fn last_component(value: &str) -> &str {
    value.rsplit('/').next().unwrap_or(value)
}

/// `allocated / total` as a whole percentage; 0 when total is 0.
pub fn percent(alloc: u64, total: u64) -> u8 {
    if total == 0 {
        0
    } else {
        (100.0 * alloc as f64 / total as f64).round() as u8
    }
}

/// Scale a megabyte count to the largest binary unit that keeps the value
/// under 1024, one decimal place. Zero renders as `0Mi`.
pub fn human_mb(mb: u64) -> String {
    const UNITS: [&str; 6] = ["Mi", "Gi", "Ti", "Pi", "Ei", "Zi"];
    if mb == 0 {
        return "0Mi".to_string();
    }
    let mut value = mb as f64;
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{:.1}{}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.1}Yi", value)
}
