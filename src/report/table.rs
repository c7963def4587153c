// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Plain-text table and legend rendering.
//!
//! Cells are padded to column width before any styling is applied, so
//! ANSI escape sequences never affect alignment. Column order and header
//! labels are a compatibility contract; downstream consumers may parse
//! the rendered tables.

use crossterm::style::{Color, Stylize};

use super::style::{self, bar, state_color, usage_color};
use super::usage::{human_mb, ClusterTotals, NodeUsage};

const NODE_HEADERS: [&str; 8] = [
    "Node",
    "State",
    "CPU Alloc/Total",
    "CPU %",
    "CPU Bar",
    "Mem Alloc/Total",
    "Mem %",
    "Mem Bar",
];

const TOTAL_HEADERS: [&str; 7] = [
    "Nodes",
    "CPU Alloc/Total",
    "CPU %",
    "CPU Bar",
    "Mem Alloc/Total",
    "Mem %",
    "Mem Bar",
];

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

const NODE_ALIGNS: [Align; 8] = [
    Align::Left,
    Align::Left,
    Align::Right,
    Align::Right,
    Align::Left,
    Align::Right,
    Align::Right,
    Align::Left,
];

const TOTAL_ALIGNS: [Align; 7] = [
    Align::Right,
    Align::Right,
    Align::Right,
    Align::Left,
    Align::Right,
    Align::Right,
    Align::Left,
];

/// Per-node usage table; an empty row set still renders header and rule.
pub fn render_nodes(rows: &[NodeUsage], color: bool) -> String {
    let cells: Vec<Vec<(String, Option<Color>)>> = rows
        .iter()
        .map(|row| {
            vec![
                (row.name.clone(), None),
                (row.state.clone(), state_color(&row.state)),
                (format!("{}/{}", row.cpu_alloc, row.cpu_total), None),
                (row.cpu_percent.to_string(), None),
                (bar(row.cpu_percent), usage_color(row.cpu_percent)),
                (
                    format!("{}/{}", human_mb(row.mem_alloc_mb), human_mb(row.mem_total_mb)),
                    None,
                ),
                (row.mem_percent.to_string(), None),
                (bar(row.mem_percent), usage_color(row.mem_percent)),
            ]
        })
        .collect();
    render_table(&NODE_HEADERS, &NODE_ALIGNS, &cells, color)
}

/// Single-row cluster-wide totals table.
pub fn render_totals(totals: &ClusterTotals, color: bool) -> String {
    let cpu_percent = totals.cpu_percent();
    let mem_percent = totals.mem_percent();
    let cells = vec![vec![
        (totals.nodes.to_string(), None),
        (format!("{}/{}", totals.cpu_alloc, totals.cpu_total), None),
        (cpu_percent.to_string(), None),
        (bar(cpu_percent), usage_color(cpu_percent)),
        (
            format!(
                "{}/{}",
                human_mb(totals.mem_alloc_mb),
                human_mb(totals.mem_total_mb)
            ),
            None,
        ),
        (mem_percent.to_string(), None),
        (bar(mem_percent), usage_color(mem_percent)),
    ]];
    render_table(&TOTAL_HEADERS, &TOTAL_ALIGNS, &cells, color)
}

/// Legend text generated from the presenter's constant tables.
pub fn render_legend(color: bool) -> String {
    let mut usage_labels = Vec::new();
    let mut lower: u16 = 0;
    for (upper, band_color) in style::USAGE_BANDS {
        let label = if u16::from(upper) == lower {
            format!("{}%", upper)
        } else {
            format!("{}-{}%", lower, upper)
        };
        usage_labels.push(paint(&label, band_color, color));
        lower = u16::from(upper) + 1;
    }

    let state_labels: Vec<String> = style::STATE_RULES
        .iter()
        .map(|(needles, rule_color)| paint(&needles.join("/"), *rule_color, color))
        .collect();

    format!(
        "Legend:\n  Usage: {}\n  State: {}\n",
        usage_labels.join("  "),
        state_labels.join("  ")
    )
}

fn render_table(
    headers: &[&str],
    aligns: &[Align],
    rows: &[Vec<(String, Option<Color>)>],
    color: bool,
) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, (text, _)) in row.iter().enumerate() {
            widths[i] = widths[i].max(text.chars().count());
        }
    }

    let mut out = String::new();

    let header_cells: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i], aligns[i]))
        .collect();
    out.push_str(header_cells.join("  ").trim_end());
    out.push('\n');

    let rule_cells: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule_cells.join("  "));
    out.push('\n');

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, (text, cell_color))| paint(&pad(text, widths[i], aligns[i]), *cell_color, color))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }

    out
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let len = text.chars().count();
    let fill = " ".repeat(width.saturating_sub(len));
    match align {
        Align::Left => format!("{}{}", text, fill),
        Align::Right => format!("{}{}", fill, text),
    }
}

fn paint(text: &str, color: Option<Color>, enabled: bool) -> String {
    match color {
        Some(c) if enabled => format!("{}", text.with(c)),
        _ => text.to_string(),
    }
}
