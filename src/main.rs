// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

use std::io::IsTerminal;

use anyhow::{bail, Result};
use clap::Parser;

mod node;
mod report;
mod slurm;

#[derive(Parser, Debug)]
#[command(name = "sstate")]
#[command(about = "Summarize per-node and cluster-wide CPU/memory usage of a Slurm cluster")]
#[command(version)]
struct Args {
    /// Show only nodes belonging to this partition
    #[arg(short, long)]
    partition: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !slurm::is_slurm_available() {
        bail!("scontrol not found in PATH; is this host part of a Slurm cluster?");
    }

    let output = slurm::get_node_output()?;
    let color = !args.no_color && std::io::stdout().is_terminal();
    print!("{}", render_report(&output, args.partition.as_deref(), color));
    Ok(())
}

/// Run the full pipeline on one scontrol dump and render the report.
fn render_report(output: &str, partition: Option<&str>, color: bool) -> String {
    let records = node::parse_nodes(output);
    let records = node::filter_partition(records, partition);
    let (rows, totals) = report::aggregate(&records);

    let mut out = report::render_nodes(&rows, color);
    if rows.is_empty() {
        if let Some(p) = partition {
            out.push_str(&format!("(no nodes in partition '{}')\n", p));
        }
    }
    out.push_str("\nTotals:\n");
    out.push_str(&report::render_totals(&totals, color));
    out.push('\n');
    out.push_str(&report::render_legend(color));
    out
}
