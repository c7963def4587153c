// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! One-shot scontrol invocation. Parsing lives elsewhere; this module only
//! turns the external command into a complete text blob or a failure.

use std::process::Command;

use anyhow::{anyhow, Context, Result};

/// Fetch the one-line-per-node dump for the whole cluster.
///
/// A run that succeeds but prints nothing is reported as a distinct
/// "no node data" failure, so callers can tell it apart from a filter
/// criterion that matched no nodes.
pub fn get_node_output() -> Result<String> {
    let output = Command::new("scontrol")
        .args(["show", "nodes", "--oneliner"])
        .output()
        .context("Failed to execute scontrol")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!("scontrol failed: {}", stderr.trim()));
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if stdout.trim().is_empty() {
        return Err(anyhow!("scontrol produced no node data"));
    }
    Ok(stdout)
}

/// Check if Slurm commands are available
pub fn is_slurm_available() -> bool {
    Command::new("scontrol")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
