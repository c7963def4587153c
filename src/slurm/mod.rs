// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Slurm CLI integration: query node information via scontrol.

pub mod scontrol;

pub use scontrol::{get_node_output, is_slurm_available};
