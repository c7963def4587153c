// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Usage aggregation and report rendering.

pub mod style;
pub mod table;
pub mod usage;

pub use table::{render_legend, render_nodes, render_totals};
pub use usage::{aggregate, ClusterTotals, NodeUsage};
