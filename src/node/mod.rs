// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Node attribute parsing and partition filtering.

pub mod filter;
pub mod parser;
pub mod types;

pub use filter::filter_partition;
pub use parser::parse_nodes;
pub use types::NodeRecord;
