// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Tokenizer and record builder for `scontrol show nodes --oneliner` output.
//!
//! scontrol emits loosely structured `Key=Value` attributes where values may
//! contain spaces and embedded `=` (e.g. `OS=Linux 5.14`,
//! `CfgTRES=cpu=16,mem=64000M`), so a plain whitespace split loses data.
//! Instead each line is split at attribute-name boundaries (an uppercase
//! letter, one or more word characters, then `=`) and each key is paired
//! with the text up to the next boundary.

use std::collections::HashMap;

use super::types::NodeRecord;

/// Split one line into segments, each starting at an attribute-name boundary.
///
/// Text before the first boundary is kept as its own segment and a line with
/// no boundary at all comes back as a single segment, so concatenating the
/// returned segments always reproduces the input exactly.
pub fn tokenize_line(line: &str) -> Vec<&str> {
    let bytes = line.as_bytes();
    let mut boundaries = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match match_key(bytes, i) {
            Some(end) => {
                boundaries.push(i);
                i = end;
            }
            None => i += 1,
        }
    }

    if boundaries.is_empty() {
        return vec![line];
    }

    let mut tokens = Vec::with_capacity(boundaries.len() + 1);
    if boundaries[0] > 0 {
        tokens.push(&line[..boundaries[0]]);
    }
    for (n, &start) in boundaries.iter().enumerate() {
        let end = boundaries.get(n + 1).copied().unwrap_or(line.len());
        tokens.push(&line[start..end]);
    }
    tokens
}

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Try to match `[A-Z]\w+=` at `start`; returns the index just past the `=`.
fn match_key(bytes: &[u8], start: usize) -> Option<usize> {
    if !bytes[start].is_ascii_uppercase() {
        return None;
    }
    let mut i = start + 1;
    while i < bytes.len() && is_word(bytes[i]) {
        i += 1;
    }
    if i > start + 1 && i < bytes.len() && bytes[i] == b'=' {
        Some(i + 1)
    } else {
        None
    }
}

/// True if `name` is a well-formed attribute name.
fn is_key(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= 2
        && bytes[0].is_ascii_uppercase()
        && bytes[1..].iter().copied().all(is_word)
}

/// Build a record from one line.
///
/// Values are trimmed; a repeated attribute name keeps its last value.
/// Returns `None` when the line carries no `NodeName` attribute, so junk
/// lines in the dump are dropped without aborting the run.
pub fn build_record(line: &str) -> Option<NodeRecord> {
    let mut attrs = HashMap::new();
    for token in tokenize_line(line) {
        if let Some((key, value)) = token.split_once('=') {
            if is_key(key) {
                attrs.insert(key.to_string(), value.trim().to_string());
            }
        }
    }
    if !attrs.contains_key("NodeName") {
        return None;
    }
    Some(NodeRecord::new(attrs))
}

/// Parse a whole dump, one record per line, in input order.
pub fn parse_nodes(output: &str) -> Vec<NodeRecord> {
    output.lines().filter_map(build_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple_line() {
        let line = "NodeName=node01 State=IDLE";
        let tokens = tokenize_line(line);
        assert_eq!(tokens, vec!["NodeName=node01 ", "State=IDLE"]);
    }

    #[test]
    fn test_tokenize_is_lossless() {
        let lines = [
            "NodeName=node01 Partitions=compute State=MIXED",
            "NodeName=gpu01 OS=Linux 5.14.0-el9 CfgTRES=cpu=16,mem=64000M,gres/gpu=4",
            "leading junk NodeName=node02 Reason=drained by admin [root@2024-01-01]",
            "no boundaries here at all",
            "",
        ];
        for line in lines {
            assert_eq!(tokenize_line(line).concat(), line, "line: {:?}", line);
        }
    }

    #[test]
    fn test_tokenize_value_with_spaces_and_equals() {
        let line = "NodeName=node01 AllocTRES=cpu=8,mem=32000M State=MIXED";
        let tokens = tokenize_line(line);
        // lowercase `cpu=` and `mem=` are value text, not boundaries
        assert_eq!(
            tokens,
            vec!["NodeName=node01 ", "AllocTRES=cpu=8,mem=32000M ", "State=MIXED"]
        );
    }

    #[test]
    fn test_tokenize_no_boundary_single_token() {
        assert_eq!(tokenize_line("x=1 y=2"), vec!["x=1 y=2"]);
    }

    #[test]
    fn test_build_record_basic() {
        let r = build_record("NodeName=node01 CPUTot=16 State=IDLE").unwrap();
        assert_eq!(r.name(), "node01");
        assert_eq!(r.get("CPUTot"), Some("16"));
        assert_eq!(r.state(), "IDLE");
    }

    #[test]
    fn test_build_record_last_occurrence_wins() {
        let r = build_record("NodeName=node01 State=IDLE State=DOWN").unwrap();
        assert_eq!(r.state(), "DOWN");
    }

    #[test]
    fn test_build_record_drops_line_without_node_name() {
        assert!(build_record("State=IDLE CPUTot=16").is_none());
        assert!(build_record("garbage line").is_none());
        assert!(build_record("").is_none());
    }

    #[test]
    fn test_parse_nodes_skips_bad_lines() {
        let dump = "NodeName=node01 State=IDLE\n\
                    not a node line\n\
                    NodeName=node02 State=MIXED\n";
        let records = parse_nodes(dump);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), "node01");
        assert_eq!(records[1].name(), "node02");
    }
}
