// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Color classification and bar glyphs for usage percentages and node
//! states. The legend is generated from the same constant tables as the
//! classifiers, so displayed thresholds cannot drift from the actual ones.

use crossterm::style::Color;

/// Usage bands as (inclusive upper bound, color). Checked in order; the
/// band's lower bound is the previous entry's upper bound plus one.
pub const USAGE_BANDS: [(u8, Option<Color>); 5] = [
    (0, None),
    (25, Some(Color::DarkYellow)),
    (50, Some(Color::DarkBlue)),
    (75, Some(Color::DarkCyan)),
    (100, Some(Color::Green)),
];

/// State substring rules in precedence order; the first rule with a
/// matching substring decides the color. Problem states come first so
/// e.g. `ALLOCATED+DRAIN` classifies as a problem, not as allocated.
pub const STATE_RULES: [(&[&str], Option<Color>); 4] = [
    (&["down", "drain", "fail", "error"], Some(Color::Red)),
    (&["alloc"], Some(Color::DarkGreen)),
    (&["mixed"], Some(Color::DarkYellow)),
    (&["idle"], None),
];

/// Number of cells in a usage bar.
pub const BAR_WIDTH: usize = 10;

const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';

/// Color class for a usage percentage; `None` renders unstyled.
pub fn usage_color(percent: u8) -> Option<Color> {
    for (upper, color) in USAGE_BANDS {
        if percent <= upper {
            return color;
        }
    }
    // Over-allocated nodes can report more than 100%.
    USAGE_BANDS[USAGE_BANDS.len() - 1].1
}

/// Color class for a node state string, case-insensitive.
pub fn state_color(state: &str) -> Option<Color> {
    let state = state.to_lowercase();
    for (needles, color) in STATE_RULES {
        if needles.iter().any(|n| state.contains(n)) {
            return color;
        }
    }
    None
}

/// Ten-cell bar with one cell filled per 10 percentage points.
pub fn bar(percent: u8) -> String {
    let filled = ((percent as f64 / 10.0).round() as usize).min(BAR_WIDTH);
    let mut s = String::with_capacity(BAR_WIDTH * BAR_FILLED.len_utf8());
    for _ in 0..filled {
        s.push(BAR_FILLED);
    }
    for _ in 0..BAR_WIDTH - filled {
        s.push(BAR_EMPTY);
    }
    s
}
