/*
    sta_core

    Copyright 2024-2026 The sta_core Authors

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the "Software"),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    ---------------------------------------------------------------------------

    config.rs

    The handful of knobs that aren't liberty-derived: how many dcalc analysis
    points the graph should size itself for, whether slews are modeled, and
    whether wire arcs are built. SPEC_FULL §2.G.

*/

use serde::{Deserialize, Serialize};

/// Number of rise/fall slews modeled per vertex.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlewModel {
    /// No slews stored at all.
    None,
    /// One shared slew for both rise and fall.
    Shared,
    /// Separate rise and fall slews.
    #[default]
    RiseFall,
}

impl SlewModel {
    pub fn rf_count(self) -> u32 {
        match self {
            SlewModel::None => 0,
            SlewModel::Shared => 1,
            SlewModel::RiseFall => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Number of delay-calculation analysis points the graph is sized for.
    pub dcalc_ap_count: u32,
    pub slew_model: SlewModel,
    /// Whether per-arc delay storage is allocated at all (a purely
    /// topological graph may skip this).
    pub have_arc_delays: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig { dcalc_ap_count: 1, slew_model: SlewModel::RiseFall, have_arc_delays: true }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LibertyConfig {
    /// Whether the latch-enable inference pass (SPEC_FULL §4.D) promotes
    /// bare combinational arcs lacking explicit `statetable`/`ff`/`latch`
    /// groups into latch roles.
    pub infer_latches: bool,
}

impl Default for LibertyConfig {
    fn default() -> Self {
        LibertyConfig { infer_latches: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rf_counts() {
        assert_eq!(SlewModel::None.rf_count(), 0);
        assert_eq!(SlewModel::Shared.rf_count(), 1);
        assert_eq!(SlewModel::RiseFall.rf_count(), 2);
    }
}
