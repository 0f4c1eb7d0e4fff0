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

    table::scale_factor.rs

    PVT-delta scale factors (SPEC_FULL §4.C): a table value gets multiplied by
    (1 + dprocess*kp)(1 + dvoltage*kv)(1 + dtemperature*kt) where the three k
    coefficients are looked up by (ScaleFactorType, rise/fall-or-low/high).

*/

#![allow(dead_code)]

use crate::units::RiseFall;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, EnumCount, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ScaleFactorType {
    PinCap,
    WireCap,
    MinPeriod,
    Cell,
    Hold,
    Setup,
    Recovery,
    Removal,
    Nochange,
    Skew,
    LeakagePower,
    InternalPower,
    Transition,
    MinPulseWidth,
    Unknown,
}

impl ScaleFactorType {
    /// Types with a rise/fall-indexed `-rise`/`-fall` attribute suffix.
    pub fn has_rise_fall_suffix(self) -> bool {
        matches!(
            self,
            ScaleFactorType::Cell
                | ScaleFactorType::Hold
                | ScaleFactorType::Setup
                | ScaleFactorType::Recovery
                | ScaleFactorType::Removal
                | ScaleFactorType::Nochange
                | ScaleFactorType::Skew
        )
    }

    /// Types with a rise/fall-indexed prefix instead (`rise_` / `fall_`).
    pub fn has_rise_fall_prefix(self) -> bool {
        matches!(self, ScaleFactorType::Transition)
    }

    /// Types indexed by low/high rather than rise/fall.
    pub fn has_low_high_suffix(self) -> bool {
        matches!(self, ScaleFactorType::MinPulseWidth)
    }
}

/// Process/voltage/temperature deltas relative to the library's nominal
/// corner, as published on an `OperatingConditions` group.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pvt {
    pub process: f64,
    pub voltage: f64,
    pub temperature: f64,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
struct ScaleFactorTriple {
    kp: f64,
    kv: f64,
    kt: f64,
}

/// One `ScaleFactors` group: a `kp`/`kv`/`kt` triple per
/// `(ScaleFactorType, rise/fall)`; the rise/fall slot is unused for types
/// without a rise/fall suffix/prefix (index 0 is then the only one set).
#[derive(Clone, Debug, Default)]
pub struct ScaleFactors {
    name: String,
    table: Vec<[ScaleFactorTriple; 2]>,
}

impl ScaleFactors {
    pub fn new(name: impl Into<String>) -> Self {
        let table = vec![[ScaleFactorTriple::default(); 2]; ScaleFactorType::COUNT];
        ScaleFactors { name: name.into(), table }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_scale(&mut self, ty: ScaleFactorType, rf: Option<RiseFall>, kp: f64, kv: f64, kt: f64) {
        let idx = rf.map(|rf| rf.index()).unwrap_or(0);
        self.table[ty as usize][idx] = ScaleFactorTriple { kp, kv, kt };
    }

    fn triple(&self, ty: ScaleFactorType, rf: Option<RiseFall>) -> ScaleFactorTriple {
        let idx = rf.map(|rf| rf.index()).unwrap_or(0);
        self.table[ty as usize][idx]
    }

    /// Applies this scale-factor set's `(kp, kv, kt)` for `ty`/`rf` to `value`
    /// given the PVT deltas of the active operating condition.
    pub fn scale(&self, ty: ScaleFactorType, rf: Option<RiseFall>, pvt: Pvt, value: f64) -> f64 {
        let t = self.triple(ty, rf);
        value * (1.0 + pvt.process * t.kp) * (1.0 + pvt.voltage * t.kv) * (1.0 + pvt.temperature * t.kt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_applies_pvt_deltas() {
        let mut sf = ScaleFactors::new("slow");
        sf.set_scale(ScaleFactorType::Cell, Some(RiseFall::Rise), 0.1, 0.2, -0.05);
        let pvt = Pvt { process: 1.0, voltage: 0.5, temperature: 2.0 };
        let scaled = sf.scale(ScaleFactorType::Cell, Some(RiseFall::Rise), pvt, 100.0);
        let expected = 100.0 * (1.0 + 1.0 * 0.1) * (1.0 + 0.5 * 0.2) * (1.0 + 2.0 * -0.05);
        assert!((scaled - expected).abs() < 1e-9);
    }

    #[test]
    fn unset_entries_are_unity() {
        let sf = ScaleFactors::new("nominal");
        let pvt = Pvt { process: 1.0, voltage: 1.0, temperature: 1.0 };
        assert_eq!(sf.scale(ScaleFactorType::Unknown, None, pvt, 42.0), 42.0);
    }

    #[test]
    fn rise_fall_suffix_classification() {
        assert!(ScaleFactorType::Setup.has_rise_fall_suffix());
        assert!(!ScaleFactorType::PinCap.has_rise_fall_suffix());
        assert!(ScaleFactorType::Transition.has_rise_fall_prefix());
        assert!(ScaleFactorType::MinPulseWidth.has_low_high_suffix());
    }
}
