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

    liberty::library.rs

    Library: the top-level container a builder populates from a parsed
    liberty file (SPEC_FULL §3, §4.D) — cells, operating conditions, named
    scale-factor sets, driver waveforms and the unit table they all share.
    Exactly one operating condition is the library default; the rest are
    named corners a `Cell::scaled_cells` entry may point at.

*/

#![allow(dead_code)]

use indexmap::IndexMap;

use crate::error::LibertyBuildError;
use crate::table::driver_waveform::DriverWaveform;
use crate::table::scale_factor::ScaleFactors;
use crate::units::Units;

use super::cell::LibertyCell;
use super::environment::OperatingConditions;

#[derive(Default)]
pub struct Library {
    name: String,
    units: Units,
    cells: IndexMap<String, LibertyCell>,
    default_operating_conditions: Option<String>,
    operating_conditions: IndexMap<String, OperatingConditions>,
    scale_factors: IndexMap<String, ScaleFactors>,
    default_scale_factors: Option<String>,
    driver_waveforms: Vec<DriverWaveform>,
    /// Rise/fall slew-measurement thresholds, as fractions of VDD (e.g. 0.2
    /// and 0.8 for a 20%-80% transition), per SPEC_FULL §4.D.1.
    slew_lower_threshold: [f64; 2],
    slew_upper_threshold: [f64; 2],
}

impl Library {
    pub fn new(name: impl Into<String>) -> Self {
        Library {
            name: name.into(),
            units: Units::default(),
            slew_lower_threshold: [0.2, 0.2],
            slew_upper_threshold: [0.8, 0.8],
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn set_units(&mut self, units: Units) {
        self.units = units;
    }

    pub fn slew_thresholds(&self, rf_index: usize) -> (f64, f64) {
        (self.slew_lower_threshold[rf_index], self.slew_upper_threshold[rf_index])
    }

    pub fn set_slew_thresholds(&mut self, rf_index: usize, lower: f64, upper: f64) {
        self.slew_lower_threshold[rf_index] = lower;
        self.slew_upper_threshold[rf_index] = upper;
    }

    // ---- cells ------------------------------------------------------------

    pub fn add_cell(&mut self, cell: LibertyCell) {
        self.cells.insert(cell.name().to_string(), cell);
    }

    pub fn find_cell(&self, name: &str) -> Option<&LibertyCell> {
        self.cells.get(name)
    }

    pub fn find_cell_mut(&mut self, name: &str) -> Option<&mut LibertyCell> {
        self.cells.get_mut(name)
    }

    pub fn cells(&self) -> impl Iterator<Item = &LibertyCell> {
        self.cells.values()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    // ---- operating conditions -----------------------------------------------

    /// Adds an operating condition; `is_default` may be set for at most one
    /// entry, enforced at builder time via `DuplicateDefaultOperatingConditions`
    /// rather than here, since only the builder knows whether a later
    /// redefinition should replace or reject the earlier default.
    pub fn add_operating_conditions(&mut self, oc: OperatingConditions, is_default: bool) -> Result<(), LibertyBuildError> {
        if is_default {
            if let Some(existing) = &self.default_operating_conditions {
                if existing != oc.name() {
                    return Err(LibertyBuildError::DuplicateDefaultOperatingConditions {
                        existing: existing.clone(),
                        new: oc.name().to_string(),
                    });
                }
            }
            self.default_operating_conditions = Some(oc.name().to_string());
        }
        self.operating_conditions.insert(oc.name().to_string(), oc);
        Ok(())
    }

    pub fn operating_conditions(&self, name: &str) -> Option<&OperatingConditions> {
        self.operating_conditions.get(name)
    }

    pub fn default_operating_conditions(&self) -> Option<&OperatingConditions> {
        self.default_operating_conditions.as_ref().and_then(|name| self.operating_conditions.get(name))
    }

    // ---- scale factors --------------------------------------------------------

    pub fn add_scale_factors(&mut self, sf: ScaleFactors, is_default: bool) {
        let name = sf.name().to_string();
        if is_default {
            self.default_scale_factors = Some(name.clone());
        }
        self.scale_factors.insert(name, sf);
    }

    pub fn scale_factors(&self, name: &str) -> Option<&ScaleFactors> {
        self.scale_factors.get(name)
    }

    pub fn default_scale_factors(&self) -> Option<&ScaleFactors> {
        self.default_scale_factors.as_ref().and_then(|name| self.scale_factors.get(name))
    }

    // ---- driver waveforms -------------------------------------------------------

    pub fn add_driver_waveform(&mut self, waveform: DriverWaveform) {
        self.driver_waveforms.push(waveform);
    }

    /// The named driver waveform, or the library default (the single entry
    /// with no name) if `name` is `None` or not found.
    pub fn driver_waveform(&self, name: Option<&str>) -> Option<&DriverWaveform> {
        if let Some(name) = name {
            if let Some(w) = self.driver_waveforms.iter().find(|w| w.name() == Some(name)) {
                return Some(w);
            }
        }
        self.driver_waveforms.iter().find(|w| w.is_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::scale_factor::Pvt;
    use super::super::environment::WireloadTree;

    fn pvt() -> Pvt {
        Pvt { process: 1.0, voltage: 1.0, temperature: 25.0 }
    }

    #[test]
    fn finds_cells_by_name() {
        let mut lib = Library::new("lib1");
        lib.add_cell(LibertyCell::new("BUF"));
        assert!(lib.find_cell("BUF").is_some());
        assert!(lib.find_cell("NOPE").is_none());
        assert_eq!(lib.cell_count(), 1);
    }

    #[test]
    fn default_operating_conditions_round_trips() {
        let mut lib = Library::new("lib1");
        let oc = OperatingConditions::new("typical", pvt(), WireloadTree::BalancedCase);
        lib.add_operating_conditions(oc, true).unwrap();
        assert_eq!(lib.default_operating_conditions().unwrap().name(), "typical");
    }

    #[test]
    fn conflicting_default_operating_conditions_rejected() {
        let mut lib = Library::new("lib1");
        lib.add_operating_conditions(OperatingConditions::new("typical", pvt(), WireloadTree::BalancedCase), true).unwrap();
        let err = lib.add_operating_conditions(OperatingConditions::new("worst", pvt(), WireloadTree::WorstCase), true);
        assert!(err.is_err());
    }

    #[test]
    fn driver_waveform_falls_back_to_default() {
        let mut lib = Library::new("lib1");
        let axis = crate::table::TableAxis::new(
            crate::table::TableAxisVariable::InputNetTransition,
            vec![0.0, 1.0],
        );
        let axis2 = crate::table::TableAxis::new(crate::table::TableAxisVariable::NormalizedVoltage, vec![0.0, 1.0]);
        let table = crate::table::Table::new(vec![axis, axis2], vec![0.0, 1.0, 1.0, 2.0]);
        lib.add_driver_waveform(DriverWaveform::new(None, table).unwrap());
        assert!(lib.driver_waveform(Some("missing")).is_some());
        assert!(lib.driver_waveform(None).unwrap().is_default());
    }
}
