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

    table::model.rs

    TimingModel: the polymorphic-inheritance-hierarchy-turned-tagged-variant
    from SPEC_FULL §9's design notes (gate-linear | check-linear | gate-table
    | check-table | output-waveforms | receiver-capacitance). Dispatch is an
    `enum_dispatch` over a single `find_value` operation instead of a virtual
    call through a base-class pointer.

*/

#![allow(dead_code)]

use enum_dispatch::enum_dispatch;

use super::check_table::CheckTableModel;
use super::gate_table::GateTableModel;
use super::output_waveform::OutputWaveform;
use super::scale_factor::{Pvt, ScaleFactorType, ScaleFactors};
use super::Table;
use crate::units::RiseFall;

/// Everything `find_value` needs to apply a PVT scale factor on top of the
/// raw interpolated value; `scale_factors` is `None` when the cell has no
/// scale-factor set and the library default (or unity) applies instead.
#[derive(Copy, Clone, Debug)]
pub struct ScaleContext<'a> {
    pub pvt: Pvt,
    pub scale_factors: Option<&'a ScaleFactors>,
    pub scale_factor_type: ScaleFactorType,
    pub rise_fall: Option<RiseFall>,
}

impl<'a> ScaleContext<'a> {
    fn apply(&self, value: f64) -> f64 {
        match self.scale_factors {
            Some(sf) => sf.scale(self.scale_factor_type, self.rise_fall, self.pvt, value),
            None => value,
        }
    }
}

#[enum_dispatch]
pub trait FindValue {
    /// Pure value lookup against (x, y, z), as many of which are meaningful
    /// as the model has axes; unused trailing coordinates are ignored.
    fn find_value(&self, ctx: ScaleContext, x: f64, y: f64, z: f64) -> f64;
}

/// `delay = intrinsic + resistance * load` — the table-free fallback model
/// used by `dont_use`/test-only cells and by libraries that declare bare
/// `intrinsic_rise`/`rise_resistance` attributes instead of a table.
#[derive(Copy, Clone, Debug)]
pub struct GateLinearModel {
    pub intrinsic: f64,
    pub resistance: f64,
}

impl FindValue for GateLinearModel {
    fn find_value(&self, ctx: ScaleContext, x: f64, _y: f64, _z: f64) -> f64 {
        ctx.apply(self.intrinsic + self.resistance * x)
    }
}

/// The linear equivalent of a check table: `margin + slope * related_slew`.
#[derive(Copy, Clone, Debug)]
pub struct CheckLinearModel {
    pub margin: f64,
    pub slope: f64,
}

impl FindValue for CheckLinearModel {
    fn find_value(&self, ctx: ScaleContext, x: f64, _y: f64, _z: f64) -> f64 {
        ctx.apply(self.margin + self.slope * x)
    }
}

/// A gate-table variant picks one table out of a `GateTableModel` (cell
/// delay, cell slew, or a sigma table) at the point the arc's role and
/// rise/fall are known; this wraps that already-selected table.
#[derive(Clone, Debug)]
pub struct GateTableVariant {
    table: Table,
}

impl GateTableVariant {
    pub fn new(table: Table) -> Self {
        GateTableVariant { table }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
}

impl FindValue for GateTableVariant {
    fn find_value(&self, ctx: ScaleContext, x: f64, y: f64, z: f64) -> f64 {
        let coords = [x, y, z];
        let value = self.table.find(&coords[..self.table.order()]);
        ctx.apply(value)
    }
}

#[derive(Clone, Debug)]
pub struct CheckTableVariant {
    model: CheckTableModel,
}

impl CheckTableVariant {
    pub fn new(model: CheckTableModel) -> Self {
        CheckTableVariant { model }
    }
}

impl FindValue for CheckTableVariant {
    fn find_value(&self, ctx: ScaleContext, x: f64, y: f64, z: f64) -> f64 {
        let table = self.model.table();
        let coords = [x, y, z];
        ctx.apply(table.find(&coords[..table.order()]))
    }
}

impl FindValue for OutputWaveform {
    /// `x` = input slew, `y` = output cap, `z` = time.
    fn find_value(&self, _ctx: ScaleContext, x: f64, y: f64, z: f64) -> f64 {
        self.current(x, y, z).unwrap_or(0.0)
    }
}

#[derive(Clone, Debug)]
pub struct ReceiverCapacitanceModel {
    table: Table,
}

impl ReceiverCapacitanceModel {
    pub fn new(table: Table) -> Self {
        ReceiverCapacitanceModel { table }
    }
}

impl FindValue for ReceiverCapacitanceModel {
    fn find_value(&self, ctx: ScaleContext, x: f64, y: f64, z: f64) -> f64 {
        let coords = [x, y, z];
        ctx.apply(self.table.find(&coords[..self.table.order()]))
    }
}

#[enum_dispatch(FindValue)]
#[derive(Clone, Debug)]
pub enum TimingModel {
    GateLinear(GateLinearModel),
    CheckLinear(CheckLinearModel),
    GateTable(GateTableVariant),
    CheckTable(CheckTableVariant),
    OutputWaveforms(OutputWaveform),
    ReceiverCapacitance(ReceiverCapacitanceModel),
}

// GateTableModel itself is not a single-table `FindValue` target: a builder
// picks the relevant table off it (cell_delay/cell_slew/sigma) and wraps it
// in a `GateTableVariant` before it enters a `TimingModel`. This keeps the
// dispatch surface uniform (one table per variant, one pure lookup) even
// though the liberty-facing type aggregates several tables per arc.
pub fn gate_table_delay_variant(model: &GateTableModel, rf: RiseFall) -> Option<TimingModel> {
    model.cell_delay(rf).cloned().map(|t| TimingModel::GateTable(GateTableVariant::new(t)))
}

pub fn gate_table_slew_variant(model: &GateTableModel, rf: RiseFall) -> Option<TimingModel> {
    model.cell_slew(rf).cloned().map(|t| TimingModel::GateTable(GateTableVariant::new(t)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::axis::TableAxisVariable;
    use crate::table::TableAxis;

    fn no_scale() -> ScaleContext<'static> {
        ScaleContext {
            pvt: Pvt::default(),
            scale_factors: None,
            scale_factor_type: ScaleFactorType::Cell,
            rise_fall: None,
        }
    }

    #[test]
    fn gate_linear_dispatch() {
        let m: TimingModel = GateLinearModel { intrinsic: 1.0, resistance: 2.0 }.into();
        assert_eq!(m.find_value(no_scale(), 3.0, 0.0, 0.0), 7.0);
    }

    #[test]
    fn gate_table_dispatch_applies_scale() {
        let axis = TableAxis::new(TableAxisVariable::TotalOutputNetCapacitance, vec![0.0, 1.0]);
        let table = Table::new(vec![axis], vec![10.0, 20.0]);
        let m: TimingModel = GateTableVariant::new(table).into();
        let mut sf = ScaleFactors::new("slow");
        sf.set_scale(ScaleFactorType::Cell, None, 1.0, 0.0, 0.0);
        let ctx = ScaleContext {
            pvt: Pvt { process: 0.1, voltage: 0.0, temperature: 0.0 },
            scale_factors: Some(&sf),
            scale_factor_type: ScaleFactorType::Cell,
            rise_fall: None,
        };
        let value = m.find_value(ctx, 0.5, 0.0, 0.0);
        assert!((value - 15.0 * 1.1).abs() < 1e-9);
    }

    #[test]
    fn output_waveform_dispatch() {
        use crate::table::output_waveform::WaveformVector;
        let wf = OutputWaveform::from_vectors(vec![WaveformVector {
            input_slew: 0.1,
            output_cap: 1.0,
            time_current: Table::scalar(4.0),
        }])
        .unwrap();
        let m: TimingModel = wf.into();
        assert_eq!(m.find_value(no_scale(), 0.1, 1.0, 0.0), 4.0);
    }
}
