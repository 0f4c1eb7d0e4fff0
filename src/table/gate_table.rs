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

    table::gate_table.rs

    GateTableModel: the delay/slew (and sigma-variant) tables attached to a
    timing arc, plus the axis-shape validation every gate table must satisfy
    (SPEC_FULL §4.C).

*/

#![allow(dead_code)]

use super::axis::TableAxisVariable;
use super::{Table, TableAxis};
use crate::units::{EarlyLate, RiseFall};

#[derive(Debug)]
pub enum GateTableAxesError {
    /// More than two axes, or an axis combination other than the ones
    /// `checkAxes` admits (scalar, 1D slew, 1D cap, or 2D slew×cap in either
    /// order).
    UnsupportedShape,
}

/// Validates that `axes` is one of the shapes a gate table is allowed to
/// have: 0D, 1D on either `total_output_net_capacitance` or
/// `input_net_transition`/`output_pin_transition`, or 2D on those two in
/// either order.
pub fn check_axes(axes: &[TableAxis]) -> Result<(), GateTableAxesError> {
    let is_slew_var = |v: TableAxisVariable| {
        matches!(v, TableAxisVariable::InputNetTransition | TableAxisVariable::OutputPinTransition)
    };
    let is_cap_var = |v: TableAxisVariable| v == TableAxisVariable::TotalOutputNetCapacitance;

    match axes {
        [] => Ok(()),
        [a] if is_slew_var(a.variable()) || is_cap_var(a.variable()) => Ok(()),
        [a, b]
            if (is_slew_var(a.variable()) && is_cap_var(b.variable()))
                || (is_cap_var(a.variable()) && is_slew_var(b.variable())) =>
        {
            Ok(())
        }
        _ => Err(GateTableAxesError::UnsupportedShape),
    }
}

/// The delay/slew table family attached to one timing arc (SPEC_FULL §4.C):
/// a cell-delay table, a cell-slew table, and four delay/slew sigma tables
/// indexed by (rise/fall, early/late), all optional — a liberty cell need
/// not declare every variant.
#[derive(Clone, Debug, Default)]
pub struct GateTableModel {
    cell_delay: [Option<Table>; 2],
    cell_slew: [Option<Table>; 2],
    delay_sigma: [[Option<Table>; 2]; 2],
    slew_sigma: [[Option<Table>; 2]; 2],
    receiver_capacitance: Option<Table>,
    output_waveform: Option<usize>,
}

impl GateTableModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cell_delay(&mut self, rf: RiseFall, table: Table) -> Result<(), GateTableAxesError> {
        check_axes(table.axes())?;
        self.cell_delay[rf.index()] = Some(table);
        Ok(())
    }

    pub fn cell_delay(&self, rf: RiseFall) -> Option<&Table> {
        self.cell_delay[rf.index()].as_ref()
    }

    pub fn set_cell_slew(&mut self, rf: RiseFall, table: Table) -> Result<(), GateTableAxesError> {
        check_axes(table.axes())?;
        self.cell_slew[rf.index()] = Some(table);
        Ok(())
    }

    pub fn cell_slew(&self, rf: RiseFall) -> Option<&Table> {
        self.cell_slew[rf.index()].as_ref()
    }

    pub fn set_delay_sigma(&mut self, rf: RiseFall, el: EarlyLate, table: Table) -> Result<(), GateTableAxesError> {
        check_axes(table.axes())?;
        self.delay_sigma[rf.index()][el.index()] = Some(table);
        Ok(())
    }

    pub fn delay_sigma(&self, rf: RiseFall, el: EarlyLate) -> Option<&Table> {
        self.delay_sigma[rf.index()][el.index()].as_ref()
    }

    pub fn set_slew_sigma(&mut self, rf: RiseFall, el: EarlyLate, table: Table) -> Result<(), GateTableAxesError> {
        check_axes(table.axes())?;
        self.slew_sigma[rf.index()][el.index()] = Some(table);
        Ok(())
    }

    pub fn slew_sigma(&self, rf: RiseFall, el: EarlyLate) -> Option<&Table> {
        self.slew_sigma[rf.index()][el.index()].as_ref()
    }

    pub fn set_receiver_capacitance(&mut self, table: Table) -> Result<(), GateTableAxesError> {
        check_axes(table.axes())?;
        self.receiver_capacitance = Some(table);
        Ok(())
    }

    pub fn receiver_capacitance(&self) -> Option<&Table> {
        self.receiver_capacitance.as_ref()
    }

    /// Index into the cell's output-waveform table set (SPEC_FULL §4.C), if
    /// this arc declares one.
    pub fn output_waveform(&self) -> Option<usize> {
        self.output_waveform
    }

    pub fn set_output_waveform(&mut self, idx: usize) {
        self.output_waveform = Some(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableAxisVariable;

    fn axis(v: TableAxisVariable) -> TableAxis {
        TableAxis::new(v, vec![0.0, 1.0])
    }

    #[test]
    fn scalar_and_1d_and_2d_accepted() {
        assert!(check_axes(&[]).is_ok());
        assert!(check_axes(&[axis(TableAxisVariable::TotalOutputNetCapacitance)]).is_ok());
        assert!(check_axes(&[axis(TableAxisVariable::InputNetTransition)]).is_ok());
        assert!(check_axes(&[
            axis(TableAxisVariable::InputNetTransition),
            axis(TableAxisVariable::TotalOutputNetCapacitance)
        ])
        .is_ok());
        assert!(check_axes(&[
            axis(TableAxisVariable::TotalOutputNetCapacitance),
            axis(TableAxisVariable::InputNetTransition)
        ])
        .is_ok());
    }

    #[test]
    fn unsupported_shape_rejected() {
        assert!(check_axes(&[axis(TableAxisVariable::Time)]).is_err());
        assert!(check_axes(&[
            axis(TableAxisVariable::InputNetTransition),
            axis(TableAxisVariable::InputNetTransition)
        ])
        .is_err());
    }

    #[test]
    fn set_cell_delay_round_trips() {
        let mut m = GateTableModel::new();
        let t = Table::new(vec![axis(TableAxisVariable::TotalOutputNetCapacitance)], vec![1.0, 2.0]);
        m.set_cell_delay(RiseFall::Rise, t).unwrap();
        assert!(m.cell_delay(RiseFall::Rise).is_some());
        assert!(m.cell_delay(RiseFall::Fall).is_none());
    }
}
