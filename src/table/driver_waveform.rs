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

    table::driver_waveform.rs

    DriverWaveform: a named (input-net-transition x normalized-voltage) table
    (SPEC_FULL §4.C). A library may declare one with no name to act as the
    default used when a cell doesn't reference one explicitly.

*/

#![allow(dead_code)]

use super::axis::TableAxisVariable;
use super::{Table, TableAxis};

#[derive(Debug)]
pub enum DriverWaveformAxesError {
    WrongAxisCount,
    WrongAxisVariables,
}

pub fn check_axes(axes: &[TableAxis]) -> Result<(), DriverWaveformAxesError> {
    match axes {
        [a, b]
            if a.variable() == TableAxisVariable::InputNetTransition
                && b.variable() == TableAxisVariable::NormalizedVoltage =>
        {
            Ok(())
        }
        [_, _] => Err(DriverWaveformAxesError::WrongAxisVariables),
        _ => Err(DriverWaveformAxesError::WrongAxisCount),
    }
}

#[derive(Clone, Debug)]
pub struct DriverWaveform {
    /// `None` for the library's unnamed default waveform.
    name: Option<String>,
    table: Table,
}

impl DriverWaveform {
    pub fn new(name: Option<String>, table: Table) -> Result<Self, DriverWaveformAxesError> {
        check_axes(table.axes())?;
        Ok(DriverWaveform { name, table })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_default(&self) -> bool {
        self.name.is_none()
    }

    pub fn voltage_at(&self, input_transition: f64, time_fraction: f64) -> f64 {
        self.table.find(&[input_transition, time_fraction])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        let a0 = TableAxis::new(TableAxisVariable::InputNetTransition, vec![0.0, 1.0]);
        let a1 = TableAxis::new(TableAxisVariable::NormalizedVoltage, vec![0.0, 1.0]);
        Table::new(vec![a0, a1], vec![0.0, 1.0, 1.0, 2.0])
    }

    #[test]
    fn named_and_default_both_valid() {
        assert!(DriverWaveform::new(Some("typ".into()), table()).is_ok());
        assert!(DriverWaveform::new(None, table()).is_ok());
    }

    #[test]
    fn wrong_axis_variables_rejected() {
        let a0 = TableAxis::new(TableAxisVariable::TotalOutputNetCapacitance, vec![0.0, 1.0]);
        let a1 = TableAxis::new(TableAxisVariable::NormalizedVoltage, vec![0.0, 1.0]);
        let bad = Table::new(vec![a0, a1], vec![0.0, 1.0, 1.0, 2.0]);
        assert!(DriverWaveform::new(None, bad).is_err());
    }
}
