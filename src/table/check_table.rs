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

    table::check_table.rs

    CheckTableModel: the table behind a setup/hold/recovery/removal/nochange/
    skew timing check (SPEC_FULL §4.C), indexed by constrained- and
    related-pin slew plus an optional third axis.

*/

#![allow(dead_code)]

use super::axis::TableAxisVariable;
use super::{Table, TableAxis};

#[derive(Debug)]
pub enum CheckTableAxesError {
    MissingRequiredAxis,
    UnsupportedThirdAxis,
}

/// Validates that `axes` starts with
/// `{constrained_pin_transition, related_pin_transition}` (in either order)
/// and has at most one further axis.
pub fn check_axes(axes: &[TableAxis]) -> Result<(), CheckTableAxesError> {
    if axes.len() < 2 {
        return Err(CheckTableAxesError::MissingRequiredAxis);
    }
    let vars: Vec<TableAxisVariable> = axes.iter().map(|a| a.variable()).collect();
    let has_constrained = vars.contains(&TableAxisVariable::ConstrainedPinTransition);
    let has_related = vars.contains(&TableAxisVariable::RelatedPinTransition);
    if !(has_constrained && has_related) {
        return Err(CheckTableAxesError::MissingRequiredAxis);
    }
    if axes.len() > 3 {
        return Err(CheckTableAxesError::UnsupportedThirdAxis);
    }
    Ok(())
}

#[derive(Clone, Debug)]
pub struct CheckTableModel {
    table: Table,
}

impl CheckTableModel {
    pub fn new(table: Table) -> Result<Self, CheckTableAxesError> {
        check_axes(table.axes())?;
        Ok(CheckTableModel { table })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(v: TableAxisVariable) -> TableAxis {
        TableAxis::new(v, vec![0.0, 1.0])
    }

    #[test]
    fn two_required_axes_accepted_either_order() {
        assert!(check_axes(&[
            axis(TableAxisVariable::ConstrainedPinTransition),
            axis(TableAxisVariable::RelatedPinTransition)
        ])
        .is_ok());
        assert!(check_axes(&[
            axis(TableAxisVariable::RelatedPinTransition),
            axis(TableAxisVariable::ConstrainedPinTransition)
        ])
        .is_ok());
    }

    #[test]
    fn third_axis_allowed() {
        assert!(check_axes(&[
            axis(TableAxisVariable::ConstrainedPinTransition),
            axis(TableAxisVariable::RelatedPinTransition),
            axis(TableAxisVariable::RelatedOutTotalOutputNetCapacitance),
        ])
        .is_ok());
    }

    #[test]
    fn missing_required_axis_rejected() {
        assert!(check_axes(&[axis(TableAxisVariable::ConstrainedPinTransition)]).is_err());
    }
}
