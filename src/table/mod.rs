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

    table/mod.rs

    The table-lookup engine (component C): 0-3 axis tables with interpolating
    lookup, PVT scale factors, and the gate/check/waveform model variants
    built on top of them.

*/

#![allow(dead_code)]

pub mod axis;
pub mod check_table;
pub mod driver_waveform;
pub mod gate_table;
pub mod model;
pub mod output_waveform;
pub mod scale_factor;

pub use axis::{TableAxis, TableAxisVariable};
pub use scale_factor::{Pvt, ScaleFactorType, ScaleFactors};

/// A 0-, 1-, 2- or 3-dimensional lookup table: up to three axes plus a flat,
/// row-major `values` array of size `prod(axis.len())` (1 for a 0D/scalar
/// table).
#[derive(Clone, Debug)]
pub struct Table {
    axes: Vec<TableAxis>,
    values: Vec<f64>,
}

impl Table {
    pub fn scalar(value: f64) -> Self {
        Table { axes: Vec::new(), values: vec![value] }
    }

    pub fn new(axes: Vec<TableAxis>, values: Vec<f64>) -> Self {
        let expected: usize = axes.iter().map(|a| a.len().max(1)).product();
        debug_assert_eq!(values.len(), expected.max(1), "table value count must match product of axis lengths");
        Table { axes, values }
    }

    pub fn axes(&self) -> &[TableAxis] {
        &self.axes
    }

    pub fn order(&self) -> usize {
        self.axes.len()
    }

    /// Interpolated lookup at `coords` (one coordinate per axis, in axis
    /// order). Each axis is bracketed independently (binary search, clamping
    /// at the axis bounds rather than extrapolating past them, §4.C) and the
    /// result is the multilinear blend of the `2^order` corner values.
    pub fn find(&self, coords: &[f64]) -> f64 {
        assert_eq!(coords.len(), self.axes.len(), "coordinate count must match table order");
        match self.axes.len() {
            0 => self.values[0],
            1 => {
                let (lo, hi, frac) = self.axes[0].bracket(coords[0]);
                self.values[lo] + frac * (self.values[hi] - self.values[lo])
            }
            2 => {
                let (lo0, hi0, f0) = self.axes[0].bracket(coords[0]);
                let (lo1, hi1, f1) = self.axes[1].bracket(coords[1]);
                let n1 = self.axes[1].len().max(1);
                let at = |i: usize, j: usize| self.values[i * n1 + j];
                let v00 = at(lo0, lo1);
                let v01 = at(lo0, hi1);
                let v10 = at(hi0, lo1);
                let v11 = at(hi0, hi1);
                let v0 = v00 + f1 * (v01 - v00);
                let v1 = v10 + f1 * (v11 - v10);
                v0 + f0 * (v1 - v0)
            }
            3 => {
                let (lo0, hi0, f0) = self.axes[0].bracket(coords[0]);
                let (lo1, hi1, f1) = self.axes[1].bracket(coords[1]);
                let (lo2, hi2, f2) = self.axes[2].bracket(coords[2]);
                let n1 = self.axes[1].len().max(1);
                let n2 = self.axes[2].len().max(1);
                let at = |i: usize, j: usize, k: usize| self.values[(i * n1 + j) * n2 + k];
                let blend2 = |i: usize| {
                    let v00 = at(i, lo1, lo2);
                    let v01 = at(i, lo1, hi2);
                    let v10 = at(i, hi1, lo2);
                    let v11 = at(i, hi1, hi2);
                    let v0 = v00 + f2 * (v01 - v00);
                    let v1 = v10 + f2 * (v11 - v10);
                    v0 + f1 * (v1 - v0)
                };
                let v_lo = blend2(lo0);
                let v_hi = blend2(hi0);
                v_lo + f0 * (v_hi - v_lo)
            }
            n => panic!("tables support at most 3 axes, got {n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axis::TableAxisVariable;

    #[test]
    fn scalar_table_returns_constant() {
        let t = Table::scalar(3.5);
        assert_eq!(t.find(&[]), 3.5);
    }

    #[test]
    fn one_d_interpolates() {
        let axis = TableAxis::new(TableAxisVariable::InputNetTransition, vec![0.0, 1.0, 2.0]);
        let t = Table::new(vec![axis], vec![10.0, 20.0, 40.0]);
        assert!((t.find(&[0.5]) - 15.0).abs() < 1e-9);
        assert!((t.find(&[1.5]) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn two_d_bilinear() {
        let a0 = TableAxis::new(TableAxisVariable::InputNetTransition, vec![0.0, 1.0]);
        let a1 = TableAxis::new(TableAxisVariable::TotalOutputNetCapacitance, vec![0.0, 1.0]);
        // values at (0,0)=0 (0,1)=1 (1,0)=1 (1,1)=2
        let t = Table::new(vec![a0, a1], vec![0.0, 1.0, 1.0, 2.0]);
        assert!((t.find(&[0.5, 0.5]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn two_d_clamps_beyond_range() {
        let a0 = TableAxis::new(TableAxisVariable::InputNetTransition, vec![0.0, 1.0]);
        let a1 = TableAxis::new(TableAxisVariable::TotalOutputNetCapacitance, vec![0.0, 1.0]);
        let t = Table::new(vec![a0, a1], vec![0.0, 1.0, 1.0, 2.0]);
        assert!((t.find(&[2.0, 2.0]) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn one_d_clamps_beyond_range() {
        let axis = TableAxis::new(TableAxisVariable::InputNetTransition, vec![0.0, 1.0, 2.0]);
        let t = Table::new(vec![axis], vec![10.0, 20.0, 30.0]);
        assert!((t.find(&[0.5]) - 15.0).abs() < 1e-9);
        assert!((t.find(&[5.0]) - 30.0).abs() < 1e-9);
    }
}
