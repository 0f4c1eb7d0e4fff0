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

    table::axis.rs

    Table axis variables and the sorted-float sequence each axis is bound to,
    with bracketing-index lookup (SPEC_FULL §4.C).

*/

#![allow(dead_code)]

use strum_macros::{Display, EnumIter, EnumString};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TableAxisVariable {
    InputNetTransition,
    TotalOutputNetCapacitance,
    OutputPinTransition,
    ConnectDelay,
    ConstrainedPinTransition,
    RelatedPinTransition,
    RelatedOutTotalOutputNetCapacitance,
    NormalizedVoltage,
    Time,
}

/// One axis of a table: the quantity it's indexed by, and the sorted sample
/// points along it.
#[derive(Clone, Debug, PartialEq)]
pub struct TableAxis {
    variable: TableAxisVariable,
    values: Vec<f64>,
}

impl TableAxis {
    /// `values` must already be sorted ascending; the table reader is
    /// responsible for that (a front-end concern), this type just trusts it.
    pub fn new(variable: TableAxisVariable, values: Vec<f64>) -> Self {
        debug_assert!(values.windows(2).all(|w| w[0] <= w[1]), "axis values must be sorted");
        TableAxis { variable, values }
    }

    pub fn variable(&self) -> TableAxisVariable {
        self.variable
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Locates the bracketing index pair `(lo, hi)` for `x` via binary search,
    /// plus the interpolation fraction in `[0, 1]` to apply between them.
    /// Out-of-range `x` clamps to the nearest endpoint sample (fraction `0.0`
    /// below the first sample, `1.0` above the last), per §4.C — this is a
    /// flat clamp, not extrapolation past the axis's sampled range.
    pub fn bracket(&self, x: f64) -> (usize, usize, f64) {
        let n = self.values.len();
        if n == 1 {
            return (0, 0, 0.0);
        }
        match self.values.binary_search_by(|v| v.partial_cmp(&x).unwrap()) {
            Ok(i) => {
                let hi = if i + 1 < n { i + 1 } else { i };
                let lo = if hi == i { i.saturating_sub(1) } else { i };
                if lo == hi {
                    (lo, hi, 0.0)
                } else {
                    (lo, hi, (x - self.values[lo]) / (self.values[hi] - self.values[lo]))
                }
            }
            Err(0) => (0, 1, 0.0),
            Err(i) if i >= n => (n - 2, n - 1, 1.0),
            Err(i) => {
                let (lo, hi) = (i - 1, i);
                (lo, hi, (x - self.values[lo]) / (self.values[hi] - self.values[lo]))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_interior_point() {
        let axis = TableAxis::new(TableAxisVariable::InputNetTransition, vec![0.0, 1.0, 2.0, 4.0]);
        let (lo, hi, frac) = axis.bracket(3.0);
        assert_eq!((lo, hi), (2, 3));
        assert!((frac - 0.5).abs() < 1e-12);
    }

    #[test]
    fn clamps_below_range() {
        let axis = TableAxis::new(TableAxisVariable::InputNetTransition, vec![1.0, 2.0, 4.0]);
        let (lo, hi, frac) = axis.bracket(-1.0);
        assert_eq!((lo, hi), (0, 1));
        assert_eq!(frac, 0.0);
    }

    #[test]
    fn clamps_above_range() {
        let axis = TableAxis::new(TableAxisVariable::InputNetTransition, vec![1.0, 2.0, 4.0]);
        let (lo, hi, frac) = axis.bracket(8.0);
        assert_eq!((lo, hi), (1, 2));
        assert_eq!(frac, 1.0);
    }

    #[test]
    fn single_sample_axis_is_constant() {
        let axis = TableAxis::new(TableAxisVariable::Time, vec![5.0]);
        assert_eq!(axis.bracket(100.0), (0, 0, 0.0));
    }
}
