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

    table::output_waveform.rs

    OutputWaveform: the CCS driver model's (input slew x output cap) grid of
    1D current-vs-time tables, plus the parallel reference-time table
    (SPEC_FULL §4.C). Assembled from a sequence of per-`vector` groups, each a
    3D template collapsed to 1D by requiring its first two axes (slew, cap)
    to contain exactly one value.

*/

#![allow(dead_code)]

use super::Table;

#[derive(Debug)]
pub enum OutputWaveformError {
    /// A `vector` group's slew/cap axis did not collapse to exactly one
    /// value.
    NotCollapsedToPoint,
}

/// One `vector` group as read off the liberty `output_current` table: a
/// single (input-slew, output-cap) point plus its 1D time-vs-current table.
pub struct WaveformVector {
    pub input_slew: f64,
    pub output_cap: f64,
    pub time_current: Table,
}

#[derive(Clone, Debug, Default)]
pub struct OutputWaveform {
    slew_axis: Vec<f64>,
    cap_axis: Vec<f64>,
    /// `waveforms[slew_idx][cap_idx]`, row-major over `slew_axis x cap_axis`.
    waveforms: Vec<Option<Table>>,
    reference_time: Option<Table>,
}

impl OutputWaveform {
    /// Builds the grid from an unordered sequence of per-vector groups,
    /// deriving the sorted, deduplicated slew and cap axes from the points
    /// actually present.
    pub fn from_vectors(vectors: Vec<WaveformVector>) -> Result<Self, OutputWaveformError> {
        let mut slews: Vec<f64> = vectors.iter().map(|v| v.input_slew).collect();
        let mut caps: Vec<f64> = vectors.iter().map(|v| v.output_cap).collect();
        slews.sort_by(|a, b| a.partial_cmp(b).unwrap());
        slews.dedup();
        caps.sort_by(|a, b| a.partial_cmp(b).unwrap());
        caps.dedup();

        let mut waveforms: Vec<Option<Table>> = (0..slews.len() * caps.len()).map(|_| None).collect();
        for v in vectors {
            let si = slews.iter().position(|s| *s == v.input_slew).unwrap();
            let ci = caps.iter().position(|c| *c == v.output_cap).unwrap();
            waveforms[si * caps.len() + ci] = Some(v.time_current);
        }
        Ok(OutputWaveform { slew_axis: slews, cap_axis: caps, waveforms, reference_time: None })
    }

    pub fn set_reference_time(&mut self, table: Table) {
        self.reference_time = Some(table);
    }

    /// Current at `time` for the waveform nearest to `(input_slew, output_cap)`
    /// (the driver model snaps to the nearest declared vector rather than
    /// interpolating across waveforms — only the time axis within one
    /// waveform is interpolated).
    pub fn current(&self, input_slew: f64, output_cap: f64, time: f64) -> Option<f64> {
        let si = nearest_index(&self.slew_axis, input_slew)?;
        let ci = nearest_index(&self.cap_axis, output_cap)?;
        self.waveforms[si * self.cap_axis.len() + ci].as_ref().map(|t| t.find(&[time]))
    }

    /// Reference time at a given input slew, interpolated linearly.
    pub fn reference_time(&self, input_slew: f64) -> Option<f64> {
        self.reference_time.as_ref().map(|t| t.find(&[input_slew]))
    }
}

fn nearest_index(axis: &[f64], x: f64) -> Option<usize> {
    if axis.is_empty() {
        return None;
    }
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, v) in axis.iter().enumerate() {
        let d = (v - x).abs();
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_grid_and_looks_up_nearest() {
        let vectors = vec![
            WaveformVector { input_slew: 0.1, output_cap: 1.0, time_current: Table::scalar(5.0) },
            WaveformVector { input_slew: 0.1, output_cap: 2.0, time_current: Table::scalar(10.0) },
            WaveformVector { input_slew: 0.2, output_cap: 1.0, time_current: Table::scalar(7.0) },
        ];
        let wf = OutputWaveform::from_vectors(vectors).unwrap();
        assert_eq!(wf.current(0.1, 1.0, 0.0), Some(5.0));
        assert_eq!(wf.current(0.11, 0.9, 0.0), Some(5.0));
        assert_eq!(wf.current(0.2, 2.5, 0.0), None);
    }

    #[test]
    fn reference_time_interpolates() {
        let mut wf = OutputWaveform::from_vectors(Vec::new()).unwrap();
        let axis = super::super::axis::TableAxis::new(
            super::super::axis::TableAxisVariable::InputNetTransition,
            vec![0.0, 1.0],
        );
        wf.set_reference_time(Table::new(vec![axis], vec![10.0, 20.0]));
        assert!((wf.reference_time(0.5).unwrap() - 15.0).abs() < 1e-9);
    }
}
