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

    liberty::port.rs

    LibertyPort: scalar or bus ports, their function/tristate-enable
    expressions, per-(rise/fall, min/max) capacitance and resistance, the
    per-port flags the builder and the downstream search engine consult
    (clock/pad/isolation-cell/level-shifter/clock-gate/pll-feedback/
    switch/disabled), and per-port internal-power entries (SPEC_FULL §3,
    §4.D).

    `PortDirection::input()`/`output()`/etc. in the original are addresses of
    static singletons compared by identity; here the direction is just a
    `Copy` enum and equality is structural, which is equivalent for every
    comparison the rest of the crate performs on it (SPEC_FULL §9).

*/

#![allow(dead_code)]

use crate::func_expr::FuncExprId;
use crate::id::ObjectId;
use crate::liberty::power::InternalPower;
use crate::units::{MinMax, RiseFall};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PortId(pub ObjectId);

impl PortId {
    pub const NULL: PortId = PortId(ObjectId::NULL);

    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}

impl PartialOrd for PortId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PortId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.raw().cmp(&other.0.raw())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum PortDirection {
    Input,
    Output,
    Bidirect,
    Internal,
    Tristate,
    Power,
    Ground,
    #[default]
    Unknown,
}

impl PortDirection {
    /// Index used by the equivalent-cell port hash (`name_hash*3 + dir*5`,
    /// SPEC_FULL §4.D.1-2).
    pub fn index(self) -> u64 {
        match self {
            PortDirection::Input => 0,
            PortDirection::Output => 1,
            PortDirection::Bidirect => 2,
            PortDirection::Internal => 3,
            PortDirection::Tristate => 4,
            PortDirection::Power => 5,
            PortDirection::Ground => 6,
            PortDirection::Unknown => 7,
        }
    }

    pub fn is_output_like(self) -> bool {
        matches!(self, PortDirection::Output | PortDirection::Bidirect | PortDirection::Tristate)
    }

    pub fn is_input_like(self) -> bool {
        matches!(self, PortDirection::Input | PortDirection::Bidirect)
    }

    /// A supply-rail direction rather than a signal direction; `PgPin`
    /// records group membership separately, but a port's own `direction`
    /// can independently be declared `power`/`ground` (SPEC_FULL §4.D).
    pub fn is_supply(self) -> bool {
        matches!(self, PortDirection::Power | PortDirection::Ground)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PortShape {
    Scalar,
    /// `from`/`to` preserve declaration order (a bus may count down).
    Bus { from: i32, to: i32, bits: Vec<PortId> },
    Bundle { members: Vec<PortId> },
}

impl Default for PortShape {
    fn default() -> Self {
        PortShape::Scalar
    }
}

impl PortShape {
    pub fn width(&self) -> usize {
        match self {
            PortShape::Scalar => 1,
            PortShape::Bus { from, to, .. } => ((from - to).unsigned_abs() as usize) + 1,
            PortShape::Bundle { members } => members.len(),
        }
    }

    pub fn is_bus(&self) -> bool {
        matches!(self, PortShape::Bus { .. })
    }
}

#[derive(Clone, Debug, Default)]
pub struct LibertyPort {
    name: String,
    direction: PortDirection,
    shape: PortShape,
    /// The port's own bit index within a containing bus (`None` for scalar
    /// ports and for the bus port itself).
    bus_bit_index: Option<i32>,
    function: Option<FuncExprId>,
    tristate_enable: Option<FuncExprId>,
    /// `[rise][fall] x [min][max]`, indexed by `RiseFall::index()`/`MinMax::index()`.
    capacitance: [[Option<f64>; 2]; 2],
    rise_resistance: [Option<f64>; 2],
    fall_resistance: [Option<f64>; 2],
    /// `[rise, fall]` slew limits the downstream search engine checks against.
    max_transition: [Option<f64>; 2],
    min_pulse_width: [Option<f64>; 2],
    /// Optional minimum period, alongside `min_pulse_width` (SPEC_FULL §4.D).
    min_period: Option<f64>,
    is_clock: bool,
    is_reg_clk: bool,
    is_check_clk: bool,
    is_pad: bool,
    is_isolation_cell_data: bool,
    is_isolation_cell_enable: bool,
    level_shifter_data: bool,
    is_clk_gate_clock: bool,
    is_clk_gate_enable: bool,
    is_clk_gate_out: bool,
    is_pll_feedback: bool,
    is_switch: bool,
    is_disabled: bool,
    internal_power: Vec<InternalPower>,
}

impl LibertyPort {
    pub fn new(name: impl Into<String>, direction: PortDirection) -> Self {
        LibertyPort { name: name.into(), direction, ..Default::default() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> PortDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: PortDirection) {
        self.direction = direction;
    }

    pub fn shape(&self) -> &PortShape {
        &self.shape
    }

    pub fn set_shape(&mut self, shape: PortShape) {
        self.shape = shape;
    }

    pub fn is_bus(&self) -> bool {
        self.shape.is_bus()
    }

    pub fn width(&self) -> usize {
        self.shape.width()
    }

    pub fn function(&self) -> Option<FuncExprId> {
        self.function
    }

    pub fn set_function(&mut self, expr: FuncExprId) {
        self.function = Some(expr);
    }

    pub fn tristate_enable(&self) -> Option<FuncExprId> {
        self.tristate_enable
    }

    pub fn set_tristate_enable(&mut self, expr: FuncExprId) {
        self.tristate_enable = Some(expr);
    }

    pub fn capacitance(&self, rf: RiseFall, mm: MinMax) -> Option<f64> {
        self.capacitance[rf.index()][mm.index()]
    }

    pub fn set_capacitance(&mut self, rf: RiseFall, mm: MinMax, cap: f64) {
        self.capacitance[rf.index()][mm.index()] = Some(cap);
    }

    pub fn resistance(&self, rf: RiseFall, mm: MinMax) -> Option<f64> {
        match rf {
            RiseFall::Rise => self.rise_resistance[mm.index()],
            RiseFall::Fall => self.fall_resistance[mm.index()],
        }
    }

    pub fn set_resistance(&mut self, rf: RiseFall, mm: MinMax, ohms: f64) {
        match rf {
            RiseFall::Rise => self.rise_resistance[mm.index()] = Some(ohms),
            RiseFall::Fall => self.fall_resistance[mm.index()] = Some(ohms),
        }
    }

    pub fn max_transition(&self, rf: RiseFall) -> Option<f64> {
        self.max_transition[rf.index()]
    }

    pub fn set_max_transition(&mut self, rf: RiseFall, value: f64) {
        self.max_transition[rf.index()] = Some(value);
    }

    /// `[low, high]` minimum pulse width, from the port-level
    /// `min_pulse_width_low`/`_high` attributes (SPEC_FULL §4.F, the
    /// `min_pulse_width` timing_type row).
    pub fn min_pulse_width(&self, low_high: usize) -> Option<f64> {
        self.min_pulse_width[low_high]
    }

    pub fn set_min_pulse_width(&mut self, low_high: usize, value: f64) {
        self.min_pulse_width[low_high] = Some(value);
    }

    pub fn is_clock(&self) -> bool {
        self.is_clock
    }

    pub fn set_is_clock(&mut self, value: bool) {
        self.is_clock = value;
    }

    pub fn is_reg_clk(&self) -> bool {
        self.is_reg_clk
    }

    pub fn set_is_reg_clk(&mut self, value: bool) {
        self.is_reg_clk = value;
    }

    pub fn is_check_clk(&self) -> bool {
        self.is_check_clk
    }

    pub fn set_is_check_clk(&mut self, value: bool) {
        self.is_check_clk = value;
    }

    pub fn min_period(&self) -> Option<f64> {
        self.min_period
    }

    pub fn set_min_period(&mut self, value: f64) {
        self.min_period = Some(value);
    }

    pub fn is_pad(&self) -> bool {
        self.is_pad
    }

    pub fn set_is_pad(&mut self, value: bool) {
        self.is_pad = value;
    }

    pub fn is_isolation_cell_data(&self) -> bool {
        self.is_isolation_cell_data
    }

    pub fn set_is_isolation_cell_data(&mut self, value: bool) {
        self.is_isolation_cell_data = value;
    }

    pub fn is_isolation_cell_enable(&self) -> bool {
        self.is_isolation_cell_enable
    }

    pub fn set_is_isolation_cell_enable(&mut self, value: bool) {
        self.is_isolation_cell_enable = value;
    }

    pub fn level_shifter_data(&self) -> bool {
        self.level_shifter_data
    }

    pub fn set_level_shifter_data(&mut self, value: bool) {
        self.level_shifter_data = value;
    }

    pub fn is_clk_gate_clock(&self) -> bool {
        self.is_clk_gate_clock
    }

    pub fn set_is_clk_gate_clock(&mut self, value: bool) {
        self.is_clk_gate_clock = value;
    }

    pub fn is_clk_gate_enable(&self) -> bool {
        self.is_clk_gate_enable
    }

    pub fn set_is_clk_gate_enable(&mut self, value: bool) {
        self.is_clk_gate_enable = value;
    }

    pub fn is_clk_gate_out(&self) -> bool {
        self.is_clk_gate_out
    }

    pub fn set_is_clk_gate_out(&mut self, value: bool) {
        self.is_clk_gate_out = value;
    }

    pub fn is_pll_feedback(&self) -> bool {
        self.is_pll_feedback
    }

    pub fn set_is_pll_feedback(&mut self, value: bool) {
        self.is_pll_feedback = value;
    }

    pub fn is_switch(&self) -> bool {
        self.is_switch
    }

    pub fn set_is_switch(&mut self, value: bool) {
        self.is_switch = value;
    }

    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    pub fn set_is_disabled(&mut self, value: bool) {
        self.is_disabled = value;
    }

    pub fn internal_power(&self) -> &[InternalPower] {
        &self.internal_power
    }

    pub fn push_internal_power(&mut self, power: InternalPower) {
        self.internal_power.push(power);
    }

    /// Name-based hash term contributing to the port hash used by
    /// equivalent-cell discovery and by the function-expression dedup hash
    /// (SPEC_FULL §4.B.8, §4.D.1): `name_hash * 3 + direction_index * 5`.
    pub fn equiv_hash_term(&self) -> u64 {
        fxhash::hash64(self.name.as_bytes()).wrapping_mul(3)
            .wrapping_add(self.direction.index().wrapping_mul(5))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct PgPin {
    pub is_ground: bool,
    pub is_power: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_width_is_one() {
        let p = LibertyPort::new("A", PortDirection::Input);
        assert_eq!(p.width(), 1);
        assert!(!p.is_bus());
    }

    #[test]
    fn bus_width_from_msb_lsb() {
        let mut p = LibertyPort::new("BUS", PortDirection::Input);
        p.set_shape(PortShape::Bus { from: 7, to: 0, bits: Vec::new() });
        assert_eq!(p.width(), 8);
        assert!(p.is_bus());
    }

    #[test]
    fn equiv_hash_term_depends_on_name_and_direction() {
        let a = LibertyPort::new("A", PortDirection::Input);
        let b = LibertyPort::new("A", PortDirection::Output);
        assert_ne!(a.equiv_hash_term(), b.equiv_hash_term());
    }
}
