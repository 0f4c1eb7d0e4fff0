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

    liberty::sequential.rs

    Sequential: a cell's `ff`/`latch` group (SPEC_FULL §3) — clock/enable and
    data expressions, the internal state ports, and the optional set/clear
    expressions and their "what happens when both fire" resolution.

*/

#![allow(dead_code)]

use crate::func_expr::FuncExprId;

use super::port::PortId;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SequentialKind {
    Register,
    Latch,
}

/// What the internal state does when both `clear` and `preset` are asserted
/// together, per the liberty `clear_preset_var1`/`var2` attributes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ClearPresetOutput {
    #[default]
    Low,
    High,
    Last,
    X,
}

#[derive(Clone, Debug)]
pub struct Sequential {
    kind: SequentialKind,
    clocked_on: Option<FuncExprId>,
    data_in: Option<FuncExprId>,
    clear: Option<FuncExprId>,
    preset: Option<FuncExprId>,
    clear_preset_out: ClearPresetOutput,
    clear_preset_out_inv: ClearPresetOutput,
    /// Internal state ports this sequential drives (`IQ`/`IQN`-style).
    output: Option<PortId>,
    output_inv: Option<PortId>,
}

impl Sequential {
    pub fn new(kind: SequentialKind) -> Self {
        Sequential {
            kind,
            clocked_on: None,
            data_in: None,
            clear: None,
            preset: None,
            clear_preset_out: ClearPresetOutput::default(),
            clear_preset_out_inv: ClearPresetOutput::default(),
            output: None,
            output_inv: None,
        }
    }

    pub fn kind(&self) -> SequentialKind {
        self.kind
    }

    pub fn clocked_on(&self) -> Option<FuncExprId> {
        self.clocked_on
    }

    pub fn set_clocked_on(&mut self, expr: FuncExprId) {
        self.clocked_on = Some(expr);
    }

    pub fn data_in(&self) -> Option<FuncExprId> {
        self.data_in
    }

    pub fn set_data_in(&mut self, expr: FuncExprId) {
        self.data_in = Some(expr);
    }

    pub fn clear(&self) -> Option<FuncExprId> {
        self.clear
    }

    pub fn set_clear(&mut self, expr: FuncExprId) {
        self.clear = Some(expr);
    }

    pub fn preset(&self) -> Option<FuncExprId> {
        self.preset
    }

    pub fn set_preset(&mut self, expr: FuncExprId) {
        self.preset = Some(expr);
    }

    pub fn clear_preset_out(&self) -> ClearPresetOutput {
        self.clear_preset_out
    }

    pub fn set_clear_preset_out(&mut self, value: ClearPresetOutput) {
        self.clear_preset_out = value;
    }

    pub fn clear_preset_out_inv(&self) -> ClearPresetOutput {
        self.clear_preset_out_inv
    }

    pub fn set_clear_preset_out_inv(&mut self, value: ClearPresetOutput) {
        self.clear_preset_out_inv = value;
    }

    pub fn output(&self) -> Option<PortId> {
        self.output
    }

    pub fn set_output(&mut self, port: PortId) {
        self.output = Some(port);
    }

    pub fn output_inv(&self) -> Option<PortId> {
        self.output_inv
    }

    pub fn set_output_inv(&mut self, port: PortId) {
        self.output_inv = Some(port);
    }

    /// Element-wise equivalence used by equivalent-cell discovery
    /// (SPEC_FULL §4.D.157): two sequentials match iff every structural
    /// field matches; function-expression fields are compared with the
    /// caller-supplied `equiv` (from the owning function-expression arena)
    /// rather than raw id equality.
    pub fn equiv(&self, other: &Sequential, expr_equiv: impl Fn(FuncExprId, FuncExprId) -> bool) -> bool {
        if self.kind != other.kind
            || self.clear_preset_out != other.clear_preset_out
            || self.clear_preset_out_inv != other.clear_preset_out_inv
        {
            return false;
        }
        let opt_equiv = |a: Option<FuncExprId>, b: Option<FuncExprId>| match (a, b) {
            (Some(x), Some(y)) => expr_equiv(x, y),
            (None, None) => true,
            _ => false,
        };
        opt_equiv(self.clocked_on, other.clocked_on)
            && opt_equiv(self.data_in, other.data_in)
            && opt_equiv(self.clear, other.clear)
            && opt_equiv(self.preset, other.preset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equiv_requires_matching_kind() {
        let a = Sequential::new(SequentialKind::Register);
        let b = Sequential::new(SequentialKind::Latch);
        assert!(!a.equiv(&b, |_, _| true));
    }

    #[test]
    fn equiv_with_no_optional_fields_set() {
        let a = Sequential::new(SequentialKind::Register);
        let b = Sequential::new(SequentialKind::Register);
        assert!(a.equiv(&b, |_, _| false));
    }
}
