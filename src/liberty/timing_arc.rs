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

    liberty::timing_arc.rs

    TimingRole, TimingArc and TimingArcSet (SPEC_FULL §4.D, §4.F): one arc set
    per (from, to, role, when, sdf_cond, mode) group, holding the rise/fall
    arcs the builder emitted for it.

*/

#![allow(dead_code)]

use crate::func_expr::FuncExprId;
use crate::table::model::TimingModel;
use crate::units::RiseFall;

use super::port::PortId;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimingRole {
    Combinational,
    Setup,
    Hold,
    Recovery,
    Removal,
    RegClkToQ,
    LatchEnToQ,
    LatchDtoQ,
    RegSetClr,
    TristateEnable,
    TristateDisable,
    NonSeqSetup,
    NonSeqHold,
    Skew,
    MinPulseWidth,
    ClockTreePathMin,
    ClockTreePathMax,
}

impl TimingRole {
    /// Check roles (as opposed to propagation roles) participate in setup/
    /// hold/recovery/removal-style constraint evaluation rather than delay
    /// propagation.
    pub fn is_check(self) -> bool {
        matches!(
            self,
            TimingRole::Setup
                | TimingRole::Hold
                | TimingRole::Recovery
                | TimingRole::Removal
                | TimingRole::NonSeqSetup
                | TimingRole::NonSeqHold
                | TimingRole::Skew
                | TimingRole::MinPulseWidth
        )
    }

    /// Setup rewrites to recovery, hold to removal, when the `from` port is
    /// later found to be a set/clear pin (SPEC_FULL §4.D "Preset/Clear check
    /// role rewrite").
    pub fn rewrite_for_set_clr(self) -> Option<TimingRole> {
        match self {
            TimingRole::Setup => Some(TimingRole::Recovery),
            TimingRole::Hold => Some(TimingRole::Removal),
            _ => None,
        }
    }
}

/// One rise/fall-to-rise/fall transition within an arc set, carrying the
/// timing model(s) that produce its delay (and, for check roles, its
/// constraint margin).
#[derive(Clone, Debug)]
pub struct TimingArc {
    pub from_rf: RiseFall,
    pub to_rf: RiseFall,
    pub delay: Option<TimingModel>,
    pub slew: Option<TimingModel>,
}

impl TimingArc {
    pub fn new(from_rf: RiseFall, to_rf: RiseFall) -> Self {
        TimingArc { from_rf, to_rf, delay: None, slew: None }
    }
}

/// A dedup key independent of the arcs actually populated: two `timing()`
/// groups that would emit different rise/fall transitions but share this key
/// are still the same arc set for collapsing purposes (SPEC_FULL §4.D).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArcSetKey {
    pub from: Option<PortId>,
    pub to: Option<PortId>,
    pub role: TimingRole,
    /// Equivalence-class id of the `when` expression, not the raw id — two
    /// structurally-equivalent `when` expressions collapse to the same key
    /// even if they were parsed into different `FuncExprId`s. The builder is
    /// responsible for computing this (it owns the arena `equiv` lives in).
    pub when_class: Option<u64>,
    pub sdf_cond: Option<String>,
    pub mode: Option<String>,
}

#[derive(Clone, Debug)]
pub struct TimingArcSet {
    from: Option<PortId>,
    to: Option<PortId>,
    role: TimingRole,
    when: Option<FuncExprId>,
    sdf_cond: Option<String>,
    mode: Option<String>,
    arcs: Vec<TimingArc>,
    is_disabled_constraint: bool,
}

impl TimingArcSet {
    pub fn new(from: Option<PortId>, to: Option<PortId>, role: TimingRole) -> Self {
        TimingArcSet {
            from,
            to,
            role,
            when: None,
            sdf_cond: None,
            mode: None,
            arcs: Vec::new(),
            is_disabled_constraint: false,
        }
    }

    pub fn from(&self) -> Option<PortId> {
        self.from
    }

    pub fn to(&self) -> Option<PortId> {
        self.to
    }

    pub fn role(&self) -> TimingRole {
        self.role
    }

    pub fn set_role(&mut self, role: TimingRole) {
        self.role = role;
    }

    pub fn when(&self) -> Option<FuncExprId> {
        self.when
    }

    pub fn set_when(&mut self, expr: FuncExprId) {
        self.when = Some(expr);
    }

    pub fn sdf_cond(&self) -> Option<&str> {
        self.sdf_cond.as_deref()
    }

    pub fn set_sdf_cond(&mut self, cond: impl Into<String>) {
        self.sdf_cond = Some(cond.into());
    }

    pub fn mode(&self) -> Option<(&str, &str)> {
        // Stored as "name:value"; split lazily rather than keeping a tuple
        // field, since it's read far less often than it's set.
        self.mode.as_deref().and_then(|m| m.split_once(':'))
    }

    pub fn set_mode(&mut self, name: &str, value: &str) {
        self.mode = Some(format!("{name}:{value}"));
    }

    pub fn arcs(&self) -> &[TimingArc] {
        &self.arcs
    }

    pub fn push_arc(&mut self, arc: TimingArc) {
        self.arcs.push(arc);
    }

    pub fn is_disabled_constraint(&self) -> bool {
        self.is_disabled_constraint
    }

    pub fn set_disabled_constraint(&mut self, value: bool) {
        self.is_disabled_constraint = value;
    }

    pub fn arc(&self, from_rf: RiseFall, to_rf: RiseFall) -> Option<&TimingArc> {
        self.arcs.iter().find(|a| a.from_rf == from_rf && a.to_rf == to_rf)
    }

    /// Structural equivalence between two arc sets' rise/fall arc sequences
    /// (SPEC_FULL §4.D.157's equivalent-cell full-equivalence test): same
    /// count, same (from_rf, to_rf) pairs in the same order. Timing models
    /// are not compared — EquivCells only requires the arc *shape* to match.
    pub fn arcs_equivalent(&self, other: &TimingArcSet) -> bool {
        self.arcs.len() == other.arcs.len()
            && self
                .arcs
                .iter()
                .zip(other.arcs.iter())
                .all(|(a, b)| a.from_rf == b.from_rf && a.to_rf == b.to_rf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_clear_rewrite_targets() {
        assert_eq!(TimingRole::Setup.rewrite_for_set_clr(), Some(TimingRole::Recovery));
        assert_eq!(TimingRole::Hold.rewrite_for_set_clr(), Some(TimingRole::Removal));
        assert_eq!(TimingRole::Combinational.rewrite_for_set_clr(), None);
    }

    #[test]
    fn arc_lookup_by_rise_fall() {
        let mut set = TimingArcSet::new(None, None, TimingRole::Combinational);
        set.push_arc(TimingArc::new(RiseFall::Rise, RiseFall::Rise));
        set.push_arc(TimingArc::new(RiseFall::Fall, RiseFall::Fall));
        assert!(set.arc(RiseFall::Rise, RiseFall::Rise).is_some());
        assert!(set.arc(RiseFall::Rise, RiseFall::Fall).is_none());
    }

    #[test]
    fn arcs_equivalent_ignores_models() {
        let mut a = TimingArcSet::new(None, None, TimingRole::Combinational);
        a.push_arc(TimingArc::new(RiseFall::Rise, RiseFall::Rise));
        let mut b = TimingArcSet::new(None, None, TimingRole::Combinational);
        b.push_arc(TimingArc::new(RiseFall::Rise, RiseFall::Rise));
        assert!(a.arcs_equivalent(&b));
    }
}
