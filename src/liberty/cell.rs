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

    liberty::cell.rs

    LibertyCell: ports, PG-ports, sequentials, an optional statetable, timing
    arc sets (with from/to secondary indices), and the arc-set dedup / latch
    inference / preset-clear rewrite passes the builder runs after parsing
    (SPEC_FULL §4.D).

    Each cell owns its own function-expression arena: port functions and
    `when` expressions never cross a cell boundary while parsing, only while
    *comparing* two cells during equivalent-cell discovery, which is why
    `func_expr::FuncExprArena::equiv_cross` exists instead of requiring a
    library-wide shared arena.

*/

#![allow(dead_code)]

use indexmap::IndexMap;
use regex::Regex;
use std::collections::HashMap;

use crate::func_expr::{FuncExprArena, FuncExprId};
use crate::storage::ObjectTable;

use super::port::{LibertyPort, PgPin, PortDirection, PortId};
use super::power::LeakagePower;
use super::sequential::Sequential;
use super::statetable::Statetable;
use super::timing_arc::{ArcSetKey, TimingArcSet, TimingRole};

#[derive(Default)]
pub struct LibertyCell {
    name: String,
    ports: ObjectTable<LibertyPort>,
    port_by_name: IndexMap<String, PortId>,
    pg_pins: Vec<PgPin>,
    sequentials: Vec<Sequential>,
    statetable: Option<Statetable>,
    func_exprs: FuncExprArena<PortId>,

    arc_sets: Vec<TimingArcSet>,
    /// `ArcSetKey -> index into arc_sets`; the later `add_arc_set` for a
    /// given key replaces the stored index in place so the later definition
    /// wins (SPEC_FULL §4.D / invariant 6), never erroring.
    arc_set_by_key: IndexMap<ArcSetKey, usize>,
    arc_set_from: HashMap<PortId, Vec<usize>>,
    arc_set_to: HashMap<PortId, Vec<usize>>,
    arc_set_from_to: HashMap<(PortId, PortId), Vec<usize>>,

    dont_use: bool,
    is_test_cell: bool,
    is_macro: bool,
    area: Option<f64>,
    leakage_power: Vec<LeakagePower>,
    /// Operating-condition name -> scaled variant cell name, per
    /// `addScaledCell` (SPEC_FULL §4.D); the scaled `LibertyCell` itself
    /// lives in the owning `Library`'s cell table.
    scaled_cells: IndexMap<String, String>,
}

impl LibertyCell {
    pub fn new(name: impl Into<String>) -> Self {
        LibertyCell { name: name.into(), ..Default::default() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ---- ports --------------------------------------------------------------

    pub fn make_port(&mut self, name: impl Into<String>, direction: PortDirection) -> PortId {
        let name = name.into();
        let obj_id = self.ports.make().expect("cell port table exceeded capacity");
        let port = LibertyPort::new(name.clone(), direction);
        *self.ports.get_mut(obj_id).unwrap() = port;
        let id = PortId(obj_id);
        self.port_by_name.insert(name, id);
        id
    }

    pub fn port(&self, id: PortId) -> Option<&LibertyPort> {
        self.ports.get(id.0)
    }

    pub fn port_mut(&mut self, id: PortId) -> Option<&mut LibertyPort> {
        self.ports.get_mut(id.0)
    }

    pub fn find_port(&self, name: &str) -> Option<PortId> {
        self.port_by_name.get(name).copied()
    }

    /// Glob-style (`*`/`?`) pattern match over port names, per
    /// `findLibertyPortsMatching` (SPEC_FULL §4.D).
    pub fn find_ports_matching(&self, pattern: &str) -> Vec<PortId> {
        let regex_src = format!("^{}$", regex_escape_glob(pattern));
        let re = match Regex::new(&regex_src) {
            Ok(re) => re,
            Err(_) => return Vec::new(),
        };
        self.port_by_name
            .iter()
            .filter(|(name, _)| re.is_match(name))
            .map(|(_, id)| *id)
            .collect()
    }

    /// Ports in declaration order (bus ports, not their expanded bits).
    pub fn ports(&self) -> impl Iterator<Item = PortId> + '_ {
        self.port_by_name.values().copied()
    }

    /// Every scalar port plus every bit of every bus port, in declaration
    /// order (`findLibertyPortsMatching`'s bit-expanding sibling per §4.D).
    pub fn port_bits(&self) -> impl Iterator<Item = PortId> + '_ {
        self.port_by_name.values().copied().flat_map(move |id| match self.port(id).map(|p| p.shape()) {
            Some(super::port::PortShape::Bus { bits, .. }) if !bits.is_empty() => bits.clone(),
            _ => vec![id],
        })
    }

    pub fn pg_pins(&self) -> &[PgPin] {
        &self.pg_pins
    }

    pub fn push_pg_pin(&mut self, pin: PgPin) {
        self.pg_pins.push(pin);
    }

    // ---- function expressions ------------------------------------------------

    pub fn func_exprs(&self) -> &FuncExprArena<PortId> {
        &self.func_exprs
    }

    pub fn func_exprs_mut(&mut self) -> &mut FuncExprArena<PortId> {
        &mut self.func_exprs
    }

    // ---- sequentials / statetable ---------------------------------------------

    pub fn sequentials(&self) -> &[Sequential] {
        &self.sequentials
    }

    pub fn push_sequential(&mut self, seq: Sequential) {
        self.sequentials.push(seq);
    }

    pub fn statetable(&self) -> Option<&Statetable> {
        self.statetable.as_ref()
    }

    pub fn set_statetable(&mut self, table: Statetable) {
        self.statetable = Some(table);
    }

    // ---- timing arc sets ------------------------------------------------------

    /// Inserts or replaces the arc set for `key` (SPEC_FULL §4.D dedup: the
    /// later definition always wins, silently).
    pub fn add_arc_set(&mut self, key: ArcSetKey, set: TimingArcSet) {
        if let Some(&idx) = self.arc_set_by_key.get(&key) {
            log::debug!(
                "cell '{}': duplicate timing arc set for {:?} -> {:?} (role {:?}); keeping the later definition",
                self.name,
                key.from,
                key.to,
                key.role
            );
            self.arc_sets[idx] = set;
        } else {
            let idx = self.arc_sets.len();
            self.arc_sets.push(set);
            self.arc_set_by_key.insert(key, idx);
        }
    }

    pub fn arc_sets(&self) -> &[TimingArcSet] {
        &self.arc_sets
    }

    /// Rebuilds the `from`/`to`/`(from, to)` secondary indices after all arc
    /// sets have been added (SPEC_FULL invariant 5). Must be called before
    /// `arc_sets_from`/`arc_sets_to`/`find_timing_arc_set` are trusted.
    pub fn finish(&mut self) {
        self.arc_set_from.clear();
        self.arc_set_to.clear();
        self.arc_set_from_to.clear();
        for (idx, set) in self.arc_sets.iter().enumerate() {
            if let Some(from) = set.from() {
                self.arc_set_from.entry(from).or_default().push(idx);
            }
            if let Some(to) = set.to() {
                self.arc_set_to.entry(to).or_default().push(idx);
            }
            if let (Some(from), Some(to)) = (set.from(), set.to()) {
                self.arc_set_from_to.entry((from, to)).or_default().push(idx);
            }
        }
    }

    pub fn arc_sets_from(&self, from: PortId) -> impl Iterator<Item = &TimingArcSet> {
        self.arc_set_from.get(&from).into_iter().flatten().map(move |&i| &self.arc_sets[i])
    }

    pub fn arc_sets_to(&self, to: PortId) -> impl Iterator<Item = &TimingArcSet> {
        self.arc_set_to.get(&to).into_iter().flatten().map(move |&i| &self.arc_sets[i])
    }

    pub fn arc_sets_from_to(&self, from: PortId, to: PortId) -> impl Iterator<Item = &TimingArcSet> {
        self.arc_set_from_to.get(&(from, to)).into_iter().flatten().map(move |&i| &self.arc_sets[i])
    }

    /// First arc set matching `(from, to, role)`; used by EquivCells' full
    /// equivalence test (SPEC_FULL §4.D.157).
    pub fn find_timing_arc_set(&self, from: PortId, to: PortId, role: TimingRole) -> Option<&TimingArcSet> {
        self.arc_sets_from_to(from, to).find(|s| s.role() == role)
    }

    /// Rewrites setup->recovery and hold->removal for any arc set whose `to`
    /// port is also the `from` of a `reg_set_clr` arc (SPEC_FULL §4.D
    /// "Preset/Clear check role rewrite").
    pub fn rewrite_preset_clear_checks(&mut self) {
        let set_clr_froms: std::collections::HashSet<PortId> = self
            .arc_sets
            .iter()
            .filter(|s| s.role() == TimingRole::RegSetClr)
            .filter_map(|s| s.from())
            .collect();
        for set in &mut self.arc_sets {
            if let Some(to) = set.to() {
                if set_clr_froms.contains(&to) {
                    if let Some(new_role) = set.role().rewrite_for_set_clr() {
                        set.set_role(new_role);
                    }
                }
            }
        }
        self.finish();
    }

    /// Latch-enable inference (SPEC_FULL §4.D): for every `latch_en_to_q` arc
    /// set whose `to` (Q) also has a `latch_d_to_q` arc set from some D, find
    /// any `setup` arc set from the enable to D and record the latch-enable
    /// link implicitly by leaving the three arc sets' roles as-is (the
    /// downstream search engine recognizes the triple by role alone; no
    /// extra bookkeeping struct is needed here since `from`/`to`/`role` on
    /// the existing arc sets already encodes the relationship).
    ///
    /// When `infer_latches` is set and the cell has no explicit sequential
    /// but does have a combinational D->Q arc, an EN->Q `reg_clk_to_q` arc
    /// and a setup EN->D arc, promotes the D->Q arc to `latch_d_to_q` and the
    /// EN->Q arc to `latch_en_to_q`.
    pub fn infer_latches(&mut self, infer_latches: bool) {
        if !infer_latches || !self.sequentials.is_empty() {
            return;
        }
        let combinational: Vec<(PortId, PortId)> = self
            .arc_sets
            .iter()
            .filter(|s| s.role() == TimingRole::Combinational)
            .filter_map(|s| Some((s.from()?, s.to()?)))
            .collect();

        let mut promotions = Vec::new();
        for (d, q) in combinational {
            let en_to_q = self
                .arc_sets
                .iter()
                .position(|s| s.role() == TimingRole::RegClkToQ && s.to() == Some(q));
            let Some(en_to_q_idx) = en_to_q else { continue };
            let en = self.arc_sets[en_to_q_idx].from();
            let Some(en) = en else { continue };
            let has_setup = self
                .arc_sets
                .iter()
                .any(|s| s.role() == TimingRole::Setup && s.from() == Some(en) && s.to() == Some(d));
            if has_setup {
                promotions.push(en_to_q_idx);
                let d_to_q_idx = self
                    .arc_sets
                    .iter()
                    .position(|s| s.role() == TimingRole::Combinational && s.from() == Some(d) && s.to() == Some(q));
                if let Some(i) = d_to_q_idx {
                    promotions.push(i);
                }
            }
        }
        for idx in promotions {
            let role = if self.arc_sets[idx].role() == TimingRole::RegClkToQ {
                TimingRole::LatchEnToQ
            } else {
                TimingRole::LatchDtoQ
            };
            self.arc_sets[idx].set_role(role);
        }
        if !promotions.is_empty() {
            self.finish();
        }
    }

    // ---- flags ---------------------------------------------------------------

    pub fn dont_use(&self) -> bool {
        self.dont_use
    }

    pub fn set_dont_use(&mut self, value: bool) {
        self.dont_use = value;
    }

    pub fn is_test_cell(&self) -> bool {
        self.is_test_cell
    }

    pub fn set_is_test_cell(&mut self, value: bool) {
        self.is_test_cell = value;
    }

    pub fn is_macro(&self) -> bool {
        self.is_macro
    }

    pub fn set_is_macro(&mut self, value: bool) {
        self.is_macro = value;
    }

    pub fn area(&self) -> Option<f64> {
        self.area
    }

    pub fn set_area(&mut self, area: f64) {
        self.area = Some(area);
    }

    pub fn leakage_power(&self) -> &[LeakagePower] {
        &self.leakage_power
    }

    pub fn push_leakage_power(&mut self, power: LeakagePower) {
        self.leakage_power.push(power);
    }

    pub fn add_scaled_cell(&mut self, op_cond_name: impl Into<String>, scaled_cell_name: impl Into<String>) {
        self.scaled_cells.insert(op_cond_name.into(), scaled_cell_name.into());
    }

    pub fn scaled_cell(&self, op_cond_name: &str) -> Option<&str> {
        self.scaled_cells.get(op_cond_name).map(String::as_str)
    }

    /// A cell with exactly one non-PG input and one non-PG output whose
    /// output function is `port(in)` (SPEC_FULL §4.D).
    pub fn is_buffer(&self) -> bool {
        self.single_io_function().map(|(_, out_fn)| self.func_exprs.op(out_fn) == crate::func_expr::Op::Port).unwrap_or(false)
    }

    /// As `is_buffer` but the output function is `not(port(in))`.
    pub fn is_inverter(&self) -> bool {
        self.single_io_function().map(|(_, out_fn)| self.func_exprs.op(out_fn) == crate::func_expr::Op::Not).unwrap_or(false)
    }

    fn single_io_function(&self) -> Option<(PortId, FuncExprId)> {
        let inputs: Vec<PortId> = self.ports().filter(|id| self.port(*id).unwrap().direction() == PortDirection::Input).collect();
        let outputs: Vec<PortId> =
            self.ports().filter(|id| self.port(*id).unwrap().direction() == PortDirection::Output).collect();
        if inputs.len() != 1 || outputs.len() != 1 {
            return None;
        }
        let out_port = self.port(outputs[0]).unwrap();
        let func = out_port.function()?;
        Some((inputs[0], func))
    }
}

fn regex_escape_glob(pattern: &str) -> String {
    let mut out = String::new();
    for c in pattern.chars() {
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            '.' | '+' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_port_and_pattern_match() {
        let mut cell = LibertyCell::new("BUF");
        cell.make_port("A", PortDirection::Input);
        cell.make_port("Y", PortDirection::Output);
        assert!(cell.find_port("A").is_some());
        assert!(cell.find_port("Z").is_none());
        assert_eq!(cell.find_ports_matching("?").len(), 2);
        assert_eq!(cell.find_ports_matching("A").len(), 1);
    }

    #[test]
    fn buffer_detection() {
        let mut cell = LibertyCell::new("BUF");
        let a = cell.make_port("A", PortDirection::Input);
        cell.make_port("Y", PortDirection::Output);
        let func = cell.func_exprs_mut().make_port(a);
        cell.port_mut(cell.find_port("Y").unwrap()).unwrap().set_function(func);
        assert!(cell.is_buffer());
        assert!(!cell.is_inverter());
    }

    #[test]
    fn inverter_detection() {
        let mut cell = LibertyCell::new("INV");
        let a = cell.make_port("A", PortDirection::Input);
        cell.make_port("Y", PortDirection::Output);
        let port_expr = cell.func_exprs_mut().make_port(a);
        let not_expr = cell.func_exprs_mut().make_not(port_expr);
        cell.port_mut(cell.find_port("Y").unwrap()).unwrap().set_function(not_expr);
        assert!(cell.is_inverter());
        assert!(!cell.is_buffer());
    }

    #[test]
    fn arc_set_dedup_keeps_later_definition() {
        let mut cell = LibertyCell::new("C");
        let a = cell.make_port("A", PortDirection::Input);
        let y = cell.make_port("Y", PortDirection::Output);
        let key = ArcSetKey { from: Some(a), to: Some(y), role: TimingRole::Combinational, when_class: None, sdf_cond: None, mode: None };
        cell.add_arc_set(key.clone(), TimingArcSet::new(Some(a), Some(y), TimingRole::Combinational));
        let mut second = TimingArcSet::new(Some(a), Some(y), TimingRole::Combinational);
        second.set_disabled_constraint(true);
        cell.add_arc_set(key, second);
        cell.finish();
        assert_eq!(cell.arc_sets().len(), 1);
        assert!(cell.arc_sets()[0].is_disabled_constraint());
    }

    #[test]
    fn from_to_index_after_finish() {
        let mut cell = LibertyCell::new("C");
        let a = cell.make_port("A", PortDirection::Input);
        let y = cell.make_port("Y", PortDirection::Output);
        cell.add_arc_set(
            ArcSetKey { from: Some(a), to: Some(y), role: TimingRole::Combinational, when_class: None, sdf_cond: None, mode: None },
            TimingArcSet::new(Some(a), Some(y), TimingRole::Combinational),
        );
        cell.finish();
        assert_eq!(cell.arc_sets_from_to(a, y).count(), 1);
        assert_eq!(cell.arc_sets_from(a).count(), 1);
        assert_eq!(cell.arc_sets_to(y).count(), 1);
    }
}
