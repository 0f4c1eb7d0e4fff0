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

    builder::equiv_cells.rs

    Equivalent-cell discovery (SPEC_FULL §4.D): a cheap structural hash
    buckets candidates, then a full port/function/sequential/statetable/
    arc-set comparison confirms each bucket, and each surviving class sorts
    by descending output drive resistance. Two cells can only be compared
    this way across their separate `LibertyCell::func_exprs` arenas, since
    function expressions never leave a cell while parsing (`cell.rs`'s
    module doc comment) — every port reference inside a function is matched
    by *name* rather than by `FuncExprId`/`PortId` equality.

*/

#![allow(dead_code)]

use std::collections::HashMap;

use crate::func_expr::FuncExprId;
use crate::liberty::LibertyCell;
use crate::units::{MinMax, RiseFall};

/// Structural-equality port-by-name comparison between two cells' function
/// expressions, living in separate arenas (SPEC_FULL §4.D.157). Grounded on
/// `func_expr::FuncExprArena::equiv_cross`'s shape, but a port leaf compares
/// by name instead of by `PortId`, since the two ids come from different
/// cells' port tables and only coincide by accident.
fn funcs_equiv(a_cell: &LibertyCell, a_id: FuncExprId, b_cell: &LibertyCell, b_id: FuncExprId) -> bool {
    let (a_arena, b_arena) = (a_cell.func_exprs(), b_cell.func_exprs());
    if a_arena.op(a_id) != b_arena.op(b_id) {
        return false;
    }
    match (a_arena.port(a_id), b_arena.port(b_id)) {
        (Some(pa), Some(pb)) => {
            let (Some(port_a), Some(port_b)) = (a_cell.port(pa), b_cell.port(pb)) else {
                return false;
            };
            if port_a.name() != port_b.name() {
                return false;
            }
        }
        (None, None) => {}
        _ => return false,
    }
    let left_eq = match (a_arena.left(a_id), b_arena.left(b_id)) {
        (Some(l1), Some(l2)) => funcs_equiv(a_cell, l1, b_cell, l2),
        (None, None) => true,
        _ => false,
    };
    let right_eq = match (a_arena.right(a_id), b_arena.right(b_id)) {
        (Some(r1), Some(r2)) => funcs_equiv(a_cell, r1, b_cell, r2),
        (None, None) => true,
        _ => false,
    };
    left_eq && right_eq
}

/// Bucketing hash over a cell's ports, port functions, sequential count and
/// arc-set count (SPEC_FULL §4.B.8, §4.D.1-2). Accumulated with
/// `wrapping_add` rather than a rolling multiply so the result doesn't
/// depend on port declaration order — `ports()`/`arc_sets()` order is
/// otherwise insertion order, which two independently-authored but
/// equivalent cells have no reason to share.
pub fn cell_hash(cell: &LibertyCell) -> u64 {
    let mut h: u64 = 0;
    for port_id in cell.ports() {
        let Some(port) = cell.port(port_id) else { continue };
        h = h.wrapping_add(port.equiv_hash_term());
        if let Some(func) = port.function() {
            h = h.wrapping_add(cell.func_exprs().hash(func, &mut |port_id| cell.port(port_id).map(|p| p.equiv_hash_term()).unwrap_or(0)));
        }
    }
    h = h.wrapping_add(cell.sequentials().len() as u64 * 257);
    h = h.wrapping_add(cell.arc_sets().len() as u64 * 65537);
    h
}

/// Full equivalence test for two cells that already share a [`cell_hash`]
/// bucket (SPEC_FULL §4.D.157 / testable property 5): identical ports,
/// functions, PG-pins, sequentials, statetable and arc sets, independent of
/// arc-set or sequential definition order where the source allows it.
pub fn cells_equivalent(a: &LibertyCell, b: &LibertyCell) -> bool {
    if a.ports().count() != b.ports().count() {
        return false;
    }
    for port_id in a.ports() {
        let Some(port_a) = a.port(port_id) else { continue };
        let Some(other_id) = b.find_port(port_a.name()) else { return false };
        let Some(port_b) = b.port(other_id) else { return false };
        if port_a.direction() != port_b.direction() || port_a.width() != port_b.width() {
            return false;
        }
        match (port_a.function(), port_b.function()) {
            (Some(fa), Some(fb)) if funcs_equiv(a, fa, b, fb) => {}
            (None, None) => {}
            _ => return false,
        }
    }

    if a.pg_pins() != b.pg_pins() {
        return false;
    }

    if a.sequentials().len() != b.sequentials().len() {
        return false;
    }
    for (seq_a, seq_b) in a.sequentials().iter().zip(b.sequentials().iter()) {
        if !seq_a.equiv(seq_b, |x, y| funcs_equiv(a, x, b, y)) {
            return false;
        }
    }

    match (a.statetable(), b.statetable()) {
        (Some(ta), Some(tb)) if ta.equiv(tb) => {}
        (None, None) => {}
        _ => return false,
    }

    arc_sets_equivalent(a, b)
}

/// Matches each of `a`'s arc sets against an unused arc set of `b` with the
/// same from/to port *names*, role, and rise/fall arc shape (SPEC_FULL
/// §4.D.157: "regardless of definition order of arcs"). A bijection must
/// exist between the two cells' arc sets for them to be equivalent.
fn arc_sets_equivalent(a: &LibertyCell, b: &LibertyCell) -> bool {
    let a_sets = a.arc_sets();
    let b_sets = b.arc_sets();
    if a_sets.len() != b_sets.len() {
        return false;
    }
    let port_name = |cell: &LibertyCell, id| cell.port(id).map(|p| p.name().to_string());

    let mut used = vec![false; b_sets.len()];
    for set_a in a_sets {
        let from_a = set_a.from().and_then(|p| port_name(a, p));
        let to_a = set_a.to().and_then(|p| port_name(a, p));
        let matched = b_sets.iter().enumerate().position(|(i, set_b)| {
            if used[i] {
                return false;
            }
            let from_b = set_b.from().and_then(|p| port_name(b, p));
            let to_b = set_b.to().and_then(|p| port_name(b, p));
            from_a == from_b && to_a == to_b && set_a.role() == set_b.role() && set_a.arcs_equivalent(set_b)
        });
        match matched {
            Some(i) => used[i] = true,
            None => return false,
        }
    }
    true
}

/// The highest rise/fall drive resistance among `cell`'s output-like ports,
/// at the `max` PVT corner (SPEC_FULL §8 testable property 5: "the class
/// sorts by descending output drive resistance"); `0.0` if no output port
/// declares one.
pub fn cell_drive_resistance(cell: &LibertyCell) -> f64 {
    cell.ports()
        .filter_map(|id| cell.port(id))
        .filter(|p| p.direction().is_output_like())
        .filter_map(|p| match (p.resistance(RiseFall::Rise, MinMax::Max), p.resistance(RiseFall::Fall, MinMax::Max)) {
            (Some(r), Some(f)) => Some(r.max(f)),
            (Some(r), None) => Some(r),
            (None, Some(f)) => Some(f),
            (None, None) => None,
        })
        .fold(0.0, f64::max)
}

/// Groups `cells` into equivalence classes (SPEC_FULL §4.D): hash-bucket
/// first, then confirm each bucket with [`cells_equivalent`] since distinct
/// cells can collide on the hash. Each class is sorted by descending
/// [`cell_drive_resistance`].
pub fn find_equiv_classes<'a>(cells: &[&'a LibertyCell]) -> Vec<Vec<&'a LibertyCell>> {
    let mut buckets: HashMap<u64, Vec<&LibertyCell>> = HashMap::new();
    for &cell in cells {
        buckets.entry(cell_hash(cell)).or_default().push(cell);
    }

    let mut classes = Vec::new();
    for (_, bucket) in buckets {
        let mut remaining = bucket;
        while let Some(seed) = remaining.pop() {
            let mut class = vec![seed];
            remaining.retain(|&cell| {
                if cells_equivalent(seed, cell) {
                    class.push(cell);
                    false
                } else {
                    true
                }
            });
            class.sort_by(|x, y| cell_drive_resistance(y).partial_cmp(&cell_drive_resistance(x)).unwrap_or(std::cmp::Ordering::Equal));
            classes.push(class);
        }
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::liberty::{PortDirection, TimingRole};
    use crate::units::{MinMax, RiseFall};

    fn inverter(name: &str, rise_resistance: f64) -> LibertyCell {
        let mut cell = LibertyCell::new(name);
        let a = cell.make_port("A", PortDirection::Input);
        let y = cell.make_port("Y", PortDirection::Output);
        cell.port_mut(y).unwrap().set_resistance(RiseFall::Rise, MinMax::Max, rise_resistance);
        cell.port_mut(y).unwrap().set_resistance(RiseFall::Fall, MinMax::Max, rise_resistance);
        let port_a = cell.func_exprs_mut().make_port(a);
        let not_a = cell.func_exprs_mut().make_not(port_a);
        cell.port_mut(y).unwrap().set_function(not_a);
        cell.add_arc_set(
            crate::liberty::ArcSetKey { from: Some(a), to: Some(y), role: TimingRole::Combinational, when_class: None, sdf_cond: None, mode: None },
            {
                let mut set = crate::liberty::TimingArcSet::new(Some(a), Some(y), TimingRole::Combinational);
                set.push_arc(crate::liberty::TimingArc::new(crate::units::RiseFall::Rise, crate::units::RiseFall::Fall));
                set.push_arc(crate::liberty::TimingArc::new(crate::units::RiseFall::Fall, crate::units::RiseFall::Rise));
                set
            },
        );
        cell.finish();
        cell
    }

    #[test]
    fn reordered_arcs_within_one_arc_set_break_equivalence() {
        let a = inverter("INV_X1", 100.0);
        let mut b = LibertyCell::new("INV_X1_DUP");
        let a_in = b.make_port("A", PortDirection::Input);
        let y_out = b.make_port("Y", PortDirection::Output);
        b.port_mut(y_out).unwrap().set_resistance(RiseFall::Rise, MinMax::Max, 100.0);
        b.port_mut(y_out).unwrap().set_resistance(RiseFall::Fall, MinMax::Max, 100.0);
        let port_a = b.func_exprs_mut().make_port(a_in);
        let not_a = b.func_exprs_mut().make_not(port_a);
        b.port_mut(y_out).unwrap().set_function(not_a);
        // Same arc set, arcs pushed in the opposite rise/fall order.
        let mut set = crate::liberty::TimingArcSet::new(Some(a_in), Some(y_out), TimingRole::Combinational);
        set.push_arc(crate::liberty::TimingArc::new(crate::units::RiseFall::Fall, crate::units::RiseFall::Rise));
        set.push_arc(crate::liberty::TimingArc::new(crate::units::RiseFall::Rise, crate::units::RiseFall::Fall));
        b.add_arc_set(
            crate::liberty::ArcSetKey { from: Some(a_in), to: Some(y_out), role: TimingRole::Combinational, when_class: None, sdf_cond: None, mode: None },
            set,
        );
        b.finish();

        assert!(!cells_equivalent(&a, &b), "arcs_equivalent requires matching rise/fall order within one arc set");
    }

    #[test]
    fn cells_differing_only_in_drive_strength_are_equivalent_and_sort_by_resistance() {
        let weak = inverter("INV_X1", 100.0);
        let strong = inverter("INV_X4", 25.0);
        assert!(cells_equivalent(&weak, &strong));

        let cells: Vec<&LibertyCell> = vec![&weak, &strong];
        let classes = find_equiv_classes(&cells);
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0][0].name(), "INV_X1");
        assert_eq!(classes[0][1].name(), "INV_X4");
    }

    #[test]
    fn cell_hash_is_independent_of_port_declaration_order() {
        let mut a = LibertyCell::new("C1");
        a.make_port("A", PortDirection::Input);
        a.make_port("B", PortDirection::Input);

        let mut b = LibertyCell::new("C2");
        b.make_port("B", PortDirection::Input);
        b.make_port("A", PortDirection::Input);

        assert_eq!(cell_hash(&a), cell_hash(&b));
    }
}
