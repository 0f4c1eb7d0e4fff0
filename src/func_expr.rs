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

    func_expr.rs

    The boolean function algebra (component B): port references, NOT/AND/
    OR/XOR, and the two constants, plus equivalence, ordering, inversion,
    bit-slicing, timing sense and hashing over that algebra.

    Nodes live in a small per-function arena (`FuncExprArena`) rather than as
    owned, individually heap-allocated tree nodes: expressions are built
    bottom-up once parsed and never mutated in place, so there is no need for
    `Rc`/`RefCell` or manual delete. Dropping the arena frees every node in
    one deallocation, which is what the original's `shallowDelete`/
    `deleteSubexprs` accomplish by hand.

    Generic over the port reference type `P` so this module has no
    dependency on the liberty cell model (component D depends on B, not the
    other way around); `liberty::port::PortId` is the concrete `P` used
    throughout the rest of the crate.

*/

#![allow(dead_code)]

use std::collections::HashSet;
use std::hash::Hash;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Op {
    Port,
    Not,
    And,
    Or,
    Xor,
    Zero,
    One,
}

impl Op {
    /// Ordinal used by `less` (SPEC_FULL §4.B.2) and by `hash`'s
    /// tag-dependent multiplier (§4.B.8).
    fn ordinal(self) -> u32 {
        match self {
            Op::Port => 0,
            Op::Not => 1,
            Op::And => 2,
            Op::Or => 3,
            Op::Xor => 4,
            Op::One => 5,
            Op::Zero => 6,
        }
    }

    fn hash_multiplier(self) -> u64 {
        // Odd multipliers per operator, as required by §4.B.8 ("recursive
        // child hashes with tag-dependent odd multipliers").
        match self {
            Op::Port => 1,
            Op::Not => 3,
            Op::And => 5,
            Op::Or => 7,
            Op::Xor => 11,
            Op::One => 13,
            Op::Zero => 17,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FuncExprId(u32);

#[derive(Clone, Debug)]
struct Node<P> {
    op: Op,
    left: Option<FuncExprId>,
    right: Option<FuncExprId>,
    port: Option<P>,
}

/// Timing sense of an expression with respect to one of its input ports
/// (SPEC_FULL §4.B.6).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimingSense {
    PositiveUnate,
    NegativeUnate,
    NonUnate,
    /// The port does not appear in the expression.
    None,
    Unknown,
}

impl TimingSense {
    fn invert(self) -> TimingSense {
        match self {
            TimingSense::PositiveUnate => TimingSense::NegativeUnate,
            TimingSense::NegativeUnate => TimingSense::PositiveUnate,
            other => other,
        }
    }

    fn combine(self, other: TimingSense) -> TimingSense {
        use TimingSense::*;
        match (self, other) {
            (None, s) | (s, None) => s,
            (Unknown, _) | (_, Unknown) => Unknown,
            (PositiveUnate, PositiveUnate) => PositiveUnate,
            (NegativeUnate, NegativeUnate) => NegativeUnate,
            (PositiveUnate, NegativeUnate) | (NegativeUnate, PositiveUnate) => NonUnate,
            _ => NonUnate,
        }
    }
}

pub struct FuncExprArena<P> {
    nodes: Vec<Node<P>>,
}

impl<P> Default for FuncExprArena<P> {
    fn default() -> Self {
        FuncExprArena { nodes: Vec::new() }
    }
}

impl<P: Copy + PartialEq + Eq + Ord + Hash> FuncExprArena<P> {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, node: Node<P>) -> FuncExprId {
        let id = FuncExprId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn node(&self, id: FuncExprId) -> &Node<P> {
        &self.nodes[id.0 as usize]
    }

    // ---- construction ----------------------------------------------------

    pub fn make_port(&mut self, port: P) -> FuncExprId {
        self.push(Node { op: Op::Port, left: None, right: None, port: Some(port) })
    }

    pub fn make_not(&mut self, expr: FuncExprId) -> FuncExprId {
        self.push(Node { op: Op::Not, left: Some(expr), right: None, port: None })
    }

    pub fn make_and(&mut self, left: FuncExprId, right: FuncExprId) -> FuncExprId {
        self.push(Node { op: Op::And, left: Some(left), right: Some(right), port: None })
    }

    pub fn make_or(&mut self, left: FuncExprId, right: FuncExprId) -> FuncExprId {
        self.push(Node { op: Op::Or, left: Some(left), right: Some(right), port: None })
    }

    pub fn make_xor(&mut self, left: FuncExprId, right: FuncExprId) -> FuncExprId {
        self.push(Node { op: Op::Xor, left: Some(left), right: Some(right), port: None })
    }

    pub fn make_zero(&mut self) -> FuncExprId {
        self.push(Node { op: Op::Zero, left: None, right: None, port: None })
    }

    pub fn make_one(&mut self) -> FuncExprId {
        self.push(Node { op: Op::One, left: None, right: None, port: None })
    }

    // ---- accessors ---------------------------------------------------------

    pub fn op(&self, id: FuncExprId) -> Op {
        self.node(id).op
    }

    pub fn left(&self, id: FuncExprId) -> Option<FuncExprId> {
        self.node(id).left
    }

    pub fn right(&self, id: FuncExprId) -> Option<FuncExprId> {
        self.node(id).right
    }

    pub fn port(&self, id: FuncExprId) -> Option<P> {
        self.node(id).port
    }

    // ---- equivalence / ordering --------------------------------------------

    /// Structural equality (§4.B.1): tag matches and children are
    /// recursively equivalent; AND/OR/XOR operands are compared in written
    /// order (commutativity is not canonicalized).
    pub fn equiv(&self, a: FuncExprId, b: FuncExprId) -> bool {
        let (na, nb) = (self.node(a), self.node(b));
        if na.op != nb.op || na.port != nb.port {
            return false;
        }
        let left_eq = match (na.left, nb.left) {
            (Some(l1), Some(l2)) => self.equiv(l1, l2),
            (None, None) => true,
            _ => false,
        };
        let right_eq = match (na.right, nb.right) {
            (Some(r1), Some(r2)) => self.equiv(r1, r2),
            (None, None) => true,
            _ => false,
        };
        left_eq && right_eq
    }

    /// Structural equality between expressions owned by two *different*
    /// arenas (e.g. two cells' port functions during equivalent-cell
    /// discovery, SPEC_FULL §4.D.157), where `equiv`'s same-arena
    /// `self.node(id)` indexing doesn't apply.
    pub fn equiv_cross(a: &FuncExprArena<P>, ia: FuncExprId, b: &FuncExprArena<P>, ib: FuncExprId) -> bool {
        let (na, nb) = (a.node(ia), b.node(ib));
        if na.op != nb.op || na.port != nb.port {
            return false;
        }
        let left_eq = match (na.left, nb.left) {
            (Some(l1), Some(l2)) => FuncExprArena::equiv_cross(a, l1, b, l2),
            (None, None) => true,
            _ => false,
        };
        let right_eq = match (na.right, nb.right) {
            (Some(r1), Some(r2)) => FuncExprArena::equiv_cross(a, r1, b, r2),
            (None, None) => true,
            _ => false,
        };
        left_eq && right_eq
    }

    /// Structural less-than (§4.B.2): lexicographic on
    /// (tag index, left, right, port).
    pub fn less(&self, a: FuncExprId, b: FuncExprId) -> bool {
        let (na, nb) = (self.node(a), self.node(b));
        if na.op.ordinal() != nb.op.ordinal() {
            return na.op.ordinal() < nb.op.ordinal();
        }
        match (na.left, nb.left) {
            (Some(l1), Some(l2)) if l1 != l2 => return self.less(l1, l2),
            (None, Some(_)) => return true,
            (Some(_), None) => return false,
            _ => {}
        }
        match (na.right, nb.right) {
            (Some(r1), Some(r2)) if r1 != r2 => return self.less(r1, r2),
            (None, Some(_)) => return true,
            (Some(_), None) => return false,
            _ => {}
        }
        na.port < nb.port
    }

    /// Deep copy: appends a fresh, structurally-equivalent subtree.
    pub fn copy(&mut self, id: FuncExprId) -> FuncExprId {
        let node = self.node(id).clone();
        let left = node.left.map(|l| self.copy(l));
        let right = node.right.map(|r| self.copy(r));
        self.push(Node { op: node.op, left, right, port: node.port })
    }

    /// Drops the leading NOT if present, otherwise wraps in one (§4.B.4).
    pub fn invert(&mut self, id: FuncExprId) -> FuncExprId {
        let node = self.node(id);
        if node.op == Op::Not {
            node.left.expect("Not node always has a left child")
        } else {
            self.make_not(id)
        }
    }

    /// Produces the scalar sub-expression for bit `bit_offset` of a bus
    /// function (§4.B.5): every bus port reference is replaced by the
    /// caller-supplied per-bit port; leaves with no port (constants) and
    /// scalar port references pass through unchanged (structurally cloned).
    pub fn bit_sub_expr(
        &mut self,
        id: FuncExprId,
        bit_offset: usize,
        bit_of: &mut impl FnMut(P, usize) -> P,
    ) -> FuncExprId {
        let node = self.node(id).clone();
        match node.op {
            Op::Port => {
                let bit_port = bit_of(node.port.expect("port op always carries a port"), bit_offset);
                self.make_port(bit_port)
            }
            Op::Zero => self.make_zero(),
            Op::One => self.make_one(),
            Op::Not => {
                let l = self.bit_sub_expr(node.left.unwrap(), bit_offset, bit_of);
                self.make_not(l)
            }
            Op::And | Op::Or | Op::Xor => {
                let l = self.bit_sub_expr(node.left.unwrap(), bit_offset, bit_of);
                let r = self.bit_sub_expr(node.right.unwrap(), bit_offset, bit_of);
                match node.op {
                    Op::And => self.make_and(l, r),
                    Op::Or => self.make_or(l, r),
                    Op::Xor => self.make_xor(l, r),
                    _ => unreachable!(),
                }
            }
        }
    }

    /// Timing sense of the expression with respect to `p` (§4.B.6).
    pub fn port_timing_sense(&self, id: FuncExprId, p: P) -> TimingSense {
        let node = self.node(id);
        match node.op {
            Op::Port => {
                if node.port == Some(p) {
                    TimingSense::PositiveUnate
                } else {
                    TimingSense::None
                }
            }
            Op::Zero | Op::One => TimingSense::None,
            Op::Not => self.port_timing_sense(node.left.unwrap(), p).invert(),
            Op::And | Op::Or => {
                let l = self.port_timing_sense(node.left.unwrap(), p);
                let r = self.port_timing_sense(node.right.unwrap(), p);
                l.combine(r)
            }
            Op::Xor => {
                if self.has_port(node.left.unwrap(), p) || self.has_port(node.right.unwrap(), p) {
                    TimingSense::NonUnate
                } else {
                    TimingSense::None
                }
            }
        }
    }

    /// True if `p` appears anywhere in the expression (§4.B.7).
    pub fn has_port(&self, id: FuncExprId, p: P) -> bool {
        let node = self.node(id);
        match node.op {
            Op::Port => node.port == Some(p),
            Op::Zero | Op::One => false,
            Op::Not => self.has_port(node.left.unwrap(), p),
            Op::And | Op::Or | Op::Xor => {
                self.has_port(node.left.unwrap(), p) || self.has_port(node.right.unwrap(), p)
            }
        }
    }

    /// The set of all distinct ports referenced (§4.B.7).
    pub fn ports(&self, id: FuncExprId) -> HashSet<P> {
        let mut set = HashSet::new();
        self.collect_ports(id, &mut set);
        set
    }

    fn collect_ports(&self, id: FuncExprId, set: &mut HashSet<P>) {
        let node = self.node(id);
        if let Some(p) = node.port {
            set.insert(p);
        }
        if let Some(l) = node.left {
            self.collect_ports(l, set);
        }
        if let Some(r) = node.right {
            self.collect_ports(r, set);
        }
    }
}

impl<P: Copy + PartialEq + Eq + Ord + Hash> FuncExprArena<P> {
    /// Dedup hash for equivalent-cell discovery (§4.B.8). `port_hash` supplies
    /// the per-port term (name-hash * 3 + direction index * 5); kept as a
    /// caller-supplied closure rather than a trait bound on `P` so this arena
    /// stays usable with a bare port key type in tests.
    pub fn hash(&self, id: FuncExprId, port_hash: &mut impl FnMut(P) -> u64) -> u64 {
        let node = self.node(id);
        let mut h: u64 = match node.op {
            Op::Port => node.port.map(|p| port_hash(p)).unwrap_or(0),
            _ => 0,
        };
        if let Some(l) = node.left {
            h = h.wrapping_mul(node.op.hash_multiplier()).wrapping_add(self.hash(l, port_hash));
        }
        if let Some(r) = node.right {
            h = h.wrapping_mul(node.op.hash_multiplier()).wrapping_add(self.hash(r, port_hash));
        }
        h.wrapping_mul(node.op.hash_multiplier()).wrapping_add(node.op.ordinal() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    struct P(u32);

    #[test]
    fn equiv_of_copy() {
        let mut a = FuncExprArena::<P>::new();
        let port = a.make_port(P(1));
        let not_port = a.make_not(port);
        let one = a.make_one();
        let expr = a.make_and(not_port, one);
        let copy = a.copy(expr);
        assert!(a.equiv(expr, copy));
        assert_ne!(expr, copy);
    }

    #[test]
    fn equiv_cross_compares_separate_arenas() {
        let mut a = FuncExprArena::<P>::new();
        let expr_a = a.make_not(a.make_port(P(1)));
        let mut b = FuncExprArena::<P>::new();
        b.make_zero(); // shift ids so indices don't coincidentally line up
        let expr_b = b.make_not(b.make_port(P(1)));
        assert!(FuncExprArena::equiv_cross(&a, expr_a, &b, expr_b));

        let expr_b2 = b.make_port(P(1));
        assert!(!FuncExprArena::equiv_cross(&a, expr_a, &b, expr_b2));
    }

    #[test]
    fn double_invert_is_equiv() {
        let mut a = FuncExprArena::<P>::new();
        let port = a.make_port(P(1));
        let once = a.invert(port);
        let twice = a.invert(once);
        assert!(a.equiv(twice, port));
    }

    #[test]
    fn bit_sub_expr_on_scalar_is_clone() {
        let mut a = FuncExprArena::<P>::new();
        let port = a.make_port(P(1));
        let not_port = a.make_not(port);
        let sub = a.bit_sub_expr(not_port, 0, &mut |p, _bit| p);
        assert!(a.equiv(sub, not_port));
    }

    #[test]
    fn bit_sub_expr_substitutes_bus_bits() {
        let mut a = FuncExprArena::<P>::new();
        let bus_port = a.make_port(P(100)); // stands in for bus port "A"
        let sub = a.bit_sub_expr(bus_port, 2, &mut |p, bit| P(p.0 * 1000 + bit as u32));
        assert_eq!(a.port(sub), Some(P(100 * 1000 + 2)));
    }

    #[test]
    fn timing_sense_cases() {
        let mut a = FuncExprArena::<P>::new();
        let p = P(1);
        let q = P(2);
        let port_p = a.make_port(p);
        assert_eq!(a.port_timing_sense(port_p, p), TimingSense::PositiveUnate);

        let not_p = a.make_not(port_p);
        assert_eq!(a.port_timing_sense(not_p, p), TimingSense::NegativeUnate);

        let port_q = a.make_port(q);
        let xor_pq = a.make_xor(port_p, port_q);
        assert_eq!(a.port_timing_sense(xor_pq, p), TimingSense::NonUnate);

        let and_p_not_p = a.make_and(port_p, not_p);
        assert_eq!(a.port_timing_sense(and_p_not_p, p), TimingSense::NonUnate);

        assert_eq!(a.port_timing_sense(port_q, p), TimingSense::None);
    }

    #[test]
    fn has_port_and_ports() {
        let mut a = FuncExprArena::<P>::new();
        let p = P(1);
        let q = P(2);
        let expr = a.make_and(a.make_port(p), a.make_not(a.make_port(q)));
        assert!(a.has_port(expr, p));
        assert!(a.has_port(expr, q));
        assert!(!a.has_port(expr, P(3)));
        let set = a.ports(expr);
        assert_eq!(set.len(), 2);
    }
}
