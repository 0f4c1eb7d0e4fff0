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

    graph::edge.rs

    Edge: a timing relationship between two vertices, bound either to an
    instance timing arc set or to an implicit wire arc (SPEC_FULL §3). Every
    cross reference is by id, not pointer, to stay small and Send/Sync-free.

*/

#![allow(dead_code)]

use crate::id::{ArrayId, ObjectId};
use crate::liberty::{PortId, TimingRole};

const FLAG_DELAY_ANNOTATION_IS_INCREMENTAL: u8 = 1 << 0;
const FLAG_IS_DISABLED_CONSTRAINT: u8 = 1 << 1;
const FLAG_IS_DISABLED_COND: u8 = 1 << 2;
const FLAG_IS_DISABLED_LOOP: u8 = 1 << 3;
const FLAG_IS_BIDIRECT_INST_PATH: u8 = 1 << 4;
const FLAG_IS_BIDIRECT_NET_PATH: u8 = 1 << 5;

/// What produced this edge: an instance's timing arc set (from its library
/// cell), or the implicit wire arc connecting a driver pin to a load pin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeRole {
    Wire,
    Arc { from_port: PortId, to_port: PortId, role: TimingRole, arc_count: u16 },
}

impl EdgeRole {
    pub fn arc_count(&self) -> u16 {
        match self {
            EdgeRole::Wire => 1,
            EdgeRole::Arc { arc_count, .. } => *arc_count,
        }
    }

    pub fn timing_role(&self) -> Option<TimingRole> {
        match self {
            EdgeRole::Wire => None,
            EdgeRole::Arc { role, .. } => Some(*role),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Edge {
    from: ObjectId,
    to: ObjectId,
    role: EdgeRole,
    /// Base `ArrayId` of this edge's arc delays, shared across every
    /// analysis point's `arc_delay_tables` entry: `make_edge`/`delete_edge`
    /// call `make`/`destroy` on all AP tables in lockstep with the same
    /// `arc_count`, so every AP table produces and consumes the identical
    /// id. One id suffices instead of a per-AP `Vec<ArrayId>`.
    arc_delays: ArrayId,
    in_link: ObjectId,
    out_next: ObjectId,
    out_prev: ObjectId,
    flags: u8,
    /// 3-bit simulated timing sense, stored densely alongside the other
    /// single-byte flags rather than as a separate field.
    sim_timing_sense: u8,
}

impl Default for Edge {
    fn default() -> Self {
        Edge {
            from: ObjectId::NULL,
            to: ObjectId::NULL,
            role: EdgeRole::Wire,
            arc_delays: ArrayId::NULL,
            in_link: ObjectId::NULL,
            out_next: ObjectId::NULL,
            out_prev: ObjectId::NULL,
            flags: 0,
            sim_timing_sense: 0,
        }
    }
}

macro_rules! flag_accessor {
    ($get:ident, $set:ident, $bit:expr) => {
        pub fn $get(&self) -> bool {
            self.flags & $bit != 0
        }

        pub fn $set(&mut self, value: bool) {
            if value {
                self.flags |= $bit;
            } else {
                self.flags &= !$bit;
            }
        }
    };
}

impl Edge {
    pub fn new(from: ObjectId, to: ObjectId, role: EdgeRole) -> Self {
        Edge { from, to, role, ..Default::default() }
    }

    pub fn from(&self) -> ObjectId {
        self.from
    }

    pub fn to(&self) -> ObjectId {
        self.to
    }

    pub fn role(&self) -> &EdgeRole {
        &self.role
    }

    pub fn arc_delays(&self) -> Option<ArrayId> {
        if self.arc_delays.is_null() {
            None
        } else {
            Some(self.arc_delays)
        }
    }

    pub fn set_arc_delays(&mut self, id: ArrayId) {
        self.arc_delays = id;
    }

    pub fn in_link(&self) -> ObjectId {
        self.in_link
    }

    pub fn set_in_link(&mut self, id: ObjectId) {
        self.in_link = id;
    }

    pub fn out_next(&self) -> ObjectId {
        self.out_next
    }

    pub fn set_out_next(&mut self, id: ObjectId) {
        self.out_next = id;
    }

    pub fn out_prev(&self) -> ObjectId {
        self.out_prev
    }

    pub fn set_out_prev(&mut self, id: ObjectId) {
        self.out_prev = id;
    }

    pub fn sim_timing_sense(&self) -> u8 {
        self.sim_timing_sense & 0b111
    }

    pub fn set_sim_timing_sense(&mut self, value: u8) {
        debug_assert!(value <= 0b111);
        self.sim_timing_sense = value & 0b111;
    }

    flag_accessor!(delay_annotation_is_incremental, set_delay_annotation_is_incremental, FLAG_DELAY_ANNOTATION_IS_INCREMENTAL);
    flag_accessor!(is_disabled_constraint, set_is_disabled_constraint, FLAG_IS_DISABLED_CONSTRAINT);
    flag_accessor!(is_disabled_cond, set_is_disabled_cond, FLAG_IS_DISABLED_COND);
    flag_accessor!(is_disabled_loop, set_is_disabled_loop, FLAG_IS_DISABLED_LOOP);
    flag_accessor!(is_bidirect_inst_path, set_is_bidirect_inst_path, FLAG_IS_BIDIRECT_INST_PATH);
    flag_accessor!(is_bidirect_net_path, set_is_bidirect_net_path, FLAG_IS_BIDIRECT_NET_PATH);

    /// True unless some disabled-* flag suppresses this edge from
    /// delay-calc/levelization traversal (SPEC_FULL invariant 4).
    pub fn is_enabled(&self) -> bool {
        !self.is_disabled_constraint() && !self.is_disabled_cond() && !self.is_disabled_loop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_edge_has_one_arc() {
        let e = Edge::new(ObjectId(1), ObjectId(2), EdgeRole::Wire);
        assert_eq!(e.role().arc_count(), 1);
        assert!(e.role().timing_role().is_none());
    }

    #[test]
    fn flags_are_independent() {
        let mut e = Edge::new(ObjectId(1), ObjectId(2), EdgeRole::Wire);
        e.set_is_disabled_loop(true);
        assert!(!e.is_enabled());
        e.set_is_disabled_loop(false);
        assert!(e.is_enabled());
    }
}
