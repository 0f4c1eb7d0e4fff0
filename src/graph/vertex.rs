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

    graph::vertex.rs

    One vertex per network pin (plus an extra bidirect-driver vertex per
    bidirectional pin), per SPEC_FULL §3. The boolean/small-enum flags are
    packed into a single `u32` the way `marty_core/src/cpu_808x/gdr.rs` packs
    its status-register bits, rather than one `bool` field per flag.

*/

#![allow(dead_code)]

use crate::id::{ArrayId, ObjectId};
use crate::network::PinId;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Gray,
    Black,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimValue {
    Zero,
    One,
    X,
    Z,
    Rise,
    Fall,
    Unknown,
}

const FLAG_HAS_REQUIREDS: u32 = 1 << 0;
const FLAG_IS_BIDIRECT_DRVR: u32 = 1 << 1;
const FLAG_IS_REG_CLK: u32 = 1 << 2;
const FLAG_IS_DISABLED_CONSTRAINT: u32 = 1 << 3;
const FLAG_IS_GATED_CLK_ENABLE: u32 = 1 << 4;
const FLAG_HAS_CHECKS: u32 = 1 << 5;
const FLAG_IS_CHECK_CLK: u32 = 1 << 6;
const FLAG_IS_CONSTRAINED: u32 = 1 << 7;
const FLAG_HAS_DOWNSTREAM_CLK_PIN: u32 = 1 << 8;
const FLAG_CRPR_PATH_PRUNING_DISABLED: u32 = 1 << 9;
const FLAG_REQUIREDS_PRUNED: u32 = 1 << 10;

/// Vertex: pin reference, levelization state, arrivals/prev-paths array ids,
/// tag-group index, packed flags, per-(rf, ap) slew-annotated bitmap, the BFS
/// queue-membership bitmap, and the two edge-list heads. Kept to a handful of
/// machine words (SPEC_FULL §3's "≤ 64 bytes" target).
#[derive(Clone, Debug)]
pub struct Vertex {
    pin: PinId,
    level: u16,
    color: Color,
    arrivals: ArrayId,
    prev_paths: ArrayId,
    tag_group_index: u32,
    flags: u32,
    sim_value: SimValue,
    /// Bitmap of BFS queues this vertex is currently enqueued in.
    bfs_in_queue: u8,
    /// Bitmap of (rise/fall, ap) pairs whose slew has been annotated; bit
    /// `rf_index * ap_count + ap_index`.
    slew_annotated: u32,
    in_edges: ObjectId,
    out_edges: ObjectId,
}

impl Default for Vertex {
    fn default() -> Self {
        Vertex {
            pin: PinId(ObjectId::NULL),
            level: 0,
            color: Color::White,
            arrivals: ArrayId::NULL,
            prev_paths: ArrayId::NULL,
            tag_group_index: 0,
            flags: 0,
            sim_value: SimValue::Unknown,
            bfs_in_queue: 0,
            slew_annotated: 0,
            in_edges: ObjectId::NULL,
            out_edges: ObjectId::NULL,
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

impl Vertex {
    pub fn new(pin: PinId) -> Self {
        Vertex { pin, ..Default::default() }
    }

    pub fn pin(&self) -> PinId {
        self.pin
    }

    pub fn level(&self) -> u16 {
        self.level
    }

    pub fn set_level(&mut self, level: u16) {
        self.level = level;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn arrivals(&self) -> ArrayId {
        self.arrivals
    }

    pub fn set_arrivals(&mut self, id: ArrayId) {
        self.arrivals = id;
    }

    pub fn prev_paths(&self) -> ArrayId {
        self.prev_paths
    }

    pub fn set_prev_paths(&mut self, id: ArrayId) {
        self.prev_paths = id;
    }

    pub fn tag_group_index(&self) -> u32 {
        self.tag_group_index & 0x00ff_ffff
    }

    pub fn set_tag_group_index(&mut self, index: u32) {
        debug_assert!(index <= 0x00ff_ffff, "tag group index must fit in 24 bits");
        self.tag_group_index = index & 0x00ff_ffff;
    }

    pub fn sim_value(&self) -> SimValue {
        self.sim_value
    }

    pub fn set_sim_value(&mut self, value: SimValue) {
        self.sim_value = value;
    }

    pub fn bfs_in_queue(&self, queue_bit: u8) -> bool {
        self.bfs_in_queue & (1 << queue_bit) != 0
    }

    pub fn set_bfs_in_queue(&mut self, queue_bit: u8, value: bool) {
        if value {
            self.bfs_in_queue |= 1 << queue_bit;
        } else {
            self.bfs_in_queue &= !(1 << queue_bit);
        }
    }

    pub fn slew_annotated(&self, rf_index: usize, ap_index: usize, ap_count: usize) -> bool {
        let bit = rf_index * ap_count + ap_index;
        self.slew_annotated & (1 << bit) != 0
    }

    pub fn set_slew_annotated(&mut self, rf_index: usize, ap_index: usize, ap_count: usize, value: bool) {
        let bit = rf_index * ap_count + ap_index;
        if value {
            self.slew_annotated |= 1 << bit;
        } else {
            self.slew_annotated &= !(1 << bit);
        }
    }

    pub fn clear_slew_annotations(&mut self) {
        self.slew_annotated = 0;
    }

    pub fn in_edges_head(&self) -> ObjectId {
        self.in_edges
    }

    pub fn set_in_edges_head(&mut self, id: ObjectId) {
        self.in_edges = id;
    }

    pub fn out_edges_head(&self) -> ObjectId {
        self.out_edges
    }

    pub fn set_out_edges_head(&mut self, id: ObjectId) {
        self.out_edges = id;
    }

    flag_accessor!(has_requireds, set_has_requireds, FLAG_HAS_REQUIREDS);
    flag_accessor!(is_bidirect_drvr, set_is_bidirect_drvr, FLAG_IS_BIDIRECT_DRVR);
    flag_accessor!(is_reg_clk, set_is_reg_clk, FLAG_IS_REG_CLK);
    flag_accessor!(is_disabled_constraint, set_is_disabled_constraint, FLAG_IS_DISABLED_CONSTRAINT);
    flag_accessor!(is_gated_clk_enable, set_is_gated_clk_enable, FLAG_IS_GATED_CLK_ENABLE);
    flag_accessor!(has_checks, set_has_checks, FLAG_HAS_CHECKS);
    flag_accessor!(is_check_clk, set_is_check_clk, FLAG_IS_CHECK_CLK);
    flag_accessor!(is_constrained, set_is_constrained, FLAG_IS_CONSTRAINED);
    flag_accessor!(has_downstream_clk_pin, set_has_downstream_clk_pin, FLAG_HAS_DOWNSTREAM_CLK_PIN);
    flag_accessor!(crpr_path_pruning_disabled, set_crpr_path_pruning_disabled, FLAG_CRPR_PATH_PRUNING_DISABLED);
    flag_accessor!(requireds_pruned, set_requireds_pruned, FLAG_REQUIREDS_PRUNED);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_independent() {
        let mut v = Vertex::new(PinId(ObjectId(1)));
        v.set_is_reg_clk(true);
        v.set_has_checks(true);
        assert!(v.is_reg_clk());
        assert!(v.has_checks());
        assert!(!v.is_bidirect_drvr());
        v.set_is_reg_clk(false);
        assert!(!v.is_reg_clk());
        assert!(v.has_checks());
    }

    #[test]
    fn tag_group_index_is_masked_to_24_bits() {
        let mut v = Vertex::new(PinId(ObjectId(1)));
        v.set_tag_group_index(0x00ab_cdef);
        assert_eq!(v.tag_group_index(), 0x00ab_cdef);
    }

    #[test]
    fn slew_annotated_bit_is_per_rf_ap() {
        let mut v = Vertex::new(PinId(ObjectId(1)));
        v.set_slew_annotated(1, 0, 2, true);
        assert!(v.slew_annotated(1, 0, 2));
        assert!(!v.slew_annotated(0, 0, 2));
        assert!(!v.slew_annotated(1, 1, 2));
    }
}
