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

    liberty::statetable.rs

    Statetable: the row-based alternative to `ff`/`latch` for describing a
    cell's internal state behavior (SPEC_FULL §3) — input ports, internal
    ports, and an ordered set of (input, current-state, next-state) rows.

*/

#![allow(dead_code)]

use super::port::PortId;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputValue {
    Low,
    High,
    DontCare,
    LowOrHigh,
    HighOrLow,
    Rise,
    Fall,
    NotRise,
    NotFall,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InternalValue {
    Low,
    High,
    DontCare,
    LowOrHigh,
    HighOrLow,
    Unknown,
    NoChange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatetableRow {
    pub input: Vec<InputValue>,
    pub current: Vec<InternalValue>,
    pub next: Vec<InternalValue>,
}

#[derive(Clone, Debug)]
pub struct Statetable {
    input_ports: Vec<PortId>,
    internal_ports: Vec<PortId>,
    rows: Vec<StatetableRow>,
}

impl Statetable {
    pub fn new(input_ports: Vec<PortId>, internal_ports: Vec<PortId>) -> Self {
        Statetable { input_ports, internal_ports, rows: Vec::new() }
    }

    pub fn input_ports(&self) -> &[PortId] {
        &self.input_ports
    }

    pub fn internal_ports(&self) -> &[PortId] {
        &self.internal_ports
    }

    pub fn push_row(&mut self, row: StatetableRow) {
        debug_assert_eq!(row.input.len(), self.input_ports.len());
        debug_assert_eq!(row.current.len(), self.internal_ports.len());
        debug_assert_eq!(row.next.len(), self.internal_ports.len());
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[StatetableRow] {
        &self.rows
    }

    /// Equivalence for equivalent-cell discovery (SPEC_FULL §4.D.157):
    /// ordered port lists, ordered rows, ordered values — no canonicalization.
    pub fn equiv(&self, other: &Statetable) -> bool {
        self.input_ports == other.input_ports
            && self.internal_ports == other.internal_ports
            && self.rows == other.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ObjectId;

    fn pid(n: u32) -> PortId {
        PortId(ObjectId(n))
    }

    #[test]
    fn equiv_requires_same_row_order() {
        let mut a = Statetable::new(vec![pid(1)], vec![pid(2)]);
        a.push_row(StatetableRow {
            input: vec![InputValue::High],
            current: vec![InternalValue::Low],
            next: vec![InternalValue::High],
        });
        a.push_row(StatetableRow {
            input: vec![InputValue::Low],
            current: vec![InternalValue::High],
            next: vec![InternalValue::Low],
        });

        let mut b = Statetable::new(vec![pid(1)], vec![pid(2)]);
        b.push_row(StatetableRow {
            input: vec![InputValue::Low],
            current: vec![InternalValue::High],
            next: vec![InternalValue::Low],
        });
        b.push_row(StatetableRow {
            input: vec![InputValue::High],
            current: vec![InternalValue::Low],
            next: vec![InternalValue::High],
        });

        assert!(!a.equiv(&b), "row order matters per SPEC_FULL");
        assert!(a.equiv(&a.clone()));
    }
}
