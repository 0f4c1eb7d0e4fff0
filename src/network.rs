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

    network.rs

    Collaborator traits the graph builder depends on but never implements
    (SPEC_FULL §6): `Network` exposes the linked netlist, `LibertyEvents` is
    the push API a liberty front-end would drive while parsing. The builder
    owns no pin/instance/net objects, only these opaque ids.

*/

#![allow(dead_code)]

use crate::id::ObjectId;
use crate::liberty::{LibertyCell, PortDirection};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PinId(pub ObjectId);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InstanceId(pub ObjectId);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NetId(pub ObjectId);

/// The netlist interface the graph builder reads from (SPEC_FULL §6). The
/// builder never owns a `Network` implementation in production; only a small
/// in-memory test double under `tests/` implements it.
pub trait Network {
    fn leaf_instances(&self) -> Vec<InstanceId>;
    fn pins(&self, instance: InstanceId) -> Vec<PinId>;
    fn net(&self, pin: PinId) -> Option<NetId>;
    fn pins_on_net(&self, net: NetId) -> Vec<PinId>;
    fn instance(&self, pin: PinId) -> Option<InstanceId>;
    fn cell(&self, instance: InstanceId) -> Option<&LibertyCell>;
    fn direction(&self, pin: PinId) -> PortDirection;
    fn is_hierarchical(&self, instance: InstanceId) -> bool;
    fn is_bidirect(&self, pin: PinId) -> bool {
        self.direction(pin) == PortDirection::Bidirect
    }
    fn pin_name(&self, pin: PinId) -> String;
}

/// Grouped attribute/subgroup push events a liberty front-end would drive
/// while parsing (SPEC_FULL §6). Declared here as the seam the builder
/// consumes; no production implementation ships with this core.
pub trait LibertyEvents {
    fn begin_group(&mut self, kind: &str, name: Option<&str>);
    fn attribute(&mut self, name: &str, values: &[AttrValue]);
    fn end_group(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    String(String),
    Float(f64),
    Bool(bool),
}
