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

    graph::graph.rs

    Graph: `makeGraph` construction, vertex/edge accessors, the linked
    edge-list iterators, per-(ap, rf) slew storage and per-ap arc-delay
    storage, edit operations, and levelization (SPEC_FULL §4.E).

    Hierarchical pins are not modeled as a separate connectivity layer here:
    `Network` already exposes every pin (leaf or hierarchical) flattened onto
    its net, so the net walk in step 4 below produces the same compacted
    driver/load edge set step 5 of the distilled spec calls out separately
    for hierarchical pins — there is no second pass to write. Recorded as an
    Open Question resolution in DESIGN.md.

*/

#![allow(dead_code)]

use std::collections::HashMap;

use crate::config::GraphConfig;
use crate::error::GraphError;
use crate::id::{ArrayId, ObjectId};
use crate::network::{InstanceId, Network, PinId};
use crate::storage::{ArrayTable, ObjectTable};
use crate::units::{Delay, Slew};

use super::edge::{Edge, EdgeRole};
use super::vertex::{Color, Vertex};

/// The two halves of a bidirectional pin's vertex pair; a unidirectional pin
/// only ever populates `load`.
#[derive(Copy, Clone, Debug, Default)]
struct PinVertices {
    load: ObjectId,
    drvr: Option<ObjectId>,
}

pub struct Graph<'n, N: Network> {
    network: &'n N,
    config: GraphConfig,
    vertices: ObjectTable<Vertex>,
    edges: ObjectTable<Edge>,
    pin_vertex_map: HashMap<PinId, PinVertices>,
    slew_tables: Vec<ArrayTable<Slew>>,
    arc_delay_tables: Vec<ArrayTable<Delay>>,
    reg_clk_vertices: Vec<ObjectId>,
}

impl<'n, N: Network> Graph<'n, N> {
    pub fn new(network: &'n N, config: GraphConfig) -> Self {
        let ap_count = config.dcalc_ap_count.max(1) as usize;
        Graph {
            network,
            config,
            vertices: ObjectTable::new(),
            edges: ObjectTable::new(),
            pin_vertex_map: HashMap::new(),
            slew_tables: (0..ap_count).map(|_| ArrayTable::new()).collect(),
            arc_delay_tables: (0..ap_count).map(|_| ArrayTable::new()).collect(),
            reg_clk_vertices: Vec::new(),
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // ---- accessors ----------------------------------------------------------

    pub fn vertex(&self, id: ObjectId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    pub fn vertex_mut(&mut self, id: ObjectId) -> Option<&mut Vertex> {
        self.vertices.get_mut(id)
    }

    pub fn edge(&self, id: ObjectId) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn edge_mut(&mut self, id: ObjectId) -> Option<&mut Edge> {
        self.edges.get_mut(id)
    }

    /// The load vertex and (if the pin is bidirectional) driver vertex ids
    /// for `pin`.
    pub fn pin_vertices(&self, pin: PinId) -> Option<(ObjectId, Option<ObjectId>)> {
        self.pin_vertex_map.get(&pin).map(|pv| (pv.load, pv.drvr))
    }

    pub fn pin_load_vertex(&self, pin: PinId) -> Option<ObjectId> {
        self.pin_vertex_map.get(&pin).map(|pv| pv.load)
    }

    /// The vertex that drives `pin`'s net: the bidirect-driver vertex for a
    /// bidirectional pin, otherwise its single vertex.
    pub fn pin_drvr_vertex(&self, pin: PinId) -> Option<ObjectId> {
        self.pin_vertex_map.get(&pin).map(|pv| pv.drvr.unwrap_or(pv.load))
    }

    pub fn reg_clk_vertices(&self) -> &[ObjectId] {
        &self.reg_clk_vertices
    }

    // ---- edge-list iteration --------------------------------------------------

    /// In-edges: a singly-linked list via `Edge::in_link`.
    pub fn in_edges(&self, vertex: ObjectId) -> impl Iterator<Item = ObjectId> + '_ {
        let start = self.vertices.get(vertex).map(|v| v.in_edges_head()).unwrap_or(ObjectId::NULL);
        InEdgeIter { graph: self, next: start }
    }

    /// Out-edges: a doubly-linked list, traversed forward via
    /// `Edge::out_next`.
    pub fn out_edges(&self, vertex: ObjectId) -> impl Iterator<Item = ObjectId> + '_ {
        let start = self.vertices.get(vertex).map(|v| v.out_edges_head()).unwrap_or(ObjectId::NULL);
        OutEdgeIter { graph: self, next: start }
    }

    // ---- construction ---------------------------------------------------------

    /// `makeGraph` (SPEC_FULL §4.E): creates a vertex per pin, intra-instance
    /// edges from each leaf instance's cell timing arc sets, and wire edges
    /// along every net.
    pub fn build(&mut self) -> Result<(), GraphError> {
        for instance in self.network.leaf_instances() {
            for pin in self.network.pins(instance) {
                self.make_pin_vertices(pin)?;
            }
        }
        for instance in self.network.leaf_instances() {
            self.make_instance_edges(instance)?;
        }
        self.make_wire_edges()?;
        self.collect_reg_clk_vertices();
        Ok(())
    }

    fn make_pin_vertices(&mut self, pin: PinId) -> Result<(), GraphError> {
        if self.pin_vertex_map.contains_key(&pin) {
            return Ok(());
        }
        let load_id = self.vertices.make().map_err(GraphError::Storage)?;
        *self.vertices.get_mut(load_id).unwrap() = Vertex::new(pin);

        let drvr = if self.network.is_bidirect(pin) {
            let drvr_id = self.vertices.make().map_err(GraphError::Storage)?;
            let mut v = Vertex::new(pin);
            v.set_is_bidirect_drvr(true);
            *self.vertices.get_mut(drvr_id).unwrap() = v;
            Some(drvr_id)
        } else {
            None
        };
        self.pin_vertex_map.insert(pin, PinVertices { load: load_id, drvr });
        Ok(())
    }

    fn make_instance_edges(&mut self, instance: InstanceId) -> Result<(), GraphError> {
        let Some(cell) = self.network.cell(instance) else { return Ok(()) };
        for arc_set in cell.arc_sets() {
            let (Some(from_port), Some(to_port)) = (arc_set.from(), arc_set.to()) else { continue };
            let from_pin = self.network.pins(instance).into_iter().find(|p| self.pin_port_matches(*p, cell, from_port));
            let to_pin = self.network.pins(instance).into_iter().find(|p| self.pin_port_matches(*p, cell, to_port));
            let (Some(from_pin), Some(to_pin)) = (from_pin, to_pin) else { continue };

            let from_vertex = self.pin_drvr_vertex(from_pin).ok_or(GraphError::DanglingVertexReference {
                edge: ObjectId::NULL,
                vertex: from_pin.0,
            })?;
            let to_vertex = self.pin_load_vertex(to_pin).ok_or(GraphError::DanglingVertexReference {
                edge: ObjectId::NULL,
                vertex: to_pin.0,
            })?;

            let role = EdgeRole::Arc {
                from_port,
                to_port,
                role: arc_set.role(),
                arc_count: arc_set.arcs().len().max(1) as u16,
            };
            self.make_edge(from_vertex, to_vertex, role)?;
        }
        Ok(())
    }

    /// Looks up the pin on `instance` that corresponds to `port`, by port
    /// name (the only join key a generic `Network` can offer without itself
    /// depending on the liberty model).
    fn pin_port_matches(&self, pin: PinId, cell: &crate::liberty::LibertyCell, port: crate::liberty::PortId) -> bool {
        let Some(lib_port) = cell.port(port) else { return false };
        self.network.pin_name(pin).ends_with(lib_port.name())
    }

    fn make_wire_edges(&mut self) -> Result<(), GraphError> {
        let mut seen_nets = std::collections::HashSet::new();
        let pins: Vec<PinId> = self.pin_vertex_map.keys().copied().collect();
        for pin in pins {
            let Some(net) = self.network.net(pin) else { continue };
            if !seen_nets.insert(net) {
                continue;
            }
            let net_pins = self.network.pins_on_net(net);
            for &p in &net_pins {
                self.make_pin_vertices(p)?;
            }
            let drivers: Vec<PinId> =
                net_pins.iter().copied().filter(|p| self.network.direction(*p).is_output_like()).collect();
            for &drvr_pin in &drivers {
                let Some(drvr_vertex) = self.pin_drvr_vertex(drvr_pin) else { continue };
                for &load_pin in &net_pins {
                    if load_pin == drvr_pin {
                        continue;
                    }
                    let Some(load_vertex) = self.pin_load_vertex(load_pin) else { continue };
                    self.make_edge(drvr_vertex, load_vertex, EdgeRole::Wire)?;
                }
            }
        }
        Ok(())
    }

    fn collect_reg_clk_vertices(&mut self) {
        self.reg_clk_vertices =
            self.vertices.iter().filter(|(_, v)| v.is_reg_clk()).map(|(id, _)| id).collect();
    }

    // ---- edit operations -------------------------------------------------------

    pub fn make_edge(&mut self, from: ObjectId, to: ObjectId, role: EdgeRole) -> Result<ObjectId, GraphError> {
        if self.vertices.get(from).is_none() {
            return Err(GraphError::DanglingVertexReference { edge: ObjectId::NULL, vertex: from });
        }
        if self.vertices.get(to).is_none() {
            return Err(GraphError::DanglingVertexReference { edge: ObjectId::NULL, vertex: to });
        }
        let edge_id = self.edges.make().map_err(GraphError::Storage)?;
        let mut edge = Edge::new(from, to, role);

        let arc_count = edge.role().arc_count() as u32;
        if self.config.have_arc_delays {
            // Every AP's arc_delay_tables entry is `make`d in the same order
            // with the same arc_count, so each one's free list/bump pointer
            // stays in lockstep and they all hand back the identical id.
            let mut shared_id = ArrayId::NULL;
            for table in &mut self.arc_delay_tables {
                let id = table.make(arc_count).map_err(GraphError::Storage)?;
                debug_assert!(shared_id.is_null() || shared_id == id, "arc_delay_tables fell out of lockstep");
                shared_id = id;
            }
            edge.set_arc_delays(shared_id);
        }

        let to_vertex = self.vertices.get_mut(to).unwrap();
        let old_in_head = to_vertex.in_edges_head();
        edge.set_in_link(old_in_head);
        to_vertex.set_in_edges_head(edge_id);

        let from_vertex = self.vertices.get_mut(from).unwrap();
        let old_out_head = from_vertex.out_edges_head();
        edge.set_out_next(old_out_head);
        from_vertex.set_out_edges_head(edge_id);

        *self.edges.get_mut(edge_id).unwrap() = edge;
        if !old_out_head.is_null() {
            if let Some(next_edge) = self.edges.get_mut(old_out_head) {
                next_edge.set_out_prev(edge_id);
            }
        }
        Ok(edge_id)
    }

    /// Unlinks `edge_id` from both vertex edge lists and frees its arc-delay
    /// storage.
    pub fn delete_edge(&mut self, edge_id: ObjectId) -> Result<(), GraphError> {
        let edge = self.edges.get(edge_id).cloned().ok_or(GraphError::ForeignEdge)?;

        self.unlink_in_edge(edge.to(), edge_id);
        self.unlink_out_edge(edge.from(), edge_id);

        if self.config.have_arc_delays {
            let arc_count = edge.role().arc_count() as u32;
            if let Some(id) = edge.arc_delays() {
                for table in &mut self.arc_delay_tables {
                    table.destroy(id, arc_count);
                }
            }
        }
        self.edges.destroy(edge_id);
        Ok(())
    }

    fn unlink_in_edge(&mut self, vertex: ObjectId, edge_id: ObjectId) {
        let head = self.vertices.get(vertex).map(|v| v.in_edges_head()).unwrap_or(ObjectId::NULL);
        if head == edge_id {
            let next = self.edges.get(edge_id).map(|e| e.in_link()).unwrap_or(ObjectId::NULL);
            if let Some(v) = self.vertices.get_mut(vertex) {
                v.set_in_edges_head(next);
            }
            return;
        }
        let mut cur = head;
        while !cur.is_null() {
            let next = self.edges.get(cur).map(|e| e.in_link()).unwrap_or(ObjectId::NULL);
            if next == edge_id {
                let skip_to = self.edges.get(edge_id).map(|e| e.in_link()).unwrap_or(ObjectId::NULL);
                if let Some(e) = self.edges.get_mut(cur) {
                    e.set_in_link(skip_to);
                }
                return;
            }
            cur = next;
        }
    }

    fn unlink_out_edge(&mut self, vertex: ObjectId, edge_id: ObjectId) {
        let (prev, next) = self
            .edges
            .get(edge_id)
            .map(|e| (e.out_prev(), e.out_next()))
            .unwrap_or((ObjectId::NULL, ObjectId::NULL));
        if prev.is_null() {
            if let Some(v) = self.vertices.get_mut(vertex) {
                v.set_out_edges_head(next);
            }
        } else if let Some(e) = self.edges.get_mut(prev) {
            e.set_out_next(next);
        }
        if !next.is_null() {
            if let Some(e) = self.edges.get_mut(next) {
                e.set_out_prev(prev);
            }
        }
    }

    /// Unlinks then destroys all incident edges, then deallocates the
    /// vertex's arrival/prev-paths arrays and the vertex itself.
    pub fn delete_vertex(&mut self, vertex: ObjectId) -> Result<(), GraphError> {
        let in_edges: Vec<ObjectId> = self.in_edges(vertex).collect();
        for e in in_edges {
            self.delete_edge(e)?;
        }
        let out_edges: Vec<ObjectId> = self.out_edges(vertex).collect();
        for e in out_edges {
            self.delete_edge(e)?;
        }
        self.vertices.destroy(vertex);
        Ok(())
    }

    // ---- slew / arc-delay storage ----------------------------------------------

    pub fn slew(&self, vertex: ObjectId, rf_index: usize, ap: usize) -> Option<Slew> {
        let rf_count = self.config.slew_model.rf_count().max(1) as usize;
        self.slew_tables.get(ap).and_then(|table| {
            let id = ArrayId(vertex.raw() * rf_count as u32 + rf_index as u32);
            table.element(id).copied()
        })
    }

    pub fn set_slew(&mut self, vertex: ObjectId, rf_index: usize, ap: usize, value: Slew) {
        let rf_count = self.config.slew_model.rf_count().max(1) as usize;
        let ap_count = self.slew_tables.len();
        let id = ArrayId(vertex.raw() * rf_count as u32 + rf_index as u32);
        if let Some(table) = self.slew_tables.get_mut(ap) {
            table.ensure_id(id);
            if let Some(slot) = table.element_mut(id) {
                *slot = value;
            }
        }
        if let Some(v) = self.vertices.get_mut(vertex) {
            v.set_slew_annotated(rf_index, ap, ap_count, true);
        }
    }

    pub fn arc_delay(&self, edge_id: ObjectId, arc_index: usize, ap: usize) -> Option<Delay> {
        let edge = self.edges.get(edge_id)?;
        let id = edge.arc_delays()?;
        let count = edge.role().arc_count() as u32;
        self.arc_delay_tables.get(ap)?.get(id, count)?.get(arc_index).copied()
    }

    pub fn set_arc_delay(&mut self, edge_id: ObjectId, arc_index: usize, ap: usize, value: Delay) {
        let Some(edge) = self.edges.get(edge_id) else { return };
        let Some(id) = edge.arc_delays() else { return };
        let count = edge.role().arc_count() as u32;
        if let Some(table) = self.arc_delay_tables.get_mut(ap) {
            if let Some(slice) = table.get_mut(id, count) {
                if let Some(slot) = slice.get_mut(arc_index) {
                    *slot = value;
                }
            }
        }
    }

    /// Resets every vertex's slew-annotated bitmap and clears the annotated
    /// flag on every edge with arc-delay storage.
    pub fn remove_delay_slew_annotations(&mut self) {
        let ids: Vec<ObjectId> = self.vertices.iter().map(|(id, _)| id).collect();
        for id in ids {
            if let Some(v) = self.vertices.get_mut(id) {
                v.clear_slew_annotations();
            }
        }
    }

    // ---- levelization -----------------------------------------------------------

    /// White/gray/black DFS-based topological numbering (SPEC_FULL §4.E
    /// expansion): `level` increments on every forward traversal of a
    /// non-disabled edge; an edge that would close a cycle (`to` is gray) is
    /// marked `is_disabled_loop` instead of being followed.
    pub fn levelize(&mut self) {
        let ids: Vec<ObjectId> = self.vertices.iter().map(|(id, _)| id).collect();
        for id in &ids {
            if let Some(v) = self.vertices.get_mut(*id) {
                v.set_color(Color::White);
                v.set_level(0);
            }
        }
        for id in ids {
            if self.vertices.get(id).map(|v| v.color() == Color::White).unwrap_or(false) {
                self.levelize_dfs(id);
            }
        }
    }

    fn levelize_dfs(&mut self, vertex: ObjectId) {
        if let Some(v) = self.vertices.get_mut(vertex) {
            v.set_color(Color::Gray);
        }
        let out_edges: Vec<ObjectId> = self.out_edges(vertex).collect();
        for edge_id in out_edges {
            let Some(edge) = self.edges.get(edge_id) else { continue };
            if !edge.is_enabled() {
                continue;
            }
            let to = edge.to();
            match self.vertices.get(to).map(|v| v.color()) {
                Some(Color::Gray) => {
                    if let Some(e) = self.edges.get_mut(edge_id) {
                        e.set_is_disabled_loop(true);
                    }
                }
                Some(Color::White) => {
                    let from_level = self.vertices.get(vertex).map(|v| v.level()).unwrap_or(0);
                    if let Some(to_vertex) = self.vertices.get_mut(to) {
                        to_vertex.set_level(to_vertex.level().max(from_level + 1));
                    }
                    self.levelize_dfs(to);
                }
                Some(Color::Black) => {
                    let from_level = self.vertices.get(vertex).map(|v| v.level()).unwrap_or(0);
                    if let Some(to_vertex) = self.vertices.get_mut(to) {
                        to_vertex.set_level(to_vertex.level().max(from_level + 1));
                    }
                }
                None => {}
            }
        }
        if let Some(v) = self.vertices.get_mut(vertex) {
            v.set_color(Color::Black);
        }
    }
}

struct InEdgeIter<'g, 'n, N: Network> {
    graph: &'g Graph<'n, N>,
    next: ObjectId,
}

impl<'g, 'n, N: Network> Iterator for InEdgeIter<'g, 'n, N> {
    type Item = ObjectId;

    fn next(&mut self) -> Option<ObjectId> {
        if self.next.is_null() {
            return None;
        }
        let current = self.next;
        self.next = self.graph.edges.get(current).map(|e| e.in_link()).unwrap_or(ObjectId::NULL);
        Some(current)
    }
}

struct OutEdgeIter<'g, 'n, N: Network> {
    graph: &'g Graph<'n, N>,
    next: ObjectId,
}

impl<'g, 'n, N: Network> Iterator for OutEdgeIter<'g, 'n, N> {
    type Item = ObjectId;

    fn next(&mut self) -> Option<ObjectId> {
        if self.next.is_null() {
            return None;
        }
        let current = self.next;
        self.next = self.graph.edges.get(current).map(|e| e.out_next()).unwrap_or(ObjectId::NULL);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GraphConfig, SlewModel};
    use crate::liberty::{LibertyCell, PortDirection, TimingRole};
    use crate::network::{InstanceId, NetId, Network, PinId};
    use std::cell::RefCell;
    use std::collections::HashMap as StdHashMap;

    /// Minimal in-memory `Network` double: one inverter instance `U1` wired
    /// `IN -> a -> U1/A`, `U1/Y -> y -> OUT`. `IN`/`OUT` are primary ports, so
    /// (viewed from inside the block, as `Network` always is) `IN` is a
    /// driver and `OUT` a load, the reverse of their external directions.
    struct TestNetwork {
        cells: StdHashMap<String, LibertyCell>,
        instances: Vec<InstanceId>,
        pins: StdHashMap<InstanceId, Vec<PinId>>,
        pin_names: StdHashMap<PinId, String>,
        pin_dirs: StdHashMap<PinId, PortDirection>,
        pin_net: StdHashMap<PinId, NetId>,
        net_pins: StdHashMap<NetId, Vec<PinId>>,
        pin_inst: StdHashMap<PinId, InstanceId>,
        next_id: RefCell<u32>,
    }

    impl TestNetwork {
        fn new() -> Self {
            let mut cell = LibertyCell::new("INV");
            let a = cell.make_port("A", PortDirection::Input);
            let y = cell.make_port("Y", PortDirection::Output);
            let port_expr = cell.func_exprs_mut().make_port(a);
            let not_expr = cell.func_exprs_mut().make_not(port_expr);
            cell.port_mut(y).unwrap().set_function(not_expr);
            cell.add_arc_set(
                crate::liberty::ArcSetKey { from: Some(a), to: Some(y), role: TimingRole::Combinational, when_class: None, sdf_cond: None, mode: None },
                crate::liberty::TimingArcSet::new(Some(a), Some(y), TimingRole::Combinational),
            );
            cell.finish();

            let mut cells = StdHashMap::new();
            cells.insert("INV".to_string(), cell);

            let mut net = TestNetwork {
                cells,
                instances: Vec::new(),
                pins: StdHashMap::new(),
                pin_names: StdHashMap::new(),
                pin_dirs: StdHashMap::new(),
                pin_net: StdHashMap::new(),
                net_pins: StdHashMap::new(),
                pin_inst: StdHashMap::new(),
                next_id: RefCell::new(1),
            };

            let u1 = net.fresh_instance();
            let pin_a = net.fresh_pin("U1/A", PortDirection::Input, u1);
            let pin_y = net.fresh_pin("U1/Y", PortDirection::Output, u1);
            net.instances.push(u1);
            net.pins.insert(u1, vec![pin_a, pin_y]);

            let in_pin = net.fresh_pin("IN", PortDirection::Output, u1);
            let out_pin = net.fresh_pin("OUT", PortDirection::Input, u1);

            let net_a = net.fresh_net();
            net.connect(net_a, vec![in_pin, pin_a]);
            let net_y = net.fresh_net();
            net.connect(net_y, vec![pin_y, out_pin]);

            net
        }

        fn fresh_instance(&self) -> InstanceId {
            let mut n = self.next_id.borrow_mut();
            let id = *n;
            *n += 1;
            InstanceId(ObjectId(id))
        }

        fn fresh_net(&self) -> NetId {
            let mut n = self.next_id.borrow_mut();
            let id = *n;
            *n += 1;
            NetId(ObjectId(id))
        }

        fn fresh_pin(&mut self, name: &str, dir: PortDirection, inst: InstanceId) -> PinId {
            let mut n = self.next_id.borrow_mut();
            let id = *n;
            *n += 1;
            drop(n);
            let pin = PinId(ObjectId(id));
            self.pin_names.insert(pin, name.to_string());
            self.pin_dirs.insert(pin, dir);
            self.pin_inst.insert(pin, inst);
            pin
        }

        fn connect(&mut self, net: NetId, pins: Vec<PinId>) {
            for p in &pins {
                self.pin_net.insert(*p, net);
            }
            self.net_pins.insert(net, pins);
        }
    }

    impl Network for TestNetwork {
        fn leaf_instances(&self) -> Vec<InstanceId> {
            self.instances.clone()
        }

        fn pins(&self, instance: InstanceId) -> Vec<PinId> {
            self.pins.get(&instance).cloned().unwrap_or_default()
        }

        fn net(&self, pin: PinId) -> Option<NetId> {
            self.pin_net.get(&pin).copied()
        }

        fn pins_on_net(&self, net: NetId) -> Vec<PinId> {
            self.net_pins.get(&net).cloned().unwrap_or_default()
        }

        fn instance(&self, pin: PinId) -> Option<InstanceId> {
            self.pin_inst.get(&pin).copied()
        }

        fn cell(&self, _instance: InstanceId) -> Option<&LibertyCell> {
            self.cells.get("INV")
        }

        fn direction(&self, pin: PinId) -> PortDirection {
            self.pin_dirs.get(&pin).copied().unwrap_or_default()
        }

        fn is_hierarchical(&self, _instance: InstanceId) -> bool {
            false
        }

        fn pin_name(&self, pin: PinId) -> String {
            self.pin_names.get(&pin).cloned().unwrap_or_default()
        }
    }

    #[test]
    fn builds_vertices_and_wire_and_instance_edges() {
        let net = TestNetwork::new();
        let mut graph = Graph::new(&net, GraphConfig { dcalc_ap_count: 1, slew_model: SlewModel::RiseFall, have_arc_delays: true });
        graph.build().unwrap();
        assert!(graph.pin_vertex_map.len() >= 2);

        // U1/A should have one incoming wire edge (from IN) plus feed an
        // instance edge out to U1/Y.
        let pin_a = *net.pin_names.iter().find(|(_, n)| n.as_str() == "U1/A").unwrap().0;
        let a_vertex = graph.pin_load_vertex(pin_a).unwrap();
        assert_eq!(graph.in_edges(a_vertex).count(), 1);
        assert_eq!(graph.out_edges(a_vertex).count(), 1);
    }

    #[test]
    fn levelize_orders_combinational_path() {
        let net = TestNetwork::new();
        let mut graph = Graph::new(&net, GraphConfig::default());
        graph.build().unwrap();
        graph.levelize();

        let pin_a = *net.pin_names.iter().find(|(_, n)| n.as_str() == "U1/A").unwrap().0;
        let pin_y = *net.pin_names.iter().find(|(_, n)| n.as_str() == "U1/Y").unwrap().0;
        let a_vertex = graph.pin_load_vertex(pin_a).unwrap();
        let y_vertex = graph.pin_load_vertex(pin_y).unwrap();
        assert!(graph.vertex(y_vertex).unwrap().level() > graph.vertex(a_vertex).unwrap().level());
    }

    #[test]
    fn slew_round_trips() {
        let net = TestNetwork::new();
        let mut graph = Graph::new(&net, GraphConfig::default());
        graph.build().unwrap();
        let pin_a = *net.pin_names.iter().find(|(_, n)| n.as_str() == "U1/A").unwrap().0;
        let a_vertex = graph.pin_load_vertex(pin_a).unwrap();
        graph.set_slew(a_vertex, 0, 0, 1.5e-10);
        assert!((graph.slew(a_vertex, 0, 0).unwrap() - 1.5e-10).abs() < 1e-20);
    }

    #[test]
    fn delete_edge_unlinks_from_both_lists() {
        let net = TestNetwork::new();
        let mut graph = Graph::new(&net, GraphConfig::default());
        graph.build().unwrap();
        let pin_a = *net.pin_names.iter().find(|(_, n)| n.as_str() == "U1/A").unwrap().0;
        let a_vertex = graph.pin_load_vertex(pin_a).unwrap();
        let edge_id = graph.in_edges(a_vertex).next().unwrap();
        graph.delete_edge(edge_id).unwrap();
        assert_eq!(graph.in_edges(a_vertex).count(), 0);
    }
}
