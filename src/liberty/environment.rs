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

    liberty::environment.rs

    OperatingConditions: named PVT corner plus wireload-tree selector
    (SPEC_FULL §4.D.1). Named in the data model as part of `Library` but
    promoted to a first-class type here since the table engine's scale-factor
    computation (§4.C) and `Cell::scaled_cells` both index by it.

*/

#![allow(dead_code)]

use crate::table::scale_factor::Pvt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WireloadTree {
    WorstCase,
    BestCase,
    BalancedCase,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OperatingConditions {
    name: String,
    pvt: Pvt,
    wireload_tree: WireloadTree,
}

impl OperatingConditions {
    pub fn new(name: impl Into<String>, pvt: Pvt, wireload_tree: WireloadTree) -> Self {
        OperatingConditions { name: name.into(), pvt, wireload_tree }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pvt(&self) -> Pvt {
        self.pvt
    }

    pub fn wireload_tree(&self) -> WireloadTree {
        self.wireload_tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_pvt_and_tree() {
        let oc = OperatingConditions::new(
            "typical",
            Pvt { process: 1.0, voltage: 1.0, temperature: 25.0 },
            WireloadTree::BalancedCase,
        );
        assert_eq!(oc.name(), "typical");
        assert_eq!(oc.wireload_tree(), WireloadTree::BalancedCase);
    }
}
