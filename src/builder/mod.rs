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

    builder::mod.rs

    Translating already-parsed liberty attributes into cell-model state
    (component F): `timing()` groups into arc sets, plus equivalent-cell
    discovery over a finished library. Liberty syntax parsing itself stays
    out of scope; these modules pick up once a front-end has identified a
    timing group's `timing_type` and operand ports.

*/

pub mod equiv_cells;
pub mod liberty_builder;

pub use equiv_cells::{cell_drive_resistance, cell_hash, cells_equivalent, find_equiv_classes};
pub use liberty_builder::{build_arc_set, finish_cell, TimingGroupInput, TimingType};
