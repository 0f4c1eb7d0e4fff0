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

    liberty::mod.rs

    The liberty cell model (component D): ports, timing arc sets, sequentials,
    statetables and operating conditions, gathered under a cell and a library
    (SPEC_FULL §3, §4.D).

*/

pub mod cell;
pub mod environment;
pub mod library;
pub mod port;
pub mod power;
pub mod sequential;
pub mod statetable;
pub mod timing_arc;

pub use cell::LibertyCell;
pub use environment::{OperatingConditions, WireloadTree};
pub use library::Library;
pub use port::{LibertyPort, PgPin, PortDirection, PortId, PortShape};
pub use power::{InternalPower, LeakagePower};
pub use sequential::{ClearPresetOutput, Sequential, SequentialKind};
pub use statetable::{InputValue, InternalValue, Statetable, StatetableRow};
pub use timing_arc::{ArcSetKey, TimingArc, TimingArcSet, TimingRole};
