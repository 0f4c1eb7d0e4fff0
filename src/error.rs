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

    error.rs

    Error kinds for the storage substrate, the liberty builder, and the graph.
    Structural/fatal conditions (SPEC_FULL §7) surface as `Critical` variants
    instead of calling process::exit, since this is a library crate. Warnings
    never become `Err` values; they're logged via `log::warn!` and the caller
    substitutes a safe default and continues.

*/

use thiserror::Error;

/// A fatal, structural condition: an id resolved to nothing live, a capacity
/// bound was exceeded, or an invariant the rest of the crate assumes holds
/// was violated. Carries the small integer id the original's
/// `criticalError(id, msg)` call sites used so callers can correlate against
/// `Error.hh`-style documentation.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("critical error {id}: {msg}")]
pub struct Critical {
    pub id: u32,
    pub msg: &'static str,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("critical error {id}: {msg}")]
    Critical { id: u32, msg: &'static str },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibertyBuildError {
    #[error("cell '{cell}' is missing one or more threshold percentages")]
    MissingThresholds { cell: String },
    #[error("duplicate timing arc set for {from} -> {to} (role {role:?}); keeping the later definition")]
    DuplicateArcSet { from: String, to: String, role: crate::liberty::timing_arc::TimingRole },
    #[error("function expression for port '{port}' references an undefined port '{referenced}'")]
    UndefinedPortReference { port: String, referenced: String },
    #[error("operating conditions '{existing}' is already the library default; cannot also default to '{new}'")]
    DuplicateDefaultOperatingConditions { existing: String, new: String },
    #[error("{0}")]
    Critical(#[from] StorageError),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("edge {edge:?} references vertex {vertex:?}, which does not exist in this graph")]
    DanglingVertexReference { edge: crate::id::ObjectId, vertex: crate::id::ObjectId },
    #[error("attempted to annotate an edge not owned by this graph")]
    ForeignEdge,
    #[error("{0}")]
    Storage(#[from] StorageError),
}

/// Umbrella error for callers that cross component boundaries (e.g. a builder
/// driving both the liberty model and the graph).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StaError {
    #[error("{0}")]
    Critical(Critical),
    #[error("{0}")]
    Liberty(#[from] LibertyBuildError),
    #[error("{0}")]
    Graph(#[from] GraphError),
}

impl From<StorageError> for StaError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::Critical { id, msg } => StaError::Critical(Critical { id, msg }),
        }
    }
}
