//! In-memory mixed multigraph primitives with a typed edge-iteration engine.
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod bench_utils;
pub mod bunch;
pub mod classify;
pub mod errors;
pub mod graph;
pub mod iter;
pub mod structure;
pub mod types;

pub use crate::bunch::NodeBunch;
pub use crate::classify::EdgeFilter;
pub use crate::errors::StructGraphError;
pub use crate::graph::Graph;
pub use crate::iter::EdgeArg;
pub use crate::types::{Direction, EdgeRecord, GraphOptions, IndexKind};
