//! plot-graph: reactive chart engine over named numeric datasets.
//!
//! A `StateStore` owns the datasets and the selection state, the dispatch
//! layer turns its change notifications into synchronous redraws, and one
//! frame builder per view mode emits backend-agnostic draw primitives.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{PlotEngine, PlotEngineConfig};
pub use error::{ChartError, ChartResult};
