//! Graph searches over puzzle state spaces
//!
//! - [`breadth_first`]: edge-count distances with a FIFO [`Queue`](crate::utils::collections::Queue)
//! - [`constrained`]: uniform-cost search on a [`WeightedGrid`](crate::utils::grid::WeightedGrid)
//!   with limits on straight-line run length

mod bfs;
pub mod constrained;

pub use bfs::breadth_first;
pub use constrained::{RunLimits, RunLimitsError, SearchOutcome, SearchState, shortest_path};
