//! Small containers shared by the puzzle solutions
//!
//! - [`Set`]: membership-only hash set
//! - [`Queue`]: FIFO queue for breadth-first traversal
//! - [`PriorityQueue`]: min-priority queue for cost-ordered search

mod priority_queue;
mod queue;
mod set;

pub use priority_queue::PriorityQueue;
pub use queue::Queue;
pub use set::Set;
