//! Helpers shared across puzzle solutions

pub mod collections;
pub mod grid;
pub mod input;
pub mod search;

#[cfg(test)]
pub(crate) mod testing;
