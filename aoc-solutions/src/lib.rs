//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions live under `my_solutions`, organized by year, and register
//! themselves with the solver framework through `AutoRegisterSolver`.
//! `utils` holds the containers, grid types and searches they share.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
