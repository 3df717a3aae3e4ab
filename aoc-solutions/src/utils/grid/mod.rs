//! 2D grid addressing: points, vectors, headings and digit-cost grids

mod geom;
mod weighted;

pub use geom::{Direction, DirectionError, Point, Vector};
pub use weighted::{GridError, WeightedGrid};
