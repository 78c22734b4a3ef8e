//! Adapter implementations of the board ports.

pub mod geometry;
pub mod memory;
