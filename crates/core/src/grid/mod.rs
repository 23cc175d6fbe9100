//! Reservoir grid

pub mod grid3d;

pub use grid3d::Grid3D;
