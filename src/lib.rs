pub mod backend_config;
pub mod blob;
pub mod frame;
pub mod geometry_utils;
pub mod session;
pub mod systems;

/// A position on the sensor grid as (row, col). Fractional values occur
/// once blobs get merged into midpoints.
pub type GridPoint = (f32, f32);
