pub mod geodesic;
pub mod loop_generator;
