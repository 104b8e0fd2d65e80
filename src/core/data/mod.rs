pub mod coord3;
pub mod lattice;
pub mod orbit;
pub mod point_buffer;
pub mod spherical;
