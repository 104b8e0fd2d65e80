pub mod ply;
pub mod raw;
