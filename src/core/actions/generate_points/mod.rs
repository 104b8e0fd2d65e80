pub mod generate_points;
pub mod generate_points_parallel_rayon;
pub mod ports;
