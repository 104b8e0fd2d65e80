pub mod cancellation;
pub mod generate_points;
