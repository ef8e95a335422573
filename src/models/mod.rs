pub mod assignment;
pub mod block;
pub mod color;
pub mod shift;
pub mod solve_result;
