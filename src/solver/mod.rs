//! Variable isolation, equation-system elimination and exact linear solving.

mod isolate;
mod linear;
mod system;

pub use isolate::solve_for_variable;
pub use linear::solve_linear_system;
pub use system::{DEFAULT_STEP_LIMIT, Solution, find_solution, find_solution_with_limit};
