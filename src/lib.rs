//! Exact rational symbolic algebra: canonical sum-of-products expressions, single
//! variable isolation, elimination over systems of equations and an exact linear solver.

pub mod error;
pub mod expr;
pub mod format;
pub mod parser;
pub mod rational;
pub mod simplify;
pub mod solver;

#[cfg(test)]
mod proptests;

pub use error::{CasError, Result};
pub use expr::{
    Assignment, Atom, Expr, Op, Product, fraction, integer, neg, product, sub, sum, var,
};
pub use format::{pretty, pretty_solution};
pub use parser::{parse_equation, parse_expr};
pub use rational::{Rational, rational};
pub use simplify::{Bindings, canonical_key, normalize, replace, substitute};
pub use solver::{
    DEFAULT_STEP_LIMIT, Solution, find_solution, find_solution_with_limit, solve_for_variable,
    solve_linear_system,
};
