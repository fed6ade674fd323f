use num_traits::{One, Zero};
use tracing::trace;

use crate::error::{CasError, Result};
use crate::expr::{Expr, Product, fraction};
use crate::rational::Rational;
use crate::simplify::normalize;

/// Rearrange `expr == 0` into `name == E` and return `E`, which does not mention `name`.
///
/// Only linear occurrences are handled: every term containing `name` must hold it exactly
/// once as a bare variable, and once `name` is divided out the remaining coefficient must
/// reduce to a nonzero constant. Anything else (powers, products with other unknowns,
/// `name` inside a quotient) is reported as [`CasError::UnsupportedIsolation`] rather than
/// guessed at.
pub fn solve_for_variable(expr: &Expr, name: &str) -> Result<Expr> {
    let mut addends = match normalize(expr.clone()) {
        Expr::Sum(addends) => addends,
        other => vec![other],
    };
    let mut right = Expr::zero();

    loop {
        let (kept, moved): (Vec<Expr>, Vec<Expr>) =
            addends.into_iter().partition(|addend| addend.has_variable(name));
        if kept.is_empty() {
            return Err(CasError::VariableNotFound(name.to_string()));
        }
        let progress = !moved.is_empty();

        let minus_one = -Rational::one();
        let mut right_parts = Vec::with_capacity(moved.len() + 1);
        right_parts.push(right);
        right_parts.extend(moved.into_iter().map(|term| term.scaled(&minus_one)));
        right = normalize(Expr::Sum(right_parts));
        let left = normalize(Expr::Sum(kept));
        trace!(variable = name, %left, %right, "isolating");

        if let Some(coefficient) = linear_coefficient(&left, name) {
            return Ok(normalize(fraction(right, coefficient)));
        }

        match left {
            Expr::Sum(next) if progress => addends = next,
            left => {
                return Err(CasError::UnsupportedIsolation {
                    variable: name.to_string(),
                    expr: left.to_string(),
                });
            }
        }
    }
}

/// The constant `c` with `left == c * name`, if `left` has that shape.
fn linear_coefficient(left: &Expr, name: &str) -> Option<Expr> {
    let coefficient = normalize(divide_by_variable(left, name)?);
    let nonzero = coefficient.as_constant().is_some_and(|value| !value.is_zero());
    nonzero.then_some(coefficient)
}

fn divide_by_variable(expr: &Expr, name: &str) -> Option<Expr> {
    match expr {
        Expr::Sum(addends) => addends
            .iter()
            .map(|addend| divide_by_variable(addend, name))
            .collect::<Option<Vec<_>>>()
            .map(Expr::Sum),
        Expr::Product(p) => {
            let occurrences = p.variables.iter().filter(|v| *v == name).count();
            if occurrences != 1 || p.factors.iter().any(|f| f.has_variable(name)) {
                return None;
            }
            let variables = p.variables.iter().filter(|v| *v != name).cloned().collect();
            Some(Expr::Product(Product::new(
                p.constant.clone(),
                variables,
                p.factors.clone(),
            )))
        }
        Expr::Fraction(..) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{integer, product, sub, sum, var};

    #[test]
    fn squared_variable_is_unsupported() {
        let expr = sub(product(vec![var("x"), var("x")]), integer(4));
        assert!(matches!(
            solve_for_variable(&expr, "x"),
            Err(CasError::UnsupportedIsolation { .. })
        ));
    }

    #[test]
    fn symbolic_coefficient_is_unsupported() {
        let expr = sub(product(vec![var("x"), var("y")]), integer(6));
        assert!(matches!(
            solve_for_variable(&expr, "x"),
            Err(CasError::UnsupportedIsolation { .. })
        ));
    }

    #[test]
    fn missing_variable_is_reported() {
        let expr = sum(vec![var("y"), integer(1)]);
        assert_eq!(
            solve_for_variable(&expr, "x"),
            Err(CasError::VariableNotFound("x".into()))
        );
    }
}
