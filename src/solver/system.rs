use std::borrow::Cow;
use std::collections::{BTreeMap, VecDeque};

use num_traits::Zero;
use tracing::{debug, trace};

use crate::error::{CasError, Result};
use crate::expr::{Assignment, Expr};
use crate::rational::Rational;
use crate::simplify::{Bindings, normalize, replace};

use super::isolate::solve_for_variable;

pub type Solution = BTreeMap<String, Rational>;

/// Queue steps [`find_solution`] takes before giving up.
pub const DEFAULT_STEP_LIMIT: usize = 4096;

/// Find values making every expression in `equations` equal to zero.
///
/// Variables are eliminated one at a time: each equation is rewritten with the bindings
/// found so far, its first free variable is isolated, and the new binding is substituted
/// into the earlier ones. Inconsistent and under-determined systems are reported through
/// [`CasError::is_unsolvable`]; shapes the isolation step cannot handle through
/// [`CasError::is_unsupported`].
pub fn find_solution(equations: &[Expr]) -> Result<Solution> {
    find_solution_with_limit(equations, DEFAULT_STEP_LIMIT)
}

pub fn find_solution_with_limit(equations: &[Expr], step_limit: usize) -> Result<Solution> {
    let mut queue: VecDeque<Expr> = equations.iter().cloned().collect();
    let mut bindings = Bindings::new();
    let mut steps = 0;

    while let Some(equation) = queue.pop_front() {
        steps += 1;
        if steps > step_limit {
            return Err(CasError::StepLimit(step_limit));
        }

        let current = normalize(replace(&equation, &bindings).into_owned());
        trace!(step = steps, equation = %current, "dequeued");

        let Some(name) = current.first_variable().map(str::to_owned) else {
            ensure_zero(&current)?;
            continue;
        };

        let value = solve_for_variable(&current, &name)?;
        debug!(variable = %name, %value, "bound");
        bindings = rebind(bindings, &name, &value);
        bindings.insert(name, value);
        queue.push_back(current);
    }

    resolve(bindings)
}

fn ensure_zero(equation: &Expr) -> Result<()> {
    match equation.eval(&Assignment::new()) {
        Ok(value) if value.is_zero() => Ok(()),
        _ => {
            debug!(%equation, "inconsistent");
            Err(CasError::Inconsistent(equation.to_string()))
        }
    }
}

fn rebind(bindings: Bindings, name: &str, value: &Expr) -> Bindings {
    let single = Bindings::from([(name.to_string(), value.clone())]);
    bindings
        .into_iter()
        .map(|(var, expr)| {
            let updated = match replace(&expr, &single) {
                Cow::Borrowed(_) => None,
                Cow::Owned(replaced) => Some(normalize(replaced)),
            };
            (var, updated.unwrap_or(expr))
        })
        .collect()
}

fn resolve(bindings: Bindings) -> Result<Solution> {
    bindings
        .into_iter()
        .map(|(name, expr)| {
            if let Some(free) = expr.first_variable() {
                return Err(CasError::Underdetermined(free.to_string()));
            }
            Ok((name, expr.eval(&Assignment::new())?))
        })
        .collect()
}
