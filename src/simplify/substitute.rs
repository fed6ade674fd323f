use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::expr::{Expr, Product};

/// Replacement expressions keyed by variable name.
pub type Bindings = BTreeMap<String, Expr>;

/// Replace every variable named in `substitutions` throughout `expr`.
///
/// Single pass: variables inside the inserted expressions are left alone, and the
/// result is not normalized. Returns `Cow::Borrowed(expr)` when nothing was replaced.
pub fn replace<'a>(expr: &'a Expr, substitutions: &Bindings) -> Cow<'a, Expr> {
    match expr {
        Expr::Sum(addends) => match replace_all(addends, substitutions) {
            Some(addends) => Cow::Owned(Expr::Sum(addends)),
            None => Cow::Borrowed(expr),
        },
        Expr::Product(p) => {
            let replaced_factors = replace_all(&p.factors, substitutions);
            let hit = p.variables.iter().any(|v| substitutions.contains_key(v));
            if !hit && replaced_factors.is_none() {
                return Cow::Borrowed(expr);
            }
            let mut factors = replaced_factors.unwrap_or_else(|| p.factors.clone());
            let mut variables = Vec::with_capacity(p.variables.len());
            for name in &p.variables {
                match substitutions.get(name) {
                    Some(replacement) => factors.push(replacement.clone()),
                    None => variables.push(name.clone()),
                }
            }
            Cow::Owned(Expr::Product(Product::new(
                p.constant.clone(),
                variables,
                factors,
            )))
        }
        Expr::Fraction(n, d) => {
            let numerator = replace(n, substitutions);
            let denominator = replace(d, substitutions);
            if matches!(numerator, Cow::Borrowed(_)) && matches!(denominator, Cow::Borrowed(_)) {
                Cow::Borrowed(expr)
            } else {
                Cow::Owned(Expr::Fraction(
                    numerator.into_owned().boxed(),
                    denominator.into_owned().boxed(),
                ))
            }
        }
    }
}

fn replace_all(items: &[Expr], substitutions: &Bindings) -> Option<Vec<Expr>> {
    let replaced: Vec<Cow<'_, Expr>> = items.iter().map(|i| replace(i, substitutions)).collect();
    if replaced.iter().all(|item| matches!(item, Cow::Borrowed(_))) {
        None
    } else {
        Some(replaced.into_iter().map(Cow::into_owned).collect())
    }
}

/// Substitute variable `var` with `replacement` throughout `expr`.
pub fn substitute(expr: &Expr, var: &str, replacement: &Expr) -> Expr {
    let substitutions = Bindings::from([(var.to_string(), replacement.clone())]);
    replace(expr, &substitutions).into_owned()
}
