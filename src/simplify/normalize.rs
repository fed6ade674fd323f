use std::collections::BTreeMap;

use crate::expr::{Expr, Product, fraction, product};
use crate::rational::Rational;
use num_traits::{One, Zero};

/// Distribution is not bounded; large products of sums grow combinatorially.
pub fn normalize(expr: Expr) -> Expr {
    match expr {
        Expr::Sum(addends) => normalize_sum(addends),
        Expr::Product(p) => normalize_product(p),
        Expr::Fraction(n, d) => normalize_fraction(*n, *d),
    }
}

pub fn canonical_key(expr: &Expr) -> String {
    expr.to_string()
}

fn normalize_sum(addends: Vec<Expr>) -> Expr {
    let mut constant = Rational::zero();
    let mut like_terms: BTreeMap<Expr, Rational> = BTreeMap::new();
    for addend in addends {
        match normalize(addend) {
            Expr::Sum(inner) => {
                for term in inner {
                    collect_term(term, &mut constant, &mut like_terms);
                }
            }
            term => collect_term(term, &mut constant, &mut like_terms),
        }
    }

    let mut terms: Vec<(String, Expr)> = like_terms
        .into_iter()
        .filter(|(_, coefficient)| !coefficient.is_zero())
        .map(|(monomial, coefficient)| {
            (canonical_key(&monomial), with_coefficient(monomial, coefficient))
        })
        .collect();
    terms.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut result = Vec::with_capacity(terms.len() + 1);
    if !constant.is_zero() {
        result.push(Expr::constant(constant));
    }
    result.extend(terms.into_iter().map(|(_, term)| term));

    if result.len() > 1 {
        Expr::Sum(result)
    } else {
        result.pop().unwrap_or_else(Expr::zero)
    }
}

fn collect_term(term: Expr, constant: &mut Rational, like_terms: &mut BTreeMap<Expr, Rational>) {
    let (coefficient, monomial) = split_coefficient(term);
    if monomial.is_one() {
        *constant += coefficient;
    } else {
        *like_terms.entry(monomial).or_insert_with(Rational::zero) += coefficient;
    }
}

fn split_coefficient(term: Expr) -> (Rational, Expr) {
    match term {
        Expr::Product(Product {
            constant,
            variables,
            factors,
        }) => (constant, product_expr(Rational::one(), variables, factors)),
        other => (Rational::one(), other),
    }
}

fn with_coefficient(monomial: Expr, coefficient: Rational) -> Expr {
    match monomial {
        Expr::Product(mut p) => {
            p.constant = coefficient;
            Expr::Product(p)
        }
        other if coefficient.is_one() => other,
        other => Expr::Product(Product::new(coefficient, Vec::new(), vec![other])),
    }
}

// Collapses `1 * f` to `f`.
fn product_expr(constant: Rational, variables: Vec<String>, mut factors: Vec<Expr>) -> Expr {
    if constant.is_zero() {
        return Expr::zero();
    }
    if constant.is_one() && variables.is_empty() && factors.len() == 1 {
        if let Some(single) = factors.pop() {
            return single;
        }
    }
    Expr::Product(Product::new(constant, variables, factors))
}

fn normalize_product(product: Product) -> Expr {
    let Product {
        mut constant,
        mut variables,
        factors,
    } = product;
    if constant.is_zero() {
        return Expr::zero();
    }

    let mut others = Vec::with_capacity(factors.len());
    let mut sums = Vec::new();
    for factor in factors {
        match normalize(factor) {
            Expr::Product(inner) => {
                constant *= inner.constant;
                variables.extend(inner.variables);
                others.extend(inner.factors);
            }
            Expr::Sum(addends) => sums.push(addends),
            fraction => others.push(fraction),
        }
    }
    if constant.is_zero() {
        return Expr::zero();
    }

    let mut sums = sums.into_iter();
    if let Some(addends) = sums.next() {
        others.extend(sums.map(Expr::Sum));
        let distributed = addends
            .into_iter()
            .map(|addend| {
                let mut factors = others.clone();
                factors.push(addend);
                Expr::Product(Product::new(constant.clone(), variables.clone(), factors))
            })
            .collect();
        return normalize(Expr::Sum(distributed));
    }

    if cancel_against_denominators(&mut variables, &mut others) {
        return normalize(Expr::Product(Product::new(constant, variables, others)));
    }

    variables.sort();
    sort_canonically(&mut others);
    product_expr(constant, variables, others)
}

fn pure_variables(expr: &Expr) -> Option<&[String]> {
    match expr {
        Expr::Product(p) if p.constant.is_one() && p.factors.is_empty() => {
            (!p.variables.is_empty()).then_some(p.variables.as_slice())
        }
        _ => None,
    }
}

fn cancel_names(variables: &[String], remaining: &mut Vec<String>) -> Option<Vec<String>> {
    let mut kept = Vec::with_capacity(variables.len());
    for name in variables {
        match remaining.iter().position(|d| d == name) {
            Some(index) => {
                remaining.remove(index);
            }
            None => kept.push(name.clone()),
        }
    }
    (kept.len() < variables.len()).then_some(kept)
}

// x * (n / (x*y)) -> n / y
fn cancel_against_denominators(variables: &mut Vec<String>, factors: &mut [Expr]) -> bool {
    let mut changed = false;
    for factor in factors.iter_mut() {
        let Expr::Fraction(numerator, denominator) = factor else {
            continue;
        };
        let Some(names) = pure_variables(denominator) else {
            continue;
        };
        let mut remaining = names.to_vec();
        let Some(kept) = cancel_names(variables, &mut remaining) else {
            continue;
        };
        *variables = kept;
        let denominator = Expr::Product(Product::new(Rational::one(), remaining, Vec::new()));
        *factor = fraction((**numerator).clone(), denominator);
        changed = true;
    }
    changed
}

fn cancel_common_variables(numerator: &Expr, denominator: &Expr) -> Option<(Expr, Expr)> {
    let Expr::Product(p) = numerator else {
        return None;
    };
    let mut remaining = pure_variables(denominator)?.to_vec();
    let kept = cancel_names(&p.variables, &mut remaining)?;
    Some((
        Expr::Product(Product::new(p.constant.clone(), kept, p.factors.clone())),
        Expr::Product(Product::new(Rational::one(), remaining, Vec::new())),
    ))
}

fn sort_canonically(factors: &mut [Expr]) {
    factors.sort_by_cached_key(|factor| (canonical_key(factor), factor.clone()));
}

fn normalize_fraction(numerator: Expr, denominator: Expr) -> Expr {
    let numerator = normalize(numerator);
    let denominator = normalize(denominator);
    if numerator.is_zero() {
        return Expr::zero();
    }
    if let Some(value) = denominator.as_constant() {
        // A zero denominator stays put; evaluation reports it.
        return match value.recip() {
            Ok(inverse) => normalize(numerator.scaled(&inverse)),
            Err(_) => fraction(numerator, denominator),
        };
    }

    match (numerator, denominator) {
        (Expr::Sum(addends), denominator) => normalize(Expr::Sum(
            addends
                .into_iter()
                .map(|addend| fraction(addend, denominator.clone()))
                .collect(),
        )),
        (Expr::Fraction(inner_num, inner_den), denominator) => {
            normalize(fraction(*inner_num, product(vec![*inner_den, denominator])))
        }
        (numerator, Expr::Fraction(inner_num, inner_den)) => {
            normalize(fraction(product(vec![numerator, *inner_den]), *inner_num))
        }
        (numerator, denominator) => match cancel_common_variables(&numerator, &denominator) {
            Some((numerator, denominator)) => normalize(fraction(numerator, denominator)),
            None => pull_coefficients(numerator, denominator),
        },
    }
}

// (a*n) / (b*d) -> a/b * (n/d)
fn pull_coefficients(numerator: Expr, denominator: Expr) -> Expr {
    let (num_coeff, numerator) = split_coefficient(numerator);
    let (den_coeff, denominator) = split_coefficient(denominator);
    if num_coeff.is_one() && den_coeff.is_one() {
        return fraction(numerator, denominator);
    }
    match num_coeff.checked_div(&den_coeff) {
        Ok(scale) => normalize(fraction(numerator, denominator).scaled(&scale)),
        Err(_) => fraction(numerator, denominator),
    }
}
