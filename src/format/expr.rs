use crate::expr::{Expr, Product};
use crate::rational::Rational;
use num_traits::One;

pub fn pretty(expr: &Expr) -> String {
    match expr {
        Expr::Sum(addends) => {
            let mut out = String::new();
            for (i, addend) in addends.iter().enumerate() {
                let (negative, body) = match addend {
                    Expr::Product(p) if p.constant.is_negative() => {
                        (true, product_body(&-&p.constant, p))
                    }
                    Expr::Product(p) => (false, product_body(&p.constant, p)),
                    other => (false, pretty(other)),
                };
                match (i, negative) {
                    (0, true) => out.push('-'),
                    (0, false) => {}
                    (_, true) => out.push_str(" - "),
                    (_, false) => out.push_str(" + "),
                }
                out.push_str(&body);
            }
            out
        }
        Expr::Product(p) => product_body(&p.constant, p),
        Expr::Fraction(n, d) => format!("{} / {}", operand(n), operand(d)),
    }
}

fn product_body(constant: &Rational, p: &Product) -> String {
    let mut parts: Vec<String> = p.variables.clone();
    parts.extend(p.factors.iter().map(operand));
    if parts.is_empty() {
        return constant.to_string();
    }
    let body = parts.join("*");
    if constant.is_one() {
        body
    } else if (-constant).is_one() {
        format!("-{body}")
    } else {
        format!("{constant}*{body}")
    }
}

/// Render a factor, bracketing anything that is not a single atom.
fn operand(expr: &Expr) -> String {
    let atomic = match expr {
        Expr::Product(p) => {
            let parts = p.variables.len() + p.factors.len();
            parts == 0 && p.constant.is_integer() && !p.constant.is_negative()
                || parts == 1 && p.factors.is_empty() && p.constant.is_one()
        }
        _ => false,
    };
    if atomic {
        pretty(expr)
    } else {
        format!("({})", pretty(expr))
    }
}
