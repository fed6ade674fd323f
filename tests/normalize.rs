use ratsolve::expr::{Assignment, Expr};
use ratsolve::rational::rational;
use ratsolve::simplify::normalize;
use ratsolve::{Rational, parse_expr};

fn normalized(input: &str) -> Expr {
    let expr = parse_expr(input).expect("parse input");
    normalize(expr)
}

fn expect_normalized(input: &str, expected: &str) {
    let actual = normalized(input);
    let expected_expr = normalized(expected);
    assert_eq!(
        actual, expected_expr,
        "normalization mismatch for {input}: got {actual}, expected {expected_expr}"
    );
}

#[test]
fn canonicalization_trivial_cases() {
    let cases = vec![
        ("2*x*3", "6*x"),
        ("x*1", "x"),
        ("x/2", "1/2*x"),
        ("2*(x/3)", "2/3*x"),
        ("1 + 2*x", "2*x + 1"),
        ("2*x + 3 + x", "3*x + 3"),
        ("x + 2 + 3*x", "4*x + 2"),
        ("x + 0", "x"),
        ("0*x + 5", "5"),
        ("x - x", "0"),
        ("x*x", "x^2"),
        ("x*x^2", "x^3"),
        ("x^0", "1"),
        ("y*x", "x*y"),
        ("-(-x)", "x"),
        ("1/3 + 1/6", "1/2"),
    ];

    for (input, expected) in cases {
        expect_normalized(input, expected);
    }
}

#[test]
fn products_distribute_over_sums() {
    expect_normalized("(x + 1)*(x - 1)", "x^2 - 1");
    expect_normalized("(x + y)^2", "x^2 + 2*x*y + y^2");
    expect_normalized("2*(x + 3) - 6", "2*x");
}

#[test]
fn quotients_are_rewritten() {
    expect_normalized("(x + y)/2", "x/2 + y/2");
    expect_normalized("x/(y/z)", "x*z/y");
    expect_normalized("(x/y)/z", "x/(y*z)");
    expect_normalized("(2*x)/(4*y)", "1/2*(x/y)");
    expect_normalized("(x + 1)/y", "x/y + 1/y");
    expect_normalized("0/x", "0");
}

#[test]
fn bare_variables_cancel_across_quotients() {
    expect_normalized("x*y/x", "y");
    expect_normalized("x*(1/x)", "1");
    expect_normalized("x*(z/(x*y))", "z/y");
    expect_normalized("(3*x*x)/(x*y)", "3*x/y");
    expect_normalized("x/(x + 1)", "x/(1 + x)");
}

#[test]
fn zero_denominator_is_left_in_place() {
    let expr = normalized("x/0");
    assert!(matches!(expr, Expr::Fraction(..)), "got {expr}");
    assert!(expr.eval(&Assignment::from([("x".into(), Rational::integer(1))])).is_err());
}

#[test]
fn constant_sums_fold_exactly() {
    let expr = normalized("1/3 + 1/6");
    assert_eq!(expr.as_constant(), Some(&rational(1, 2)));
    assert_eq!(expr.to_string(), "1/2");
}

#[test]
fn display_of_canonical_forms() {
    assert_eq!(normalized("2*x + 3 + x").to_string(), "3 + 3*x");
    assert_eq!(normalized("y - 2*x").to_string(), "-2*x + y");
}

#[test]
fn normalization_is_a_fixed_point() {
    for input in [
        "(x + 1)*(y - 2)/3",
        "x/(y + 1) + 2*x/(y + 1)",
        "(a/b)/(c/d)",
        "3*(x/(2*y)) - x/y",
    ] {
        let once = normalized(input);
        assert_eq!(normalize(once.clone()), once, "not a fixed point: {input}");
    }
}

#[test]
fn normalization_preserves_value() {
    let values = Assignment::from([
        ("x".into(), rational(3, 2)),
        ("y".into(), Rational::integer(-4)),
        ("z".into(), rational(5, 7)),
    ]);
    for input in [
        "(x + y)*(x - z)",
        "x/(y/z) + (x/y)/z",
        "(2*x + 6)^2 / (3*y)",
        "1/(x + 1/(y + z))",
    ] {
        let expr = parse_expr(input).expect("parse input");
        let expected = expr.eval(&values).expect("defined");
        assert_eq!(normalize(expr).eval(&values), Ok(expected), "value changed: {input}");
    }
}
