//! Property-based tests for exact arithmetic, normalization and the solvers.

#[cfg(test)]
mod tests {
    use num_bigint::Sign;
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{
        Assignment, Expr, Op, Rational, find_solution, fraction, normalize, product, rational,
        solve_for_variable, solve_linear_system, substitute, var,
    };

    fn small_int() -> impl Strategy<Value = i64> {
        -60i64..60i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-60i64..=-1i64), (1i64..=60i64)]
    }

    fn any_rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(p, q)| rational(p, q))
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(p, q)| rational(p, q))
    }

    fn leaf() -> impl Strategy<Value = Expr> {
        prop_oneof![
            (-9i64..10i64).prop_map(Expr::from),
            prop::sample::select(vec!["x", "y", "z"]).prop_map(var),
        ]
    }

    fn expression() -> impl Strategy<Value = Expr> {
        leaf().prop_recursive(3, 20, 3, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 1..4).prop_map(Expr::Sum),
                prop::collection::vec(inner.clone(), 1..3).prop_map(product),
                (inner.clone(), inner).prop_map(|(n, d)| fraction(n, d)),
            ]
        })
    }

    fn assignment() -> impl Strategy<Value = Assignment> {
        (any_rational(), any_rational(), any_rational()).prop_map(|(x, y, z)| {
            Assignment::from([("x".into(), x), ("y".into(), y), ("z".into(), z)])
        })
    }

    fn linear(coefficients: [i64; 2], constant: i64) -> Expr {
        let terms = [
            Expr::build(Op::Mul, [Expr::from(coefficients[0]), var("x")]),
            Expr::build(Op::Mul, [Expr::from(coefficients[1]), var("y")]),
        ];
        let mut addends: Vec<Expr> = terms.into_iter().filter_map(|term| term.ok()).collect();
        addends.push(Expr::from(-constant));
        Expr::Sum(addends)
    }

    proptest! {
        #[test]
        fn rational_add_commutative(a in any_rational(), b in any_rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_mul_commutative(a in any_rational(), b in any_rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn rational_mul_associative(a in any_rational(), b in any_rational(), c in any_rational()) {
            prop_assert_eq!((&a * &b) * &c, &a * (&b * &c));
        }

        #[test]
        fn rational_add_associative(a in any_rational(), b in any_rational(), c in any_rational()) {
            prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
        }

        #[test]
        fn rational_mul_div_inverse(a in any_rational(), b in non_zero_rational()) {
            prop_assert_eq!((&a * &b).checked_div(&b).unwrap(), a);
        }

        #[test]
        fn rational_denominator_stays_positive(a in any_rational(), b in any_rational()) {
            let difference = &a - &b;
            prop_assert_eq!(difference.denom().sign(), Sign::Plus);
        }

        #[test]
        fn normalize_is_idempotent(e in expression()) {
            let once = normalize(e);
            prop_assert_eq!(normalize(once.clone()), once);
        }

        #[test]
        fn normalize_preserves_value(e in expression(), values in assignment()) {
            let expected = e.eval(&values);
            prop_assume!(expected.is_ok());
            prop_assert_eq!(normalize(e).eval(&values), expected);
        }

        #[test]
        fn isolated_value_satisfies_equation(
            a in non_zero_int(),
            b in small_int(),
            c in small_int(),
            y in any_rational(),
        ) {
            let equation = linear([a, b], c);
            let value = solve_for_variable(&equation, "x").unwrap();
            prop_assert!(!value.has_variable("x"));
            let back = normalize(substitute(&equation, "x", &value));
            prop_assert!(back.is_zero());
            let values = Assignment::from([("y".into(), y)]);
            let residual = substitute(&equation, "x", &value).eval(&values).unwrap();
            prop_assert!(residual.is_zero());
        }

        #[test]
        fn elimination_agrees_with_linear_solver(
            m in prop::array::uniform4(-9i64..10i64),
            k in prop::array::uniform2(-20i64..20i64),
        ) {
            let rows = vec![
                vec![Rational::from(m[0]), Rational::from(m[1])],
                vec![Rational::from(m[2]), Rational::from(m[3])],
            ];
            let constants = vec![Rational::from(k[0]), Rational::from(k[1])];
            let equations = vec![linear([m[0], m[1]], k[0]), linear([m[2], m[3]], k[1])];

            match solve_linear_system(&rows, &constants) {
                Some(values) => {
                    let solution = find_solution(&equations).unwrap();
                    prop_assert_eq!(&solution["x"], &values[0]);
                    prop_assert_eq!(&solution["y"], &values[1]);
                }
                None => {
                    let unique = find_solution(&equations).is_ok_and(|s| s.len() == 2);
                    prop_assert!(!unique);
                }
            }
        }
    }
}
