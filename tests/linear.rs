use ratsolve::rational::{Rational, rational};
use ratsolve::solver::solve_linear_system;

fn row(values: &[i64]) -> Vec<Rational> {
    values.iter().map(|&v| Rational::integer(v)).collect()
}

fn residuals(rows: &[Vec<Rational>], constants: &[Rational], solution: &[Rational]) -> Vec<Rational> {
    rows.iter()
        .zip(constants)
        .map(|(row, constant)| {
            let mut lhs = Rational::integer(0);
            for (a, x) in row.iter().zip(solution) {
                lhs += a * x;
            }
            lhs - constant
        })
        .collect()
}

#[test]
fn single_equation() {
    assert_eq!(
        solve_linear_system(&[row(&[4])], &row(&[3])),
        Some(vec![rational(3, 4)])
    );
}

#[test]
fn two_by_two_exact() {
    let solution = solve_linear_system(&[row(&[2, 3]), row(&[4, -1])], &row(&[13, 5]));
    assert_eq!(solution, Some(row(&[2, 3])));
}

#[test]
fn three_by_three_with_fractional_answer() {
    let rows = [row(&[2, 3, 8]), row(&[1, -4, 6]), row(&[3, -1, -1])];
    let constants = row(&[7, 1, 8]);
    let solution = solve_linear_system(&rows, &constants).expect("nonsingular");
    assert!(
        residuals(&rows, &constants, &solution)
            .iter()
            .all(|r| *r == Rational::integer(0))
    );
}

#[test]
fn pivot_search_skips_leading_zeros() {
    // z = 1, y + z = 3, x + y + z = 6
    let rows = [row(&[0, 0, 1]), row(&[0, 1, 1]), row(&[1, 1, 1])];
    let solution = solve_linear_system(&rows, &row(&[1, 3, 6]));
    assert_eq!(solution, Some(row(&[3, 2, 1])));
}

#[test]
fn dependent_rows_have_no_unique_solution() {
    let rows = [row(&[1, 1, 1]), row(&[2, 2, 2]), row(&[0, 1, -1])];
    assert_eq!(solve_linear_system(&rows, &row(&[3, 6, 0])), None);
    assert_eq!(solve_linear_system(&rows, &row(&[3, 5, 0])), None);
}

#[test]
fn zero_column_is_singular() {
    let rows = [row(&[0, 1]), row(&[0, 2])];
    assert_eq!(solve_linear_system(&rows, &row(&[1, 2])), None);
}

#[test]
#[should_panic(expected = "one coefficient row per constant")]
fn row_count_must_match_constants() {
    solve_linear_system(&[row(&[1, 2])], &row(&[1, 2]));
}
