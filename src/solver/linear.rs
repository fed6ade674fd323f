use num_traits::Zero;

use crate::rational::Rational;

/// Solve the square system `rows · x = constants` exactly by recursive elimination.
///
/// Returns `None` when the system has no unique solution (singular or inconsistent).
///
/// # Panics
///
/// Panics unless there is at least one row, one constant per row and exactly
/// `constants.len()` coefficients in every row.
pub fn solve_linear_system(rows: &[Vec<Rational>], constants: &[Rational]) -> Option<Vec<Rational>> {
    let n = constants.len();
    assert!(n >= 1, "linear system needs at least one equation");
    assert_eq!(rows.len(), n, "expected one coefficient row per constant");
    assert!(
        rows.iter().all(|row| row.len() == n),
        "expected {n} coefficients in every row"
    );
    eliminate(rows, constants)
}

fn eliminate(rows: &[Vec<Rational>], constants: &[Rational]) -> Option<Vec<Rational>> {
    if rows.len() == 1 {
        let value = constants[0].checked_div(&rows[0][0]).ok()?;
        return Some(vec![value]);
    }

    // Exact arithmetic: any nonzero leading coefficient is as good a pivot as another.
    let pivot = rows.iter().position(|row| !row[0].is_zero())?;
    let pivot_row = &rows[pivot];
    let pivot_constant = &constants[pivot];

    let mut reduced_rows = Vec::with_capacity(rows.len() - 1);
    let mut reduced_constants = Vec::with_capacity(rows.len() - 1);
    for (index, (row, constant)) in rows.iter().zip(constants).enumerate() {
        if index == pivot {
            continue;
        }
        if row[0].is_zero() {
            reduced_rows.push(row[1..].to_vec());
            reduced_constants.push(constant.clone());
            continue;
        }
        let factor = row[0].checked_div(&pivot_row[0]).ok()?;
        reduced_rows.push(
            row[1..]
                .iter()
                .zip(&pivot_row[1..])
                .map(|(value, pivot_value)| value - &(pivot_value * &factor))
                .collect(),
        );
        reduced_constants.push(constant - &(pivot_constant * &factor));
    }

    let rest = eliminate(&reduced_rows, &reduced_constants)?;

    let mut leading = pivot_constant.clone();
    for (coefficient, value) in pivot_row[1..].iter().zip(&rest) {
        leading -= coefficient * value;
    }
    let leading = leading.checked_div(&pivot_row[0]).ok()?;

    let mut solution = Vec::with_capacity(rows.len());
    solution.push(leading);
    solution.extend(rest);
    Some(solution)
}
