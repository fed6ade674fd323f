use crate::solver::Solution;

/// Render a solution as `name = value` lines, in variable order.
pub fn pretty_solution(solution: &Solution) -> Vec<String> {
    solution
        .iter()
        .map(|(name, value)| {
            if value.is_integer() {
                format!("{name} = {value}")
            } else {
                format!("{name} = {value} (~{})", value.to_f64())
            }
        })
        .collect()
}
