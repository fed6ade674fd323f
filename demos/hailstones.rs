//! Hailstone trajectories: count future crossings of paths inside a test area, then
//! find the single throw that hits every hailstone.

use ratsolve::{
    Expr, Rational, Solution, find_solution, neg, product, solve_linear_system, sum, var,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const INPUT: &str = "\
19, 13, 30 @ -2,  1, -2
18, 19, 22 @ -1, -1, -2
20, 25, 34 @ -2, -2, -4
12, 31, 28 @ -1, -2, -1
20, 19, 15 @  1, -5, -3";

const AREA: (i64, i64) = (7, 27);

type Vec3 = [Rational; 3];

#[derive(Clone, Debug)]
struct Hailstone {
    position: Vec3,
    velocity: Vec3,
}

fn parse_triple(text: &str) -> Option<Vec3> {
    let values: Vec<Rational> = text
        .split(',')
        .map(|part| part.trim().parse::<i64>().ok().map(Rational::integer))
        .collect::<Option<_>>()?;
    values.try_into().ok()
}

fn parse_hailstones(input: &str) -> Option<Vec<Hailstone>> {
    input
        .lines()
        .map(|line| {
            let (position, velocity) = line.split_once('@')?;
            Some(Hailstone {
                position: parse_triple(position)?,
                velocity: parse_triple(velocity)?,
            })
        })
        .collect()
}

/// Times `(t, s)` at which `a` and `b` reach the same point in the x/y plane.
fn crossing_times(a: &Hailstone, b: &Hailstone) -> Option<(Rational, Rational)> {
    let rows = [
        vec![a.velocity[0].clone(), -&b.velocity[0]],
        vec![a.velocity[1].clone(), -&b.velocity[1]],
    ];
    let constants = [
        &b.position[0] - &a.position[0],
        &b.position[1] - &a.position[1],
    ];
    let mut times = solve_linear_system(&rows, &constants)?.into_iter();
    Some((times.next()?, times.next()?))
}

/// The same crossing, found by eliminating over `p_a + v_a*t == p_b + v_b*s`.
fn crossing_by_elimination(a: &Hailstone, b: &Hailstone) -> Option<Solution> {
    let axis = |i: usize| {
        sum(vec![
            Expr::constant(a.position[i].clone()),
            product(vec![Expr::constant(a.velocity[i].clone()), var("t")]),
            neg(Expr::constant(b.position[i].clone())),
            neg(product(vec![Expr::constant(b.velocity[i].clone()), var("s")])),
        ])
    };
    find_solution(&[axis(0), axis(1)]).ok()
}

fn count_crossings(hailstones: &[Hailstone], low: &Rational, high: &Rational) -> usize {
    let zero = Rational::integer(0);
    let inside = |v: &Rational| low.less_or_equal(v) && v.less_or_equal(high);
    let mut count = 0;
    for (i, a) in hailstones.iter().enumerate() {
        for (j, b) in hailstones.iter().enumerate().skip(i + 1) {
            let times = crossing_times(a, b);
            match (&times, crossing_by_elimination(a, b)) {
                (Some((t, s)), Some(solution)) => {
                    assert_eq!(solution.get("t"), Some(t));
                    assert_eq!(solution.get("s"), Some(s));
                }
                (None, None) => {}
                (times, solution) => panic!(
                    "solvers disagree on paths {i} and {j}: {times:?} vs {solution:?}"
                ),
            }
            let Some((t, s)) = times else {
                continue;
            };
            if t.less_than(&zero) || s.less_than(&zero) {
                continue;
            }
            let x = &a.position[0] + &(&a.velocity[0] * &t);
            let y = &a.position[1] + &(&a.velocity[1] * &t);
            if inside(&x) && inside(&y) {
                count += 1;
            }
        }
    }
    count
}

fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    [
        &(&a[1] * &b[2]) - &(&a[2] * &b[1]),
        &(&a[2] * &b[0]) - &(&a[0] * &b[2]),
        &(&a[0] * &b[1]) - &(&a[1] * &b[0]),
    ]
}

fn difference(a: &Vec3, b: &Vec3) -> Vec3 {
    [&a[0] - &b[0], &a[1] - &b[1], &a[2] - &b[2]]
}

/// Rows of `P x dv + dp x V = p_a x v_a - p_b x v_b` over unknowns `[P, V]`.
fn rock_rows(a: &Hailstone, b: &Hailstone) -> ([Vec<Rational>; 3], Vec3) {
    let zero = Rational::integer(0);
    let dv = difference(&a.velocity, &b.velocity);
    let dp = difference(&a.position, &b.position);
    let rows = [
        vec![
            zero.clone(),
            dv[2].clone(),
            -&dv[1],
            zero.clone(),
            -&dp[2],
            dp[1].clone(),
        ],
        vec![
            -&dv[2],
            zero.clone(),
            dv[0].clone(),
            dp[2].clone(),
            zero.clone(),
            -&dp[0],
        ],
        vec![
            dv[1].clone(),
            -&dv[0],
            zero.clone(),
            -&dp[1],
            dp[0].clone(),
            zero,
        ],
    ];
    let rhs = difference(
        &cross(&a.position, &a.velocity),
        &cross(&b.position, &b.velocity),
    );
    (rows, rhs)
}

fn rock_throw(hailstones: &[Hailstone]) -> Option<Vec<Rational>> {
    let [first, second, third, ..] = hailstones else {
        return None;
    };
    let mut rows = Vec::with_capacity(6);
    let mut constants = Vec::with_capacity(6);
    for other in [second, third] {
        let (pair_rows, rhs) = rock_rows(first, other);
        rows.extend(pair_rows);
        constants.extend(rhs);
    }
    solve_linear_system(&rows, &constants)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(hailstones) = parse_hailstones(INPUT) else {
        eprintln!("malformed hailstone input");
        return;
    };
    info!(count = hailstones.len(), "parsed hailstones");

    let low = Rational::integer(AREA.0);
    let high = Rational::integer(AREA.1);
    println!(
        "crossings inside [{low}, {high}]: {}",
        count_crossings(&hailstones, &low, &high)
    );

    match rock_throw(&hailstones) {
        Some(rock) => {
            let [px, py, pz] = [&rock[0], &rock[1], &rock[2]];
            println!("rock thrown from {px}, {py}, {pz}");
            println!("coordinate sum: {}", px + &(py + pz));
        }
        None => eprintln!("no unique rock throw"),
    }
}
