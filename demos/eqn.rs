//! Isolate each unknown of an equation given on the command line, e.g.
//! `cargo run --example eqn -- "3*x + 2*y = 12"`.

use ratsolve::{normalize, parse_equation, solve_for_variable};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "2*x + 3*y = 7".to_string());
    let equation = match parse_equation(&input) {
        Ok(equation) => equation,
        Err(err) => {
            eprintln!("{input}: {err}");
            std::process::exit(1);
        }
    };

    let canonical = normalize(equation.clone());
    println!("{canonical} = 0");
    for name in canonical.variables() {
        match solve_for_variable(&equation, name) {
            Ok(value) => println!("{name} = {value}"),
            Err(err) => println!("{name}: {err}"),
        }
    }
}
