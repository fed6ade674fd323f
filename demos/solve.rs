use ratsolve::{find_solution, parse_equation, pretty_solution};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let inputs = ["2*x + 3*y + 8*z = 7", "x - 4*y + 6*z = 1", "3*x-y-z=8"];
    let mut equations = Vec::with_capacity(inputs.len());
    for input in inputs {
        match parse_equation(input) {
            Ok(equation) => equations.push(equation),
            Err(err) => {
                eprintln!("{input}: {err}");
                return;
            }
        }
    }

    match find_solution(&equations) {
        Ok(solution) => println!("{}", pretty_solution(&solution).join("\n")),
        Err(err) if err.is_unsolvable() => eprintln!("no unique solution: {err}"),
        Err(err) => eprintln!("could not solve: {err}"),
    }
}
