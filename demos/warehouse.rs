//! Example: compare both solvers on a small hand-drawn yard.
//!
//! Run with:
//! `cargo run --example warehouse`

use cranes::{crane_unloading_dyn_prog, crane_unloading_exhaustive, Grid};

const YARD: &str = "\
..c...X.
.X..c...
c..X..c.
..c..X..
X...c..c
";

fn main() {
    let grid: Grid = match YARD.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("bad yard: {err}");
            std::process::exit(1);
        }
    };
    println!("Yard ({}x{}, {} cranes):", grid.rows(), grid.columns(), grid.crane_count());
    print!("{grid}");

    for (name, result) in [
        ("exhaustive", crane_unloading_exhaustive(&grid)),
        ("dyn-prog", crane_unloading_dyn_prog(&grid)),
    ] {
        match result {
            Ok(path) => {
                println!("\n{name}: {} cranes", path.total_cranes());
                print!("{}", path.render());
                println!("{path}");
            }
            Err(err) => println!("\n{name}: {err}"),
        }
    }
}
