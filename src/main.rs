// src/main.rs

use std::error::Error;

use env_logger::Env;
use log::info;

use function_plotter::{crate_version, Function, Plotter};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    info!("function_plotter {}", crate_version());

    let f1 = Function::new(|x| x.powi(2));
    let f2 = Function::new(|x| x + 3.0);
    let f3 = Function::new(f64::sin);
    let f4 = (&f1 + &f2) * &f3 / 2.0;

    let mut plotter = Plotter::new(0.0, 20.0, 0.1);
    plotter.add_func("Function 1", f1);
    plotter.add_func("Function 2", f2);
    plotter.add_func("Function 3", f3);
    plotter.add_func("Function 4", f4);

    info!(
        "Plotting {} function(s) over {} sample point(s)",
        plotter.functions().len(),
        plotter.domain().len()
    );
    plotter.plot()
}

// src/main.rs
