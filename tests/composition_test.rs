// tests/composition_test.rs

use std::f64::consts::PI;

use function_plotter::{Function, Plotter};

fn demo_functions() -> (Function, Function, Function, Function) {
    let f1 = Function::new(|x| x.powi(2));
    let f2 = Function::new(|x| x + 3.0);
    let f3 = Function::new(f64::sin);
    let f4 = (&f1 + &f2) * &f3 / 2.0;
    (f1, f2, f3, f4)
}

#[test]
fn test_demo_composition_at_zero() {
    let (_, _, _, f4) = demo_functions();
    assert_eq!(f4.call(0.0), 0.0);
}

#[test]
fn test_demo_composition_at_half_pi() {
    let (_, _, _, f4) = demo_functions();
    let x = PI / 2.0;
    // f1 + f2 is x^2 + x + 3, and sin(pi/2) is exactly 1.0
    let expected = (x * x + x + 3.0) / 2.0;
    assert!((f4.call(x) - expected).abs() < 1e-12);
}

#[test]
fn test_demo_plotter_samples_every_function() {
    let (f1, f2, f3, f4) = demo_functions();
    let mut plotter = Plotter::new(0.0, 20.0, 0.1);
    plotter.add_func("Function 1", f1);
    plotter.add_func("Function 2", f2);
    plotter.add_func("Function 3", f3);
    plotter.add_func("Function 4", f4.clone());

    let series = plotter.sample();
    let labels: Vec<&str> = series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["Function 1", "Function 2", "Function 3", "Function 4"]);
    assert!(series.iter().all(|s| s.data.len() == 200));

    // Registered functions stay shared with the caller.
    let (x, y) = series[3].data[57];
    assert_eq!(y, f4.call(x));
}

#[test]
fn test_division_by_zero_function_is_native_infinity() {
    let quotient = Function::new(|_| 1.0) / Function::new(|_| 0.0);
    assert_eq!(quotient.call(0.0), f64::INFINITY);
}

#[test]
fn test_mixed_owned_and_borrowed_operands() {
    let f = Function::new(|x| 2.0 * x);
    let g = Function::new(|x| x - 1.0);

    let owned = f.clone() - g.clone();
    let borrowed = &f - &g;
    let scalar_chain = ((&f + 1.0) * 3.0 - 2.0) / 4.0;

    for x in [-2.0, 0.0, 1.5, 8.0] {
        assert_eq!(owned.call(x), x + 1.0);
        assert_eq!(borrowed.call(x), owned.call(x));
        assert_eq!(scalar_chain.call(x), ((2.0 * x + 1.0) * 3.0 - 2.0) / 4.0);
    }
}
