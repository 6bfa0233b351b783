// src/lib.rs - Library interface for composing and plotting functions

pub mod constants;
pub mod domain;
pub mod font_config;
pub mod function;
pub mod plot_framework;
pub mod plotter;

pub use domain::Domain;
pub use function::{ArithOp, Function, Operand};
pub use plotter::{PlotStyle, Plotter};

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
