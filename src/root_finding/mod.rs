// common helpers
pub mod algorithms;
pub mod errors;
pub mod report;
pub(crate) mod signs;

// algorithms
pub mod bisection;
pub mod fixed_point;
pub mod halley;
pub mod newton;
pub mod regula_falsi;
pub mod secant;

pub use report::{RootReport, Termination};
