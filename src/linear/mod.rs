// common helpers
pub mod errors;
pub mod report;
pub(crate) mod system;

// algorithms
pub mod gauss_seidel;
pub mod jacobi;

pub use report::{SweepReport, SweepTermination};
