//! Minimum mean cycle solvers for strongly connected, integer-weighted digraphs.
//!
//! Four algorithms (Karp, Burns, Lawler, Howard) implement the same
//! [`MinMeanCycleSolver`] contract and can be swapped through [`Algorithm`].

pub mod csr;
pub mod index;
pub mod queue;
pub mod solvers;
pub mod traits;
pub mod validate;

pub use csr::GraphCSR;
pub use solvers::{Algorithm, BurnsSolver, HowardSolver, KarpSolver, LawlerSolver};
pub use traits::MinMeanCycleSolver;
