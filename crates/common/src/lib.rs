pub mod config;
pub mod error;
pub mod numeric_kernel;
pub mod types;

pub use config::{HowardConfig, LawlerConfig, PolicyUpdate, SolverConfig};
pub use error::Error;
pub use numeric_kernel::Tolerances;
pub use types::{Edge, EdgeId, MeanCycle, NodeId};
