//! Contracts with the external logic solver.
//!
//! # Module Structure
//!
//! - `route`: path query/answer types, the route token parser and `PathGateway`
//! - `sequence`: task sequencing answer types and `TaskGateway`

pub mod route;
pub mod sequence;

pub use route::{PathGateway, PathResult, RouteToken, RouteTokenError};
pub use sequence::{
    SequenceAlgorithm, SolverSequence, TaskGateway, TaskSequenceEntry, TaskSequenceResult,
};
