//! HTTP gateways to the external logic solver.

pub mod solver_client;
pub mod solver_path_gateway;
pub mod solver_task_gateway;

#[cfg(test)]
mod test_server;

pub use crate::solver_client::SolverClient;
pub use crate::solver_path_gateway::SolverPathGateway;
pub use crate::solver_task_gateway::SolverTaskGateway;
