pub mod config;
pub mod error;
pub mod facility;
pub mod geometry;
pub mod grid;
pub mod repository;
pub mod robisep;
pub mod solver;
pub mod task;

// Re-export common error type
pub use error::PlanError;
