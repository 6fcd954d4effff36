pub mod config_service;
pub mod dto;
pub mod facility_store;
pub mod in_memory_repository;
pub mod paths;

pub use crate::config_service::load_solver_config;
pub use crate::facility_store::FacilityStore;
pub use crate::in_memory_repository::InMemoryStore;
