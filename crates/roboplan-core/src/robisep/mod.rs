//! Robisep (robot instance) domain module.

mod model;
pub mod repository;

pub use model::{Robisep, RobisepType};
pub use repository::RobisepRepository;
