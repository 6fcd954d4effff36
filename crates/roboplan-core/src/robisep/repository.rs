//! Robisep repository trait.

use super::model::Robisep;
use crate::error::Result;
use async_trait::async_trait;

/// Read access to robots.
#[async_trait]
pub trait RobisepRepository: Send + Sync {
    /// Finds a robot by its domain id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Robisep))`: Robot found
    /// - `Ok(None)`: Robot not found
    /// - `Err(PlanError)`: Error occurred during retrieval
    async fn find_by_domain_id(&self, id: &str) -> Result<Option<Robisep>>;
}
