//! Facility snapshot storage.
//!
//! Loads a TOML snapshot into in-memory repositories and writes task state
//! changes back. Writes go to a temporary sibling file that is renamed over
//! the original, so a crash never leaves a half-written snapshot.

use crate::dto::{Facility, FacilitySnapshotDTO};
use crate::in_memory_repository::InMemoryStore;
use roboplan_core::error::{PlanError, Result};
use roboplan_core::facility::{Building, Elevator, Floor, Room};
use roboplan_core::robisep::{Robisep, RobisepType};
use roboplan_core::task::{PickUpAndDeliveryTask, SurveillanceTask};
use std::path::Path;
use std::sync::Arc;
use tokio::fs;

/// Every repository of one facility, backed by memory.
///
/// Each field can be handed to a service as `Arc<dyn ...Repository>`.
pub struct FacilityStore {
    pub buildings: Arc<InMemoryStore<Building>>,
    pub floors: Arc<InMemoryStore<Floor>>,
    pub rooms: Arc<InMemoryStore<Room>>,
    pub elevators: Arc<InMemoryStore<Elevator>>,
    pub robiseps: Arc<InMemoryStore<Robisep>>,
    pub surveillance_tasks: Arc<InMemoryStore<SurveillanceTask>>,
    pub pick_up_and_delivery_tasks: Arc<InMemoryStore<PickUpAndDeliveryTask>>,
    robisep_types: Vec<RobisepType>,
}

impl FacilityStore {
    pub fn from_facility(facility: Facility) -> Self {
        Self {
            buildings: Arc::new(InMemoryStore::with_items(facility.buildings)),
            floors: Arc::new(InMemoryStore::with_items(facility.floors)),
            rooms: Arc::new(InMemoryStore::with_items(facility.rooms)),
            elevators: Arc::new(InMemoryStore::with_items(facility.elevators)),
            robiseps: Arc::new(InMemoryStore::with_items(facility.robiseps)),
            surveillance_tasks: Arc::new(InMemoryStore::with_items(facility.surveillance_tasks)),
            pick_up_and_delivery_tasks: Arc::new(InMemoryStore::with_items(
                facility.pick_up_and_delivery_tasks,
            )),
            robisep_types: facility.robisep_types,
        }
    }

    /// Parses a snapshot document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let dto: FacilitySnapshotDTO = toml::from_str(content)?;
        Ok(Self::from_facility(dto.into_domain()?))
    }

    /// Loads a snapshot file.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await.map_err(|e| PlanError::Io {
            message: format!("Failed to read facility snapshot at {}: {}", path.display(), e),
        })?;
        let store = Self::from_toml(&content)?;
        tracing::info!(
            "[FacilityStore] Loaded snapshot from {} ({} floors, {} rooms)",
            path.display(),
            store.floors.all().await.len(),
            store.rooms.all().await.len()
        );
        Ok(store)
    }

    /// Current contents of every repository.
    pub async fn to_facility(&self) -> Facility {
        Facility {
            buildings: self.buildings.all().await,
            floors: self.floors.all().await,
            rooms: self.rooms.all().await,
            elevators: self.elevators.all().await,
            robisep_types: self.robisep_types.clone(),
            robiseps: self.robiseps.all().await,
            surveillance_tasks: self.surveillance_tasks.all().await,
            pick_up_and_delivery_tasks: self.pick_up_and_delivery_tasks.all().await,
        }
    }

    pub async fn to_toml(&self) -> Result<String> {
        let dto = FacilitySnapshotDTO::from(&self.to_facility().await);
        toml::to_string_pretty(&dto).map_err(|e| PlanError::Serialization {
            format: "TOML".to_string(),
            message: e.to_string(),
        })
    }

    /// Writes the snapshot to `path` atomically (tmp file + rename).
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml().await?;
        let tmp_path = path.with_extension("toml.tmp");

        fs::write(&tmp_path, content).await?;
        fs::rename(&tmp_path, path).await?;

        tracing::debug!("[FacilityStore] Saved snapshot to {}", path.display());
        Ok(())
    }
}
