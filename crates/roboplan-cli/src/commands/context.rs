use anyhow::{Context as _, Result};
use roboplan_application::{FloorPlanService, PathService, TaskLifecycleService, TaskSequenceService};
use roboplan_core::config::SolverConfig;
use roboplan_infrastructure::paths::RoboplanPaths;
use roboplan_infrastructure::{FacilityStore, load_solver_config};
use roboplan_interaction::{SolverClient, SolverPathGateway, SolverTaskGateway};
use std::path::PathBuf;
use std::sync::Arc;

/// Loaded facility and solver settings shared by every command.
pub struct Context {
    store: FacilityStore,
    config: SolverConfig,
    facility_path: PathBuf,
}

impl Context {
    pub async fn load(facility: Option<PathBuf>, solver_config: Option<PathBuf>) -> Result<Self> {
        let facility_path = match facility {
            Some(path) => path,
            None => RoboplanPaths::facility_file()?,
        };
        let config = load_solver_config(solver_config.as_deref())
            .context("Failed to load solver settings")?;
        let store = FacilityStore::load(&facility_path)
            .await
            .with_context(|| format!("Failed to load facility {}", facility_path.display()))?;

        Ok(Self {
            store,
            config,
            facility_path,
        })
    }

    pub fn floor_plan_service(&self) -> FloorPlanService {
        FloorPlanService::new(
            self.store.floors.clone(),
            self.store.buildings.clone(),
            self.store.rooms.clone(),
            self.store.elevators.clone(),
            self.config.transformer(),
        )
    }

    pub fn path_service(&self) -> Result<PathService> {
        let client = SolverClient::new(self.config.clone())?;
        Ok(PathService::new(
            self.store.floors.clone(),
            self.store.rooms.clone(),
            self.store.buildings.clone(),
            Arc::new(SolverPathGateway::new(client)),
            self.config.transformer(),
            self.config.timeout(),
        ))
    }

    pub fn task_sequence_service(&self) -> Result<TaskSequenceService> {
        let client = SolverClient::new(self.config.clone())?;
        Ok(TaskSequenceService::new(
            self.store.pick_up_and_delivery_tasks.clone(),
            self.store.surveillance_tasks.clone(),
            self.store.robiseps.clone(),
            Arc::new(SolverTaskGateway::new(client)),
            self.config.timeout(),
        ))
    }

    pub fn task_lifecycle_service(&self) -> TaskLifecycleService {
        TaskLifecycleService::new(
            self.store.pick_up_and_delivery_tasks.clone(),
            self.store.surveillance_tasks.clone(),
            self.store.robiseps.clone(),
        )
    }

    /// Writes task state changes back to the snapshot.
    pub async fn persist(&self) -> Result<()> {
        self.store
            .save(&self.facility_path)
            .await
            .with_context(|| format!("Failed to save facility {}", self.facility_path.display()))?;
        tracing::debug!("Saved facility to {}", self.facility_path.display());
        Ok(())
    }
}
