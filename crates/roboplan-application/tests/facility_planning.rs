use async_trait::async_trait;
use roboplan_application::{FloorPlanService, TaskLifecycleService, TaskSequenceService};
use roboplan_core::error::{PlanError, Result};
use roboplan_core::geometry::CoordinateTransformer;
use roboplan_core::repository::TaskRepository;
use roboplan_core::solver::{SequenceAlgorithm, SolverSequence, TaskGateway};
use roboplan_core::task::{Task, TaskState};
use roboplan_infrastructure::FacilityStore;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

const SNAPSHOT: &str = include_str!("../../roboplan-infrastructure/tests/fixtures/facility.toml");

struct ScriptedSolver;

#[async_trait]
impl TaskGateway for ScriptedSolver {
    async fn get_task_sequence_by_robisep_id(
        &self,
        robisep_id: &str,
        _algorithm: SequenceAlgorithm,
    ) -> Result<SolverSequence> {
        let tokens: &[&str] = match robisep_id {
            "rob-speedy" => &["a101", "21", "20", "a101"],
            "rob-argus" => &["a102", "10", "a102"],
            other => return Err(PlanError::gateway(format!("no route for {}", other))),
        };
        Ok(SolverSequence {
            sequence: tokens.iter().map(|t| t.to_string()).collect(),
            cost: 9.0,
        })
    }
}

#[tokio::test]
async fn test_floor_plan_from_snapshot() {
    let store = FacilityStore::from_toml(SNAPSHOT).unwrap();
    let service = FloorPlanService::new(
        store.floors.clone(),
        store.buildings.clone(),
        store.rooms.clone(),
        store.elevators.clone(),
        CoordinateTransformer::default(),
    );

    let plan = service.compile_floor_plan("a1").await.unwrap();
    assert_eq!((plan.height, plan.width), (6, 8));
    assert_eq!(plan.cells.len(), 48);
    // elevator at (5, 4)
    assert!(plan.cells.contains(&"m(a1, 5, 6, 1)".to_string()));
    // its WEST threshold
    assert!(plan.cells.contains(&"m(a1, 5, 5, 0)".to_string()));

    let blocked = plan.cells.iter().filter(|f| f.ends_with(", 1)")).count();
    assert_eq!(blocked, 19);
}

#[tokio::test]
async fn test_accept_then_sequence_then_persist() {
    let store = FacilityStore::from_toml(SNAPSHOT).unwrap();
    let lifecycle = TaskLifecycleService::new(
        store.pick_up_and_delivery_tasks.clone(),
        store.surveillance_tasks.clone(),
        store.robiseps.clone(),
    );
    let sequencer = TaskSequenceService::new(
        store.pick_up_and_delivery_tasks.clone(),
        store.surveillance_tasks.clone(),
        store.robiseps.clone(),
        Arc::new(ScriptedSolver),
        Duration::from_secs(5),
    );

    lifecycle.accept_task(21, "rob-speedy").await.unwrap();
    let results = sequencer
        .compute_sequences(SequenceAlgorithm::Genetic)
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].robisep_nickname, "Speedy");
    let codes: Vec<u32> = results[0].sequence.iter().map(|e| e.task_code).collect();
    assert_eq!(codes, vec![21, 20]);
    assert_eq!(results[0].sequence[1].goal, "start: A101 - End: A201");
    assert_eq!(results[1].robisep_nickname, "Argus");

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("facility.toml");
    store.save(&path).await.unwrap();

    let reloaded = FacilityStore::load(&path).await.unwrap();
    for code in [20, 21] {
        let task = reloaded
            .pick_up_and_delivery_tasks
            .find_by_code(code)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(task.state(), TaskState::Planned);
    }
    let watch = reloaded.surveillance_tasks.find_by_code(10).await.unwrap().unwrap();
    assert_eq!(watch.state(), TaskState::Planned);
}
