use super::context::Context;
use anyhow::Result;
use roboplan_core::solver::SequenceAlgorithm;

pub async fn run(context: &Context, algorithm: &str) -> Result<()> {
    let algorithm = SequenceAlgorithm::parse(algorithm)?;
    let results = context
        .task_sequence_service()?
        .compute_sequences(algorithm)
        .await?;

    // Planned tasks changed state.
    context.persist().await?;
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
