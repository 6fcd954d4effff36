use super::context::Context;
use anyhow::Result;

pub async fn accept(context: &Context, task_code: u32, robisep_id: &str) -> Result<()> {
    let transition = context
        .task_lifecycle_service()
        .accept_task(task_code, robisep_id)
        .await?;
    context.persist().await?;
    println!("{}", serde_json::to_string_pretty(&transition)?);
    Ok(())
}

pub async fn refuse(context: &Context, task_code: u32) -> Result<()> {
    let transition = context.task_lifecycle_service().refuse_task(task_code).await?;
    context.persist().await?;
    println!("{}", serde_json::to_string_pretty(&transition)?);
    Ok(())
}
