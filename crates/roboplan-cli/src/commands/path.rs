use super::context::Context;
use anyhow::Result;

pub async fn run(
    context: &Context,
    origin_floor: &str,
    origin_room: &str,
    destination_floor: &str,
    destination_room: &str,
) -> Result<()> {
    let summaries = context
        .path_service()?
        .resolve_path(origin_floor, origin_room, destination_floor, destination_room)
        .await?;
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}
