use super::context::Context;
use anyhow::Result;
use roboplan_core::grid::FREE;

pub async fn run(context: &Context, floor_id: &str, grid: bool) -> Result<()> {
    let service = context.floor_plan_service();

    if grid {
        let grid = service.compile_grid(floor_id).await?;
        for row in grid.rows() {
            let line: String = row.iter().map(|v| if *v == FREE { '.' } else { '#' }).collect();
            println!("{}", line);
        }
        return Ok(());
    }

    let plan = service.compile_floor_plan(floor_id).await?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
