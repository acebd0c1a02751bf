//! When steps for board drag BDD scenarios.

use super::world::{BoardWorld, run_async};
use chrono::{Days, Utc};
use phoenix_board::board::{
    domain::{ColumnId, DragTarget},
    services::CreateTaskRequest,
};
use rstest_bdd_macros::when;

#[when(r#"a task titled "{title}" is created"#)]
fn create_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    world.create_titled_task(&title)?;
    Ok(())
}

#[when("a task with an empty title is created")]
fn create_task_with_empty_title(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let due_date = Utc::now()
        .date_naive()
        .checked_add_days(Days::new(7))
        .ok_or_else(|| eyre::eyre!("due date out of range"))?;
    let request = CreateTaskRequest::new("", "Scenario task", due_date);
    let result = run_async(world.service.create_task(request));
    world.last_create_result = Some(result);
    Ok(())
}

#[when(r#"task "{title}" is picked up"#)]
fn pick_up_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    world.service.handle_drag_start(task_id);
    Ok(())
}

#[when(r#"task "{title}" hovers over the "{column}" column"#)]
fn hover_over_column(
    world: &mut BoardWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let target = ColumnId::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid scenario column: {err}"))?;
    world
        .service
        .handle_drag_over(task_id, Some(DragTarget::Column(target)));
    Ok(())
}

#[when(r#"task "{title}" hovers over task "{other}""#)]
fn hover_over_task(
    world: &mut BoardWorld,
    title: String,
    other: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let other_id = world.task_id(&other)?;
    world
        .service
        .handle_drag_over(task_id, Some(DragTarget::Task(other_id)));
    Ok(())
}

#[when(r#"the drag of task "{title}" ends on task "{other}""#)]
fn end_on_task(world: &mut BoardWorld, title: String, other: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let other_id = world.task_id(&other)?;
    world
        .service
        .handle_drag_end(task_id, Some(DragTarget::Task(other_id)));
    Ok(())
}

#[when(r#"the drag of task "{title}" ends over the "{column}" column"#)]
fn end_over_column(
    world: &mut BoardWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let target = ColumnId::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid scenario column: {err}"))?;
    world
        .service
        .handle_drag_end(task_id, Some(DragTarget::Column(target)));
    Ok(())
}

#[when(r#"the drag of task "{title}" ends with no target"#)]
fn end_with_no_target(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    world.service.handle_drag_end(task_id, None);
    Ok(())
}
