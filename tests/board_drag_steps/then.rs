//! Then steps for board drag BDD scenarios.

use super::world::BoardWorld;
use phoenix_board::board::{
    domain::{BoardDomainError, ColumnId, DragSession},
    services::BoardServiceError,
};
use rstest_bdd_macros::then;

fn parse_column(column: &str) -> Result<ColumnId, eyre::Report> {
    ColumnId::try_from(column).map_err(|err| eyre::eyre!("invalid scenario column: {err}"))
}

#[then(r#"the "{column}" column contains "{titles}""#)]
fn column_contains(
    world: &BoardWorld,
    column: String,
    titles: String,
) -> Result<(), eyre::Report> {
    let column_id = parse_column(&column)?;
    let expected: Vec<&str> = titles.split(", ").collect();
    let snapshot = world.service.columns_snapshot();
    let actual = snapshot.column(column_id);

    if actual.len() != expected.len() {
        return Err(eyre::eyre!(
            "expected {} tasks in {column}, found {}",
            expected.len(),
            actual.len()
        ));
    }
    for (position, title) in expected.iter().enumerate() {
        let expected_id = world.task_id(title)?;
        if actual.get(position) != Some(&expected_id) {
            return Err(eyre::eyre!(
                "expected task {title} at position {position} of {column}"
            ));
        }
    }
    Ok(())
}

#[then(r#"the "{column}" column is empty"#)]
fn column_is_empty(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let column_id = parse_column(&column)?;
    let snapshot = world.service.columns_snapshot();
    let actual = snapshot.column(column_id);
    if !actual.is_empty() {
        return Err(eyre::eyre!(
            "expected {column} to be empty, found {} tasks",
            actual.len()
        ));
    }
    Ok(())
}

#[then("a drag is in progress")]
fn drag_in_progress(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.service.drag_session() {
        DragSession::Dragging(_) => Ok(()),
        DragSession::Idle => Err(eyre::eyre!("expected an active drag session")),
    }
}

#[then("the drag session is idle")]
fn drag_session_idle(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.service.drag_session() {
        DragSession::Idle => Ok(()),
        DragSession::Dragging(task_id) => {
            Err(eyre::eyre!("expected idle session, still dragging {task_id}"))
        }
    }
}

#[then("task creation fails with a validation error")]
fn creation_fails_with_validation_error(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing creation result"))?;

    if !matches!(
        result,
        Err(BoardServiceError::Domain(BoardDomainError::EmptyTitle))
    ) {
        return Err(eyre::eyre!("expected EmptyTitle error, got {result:?}"));
    }
    Ok(())
}
