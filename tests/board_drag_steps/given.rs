//! Given steps for board drag BDD scenarios.

use super::world::BoardWorld;
use phoenix_board::board::domain::{ColumnId, DragTarget};
use rstest_bdd_macros::given;

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) {
    world.reset();
}

#[given(r#"a task titled "{title}" on the board"#)]
fn task_on_board(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    world.create_titled_task(&title)?;
    Ok(())
}

#[given(r#"a task titled "{title}" in the "{column}" column"#)]
fn task_in_column(
    world: &mut BoardWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let task = world.create_titled_task(&title)?;
    let destination = ColumnId::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid scenario column: {err}"))?;
    if destination != ColumnId::DEFAULT {
        world.service.handle_drag_start(task.id());
        world
            .service
            .handle_drag_over(task.id(), Some(DragTarget::Column(destination)));
        world.service.handle_drag_end(task.id(), None);
    }
    Ok(())
}
