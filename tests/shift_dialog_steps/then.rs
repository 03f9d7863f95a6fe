//! Then steps for shift dialog BDD scenarios.

use super::world::{ShiftWorld, run_async};
use rstest_bdd_macros::then;
use shift_tracker::dialog::domain::{FlowKind, Inbound};

#[then(r#"the last reply is "{expected}""#)]
fn last_reply_is(world: &ShiftWorld, expected: String) -> Result<(), eyre::Report> {
    let actual = world.last_text()?;
    if actual != expected {
        return Err(eyre::eyre!("expected reply {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the report lists "{line}""#)]
fn report_lists(world: &ShiftWorld, line: String) -> Result<(), eyre::Report> {
    let report = world.last_text()?;
    if !report.lines().any(|candidate| candidate == line) {
        return Err(eyre::eyre!("report is missing line {line:?}:\n{report}"));
    }
    Ok(())
}

#[then("the next manual task is numbered {number:u64}")]
fn next_task_is_numbered(world: &ShiftWorld, number: u64) -> Result<(), eyre::Report> {
    world.deliver(Inbound::message(world.operator.clone(), "/task"))?;
    world.deliver(Inbound::message(world.operator.clone(), "probe"))?;
    let expected = format!("✅ Tarea {number} agregada: probe");
    let actual = world.last_text()?;
    if actual != expected {
        return Err(eyre::eyre!("expected {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the close dialog is still active")]
fn close_dialog_active(world: &ShiftWorld) -> Result<(), eyre::Report> {
    let active = run_async(world.controller.active_flows(&world.operator));
    if !active.contains(&FlowKind::Close) {
        return Err(eyre::eyre!("expected an active close dialog, found {active:?}"));
    }
    Ok(())
}

#[then("no dialog is active")]
fn no_dialog_active(world: &ShiftWorld) -> Result<(), eyre::Report> {
    let active = run_async(world.controller.active_flows(&world.operator));
    if !active.is_empty() {
        return Err(eyre::eyre!("expected no active dialog, found {active:?}"));
    }
    Ok(())
}
