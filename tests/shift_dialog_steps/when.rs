//! When steps for shift dialog BDD scenarios.

use super::world::ShiftWorld;
use rstest_bdd_macros::when;
use shift_tracker::dialog::domain::{Choice, Inbound};

#[when(r#"the operator sends "{text}""#)]
fn operator_sends(world: &mut ShiftWorld, text: String) -> Result<(), eyre::Report> {
    world.deliver(Inbound::message(world.operator.clone(), text))
}

#[when(r#"the operator pastes tasks "{first}" and "{second}""#)]
fn operator_pastes_tasks(
    world: &mut ShiftWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let pasted = format!("Actividades del turno:\n1- {first}\n2- {second}");
    world.deliver(Inbound::message(world.operator.clone(), pasted))
}

#[when(r#"the operator taps "{answer}""#)]
fn operator_taps(world: &mut ShiftWorld, answer: String) -> Result<(), eyre::Report> {
    let choice = Choice::from_callback_data(&answer);
    world.deliver(Inbound::choice(world.operator.clone(), choice))
}
