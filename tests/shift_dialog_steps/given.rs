//! Given steps for shift dialog BDD scenarios.

use super::world::ShiftWorld;
use rstest_bdd_macros::given;
use shift_tracker::{dialog::domain::Inbound, task::domain::OperatorId};

#[given(r#"a fresh shift for operator "{operator}""#)]
fn fresh_shift(world: &mut ShiftWorld, operator: String) {
    world.operator = OperatorId::new(operator);
}

#[given(r#"the operator has opened task "{description}""#)]
fn operator_opened_task(world: &mut ShiftWorld, description: String) -> Result<(), eyre::Report> {
    world.deliver(Inbound::message(world.operator.clone(), "/task"))?;
    world.deliver(Inbound::message(world.operator.clone(), description))?;
    Ok(())
}
