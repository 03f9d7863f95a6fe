//! Shared world state for shift dialog BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use shift_tracker::{
    dialog::{adapters::memory::RecordingOutbox, domain::Inbound, services::DialogController},
    task::{adapters::memory::InMemoryTaskStore, domain::OperatorId},
};

/// Controller type used by the BDD world.
pub type TestController = DialogController<InMemoryTaskStore, RecordingOutbox, DefaultClock>;

/// Scenario world for shift dialog behaviour tests.
pub struct ShiftWorld {
    pub controller: TestController,
    pub outbox: Arc<RecordingOutbox>,
    pub operator: OperatorId,
}

impl ShiftWorld {
    /// Creates a world with an empty shift.
    #[must_use]
    pub fn new() -> Self {
        let outbox = Arc::new(RecordingOutbox::new());
        let controller = DialogController::new(
            Arc::new(InMemoryTaskStore::new()),
            Arc::clone(&outbox),
            Arc::new(DefaultClock),
        );

        Self {
            controller,
            outbox,
            operator: OperatorId::new("operator"),
        }
    }

    /// Handles one event for the scenario operator.
    pub fn deliver(&self, inbound: Inbound) -> Result<(), eyre::Report> {
        run_async(self.controller.handle(inbound))
            .map_err(|err| eyre::eyre!("controller failed to handle event: {err}"))
    }

    /// Returns the text of the last reply sent to the scenario operator.
    pub fn last_text(&self) -> Result<String, eyre::Report> {
        self.outbox
            .last_for(&self.operator)
            .map(|reply| reply.text)
            .ok_or_else(|| eyre::eyre!("no reply was sent to {}", self.operator))
    }
}

impl Default for ShiftWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ShiftWorld {
    ShiftWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
