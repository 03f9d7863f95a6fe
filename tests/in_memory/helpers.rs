//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use shift_tracker::task::{
    adapters::memory::InMemoryTaskStore, domain::OperatorId, services::ShiftService,
};

/// Shift service backed by the in-memory store.
pub type MemoryShiftService = ShiftService<InMemoryTaskStore, DefaultClock>;

/// Provides a fresh in-memory store for each test.
#[fixture]
pub fn store() -> Arc<InMemoryTaskStore> {
    Arc::new(InMemoryTaskStore::new())
}

/// Provides a shift service over the given store.
#[fixture]
pub fn service(store: Arc<InMemoryTaskStore>) -> MemoryShiftService {
    ShiftService::new(store, Arc::new(DefaultClock))
}

/// Provides the default scenario operator.
#[fixture]
pub fn operator() -> OperatorId {
    OperatorId::new("night-desk")
}
