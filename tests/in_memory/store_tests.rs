//! Store-level tests for numbering, isolation and concurrent access.

use std::collections::BTreeSet;

use super::helpers::{MemoryShiftService, operator, service};
use rstest::rstest;
use shift_tracker::task::{
    domain::{OperatorId, Outcome, TaskClosure, TaskNumber, TaskStatus},
    ports::TaskStoreError,
    services::ShiftServiceError,
};

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_receive_distinct_numbers(
    service: MemoryShiftService,
    operator: OperatorId,
) {
    let mut handles = Vec::new();
    for index in 0..32 {
        let worker_service = service.clone();
        let worker_operator = operator.clone();
        handles.push(tokio::spawn(async move {
            worker_service
                .open_task(&worker_operator, format!("task {index}"))
                .await
        }));
    }

    let mut numbers = BTreeSet::new();
    for handle in handles {
        let task = handle
            .await
            .expect("worker should not panic")
            .expect("task should open");
        numbers.insert(task.number().value());
    }

    let expected: BTreeSet<u64> = (1..=32).collect();
    assert_eq!(numbers, expected);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_closes_of_one_task_succeed_once(
    service: MemoryShiftService,
    operator: OperatorId,
) {
    let task = service
        .open_task(&operator, "contested")
        .await
        .expect("task should open");

    let mut handles = Vec::new();
    for _ in 0..8 {
        let worker_service = service.clone();
        let worker_operator = operator.clone();
        let number = task.number();
        handles.push(tokio::spawn(async move {
            worker_service
                .close_task(&worker_operator, number, TaskClosure::new(Outcome::Succeeded))
                .await
        }));
    }

    let mut closed = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.expect("worker should not panic") {
            Ok(_) => closed += 1,
            Err(ShiftServiceError::Store(TaskStoreError::TaskNotOpen { .. })) => rejected += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!((closed, rejected), (1, 7));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_tracks_lifecycle_until_drained(
    service: MemoryShiftService,
    operator: OperatorId,
) {
    let task = service
        .open_task(&operator, "a")
        .await
        .expect("task should open");
    assert_eq!(
        service
            .task_status(&operator, task.number())
            .await
            .expect("lookup should succeed"),
        Some(TaskStatus::Open)
    );

    service.report(&operator).await.expect("report should render");
    assert_eq!(
        service
            .task_status(&operator, task.number())
            .await
            .expect("lookup should succeed"),
        None
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_operator_has_nothing_open(service: MemoryShiftService) {
    let stranger = OperatorId::new("nobody");
    assert!(
        service
            .list_open(&stranger)
            .await
            .expect("lookup should succeed")
            .is_empty()
    );
    let result = service
        .close_task(&stranger, TaskNumber::FIRST, TaskClosure::new(Outcome::Failed))
        .await;
    assert!(matches!(
        result,
        Err(ShiftServiceError::Store(TaskStoreError::TaskNotOpen { .. }))
    ));
}
