//! Tests for report text rendering.

use crate::task::{
    domain::{Outcome, ShiftLedger, ShiftReport, TaskClosure, TaskNumber},
    services::{EMPTY_REPORT_TEXT, ReportRenderer},
};
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};

#[fixture]
fn renderer() -> ReportRenderer {
    ReportRenderer::new()
}

#[rstest]
fn empty_report_renders_fixed_warning(renderer: ReportRenderer) {
    let text = renderer
        .render(&ShiftReport::Empty)
        .expect("empty report should render");
    assert_eq!(text, EMPTY_REPORT_TEXT);
}

#[rstest]
fn summary_lists_tasks_between_header_and_footer(renderer: ReportRenderer) {
    let now = DefaultClock.utc();
    let mut ledger = ShiftLedger::new();
    ledger.add_task("wipe tables", now);
    ledger.add_task("lock doors", now);
    ledger.add_task("check alarms", now);
    ledger
        .close_task(TaskNumber::new(1), TaskClosure::new(Outcome::Succeeded), now)
        .expect("open task should close");
    ledger
        .close_task(
            TaskNumber::new(3),
            TaskClosure::new(Outcome::Succeeded).with_comment("all green"),
            now,
        )
        .expect("open task should close");

    let text = renderer
        .render(&ledger.drain_as_report(now))
        .expect("report should render");

    assert_eq!(
        text,
        "Buen día. Terminando el turno, este es el reporte de actividades planeadas:\n\
         1. ✅ wipe tables\n\
         2. ❌ lock doors (Queda pendiente)\n\
         3. ✅ check alarms (all green)\n\
         ¡Gracias y buen turno!"
    );
}

#[rstest]
fn descriptions_are_not_html_escaped(renderer: ReportRenderer) {
    let now = DefaultClock.utc();
    let mut ledger = ShiftLedger::new();
    ledger.add_task("check <main> & \"back\" doors", now);

    let text = renderer
        .render(&ledger.drain_as_report(now))
        .expect("report should render");
    assert!(text.contains("1. ❌ check <main> & \"back\" doors (Queda pendiente)"));
}
