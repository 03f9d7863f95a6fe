//! Text rendering for shift reports.

use minijinja::{Environment, context};
use serde::Serialize;
use thiserror::Error;

use crate::task::domain::ShiftReport;

/// Text sent when a shift ends without any recorded activity.
pub const EMPTY_REPORT_TEXT: &str = "⚠️ No hay actividades registradas en este turno.";

const REPORT_HEADER: &str =
    "Buen día. Terminando el turno, este es el reporte de actividades planeadas:";
const REPORT_FOOTER: &str = "¡Gracias y buen turno!";
const REPORT_TEMPLATE: &str = "{{ header }}\n\
{% for line in lines %}{{ line.number }}. {{ line.text }}\n{% endfor %}\
{{ footer }}";

/// Error returned when a report template fails to render.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("report rendering failed: {reason}")]
pub struct ReportRenderError {
    /// Rendering failure reason.
    pub reason: String,
}

#[derive(Debug, Serialize)]
struct ReportLine {
    number: u64,
    text: String,
}

/// Renders [`ShiftReport`] values into operator-facing text.
#[derive(Debug)]
pub struct ReportRenderer {
    environment: Environment<'static>,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer {
    /// Creates a renderer with the built-in report template.
    #[must_use]
    pub fn new() -> Self {
        Self {
            environment: Environment::new(),
        }
    }

    /// Renders a report.
    ///
    /// An empty report yields [`EMPTY_REPORT_TEXT`]; otherwise one numbered
    /// line is produced per closed task between a fixed header and footer.
    ///
    /// # Errors
    ///
    /// Returns [`ReportRenderError`] when template evaluation fails.
    pub fn render(&self, report: &ShiftReport) -> Result<String, ReportRenderError> {
        if report.is_empty() {
            return Ok(EMPTY_REPORT_TEXT.to_owned());
        }

        let lines: Vec<ReportLine> = report
            .tasks()
            .iter()
            .map(|task| ReportLine {
                number: task.number().value(),
                text: task.rendered(),
            })
            .collect();

        self.environment
            .render_str(
                REPORT_TEMPLATE,
                context! {
                    header => REPORT_HEADER,
                    lines => lines,
                    footer => REPORT_FOOTER,
                },
            )
            .map_err(|error| ReportRenderError {
                reason: error.to_string(),
            })
    }
}
