//! Application services for shift task orchestration.

mod render;
mod shift;

pub use render::{EMPTY_REPORT_TEXT, ReportRenderError, ReportRenderer};
pub use shift::{ShiftService, ShiftServiceError, ShiftServiceResult};
