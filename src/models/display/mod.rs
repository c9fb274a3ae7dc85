//! Display model implementations for table output
//!
//! Each row type owns its column names; JSON output serializes the API
//! models directly.

mod academic;
mod campus;
mod student;

pub use academic::{ScheduleDisplay, SubjectDisplay, TaskDisplay};
pub use campus::{EventDisplay, NewsDisplay, VideoDisplay};
pub use student::{DebtDisplay, RequestDisplay, RequestTypeDisplay};
