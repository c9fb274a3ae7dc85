//! Display models for CLI output
//!
//! Converts portal API types into table rows.

pub mod display;

pub use display::{
    DebtDisplay, EventDisplay, NewsDisplay, RequestDisplay, RequestTypeDisplay, ScheduleDisplay,
    SubjectDisplay, TaskDisplay, VideoDisplay,
};
