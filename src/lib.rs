//! Interactive single-user gradebook: a roster of students and their grades
//! with an undo history and a newest-first activity log.

pub mod activity;
pub mod commands;
pub mod gradebook;
pub mod grading;
pub mod import;
pub mod models;
pub mod report;
pub mod session;
pub mod undo;

pub use gradebook::Gradebook;
pub use session::{Outcome, Session};
