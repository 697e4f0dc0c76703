//! Command implementations

pub mod boat;
pub mod boxes;
pub mod completions;
pub mod dashboard;
pub mod lang;
pub mod profile;
pub mod quote;
pub mod register;
