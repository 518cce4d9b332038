//! Filtering, sorting and analytics behind the ward waste-management dashboard.

pub mod actions;
pub mod analyze;
pub mod filter;
pub mod model;
pub mod report;
pub mod utils;
