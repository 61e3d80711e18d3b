//! careerfit-core — Question catalog, scoring engine, and assessment flow.
//!
//! This crate defines the data model, the catalog loader, the pure scoring
//! function and the flow controller that the rest of careerfit builds on.

pub mod catalog;
pub mod config;
pub mod error;
pub mod flow;
pub mod insights;
pub mod model;
pub mod report;
pub mod scoring;
pub mod traits;
