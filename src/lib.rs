//! Scoring engine for multi-rater leadership self-assessments.
//!
//! Raw answers flow one way: [`catalog`] questions and a rater's responses go
//! through [`scoring::dimension`] into per-dimension scores, and
//! [`scoring::aggregate`] compares SELF with the external raters and picks a
//! profile label.

pub mod catalog;
pub mod config;
pub mod error;
pub mod intake;
pub mod logging;
pub mod report;
pub mod scoring;
pub mod types;
