pub mod assessment;
pub mod config;
pub mod question;
pub mod report;
pub mod scoring;
