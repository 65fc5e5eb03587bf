//! Résumé analysis: keyword tables, field extraction, scoring, report
//! composition, and the strategy chain that ties them together.

pub mod facts;
pub mod handlers;
pub mod keywords;
pub mod prompts;
pub mod report;
pub mod scoring;
pub mod strategy;
