// src/matching/mod.rs
//! Keyword-overlap scoring of a job posting against a candidate profile

pub mod job_match;
pub mod keywords;

pub use job_match::{calculate_job_match, location_score, JobMatcher, MatchWeights};
pub use keywords::{extract_keywords, jaccard_score};
