// src/types/mod.rs
//! Shared data model for the job-search insights engine

pub mod application;
pub mod job;
pub mod network;
pub mod referral;

pub use application::{Application, ApplicationStatus, StatusChange};
pub use job::{
    EducationEntry, EmploymentEntry, ExperienceLevel, Job, MatchScore, Profile, SalaryRange,
    Skill, SkillLevel,
};
pub use network::{ConnectionEdge, ConnectionPath, Contact};
pub use referral::{
    Confidence, FollowUpDecision, ReferralStatus, ReferralTimingInput, RelationshipStrength,
    TimingSuggestion,
};
