//! Job-search insights: shortest connection paths through the user's
//! network, referral request timing, job/profile match scoring and
//! application pipeline analytics.
//!
//! Every scoring function is pure and total; the CLI and the Rocket API in
//! [`web`] are thin shells around them.

pub mod analytics;
pub mod cli;
pub mod core;
pub mod logging;
pub mod matching;
pub mod networking;
pub mod referral;
pub mod types;
pub mod utils;
pub mod web;

pub use analytics::{summarize, ApplicationAnalytics};
pub use matching::{calculate_job_match, JobMatcher, MatchWeights};
pub use networking::{find_connection_path, ConnectionGraph};
pub use referral::{
    calculate_optimal_referral_timing, calculate_optimal_referral_timing_at, should_follow_up,
    should_follow_up_at, ReferralTimer, TimingConfig,
};
pub use web::{build_rocket, start_web_server};
