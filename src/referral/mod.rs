// src/referral/mod.rs
//! Referral request timing and follow-up heuristics

pub mod follow_up;
pub mod timing;

pub use follow_up::{should_follow_up, should_follow_up_at};
pub use timing::{
    calculate_optimal_referral_timing, calculate_optimal_referral_timing_at, ReferralTimer,
    TimingConfig,
};
