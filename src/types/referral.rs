// src/types/referral.rs
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How well the user knows the person they ask for a referral, 1 (barely) to 5 (close).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RelationshipStrength(u8);

impl RelationshipStrength {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            anyhow::bail!(
                "Relationship strength must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            );
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for RelationshipStrength {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<RelationshipStrength> for u8 {
    fn from(strength: RelationshipStrength) -> Self {
        strength.0
    }
}

impl fmt::Display for RelationshipStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralTimingInput {
    pub relationship_strength: RelationshipStrength,
    #[serde(default)]
    pub last_contacted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub job_deadline: Option<DateTime<Utc>>,
    pub job_created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingSuggestion {
    pub optimal_send_time: DateTime<Utc>,
    pub follow_up_time: DateTime<Utc>,
    /// Factors in the order they were evaluated.
    pub reasoning: Vec<String>,
    pub confidence: Confidence,
    pub confidence_score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferralStatus {
    Draft,
    Sent,
    Responded,
    Accepted,
    Declined,
}

impl FromStr for ReferralStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "draft" | "pending" => Ok(ReferralStatus::Draft),
            "sent" => Ok(ReferralStatus::Sent),
            "responded" => Ok(ReferralStatus::Responded),
            "accepted" => Ok(ReferralStatus::Accepted),
            "declined" => Ok(ReferralStatus::Declined),
            other => anyhow::bail!(
                "Unknown referral status: {}. Use draft, sent, responded, accepted or declined",
                other
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpDecision {
    pub should_follow_up: bool,
    pub reason: String,
}
