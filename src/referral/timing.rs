// src/referral/timing.rs
use crate::types::{Confidence, ReferralTimingInput, RelationshipStrength, TimingSuggestion};
use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Cut-offs that bucket the accumulated confidence score.
///
/// The best reachable score is 90 (40 relationship + 30 recency + 20 deadline),
/// so these are absolute points, not percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_high_threshold")]
    pub high_threshold: u32,
    #[serde(default = "default_medium_threshold")]
    pub medium_threshold: u32,
}

fn default_high_threshold() -> u32 {
    70
}

fn default_medium_threshold() -> u32 {
    50
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            high_threshold: default_high_threshold(),
            medium_threshold: default_medium_threshold(),
        }
    }
}

impl TimingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.high_threshold <= self.medium_threshold {
            anyhow::bail!(
                "High confidence threshold ({}) must be above the medium threshold ({})",
                self.high_threshold,
                self.medium_threshold
            );
        }
        Ok(())
    }

    pub fn bucket(&self, score: u32) -> Confidence {
        if score >= self.high_threshold {
            Confidence::High
        } else if score >= self.medium_threshold {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

pub struct ReferralTimer {
    config: TimingConfig,
}

impl Default for ReferralTimer {
    fn default() -> Self {
        Self {
            config: TimingConfig::default(),
        }
    }
}

impl ReferralTimer {
    pub fn new(config: TimingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Recommend when to send a referral request and when to chase it.
    ///
    /// Factors are applied in a fixed order: relationship strength sets the
    /// base delay, contact recency adds to it, and deadline pressure can only
    /// pull it in.
    pub fn suggest_at(
        &self,
        now: DateTime<Utc>,
        relationship_strength: RelationshipStrength,
        last_contacted_at: Option<DateTime<Utc>>,
        job_deadline: Option<DateTime<Utc>>,
        job_created_at: DateTime<Utc>,
    ) -> TimingSuggestion {
        let mut reasoning = Vec::new();
        let mut confidence_score: u32 = 0;

        let strength = relationship_strength.value();
        let mut optimal_days_from_now: i64 = if strength >= 4 {
            confidence_score += 40;
            reasoning.push("Strong relationship - you can reach out right away".to_string());
            1
        } else if strength == 3 {
            confidence_score += 30;
            reasoning.push("Moderate relationship - give it a couple of days".to_string());
            2
        } else {
            confidence_score += 20;
            reasoning.push("Weak relationship - warm up the connection before asking".to_string());
            5
        };

        match last_contacted_at {
            Some(last_contacted) => {
                let days_since = (now - last_contacted).num_days();
                if days_since < 7 {
                    confidence_score += 30;
                    reasoning.push(format!(
                        "Recent contact ({} days ago) keeps the conversation warm",
                        days_since
                    ));
                } else if days_since < 30 {
                    optimal_days_from_now += 1;
                    confidence_score += 20;
                    reasoning.push(format!(
                        "Last contact {} days ago - a quick check-in first helps",
                        days_since
                    ));
                } else if days_since < 90 {
                    optimal_days_from_now += 3;
                    confidence_score += 10;
                    reasoning.push(format!(
                        "Last contact {} days ago - reconnect before making the ask",
                        days_since
                    ));
                } else {
                    optimal_days_from_now += 7;
                    reasoning.push(format!(
                        "No contact for {} days - rebuild rapport before asking",
                        days_since
                    ));
                }
            }
            None => {
                optimal_days_from_now += 5;
                reasoning.push(
                    "No interaction history - introduce yourself before requesting a referral"
                        .to_string(),
                );
            }
        }

        match job_deadline {
            Some(deadline) => {
                let days_until = (deadline - now).num_days();
                if days_until < 7 {
                    optimal_days_from_now = optimal_days_from_now.min(1);
                    confidence_score += 20;
                    reasoning.push(format!(
                        "Application deadline in {} days - send as soon as possible",
                        days_until
                    ));
                } else if days_until < 14 {
                    optimal_days_from_now = optimal_days_from_now.min(2);
                    confidence_score += 15;
                    reasoning.push(format!(
                        "Application deadline in {} days - do not wait long",
                        days_until
                    ));
                } else {
                    confidence_score += 10;
                    reasoning.push("Comfortable amount of time before the deadline".to_string());
                }
            }
            None => {
                let job_age = (now - job_created_at).num_days();
                if job_age > 14 {
                    optimal_days_from_now = (optimal_days_from_now - 2).max(1);
                    reasoning.push(format!(
                        "Job was posted {} days ago - move before it is filled",
                        job_age
                    ));
                }
            }
        }

        let optimal_send_time = now + Duration::days(optimal_days_from_now);
        let follow_up_days = if strength >= 4 { 5 } else { 7 };
        let follow_up_time = optimal_send_time + Duration::days(follow_up_days);
        let confidence = self.config.bucket(confidence_score);

        debug!(
            "Referral timing: send in {} days, score {} ({})",
            optimal_days_from_now, confidence_score, confidence
        );

        TimingSuggestion {
            optimal_send_time,
            follow_up_time,
            reasoning,
            confidence,
            confidence_score,
        }
    }

    pub fn suggest_for(&self, now: DateTime<Utc>, input: &ReferralTimingInput) -> TimingSuggestion {
        self.suggest_at(
            now,
            input.relationship_strength,
            input.last_contacted_at,
            input.job_deadline,
            input.job_created_at,
        )
    }
}

pub fn calculate_optimal_referral_timing_at(
    now: DateTime<Utc>,
    relationship_strength: RelationshipStrength,
    last_contacted_at: Option<DateTime<Utc>>,
    job_deadline: Option<DateTime<Utc>>,
    job_created_at: DateTime<Utc>,
) -> TimingSuggestion {
    ReferralTimer::default().suggest_at(
        now,
        relationship_strength,
        last_contacted_at,
        job_deadline,
        job_created_at,
    )
}

pub fn calculate_optimal_referral_timing(
    relationship_strength: RelationshipStrength,
    last_contacted_at: Option<DateTime<Utc>>,
    job_deadline: Option<DateTime<Utc>>,
    job_created_at: DateTime<Utc>,
) -> TimingSuggestion {
    calculate_optimal_referral_timing_at(
        Utc::now(),
        relationship_strength,
        last_contacted_at,
        job_deadline,
        job_created_at,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()
    }

    fn strength(value: u8) -> RelationshipStrength {
        RelationshipStrength::new(value).unwrap()
    }

    #[test]
    fn test_close_contact_with_distant_deadline() {
        let now = now();
        let suggestion = calculate_optimal_referral_timing_at(
            now,
            strength(5),
            Some(now),
            Some(now + Duration::days(60)),
            now,
        );

        assert_eq!(suggestion.confidence, Confidence::High);
        assert_eq!(suggestion.confidence_score, 80);
        assert_eq!(suggestion.optimal_send_time, now + Duration::days(1));
        assert_eq!(suggestion.follow_up_time, now + Duration::days(6));
    }

    #[test]
    fn test_weak_relationship_without_history() {
        let now = now();
        let suggestion = calculate_optimal_referral_timing_at(
            now,
            strength(2),
            None,
            None,
            now - Duration::days(20),
        );

        assert!(suggestion.reasoning[0].contains("Weak relationship"));
        assert!(suggestion.reasoning[1].contains("No interaction history"));
        assert!(suggestion.reasoning[2].contains("20 days ago"));
        assert_eq!(suggestion.confidence, Confidence::Low);
        // 5 base + 5 no history - 2 stale posting
        assert_eq!(suggestion.optimal_send_time, now + Duration::days(8));
        assert_eq!(suggestion.follow_up_time, now + Duration::days(15));
    }

    #[test]
    fn test_recency_adds_days() {
        let now = now();
        let suggestion = calculate_optimal_referral_timing_at(
            now,
            strength(3),
            Some(now - Duration::days(45)),
            None,
            now,
        );

        // 2 base + 3 for a 45 day gap
        assert_eq!(suggestion.optimal_send_time, now + Duration::days(5));
        assert_eq!(suggestion.confidence_score, 40);
        assert_eq!(suggestion.confidence, Confidence::Low);
    }

    #[test]
    fn test_urgent_deadline_only_shrinks_delay() {
        let now = now();
        let suggestion = calculate_optimal_referral_timing_at(
            now,
            strength(1),
            Some(now - Duration::days(200)),
            Some(now + Duration::days(3)),
            now,
        );

        assert_eq!(suggestion.optimal_send_time, now + Duration::days(1));
        assert_eq!(suggestion.confidence_score, 40);
        assert_eq!(suggestion.reasoning.len(), 3);

        let suggestion = calculate_optimal_referral_timing_at(
            now,
            strength(5),
            Some(now),
            Some(now + Duration::days(10)),
            now,
        );
        // already at 1 day, min(1, 2) keeps it there
        assert_eq!(suggestion.optimal_send_time, now + Duration::days(1));
        assert_eq!(suggestion.confidence_score, 85);
    }

    #[test]
    fn test_stale_posting_floor_is_one_day() {
        let now = now();
        let suggestion = calculate_optimal_referral_timing_at(
            now,
            strength(4),
            Some(now),
            None,
            now - Duration::days(30),
        );
        assert_eq!(suggestion.optimal_send_time, now + Duration::days(1));
        assert_eq!(suggestion.confidence, Confidence::High);
    }

    #[test]
    fn test_medium_bucket() {
        let now = now();
        let suggestion = calculate_optimal_referral_timing_at(
            now,
            strength(3),
            Some(now - Duration::days(10)),
            Some(now + Duration::days(30)),
            now,
        );
        assert_eq!(suggestion.confidence_score, 60);
        assert_eq!(suggestion.confidence, Confidence::Medium);
    }

    #[test]
    fn test_recency_boundaries() {
        let now = now();
        // (time since last contact, days until send, score) for a strength-3 contact
        let cases = [
            (Duration::days(6), 2, 60),
            (Duration::days(7) - Duration::minutes(1), 2, 60),
            (Duration::days(7), 3, 50),
            (Duration::days(29), 3, 50),
            (Duration::days(30), 5, 40),
            (Duration::days(89), 5, 40),
            (Duration::days(90), 9, 30),
        ];

        for (since, days, score) in cases {
            let suggestion = calculate_optimal_referral_timing_at(
                now,
                strength(3),
                Some(now - since),
                None,
                now,
            );
            assert_eq!(
                suggestion.optimal_send_time,
                now + Duration::days(days),
                "last contact {:?} ago",
                since
            );
            assert_eq!(suggestion.confidence_score, score, "last contact {:?} ago", since);
        }
    }

    #[test]
    fn test_deadline_boundaries() {
        let now = now();
        // strength 3 without history starts at 7 days and 30 points
        let cases = [
            (Duration::days(6), 1, 50),
            (Duration::days(7) - Duration::minutes(1), 1, 50),
            (Duration::days(7), 2, 45),
            (Duration::days(13), 2, 45),
            (Duration::days(14), 7, 40),
        ];

        for (until, days, score) in cases {
            let suggestion = calculate_optimal_referral_timing_at(
                now,
                strength(3),
                None,
                Some(now + until),
                now,
            );
            assert_eq!(
                suggestion.optimal_send_time,
                now + Duration::days(days),
                "deadline in {:?}",
                until
            );
            assert_eq!(suggestion.confidence_score, score, "deadline in {:?}", until);
        }
    }

    #[test]
    fn test_posting_age_boundary() {
        let now = now();
        let cases = [
            (Duration::days(14), 7),
            (Duration::days(15) - Duration::minutes(1), 7),
            (Duration::days(15), 5),
        ];

        for (age, days) in cases {
            let suggestion =
                calculate_optimal_referral_timing_at(now, strength(3), None, None, now - age);
            assert_eq!(
                suggestion.optimal_send_time,
                now + Duration::days(days),
                "posted {:?} ago",
                age
            );
            assert_eq!(suggestion.confidence_score, 30);
        }
    }

    #[test]
    fn test_suggest_for_input_record() {
        let now = now();
        let input = ReferralTimingInput {
            relationship_strength: strength(4),
            last_contacted_at: Some(now - Duration::days(2)),
            job_deadline: None,
            job_created_at: now,
        };

        let suggestion = ReferralTimer::default().suggest_for(now, &input);
        assert_eq!(suggestion.confidence_score, 70);
        assert_eq!(suggestion.confidence, Confidence::High);
        assert_eq!(suggestion.optimal_send_time, now + Duration::days(1));
    }

    #[test]
    fn test_custom_thresholds() {
        let timer = ReferralTimer::new(TimingConfig {
            high_threshold: 40,
            medium_threshold: 20,
        })
        .unwrap();
        let now = now();
        let suggestion = timer.suggest_at(now, strength(4), None, None, now);
        assert_eq!(suggestion.confidence, Confidence::High);

        assert!(ReferralTimer::new(TimingConfig {
            high_threshold: 50,
            medium_threshold: 50,
        })
        .is_err());
    }
}
