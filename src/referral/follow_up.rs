// src/referral/follow_up.rs
use crate::types::{FollowUpDecision, ReferralStatus};
use chrono::{DateTime, Utc};

const FOLLOW_UP_AFTER_DAYS: i64 = 5;
const OVERDUE_AFTER_DAYS: i64 = 14;

pub fn should_follow_up_at(
    now: DateTime<Utc>,
    status: ReferralStatus,
    sent_at: Option<DateTime<Utc>>,
    follow_up_at: Option<DateTime<Utc>>,
) -> FollowUpDecision {
    if status != ReferralStatus::Sent {
        return FollowUpDecision {
            should_follow_up: false,
            reason: "Request not yet sent".to_string(),
        };
    }

    let Some(sent_at) = sent_at else {
        return FollowUpDecision {
            should_follow_up: false,
            reason: "Send date unknown".to_string(),
        };
    };

    let days_since_sent = (now - sent_at).num_days();

    if days_since_sent < FOLLOW_UP_AFTER_DAYS {
        let remaining = FOLLOW_UP_AFTER_DAYS - days_since_sent;
        let mut reason = format!("Wait {} more days before following up", remaining);
        if let Some(planned) = follow_up_at {
            reason.push_str(&format!(" (planned for {})", planned.format("%Y-%m-%d")));
        }
        FollowUpDecision {
            should_follow_up: false,
            reason,
        }
    } else if days_since_sent <= OVERDUE_AFTER_DAYS {
        FollowUpDecision {
            should_follow_up: true,
            reason: format!(
                "Sent {} days ago - good time to follow up",
                days_since_sent
            ),
        }
    } else {
        FollowUpDecision {
            should_follow_up: true,
            reason: format!("Sent {} days ago - overdue for follow-up", days_since_sent),
        }
    }
}

pub fn should_follow_up(
    status: ReferralStatus,
    sent_at: Option<DateTime<Utc>>,
    follow_up_at: Option<DateTime<Utc>>,
) -> FollowUpDecision {
    should_follow_up_at(Utc::now(), status, sent_at, follow_up_at)
}
