// src/analytics/mod.rs
//! Pipeline analytics over the user's applications: funnel counts,
//! stage-to-stage conversion, time spent in each stage and response rates.

use crate::types::{Application, ApplicationStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub status: ApplicationStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRate {
    pub from: ApplicationStatus,
    pub to: ApplicationStatus,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageDuration {
    pub status: ApplicationStatus,
    pub average_days: f64,
    pub samples: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: ApplicationStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationAnalytics {
    pub total: usize,
    pub active: usize,
    pub by_status: Vec<StatusCount>,
    pub funnel: Vec<FunnelStage>,
    pub conversions: Vec<ConversionRate>,
    pub time_in_stage: Vec<StageDuration>,
    pub response_rate: f64,
    pub offer_rate: f64,
}

const ALL_STATUSES: [ApplicationStatus; 8] = [
    ApplicationStatus::Wishlist,
    ApplicationStatus::Applied,
    ApplicationStatus::Screening,
    ApplicationStatus::Interviewing,
    ApplicationStatus::Offer,
    ApplicationStatus::Accepted,
    ApplicationStatus::Rejected,
    ApplicationStatus::Withdrawn,
];

/// Furthest funnel stage an application is known to have reached.
pub fn furthest_stage(application: &Application) -> ApplicationStatus {
    let reached = application
        .status_history
        .iter()
        .map(|change| change.status)
        .chain(std::iter::once(application.status))
        .filter_map(|status| status.funnel_rank())
        .max();

    let applied_rank = ApplicationStatus::Applied.funnel_rank().unwrap_or(1);
    let rank = match (reached, application.applied_at) {
        (Some(rank), Some(_)) => rank.max(applied_rank),
        (Some(rank), None) => rank,
        (None, Some(_)) => applied_rank,
        (None, None) => 0,
    };

    ApplicationStatus::FUNNEL[rank]
}

/// Applications that reached each funnel stage or went past it.
pub fn funnel_counts(applications: &[Application]) -> Vec<FunnelStage> {
    let mut counts = [0usize; ApplicationStatus::FUNNEL.len()];

    for application in applications {
        let rank = furthest_stage(application).funnel_rank().unwrap_or(0);
        for count in counts.iter_mut().take(rank + 1) {
            *count += 1;
        }
    }

    ApplicationStatus::FUNNEL
        .iter()
        .zip(counts)
        .map(|(status, count)| FunnelStage {
            status: *status,
            count,
        })
        .collect()
}

/// Percentage moving from each stage to the next, one decimal.
pub fn conversion_rates(funnel: &[FunnelStage]) -> Vec<ConversionRate> {
    funnel
        .windows(2)
        .map(|pair| ConversionRate {
            from: pair[0].status,
            to: pair[1].status,
            rate: percentage(pair[1].count, pair[0].count),
        })
        .collect()
}

/// Average days spent in each status, from consecutive history entries.
///
/// The latest entry of an application that is still in flight counts up to `now`.
pub fn time_in_stage(applications: &[Application], now: DateTime<Utc>) -> Vec<StageDuration> {
    let mut totals: HashMap<ApplicationStatus, (f64, usize)> = HashMap::new();

    for application in applications {
        let mut history = application.status_history.clone();
        history.sort_by_key(|change| change.changed_at);

        for (index, change) in history.iter().enumerate() {
            let until = match history.get(index + 1) {
                Some(next) => next.changed_at,
                None if application.status.is_terminal() || change.status.is_terminal() => {
                    continue
                }
                None => now,
            };

            let days = (until - change.changed_at).num_minutes() as f64 / (60.0 * 24.0);
            let entry = totals.entry(change.status).or_insert((0.0, 0));
            entry.0 += days.max(0.0);
            entry.1 += 1;
        }
    }

    ALL_STATUSES
        .iter()
        .filter_map(|status| {
            totals.get(status).map(|(total, samples)| StageDuration {
                status: *status,
                average_days: round_one_decimal(total / *samples as f64),
                samples: *samples,
            })
        })
        .collect()
}

pub fn summarize(applications: &[Application], now: DateTime<Utc>) -> ApplicationAnalytics {
    let funnel = funnel_counts(applications);
    let conversions = conversion_rates(&funnel);
    let time_in_stage = time_in_stage(applications, now);

    let by_status = ALL_STATUSES
        .iter()
        .map(|status| StatusCount {
            status: *status,
            count: applications.iter().filter(|a| a.status == *status).count(),
        })
        .collect();

    let active = applications
        .iter()
        .filter(|a| !a.status.is_terminal())
        .count();

    let applied_rank = ApplicationStatus::Applied.funnel_rank().unwrap_or(1);
    let screening_rank = ApplicationStatus::Screening.funnel_rank().unwrap_or(2);
    let offer_rank = ApplicationStatus::Offer.funnel_rank().unwrap_or(4);

    let mut applied = 0;
    let mut responded = 0;
    let mut offers = 0;
    for application in applications {
        let rank = furthest_stage(application).funnel_rank().unwrap_or(0);
        if rank < applied_rank {
            continue;
        }
        applied += 1;
        if rank >= screening_rank || application.status == ApplicationStatus::Rejected {
            responded += 1;
        }
        if rank >= offer_rank {
            offers += 1;
        }
    }

    debug!(
        "Summarized {} applications: {} applied, {} responses, {} offers",
        applications.len(),
        applied,
        responded,
        offers
    );

    ApplicationAnalytics {
        total: applications.len(),
        active,
        by_status,
        funnel,
        conversions,
        time_in_stage,
        response_rate: percentage(responded, applied),
        offer_rate: percentage(offers, applied),
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_one_decimal(part as f64 / whole as f64 * 100.0)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
