// src/web/handlers/analytics_handlers.rs
use crate::analytics;
use crate::analytics::ApplicationAnalytics;
use crate::web::types::{
    AnalyticsData, AnalyticsRequest, DataResponse, DisplayFormat, DisplaySection,
    StandardRequest, WithConversationId,
};

use rocket::serde::json::Json;
use tracing::info;

pub async fn analytics_summary_handler(
    request: Json<StandardRequest<AnalyticsRequest>>,
) -> Json<DataResponse<AnalyticsData>> {
    let conversation_id = request.conversation_id();
    let summary = analytics::summarize(&request.data.applications, chrono::Utc::now());

    info!(
        "Analytics for {} applications: response rate {}%, offer rate {}%",
        summary.total, summary.response_rate, summary.offer_rate
    );

    let display = create_funnel_display_format(&summary);

    Json(
        DataResponse::success(
            format!("Summarized {} applications", summary.total),
            summary,
            conversation_id,
        )
        .with_display_format(display),
    )
}

fn create_funnel_display_format(summary: &ApplicationAnalytics) -> DisplayFormat {
    let stages = summary
        .funnel
        .iter()
        .map(|stage| format!("{}: {}", stage.status.as_str(), stage.count))
        .collect();

    let durations = summary
        .time_in_stage
        .iter()
        .map(|stage| format!("{}: {} days", stage.status.as_str(), stage.average_days))
        .collect();

    DisplayFormat {
        format_type: "application_funnel".to_string(),
        sections: Some(vec![
            DisplaySection::points(
                "Funnel",
                &format!("{} active of {} applications", summary.active, summary.total),
                stages,
            )
            .with_score(format!("{}% response rate", summary.response_rate)),
            DisplaySection::points("Average time in stage", "", durations),
        ]),
    }
}
