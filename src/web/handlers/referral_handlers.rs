// src/web/handlers/referral_handlers.rs
use crate::core::ConfigManager;
use crate::referral::{should_follow_up, ReferralTimer};
use crate::types::ReferralTimingInput;
use crate::web::types::{
    DataResponse, DisplayFormat, DisplaySection, FollowUpData, FollowUpRequest,
    ReferralTimingData, StandardErrorResponse, StandardRequest, WithConversationId,
};

use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

pub async fn referral_timing_handler(
    request: Json<StandardRequest<ReferralTimingInput>>,
    config: &State<ConfigManager>,
) -> Result<Json<DataResponse<ReferralTimingData>>, Json<StandardErrorResponse>> {
    let conversation_id = request.conversation_id();
    let payload = &request.data;

    let timer = match ReferralTimer::new(config.scoring.timing.clone()) {
        Ok(timer) => timer,
        Err(e) => {
            error!("Failed to initialize referral timer: {}", e);
            return Err(Json(StandardErrorResponse::new(
                "Service configuration error".to_string(),
                "SERVICE_CONFIG_ERROR".to_string(),
                vec!["Check scoring.timing in the server configuration".to_string()],
                conversation_id,
            )));
        }
    };

    let suggestion = timer.suggest_for(chrono::Utc::now(), payload);

    info!(
        "Referral timing for strength {}: send {} ({} confidence)",
        payload.relationship_strength,
        suggestion.optimal_send_time.format("%Y-%m-%d"),
        suggestion.confidence
    );

    let display = DisplayFormat {
        format_type: "referral_timing".to_string(),
        sections: Some(vec![DisplaySection::points(
            "Recommended timing",
            &format!(
                "Send on {}, follow up on {}",
                suggestion.optimal_send_time.format("%Y-%m-%d"),
                suggestion.follow_up_time.format("%Y-%m-%d")
            ),
            suggestion.reasoning.clone(),
        )
        .with_score(suggestion.confidence.to_string())]),
    };

    Ok(Json(
        DataResponse::success(
            format!("Referral timing computed ({} confidence)", suggestion.confidence),
            suggestion,
            conversation_id,
        )
        .with_display_format(display),
    ))
}

pub async fn follow_up_handler(
    request: Json<StandardRequest<FollowUpRequest>>,
) -> Json<DataResponse<FollowUpData>> {
    let conversation_id = request.conversation_id();
    let payload = &request.data;

    let decision = should_follow_up(payload.status, payload.sent_at, payload.follow_up_at);

    info!(
        "Follow-up check: {} ({})",
        decision.should_follow_up, decision.reason
    );

    Json(DataResponse::success(
        decision.reason.clone(),
        decision,
        conversation_id,
    ))
}
