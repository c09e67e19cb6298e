// src/web/handlers/match_handlers.rs
use crate::core::ConfigManager;
use crate::matching::JobMatcher;
use crate::types::MatchScore;
use crate::web::types::{
    DataResponse, DisplayFormat, DisplaySection, JobMatchData, JobMatchRequest,
    StandardErrorResponse, StandardRequest, WithConversationId,
};

use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

pub async fn job_match_handler(
    request: Json<StandardRequest<JobMatchRequest>>,
    config: &State<ConfigManager>,
) -> Result<Json<DataResponse<JobMatchData>>, Json<StandardErrorResponse>> {
    let conversation_id = request.conversation_id();
    let payload = &request.data;

    let matcher = match JobMatcher::new(config.scoring.matching.clone()) {
        Ok(matcher) => matcher,
        Err(e) => {
            error!("Failed to initialize job matcher: {}", e);
            return Err(Json(StandardErrorResponse::new(
                "Service configuration error".to_string(),
                "SERVICE_CONFIG_ERROR".to_string(),
                vec!["Check scoring.matching in the server configuration".to_string()],
                conversation_id,
            )));
        }
    };

    let score = matcher.score(&payload.job, &payload.profile);

    info!(
        "Scored '{}' at {}: {}%",
        payload.job.title, payload.job.company, score.overall_score
    );

    let display = create_match_display_format(&score);

    Ok(Json(
        DataResponse::success(
            format!("Overall match: {}%", score.overall_score),
            score,
            conversation_id,
        )
        .with_display_format(display),
    ))
}

fn create_match_display_format(score: &MatchScore) -> DisplayFormat {
    let sections = vec![
        DisplaySection::points(
            "Breakdown",
            &format!(
                "Skills {}%, experience {}%, education {}%, location {}%",
                score.skills_score,
                score.experience_score,
                score.education_score,
                score.location_score
            ),
            Vec::new(),
        )
        .with_score(format!("{}%", score.overall_score)),
        DisplaySection::points("Strengths", "What already fits", score.strengths.clone()),
        DisplaySection::points("Gaps", "Where the profile falls short", score.gaps.clone()),
        DisplaySection::points(
            "Recommendations",
            "Next steps",
            score.recommendations.clone(),
        ),
    ];

    DisplayFormat {
        format_type: "job_match".to_string(),
        sections: Some(sections),
    }
}
