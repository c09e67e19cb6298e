// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use crate::core::ConfigManager;
use crate::types::ReferralTimingInput;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[post("/network/path", data = "<request>")]
pub async fn find_connection_path(
    request: Json<StandardRequest<ConnectionPathRequest>>,
) -> Result<Json<DataResponse<ConnectionPathData>>, Json<StandardErrorResponse>> {
    handlers::find_connection_path_handler(request).await
}

#[post("/referrals/timing", data = "<request>")]
pub async fn referral_timing(
    request: Json<StandardRequest<ReferralTimingInput>>,
    config: &State<ConfigManager>,
) -> Result<Json<DataResponse<ReferralTimingData>>, Json<StandardErrorResponse>> {
    handlers::referral_timing_handler(request, config).await
}

#[post("/referrals/follow-up", data = "<request>")]
pub async fn follow_up(
    request: Json<StandardRequest<FollowUpRequest>>,
) -> Json<DataResponse<FollowUpData>> {
    handlers::follow_up_handler(request).await
}

#[post("/jobs/match", data = "<request>")]
pub async fn job_match(
    request: Json<StandardRequest<JobMatchRequest>>,
    config: &State<ConfigManager>,
) -> Result<Json<DataResponse<JobMatchData>>, Json<StandardErrorResponse>> {
    handlers::job_match_handler(request, config).await
}

#[post("/analytics/summary", data = "<request>")]
pub async fn analytics_summary(
    request: Json<StandardRequest<AnalyticsRequest>>,
) -> Json<DataResponse<AnalyticsData>> {
    handlers::analytics_summary_handler(request).await
}

#[get("/health")]
pub async fn health(config: &State<ConfigManager>) -> Json<TextResponse> {
    handlers::health_handler(config).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
        None,
    ))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Endpoint not found".to_string(),
        "NOT_FOUND".to_string(),
        vec!["Check the request path and method".to_string()],
        None,
    ))
}

#[rocket::catch(422)]
pub fn unprocessable_entity() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Request body failed validation".to_string(),
        "VALIDATION_ERROR".to_string(),
        vec![
            "relationship_strength must be between 1 and 5".to_string(),
            "Timestamps must be RFC 3339 (e.g. 2025-01-31T09:00:00Z)".to_string(),
            "Statuses must use their lowercase names".to_string(),
        ],
        None,
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
        None,
    ))
}

/// Assemble the application without launching it.
pub fn build_rocket(config: ConfigManager) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", config.server.address))
        .merge(("port", config.server.port));

    rocket::custom(figment)
        .attach(Cors)
        .manage(config)
        .register(
            "/api",
            catchers![bad_request, not_found, unprocessable_entity, internal_error],
        )
        .mount(
            "/api",
            routes![
                find_connection_path,
                referral_timing,
                follow_up,
                job_match,
                analytics_summary,
                health,
                options,
            ],
        )
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    info!("Starting jobtrail insights API server");
    config.log_summary();

    build_rocket(config)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Web server terminated with an error: {}", e))?;

    Ok(())
}
