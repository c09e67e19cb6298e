use job_insights::build_rocket;
use job_insights::core::ConfigManager;
use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use serde_json::{json, Value};

fn client() -> Client {
    Client::tracked(build_rocket(ConfigManager::default())).expect("valid rocket instance")
}

fn post_json(client: &Client, path: &str, body: Value) -> (Status, Value) {
    let response = client
        .post(path)
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch();
    let status = response.status();
    let body = response.into_json::<Value>().expect("json body");
    (status, body)
}

#[test]
fn health_reports_environment() {
    let client = client();
    let response = client.get("/api/health").dispatch();
    assert_eq!(response.status(), Status::Ok);

    let body = response.into_json::<Value>().unwrap();
    assert_eq!(body["type"], "text");
    assert_eq!(body["message"], "OK (local)");
}

#[test]
fn connection_path_second_degree() {
    let client = client();
    let (status, body) = post_json(
        &client,
        "/api/network/path",
        json!({
            "contacts": [{"id": "alice", "name": "Alice"}],
            "connections": [{"contact_a": "bob", "contact_b": "alice"}],
            "directory": [{"id": "bob", "name": "Bob", "company": "Initech"}],
            "target_contact_id": "bob",
            "conversation_id": "conv-1"
        }),
    );

    assert_eq!(status, Status::Ok);
    assert_eq!(body["data"]["found"], true);
    assert_eq!(body["data"]["connection"]["degree"], 2);
    assert_eq!(body["data"]["connection"]["target"]["name"], "Bob");
    assert_eq!(body["message"], "2nd degree via Alice");
    assert_eq!(body["conversation_id"], "conv-1");
}

#[test]
fn connection_path_not_found_is_not_an_error() {
    let client = client();
    let (status, body) = post_json(
        &client,
        "/api/network/path",
        json!({
            "contacts": [{"id": "alice", "name": "Alice"}],
            "connections": [],
            "target_contact_id": "zed"
        }),
    );

    assert_eq!(status, Status::Ok);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["found"], false);
    assert!(body["data"]["connection"].is_null());
}

#[test]
fn referral_timing_rejects_out_of_range_strength() {
    let client = client();
    let (status, body) = post_json(
        &client,
        "/api/referrals/timing",
        json!({
            "relationship_strength": 9,
            "job_created_at": "2025-01-01T00:00:00Z"
        }),
    );

    assert_eq!(status, Status::UnprocessableEntity);
    assert_eq!(body["error_code"], "VALIDATION_ERROR");
}

#[test]
fn referral_timing_weak_relationship() {
    let client = client();
    let (status, body) = post_json(
        &client,
        "/api/referrals/timing",
        json!({
            "relationship_strength": 2,
            "job_created_at": "2020-01-01T00:00:00Z"
        }),
    );

    assert_eq!(status, Status::Ok);
    assert_eq!(body["data"]["confidence"], "low");
    let reasoning = body["data"]["reasoning"].as_array().unwrap();
    assert!(reasoning[0].as_str().unwrap().contains("Weak relationship"));
    assert!(reasoning[1].as_str().unwrap().contains("No interaction history"));
}

#[test]
fn follow_up_for_old_request_is_overdue() {
    let client = client();
    let (status, body) = post_json(
        &client,
        "/api/referrals/follow-up",
        json!({
            "status": "sent",
            "sent_at": "2020-01-01T00:00:00Z"
        }),
    );

    assert_eq!(status, Status::Ok);
    assert_eq!(body["data"]["should_follow_up"], true);
    assert!(body["data"]["reason"].as_str().unwrap().contains("overdue"));
}

#[test]
fn job_match_exact_skills() {
    let client = client();
    let (status, body) = post_json(
        &client,
        "/api/jobs/match",
        json!({
            "job": {
                "title": "Software Engineer",
                "description": "react typescript node",
                "company": "Acme"
            },
            "profile": {
                "skills": [{"name": "react"}, {"name": "typescript"}, {"name": "node"}]
            }
        }),
    );

    assert_eq!(status, Status::Ok);
    assert_eq!(body["data"]["skills_score"], 100);
    let strengths = body["data"]["strengths"].as_array().unwrap();
    assert!(strengths.iter().any(|s| s == "Strong skill match"));
    assert_eq!(body["display_format"]["type"], "job_match");
}

#[test]
fn analytics_summary_counts_funnel() {
    let client = client();
    let (status, body) = post_json(
        &client,
        "/api/analytics/summary",
        json!({
            "applications": [
                {"id": "1", "status": "applied", "applied_at": "2025-01-02T00:00:00Z"},
                {"id": "2", "status": "rejected", "status_history": [
                    {"status": "applied", "changed_at": "2025-01-01T00:00:00Z"},
                    {"status": "screening", "changed_at": "2025-01-05T00:00:00Z"},
                    {"status": "rejected", "changed_at": "2025-01-09T00:00:00Z"}
                ]}
            ]
        }),
    );

    assert_eq!(status, Status::Ok);
    assert_eq!(body["data"]["total"], 2);
    assert_eq!(body["data"]["funnel"][1]["count"], 2);
    assert_eq!(body["data"]["funnel"][2]["count"], 1);
    assert_eq!(body["data"]["response_rate"], 50.0);
    assert_eq!(body["display_format"]["type"], "application_funnel");
    assert_eq!(body["display_format"]["sections"][0]["points"][1], "applied: 2");
}

#[test]
fn unknown_route_uses_error_envelope() {
    let client = client();
    let response = client.get("/api/nope").dispatch();
    assert_eq!(response.status(), Status::NotFound);

    let body = response.into_json::<Value>().unwrap();
    assert_eq!(body["error_code"], "NOT_FOUND");
}

#[test]
fn invalid_records_are_rejected_at_the_boundary() {
    let client = client();
    let (status, body) = post_json(
        &client,
        "/api/network/path",
        json!({
            "contacts": [{"id": "", "name": "Nobody"}],
            "target_contact_id": "bob"
        }),
    );
    assert_eq!(status, Status::UnprocessableEntity);
    assert_eq!(body["error_code"], "VALIDATION_ERROR");

    let (status, _) = post_json(
        &client,
        "/api/jobs/match",
        json!({
            "job": {"title": "Engineer", "salary_range": {"min": 100, "max": 50}}
        }),
    );
    assert_eq!(status, Status::UnprocessableEntity);
}
