// src/web/types.rs - Request and response envelopes for the JSON API

use crate::analytics::ApplicationAnalytics;
use crate::types::{
    Application, ConnectionEdge, ConnectionPath, Contact, FollowUpDecision, Job, MatchScore,
    Profile, ReferralStatus, TimingSuggestion,
};
use chrono::{DateTime, Utc};
use rocket::serde::{Deserialize, Serialize};

// ===== Request Payloads =====

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ConnectionPathRequest {
    pub contacts: Vec<Contact>,
    pub target_contact_id: String,
    #[serde(default)]
    pub connections: Vec<ConnectionEdge>,
    /// Contacts owned by other users, used to name intermediate hops
    #[serde(default)]
    pub directory: Vec<Contact>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct FollowUpRequest {
    pub status: ReferralStatus,
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub follow_up_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct JobMatchRequest {
    pub job: Job,
    #[serde(default)]
    pub profile: Profile,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct AnalyticsRequest {
    pub applications: Vec<Application>,
}

// Request types with conversation_id support
#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardRequest<T> {
    #[serde(flatten)]
    pub data: T,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

// Helper trait for extracting conversation_id
pub trait WithConversationId {
    fn conversation_id(&self) -> Option<String>;
}

impl<T> WithConversationId for StandardRequest<T> {
    fn conversation_id(&self) -> Option<String> {
        self.conversation_id.clone()
    }
}

// ===== Response Payloads =====

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ConnectionPathData {
    pub found: bool,
    pub connection: Option<ConnectionPath>,
}

pub type ReferralTimingData = TimingSuggestion;
pub type FollowUpData = FollowUpDecision;
pub type JobMatchData = MatchScore;
pub type AnalyticsData = ApplicationAnalytics;

// ===== Standard Envelopes =====

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TextResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_format: Option<DisplayFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseType {
    Text,
    Data,
    Error,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DisplayFormat {
    #[serde(rename = "type")]
    pub format_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<DisplaySection>>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DisplaySection {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<String>>,
}

// Helper functions to create standard responses
impl TextResponse {
    pub fn success(message: String, conversation_id: Option<String>) -> Self {
        Self {
            response_type: ResponseType::Text,
            success: true,
            message,
            conversation_id,
        }
    }
}

impl<T> DataResponse<T> {
    pub fn success(message: String, data: T, conversation_id: Option<String>) -> Self {
        Self {
            response_type: ResponseType::Data,
            success: true,
            message,
            data,
            display_format: None,
            conversation_id,
        }
    }

    pub fn with_display_format(mut self, display_format: DisplayFormat) -> Self {
        self.display_format = Some(display_format);
        self
    }
}

impl StandardErrorResponse {
    pub fn new(
        error: String,
        error_code: String,
        suggestions: Vec<String>,
        conversation_id: Option<String>,
    ) -> Self {
        Self {
            response_type: ResponseType::Error,
            success: false,
            error,
            error_code,
            suggestions,
            conversation_id,
        }
    }
}

impl DisplaySection {
    pub fn points(title: &str, content: &str, points: Vec<String>) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
            score: None,
            points: if points.is_empty() { None } else { Some(points) },
        }
    }

    pub fn with_score(mut self, score: String) -> Self {
        self.score = Some(score);
        self
    }
}
