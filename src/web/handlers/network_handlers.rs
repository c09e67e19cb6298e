// src/web/handlers/network_handlers.rs
use crate::networking::{ConnectionGraph, MAX_DEGREE};
use crate::web::types::{
    ConnectionPathData, ConnectionPathRequest, DataResponse, DisplayFormat, DisplaySection,
    StandardErrorResponse, StandardRequest, WithConversationId,
};

use rocket::serde::json::Json;
use tracing::info;

pub async fn find_connection_path_handler(
    request: Json<StandardRequest<ConnectionPathRequest>>,
) -> Result<Json<DataResponse<ConnectionPathData>>, Json<StandardErrorResponse>> {
    let conversation_id = request.conversation_id();
    let payload = &request.data;

    if payload.target_contact_id.trim().is_empty() {
        return Err(Json(StandardErrorResponse::new(
            "Target contact id is required".to_string(),
            "MISSING_TARGET".to_string(),
            vec!["Provide target_contact_id in the request body".to_string()],
            conversation_id,
        )));
    }

    info!(
        "Searching connection path to {} across {} contacts and {} connections",
        payload.target_contact_id,
        payload.contacts.len(),
        payload.connections.len()
    );

    let found = ConnectionGraph::new(&payload.connections)
        .with_directory(&payload.directory)
        .find_path(&payload.contacts, &payload.target_contact_id);

    match found {
        Some(connection) => {
            info!(
                "Found {} for {}",
                connection.path_description, payload.target_contact_id
            );

            let display = DisplayFormat {
                format_type: "connection_path".to_string(),
                sections: Some(vec![DisplaySection::points(
                    &connection.target.name,
                    &connection.path_description,
                    connection.path.iter().map(|c| c.name.clone()).collect(),
                )
                .with_score(format!("degree {}", connection.degree))]),
            };

            Ok(Json(
                DataResponse::success(
                    connection.path_description.clone(),
                    ConnectionPathData {
                        found: true,
                        connection: Some(connection),
                    },
                    conversation_id,
                )
                .with_display_format(display),
            ))
        }
        None => {
            info!("No path to {} within {} degrees", payload.target_contact_id, MAX_DEGREE);
            Ok(Json(DataResponse::success(
                format!("No connection path found within {} degrees", MAX_DEGREE),
                ConnectionPathData {
                    found: false,
                    connection: None,
                },
                conversation_id,
            )))
        }
    }
}
