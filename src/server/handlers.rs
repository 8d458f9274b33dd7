use super::types::{
    ChatRequest, ErrorResponse, HISTORY_MESSAGE, HOME_MESSAGE, HistoryResponse,
    MISSING_PROMPT_MESSAGE, STATUS_MESSAGE, StatusResponse,
};
use crate::{
    Error,
    upstream::{UpstreamClient, UpstreamPayload},
};
use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{debug, error, info};

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn UpstreamClient>,
}

/// Failures of the `/chat` handler and the response each one maps to.
#[derive(Debug)]
pub enum ChatError {
    MissingPrompt,
    Upstream(String),
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingPrompt => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: MISSING_PROMPT_MESSAGE.to_string(),
                }),
            )
                .into_response(),
            // Upstream failures keep a 200 status.
            Self::Upstream(msg) => {
                (StatusCode::OK, Json(ErrorResponse { error: msg })).into_response()
            }
        }
    }
}

pub async fn home() -> &'static str {
    HOME_MESSAGE
}

pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "running",
        message: STATUS_MESSAGE,
    })
}

pub async fn history() -> Json<HistoryResponse> {
    Json(HistoryResponse {
        message: HISTORY_MESSAGE,
    })
}

pub async fn chat(State(state): State<AppState>, body: Bytes) -> Result<Response, ChatError> {
    let request = match ChatRequest::from_body(&body) {
        Ok(request) => request,
        Err(reason) => {
            debug!("Rejecting chat request: {}", reason);
            return Err(ChatError::MissingPrompt);
        }
    };

    info!("Received chat request");
    debug!("Prompt: {}", request.prompt);

    let payload = UpstreamPayload::from_prompt(request.prompt);
    match state.upstream.send(&payload).await {
        Ok(reply) => Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            reply,
        )
            .into_response()),
        Err(e) => {
            let msg = match e {
                Error::Upstream(msg) => msg,
                other => other.to_string(),
            };
            error!("Error querying upstream API: {}", msg);
            Err(ChatError::Upstream(msg))
        }
    }
}
