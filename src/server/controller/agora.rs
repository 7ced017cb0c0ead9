use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{agora::AgoraAiStopDto, api::ResponseDto},
    server::{
        error::AppError, middleware::auth::AuthUser, service::agora::AgoraAiService,
        state::AppState, validate::ValidJson,
    },
};

/// Tag for grouping AI relay endpoints in OpenAPI documentation
pub static AGORA_TAG: &str = "agora";

/// Relay an AI conversation request.
///
/// Forwards `request_id` and `channel_name` to the AI service's `start` action in the
/// region picked by `language` and returns the upstream body as `data`.
///
/// The route is named `stop` while the upstream action is `start`. Clients depend on
/// both names as they are.
///
/// # Returns
/// - `{status: 0, data: <upstream body>}` - Upstream answered with a 2xx status
/// - `{status: 1, code: 100002}` - Upstream unreachable or answered with an error status
/// - `401 Unauthorized` - Missing or invalid access token
#[utoipa::path(
    post,
    path = "/v1/agora/ai/stop",
    tag = AGORA_TAG,
    request_body = AgoraAiStopDto,
    responses(
        (status = 200, description = "Upstream body, or failure envelope", body = Object),
        (status = 401, description = "Missing or invalid access token")
    ),
    security(("bearer" = [])),
)]
pub async fn stop(
    State(state): State<AppState>,
    _user: AuthUser,
    ValidJson(payload): ValidJson<AgoraAiStopDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AgoraAiService::new(&state.http_client, &state.agora_ai);

    let body = service
        .start(&payload.language, &payload.request_id, &payload.channel_name)
        .await?;

    Ok(Json(ResponseDto::success(body)))
}
