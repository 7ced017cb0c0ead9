use axum::{extract::State, response::IntoResponse, Json};
use serde_json::{Map, Value};

use crate::{
    model::{api::ResponseDto, user::UserInfoDto},
    server::{
        error::AppError, middleware::auth::AuthUser, service::user::UserService,
        state::AppState, validate::ValidJson,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the signed-in user's name and avatar.
///
/// # Returns
/// - `{status: 0, data: {name, avatar}}` - User found
/// - `{status: 1, code: 300000}` - User no longer exists
/// - `401 Unauthorized` - Missing or invalid access token
#[utoipa::path(
    post,
    path = "/v1/user/info",
    tag = USER_TAG,
    request_body = Object,
    responses(
        (status = 200, description = "User info, or failure envelope", body = UserInfoDto),
        (status = 401, description = "Missing or invalid access token")
    ),
    security(("bearer" = [])),
)]
pub async fn get_info(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(_body): ValidJson<Map<String, Value>>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let info = service.assert_get_name_and_avatar(&user.user_uuid).await?;

    Ok(Json(ResponseDto::success(info.into_dto())))
}
