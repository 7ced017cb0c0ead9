use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::ResponseDto,
        room::{
            CreateOrdinaryRoomDto, CreateOrdinaryRoomResponseDto, OrdinaryRoomInfoDto,
            OrdinaryRoomInfoQueryDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthUser,
        model::room::CreateOrdinaryRoomParam,
        service::{room::RoomService, whiteboard::WhiteboardService},
        state::AppState,
        validate::ValidJson,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

/// Create an ordinary room.
///
/// Schedules a non-recurring room owned by the caller, who also becomes its first
/// participant. Documents listed in the body are attached to the room for preloading.
///
/// # Access Control
/// - Any signed-in user
///
/// # Returns
/// - `{status: 0, data: {roomUUID}}` - Room created
/// - `{status: 1, code: 100000}` - Body or time window rejected
/// - `{status: 1, code: 100002}` - Whiteboard call or database write failed
/// - `401 Unauthorized` - Missing or invalid access token
#[utoipa::path(
    post,
    path = "/v1/room/create/ordinary",
    tag = ROOM_TAG,
    request_body = CreateOrdinaryRoomDto,
    responses(
        (status = 200, description = "Room created, or failure envelope", body = CreateOrdinaryRoomResponseDto),
        (status = 401, description = "Missing or invalid access token")
    ),
    security(("bearer" = [])),
)]
pub async fn create_ordinary(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(payload): ValidJson<CreateOrdinaryRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = RoomService::new(
        &state.db,
        WhiteboardService::new(&state.http_client, &state.whiteboard),
    );

    let param = CreateOrdinaryRoomParam::from_dto(user.user_uuid, payload)?;

    let room_uuid = service.create_ordinary(param).await?;

    Ok(Json(ResponseDto::success(CreateOrdinaryRoomResponseDto {
        room_uuid,
    })))
}

/// Get an ordinary room.
///
/// Returns the room's schedule, owner and documents to one of its participants.
///
/// # Access Control
/// - Participants of the room
///
/// # Returns
/// - `{status: 0, data: {roomInfo, docs}}` - Room found
/// - `{status: 1, code: 200000}` - No such room or caller is not a participant
/// - `401 Unauthorized` - Missing or invalid access token
#[utoipa::path(
    post,
    path = "/v1/room/info/ordinary",
    tag = ROOM_TAG,
    request_body = OrdinaryRoomInfoQueryDto,
    responses(
        (status = 200, description = "Room info, or failure envelope", body = OrdinaryRoomInfoDto),
        (status = 401, description = "Missing or invalid access token")
    ),
    security(("bearer" = [])),
)]
pub async fn get_ordinary_info(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(payload): ValidJson<OrdinaryRoomInfoQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = RoomService::new(
        &state.db,
        WhiteboardService::new(&state.http_client, &state.whiteboard),
    );

    let info = service
        .get_ordinary_info(&user.user_uuid, &payload.room_uuid)
        .await?;

    Ok(Json(ResponseDto::success(info.into_dto())))
}
