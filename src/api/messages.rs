use crate::api::RequestContext;
use crate::common::error::{AppError, ServiceResponse};
use crate::models::messages::{CreateMessageArgs, Message, UpdateMessageArgs};
use crate::usecases::messages;
use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

pub async fn index(ctx: RequestContext) -> ServiceResponse<Vec<Message>> {
    let messages = messages::fetch_all(&ctx).await?;
    Ok(Json(messages))
}

pub async fn create(
    ctx: RequestContext,
    payload: Result<Json<CreateMessageArgs>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    let Json(args) = payload.map_err(|_| AppError::DecodingRequestFailed)?;
    let message = messages::create(&ctx, args).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

pub async fn fetch_one(
    ctx: RequestContext,
    Path(message_id): Path<i64>,
) -> ServiceResponse<Message> {
    let message = messages::fetch_one(&ctx, message_id).await?;
    Ok(Json(message))
}

pub async fn update(
    ctx: RequestContext,
    Path(message_id): Path<i64>,
    payload: Result<Json<UpdateMessageArgs>, JsonRejection>,
) -> ServiceResponse<Message> {
    let Json(args) = payload.map_err(|_| AppError::DecodingRequestFailed)?;
    let message = messages::update(&ctx, message_id, args).await?;
    Ok(Json(message))
}

pub async fn delete(
    ctx: RequestContext,
    Path(message_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    messages::delete(&ctx, message_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
