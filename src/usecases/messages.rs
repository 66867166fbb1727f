use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::messages::{CreateMessageArgs, Message, UpdateMessageArgs};
use crate::repositories::messages;
use chrono::Utc;
use serde_json::Value;

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<Message>> {
    match messages::fetch_all(ctx).await {
        Ok(messages) => Ok(messages.into_iter().map(Message::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_one<C: Context>(ctx: &C, message_id: i64) -> ServiceResult<Message> {
    match messages::fetch_one(ctx, message_id).await {
        Ok(message) => Ok(Message::from(message)),
        Err(sqlx::Error::RowNotFound) => Err(AppError::MessagesNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn create<C: Context>(ctx: &C, args: CreateMessageArgs) -> ServiceResult<Message> {
    let (Some(body), Some(username)) = (args.body, args.username) else {
        return Err(AppError::MessagesMissingFields);
    };

    // Only key presence is validated here; null and non-string values bind
    // as NULL and are rejected by the store's constraints.
    let created_at = Utc::now();
    match messages::create(ctx, body.as_str(), username.as_str(), created_at).await {
        Ok(message) => Ok(Message::from(message)),
        Err(e) => Err(AppError::MessagesRejectedByStore(e.to_string())),
    }
}

pub async fn update<C: Context>(
    ctx: &C,
    message_id: i64,
    args: UpdateMessageArgs,
) -> ServiceResult<Message> {
    fetch_one(ctx, message_id).await?;

    if args.body.is_none() && args.username.is_none() {
        return Err(AppError::MessagesEmptyUpdate);
    }
    let body = validate_field("body", args.body)?;
    let username = validate_field("username", args.username)?;

    match messages::update(ctx, message_id, body.as_deref(), username.as_deref()).await {
        Ok(message) => Ok(Message::from(message)),
        Err(e) => Err(AppError::MessagesRejectedByStore(e.to_string())),
    }
}

pub async fn delete<C: Context>(ctx: &C, message_id: i64) -> ServiceResult<()> {
    fetch_one(ctx, message_id).await?;
    match messages::delete(ctx, message_id).await {
        Ok(()) => Ok(()),
        Err(e) => unexpected(e),
    }
}

fn validate_field(key: &'static str, value: Option<Value>) -> ServiceResult<Option<String>> {
    match value {
        None => Ok(None),
        Some(Value::String(s)) if !s.is_empty() => Ok(Some(s)),
        Some(_) => Err(AppError::MessagesInvalidValue(key)),
    }
}
