use crate::common::context::Context;
use crate::entities::messages::Message;
use chrono::{DateTime, Utc};
use sqlx::{Pool, Sqlite};

const TABLE_NAME: &str = "messages";
const READ_FIELDS: &str = "id, body, username, created_at";

pub async fn create_table(db: &Pool<Sqlite>) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "CREATE TABLE IF NOT EXISTS ",
        TABLE_NAME,
        " (",
        "id INTEGER PRIMARY KEY AUTOINCREMENT, ",
        "body TEXT NOT NULL CHECK (length(body) > 0), ",
        "username TEXT NOT NULL CHECK (length(username) > 0), ",
        "created_at TEXT NOT NULL",
        ")"
    );
    sqlx::query(QUERY).execute(db).await?;
    Ok(())
}

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<Message>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY created_at ASC, id ASC"
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

pub async fn fetch_one<C: Context>(ctx: &C, message_id: i64) -> sqlx::Result<Message> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(message_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn create<C: Context>(
    ctx: &C,
    body: Option<&str>,
    username: Option<&str>,
    created_at: DateTime<Utc>,
) -> sqlx::Result<Message> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (body, username, created_at) VALUES (?, ?, ?) RETURNING ",
        READ_FIELDS
    );
    sqlx::query_as(QUERY)
        .bind(body)
        .bind(username)
        .bind(created_at)
        .fetch_one(ctx.db())
        .await
}

pub async fn update<C: Context>(
    ctx: &C,
    message_id: i64,
    body: Option<&str>,
    username: Option<&str>,
) -> sqlx::Result<Message> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET body = COALESCE(?, body), username = COALESCE(?, username) ",
        "WHERE id = ? RETURNING ",
        READ_FIELDS
    );
    sqlx::query_as(QUERY)
        .bind(body)
        .bind(username)
        .bind(message_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn delete<C: Context>(ctx: &C, message_id: i64) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE id = ?");
    sqlx::query(QUERY)
        .bind(message_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}
