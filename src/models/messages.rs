use crate::entities::messages::Message as MessageEntity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Serialize)]
pub struct Message {
    pub id: i64,
    pub body: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<MessageEntity> for Message {
    fn from(value: MessageEntity) -> Self {
        Self {
            id: value.id,
            body: value.body,
            username: value.username,
            created_at: value.created_at,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct CreateMessageArgs {
    #[serde(deserialize_with = "present")]
    pub body: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub username: Option<Value>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct UpdateMessageArgs {
    #[serde(deserialize_with = "present")]
    pub body: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub username: Option<Value>,
}

/// `Some` whenever the key is present, even for an explicit `null`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}
