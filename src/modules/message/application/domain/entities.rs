use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An inbound contact message. `createdAt` is assigned by the store at
/// intake; `read` starts false and is only ever toggled by the admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}
