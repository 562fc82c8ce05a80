use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single card on the board. `column_id` must always name a column that
/// currently exists; deleting a column deletes its tasks with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub column_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(column_id: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            column_id,
            content,
            created_at: Utc::now(),
        }
    }

    pub fn update_content(&mut self, content: String) {
        self.content = content;
    }
}
