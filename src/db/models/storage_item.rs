use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the `local_storage` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageItem {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}
