use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::models::status::NotificationStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: Uuid,
    pub request_id: String,
    pub case_id: String,
    // Unset for failures that happen before a catalog template is resolved.
    pub template_id: Option<String>,
    pub status: NotificationStatus,
    pub error_message: Option<String>,
    pub metadata: JsonValue,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateAuditLog {
    pub request_id: String,
    pub case_id: String,
    pub template_id: Option<String>,
    pub status: NotificationStatus,
    pub error_message: Option<String>,
    pub metadata: JsonValue,
}

impl CreateAuditLog {
    pub fn new(request_id: String, case_id: String, status: NotificationStatus) -> Self {
        Self {
            request_id,
            case_id,
            template_id: None,
            status,
            error_message: None,
            metadata: serde_json::json!({}),
        }
    }

    pub fn with_template(mut self, template_id: String) -> Self {
        self.template_id = Some(template_id);
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error_message = Some(error);
        self
    }

    pub fn with_metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = metadata;
        self
    }
}
