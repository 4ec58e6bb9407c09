use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{context::ExecutionContext, template::TemplateCategory};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    pub request_id: String,
    pub case_id: String,
    pub case_number: String,
    pub debtor_name: String,
    pub recipient_email: String,
    pub amount_due: f64,
    pub days_overdue: u32,
    pub category: TemplateCategory,

    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl NotificationRequest {
    pub fn execution_context(&self) -> ExecutionContext {
        ExecutionContext {
            case_id: self.case_id.clone(),
            case_number: self.case_number.clone(),
            debtor_name: self.debtor_name.clone(),
            amount_due: self.amount_due,
            days_overdue: self.days_overdue,
        }
    }
}
