use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    PaymentReminder,
    PaymentPlan,
    Escalation,
    FinalNotice,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 4] = [
        TemplateCategory::PaymentReminder,
        TemplateCategory::PaymentPlan,
        TemplateCategory::Escalation,
        TemplateCategory::FinalNotice,
    ];
}

impl Display for TemplateCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            TemplateCategory::PaymentReminder => write!(f, "payment_reminder"),
            TemplateCategory::PaymentPlan => write!(f, "payment_plan"),
            TemplateCategory::Escalation => write!(f, "escalation"),
            TemplateCategory::FinalNotice => write!(f, "final_notice"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub body_html: String,
    pub category: TemplateCategory,
    pub variables: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedMessage {
    pub subject: String,
    pub body_html: String,
}
