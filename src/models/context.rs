use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionContext {
    pub case_id: String,
    pub case_number: String,
    pub debtor_name: String,
    pub amount_due: f64,
    pub days_overdue: u32,
}

impl ExecutionContext {
    // Placeholder names as they appear in template text.
    pub const FIELDS: [&'static str; 5] = [
        "caseId",
        "caseNumber",
        "debtorName",
        "amountDue",
        "daysOverdue",
    ];
}
