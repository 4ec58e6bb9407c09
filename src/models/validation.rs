use anyhow::{Result, anyhow};

use crate::models::message::NotificationRequest;

pub fn validate_request(request: &NotificationRequest) -> Result<()> {
    if request.recipient_email.is_empty() {
        return Err(anyhow!("Recipient email cannot be empty"));
    }

    if !request.recipient_email.contains('@') {
        return Err(anyhow!("Recipient email is not a valid address"));
    }

    if request.debtor_name.trim().is_empty() {
        return Err(anyhow!("Debtor name cannot be empty"));
    }

    if request.case_number.trim().is_empty() {
        return Err(anyhow!("Case number cannot be empty"));
    }

    if !request.amount_due.is_finite() {
        return Err(anyhow!("Amount due must be a finite number"));
    }

    if request.amount_due < 0.0 {
        return Err(anyhow!("Amount due cannot be negative"));
    }

    Ok(())
}
