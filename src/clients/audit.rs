use std::sync::Mutex;

use anyhow::{Error, Result, anyhow};
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::models::audit::{AuditLog, CreateAuditLog};

#[derive(Debug, Default)]
pub struct AuditTrail {
    entries: Mutex<Vec<AuditLog>>,
}

impl AuditTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_notification(&self, entry: CreateAuditLog) -> Result<AuditLog, Error> {
        let record = AuditLog {
            id: Uuid::new_v4(),
            request_id: entry.request_id,
            case_id: entry.case_id,
            template_id: entry.template_id,
            status: entry.status,
            error_message: entry.error_message,
            metadata: entry.metadata,
            created_at: Utc::now(),
        };

        debug!(
            audit_id = %record.id,
            request_id = %record.request_id,
            status = %record.status,
            "Notification audit entry recorded"
        );

        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("Audit trail lock poisoned"))?;
        entries.push(record.clone());

        Ok(record)
    }

    pub fn entries(&self) -> Result<Vec<AuditLog>, Error> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("Audit trail lock poisoned"))?;

        Ok(entries.clone())
    }
}
