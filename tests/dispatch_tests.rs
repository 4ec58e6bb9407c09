use std::sync::Mutex;

use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;
use email_service::{
    catalog::TemplateCatalog,
    clients::{
        audit::AuditTrail,
        transport::{LoggingTransport, NotificationTransport},
    },
    config::Config,
    engine::TemplateEngine,
    models::{status::NotificationStatus, template::RenderedMessage},
    utils::process_notification,
};

struct MemoryTransport {
    sent: Mutex<Vec<(String, RenderedMessage)>>,
}

impl MemoryTransport {
    fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<(String, RenderedMessage)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationTransport for MemoryTransport {
    async fn send(&self, recipient: &str, message: &RenderedMessage) -> Result<String, Error> {
        let mut sent = self.sent.lock().unwrap();
        sent.push((recipient.to_string(), message.clone()));
        Ok(format!("msg-{}", sent.len()))
    }
}

struct FailingTransport;

#[async_trait]
impl NotificationTransport for FailingTransport {
    async fn send(&self, _recipient: &str, _message: &RenderedMessage) -> Result<String, Error> {
        Err(anyhow!("smtp relay unavailable"))
    }
}

fn engine() -> TemplateEngine {
    TemplateEngine::new(TemplateCatalog::builtin(), "$")
}

fn payload(category: &str, amount_due: f64) -> String {
    serde_json::json!({
        "requestId": "req-100",
        "caseId": "case-001",
        "caseNumber": "ACC-9912",
        "debtorName": "Jane Doe",
        "recipientEmail": "jane.doe@example.com",
        "amountDue": amount_due,
        "daysOverdue": 14,
        "category": category,
        "metadata": { "channel": "email" }
    })
    .to_string()
}

/// Test: A well-formed request is rendered, sent, and audited as sent
#[tokio::test]
async fn test_request_is_sent_and_audited() -> Result<()> {
    let engine = engine();
    let transport = MemoryTransport::new();
    let audit_trail = AuditTrail::new();

    process_notification(
        &payload("payment_reminder", 482.50),
        &engine,
        &transport,
        &audit_trail,
    )
    .await?;

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "jane.doe@example.com");
    assert!(sent[0].1.subject.contains("ACC-9912"));
    assert!(sent[0].1.body_html.contains("$482.50"));

    let entries = audit_trail.entries()?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].status, NotificationStatus::Sent);
    assert_eq!(entries[0].request_id, "req-100");
    assert_eq!(entries[0].template_id.as_deref(), Some("payment_reminder"));
    assert!(entries[0].error_message.is_none());

    Ok(())
}

/// Test: Malformed payloads are rejected before any audit entry is written
#[tokio::test]
async fn test_malformed_payload_is_rejected() -> Result<()> {
    let engine = engine();
    let transport = MemoryTransport::new();
    let audit_trail = AuditTrail::new();

    let result =
        process_notification("not a json payload", &engine, &transport, &audit_trail).await;

    assert!(result.is_err());
    assert!(transport.sent().is_empty());
    assert!(audit_trail.entries()?.is_empty());

    Ok(())
}

/// Test: Requests that fail validation are audited as failed and not sent
#[tokio::test]
async fn test_invalid_request_is_audited_as_failed() -> Result<()> {
    let engine = engine();
    let transport = MemoryTransport::new();
    let audit_trail = AuditTrail::new();

    let result = process_notification(
        &payload("payment_reminder", -10.0),
        &engine,
        &transport,
        &audit_trail,
    )
    .await;

    assert!(result.is_err());
    assert!(transport.sent().is_empty());

    let entries = audit_trail.entries()?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].status, NotificationStatus::Failed);
    assert!(entries[0].template_id.is_none());
    assert!(
        entries[0]
            .error_message
            .as_deref()
            .unwrap_or_default()
            .contains("Invalid request")
    );

    Ok(())
}

/// Test: Categories without templates fail the dispatch and are audited
#[tokio::test]
async fn test_unprovisioned_category_is_audited_as_failed() -> Result<()> {
    let engine = engine();
    let transport = MemoryTransport::new();
    let audit_trail = AuditTrail::new();

    let result = process_notification(
        &payload("escalation", 482.50),
        &engine,
        &transport,
        &audit_trail,
    )
    .await;

    assert!(result.is_err());
    assert!(transport.sent().is_empty());

    let entries = audit_trail.entries()?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].status, NotificationStatus::Failed);
    assert!(entries[0].template_id.is_none());

    let error = entries[0].error_message.as_deref().unwrap_or_default();
    assert!(error.contains("Template lookup failed"));
    assert!(error.contains("escalation"));

    Ok(())
}

/// Test: The logging transport accepts the handoff and the request is audited as sent
#[tokio::test]
async fn test_logging_transport_accepts_handoff() -> Result<()> {
    let config = Config {
        currency_symbol: "$".to_string(),
        sender_address: "collections@collectiq.example".to_string(),
    };
    let engine = TemplateEngine::new(TemplateCatalog::builtin(), &config.currency_symbol);
    let transport = LoggingTransport::from_config(&config);
    let audit_trail = AuditTrail::new();

    process_notification(
        &payload("payment_plan", 3600.75),
        &engine,
        &transport,
        &audit_trail,
    )
    .await?;

    let entries = audit_trail.entries()?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].status, NotificationStatus::Sent);

    Ok(())
}

/// Test: Transport failures surface to the caller and are audited as failed
#[tokio::test]
async fn test_transport_failure_is_audited_as_failed() -> Result<()> {
    let engine = engine();
    let transport = FailingTransport;
    let audit_trail = AuditTrail::new();

    let result = process_notification(
        &payload("payment_plan", 1250.0),
        &engine,
        &transport,
        &audit_trail,
    )
    .await;

    assert!(result.is_err());

    let entries = audit_trail.entries()?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].status, NotificationStatus::Failed);
    assert_eq!(entries[0].template_id.as_deref(), Some("payment_plan"));
    assert!(
        entries[0]
            .error_message
            .as_deref()
            .unwrap_or_default()
            .contains("Email send failed")
    );

    Ok(())
}
