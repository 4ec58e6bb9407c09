use anyhow::{Error, Result, anyhow};
use tracing::{debug, info, warn};

use crate::{
    clients::{audit::AuditTrail, transport::NotificationTransport},
    engine::TemplateEngine,
    models::{
        audit::CreateAuditLog, message::NotificationRequest, status::NotificationStatus,
        validation::validate_request,
    },
};

pub async fn process_notification<T: NotificationTransport>(
    payload: &str,
    engine: &TemplateEngine,
    transport: &T,
    audit_trail: &AuditTrail,
) -> Result<(), Error> {
    let request = serde_json::from_str::<NotificationRequest>(payload)?;

    info!(
        request_id = %request.request_id,
        case_id = %request.case_id,
        category = %request.category,
        "Processing notification request"
    );

    if let Err(e) = validate_request(&request) {
        let audit_log = CreateAuditLog::new(
            request.request_id.clone(),
            request.case_id.clone(),
            NotificationStatus::Failed,
        )
        .with_error(format!("Invalid request: {}", e))
        .with_metadata(serde_json::to_value(request.metadata.clone())?);

        if let Err(log_err) = audit_trail.log_notification(audit_log) {
            warn!(error = %log_err, "Failed to write audit log");
        }

        return Err(anyhow!("Invalid request: {}", e));
    }

    let template = match engine.get_template(request.category) {
        Ok(template) => template,
        Err(e) => {
            let audit_log = CreateAuditLog::new(
                request.request_id.clone(),
                request.case_id.clone(),
                NotificationStatus::Failed,
            )
            .with_error(format!("Template lookup failed: {}", e))
            .with_metadata(serde_json::to_value(request.metadata.clone())?);

            if let Err(log_err) = audit_trail.log_notification(audit_log) {
                warn!(error = %log_err, "Failed to write audit log");
            }

            return Err(anyhow!("Failed to resolve template: {}", e));
        }
    };

    let context = request.execution_context();

    let rendered = match engine.render(template, &context) {
        Ok(rendered) => {
            debug!(template_id = %template.id, "Template rendered successfully");
            rendered
        }
        Err(e) => {
            let audit_log = CreateAuditLog::new(
                request.request_id.clone(),
                request.case_id.clone(),
                NotificationStatus::Failed,
            )
            .with_template(template.id.clone())
            .with_error(format!("Template render failed: {}", e))
            .with_metadata(serde_json::to_value(request.metadata.clone())?);

            if let Err(log_err) = audit_trail.log_notification(audit_log) {
                warn!(error = %log_err, "Failed to write audit log");
            }

            return Err(anyhow!("Failed to render template: {}", e));
        }
    };

    match transport.send(&request.recipient_email, &rendered).await {
        Ok(message_id) => {
            let audit_log = CreateAuditLog::new(
                request.request_id.clone(),
                request.case_id.clone(),
                NotificationStatus::Sent,
            )
            .with_template(template.id.clone())
            .with_metadata(serde_json::to_value(request.metadata.clone())?);

            if let Err(log_err) = audit_trail.log_notification(audit_log) {
                warn!(error = %log_err, "Failed to write audit log");
            }

            info!(
                request_id = %request.request_id,
                message_id = %message_id,
                "Notification sent successfully"
            );
            Ok(())
        }
        Err(e) => {
            let audit_log = CreateAuditLog::new(
                request.request_id.clone(),
                request.case_id.clone(),
                NotificationStatus::Failed,
            )
            .with_template(template.id.clone())
            .with_error(format!("Email send failed: {}", e))
            .with_metadata(serde_json::to_value(request.metadata.clone())?);

            if let Err(log_err) = audit_trail.log_notification(audit_log) {
                warn!(error = %log_err, "Failed to write audit log");
            }

            Err(anyhow!("Notification failed: {}", e))
        }
    }
}
