use std::collections::HashMap;

use crate::models::template::{Template, TemplateCategory};

#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: HashMap<TemplateCategory, Template>,
}

impl TemplateCatalog {
    pub fn from_templates(templates: impl IntoIterator<Item = Template>) -> Self {
        let templates = templates
            .into_iter()
            .map(|template| (template.category, template))
            .collect();

        Self { templates }
    }

    // escalation and final_notice are valid categories but have no authored
    // content yet; looking them up fails with TemplateNotFound.
    pub fn builtin() -> Self {
        Self::from_templates([payment_reminder(), payment_plan()])
    }

    pub fn get(&self, category: TemplateCategory) -> Option<&Template> {
        self.templates.get(&category)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Template> {
        self.templates.values().find(|template| template.id == id)
    }

    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn payment_reminder() -> Template {
    Template {
        id: "payment_reminder".to_string(),
        name: "Payment Reminder".to_string(),
        subject: "Payment Reminder - Account {caseNumber}".to_string(),
        body_html: r#"<html>
<body style="font-family: Arial, sans-serif; color: #333;">
    <p>Dear {debtorName},</p>

    <p>This is a friendly reminder that your account ending in {caseNumber} has an outstanding balance.</p>

    <p><strong>Account Summary:</strong></p>
    <ul>
        <li>Amount Due: {amountDue}</li>
        <li>Days Overdue: {daysOverdue}</li>
    </ul>

    <p>We understand that financial difficulties can arise. If you need assistance, please contact us to discuss payment options.</p>

    <p>Best regards,<br>
    CollectIQ Collections</p>
</body>
</html>
"#
        .to_string(),
        category: TemplateCategory::PaymentReminder,
        variables: vec![
            "caseNumber".to_string(),
            "debtorName".to_string(),
            "amountDue".to_string(),
            "daysOverdue".to_string(),
        ],
    }
}

fn payment_plan() -> Template {
    Template {
        id: "payment_plan".to_string(),
        name: "Payment Plan Offer".to_string(),
        subject: "Payment Plan Available - Account {caseNumber}".to_string(),
        body_html: r#"<html>
<body style="font-family: Arial, sans-serif; color: #333;">
    <p>Dear {debtorName},</p>

    <p>We would like to help you resolve your account ending in {caseNumber}.</p>

    <p>We are offering flexible payment plan options that may work with your budget. Our team is ready to discuss terms that fit your situation.</p>

    <p><strong>Current Balance:</strong> {amountDue}</p>

    <p>Please call us at your earliest convenience to discuss a payment arrangement.</p>

    <p>Sincerely,<br>
    CollectIQ Collections</p>
</body>
</html>
"#
        .to_string(),
        category: TemplateCategory::PaymentPlan,
        variables: vec![
            "caseNumber".to_string(),
            "debtorName".to_string(),
            "amountDue".to_string(),
        ],
    }
}
