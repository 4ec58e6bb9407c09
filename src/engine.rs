use std::collections::HashMap;

use tracing::{debug, warn};

use crate::{
    catalog::TemplateCatalog,
    error::TemplateError,
    models::{
        context::ExecutionContext,
        template::{RenderedMessage, Template, TemplateCategory},
    },
};

pub struct TemplateEngine {
    catalog: TemplateCatalog,
    currency_symbol: String,
}

impl TemplateEngine {
    pub fn new(catalog: TemplateCatalog, currency_symbol: &str) -> Self {
        Self {
            catalog,
            currency_symbol: currency_symbol.to_string(),
        }
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn get_template(&self, category: TemplateCategory) -> Result<&Template, TemplateError> {
        self.catalog
            .get(category)
            .ok_or_else(|| TemplateError::TemplateNotFound(category.to_string()))
    }

    pub fn get_template_by_id(&self, id: &str) -> Result<&Template, TemplateError> {
        self.catalog
            .get_by_id(id)
            .ok_or_else(|| TemplateError::TemplateNotFound(id.to_string()))
    }

    pub fn render(
        &self,
        template: &Template,
        context: &ExecutionContext,
    ) -> Result<RenderedMessage, TemplateError> {
        debug!(template_id = %template.id, "Rendering template");

        let values = self.context_values(context);

        for variable in &template.variables {
            if !values.contains_key(variable.as_str()) {
                warn!(
                    template_id = %template.id,
                    placeholder = %variable,
                    "Template declares a placeholder with no matching context field"
                );

                return Err(TemplateError::MissingContextField {
                    template_id: template.id.clone(),
                    placeholder: variable.clone(),
                });
            }
        }

        // The subject is plain text; the body is HTML and gets escaped values.
        let subject = Self::substitute(&template.id, &template.subject, &values)?;

        let escaped = values
            .iter()
            .map(|(name, value)| (*name, escape_html(value)))
            .collect();
        let body_html = Self::substitute(&template.id, &template.body_html, &escaped)?;

        Ok(RenderedMessage { subject, body_html })
    }

    fn context_values(&self, context: &ExecutionContext) -> HashMap<&'static str, String> {
        HashMap::from([
            ("caseId", context.case_id.clone()),
            ("caseNumber", context.case_number.clone()),
            ("debtorName", context.debtor_name.clone()),
            (
                "amountDue",
                format_currency(&self.currency_symbol, context.amount_due),
            ),
            ("daysOverdue", context.days_overdue.to_string()),
        ])
    }

    fn substitute(
        template_id: &str,
        text: &str,
        values: &HashMap<&'static str, String>,
    ) -> Result<String, TemplateError> {
        let mut result = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find('{') {
            result.push_str(&rest[..start]);
            let after = &rest[start + 1..];

            match after.find('}') {
                Some(end) if is_placeholder_name(&after[..end]) => {
                    let name = &after[..end];

                    match values.get(name) {
                        Some(value) => result.push_str(value),
                        None => {
                            warn!(
                                template_id = %template_id,
                                placeholder = %name,
                                "Template contains an unresolvable placeholder"
                            );

                            return Err(TemplateError::MissingContextField {
                                template_id: template_id.to_string(),
                                placeholder: name.to_string(),
                            });
                        }
                    }

                    rest = &after[end + 1..];
                }
                _ => {
                    // Not a placeholder token; keep the brace as literal text.
                    result.push('{');
                    rest = after;
                }
            }
        }

        result.push_str(rest);

        Ok(result)
    }
}

fn is_placeholder_name(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

pub fn format_currency(symbol: &str, amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };

    format!("{sign}{symbol}{grouped}.{fraction:02}")
}
