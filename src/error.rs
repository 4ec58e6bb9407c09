use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("no template registered for '{0}'")]
    TemplateNotFound(String),

    #[error("template '{template_id}' references placeholder '{{{placeholder}}}' with no matching context field")]
    MissingContextField {
        template_id: String,
        placeholder: String,
    },
}
