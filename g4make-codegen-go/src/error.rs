use thiserror::Error;

/// A template could not be executed against its data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("{template} template: no project metadata to render")]
    MissingProject { template: &'static str },

    #[error("{template} template: {field} is empty")]
    MissingField {
        template: &'static str,
        field: &'static str,
    },

    #[error("{template} template: {field} {value:?} is not a valid Go identifier")]
    InvalidIdentifier {
        template: &'static str,
        field: &'static str,
        value: String,
    },
}

/// Check that `value` is present and usable as a Go identifier.
pub(crate) fn require_identifier(
    template: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), RenderError> {
    if value.is_empty() {
        return Err(RenderError::MissingField { template, field });
    }
    if !g4make_core::is_go_identifier(value) {
        return Err(RenderError::InvalidIdentifier {
            template,
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
