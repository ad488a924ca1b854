//! Error-message templates for validation failures.
//!
//! A small translation table: each violation kind maps to a template with a
//! `{0}` placeholder for the field path, and an aggregate error joins one
//! rendered instance per field with a fixed separator. Callers can swap the
//! wording without touching validation logic.

use crate::error::SchemafigError;

/// Message table used to render validation failures.
#[derive(Debug, Clone)]
pub struct Messages {
    required: String,
    separator: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            required: "missing required configuration: {0}".into(),
            separator: ", ".into(),
        }
    }
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Template for a single required-field violation. `{0}` is replaced
    /// with the field's dotted path.
    pub fn required_template(mut self, template: impl Into<String>) -> Self {
        self.required = template.into();
        self
    }

    /// Separator joining the rendered violations.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub(crate) fn missing_required(&self, fields: Vec<String>) -> SchemafigError {
        let message = fields
            .iter()
            .map(|field| self.required.replace("{0}", field))
            .collect::<Vec<_>>()
            .join(&self.separator);
        SchemafigError::Validation { fields, message }
    }
}
