//! Required-field validation over a fully resolved record.
//!
//! Runs as a distinct phase after resolution so that every field has its
//! final value before any requiredness is judged. Unlike the walker, this
//! phase is fail-slow: it collects *every* zero-valued required leaf and
//! reports them as one combined error, in schema declaration order.

use crate::error::SchemafigError;
use crate::messages::Messages;
use crate::resolve::field_path;
use crate::schema::{Field, Schema, Slot};

/// Check every `required` leaf against its type's zero value (`""`, `0`,
/// `0.0`, `false`). Nested records are always descended into — a leaf's
/// requiredness is evaluated independently, by dotted path, regardless of
/// whether its parent record carries a marker.
///
/// Takes `&mut` because schema slots are write-capable; this phase only
/// reads through them.
pub fn validate<S: Schema>(record: &mut S, messages: &Messages) -> Result<(), SchemafigError> {
    let mut missing = Vec::new();
    collect_missing(record, "", &mut missing);
    if missing.is_empty() {
        return Ok(());
    }
    Err(messages.missing_required(missing))
}

fn collect_missing(schema: &mut dyn Schema, prefix: &str, out: &mut Vec<String>) {
    for field in schema.fields() {
        let Field { spec, slot } = field;
        let path = field_path(prefix, spec.name());
        match slot {
            Slot::Nested(sub) => collect_missing(sub, &path, out),
            leaf => {
                if spec.required && leaf.is_zero() {
                    out.push(path);
                }
            }
        }
    }
}
