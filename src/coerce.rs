//! Textual-to-typed value coercion.
//!
//! Every source produces text; this module writes that text into a field's
//! slot as the slot's semantic type. Whitespace is trimmed first, and an
//! empty result is a no-op — the field keeps its current value — so an empty
//! env var or default literal never clobbers a seeded value.

use crate::error::SchemafigError;
use crate::schema::Slot;

/// Coerce `raw` into `slot`, reporting failures against `field` (a dotted
/// path). Integers parse base-10 as 64-bit and narrow to the slot's width.
/// Bools accept the standard `true`/`false` token set.
pub(crate) fn assign(slot: &mut Slot<'_>, raw: &str, field: &str) -> Result<(), SchemafigError> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(());
    }

    let kind = slot.kind();
    let fail = || SchemafigError::Coerce {
        field: field.to_string(),
        raw: text.to_string(),
        kind,
    };

    match slot {
        Slot::Str(s) => {
            **s = text.to_string();
            Ok(())
        }
        Slot::Bool(b) => {
            **b = text.parse::<bool>().map_err(|_| fail())?;
            Ok(())
        }
        Slot::I32(n) => {
            let wide = text.parse::<i64>().map_err(|_| fail())?;
            **n = i32::try_from(wide).map_err(|_| fail())?;
            Ok(())
        }
        Slot::I64(n) => {
            **n = text.parse::<i64>().map_err(|_| fail())?;
            Ok(())
        }
        Slot::F32(x) => {
            **x = text.parse::<f32>().map_err(|_| fail())?;
            Ok(())
        }
        Slot::F64(x) => {
            **x = text.parse::<f64>().map_err(|_| fail())?;
            Ok(())
        }
        // The walker resolves nesting and rejects unsupported slots before
        // any coercion happens.
        Slot::Nested(_) | Slot::Unsupported { .. } => {
            unreachable!("schemafig: coercion target must be a leaf slot")
        }
    }
}

/// Render a leaf slot's current value as text. Used as the registered
/// fallback for flag-tagged fields that declare no default literal.
pub(crate) fn render(slot: &Slot<'_>) -> String {
    match slot {
        Slot::Str(s) => (**s).clone(),
        Slot::Bool(b) => b.to_string(),
        Slot::I32(n) => n.to_string(),
        Slot::I64(n) => n.to_string(),
        Slot::F32(x) => x.to_string(),
        Slot::F64(x) => x.to_string(),
        Slot::Nested(_) | Slot::Unsupported { .. } => String::new(),
    }
}
