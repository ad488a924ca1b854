//! Core resolution pipeline: walk the schema, pick each field's winning
//! source, and write coerced values into the record.
//!
//! Operates on a pre-captured [`Sources`] snapshot with no I/O of its own,
//! making the full pipeline testable with synthetic inputs. Steps:
//!
//! 1. Walk the schema depth-first in declaration order. Flag-tagged leaves
//!    register with the [`FlagSet`]; every leaf resolves env/default
//!    immediately.
//! 2. Parse the flag registry — once, after all registrations.
//! 3. Walk again and overlay the values of flags that were explicitly
//!    passed on the command line.
//!
//! Flag-sourced writes are deferred to step 3 because a flag's final value
//! only exists after the one-time global parse. A flag that resolved to its
//! registered fallback is skipped in step 3, so it never shadows the env
//! var or default applied in step 1.

use crate::coerce;
use crate::env::EnvSource;
use crate::error::SchemafigError;
use crate::flags::FlagSet;
use crate::schema::{Field, FieldSpec, Schema, Slot};

/// All pre-captured source data needed to resolve a record. No I/O happens
/// during resolution.
#[derive(Debug, Clone)]
pub struct Sources {
    /// Environment snapshot.
    pub env: EnvSource,
    /// Command line, binary name in position zero (as `std::env::args()`).
    pub args: Vec<String>,
}

impl Sources {
    /// Capture the live process environment and command line.
    pub fn process() -> Self {
        Self {
            env: EnvSource::process(),
            args: std::env::args().collect(),
        }
    }

    /// Build from synthetic data.
    pub fn synthetic(
        env: impl IntoIterator<Item = (String, String)>,
        args: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            env: EnvSource::from_pairs(env),
            args: args.into_iter().collect(),
        }
    }
}

/// Resolve every field of `record` from the layered sources.
///
/// Mutates the record in place; the caller keeps ownership. Fails fast on
/// the first unsupported field or coercion error. Does not run required-
/// field validation — see [`validate`](crate::validate::validate) for that
/// distinct phase.
pub fn resolve<S: Schema>(
    record: &mut S,
    sources: &Sources,
    flags: &mut FlagSet,
) -> Result<(), SchemafigError> {
    overlay(record, &sources.env, flags, "")?;
    flags.parse(&sources.args)?;
    apply_flags(record, flags, "")
}

pub(crate) fn field_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

/// Registration pass: register flags, resolve env/default into leaves.
fn overlay(
    schema: &mut dyn Schema,
    env: &EnvSource,
    flags: &mut FlagSet,
    prefix: &str,
) -> Result<(), SchemafigError> {
    for field in schema.fields() {
        let Field { spec, slot } = field;
        let path = field_path(prefix, spec.name());
        match slot {
            Slot::Nested(sub) => overlay(sub, env, flags, &path)?,
            Slot::Unsupported { type_name } => {
                return Err(SchemafigError::UnsupportedField {
                    field: path,
                    type_name,
                });
            }
            mut leaf => {
                if let Some(flag_name) = spec.flag {
                    let fallback = spec
                        .default
                        .map(str::to_owned)
                        .unwrap_or_else(|| coerce::render(&leaf));
                    flags.register(flag_name, leaf.kind(), fallback, spec.usage)?;
                }
                if let Some(raw) = winning_text(&spec, env) {
                    coerce::assign(&mut leaf, raw, &path)?;
                }
            }
        }
    }
    Ok(())
}

/// The env/default portion of the precedence chain: env var if set and
/// non-empty, else the default literal if non-empty, else nothing — the
/// field keeps its current (zero or file-seeded) value. The flag source
/// outranks both but materializes only in the post-parse pass.
fn winning_text<'a>(spec: &FieldSpec, env: &'a EnvSource) -> Option<&'a str> {
    if let Some(key) = spec.env
        && let Some(value) = env.get(key)
    {
        return Some(value);
    }
    spec.default.filter(|literal| !literal.trim().is_empty())
}

/// Post-parse pass: overlay explicitly-passed flag values.
fn apply_flags(
    schema: &mut dyn Schema,
    flags: &FlagSet,
    prefix: &str,
) -> Result<(), SchemafigError> {
    for field in schema.fields() {
        let Field { spec, slot } = field;
        let path = field_path(prefix, spec.name());
        match slot {
            Slot::Nested(sub) => apply_flags(sub, flags, &path)?,
            // Rejected by the registration pass; never reached here.
            Slot::Unsupported { .. } => {}
            mut leaf => {
                if let Some(name) = spec.flag
                    && let Some(raw) = flags.value(name)
                {
                    coerce::assign(&mut leaf, raw, &path)?;
                }
            }
        }
    }
    Ok(())
}
