//! Schema-described, layered configuration overlay for Rust structs.
//! Declare where each field comes from, hand over `&mut config`, and go.
//!
//! Schemafig fills a struct you own from layered sources — a TOML seed
//! file, environment variables, command-line flags, and declared defaults —
//! under a fixed precedence order, then validates `required` fields. The
//! struct is mutated in place and never copied: mutation is the contract,
//! not a side effect.
//!
//! ```
//! use schemafig::{Field, FieldSpec, Schema, Schemafig, Slot};
//!
//! #[derive(Default)]
//! struct ServerConfig {
//!     host: String,
//!     port: i64,
//!     verbose: bool,
//! }
//!
//! impl Schema for ServerConfig {
//!     fn fields(&mut self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::new(
//!                 FieldSpec::new("host").env("SERVER_HOST").default_value("127.0.0.1"),
//!                 Slot::Str(&mut self.host),
//!             ),
//!             Field::new(
//!                 FieldSpec::new("port")
//!                     .flag("port")
//!                     .env("SERVER_PORT")
//!                     .default_value("8080")
//!                     .usage("Port to listen on"),
//!                 Slot::I64(&mut self.port),
//!             ),
//!             Field::new(FieldSpec::new("verbose").flag("verbose"), Slot::Bool(&mut self.verbose)),
//!         ]
//!     }
//! }
//!
//! let mut config = ServerConfig::default();
//! Schemafig::builder()
//!     .env_vars([("SERVER_HOST".to_string(), "0.0.0.0".to_string())])
//!     .args(["demo".to_string(), "--port=9000".to_string()])
//!     .load(&mut config)?;
//!
//! assert_eq!(config.host, "0.0.0.0");
//! assert_eq!(config.port, 9000);
//! assert!(!config.verbose);
//! # Ok::<(), schemafig::SchemafigError>(())
//! ```
//!
//! In production code, `Schemafig::load(&mut config)` captures the live
//! process environment and command line instead.
//!
//! # Design: the schema is data
//!
//! There is no reflection and no derive magic. A record type implements
//! [`Schema`] by returning one [`Field`] per configurable field: a
//! [`FieldSpec`] naming the field's sources, paired with a [`Slot`] — a
//! typed mutable view into the field's storage. The resolution engine is an
//! ordinary recursive walk over that data, so the whole pipeline is
//! testable with synthetic inputs and exhaustive over the closed
//! [`FieldKind`] set. Nested records nest schemas; a field the engine
//! cannot overlay is declared `Unsupported` and fails loudly rather than
//! being skipped.
//!
//! # Source precedence
//!
//! ```text
//! Current value          zero, or seeded from a TOML document
//!        ↑ overridden by
//! Default literal        .default_value("8080")
//!        ↑ overridden by
//! Environment variable   .env("SERVER_PORT"), empty counts as unset
//!        ↑ overridden by
//! Command-line flag      .flag("port"), only when explicitly passed
//! ```
//!
//! Exactly one source wins per field — this is an override chain, not a
//! merge. A flag that is registered but left off the command line does not
//! shadow the layers below it, and an environment variable set to the
//! empty string falls through to the default.
//!
//! Flag handling has one wrinkle: registration happens while the schema is
//! walked, but parsing is a one-time, whole-registry step. The engine
//! therefore walks once to register flags and apply env/defaults, parses
//! the [`FlagSet`] exactly once, and then overlays explicitly-passed flag
//! values in a second pass. The registry is an injected object, not global
//! state; registering the same flag name twice is an error.
//!
//! # Coercion
//!
//! Sources produce text; fields are typed. Values are trimmed and then
//! coerced to the slot's kind: `true`/`false` for bools, base-10 64-bit
//! parsing narrowed to the field's width for integers, standard decimal
//! parsing for floats. An empty value is "no value supplied" and leaves the
//! field untouched. Failures name the field's dotted path, the offending
//! text, and the expected kind.
//!
//! # Required fields
//!
//! After resolution, every leaf marked [`required`](FieldSpec::required)
//! must hold a non-zero value (`""`, `0`, `0.0` and `false` count as
//! unset). Violations are collected across the whole schema — not reported
//! one at a time — and returned as a single error listing every missing
//! path in declaration order. The wording comes from a [`Messages`] table
//! and can be replaced wholesale.
//!
//! # Seeding from a file
//!
//! [`SchemafigBuilder::load_file`] deserializes a TOML document into the
//! record first and overlays the other sources on top. Sparse documents
//! work through `#[serde(default)]` on the record type. Strict mode (on by
//! default) rejects keys the record doesn't know, with the file path and
//! line number — catching typos and stale keys early.
//!
//! Note that the seed sits *below* the whole chain: a field that declares
//! a default literal ends up with that default (unless env or flag wins)
//! even when the document set it. Seeded values survive only on fields
//! with no sources declared. Give a field either a default or a file key,
//! not both.
//!
//! # Limitations
//!
//! Collection-typed fields (vectors, maps) cannot be overlaid; leave them
//! out of `fields()` and they keep their seeded values. Schemas are static:
//! there is no dynamic discovery and no hot-reload.

pub mod error;
pub mod schema;

mod builder;
mod coerce;
mod env;
mod file;
mod flags;
mod messages;
mod resolve;
mod validate;

#[cfg(test)]
mod fixtures;

pub use builder::{Schemafig, SchemafigBuilder};
pub use env::EnvSource;
pub use error::SchemafigError;
pub use file::read_document;
pub use flags::FlagSet;
pub use messages::Messages;
pub use resolve::{Sources, resolve};
pub use schema::{Field, FieldKind, FieldSpec, Schema, Slot};
pub use validate::validate;
