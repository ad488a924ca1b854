use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::SchemafigError;
use crate::file;
use crate::flags::FlagSet;
use crate::messages::Messages;
use crate::resolve::{self, Sources};
use crate::schema::Schema;
use crate::validate;

/// Entry point for loading a schema-described record.
pub struct Schemafig;

impl Schemafig {
    pub fn builder() -> SchemafigBuilder {
        SchemafigBuilder::new()
    }

    /// Zero-configuration load: process environment, process command line,
    /// default messages.
    pub fn load<S: Schema>(record: &mut S) -> Result<(), SchemafigError> {
        Self::builder().load(record)
    }
}

/// Builder for configuring a load.
///
/// Every knob has a sensible default: sources come from the live process,
/// strict mode is on, and messages use the stock wording. Tests inject
/// synthetic sources instead of mutating the process environment.
pub struct SchemafigBuilder {
    bin_name: Option<String>,
    env_vars: Option<Vec<(String, String)>>,
    args: Option<Vec<String>>,
    strict: bool,
    messages: Messages,
}

impl SchemafigBuilder {
    fn new() -> Self {
        Self {
            bin_name: None,
            env_vars: None,
            args: None,
            strict: true,
            messages: Messages::default(),
        }
    }

    /// Name used for the flag registry (shown in `--help` output).
    /// Defaults to the first command-line argument.
    pub fn bin_name(mut self, name: &str) -> Self {
        self.bin_name = Some(name.to_string());
        self
    }

    /// Replace the process environment with synthetic pairs.
    pub fn env_vars(mut self, vars: impl IntoIterator<Item = (String, String)>) -> Self {
        self.env_vars = Some(vars.into_iter().collect());
        self
    }

    /// Replace the process command line (binary name in position zero).
    pub fn args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        self.args = Some(args.into_iter().collect());
        self
    }

    /// Enable or disable strict mode for [`load_file`](Self::load_file)
    /// (default: `true`). In strict mode, unknown keys in the document
    /// produce errors.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Override the validation message table.
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Resolve all sources into `record`, then validate required fields.
    pub fn load<S: Schema>(mut self, record: &mut S) -> Result<(), SchemafigError> {
        let env = match self.env_vars.take() {
            Some(pairs) => crate::env::EnvSource::from_pairs(pairs),
            None => crate::env::EnvSource::process(),
        };
        let args = self
            .args
            .take()
            .unwrap_or_else(|| std::env::args().collect());
        let bin_name = self
            .bin_name
            .take()
            .or_else(|| args.first().cloned())
            .unwrap_or_else(|| "app".to_string());

        let sources = Sources { env, args };
        let mut flags = FlagSet::new(bin_name);
        resolve::resolve(record, &sources, &mut flags)?;
        validate::validate(record, &self.messages)
    }

    /// Seed `record` from a TOML document, then resolve and validate as in
    /// [`load`](Self::load). The document fully replaces the record's prior
    /// state; sparse documents rely on the type's `#[serde(default)]`.
    pub fn load_file<S>(self, path: impl AsRef<Path>, record: &mut S) -> Result<(), SchemafigError>
    where
        S: Schema + DeserializeOwned,
    {
        *record = file::read_document(path.as_ref(), self.strict)?;
        self.load(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::AppConfig;
    use std::io::Write;

    fn synthetic(env: &[(&str, &str)], args: &[&str]) -> SchemafigBuilder {
        Schemafig::builder()
            .env_vars(env.iter().map(|(k, v)| (k.to_string(), v.to_string())))
            .args(
                std::iter::once("test".to_string()).chain(args.iter().map(|s| s.to_string())),
            )
    }

    #[test]
    fn load_runs_full_pipeline() {
        let mut config = AppConfig::default();
        synthetic(&[("APP_PORT", "5000"), ("APP_DB_URL", "pg://x")], &["--debug"])
            .load(&mut config)
            .unwrap();
        assert_eq!(config.port, 5000);
        assert!(config.debug);
        assert_eq!(config.host, "localhost");
    }

    #[test]
    fn load_file_seeds_then_overlays() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "label = \"from-file\"\nport = 3000\n").unwrap();

        let mut config = AppConfig::default();
        synthetic(&[("APP_PORT", "5000"), ("APP_DB_URL", "pg://x")], &[])
            .load_file(file.path(), &mut config)
            .unwrap();
        // Seeded by the document, untouched by any source.
        assert_eq!(config.label, "from-file");
        // Env outranks the file seed.
        assert_eq!(config.port, 5000);
        // Defaults still fill unseeded fields.
        assert_eq!(config.host, "localhost");
    }

    #[test]
    fn strict_load_file_rejects_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "no_such_key = 1\n").unwrap();

        let mut config = AppConfig::default();
        let err = synthetic(&[], &[])
            .load_file(file.path(), &mut config)
            .unwrap_err();
        assert!(matches!(err, SchemafigError::UnknownKeys(_)));
    }

    #[test]
    fn lenient_load_file_allows_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "no_such_key = 1\nport = 3000\n").unwrap();

        let mut config = AppConfig::default();
        synthetic(&[("APP_DB_URL", "pg://x")], &[])
            .strict(false)
            .load_file(file.path(), &mut config)
            .unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn missing_required_field_fails_load() {
        struct NeedsUrl {
            url: String,
        }
        impl crate::Schema for NeedsUrl {
            fn fields(&mut self) -> Vec<crate::Field<'_>> {
                vec![crate::Field::new(
                    crate::FieldSpec::new("url").env("NEEDS_URL").required(),
                    crate::Slot::Str(&mut self.url),
                )]
            }
        }

        let mut record = NeedsUrl { url: String::new() };
        let err = synthetic(&[], &[]).load(&mut record).unwrap_err();
        assert!(err.to_string().contains("url"));

        let mut record = NeedsUrl { url: String::new() };
        synthetic(&[("NEEDS_URL", "https://x")], &[])
            .load(&mut record)
            .unwrap();
        assert_eq!(record.url, "https://x");
    }

    #[test]
    fn custom_messages_change_validation_wording() {
        let mut config = AppConfig::default();
        let err = synthetic(&[], &[])
            .messages(Messages::new().required_template("{0} must be set"))
            .load(&mut config)
            .unwrap_err();
        // database.url is the fixture's required field.
        assert_eq!(err.to_string(), "database.url must be set");
    }
}
