//! The process-scoped flag registry.
//!
//! [`FlagSet`] is an explicit registry object rather than global state:
//! the walker registers one `--flag` per flag-tagged field, `parse` runs
//! exactly once after the walk, and values are read back afterwards. Built
//! on clap's builder API so registered usage text surfaces through the
//! standard `--help` machinery.
//!
//! Reading a value distinguishes *explicitly passed* flags from flags that
//! merely carry their registered fallback — only the former participate in
//! precedence, so a flag left off the command line never shadows an env
//! var or default.

use std::collections::HashSet;

use clap::parser::ValueSource;
use clap::{Arg, ArgMatches, Command};

use crate::error::SchemafigError;
use crate::schema::FieldKind;

/// An injected command-line flag registry. Create one per load.
#[derive(Debug)]
pub struct FlagSet {
    bin_name: String,
    args: Vec<Arg>,
    names: HashSet<String>,
    matches: Option<ArgMatches>,
}

impl FlagSet {
    pub fn new(bin_name: impl Into<String>) -> Self {
        Self {
            bin_name: bin_name.into(),
            args: Vec::new(),
            names: HashSet::new(),
            matches: None,
        }
    }

    /// Declare `--name`. `fallback` is the text shown as the default in
    /// help output and returned by clap when the flag is absent; `usage`
    /// becomes the help line. Bool flags also accept the bare form
    /// (`--name`) meaning `true`, and attach explicit values with `=`.
    ///
    /// Registering the same name twice is a schema error: two fields
    /// cannot share one flag.
    pub fn register(
        &mut self,
        name: &str,
        kind: FieldKind,
        fallback: String,
        usage: Option<&str>,
    ) -> Result<(), SchemafigError> {
        if !self.names.insert(name.to_string()) {
            return Err(SchemafigError::DuplicateFlag {
                name: name.to_string(),
            });
        }

        let mut arg = Arg::new(name.to_string())
            .long(name.to_string())
            .default_value(fallback);
        if let Some(usage) = usage {
            arg = arg.help(usage.to_string());
        }
        arg = match kind {
            FieldKind::Bool => arg
                .num_args(0..=1)
                .require_equals(true)
                .default_missing_value("true"),
            _ => arg.num_args(1),
        };

        self.args.push(arg);
        Ok(())
    }

    /// Parse the command line. `argv` includes the binary name in position
    /// zero, matching `std::env::args()`. Parses at most once; later calls
    /// are no-ops so a shared registry cannot re-parse mid-process.
    pub fn parse(&mut self, argv: &[String]) -> Result<(), SchemafigError> {
        if self.matches.is_some() {
            return Ok(());
        }
        let command = Command::new(self.bin_name.clone()).args(self.args.iter().cloned());
        self.matches = Some(command.try_get_matches_from(argv)?);
        Ok(())
    }

    /// The value of `name`, only if it was explicitly passed on the command
    /// line. Returns `None` before [`parse`](Self::parse), for unregistered
    /// names, and for flags that resolved to their registered fallback.
    pub fn value(&self, name: &str) -> Option<&str> {
        if !self.names.contains(name) {
            return None;
        }
        let matches = self.matches.as_ref()?;
        if matches.value_source(name) != Some(ValueSource::CommandLine) {
            return None;
        }
        matches.get_one::<String>(name).map(String::as_str)
    }
}
