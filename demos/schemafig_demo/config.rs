//! Configuration structs for the schemafig demo application.
//!
//! A multi-level hierarchy showing nested schemas: the root [`DemoConfig`]
//! contains two sub-records, [`ServerConfig`] and [`DisplayConfig`]. Each
//! struct derives [`serde::Deserialize`] (with `#[serde(default)]`) so a
//! sparse `schemafig-demo.toml` can seed any subset of keys, and implements
//! [`Schema`] to declare where every leaf may be overridden from.
//!
//! | Source        | Example                          | Key              |
//! |---------------|----------------------------------|------------------|
//! | Env var       | `DEMO_SERVER_HOST=0.0.0.0`       | `server.host`    |
//! | Flag          | `--port=9000`                    | `server.port`    |
//! | Default       | declared via `.default_value()`  | everything       |

use serde::Deserialize;

use schemafig::{Field, FieldSpec, Schema, Slot};

/// Root configuration for the demo application.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Application name shown in the banner.
    pub name: String,

    /// Enable verbose output.
    pub verbose: bool,

    /// Server settings (nested record).
    pub server: ServerConfig,

    /// Display and formatting settings (nested record).
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: i64,
    pub max_connections: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Output color; must resolve to something non-empty.
    pub color: String,
    pub format: String,
}

impl Schema for DemoConfig {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new(
                FieldSpec::new("name").env("DEMO_NAME").default_value("schemafig-demo"),
                Slot::Str(&mut self.name),
            ),
            Field::new(
                FieldSpec::new("verbose")
                    .flag("verbose")
                    .env("DEMO_VERBOSE")
                    .usage("Enable verbose output"),
                Slot::Bool(&mut self.verbose),
            ),
            Field::nested("server", &mut self.server),
            Field::nested("display", &mut self.display),
        ]
    }
}

impl Schema for ServerConfig {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new(
                FieldSpec::new("host")
                    .flag("host")
                    .env("DEMO_SERVER_HOST")
                    .default_value("127.0.0.1")
                    .usage("Server host to bind"),
                Slot::Str(&mut self.host),
            ),
            Field::new(
                FieldSpec::new("port")
                    .flag("port")
                    .env("DEMO_SERVER_PORT")
                    .default_value("8080")
                    .usage("Server port"),
                Slot::I64(&mut self.port),
            ),
            Field::new(
                FieldSpec::new("max_connections").default_value("64"),
                Slot::I32(&mut self.max_connections),
            ),
        ]
    }
}

impl Schema for DisplayConfig {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            // No default on purpose: some source has to provide a color.
            Field::new(
                FieldSpec::new("color")
                    .flag("color")
                    .env("DEMO_COLOR")
                    .usage("Output color")
                    .required(),
                Slot::Str(&mut self.color),
            ),
            Field::new(
                FieldSpec::new("format").env("DEMO_FORMAT").default_value("plain"),
                Slot::Str(&mut self.format),
            ),
        ]
    }
}
