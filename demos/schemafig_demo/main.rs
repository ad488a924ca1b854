//! # schemafig demo application
//!
//! A sample CLI tool that showcases how to integrate
//! [schemafig](https://docs.rs/schemafig) into a real application. This is
//! **not** a real app — it exists purely to demonstrate and manually verify
//! schemafig's behavior.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example schemafig_demo -- --color=red
//! cargo run --example schemafig_demo -- --color=red --port=9000 --verbose
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature               | How to exercise it                                              |
//! |-----------------------|-----------------------------------------------------------------|
//! | Required validation   | `cargo run --example schemafig_demo` (nothing sets `display.color`) |
//! | Declared defaults     | `cargo run --example schemafig_demo -- --color=red`             |
//! | Config file seed      | Create `schemafig-demo.toml` in cwd (e.g. `[display]` `color = "red"`), then run |
//! | Env var override      | `DEMO_SERVER_HOST=0.0.0.0 DEMO_COLOR=red cargo run --example schemafig_demo` |
//! | Nested flag override  | `cargo run --example schemafig_demo -- --color=red --port=9000` |
//! | Bare bool flag        | `cargo run --example schemafig_demo -- --color=red --verbose`   |
//! | Flag beats env        | `DEMO_SERVER_PORT=7000 cargo run --example schemafig_demo -- --color=red --port=9000` |
//! | Flag help text        | `cargo run --example schemafig_demo -- --help`                  |

mod config;

use std::path::Path;
use std::process::ExitCode;

use schemafig::{Schemafig, SchemafigError};

use config::DemoConfig;

/// Seed file looked up in the working directory.
const CONFIG_FILE: &str = "schemafig-demo.toml";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("schemafig-demo: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), SchemafigError> {
    let mut config = DemoConfig::default();
    let builder = Schemafig::builder().bin_name("schemafig-demo");

    let seed = Path::new(CONFIG_FILE);
    if seed.exists() {
        builder.load_file(seed, &mut config)?;
        println!("(seeded from {CONFIG_FILE})");
    } else {
        builder.load(&mut config)?;
    }

    println!("name             = {}", config.name);
    println!("verbose          = {}", config.verbose);
    println!("server.host      = {}", config.server.host);
    println!("server.port      = {}", config.server.port);
    println!("server.max_conns = {}", config.server.max_connections);
    println!("display.color    = {}", config.display.color);
    println!("display.format   = {}", config.display.format);
    Ok(())
}
