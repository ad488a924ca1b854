#[cfg(test)]
pub mod test {
    use serde::Deserialize;

    use crate::schema::{Field, FieldSpec, Schema, Slot};

    /// Exercise every leaf kind, each source combination, and one nested
    /// record. `#[serde(default)]` keeps sparse documents working.
    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    pub struct AppConfig {
        pub host: String,
        pub port: i64,
        pub debug: bool,
        pub workers: i32,
        pub ratio: f32,
        pub timeout: f64,
        /// No sources at all: keeps its seeded value.
        pub label: String,
        pub database: DbConfig,
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    pub struct DbConfig {
        pub url: String,
        pub pool_size: i64,
    }

    impl Schema for AppConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new(
                    FieldSpec::new("host").env("APP_HOST").default_value("localhost"),
                    Slot::Str(&mut self.host),
                ),
                Field::new(
                    FieldSpec::new("port")
                        .flag("port")
                        .env("APP_PORT")
                        .default_value("8080")
                        .usage("Port to listen on"),
                    Slot::I64(&mut self.port),
                ),
                Field::new(
                    FieldSpec::new("debug").flag("debug").usage("Enable debug output"),
                    Slot::Bool(&mut self.debug),
                ),
                Field::new(
                    FieldSpec::new("workers").default_value("4"),
                    Slot::I32(&mut self.workers),
                ),
                Field::new(
                    FieldSpec::new("ratio").default_value("0.5"),
                    Slot::F32(&mut self.ratio),
                ),
                Field::new(
                    FieldSpec::new("timeout").env("APP_TIMEOUT").default_value("2.5"),
                    Slot::F64(&mut self.timeout),
                ),
                Field::new(FieldSpec::new("label"), Slot::Str(&mut self.label)),
                Field::nested("database", &mut self.database),
            ]
        }
    }

    impl Schema for DbConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new(
                    FieldSpec::new("url").env("APP_DB_URL").required(),
                    Slot::Str(&mut self.url),
                ),
                Field::new(
                    FieldSpec::new("pool_size")
                        .flag("pool-size")
                        .default_value("5")
                        .usage("Connection pool size"),
                    Slot::I64(&mut self.pool_size),
                ),
            ]
        }
    }

    /// Three levels of nesting; the only required leaf sits at the bottom.
    #[derive(Debug, Default)]
    pub struct Outer {
        pub name: String,
        pub mid: Mid,
    }

    #[derive(Debug, Default)]
    pub struct Mid {
        pub inner: Inner,
    }

    #[derive(Debug, Default)]
    pub struct Inner {
        pub enabled: bool,
        pub depth: i64,
        pub label: String,
    }

    impl Schema for Outer {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new(FieldSpec::new("name"), Slot::Str(&mut self.name)),
                Field::nested("mid", &mut self.mid),
            ]
        }
    }

    impl Schema for Mid {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![Field::nested("inner", &mut self.inner)]
        }
    }

    impl Schema for Inner {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new(
                    FieldSpec::new("enabled").env("TREE_ENABLED").required(),
                    Slot::Bool(&mut self.enabled),
                ),
                Field::new(
                    FieldSpec::new("depth").default_value("3"),
                    Slot::I64(&mut self.depth),
                ),
                Field::new(FieldSpec::new("label"), Slot::Str(&mut self.label)),
            ]
        }
    }

    /// A schema that names a field the engine cannot overlay, sandwiched
    /// between two resolvable ones.
    #[derive(Debug, Default)]
    pub struct WithUnsupported {
        pub first: String,
        pub tags: Vec<String>,
        pub last: String,
    }

    impl Schema for WithUnsupported {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new(
                    FieldSpec::new("first").env("U_FIRST"),
                    Slot::Str(&mut self.first),
                ),
                Field::new(
                    FieldSpec::new("tags"),
                    Slot::Unsupported {
                        type_name: "Vec<String>",
                    },
                ),
                Field::new(
                    FieldSpec::new("last").env("U_LAST"),
                    Slot::Str(&mut self.last),
                ),
            ]
        }
    }

    #[test]
    fn fixture_schemas_enumerate_in_declaration_order() {
        let mut config = AppConfig::default();
        let names: Vec<&str> = config.fields().iter().map(|f| f.spec.name()).collect();
        assert_eq!(
            names,
            ["host", "port", "debug", "workers", "ratio", "timeout", "label", "database"]
        );

        let mut tree = Outer::default();
        assert_eq!(tree.fields().len(), 2);
    }
}
