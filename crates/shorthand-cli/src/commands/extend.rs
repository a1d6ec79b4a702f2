use std::path::PathBuf;

use shorthand_core::{SchemaNode, extend};
use shorthand_lib::Config;

use super::loader::{load_config, load_schema};

pub struct ExtendArgs {
    pub schema_path: PathBuf,
    pub config: Option<PathBuf>,
}

pub fn run(args: ExtendArgs) {
    let loaded = load_config(args.config.as_deref())
        .and_then(|config| Ok((config, load_schema(&args.schema_path)?)));
    let (config, schema) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", render(&schema, &config));
}

/// Pretty JSON of the extended schema; row filters show up as `with` keys.
pub fn render(schema: &SchemaNode, config: &Config) -> String {
    let extended = extend(schema, config.container_table());
    serde_json::to_string_pretty(&extended.to_value()).expect("Value serialization never fails")
}
