use std::path::PathBuf;

use super::loader::{load_config, load_schema};

pub struct CheckArgs {
    pub schema_path: PathBuf,
    pub config: Option<PathBuf>,
}

pub fn run(args: CheckArgs) {
    if let Err(e) = load_config(args.config.as_deref()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let schema = match load_schema(&args.schema_path) {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!(keys = schema.len(), "schema is well-formed");

    // Silent on success (like cargo check)
}
