use std::path::PathBuf;

use shorthand_lib::Navigator;

use super::loader::{load_config, load_schema};

pub struct TreeArgs {
    pub schema_path: PathBuf,
    pub config: Option<PathBuf>,
    pub compiled: bool,
    pub color: bool,
}

pub fn run(args: TreeArgs) {
    let loaded = load_config(args.config.as_deref()).and_then(|config| {
        let schema = load_schema(&args.schema_path)?;
        Ok(Navigator::with_config(&schema, config)?)
    });
    let navigator = match loaded {
        Ok(navigator) => navigator,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    print!(
        "{}",
        navigator
            .printer()
            .compiled(args.compiled)
            .colored(args.color)
            .dump()
    );
}
