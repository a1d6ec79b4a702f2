use std::path::PathBuf;

use shorthand_lib::SelectorCompiler;

use super::loader::load_config;

pub struct CompileArgs {
    pub shorthands: Vec<String>,
    pub config: Option<PathBuf>,
    pub attribute: Option<String>,
}

pub fn run(args: CompileArgs) {
    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let attribute = args
        .attribute
        .as_deref()
        .unwrap_or(config.attribute_name());
    let compiler = SelectorCompiler::new(attribute);

    for shorthand in &args.shorthands {
        println!("{}", compiler.compile(shorthand));
    }
}
