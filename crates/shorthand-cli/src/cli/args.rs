//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Shorthand selectors to compile (positional, one or more).
pub fn shorthand_arg() -> Arg {
    Arg::new("shorthand")
        .value_name("SHORTHAND")
        .required(true)
        .num_args(1..)
        .help("Shorthand selector, e.g. 'todo_page rows row:first'")
}

/// Schema file (positional, `-` for stdin).
pub fn schema_path_arg() -> Arg {
    Arg::new("schema_path")
        .value_name("SCHEMA")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Schema JSON file, or '-' for stdin")
}

/// Config file (-c/--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Config JSON file (attribute, containers, scoping_operation)")
}

/// Test attribute override (-a/--attribute).
pub fn attribute_arg() -> Arg {
    Arg::new("attribute")
        .short('a')
        .long("attribute")
        .value_name("NAME")
        .help("Test attribute to match (overrides config; default: data-test)")
}

/// Show compiled selectors (--compiled).
pub fn compiled_arg() -> Arg {
    Arg::new("compiled")
        .long("compiled")
        .action(ArgAction::SetTrue)
        .help("Show compiled selectors instead of shorthand")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}
