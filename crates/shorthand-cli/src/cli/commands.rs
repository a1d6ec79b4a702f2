//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`. Every
//! command takes `-v`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("shorthand")
        .about("Compile shorthand selectors and inspect navigation schemas")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(compile_command())
        .subcommand(extend_command())
        .subcommand(tree_command())
        .subcommand(check_command())
}

/// Compile shorthand selectors to attribute selectors.
pub fn compile_command() -> Command {
    Command::new("compile")
        .about("Compile shorthand selectors")
        .after_help(
            r#"EXAMPLES:
  shorthand compile 'todo_page main rows row'
  shorthand compile 'rows row:has(label:contains(Walk the dog))'
  shorthand compile -a data-testid 'login_form submit'"#,
        )
        .arg(shorthand_arg())
        .arg(config_arg())
        .arg(attribute_arg())
        .arg(verbose_arg())
}

/// Print a schema with synthesized row filters.
pub fn extend_command() -> Command {
    Command::new("extend")
        .about("Print the schema with synthesized row filters")
        .after_help(
            r#"EXAMPLES:
  shorthand extend schema.json
  shorthand extend -c shorthand.json schema.json
  cat schema.json | shorthand extend -"#,
        )
        .arg(schema_path_arg())
        .arg(config_arg())
        .arg(verbose_arg())
}

/// Print the navigation tree of a schema.
pub fn tree_command() -> Command {
    Command::new("tree")
        .about("Print the navigation tree of a schema")
        .after_help(
            r#"EXAMPLES:
  shorthand tree schema.json
  shorthand tree schema.json --compiled
  shorthand tree schema.json --color never"#,
        )
        .arg(schema_path_arg())
        .arg(config_arg())
        .arg(compiled_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Validate a schema (and config).
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a schema")
        .after_help(
            r#"EXAMPLES:
  shorthand check schema.json                 # silent on success
  shorthand check schema.json -c config.json  # also validate config"#,
        )
        .arg(schema_path_arg())
        .arg(config_arg())
        .arg(verbose_arg())
}
