//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror the command `*Args` but are populated from clap
//! - `Into<*Args>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::compile::CompileArgs;
use crate::commands::extend::ExtendArgs;
use crate::commands::tree::TreeArgs;

pub struct CompileParams {
    pub shorthands: Vec<String>,
    pub config: Option<PathBuf>,
    pub attribute: Option<String>,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            shorthands: m
                .get_many::<String>("shorthand")
                .map(|vals| vals.cloned().collect())
                .unwrap_or_default(),
            config: m.get_one::<PathBuf>("config").cloned(),
            attribute: m.get_one::<String>("attribute").cloned(),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        Self {
            shorthands: p.shorthands,
            config: p.config,
            attribute: p.attribute,
        }
    }
}

pub struct ExtendParams {
    pub schema_path: PathBuf,
    pub config: Option<PathBuf>,
}

impl ExtendParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            config: m.get_one::<PathBuf>("config").cloned(),
        }
    }
}

impl From<ExtendParams> for ExtendArgs {
    fn from(p: ExtendParams) -> Self {
        Self {
            schema_path: p.schema_path,
            config: p.config,
        }
    }
}

pub struct TreeParams {
    pub schema_path: PathBuf,
    pub config: Option<PathBuf>,
    pub compiled: bool,
    pub color: ColorChoice,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            config: m.get_one::<PathBuf>("config").cloned(),
            compiled: m.get_flag("compiled"),
            color: parse_color(m),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            schema_path: p.schema_path,
            config: p.config,
            compiled: p.compiled,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub schema_path: PathBuf,
    pub config: Option<PathBuf>,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            config: m.get_one::<PathBuf>("config").cloned(),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            schema_path: p.schema_path,
            config: p.config,
        }
    }
}

fn schema_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("schema_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
