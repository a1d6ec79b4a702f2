mod cli;
mod commands;
mod logging;

use cli::{CheckParams, CompileParams, ExtendParams, TreeParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this")
    };
    logging::init(m.get_count("verbose"));

    match name {
        "compile" => {
            let params = CompileParams::from_matches(m);
            commands::compile::run(params.into());
        }
        "extend" => {
            let params = ExtendParams::from_matches(m);
            commands::extend::run(params.into());
        }
        "tree" => {
            let params = TreeParams::from_matches(m);
            commands::tree::run(params.into());
        }
        "check" => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
