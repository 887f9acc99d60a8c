mod ids;
mod locate;
mod range;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "genemap";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Gene lookup by genomic coordinate, plus gene identifier translation, over tab-separated Ensembl annotations.")
        .subcommand_required(true)
        .subcommand(locate::cli::create_locate_cli())
        .subcommand(range::cli::create_range_cli())
        .subcommand(ids::cli::create_ids_cli())
}

fn main() -> Result<()> {
    env_logger::init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // POINT LOOKUP
        //
        Some((locate::cli::LOCATE_CMD, matches)) => {
            locate::handlers::run_locate(matches)?;
        }

        //
        // RANGE LOOKUP
        //
        Some((range::cli::RANGE_CMD, matches)) => {
            range::handlers::run_range(matches)?;
        }

        //
        // IDENTIFIER TRANSLATION
        //
        Some((ids::cli::IDS_CMD, matches)) => {
            ids::handlers::run_ids(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
