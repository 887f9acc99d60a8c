use clap::{Command, arg};

pub const RANGE_CMD: &str = "range";

pub fn create_range_cli() -> Command {
    Command::new(RANGE_CMD)
        .about("List every gene overlapping a coordinate range, on both strands")
        .arg_required_else_help(true)
        .arg(
            arg!(-a --annotations <annotations> "Tab-separated gene annotation file (.tsv or .tsv.gz)")
                .required(true),
        )
        .arg(arg!(-c --chromosome <chromosome> "Chromosome name (1-22, X, Y)").required(true))
        .arg(arg!(--start <start> "Range start position").required(true))
        .arg(arg!(--end <end> "Range end position").required(true))
}
