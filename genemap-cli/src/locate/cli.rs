use clap::{Command, arg};

pub const LOCATE_CMD: &str = "locate";

pub fn create_locate_cli() -> Command {
    Command::new(LOCATE_CMD)
        .about("Find the gene overlapping a genomic position")
        .arg_required_else_help(true)
        .arg(
            arg!(-a --annotations <annotations> "Tab-separated gene annotation file (.tsv or .tsv.gz)")
                .required(true),
        )
        .arg(arg!(-c --chromosome <chromosome> "Chromosome name (1-22, X, Y)").required(true))
        .arg(arg!(-p --position <position> "Base-pair position").required(true))
        .arg(arg!(-s --strand <strand> "Strand, 1 or -1 (defaults to 1)").required(false))
}
