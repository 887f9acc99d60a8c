use anyhow::Result;
use clap::ArgMatches;

use genemap_mapper::{GeneIndex, INTERGENIC};

pub fn run_locate(matches: &ArgMatches) -> Result<()> {
    let annotations = matches
        .get_one::<String>("annotations")
        .expect("A path to an annotation file is required.");
    let chromosome = matches
        .get_one::<String>("chromosome")
        .expect("A chromosome name is required.");
    let position = matches
        .get_one::<String>("position")
        .expect("A chromosome position is required.");

    let default_strand = String::new();
    let strand = matches.get_one::<String>("strand").unwrap_or(&default_strand);

    let index = GeneIndex::from_path(annotations)?;

    match index.find_gene_at_position(chromosome, position, strand)? {
        Some(symbol) => println!("{symbol}"),
        None => println!("{INTERGENIC}"),
    }

    Ok(())
}
