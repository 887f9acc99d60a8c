use anyhow::Result;
use clap::ArgMatches;

use genemap_mapper::GeneIndex;

pub fn run_range(matches: &ArgMatches) -> Result<()> {
    let annotations = matches
        .get_one::<String>("annotations")
        .expect("A path to an annotation file is required.");
    let chromosome = matches
        .get_one::<String>("chromosome")
        .expect("A chromosome name is required.");
    let start = matches
        .get_one::<String>("start")
        .expect("A range start position is required.");
    let end = matches
        .get_one::<String>("end")
        .expect("A range end position is required.");

    let index = GeneIndex::from_path(annotations)?;

    for symbol in index.find_genes_in_range(chromosome, start, end)? {
        println!("{symbol}");
    }

    Ok(())
}
