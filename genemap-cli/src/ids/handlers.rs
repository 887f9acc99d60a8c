use std::path::Path;

use anyhow::{Result, bail};
use clap::ArgMatches;

use genemap_mapper::IdTables;

pub fn run_ids(matches: &ArgMatches) -> Result<()> {
    let symbol_entrez = matches.get_one::<String>("symbol-entrez").map(Path::new);
    let ensembl_map = matches.get_one::<String>("ensembl-map").map(Path::new);
    let tables = IdTables::load(symbol_entrez, ensembl_map);

    let symbol = matches.get_one::<String>("symbol");
    let entrez = matches.get_one::<String>("entrez");
    let ensembl = matches.get_one::<String>("ensembl");

    match (symbol, entrez, ensembl) {
        (Some(symbol), None, None) => match tables.symbol_to_entrez_id(symbol) {
            Some(entrez_id) => println!("{entrez_id}"),
            None => bail!("no Entrez ID mapping for symbol {symbol}"),
        },
        (None, Some(entrez), None) => match tables.entrez_id_to_symbol(entrez) {
            Some(symbol) => println!("{symbol}"),
            None => bail!("no symbol mapping for Entrez ID {entrez}"),
        },
        (None, None, Some(ensembl)) => match tables.ensembl_to_symbol_and_entrez_id(ensembl) {
            Some((symbol, entrez_id)) => println!("{symbol}\t{entrez_id}"),
            None => bail!("no mapping for Ensembl ID {ensembl}"),
        },
        _ => bail!("provide exactly one of --symbol, --entrez, or --ensembl"),
    }

    Ok(())
}
