use clap::{Command, arg};

pub const IDS_CMD: &str = "ids";

pub fn create_ids_cli() -> Command {
    Command::new(IDS_CMD)
        .about("Translate between gene symbols, Entrez IDs, and Ensembl IDs")
        .arg_required_else_help(true)
        .arg(arg!(--"symbol-entrez" <file> "Two-column symbol/Entrez TSV").required(false))
        .arg(arg!(--"ensembl-map" <file> "TSV with Ensembl, Symbol, and Entrez columns").required(false))
        .arg(arg!(--symbol <symbol> "Gene symbol to translate to an Entrez ID").required(false))
        .arg(arg!(--entrez <entrez> "Entrez ID to translate to a gene symbol").required(false))
        .arg(arg!(--ensembl <ensembl> "Ensembl gene ID to translate to symbol and Entrez ID").required(false))
}
