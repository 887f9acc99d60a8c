//! Flat identifier translation tables: symbol ↔ Entrez ID and
//! Ensembl ID → (symbol, Entrez ID).
//!
//! These are plain associative lookups with no spatial component, built once
//! from their source files. A table whose source cannot be read degrades to
//! permanently empty for the process lifetime; the other tables and the
//! spatial index are unaffected.

use std::io::BufRead;
use std::path::Path;

use fxhash::FxHashMap;
use log::{error, info};

use genemap_core::utils::{DelimitedRecords, get_dynamic_reader};

use crate::errors::AnnotationError;

pub const ENSEMBL_COL: &str = "Ensembl";
pub const SYMBOL_COL: &str = "Symbol";
pub const ENTREZ_COL: &str = "Entrez";

/// Read a two-column symbol → Entrez TSV (header row skipped, columns
/// addressed by position) into forward and reverse maps.
pub fn read_symbol_entrez<B: BufRead>(
    reader: B,
) -> Result<(FxHashMap<String, String>, FxHashMap<String, String>), AnnotationError> {
    let mut forward = FxHashMap::default();
    let mut reverse = FxHashMap::default();

    // positional columns; the header row carries no information we need
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if i == 0 || line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let (Some(symbol), Some(entrez)) = (fields.next(), fields.next()) else {
            continue;
        };
        forward.insert(symbol.to_string(), entrez.to_string());
        reverse.insert(entrez.to_string(), symbol.to_string());
    }
    Ok((forward, reverse))
}

/// Read the Ensembl mapping TSV (header columns `Ensembl`, `Symbol`,
/// `Entrez`, order-independent) into an Ensembl → (symbol, Entrez) map.
pub fn read_ensembl_map<B: BufRead>(
    reader: B,
) -> Result<FxHashMap<String, (String, String)>, AnnotationError> {
    let records = DelimitedRecords::new(reader)?;

    let require = |name: &'static str| {
        records
            .column(name)
            .ok_or(AnnotationError::MissingColumn(name))
    };
    let ensembl_idx = require(ENSEMBL_COL)?;
    let symbol_idx = require(SYMBOL_COL)?;
    let entrez_idx = require(ENTREZ_COL)?;

    let mut map = FxHashMap::default();
    for row in records {
        let row = row?;
        let field = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("").trim();
        let ensembl = field(ensembl_idx);
        if ensembl.is_empty() {
            continue;
        }
        map.insert(
            ensembl.to_string(),
            (field(symbol_idx).to_string(), field(entrez_idx).to_string()),
        );
    }
    Ok(map)
}

/// The identifier translation tables, immutable once loaded.
#[derive(Debug, Default)]
pub struct IdTables {
    symbol_to_entrez: FxHashMap<String, String>,
    entrez_to_symbol: FxHashMap<String, String>,
    ensembl: FxHashMap<String, (String, String)>,
}

impl IdTables {
    /// Tables with no mappings at all; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load both tables, independently degrading each to empty if its
    /// source file cannot be read.
    pub fn load(symbol_entrez: Option<&Path>, ensembl_ids: Option<&Path>) -> Self {
        let mut tables = Self::default();

        if let Some(path) = symbol_entrez {
            match get_dynamic_reader(path)
                .map_err(AnnotationError::from)
                .and_then(read_symbol_entrez)
            {
                Ok((forward, reverse)) => {
                    info!("Loaded {} symbol/Entrez mappings", forward.len());
                    tables.symbol_to_entrez = forward;
                    tables.entrez_to_symbol = reverse;
                }
                Err(e) => {
                    error!(
                        "symbol/Entrez table unavailable, lookups will be empty: {}",
                        e
                    );
                }
            }
        }

        if let Some(path) = ensembl_ids {
            match get_dynamic_reader(path)
                .map_err(AnnotationError::from)
                .and_then(read_ensembl_map)
            {
                Ok(map) => {
                    info!("Loaded {} Ensembl mappings", map.len());
                    tables.ensembl = map;
                }
                Err(e) => {
                    error!("Ensembl table unavailable, lookups will be empty: {}", e);
                }
            }
        }

        tables
    }

    /// Entrez ID for a gene symbol.
    pub fn symbol_to_entrez_id(&self, symbol: &str) -> Option<&str> {
        self.symbol_to_entrez.get(symbol).map(String::as_str)
    }

    /// Gene symbol for an Entrez ID.
    pub fn entrez_id_to_symbol(&self, entrez_id: &str) -> Option<&str> {
        self.entrez_to_symbol.get(entrez_id).map(String::as_str)
    }

    /// (symbol, Entrez ID) pair for an Ensembl gene ID.
    pub fn ensembl_to_symbol_and_entrez_id(&self, ensembl_id: &str) -> Option<(&str, &str)> {
        self.ensembl
            .get(ensembl_id)
            .map(|(symbol, entrez)| (symbol.as_str(), entrez.as_str()))
    }
}
