use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// A generic reader for tab-separated files with a header row.
///
/// The header row is consumed on construction and columns are addressed by
/// name, so the column order in the source file does not matter. Iteration
/// yields one `Vec<String>` of raw fields per data row; empty lines are
/// skipped.
pub struct DelimitedRecords<B: BufRead> {
    lines: Lines<B>,
    columns: HashMap<String, usize>,
}

impl<B: BufRead> DelimitedRecords<B> {
    /// Read the header row and build the column name -> index map.
    pub fn new(reader: B) -> io::Result<Self> {
        let mut lines = reader.lines();
        let header = lines.next().transpose()?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "missing header row")
        })?;

        let columns = header
            .trim_end_matches(['\r', '\n'])
            .split('\t')
            .enumerate()
            .map(|(idx, name)| (name.trim().to_string(), idx))
            .collect();

        Ok(DelimitedRecords { lines, columns })
    }

    /// Index of a named column, if the header declared it.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.get(name).copied()
    }
}

impl<B: BufRead> Iterator for DelimitedRecords<B> {
    type Item = io::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Err(e) => return Some(Err(e)),
                Ok(line) => {
                    let line = line.trim_end_matches(['\r', '\n']);
                    if line.is_empty() {
                        continue;
                    }
                    return Some(Ok(line.split('\t').map(str::to_string).collect()));
                }
            }
        }
    }
}
