use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::{parse_record, record_line, Inventory, StockSource};
use crate::error::{Result, StockError};
use crate::model::Shoe;

/// Production source over the flat delimited stock file.
///
/// The file is opened and closed per call; no handle is held across
/// operations. There is no locking: one operator, one process.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, source: std::io::Error) -> StockError {
        StockError::SourceUnavailable {
            path: self.path.clone(),
            source,
        }
    }
}

impl StockSource for FileSource {
    fn load(&self) -> Result<Inventory> {
        let file = File::open(&self.path).map_err(|e| self.unavailable(e))?;
        let reader = BufReader::new(file);

        let mut inventory = Inventory::new();
        // The first line is always treated as the header, even when it is
        // not one: after a rewrite, a blank line sits in its place.
        for (line_no, line) in reader.lines().enumerate().skip(1) {
            let line = line?;
            inventory.append(parse_record(&line, line_no + 1)?);
        }
        Ok(inventory)
    }

    fn append_record(&mut self, shoe: &Shoe) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| self.unavailable(e))?;
        write!(file, "\n{}", record_line(shoe))?;
        Ok(())
    }

    fn rewrite(&mut self, inventory: &Inventory) -> Result<()> {
        let mut file = File::create(&self.path).map_err(|e| self.unavailable(e))?;
        for shoe in inventory {
            write!(file, "\n{}", record_line(shoe))?;
        }
        Ok(())
    }
}
