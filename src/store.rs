//! In-memory phone record store.
//!
//! The store is filled once from a CSV source and then only read. Lines that
//! cannot be parsed are skipped and reported back in a [`LoadReport`] instead
//! of aborting the load.

use crate::error::{BrowserError, Result};
use crate::phone::{Phone, PhoneRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Number of columns in a phone row.
const FIELD_COUNT: usize = 5;

/// Outcome of a load: how many records were added and which lines were skipped.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Number of phones added to the store.
    pub loaded: usize,

    /// One `InvalidRecord` error per skipped line, in source order.
    pub skipped: Vec<BrowserError>,
}

/// Ordered, read-only collection of phones.
///
/// Input order is preserved. No deduplication is performed.
#[derive(Debug, Default)]
pub struct PhoneStore {
    phones: Vec<Phone>,
}

impl PhoneStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        PhoneStore { phones: Vec::new() }
    }

    /// Opens `path` and loads every well-formed line from it.
    ///
    /// Returns [`BrowserError::SourceUnavailable`] if the file cannot be
    /// opened; the store is left untouched in that case.
    pub fn load_path<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadReport> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BrowserError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loading phones from {}", path.display());
        self.load_csv(file)
    }

    /// Loads phones from a headerless CSV reader.
    ///
    /// Malformed lines are logged at warn level, collected in the report and
    /// skipped. Only a failure of the underlying reader stops the load.
    pub fn load_csv<R: Read>(&mut self, reader: R) -> Result<LoadReport> {
        let mut reader = BufReader::new(reader);
        let mut report = LoadReport::default();
        let mut line = Vec::new();
        let mut row = 0;

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            row += 1;

            match parse_line(&line, row) {
                Ok(Some(phone)) => {
                    debug!("Row {}: Loaded {} {}", row, phone.brand, phone.model);
                    self.phones.push(phone);
                    report.loaded += 1;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("{}", e);
                    report.skipped.push(e);
                }
            }
        }

        info!(
            "Loaded {} phones, skipped {} lines",
            report.loaded,
            report.skipped.len()
        );
        Ok(report)
    }

    /// All phones in input order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Returns the phone at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Phone> {
        self.phones.get(index)
    }

    pub fn len(&self) -> usize {
        self.phones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }
}

/// Parses one physical line. Blank lines yield `Ok(None)`.
///
/// Each line gets its own CSV reader so `row` always matches the line number
/// in the source, blank lines included.
fn parse_line(bytes: &[u8], row: usize) -> Result<Option<Phone>> {
    let invalid = |message: String| BrowserError::InvalidRecord { row, message };

    let text =
        std::str::from_utf8(bytes).map_err(|e| invalid(format!("invalid UTF-8: {}", e)))?;
    if text.trim().is_empty() {
        return Ok(None);
    }

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut record = StringRecord::new();
    if !csv_reader
        .read_record(&mut record)
        .map_err(|e| invalid(e.to_string()))?
    {
        return Ok(None);
    }

    if record.len() < FIELD_COUNT {
        return Err(invalid(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            record.len()
        )));
    }

    let raw: PhoneRecord = record
        .deserialize(None)
        .map_err(|e| invalid(e.to_string()))?;
    raw.parse(row).map(Some)
}

impl From<Vec<Phone>> for PhoneStore {
    fn from(phones: Vec<Phone>) -> Self {
        PhoneStore { phones }
    }
}
