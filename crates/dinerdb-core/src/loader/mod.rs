// crates/dinerdb-core/src/loader/mod.rs

//! # Record Loader
//!
//! Turns delimited text files into records. The physical layer (file
//! access, optional gzip) lives here; field conversion lives in [`parse`].
//!
//! Malformed rows are skipped with a warning. Only I/O failures abort a load.

use crate::error::{DinerError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Lines};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

pub mod parse;

pub use parse::{parse_customer, parse_favourite, parse_restaurant, parse_review};

/// One data row: its 1-based line number and its raw fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: usize,
    pub fields: Vec<String>,
}

impl Row {
    pub(crate) fn malformed(&self, reason: impl Into<String>) -> DinerError {
        DinerError::MalformedRow {
            line: self.line,
            reason: reason.into(),
        }
    }
}

/// Iterates the data rows of a delimited text stream.
///
/// The first non-blank line is taken as the header and skipped, as are
/// blank lines.
///
/// ```rust
/// use dinerdb_core::loader::RowReader;
///
/// let text = "id,name\n\n1,Ann\n2,Bob\n";
/// let rows: Vec<_> = RowReader::new(text.as_bytes(), ',').collect::<Result<_, _>>().unwrap();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].line, 3);
/// assert_eq!(rows[1].fields, ["2", "Bob"]);
/// ```
pub struct RowReader<R> {
    lines: Lines<R>,
    delimiter: char,
    line: usize,
    header_seen: bool,
}

impl<R: BufRead> RowReader<R> {
    pub fn new(reader: R, delimiter: char) -> Self {
        RowReader {
            lines: reader.lines(),
            delimiter,
            line: 0,
            header_seen: false,
        }
    }
}

impl<R: BufRead> Iterator for RowReader<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(e) => return Some(Err(e.into())),
            };
            self.line += 1;
            let text = text.trim_end_matches('\r');
            if text.trim().is_empty() {
                continue;
            }
            if !self.header_seen {
                self.header_seen = true;
                continue;
            }
            let fields = text.split(self.delimiter).map(str::to_owned).collect();
            return Some(Ok(Row {
                line: self.line,
                fields,
            }));
        }
    }
}

/// Opens a file, buffers it, and unwraps gzip when the name ends in `.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            DinerError::NotFound(format!("Data file not found at {}: {}", path.display(), e))
        }
        _ => DinerError::Io(e),
    })?;
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");

    if !gzipped {
        return Ok(Box::new(BufReader::new(file)));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(DinerError::InvalidData(format!(
            "{} is gzip-compressed but the `compact` feature is disabled",
            path.display()
        )))
    }
}

/// Parses every row of `reader`, skipping rows `parse` rejects.
pub fn read_records<R, T, F>(reader: R, delimiter: char, parse: F) -> Result<Vec<T>>
where
    R: BufRead,
    F: Fn(&Row) -> Result<T>,
{
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in RowReader::new(reader, delimiter) {
        let row = row?;
        match parse(&row) {
            Ok(record) => records.push(record),
            Err(e) => {
                skipped += 1;
                warn!(line = row.line, error = %e, "skipping malformed row");
            }
        }
    }
    info!(parsed = records.len(), skipped, "rows read");
    Ok(records)
}

/// [`read_records`] over a file opened with [`open_stream`].
pub fn read_file<T, F>(path: &Path, delimiter: char, parse: F) -> Result<Vec<T>>
where
    F: Fn(&Row) -> Result<T>,
{
    info!(path = %path.display(), "loading");
    read_records(open_stream(path)?, delimiter, parse)
}

/// Separator implied by a file name: `\t` for `*.tsv` and `*.tsv.gz`,
/// `,` for everything else.
///
/// ```rust
/// use dinerdb_core::loader::delimiter_for;
/// use std::path::Path;
///
/// assert_eq!(delimiter_for(Path::new("data/reviews.tsv")), '\t');
/// assert_eq!(delimiter_for(Path::new("data/reviews.TSV.gz")), '\t');
/// assert_eq!(delimiter_for(Path::new("data/customers.csv.gz")), ',');
/// ```
pub fn delimiter_for(path: &Path) -> char {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(name.as_str());
    if name.ends_with(".tsv") {
        '\t'
    } else {
        ','
    }
}

/// Where to find each data file. Any of them may be left out.
///
/// Each file's separator follows its name (see [`delimiter_for`]) unless
/// `delimiter` forces one for every file.
#[derive(Debug, Clone, Default)]
pub struct DataSources {
    pub customers: Option<PathBuf>,
    pub restaurants: Option<PathBuf>,
    pub favourites: Option<PathBuf>,
    pub reviews: Option<PathBuf>,
    /// Forced field separator; `None` infers it per file.
    pub delimiter: Option<char>,
}

impl DataSources {
    /// Reads every file as tab-separated, whatever its name.
    pub fn tsv(self) -> Self {
        self.with_delimiter('\t')
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// The separator used for `path`.
    pub fn delimiter_for(&self, path: &Path) -> char {
        self.delimiter.unwrap_or_else(|| delimiter_for(path))
    }
}
