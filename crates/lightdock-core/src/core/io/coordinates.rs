use crate::core::models::coordinates::Coordinates;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::trace;

/// Represents failures while loading an initial-population coordinate file.
///
/// Every variant is fatal for the initialization that triggered it; the reader
/// never fills in, truncates or pads records.
#[derive(Debug, Error)]
pub enum CoordinatesError {
    /// The file could not be opened or read.
    #[error("File I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A reader without a backing path failed.
    #[error("Read error: {source}")]
    Read {
        #[source]
        source: io::Error,
    },
    /// The file holds no coordinate records at all.
    #[error("No coordinates found in '{path}'", path = path.display())]
    Empty { path: PathBuf },
    /// The number of records differs from the requested number of glowworms.
    #[error(
        "Number of coordinates in '{path}' ({found}) does not match the number of glowworms ({expected})",
        path = path.display()
    )]
    CountMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
    /// A record could not be turned into a coordinate vector.
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: CoordinatesParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum CoordinatesParseErrorKind {
    #[error("Invalid float format (value: '{value}')")]
    InvalidFloat { value: String },
    #[error("Expected {expected} coordinates, found {found}")]
    WrongDimension { expected: usize, found: usize },
}

/// A raw coordinate record together with its 1-based line number in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawRecord {
    line: usize,
    content: String,
}

/// Reader for plain-text coordinate files, one glowworm per line.
pub struct CoordinatesFile;

impl CoordinatesFile {
    /// Reads and parses every non-blank record from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    /// * `dimension` - The number of tokens every record must hold.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatesError::Read`] if the reader fails and
    /// [`CoordinatesError::Parse`] for the first malformed record.
    pub fn read_from(
        reader: &mut impl BufRead,
        dimension: usize,
    ) -> Result<Vec<Coordinates>, CoordinatesError> {
        let records =
            Self::read_records(reader).map_err(|source| CoordinatesError::Read { source })?;
        records
            .iter()
            .map(|record| parse_record(record, dimension))
            .collect()
    }

    /// Reads and parses every non-blank record from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or any record is malformed.
    pub fn read_from_path<P: AsRef<Path>>(
        path: P,
        dimension: usize,
    ) -> Result<Vec<Coordinates>, CoordinatesError> {
        let path = path.as_ref();
        let records = Self::read_records_from_path(path)?;
        records
            .iter()
            .map(|record| parse_record(record, dimension))
            .collect()
    }

    fn read_records(reader: &mut impl BufRead) -> io::Result<Vec<RawRecord>> {
        let mut records = Vec::new();
        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(RawRecord {
                line: line_num + 1,
                content: line,
            });
        }
        Ok(records)
    }

    fn read_records_from_path(path: &Path) -> Result<Vec<RawRecord>, CoordinatesError> {
        let io_error = |source| CoordinatesError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_error)?;
        let mut reader = BufReader::new(file);
        Self::read_records(&mut reader).map_err(io_error)
    }
}

/// Loads the initial population of a swarm from a coordinate file.
///
/// The checks run in a fixed order: a file without records is rejected first,
/// then a record count different from `number_of_glowworms`, and only then the
/// individual records are parsed.
///
/// # Arguments
///
/// * `path` - The coordinate file to read.
/// * `dimension` - The number of tokens every record must hold.
/// * `number_of_glowworms` - The requested population size.
///
/// # Return
///
/// Returns one coordinate vector per record, in file order.
///
/// # Errors
///
/// Returns a [`CoordinatesError`] when the file is unreadable, empty, holds the
/// wrong number of records, or contains a malformed record.
pub fn load_initial_population(
    path: &Path,
    dimension: usize,
    number_of_glowworms: usize,
) -> Result<Vec<Coordinates>, CoordinatesError> {
    let records = CoordinatesFile::read_records_from_path(path)?;

    if records.is_empty() {
        return Err(CoordinatesError::Empty {
            path: path.to_path_buf(),
        });
    }
    if records.len() != number_of_glowworms {
        return Err(CoordinatesError::CountMismatch {
            path: path.to_path_buf(),
            expected: number_of_glowworms,
            found: records.len(),
        });
    }

    records
        .iter()
        .map(|record| parse_record(record, dimension))
        .collect()
}

fn parse_record(record: &RawRecord, dimension: usize) -> Result<Coordinates, CoordinatesError> {
    let tokens: Vec<&str> = record
        .content
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.len() != dimension {
        return Err(CoordinatesError::Parse {
            line: record.line,
            kind: CoordinatesParseErrorKind::WrongDimension {
                expected: dimension,
                found: tokens.len(),
            },
        });
    }

    let values = tokens
        .iter()
        .map(|token| {
            token.parse::<f64>().map_err(|_| CoordinatesError::Parse {
                line: record.line,
                kind: CoordinatesParseErrorKind::InvalidFloat {
                    value: (*token).to_string(),
                },
            })
        })
        .collect::<Result<Vec<f64>, _>>()?;

    trace!(line = record.line, "Parsed coordinate record.");
    Ok(Coordinates::new(values))
}
