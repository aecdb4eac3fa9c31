//! Generic knowledge table parser.
//!
//! Provides a streaming parser for tab-delimited knowledge tables with a
//! mandatory header row.

use std::fs::File;
use std::io::{BufReader, Read};
use std::marker::PhantomData;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::types::{KbError, KbResult};

/// Trait for types that can be parsed from knowledge table rows.
pub trait KbRecord: Sized {
    /// Expected column names for this record type.
    const EXPECTED_COLUMNS: &'static [&'static str];

    /// Parse a record from a CSV StringRecord.
    ///
    /// `row` is the 1-based data row number, used in error messages.
    fn from_record(record: &StringRecord, row: usize) -> KbResult<Self>;
}

/// A streaming parser for knowledge table files.
pub struct TsvParser<R: Read, T: KbRecord> {
    reader: Reader<R>,
    records_read: usize,
    _marker: PhantomData<T>,
}

impl<T: KbRecord> TsvParser<BufReader<File>, T> {
    /// Creates a new parser from a file path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or has invalid headers.
    pub fn from_path<P: AsRef<Path>>(path: P) -> KbResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(KbError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read, T: KbRecord> TsvParser<R, T> {
    /// Creates a new parser from a reader.
    pub fn from_reader(reader: R) -> KbResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(false)
            .quoting(false)
            .trim(csv::Trim::None)
            .from_reader(reader);

        Self::validate_headers(&mut csv_reader)?;

        Ok(Self {
            reader: csv_reader,
            records_read: 0,
            _marker: PhantomData,
        })
    }

    /// Validates that the file has the expected column headers.
    fn validate_headers(reader: &mut Reader<R>) -> KbResult<()> {
        let headers = reader.headers()?;
        let expected = T::EXPECTED_COLUMNS;

        if headers.len() != expected.len() {
            return Err(KbError::InvalidHeader {
                expected: expected.len(),
                found: headers.len(),
            });
        }

        for (i, expected_col) in expected.iter().enumerate() {
            let found = headers.get(i).unwrap_or("");
            // Handle UTF-8 BOM at start of file
            let found = found.trim_start_matches('\u{feff}').trim();
            if !found.eq_ignore_ascii_case(expected_col) {
                return Err(KbError::UnexpectedColumn {
                    position: i,
                    expected: expected_col.to_string(),
                    found: found.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Returns the number of data rows read so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }
}

impl<R: Read, T: KbRecord> Iterator for TsvParser<R, T> {
    type Item = KbResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    self.records_read += 1;

                    // Skip blank lines
                    if record.iter().all(|f| f.trim().is_empty()) {
                        continue;
                    }

                    return Some(T::from_record(&record, self.records_read));
                }
                Ok(false) => return None,
                Err(e) => {
                    self.records_read += 1;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

/// Helper functions for reading field values.
pub mod field {
    use super::{KbError, KbResult, StringRecord};

    /// Returns the trimmed text of a required column.
    pub fn text(record: &StringRecord, index: usize, column: &str, row: usize) -> KbResult<String> {
        let value = record.get(index).ok_or_else(|| KbError::MissingColumn {
            column: column.to_string(),
        })?;

        let value = value.trim();
        if value.is_empty() {
            return Err(KbError::EmptyField {
                column: column.to_string(),
                row,
            });
        }

        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Pair {
        left: String,
        right: String,
    }

    impl KbRecord for Pair {
        const EXPECTED_COLUMNS: &'static [&'static str] = &["left", "right"];

        fn from_record(record: &StringRecord, row: usize) -> KbResult<Self> {
            Ok(Pair {
                left: field::text(record, 0, "left", row)?,
                right: field::text(record, 1, "right", row)?,
            })
        }
    }

    #[test]
    fn test_parses_rows_in_order() {
        let data = "left\tright\na\tb\n\nc\td\n";
        let parser = TsvParser::<_, Pair>::from_reader(data.as_bytes()).unwrap();
        let rows: Vec<Pair> = parser.map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].left, "a");
        assert_eq!(rows[1].right, "d");
    }

    #[test]
    fn test_header_with_bom_and_case() {
        let data = "\u{feff}Left\tRIGHT\nx\ty\n";
        let parser = TsvParser::<_, Pair>::from_reader(data.as_bytes()).unwrap();
        assert_eq!(parser.count(), 1);
    }

    #[test]
    fn test_header_count_mismatch() {
        let data = "left\n";
        let result = TsvParser::<_, Pair>::from_reader(data.as_bytes());
        assert!(matches!(
            result,
            Err(KbError::InvalidHeader {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_unexpected_column() {
        let data = "left\twrong\n";
        let result = TsvParser::<_, Pair>::from_reader(data.as_bytes());
        assert!(matches!(
            result,
            Err(KbError::UnexpectedColumn { position: 1, .. })
        ));
    }

    #[test]
    fn test_bad_rows_surface_as_errors() {
        let data = "left\tright\na\t \nonly-one\nc\td\n";
        let parser = TsvParser::<_, Pair>::from_reader(data.as_bytes()).unwrap();
        let results: Vec<KbResult<Pair>> = parser.collect();

        assert_eq!(results.len(), 3);
        assert!(matches!(
            results[0],
            Err(KbError::EmptyField { row: 1, .. })
        ));
        assert!(matches!(results[1], Err(KbError::Csv(_))));
        assert_eq!(results[2].as_ref().unwrap().left, "c");
    }

    #[test]
    fn test_missing_file() {
        let result = TsvParser::<_, Pair>::from_path("/nonexistent/table.tsv");
        assert!(matches!(result, Err(KbError::FileNotFound { .. })));
    }
}
