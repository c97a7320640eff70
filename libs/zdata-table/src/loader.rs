//! # Table Loader
//!
//! Reads a sample table line by line into a [`SampleGrid`].
//!
//! The first line with any numeric field is the x axis. Every later line with
//! fields must carry one y value followed by exactly one sample per x value.
//! Lines without fields are skipped.

use crate::error::TableError;
use crate::grid::SampleGrid;
use crate::tokenizer::tokenize;
use config::constants::MAX_FILE_SIZE;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// Origin label used for tables parsed from memory.
const MEMORY_ORIGIN: &str = "<memory>";

/// Loads sample tables from files, readers or strings.
pub struct TableLoader;

impl TableLoader {
    /// Loads a sample table from disk.
    ///
    /// The file is closed before this returns, whether or not parsing
    /// succeeded.
    ///
    /// # Errors
    ///
    /// - [`TableError::FileAccess`] if the file cannot be opened or read
    /// - [`TableError::FileTooLarge`] if it exceeds `MAX_FILE_SIZE`
    /// - [`TableError::DataFormat`] if a row has the wrong number of fields
    /// - [`TableError::InvalidNumber`] if a field is not a number
    /// - [`TableError::InvalidEncoding`] if a line is not valid UTF-8
    ///
    /// An empty file is not an error: it yields [`SampleGrid::empty`].
    pub fn load(path: impl AsRef<Path>) -> Result<SampleGrid, TableError> {
        Self::load_with_limit(path, MAX_FILE_SIZE)
    }

    /// Loads a sample table from disk, rejecting files over `max_size` bytes.
    pub fn load_with_limit(path: impl AsRef<Path>, max_size: u64) -> Result<SampleGrid, TableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TableError::file_access(path, source))?;

        let size = file
            .metadata()
            .map_err(|source| TableError::file_access(path, source))?
            .len();
        if size > max_size {
            return Err(TableError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max: max_size,
            });
        }

        let origin = path.display().to_string();
        Self::parse_reader(BufReader::new(file), &origin)
    }

    /// Parses a sample table held in memory.
    pub fn parse_str(text: &str) -> Result<SampleGrid, TableError> {
        Self::parse_reader(text.as_bytes(), MEMORY_ORIGIN)
    }

    /// Parses a sample table from any buffered reader.
    ///
    /// `origin` names the source in error messages.
    pub fn parse_reader<R: BufRead>(reader: R, origin: &str) -> Result<SampleGrid, TableError> {
        let mut rows = RowCollector::new(origin);

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| match source.kind() {
                io::ErrorKind::InvalidData => TableError::invalid_encoding(origin, index + 1),
                _ => TableError::file_access(origin, source),
            })?;
            rows.push_line(index + 1, &line)?;
        }

        let grid = rows.finish();
        debug!(
            origin,
            u_count = grid.u_count(),
            v_count = grid.v_count(),
            "parsed sample table"
        );
        Ok(grid)
    }
}

/// Accumulates axes and rows while lines stream in.
struct RowCollector<'a> {
    origin: &'a str,
    x_axis: Option<Vec<f64>>,
    y_axis: Vec<f64>,
    z_matrix: Vec<Vec<f64>>,
}

impl<'a> RowCollector<'a> {
    fn new(origin: &'a str) -> Self {
        Self {
            origin,
            x_axis: None,
            y_axis: Vec::new(),
            z_matrix: Vec::new(),
        }
    }

    fn push_line(&mut self, line: usize, text: &str) -> Result<(), TableError> {
        let fields = tokenize(text);
        if fields.is_empty() {
            trace!(line, "skipping line without numeric fields");
            return Ok(());
        }

        let expected = match &self.x_axis {
            Some(x_axis) => x_axis.len(),
            None => {
                self.x_axis = Some(parse_fields(self.origin, line, &fields)?);
                return Ok(());
            }
        };

        // Count before converting, so a short row reports its length even
        // when one of its fields is also malformed.
        let actual = fields.len() - 1;
        if actual != expected {
            return Err(TableError::data_format(self.origin, line, expected, actual));
        }

        let mut values = parse_fields(self.origin, line, &fields)?;
        let samples = values.split_off(1);
        self.y_axis.push(values[0]);
        self.z_matrix.push(samples);
        Ok(())
    }

    fn finish(self) -> SampleGrid {
        match self.x_axis {
            Some(x_axis) => SampleGrid::from_parts(x_axis, self.y_axis, self.z_matrix),
            None => SampleGrid::empty(),
        }
    }
}

fn parse_fields(origin: &str, line: usize, fields: &[String]) -> Result<Vec<f64>, TableError> {
    fields
        .iter()
        .map(|field| {
            field
                .parse::<f64>()
                .map_err(|_| TableError::invalid_number(origin, line, field.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const EXAMPLE: &str = "1 2 3\n10 100 101 102\n20 200 201 202\n";

    #[test]
    fn test_parse_example_table() {
        let grid = TableLoader::parse_str(EXAMPLE).unwrap();
        assert_eq!(grid.u_count(), 3);
        assert_eq!(grid.v_count(), 2);
        assert_eq!(grid.x_axis(), &[1.0, 2.0, 3.0]);
        assert_eq!(grid.y_axis(), &[10.0, 20.0]);
        assert_eq!(
            grid.z_matrix(),
            &[vec![100.0, 101.0, 102.0], vec![200.0, 201.0, 202.0]]
        );
    }

    #[test]
    fn test_parse_shape_matches_counts() {
        let text = "0 0.5 1 1.5\n\
                    -1, 1, 2, 3, 4\n\
                    0, 5, 6, 7, 8\n\
                    1, 9, 10, 11, 12\n";
        let grid = TableLoader::parse_str(text).unwrap();
        assert_eq!(grid.x_axis().len(), 4);
        assert_eq!(grid.y_axis().len(), 3);
        assert_eq!(grid.z_matrix().len(), 3);
        assert!(grid.z_matrix().iter().all(|row| row.len() == 4));
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let text = "\n   \n1 2\n\n10 1 2\n \t\n20 3 4\n\n";
        let grid = TableLoader::parse_str(text).unwrap();
        assert_eq!(grid.u_count(), 2);
        assert_eq!(grid.v_count(), 2);
        assert_eq!(grid.y_axis(), &[10.0, 20.0]);
    }

    #[test]
    fn test_parse_header_only() {
        let grid = TableLoader::parse_str("1 2 3\n").unwrap();
        assert_eq!(grid.u_count(), 3);
        assert_eq!(grid.v_count(), 0);
        assert!(grid.z_matrix().is_empty());
    }

    #[test]
    fn test_parse_empty_source() {
        let grid = TableLoader::parse_str("").unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.u_count(), 0);
        assert_eq!(grid.v_count(), 0);
    }

    #[test]
    fn test_parse_scientific_and_labels() {
        let text = "x: 1e0 2E0\ny=1.5e1 -1.5 +2.5\n";
        let grid = TableLoader::parse_str(text).unwrap();
        assert_eq!(grid.x_axis(), &[1.0, 2.0]);
        assert_eq!(grid.y_axis(), &[15.0]);
        assert_eq!(grid.z_matrix(), &[vec![-1.5, 2.5]]);
    }

    #[test]
    fn test_parse_column_mismatch() {
        let text = "1 2 3\n10 100 101 102\n20 200 201\n";
        let error = TableLoader::parse_str(text).unwrap_err();
        match error {
            TableError::DataFormat {
                line,
                expected,
                actual,
                ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("expected DataFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_extra_column() {
        let text = "1 2\n10 1 2 3\n";
        let error = TableLoader::parse_str(text).unwrap_err();
        assert!(matches!(
            error,
            TableError::DataFormat {
                expected: 2,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_invalid_number() {
        let text = "1 2\n1.2.3 4 5\n";
        let error = TableLoader::parse_str(text).unwrap_err();
        match error {
            TableError::InvalidNumber { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "1.2.3");
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_count_checked_before_numbers() {
        // Malformed y value and a missing sample: the count error wins
        let text = "1 2\n1.2.3 4\n";
        let error = TableLoader::parse_str(text).unwrap_err();
        assert!(matches!(error, TableError::DataFormat { .. }));
    }

    #[test]
    fn test_parse_invalid_header_number() {
        let error = TableLoader::parse_str("1 2 3e\n").unwrap_err();
        assert!(matches!(error, TableError::InvalidNumber { line: 1, .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EXAMPLE.as_bytes()).unwrap();

        let grid = TableLoader::load(file.path()).unwrap();
        assert_eq!(grid.u_count(), 3);
        assert_eq!(grid.v_count(), 2);
    }

    #[test]
    fn test_load_error_names_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"1 2\n10 1\n").unwrap();

        let error = TableLoader::load(file.path()).unwrap_err();
        let expected_origin = file.path().display().to_string();
        match error {
            TableError::DataFormat { origin, .. } => assert_eq!(origin, expected_origin),
            other => panic!("expected DataFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_invalid_utf8_line() {
        let bytes: &[u8] = b"1 2\n10 \xff\xfe 2\n";
        let error = TableLoader::parse_reader(bytes, "bytes").unwrap_err();
        match error {
            TableError::InvalidEncoding { ref origin, line } => {
                assert_eq!(origin, "bytes");
                assert_eq!(line, 2);
            }
            ref other => panic!("expected InvalidEncoding, got {:?}", other),
        }
        assert!(error.is_data_format());
    }

    #[test]
    fn test_load_rejects_oversized_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EXAMPLE.as_bytes()).unwrap();

        let error = TableLoader::load_with_limit(file.path(), 8).unwrap_err();
        match error {
            TableError::FileTooLarge { size, max, .. } => {
                assert_eq!(size, EXAMPLE.len() as u64);
                assert_eq!(max, 8);
            }
            other => panic!("expected FileTooLarge, got {:?}", other),
        }

        let grid = TableLoader::load_with_limit(file.path(), EXAMPLE.len() as u64).unwrap();
        assert_eq!(grid.v_count(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = TableLoader::load(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(error, TableError::FileAccess { .. }));
    }
}
