//! Distance-list reading.
//!
//! A list file holds one placement distance per record: a single numeric
//! column, no header. Values arrive in file order; validation of sign and
//! finiteness happens in the stats layer, which also rejects empty samples.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

/// Errors from reading a distance list.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("failed to open '{path}': {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("record {record} is not a number: '{value}'")]
    Parse { record: usize, value: String },
}

/// Read a distance list from a file.
pub fn read_distance_list(path: &Path) -> Result<Vec<f64>, ListError> {
    let file = File::open(path).map_err(|source| ListError::Open {
        path: path.display().to_string(),
        source,
    })?;
    read_distances(file)
}

/// Read a distance list from any reader.
///
/// Records beyond the first field are ignored, matching how the lists are
/// produced (one value per line, occasionally with trailing separators).
pub fn read_distances<R: Read>(reader: R) -> Result<Vec<f64>, ListError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut observations = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let field = record.get(0).unwrap_or("");
        if field.is_empty() {
            continue;
        }
        let value = field.parse::<f64>().map_err(|_| ListError::Parse {
            record: index + 1,
            value: field.to_string(),
        })?;
        observations.push(value);
    }
    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_single_column() {
        let observations = read_distances("0.0\n1.5\n2.25\n".as_bytes()).unwrap();
        assert_eq!(observations, vec![0.0, 1.5, 2.25]);
    }

    #[test]
    fn test_ignores_extra_fields() {
        let observations = read_distances("1.0,x\n2.0\n".as_bytes()).unwrap();
        assert_eq!(observations, vec![1.0, 2.0]);
    }

    #[test]
    fn test_skips_blank_records() {
        let observations = read_distances("1.0\n\n2.0\n".as_bytes()).unwrap();
        assert_eq!(observations, vec![1.0, 2.0]);
    }

    #[test]
    fn test_empty_input_yields_empty_list() {
        let observations = read_distances("".as_bytes()).unwrap();
        assert!(observations.is_empty());
    }

    #[test]
    fn test_non_numeric_record_names_its_position() {
        let err = read_distances("1.0\nbogus\n".as_bytes()).unwrap_err();
        match err {
            ListError::Parse { record, value } => {
                assert_eq!(record, 2);
                assert_eq!(value, "bogus");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = read_distance_list(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, ListError::Open { .. }));
        assert!(err.to_string().contains("not/here.csv"));
    }
}
