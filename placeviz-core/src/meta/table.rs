//! Flat metadata table assembly and TSV export.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use super::sample::{parse_sample, SampleRecord};
use super::MetaError;

/// One row per sample, one column per attribute tag seen anywhere.
///
/// Columns keep first-seen order. Samples rarely share the exact same
/// attribute set, so cells can be missing; they export as empty strings.
#[derive(Debug, Clone, Default)]
pub struct MetadataTable {
    columns: Vec<String>,
    rows: Vec<HashMap<String, String>>,
}

impl MetadataTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from every file in a directory of sample documents.
    ///
    /// Files are processed in name order so the output is stable across
    /// platforms. Subdirectories are skipped.
    pub fn from_dir(dir: &Path) -> Result<Self, MetaError> {
        let mut paths: Vec<_> = fs::read_dir(dir)
            .map_err(|source| MetaError::Read {
                path: dir.to_path_buf(),
                source,
            })?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        let mut table = Self::new();
        for path in paths {
            let xml = fs::read_to_string(&path).map_err(|source| MetaError::Read {
                path: path.clone(),
                source,
            })?;
            let record = parse_sample(&xml).map_err(|source| MetaError::Sample {
                path: path.clone(),
                source: Box::new(source),
            })?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();
            table.push_sample(&file_name, &record);
        }
        Ok(table)
    }

    /// Append one sample as a row, registering any new columns.
    pub fn push_sample(&mut self, file_name: &str, record: &SampleRecord) {
        let mut cells = HashMap::new();
        self.set(&mut cells, "File", file_name);
        self.set(&mut cells, "Accession", &record.accession);
        self.set(&mut cells, "Alias", &record.alias);

        for attribute in &record.attributes {
            self.set(&mut cells, &attribute.tag, &attribute.value);
            if let Some(units) = &attribute.units {
                let column = format!("{} Unit", attribute.tag);
                self.set(&mut cells, &column, units);
            }
        }
        self.rows.push(cells);
    }

    fn set(&mut self, cells: &mut HashMap<String, String>, column: &str, value: &str) {
        if !self.columns.iter().any(|c| c == column) {
            self.columns.push(column.to_string());
        }
        cells.insert(column.to_string(), value.to_string());
    }

    /// Column names in first-seen order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the table as tab-separated values.
    pub fn write_tsv<W: Write>(&self, writer: W) -> Result<(), MetaError> {
        let mut tsv = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(writer);

        tsv.write_record(&self.columns)?;
        for row in &self.rows {
            let record: Vec<&str> = self
                .columns
                .iter()
                .map(|column| row.get(column).map(String::as_str).unwrap_or(""))
                .collect();
            tsv.write_record(&record)?;
        }
        tsv.flush()?;
        Ok(())
    }

    /// Write the table as tab-separated values to a file.
    pub fn save_tsv(&self, path: &Path) -> Result<(), MetaError> {
        let file = fs::File::create(path).map_err(|source| MetaError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_tsv(file)
    }
}
