//! CSV Loading
//!
//! Reads a header-first CSV file into a [`Dataset`], typing each column
//! from its cells and treating the usual missing-value markers as null.

use super::error::{LoadError, LoadResult};
use super::types::{Column, Dataset, Value};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Cell texts read as null unless overridden
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "#N/A",
    "#NA", "<NA>",
];

/// CSV loader with configurable missing-value markers
#[derive(Debug, Clone)]
pub struct CsvLoader {
    na_values: Vec<String>,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvLoader {
    pub fn new() -> Self {
        Self {
            na_values: DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add an extra missing-value marker
    pub fn with_na_value(mut self, marker: &str) -> Self {
        self.na_values.push(marker.to_string());
        self
    }

    /// Load a dataset from a file
    pub fn load(&self, path: &Path) -> LoadResult<Dataset> {
        let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = self.read(file)?;

        tracing::info!(
            path = %path.display(),
            rows = dataset.row_count(),
            columns = dataset.columns().len(),
            "Loaded dataset"
        );

        Ok(dataset)
    }

    /// Load a dataset from a CSV string (useful for testing)
    pub fn load_str(&self, csv_data: &str) -> LoadResult<Dataset> {
        self.read(csv_data.as_bytes())
    }

    /// Load a dataset from any reader
    pub fn read<R: Read>(&self, reader: R) -> LoadResult<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(LoadError::EmptyHeader);
        }

        let names = dedupe_names(headers.iter());
        let mut cells: Vec<Vec<Value>> = vec![Vec::new(); names.len()];

        for result in reader.records() {
            let record = result?;

            if record.len() > names.len() {
                return Err(LoadError::Malformed {
                    line: record.position().map(|p| p.line()).unwrap_or(0),
                    expected: names.len(),
                    found: record.len(),
                });
            }

            for (idx, column) in cells.iter_mut().enumerate() {
                let value = record
                    .get(idx)
                    .map(|raw| self.parse_cell(raw))
                    .unwrap_or(Value::Null);
                column.push(value);
            }
        }

        let columns = names
            .into_iter()
            .zip(cells)
            .map(|(name, values)| Column::new(name, values))
            .collect();

        Ok(Dataset::from_columns(columns))
    }

    fn parse_cell(&self, raw: &str) -> Value {
        if self.na_values.iter().any(|na| na == raw) {
            return Value::Null;
        }

        if let Ok(v) = raw.parse::<i64>() {
            return Value::Int(v);
        }

        match raw.parse::<f64>() {
            Ok(v) => Value::Float(v),
            Err(_) => Value::Text(raw.to_string()),
        }
    }
}

/// Rename repeated header names to `name.1`, `name.2`, ...
fn dedupe_names<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::new();

    for header in headers {
        let mut name = header.to_string();
        while let Some(count) = seen.get_mut(&name) {
            *count += 1;
            name = format!("{}.{}", header, count);
        }
        seen.insert(name.clone(), 0);
        names.push(name);
    }

    names
}

/// Load a dataset with the default loader
pub fn load(path: &Path) -> LoadResult<Dataset> {
    CsvLoader::new().load(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ColumnKind;
    use std::io::Write;

    const SAMPLE: &str = "id,gender,age,hypertension,avg_glucose_level,bmi,smoking_status,stroke
9046,Male,67,0,228.69,36.6,formerly smoked,1
51676,Female,61,0,202.21,N/A,never smoked,1
31112,Male,80,0,105.92,32.5,never smoked,1
60182,Female,49,0,171.23,34.4,smokes,0";

    #[test]
    fn test_load_str_types_columns() {
        let ds = CsvLoader::new().load_str(SAMPLE).unwrap();

        assert_eq!(ds.row_count(), 4);
        assert_eq!(ds.column("id").unwrap().kind, ColumnKind::Integer);
        assert_eq!(ds.column("gender").unwrap().kind, ColumnKind::Text);
        assert_eq!(ds.column("avg_glucose_level").unwrap().kind, ColumnKind::Float);
        assert_eq!(ds.column("stroke").unwrap().kind, ColumnKind::Integer);

        // "N/A" is a missing value, so bmi is a float column with a null
        let bmi = ds.column("bmi").unwrap();
        assert_eq!(bmi.kind, ColumnKind::Float);
        assert_eq!(bmi.values[1], Value::Null);
    }

    #[test]
    fn test_numeric_columns_in_file_order() {
        let ds = CsvLoader::new().load_str(SAMPLE).unwrap();
        let names: Vec<&str> = ds.numeric_columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["id", "age", "hypertension", "avg_glucose_level", "bmi", "stroke"]
        );
    }

    #[test]
    fn test_short_records_are_padded() {
        let ds = CsvLoader::new().load_str("a,b\n1,2\n3").unwrap();
        assert_eq!(ds.column("b").unwrap().values, vec![Value::Float(2.0), Value::Null]);
    }

    #[test]
    fn test_long_records_fail() {
        let err = CsvLoader::new().load_str("a,b\n1,2,3").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Malformed {
                expected: 2,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_headers_are_renamed() {
        let ds = CsvLoader::new().load_str("age,age,age\n1,2,3").unwrap();
        assert_eq!(ds.column_names(), vec!["age", "age.1", "age.2"]);
    }

    #[test]
    fn test_custom_na_marker() {
        let ds = CsvLoader::new().with_na_value("?").load_str("bmi\n?\n21.5").unwrap();
        assert_eq!(ds.column("bmi").unwrap().values[0], Value::Null);
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stroke.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let ds = load(&path).unwrap();
        assert_eq!(ds.row_count(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/nonexistent/stroke.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
