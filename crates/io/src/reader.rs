//! Series readers for CSV, JSON and plain-text inputs.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::IoError;

/// Keys tried, in order, for a JSON array of objects when no column is given.
const RECORD_KEYS: &[&str] = &["value", "values", "data", "y"];

/// Keys tried, in order, for a JSON object holding arrays when no column is given.
const ARRAY_KEYS: &[&str] = &["data", "values", "series", "y"];

// ---------------------------------------------------------------------------
// SeriesFormat
// ---------------------------------------------------------------------------

/// Input file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeriesFormat {
    /// Pick from the file extension: `.csv`, `.json`, anything in
    /// `.txt` / `.dat` / no extension is plain text.
    #[default]
    Auto,
    /// Comma-separated with a header row.
    Csv,
    /// A numeric array, an array of records, or an object of arrays.
    Json,
    /// Numbers separated by newlines, commas or whitespace; `#` starts a comment line.
    Text,
}

impl SeriesFormat {
    /// Resolves [`SeriesFormat::Auto`] against a path. Other variants pass through.
    pub fn resolve(self, path: &Path) -> Result<SeriesFormat, IoError> {
        if self != SeriesFormat::Auto {
            return Ok(self);
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match ext.as_deref() {
            Some("csv") => Ok(SeriesFormat::Csv),
            Some("json") => Ok(SeriesFormat::Json),
            Some("txt") | Some("dat") | None => Ok(SeriesFormat::Text),
            Some(_) => Err(IoError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading series from disk.
///
/// Columns are matched by header (CSV) or key (JSON) first, then by
/// 0-based index. With no columns selected the first CSV column or the
/// first conventional JSON key is read.
#[derive(Debug, Clone, Default)]
pub struct ReaderConfig {
    format: SeriesFormat,
    columns: Vec<String>,
}

impl ReaderConfig {
    /// Sets the input format.
    pub fn with_format(mut self, format: SeriesFormat) -> Self {
        self.format = format;
        self
    }

    /// Adds one column to read.
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Replaces the selected columns.
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the configured format.
    pub fn format(&self) -> SeriesFormat {
        self.format
    }

    /// Returns the selected columns.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

// ---------------------------------------------------------------------------
// NamedSeries
// ---------------------------------------------------------------------------

/// A series of observations with the column name it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSeries {
    /// Column header, JSON key, or file stem for plain text.
    pub name: String,
    /// Observations in file order.
    pub values: Vec<f64>,
}

impl NamedSeries {
    /// Creates a named series.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Readers
// ---------------------------------------------------------------------------

/// Reads the first selected series from `path`.
pub fn read_series(path: &Path, config: &ReaderConfig) -> Result<NamedSeries, IoError> {
    read_columns(path, config)?
        .into_iter()
        .next()
        .ok_or_else(|| IoError::EmptySeries {
            name: path.display().to_string(),
        })
}

/// Reads every selected series from `path`, in selection order.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::FileNotFound`] | `path` does not exist |
/// | [`IoError::UnsupportedFormat`] | unknown extension with [`SeriesFormat::Auto`] |
/// | [`IoError::MissingColumn`] | a selected column is absent |
/// | [`IoError::InvalidValue`] | a selected cell is not a number |
/// | [`IoError::EmptySeries`] | a selected column has no rows |
/// | [`IoError::Csv`] / [`IoError::Json`] | malformed input |
pub fn read_columns(path: &Path, config: &ReaderConfig) -> Result<Vec<NamedSeries>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let format = config.format.resolve(path)?;
    debug!(path = %path.display(), ?format, columns = ?config.columns, "reading series");

    let series = match format {
        SeriesFormat::Csv => read_csv(path, &config.columns)?,
        SeriesFormat::Json => read_json(path, &config.columns)?,
        SeriesFormat::Text | SeriesFormat::Auto => vec![read_text(path)?],
    };

    if let Some(empty) = series.iter().find(|s| s.is_empty()) {
        return Err(IoError::EmptySeries {
            name: empty.name.clone(),
        });
    }
    debug!(
        n_series = series.len(),
        n_values = series.first().map_or(0, NamedSeries::len),
        "series loaded"
    );
    Ok(series)
}

fn read_csv(path: &Path, columns: &[String]) -> Result<Vec<NamedSeries>, IoError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let indices = resolve_columns(&headers, columns)?;
    let mut series: Vec<NamedSeries> = indices
        .iter()
        .map(|&i| NamedSeries::new(headers[i].clone(), Vec::new()))
        .collect();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |pos| pos.line());
        for (s, &idx) in series.iter_mut().zip(&indices) {
            let raw = record.get(idx).unwrap_or("");
            s.values.push(parse_value(raw, &s.name, line)?);
        }
    }
    Ok(series)
}

/// Maps requested names (or indices) to header positions. Empty selects column 0.
fn resolve_columns(headers: &[String], columns: &[String]) -> Result<Vec<usize>, IoError> {
    let missing = |name: &str| IoError::MissingColumn {
        name: name.to_string(),
        available: headers.to_vec(),
    };
    if columns.is_empty() {
        return if headers.is_empty() {
            Err(missing("0"))
        } else {
            Ok(vec![0])
        };
    }
    columns
        .iter()
        .map(|col| {
            headers
                .iter()
                .position(|h| h == col)
                .or_else(|| col.parse::<usize>().ok().filter(|&i| i < headers.len()))
                .ok_or_else(|| missing(col))
        })
        .collect()
}

fn read_json(path: &Path, columns: &[String]) -> Result<Vec<NamedSeries>, IoError> {
    let text = read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;

    match value {
        Value::Array(items) if items.iter().all(Value::is_number) => {
            let values = json_numbers(items.iter(), "value")?;
            Ok(vec![NamedSeries::new("value", values)])
        }
        Value::Array(items) => {
            let available: Vec<String> = items
                .first()
                .and_then(Value::as_object)
                .map(|obj| obj.keys().cloned().collect())
                .unwrap_or_default();
            let keys = select_keys(columns, &available, RECORD_KEYS)?;
            keys.into_iter()
                .map(|key| {
                    let cells = items.iter().map(|item| item.get(&key).unwrap_or(&Value::Null));
                    let values = json_numbers(cells, &key)?;
                    Ok(NamedSeries::new(key, values))
                })
                .collect()
        }
        Value::Object(map) => {
            let available: Vec<String> = map.keys().cloned().collect();
            let keys = select_keys(columns, &available, ARRAY_KEYS)?;
            keys.into_iter()
                .map(|key| {
                    let items = map
                        .get(&key)
                        .and_then(Value::as_array)
                        .ok_or_else(|| IoError::Json {
                            reason: format!("key '{key}' is not an array"),
                        })?;
                    let values = json_numbers(items.iter(), &key)?;
                    Ok(NamedSeries::new(key, values))
                })
                .collect()
        }
        _ => Err(IoError::Json {
            reason: "expected an array or an object at the top level".to_string(),
        }),
    }
}

/// Picks the requested keys, or the first conventional key present.
fn select_keys(
    columns: &[String],
    available: &[String],
    conventional: &[&str],
) -> Result<Vec<String>, IoError> {
    let missing = |name: &str| IoError::MissingColumn {
        name: name.to_string(),
        available: available.to_vec(),
    };
    if columns.is_empty() {
        return conventional
            .iter()
            .find(|k| available.iter().any(|a| a == *k))
            .map(|k| vec![k.to_string()])
            .ok_or_else(|| missing(&conventional.join("|")));
    }
    columns
        .iter()
        .map(|c| {
            if available.contains(c) {
                Ok(c.clone())
            } else {
                Err(missing(c))
            }
        })
        .collect()
}

fn json_numbers<'a>(
    items: impl Iterator<Item = &'a Value>,
    column: &str,
) -> Result<Vec<f64>, IoError> {
    items
        .enumerate()
        .map(|(i, v)| {
            v.as_f64().ok_or_else(|| IoError::InvalidValue {
                column: column.to_string(),
                row: i as u64 + 1,
                value: v.to_string(),
            })
        })
        .collect()
}

fn read_text(path: &Path) -> Result<NamedSeries, IoError> {
    let text = read_to_string(path)?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("value")
        .to_string();

    let mut values = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let tokens = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty());
        for token in tokens {
            values.push(parse_value(token, &name, i as u64 + 1)?);
        }
    }
    Ok(NamedSeries::new(name, values))
}

fn read_to_string(path: &Path) -> Result<String, IoError> {
    std::fs::read_to_string(path).map_err(|e| IoError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn parse_value(raw: &str, column: &str, row: u64) -> Result<f64, IoError> {
    raw.trim().parse::<f64>().map_err(|_| IoError::InvalidValue {
        column: column.to_string(),
        row,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn auto_format_from_extension() {
        let auto = SeriesFormat::Auto;
        assert_eq!(auto.resolve(Path::new("a.csv")).unwrap(), SeriesFormat::Csv);
        assert_eq!(auto.resolve(Path::new("a.JSON")).unwrap(), SeriesFormat::Json);
        assert_eq!(auto.resolve(Path::new("a.txt")).unwrap(), SeriesFormat::Text);
        assert_eq!(auto.resolve(Path::new("series")).unwrap(), SeriesFormat::Text);
        assert!(matches!(
            auto.resolve(Path::new("a.xlsx")),
            Err(IoError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn explicit_format_passes_through() {
        let path = PathBuf::from("prices.xlsx");
        assert_eq!(SeriesFormat::Csv.resolve(&path).unwrap(), SeriesFormat::Csv);
    }

    #[test]
    fn config_builder() {
        let cfg = ReaderConfig::default()
            .with_format(SeriesFormat::Json)
            .with_column("a")
            .with_column("b");
        assert_eq!(cfg.format(), SeriesFormat::Json);
        assert_eq!(cfg.columns(), &["a".to_string(), "b".to_string()]);

        let cfg = cfg.with_columns(["c"]);
        assert_eq!(cfg.columns(), &["c".to_string()]);
    }

    #[test]
    fn resolve_columns_by_name_then_index() {
        let headers = vec!["date".to_string(), "price".to_string(), "0".to_string()];
        assert_eq!(resolve_columns(&headers, &[]).unwrap(), vec![0]);
        assert_eq!(
            resolve_columns(&headers, &["price".to_string()]).unwrap(),
            vec![1]
        );
        // header "0" matches by name before index 0
        assert_eq!(resolve_columns(&headers, &["0".to_string()]).unwrap(), vec![2]);
        assert_eq!(resolve_columns(&headers, &["1".to_string()]).unwrap(), vec![1]);
        assert!(matches!(
            resolve_columns(&headers, &["9".to_string()]),
            Err(IoError::MissingColumn { .. })
        ));
    }

    #[test]
    fn select_keys_prefers_conventional_order() {
        let available = vec!["values".to_string(), "y".to_string()];
        assert_eq!(
            select_keys(&[], &available, ARRAY_KEYS).unwrap(),
            vec!["values".to_string()]
        );
        assert!(matches!(
            select_keys(&["z".to_string()], &available, ARRAY_KEYS),
            Err(IoError::MissingColumn { .. })
        ));
    }

    #[test]
    fn parse_value_reports_row() {
        let err = parse_value("abc", "price", 4).unwrap_err();
        assert!(matches!(err, IoError::InvalidValue { row: 4, .. }));
        assert_eq!(parse_value(" 2.5 ", "price", 1).unwrap(), 2.5);
    }

    #[test]
    fn named_series_len() {
        let s = NamedSeries::new("x", vec![1.0, 2.0]);
        assert_eq!(s.len(), 2);
        assert!(!s.is_empty());
        assert!(NamedSeries::new("x", vec![]).is_empty());
    }
}
