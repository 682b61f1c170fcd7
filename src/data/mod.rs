//! Display-only sample data for the Data tab.
//!
//! The people table comes from a CSV file (configurable path, embedded
//! sample as fallback). The numeric array and chart series are generated
//! once at startup; nothing here is recomputed per frame.

use crate::config::model::DataConfig;
use rand::RngExt;
use std::path::Path;
use thiserror::Error;

const EMBEDDED_PEOPLE: &str = include_str!("people.csv");

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("csv has no header row")]
    Empty,
    #[error("row {line} has {got} fields, expected {expected}")]
    RaggedRow {
        line: usize,
        got: usize,
        expected: usize,
    },
}

/// A header row plus data rows, all strings. Purely for display.
#[derive(Debug, Clone)]
pub struct PeopleTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Everything the Data tab shows.
pub struct GalleryData {
    pub people: PeopleTable,
    pub people_source: String,
    pub array: Vec<Vec<f64>>,
    pub series: Vec<(f64, f64)>,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
    pub up: bool,
}

impl GalleryData {
    /// Load the people table and generate the random samples. Data problems
    /// never fail startup: a bad CSV falls back to the embedded sample.
    pub fn load(cfg: &DataConfig) -> Self {
        let (people, people_source) = match &cfg.csv_path {
            Some(path) => match load_people_table(path) {
                Ok(table) => (table, path.display().to_string()),
                Err(e) => {
                    tracing::warn!("csv load failed, using embedded sample: {}", e);
                    (embedded_people(), "embedded sample".to_string())
                }
            },
            None => (embedded_people(), "embedded sample".to_string()),
        };

        Self {
            people,
            people_source,
            array: random_array(cfg.random_rows, cfg.random_cols),
            series: random_series(cfg.chart_points),
            metrics: sample_metrics(),
        }
    }
}

fn embedded_people() -> PeopleTable {
    // The embedded sample is checked by tests, so this cannot fail.
    parse_table(EMBEDDED_PEOPLE).expect("embedded people.csv is well-formed")
}

pub fn load_people_table(path: &Path) -> Result<PeopleTable, DataError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_table(&text)
}

/// Parse a comma-separated table: first line is the header, every row must
/// match its width. No quoting support; the data is display-only.
fn parse_table(text: &str) -> Result<PeopleTable, DataError> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let header_line = lines.next().ok_or(DataError::Empty)?;
    let headers: Vec<String> = header_line.split(',').map(|s| s.trim().to_string()).collect();

    let mut rows = Vec::new();
    for (i, line) in lines.enumerate() {
        let fields: Vec<String> = line.split(',').map(|s| s.trim().to_string()).collect();
        if fields.len() != headers.len() {
            return Err(DataError::RaggedRow {
                line: i + 2,
                got: fields.len(),
                expected: headers.len(),
            });
        }
        rows.push(fields);
    }
    Ok(PeopleTable { headers, rows })
}

/// Roughly bell-shaped values around 0 (sum of three uniforms, centered).
fn random_array(rows: usize, cols: usize) -> Vec<Vec<f64>> {
    let mut rng = rand::rng();
    (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    let sum: f64 = (0..3).map(|_| rng.random_range(-1.0..1.0)).sum();
                    sum / 1.5
                })
                .collect()
        })
        .collect()
}

fn random_series(points: usize) -> Vec<(f64, f64)> {
    let mut rng = rand::rng();
    let mut y = 0.0f64;
    (0..points)
        .map(|x| {
            y += rng.random_range(-1.0..1.0);
            (x as f64, y)
        })
        .collect()
}

fn sample_metrics() -> Vec<Metric> {
    vec![
        Metric {
            label: "Revenue",
            value: "$10K",
            delta: "+5%",
            up: true,
        },
        Metric {
            label: "Users",
            value: "1,245",
            delta: "+56",
            up: true,
        },
        Metric {
            label: "Churn",
            value: "2.3%",
            delta: "-0.4%",
            up: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_sample_parses() {
        let table = embedded_people();
        assert_eq!(table.headers, vec!["name", "role", "city", "age"]);
        assert!(!table.rows.is_empty());
        for row in &table.rows {
            assert_eq!(row.len(), table.headers.len());
        }
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let err = parse_table("a,b\n1,2\n3").unwrap_err();
        match err {
            DataError::RaggedRow { line, got, expected } => {
                assert_eq!(line, 3);
                assert_eq!(got, 1);
                assert_eq!(expected, 2);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(matches!(parse_table(""), Err(DataError::Empty)));
        assert!(matches!(parse_table("\n  \n"), Err(DataError::Empty)));
    }

    #[test]
    fn test_parse_trims_fields_and_skips_blank_lines() {
        let table = parse_table("x , y\n 1, 2\n\n3 ,4\n").unwrap();
        assert_eq!(table.headers, vec!["x", "y"]);
        assert_eq!(table.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn test_random_array_shape() {
        let arr = random_array(5, 3);
        assert_eq!(arr.len(), 5);
        assert!(arr.iter().all(|row| row.len() == 3));
        // Sum of three uniforms over [-1, 1) scaled by 1/1.5 stays in [-2, 2].
        for v in arr.iter().flatten() {
            assert!(*v >= -2.0 && *v <= 2.0);
        }
    }

    #[test]
    fn test_random_series_x_axis() {
        let series = random_series(10);
        assert_eq!(series.len(), 10);
        for (i, (x, _)) in series.iter().enumerate() {
            assert_eq!(*x, i as f64);
        }
    }

    #[test]
    fn test_load_falls_back_on_missing_file() {
        let cfg = DataConfig {
            csv_path: Some("/nonexistent/definitely_missing.csv".into()),
            ..DataConfig::default()
        };
        let data = GalleryData::load(&cfg);
        assert_eq!(data.people_source, "embedded sample");
        assert_eq!(data.people.headers.len(), 4);
    }
}
