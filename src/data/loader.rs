use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::Matrix;

/// Default field delimiter of the measurement files.
pub const DEFAULT_DELIMITER: u8 = b';';

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a measurement matrix from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.txt` – rows of semicolon-separated numeric fields
/// * `.json`         – array of arrays of numbers: `[[1, 2], [3, 4]]`
pub fn load_file(path: &Path) -> Result<Matrix> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" | "txt" => load_delimited(path, DEFAULT_DELIMITER),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Delimited loader
// ---------------------------------------------------------------------------

/// Parse a delimited text file into a matrix: one matrix row per line, one
/// cell per field.  There is no header row.
///
/// Fails on a missing/unreadable file, a non-numeric token, ragged rows
/// (the csv reader reports unequal record lengths) and empty input.
pub fn load_delimited(path: &Path, delimiter: u8) -> Result<Matrix> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("reading row {row_no}"))?;
        let row = record
            .iter()
            .enumerate()
            .map(|(col, tok)| {
                tok.parse::<f64>()
                    .with_context(|| format!("row {row_no}, field {col}: '{tok}' is not a number"))
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    Matrix::from_rows(rows).with_context(|| format!("building matrix from {}", path.display()))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema: a top-level array of equally long number arrays.
///
/// ```json
/// [
///   [21.0, 21.4, 22.1],
///   [21.2, 23.8, 22.5]
/// ]
/// ```
fn load_json(path: &Path) -> Result<Matrix> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let rows: Vec<Vec<f64>> = serde_json::from_str(&text).context("parsing JSON")?;
    Matrix::from_rows(rows).with_context(|| format!("building matrix from {}", path.display()))
}

// ---------------------------------------------------------------------------
// Delimited writer
// ---------------------------------------------------------------------------

/// Write a matrix as delimited text, one line per row.  Inverse of
/// [`load_delimited`]: loading the written file yields the same matrix.
pub fn write_delimited(path: &Path, matrix: &Matrix, delimiter: u8) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    for row in 0..matrix.rows() {
        let record: Vec<String> = (0..matrix.cols())
            .map(|col| matrix.get(row, col).to_string())
            .collect();
        writer.write_record(&record).context("writing row")?;
    }
    writer.flush().context("flushing output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};
    use std::io::{BufWriter, Write};
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn make_temp_dir() -> PathBuf {
        let mut dir = std::env::temp_dir();
        let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        dir.push(format!("heatview_test_{}_{}", std::process::id(), id));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_file(path: &Path, contents: &str) {
        let mut f = BufWriter::new(File::create(path).unwrap());
        f.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn loads_semicolon_matrix() {
        let dir = make_temp_dir();
        let path = dir.join("measure.csv");
        write_file(&path, "1;2;3\n4;5;6\n");

        let m = load_file(&path).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.values(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn loads_single_cell_file() {
        let dir = make_temp_dir();
        let path = dir.join("one.csv");
        write_file(&path, "42.5\n");

        let m = load_file(&path).unwrap();
        assert_eq!(m.rows(), 1);
        assert_eq!(m.cols(), 1);
        assert_eq!(m.get(0, 0), 42.5);
    }

    #[test]
    fn trims_whitespace_around_fields() {
        let dir = make_temp_dir();
        let path = dir.join("spaced.csv");
        write_file(&path, "1.5 ; -2.25\n 3.0;4.0\n");

        let m = load_file(&path).unwrap();
        assert_eq!(m.values(), &[1.5, -2.25, 3.0, 4.0]);
    }

    #[test]
    fn custom_delimiter() {
        let dir = make_temp_dir();
        let path = dir.join("comma.csv");
        write_file(&path, "1,2\n3,4\n");

        let m = load_delimited(&path, b',').unwrap();
        assert_eq!(m.values(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn empty_file_is_an_error() {
        let dir = make_temp_dir();
        let path = dir.join("empty.csv");
        write_file(&path, "");

        assert!(load_file(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = make_temp_dir();
        assert!(load_file(&dir.join("nope.csv")).is_err());
    }

    #[test]
    fn non_numeric_token_is_an_error() {
        let dir = make_temp_dir();
        let path = dir.join("bad.csv");
        write_file(&path, "1;2\n3;oops\n");

        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("oops"));
    }

    #[test]
    fn ragged_rows_are_an_error() {
        let dir = make_temp_dir();
        let path = dir.join("ragged.csv");
        write_file(&path, "1;2;3\n4;5\n");

        assert!(load_file(&path).is_err());
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let dir = make_temp_dir();
        let path = dir.join("matrix.parquet");
        write_file(&path, "");

        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn json_array_of_arrays() {
        let dir = make_temp_dir();
        let path = dir.join("matrix.json");
        write_file(&path, "[[1.0, 2.0], [3.0, 4.0]]");

        let m = load_file(&path).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.values(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn json_ragged_rows_are_an_error() {
        let dir = make_temp_dir();
        let path = dir.join("ragged.json");
        write_file(&path, "[[1.0, 2.0], [3.0]]");

        assert!(load_file(&path).is_err());
    }

    #[test]
    fn write_then_load_round_trips() {
        let dir = make_temp_dir();
        let path = dir.join("roundtrip.csv");

        let original = Matrix::from_rows(vec![
            vec![20.5, 21.75, -3.125],
            vec![0.1, 1e-6, 1234.5678],
        ])
        .unwrap();

        write_delimited(&path, &original, DEFAULT_DELIMITER).unwrap();
        let loaded = load_delimited(&path, DEFAULT_DELIMITER).unwrap();

        assert_eq!(loaded.rows(), original.rows());
        assert_eq!(loaded.cols(), original.cols());
        for (a, b) in loaded.values().iter().zip(original.values()) {
            assert!((a - b).abs() < 1e-12, "{a} != {b}");
        }
    }
}
