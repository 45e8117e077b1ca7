use std::path::Path;

use csv::ReaderBuilder;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use tracing::warn;

use crate::error::{Error, Result};

/// Min-max scale every column of `matrix` to `[0, 1]`. Constant columns become 0.
pub fn normalize_matrix(matrix: ArrayView2<f64>) -> Array2<f64> {
    let mut normalized = matrix.to_owned();
    for mut column in normalized.axis_iter_mut(Axis(1)) {
        let (min, max) = min_max(column.view());
        if max != min {
            column.mapv_inplace(|v| (v - min) / (max - min));
        } else {
            column.fill(0.0);
        }
    }
    normalized
}

/// Scale one row with the column ranges of `reference`, the way [`normalize_matrix`] scales the
/// rows of `reference` itself.
pub fn normalize_input(input: ArrayView1<f64>, reference: ArrayView2<f64>) -> Result<Array1<f64>> {
    if input.len() != reference.ncols() {
        return Err(Error::DimensionMismatch {
            layer: "normalization reference",
            expected: reference.ncols(),
            actual: input.len(),
        });
    }
    Ok(input
        .iter()
        .zip(reference.axis_iter(Axis(1)))
        .map(|(&v, column)| {
            let (min, max) = min_max(column);
            if max != min {
                (v - min) / (max - min)
            } else {
                0.0
            }
        })
        .collect())
}

fn min_max(column: ArrayView1<f64>) -> (f64, f64) {
    column.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
        (min.min(v), max.max(v))
    })
}

/// Read an all-numeric CSV file into a matrix with one row per record.
/// Records with a cell that is not a number are skipped.
pub fn load_csv(path: impl AsRef<Path>, has_headers: bool) -> Result<Array2<f64>> {
    let (features, _) = read_table(path.as_ref(), has_headers, None)?;
    Ok(features)
}

/// Read a CSV file whose `label_column` holds a class name and every other column a number.
/// Returns the numeric columns as a matrix and the labels in row order.
pub fn load_labeled_csv(
    path: impl AsRef<Path>,
    has_headers: bool,
    label_column: usize,
) -> Result<(Array2<f64>, Vec<String>)> {
    read_table(path.as_ref(), has_headers, Some(label_column))
}

fn read_table(
    path: &Path,
    has_headers: bool,
    label_column: Option<usize>,
) -> Result<(Array2<f64>, Vec<String>)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut n_columns = None;
    let mut values = Vec::new();
    let mut labels = Vec::new();
    let mut n_rows = 0;
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let expected = *n_columns.get_or_insert(record.len());
        if let Some(column) = label_column.filter(|&column| column >= expected) {
            return Err(Error::LabelColumnOutOfRange {
                column,
                n_columns: expected,
            });
        }
        if record.len() != expected {
            return Err(Error::RaggedRow {
                row,
                expected,
                actual: record.len(),
            });
        }

        let mut label = None;
        let mut features = Vec::with_capacity(record.len());
        let mut parsed = true;
        for (column, cell) in record.iter().enumerate() {
            if Some(column) == label_column {
                label = Some(cell.to_string());
                continue;
            }
            match cell.parse::<f64>() {
                Ok(v) => features.push(v),
                Err(_) => {
                    parsed = false;
                    break;
                }
            }
        }
        if !parsed {
            warn!(row, path = %path.display(), "skipping row with a non-numeric cell");
            continue;
        }

        values.extend(features);
        labels.extend(label);
        n_rows += 1;
    }

    let n_features = match (n_columns, label_column) {
        (Some(n), Some(_)) => n - 1,
        (Some(n), None) => n,
        (None, _) => 0,
    };
    let features = Array2::from_shape_vec((n_rows, n_features), values)?;
    Ok((features, labels))
}
