use ndarray::ArrayView2;

use crate::error::{Error, Result};

/// Compute accuracy of the predicted labels `y_pred` to the correct labels `y_true`.
pub fn accuracy<Label>(y_true: &[Label], y_pred: &[Label]) -> f64
where
    Label: PartialEq,
{
    if y_true.is_empty() {
        return 0.0;
    }
    let n_corrects = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    n_corrects as f64 / y_true.len() as f64
}

/// Construct confusion matrix from `y_true` and `y_pred`.
/// An item in i-th row and j-th column is the number of predicted j-th label where a true label is
/// i-th one.
pub fn confusion_matrix<Label>(
    y_true: &[Label],
    y_pred: &[Label],
    label_kinds: &[Label],
) -> Vec<Vec<usize>>
where
    Label: PartialEq,
{
    label_kinds
        .iter()
        .map(|true_label| {
            label_kinds
                .iter()
                .map(|pred_label| {
                    y_true
                        .iter()
                        .zip(y_pred.iter())
                        .filter(|(t, p)| *t == true_label && *p == pred_label)
                        .count()
                })
                .collect()
        })
        .collect()
}

/// Mean of the squared element-wise differences. Both matrices must have the same shape.
pub fn mean_squared_error(y_true: ArrayView2<f64>, y_pred: ArrayView2<f64>) -> Result<f64> {
    if y_true.shape() != y_pred.shape() {
        return Err(Error::ShapeMismatch {
            expected: y_true.shape().to_vec(),
            actual: y_pred.shape().to_vec(),
        });
    }
    Ok((&y_true - &y_pred).mapv(|v| v.powi(2)).mean().unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::arr2;

    use super::*;

    #[test]
    fn test_accuracy() {
        let y_true = vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2];
        let y_pred = vec![0, 0, 0, 1, 0, 1, 1, 2, 0, 1, 1, 2];
        assert_relative_eq!(0.5, accuracy(&y_true, &y_pred))
    }

    #[test]
    fn test_confusion_matrix_on_string_label() {
        let y_true = vec![
            "ant", "ant", "ant", "cat", "cat", "cat", "dog", "dog", "dog",
        ];
        let y_pred = vec![
            "ant", "ant", "cat", "cat", "cat", "cat", "ant", "cat", "dog",
        ];
        assert_eq!(
            vec![vec![2, 1, 0], vec![0, 3, 0], vec![1, 1, 1]],
            confusion_matrix(&y_true, &y_pred, &["ant", "cat", "dog"])
        );
    }

    #[test]
    fn test_mean_squared_error() {
        let y_true = arr2(&[[1.0, 0.0], [0.0, 1.0]]);
        let y_pred = arr2(&[[0.5, 0.0], [0.0, 0.0]]);
        assert_relative_eq!(
            0.3125,
            mean_squared_error(y_true.view(), y_pred.view()).unwrap()
        );
    }

    #[test]
    fn mean_squared_error_shape_mismatch() {
        let y_true = arr2(&[[1.0, 0.0], [0.0, 1.0]]);
        let y_pred = arr2(&[[0.5, 0.0]]);
        assert!(matches!(
            mean_squared_error(y_true.view(), y_pred.view()),
            Err(Error::ShapeMismatch { .. })
        ));
    }
}
