use ndarray::{Array2, ArrayView2, Axis};
use ndarray_rand::rand::{seq::SliceRandom, Rng};

use crate::error::{Error, Result};

type Split = (Array2<f64>, Array2<f64>, Array2<f64>, Array2<f64>);

/// Split dataset into train and test data.
/// `test_ratio` is a ratio of the number of test data to the whole dataset.
/// Rows are shuffled with `rng` before splitting; `x` and `y` stay paired.
pub fn train_test_split<R: Rng + ?Sized>(
    x: ArrayView2<f64>,
    y: ArrayView2<f64>,
    test_ratio: f64,
    rng: &mut R,
) -> Result<Split> {
    if x.nrows() != y.nrows() {
        return Err(Error::RowCountMismatch {
            inputs: x.nrows(),
            targets: y.nrows(),
        });
    }
    if !(0.0..=1.0).contains(&test_ratio) {
        return Err(Error::InvalidRatio(test_ratio));
    }

    let mut indices = (0..x.nrows()).collect::<Vec<_>>();
    indices.shuffle(rng);
    let n_trains = (x.nrows() as f64 * (1.0 - test_ratio)) as usize;
    let (train, test) = indices.split_at(n_trains);

    Ok((
        x.select(Axis(0), train),
        y.select(Axis(0), train),
        x.select(Axis(0), test),
        y.select(Axis(0), test),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::Array;
    use ndarray_rand::rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn split_keeps_pairs() {
        let x = Array::linspace(0.0, 9.0, 10).insert_axis(Axis(1));
        let y = &x * 2.0;
        let mut rng = StdRng::seed_from_u64(3);
        let (x_train, y_train, x_test, y_test) =
            train_test_split(x.view(), y.view(), 0.5, &mut rng).unwrap();

        assert_eq!(5, x_train.nrows());
        assert_eq!(5, x_test.nrows());
        let xs = x_train.iter().chain(x_test.iter());
        let ys = y_train.iter().chain(y_test.iter());
        for (x, y) in xs.zip(ys) {
            assert_eq!(*x * 2.0, *y);
        }

        let mut seen = x_train.iter().chain(x_test.iter()).copied().collect::<Vec<f64>>();
        seen.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(x.iter().copied().collect::<Vec<_>>(), seen);
    }

    #[test]
    fn split_rejects_bad_input() {
        let x = Array::linspace(0.0, 3.0, 4).insert_axis(Axis(1));
        let y = Array::linspace(0.0, 2.0, 3).insert_axis(Axis(1));
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            train_test_split(x.view(), y.view(), 0.5, &mut rng),
            Err(Error::RowCountMismatch {
                inputs: 4,
                targets: 3
            })
        ));
        assert!(matches!(
            train_test_split(x.view(), x.view(), 1.5, &mut rng),
            Err(Error::InvalidRatio(_))
        ));
    }
}
