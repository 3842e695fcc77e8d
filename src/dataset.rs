use ndarray::{s, Array1, Array2, ArrayView2};

use crate::error::{DescentError, Result};

/// Training examples split into a feature matrix and a target vector.
///
/// Row `i` of `features` pairs with `targets[i]`. A dataset always has at
/// least one row; it may have zero feature columns, in which case only the
/// bias parameter is fitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: Array2<f64>,
    targets: Array1<f64>,
}

impl Dataset {
    /// Builds a dataset from an `N × F` feature matrix and `N` targets.
    pub fn new(features: Array2<f64>, targets: Array1<f64>) -> Result<Self> {
        if features.nrows() == 0 {
            return Err(DescentError::EmptyDataset);
        }
        if targets.len() != features.nrows() {
            return Err(DescentError::ShapeMismatch {
                a: "targets",
                b: "feature rows",
                got: targets.len(),
                expected: features.nrows(),
            });
        }

        Ok(Dataset { features, targets })
    }

    /// Builds a dataset from an `N × (F+1)` table whose last column holds
    /// the target value of each row.
    pub fn from_table(table: ArrayView2<f64>) -> Result<Self> {
        if table.nrows() == 0 {
            return Err(DescentError::EmptyDataset);
        }
        let Some(label) = table.ncols().checked_sub(1) else {
            return Err(DescentError::MissingTarget);
        };

        let features = table.slice(s![.., ..label]).to_owned();
        let targets = table.column(label).to_owned();
        Self::new(features, targets)
    }

    /// Same as [`Dataset::from_table`] for row-major nested data.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let first = rows.first().ok_or(DescentError::EmptyDataset)?;
        let ncols = first.as_ref().len();

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != ncols {
                return Err(DescentError::RaggedRow {
                    row,
                    got: values.len(),
                    expected: ncols,
                });
            }
        }

        let table = Array2::from_shape_fn((rows.len(), ncols), |(i, j)| rows[i].as_ref()[j]);
        Self::from_table(table.view())
    }

    pub fn n_rows(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Length of the parameter vector: one weight per feature plus the bias.
    pub fn n_params(&self) -> usize {
        self.n_features() + 1
    }

    pub fn features(&self) -> &Array2<f64> {
        &self.features
    }

    pub fn targets(&self) -> &Array1<f64> {
        &self.targets
    }

    /// Feature row `row` with a leading `1.0` paired with the bias weight.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.n_rows()`.
    pub fn augmented(&self, row: usize) -> Array1<f64> {
        let mut x = Array1::ones(self.n_params());
        x.slice_mut(s![1..]).assign(&self.features.row(row));
        x
    }
}

impl TryFrom<Array2<f64>> for Dataset {
    type Error = DescentError;

    fn try_from(table: Array2<f64>) -> Result<Self> {
        Dataset::from_table(table.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_augmented_prepends_bias_input() {
        let dataset = Dataset::from_rows(&[[2.0, 3.0, 10.0], [4.0, 5.0, 20.0]]).unwrap();

        assert_eq!(dataset.augmented(0), array![1.0, 2.0, 3.0]);
        assert_eq!(dataset.augmented(1), array![1.0, 4.0, 5.0]);
    }

    #[test]
    fn test_augmented_without_features() {
        let dataset = Dataset::from_rows(&[[7.0]]).unwrap();

        assert_eq!(dataset.n_features(), 0);
        assert_eq!(dataset.augmented(0), array![1.0]);
    }
}
