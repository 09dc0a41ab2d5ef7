//! Multi-feature linear regression via normal equations

use crate::{MathError, Result};

/// A linear model `y = b0 + b1*x1 + ... + bk*xk` fitted by least squares.
///
/// The normal equations are assembled and solved directly; with the handful
/// of features the demand tiers use, the system stays tiny.
#[derive(Debug, Clone)]
pub struct LinearModel {
    // coefficients[0] is the intercept
    coefficients: Vec<f64>,
}

impl LinearModel {
    /// Fit the model to feature rows and targets
    pub fn fit(rows: &[Vec<f64>], ys: &[f64]) -> Result<Self> {
        if rows.len() != ys.len() {
            return Err(MathError::InvalidInput(format!(
                "row and target lengths differ: {} vs {}",
                rows.len(),
                ys.len()
            )));
        }

        if rows.len() < 2 {
            return Err(MathError::InsufficientData(
                "Not enough data for a regression fit. Need at least 2 rows.".to_string(),
            ));
        }

        let width = rows[0].len();
        if width == 0 {
            return Err(MathError::InvalidInput(
                "Feature rows must not be empty".to_string(),
            ));
        }
        if rows.iter().any(|row| row.len() != width) {
            return Err(MathError::InvalidInput(
                "All feature rows must have the same width".to_string(),
            ));
        }

        // Design matrix gets a leading 1.0 column for the intercept
        let k = width + 1;
        let mut xtx = vec![vec![0.0; k]; k];
        let mut xty = vec![0.0; k];

        for (row, &y) in rows.iter().zip(ys.iter()) {
            let mut design = Vec::with_capacity(k);
            design.push(1.0);
            design.extend_from_slice(row);

            for i in 0..k {
                xty[i] += design[i] * y;
                for j in 0..k {
                    xtx[i][j] += design[i] * design[j];
                }
            }
        }

        let coefficients = solve(xtx, xty)?;
        Ok(Self { coefficients })
    }

    /// Predicted value for one feature row
    pub fn predict(&self, features: &[f64]) -> Result<f64> {
        if features.len() + 1 != self.coefficients.len() {
            return Err(MathError::InvalidInput(format!(
                "expected {} features, got {}",
                self.coefficients.len() - 1,
                features.len()
            )));
        }

        let mut value = self.coefficients[0];
        for (coefficient, &feature) in self.coefficients[1..].iter().zip(features.iter()) {
            value += coefficient * feature;
        }
        Ok(value)
    }

    /// Fitted coefficients, intercept first
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

/// Gaussian elimination with partial pivoting
fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>> {
    let n = b.len();

    for column in 0..n {
        // Pick the row with the largest pivot
        let mut pivot_row = column;
        for row in (column + 1)..n {
            if a[row][column].abs() > a[pivot_row][column].abs() {
                pivot_row = row;
            }
        }

        if a[pivot_row][column].abs() < 1e-10 {
            return Err(MathError::CalculationError(
                "Normal equations are singular; features are collinear or constant".to_string(),
            ));
        }

        a.swap(column, pivot_row);
        b.swap(column, pivot_row);

        for row in (column + 1)..n {
            let factor = a[row][column] / a[column][column];
            for col in column..n {
                a[row][col] -= factor * a[column][col];
            }
            b[row] -= factor * b[column];
        }
    }

    // Back substitution
    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let mut sum = b[row];
        for col in (row + 1)..n {
            sum -= a[row][col] * x[col];
        }
        x[row] = sum / a[row][row];
    }

    Ok(x)
}
