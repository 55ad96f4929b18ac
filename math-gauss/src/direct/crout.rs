//! Crout LU decomposition
//!
//! Factors a square matrix as `A = L U` with `L` lower triangular and `U`
//! unit upper triangular. No pivoting is performed; the rounding discipline
//! matches forward elimination (each product, each running sum and each
//! stored entry is rounded to the configured precision).

use crate::precision::Precision;
use crate::traits::GaussScalar;
use crate::{GaussError, Result};
use ndarray::{Array1, Array2};

/// Crout factorization result
#[derive(Debug, Clone)]
pub struct CroutFactorization<T> {
    /// Lower triangular factor
    pub l: Array2<T>,
    /// Unit upper triangular factor
    pub u: Array2<T>,
    /// Matrix dimension
    pub n: usize,
}

impl<T: GaussScalar> CroutFactorization<T> {
    /// Solve Ax = b using the pre-computed factors
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        if b.len() != self.n {
            return Err(GaussError::DimensionMismatch {
                expected: self.n,
                got: b.len(),
            });
        }

        // Forward substitution: Ly = b
        let mut y = Array1::from_elem(self.n, T::zero());
        for i in 0..self.n {
            let mut sum = T::zero();
            for k in 0..i {
                sum += self.l[[i, k]] * y[k];
            }
            y[i] = (b[i] - sum) / self.l[[i, i]];
        }

        // Backward substitution: Ux = y (unit diagonal)
        let mut x = Array1::from_elem(self.n, T::zero());
        for i in (0..self.n).rev() {
            let mut sum = T::zero();
            for k in (i + 1)..self.n {
                sum += self.u[[i, k]] * x[k];
            }
            x[i] = y[i] - sum;
        }

        Ok(x)
    }
}

/// Compute the Crout factorization of a square matrix
pub fn crout_decompose<T: GaussScalar>(
    a: &Array2<T>,
    precision: Precision,
) -> Result<CroutFactorization<T>> {
    let n = a.nrows();
    if n == 0 {
        return Err(GaussError::EmptyMatrix);
    }
    if n != a.ncols() {
        return Err(GaussError::DimensionMismatch {
            expected: n,
            got: a.ncols(),
        });
    }

    let mut l = Array2::from_elem((n, n), T::zero());
    let mut u = Array2::from_elem((n, n), T::zero());
    for i in 0..n {
        u[[i, i]] = T::one();
    }

    let dot = |l: &Array2<T>, u: &Array2<T>, row: usize, col: usize, len: usize| {
        let mut sum = T::zero();
        for k in 0..len {
            sum = precision.apply(sum + precision.apply(l[[row, k]] * u[[k, col]]));
        }
        sum
    };

    for i in 0..n {
        for j in 0..=i {
            let sum = dot(&l, &u, i, j, j);
            l[[i, j]] = precision.apply(a[[i, j]] - sum);
        }

        let diag = l[[i, i]];
        if diag.is_exact_zero() {
            return Err(GaussError::SingularMatrix { index: i });
        }

        for j in (i + 1)..n {
            let sum = dot(&l, &u, i, j, i);
            u[[i, j]] = precision.apply(precision.apply(a[[i, j]] - sum) / diag);
        }
    }

    log::debug!(
        "Crout decomposition: {}x{} matrix, precision = {}",
        n,
        n,
        precision
    );

    Ok(CroutFactorization { l, u, n })
}

/// Solve Ax = b using Crout decomposition
///
/// This is a convenience function that combines factorization and solve.
pub fn crout_solve<T: GaussScalar>(
    a: &Array2<T>,
    b: &Array1<T>,
    precision: Precision,
) -> Result<Array1<T>> {
    let factorization = crout_decompose(a, precision)?;
    factorization.solve(b)
}

/// Dense matrix product `A B`
pub fn matmul<T: GaussScalar>(a: &Array2<T>, b: &Array2<T>) -> Result<Array2<T>> {
    let n = a.ncols();
    let rows_b = b.nrows();
    if n != rows_b {
        return Err(GaussError::DimensionMismatch {
            expected: n,
            got: rows_b,
        });
    }

    Ok(a.dot(b))
}
