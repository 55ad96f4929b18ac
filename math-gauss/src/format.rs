//! Printing helpers and flat-list parsing for command-line front ends

use crate::direct::Solution;
use crate::traits::GaussScalar;
use crate::{GaussError, Result};
use ndarray::{Array2, ArrayBase, Data, Ix2};
use std::fmt::Write as FmtWrite;

/// Format a matrix, one `[i]: ` prefixed line per row
pub fn format_matrix<T, S>(a: &ArrayBase<S, Ix2>, decimals: usize) -> String
where
    T: GaussScalar,
    S: Data<Elem = T>,
{
    let mut out = String::new();
    for (i, row) in a.rows().into_iter().enumerate() {
        let _ = write!(out, "[{}]: ", i);
        for value in row.iter() {
            let _ = write!(out, "{:8.*} ", decimals, value.to_f64_lossy());
        }
        out.push('\n');
    }
    out
}

/// Format a solution vector, one `x[i] = ` line per unknown
///
/// Unknowns that were never assigned are printed as `unsolved`.
pub fn format_solution<T: GaussScalar>(solution: &Solution<T>, decimals: usize) -> String {
    let mut out = String::new();
    for (i, value) in solution.values.iter().enumerate() {
        if solution.is_solved(i) {
            let _ = writeln!(out, "x[{}] = {:8.*}", i, decimals, value.to_f64_lossy());
        } else {
            let _ = writeln!(out, "x[{}] = unsolved", i);
        }
    }
    out
}

/// Build a matrix with `cols` columns from a flat row-major list
pub fn matrix_from_row_major<T: GaussScalar>(cols: usize, values: &[T]) -> Result<Array2<T>> {
    if cols == 0 || values.is_empty() {
        return Err(GaussError::EmptyMatrix);
    }
    if values.len() % cols != 0 {
        return Err(GaussError::DimensionMismatch {
            expected: values.len().div_ceil(cols) * cols,
            got: values.len(),
        });
    }

    let rows = values.len() / cols;
    Array2::from_shape_vec((rows, cols), values.to_vec()).map_err(|_| {
        GaussError::DimensionMismatch {
            expected: rows * cols,
            got: values.len(),
        }
    })
}
