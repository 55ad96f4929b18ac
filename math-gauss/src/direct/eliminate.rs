//! Forward elimination to row-echelon form
//!
//! Every elementary operation is passed through the configured [`Precision`]:
//! the multiplier, each product and each difference are rounded before the
//! next dependent step reads them.
//!
//! [`Precision`]: crate::Precision

use super::pivot::find_pivot_row;
use super::row_ops::swap_rows;
use crate::config::GaussConfig;
use crate::trace::{NoTrace, SwapReason, TraceEvent, Tracer};
use crate::traits::GaussScalar;
use crate::{GaussError, Result};
use ndarray::Array2;

/// Reduce `a` to row-echelon form in place
///
/// A zero pivot with pivoting disabled is not an error: the division produces
/// non-finite multipliers and any consistency judgement is deferred to
/// back-substitution.
pub fn eliminate<T: GaussScalar>(a: &mut Array2<T>, config: &GaussConfig) -> Result<()> {
    eliminate_traced(a, config, &mut NoTrace)
}

/// [`eliminate`] reporting every checkpoint to `tracer`
pub fn eliminate_traced<T: GaussScalar>(
    a: &mut Array2<T>,
    config: &GaussConfig,
    tracer: &mut dyn Tracer<T>,
) -> Result<()> {
    let (m, n) = a.dim();
    if m == 0 || n == 0 {
        return Err(GaussError::EmptyMatrix);
    }

    let coeff_cols = if config.augmented { n - 1 } else { n };
    let num_pivots = (m - 1).min(coeff_cols.saturating_sub(1));
    let precision = config.precision;

    log::debug!(
        "Forward elimination: {}x{} matrix, {} pivots, pivoting = {}, precision = {}",
        m,
        n,
        num_pivots,
        config.pivoting,
        precision
    );

    for k in 0..num_pivots {
        if config.pivoting && a[[k, k]].is_exact_zero() {
            let r = find_pivot_row(&*a, k, k, config.pivot_search);
            if r != k {
                swap_rows(a, k, r);
                tracer.trace(&TraceEvent::PivotSwap {
                    column: k,
                    row_a: k,
                    row_b: r,
                    reason: SwapReason::ZeroPivot,
                });
            }
        }

        for i in (k + 1)..m {
            if config.pivoting && a[[k, k]].abs() < a[[i, k]].abs() {
                swap_rows(a, k, i);
                tracer.trace(&TraceEvent::PivotSwap {
                    column: k,
                    row_a: k,
                    row_b: i,
                    reason: SwapReason::LargerCandidate,
                });
            }

            let target = a[[i, k]];
            if target.is_exact_zero() {
                continue;
            }

            let multiplier = precision.apply(target / a[[k, k]]);
            // Set directly so no rounding residue is left below the pivot
            a[[i, k]] = T::zero();
            for j in (k + 1)..n {
                let product = precision.apply(a[[k, j]] * multiplier);
                a[[i, j]] = precision.apply(a[[i, j]] - product);
            }

            tracer.trace(&TraceEvent::RowEliminated {
                pivot_row: k,
                row: i,
                multiplier,
            });
        }

        tracer.trace(&TraceEvent::ColumnEliminated {
            column: k,
            matrix: a.view(),
        });
    }

    Ok(())
}
