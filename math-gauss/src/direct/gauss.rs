//! Gaussian elimination: forward elimination followed by back-substitution

use super::eliminate::eliminate_traced;
use super::substitute::{Solution, back_substitute_into};
use crate::Result;
use crate::config::GaussConfig;
use crate::trace::{NoTrace, Tracer};
use crate::traits::GaussScalar;
use ndarray::Array2;

/// Reduce `a` in place and, for an augmented matrix, solve for the unknowns
///
/// Returns `Ok(None)` for a plain matrix (no substitution step runs). The
/// matrix is left in row-echelon form either way. Use [`back_substitute_into`]
/// directly to inspect the partial solution of an inconsistent system.
pub fn solve<T: GaussScalar>(
    a: &mut Array2<T>,
    config: &GaussConfig,
) -> Result<Option<Solution<T>>> {
    solve_traced(a, config, &mut NoTrace)
}

/// [`solve`] reporting every checkpoint to `tracer`
pub fn solve_traced<T: GaussScalar>(
    a: &mut Array2<T>,
    config: &GaussConfig,
    tracer: &mut dyn Tracer<T>,
) -> Result<Option<Solution<T>>> {
    eliminate_traced(a, config, tracer)?;

    if !config.augmented {
        return Ok(None);
    }

    let mut solution = Solution::new(a.ncols() - 1);
    back_substitute_into(&*a, &mut solution, config, tracer)?;
    Ok(Some(solution))
}
