//! Direct solvers for linear systems
//!
//! This module provides the Gaussian elimination pipeline and a small LU variant:
//! - [`eliminate`]: forward elimination to row-echelon form
//! - [`back_substitute`]: back-substitution with free-variable handling
//! - [`solve`]: elimination followed by substitution
//! - [`crout_solve`]: Crout LU decomposition (no pivoting)

mod crout;
mod eliminate;
mod gauss;
mod pivot;
mod row_ops;
mod substitute;

pub use crout::{CroutFactorization, crout_decompose, crout_solve, matmul};
pub use eliminate::{eliminate, eliminate_traced};
pub use gauss::{solve, solve_traced};
pub use pivot::find_pivot_row;
pub use row_ops::swap_rows;
pub use substitute::{Solution, back_substitute, back_substitute_into};
