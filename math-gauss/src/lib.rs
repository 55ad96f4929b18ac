//! Gaussian elimination under a simulated finite-precision arithmetic model
//!
//! This crate solves systems of linear equations by forward elimination and
//! back-substitution on a dense augmented matrix, with optional partial
//! pivoting and a configurable number of significant decimal digits applied
//! to every elementary operation.
//!
//! # Features
//!
//! - **Forward elimination**: row-echelon reduction with zero-pivot and
//!   larger-candidate row exchanges
//! - **Back-substitution**: free-variable assignment or strict failure on
//!   under-determined rows, inconsistency detection
//! - **Precision control**: rounding to `d` significant digits after every
//!   product, difference and quotient
//! - **Crout LU**: small LU-decomposition variant sharing the rounding policy
//! - **Tracing**: structured callback at pivot swaps, eliminations and
//!   substitution steps
//!
//! # Example
//!
//! ```
//! use math_gauss::{GaussConfig, solve};
//! use ndarray::array;
//!
//! let mut a = array![[2.0_f64, 1.0, 5.0], [1.0, 3.0, 10.0]];
//! let solution = solve(&mut a, &GaussConfig::default())?.expect("augmented system");
//!
//! assert!((solution.values[0] - 1.0).abs() < 1e-12);
//! assert!((solution.values[1] - 3.0).abs() < 1e-12);
//! # Ok::<(), math_gauss::GaussError>(())
//! ```

pub mod config;
pub mod direct;
pub mod format;
pub mod precision;
pub mod trace;
pub mod traits;

// Re-export main types
pub use config::{GaussConfig, PivotSearch, SubstitutionPolicy};
pub use precision::{Precision, round_to_digits};
pub use trace::{LogTracer, NoTrace, SwapReason, TraceEvent, Tracer};
pub use traits::GaussScalar;

// Re-export engines
pub use direct::{
    CroutFactorization, Solution, back_substitute, back_substitute_into, crout_decompose,
    crout_solve, eliminate, eliminate_traced, find_pivot_row, matmul, solve, solve_traced,
    swap_rows,
};

pub use format::{format_matrix, format_solution, matrix_from_row_major};

/// Status code reported for a successful call
pub const STATUS_OK: i32 = 0;

/// Status code reported when a row has more unknowns than it can determine
pub const STATUS_INSUFFICIENT_EQUATIONS: i32 = -1;

/// Status code reported for an inconsistent system
pub const STATUS_INCONSISTENT: i32 = -2;

/// Errors reported by the elimination engines
#[derive(Debug, thiserror::Error)]
pub enum GaussError {
    #[error("Inconsistent system: row {row} has no nonzero coefficient but right-hand side {rhs}")]
    Inconsistent { row: usize, rhs: f64 },

    #[error("Not enough equations: row {row} has unsolved unknowns x[{first}] and x[{second}]")]
    InsufficientEquations {
        row: usize,
        first: usize,
        second: usize,
    },

    #[error("Matrix is singular: zero diagonal entry at index {index}")]
    SingularMatrix { index: usize },

    #[error("Matrix must have at least one row and one column")]
    EmptyMatrix,

    #[error("Matrix dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Invalid precision {0}: expected -1 (exact) or a digit count >= 1")]
    InvalidPrecision(i32),

    #[error("Back-substitution requires an augmented matrix")]
    NotAugmented,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GaussError {
    /// Integer status of this failure class
    ///
    /// Inconsistent systems report [`STATUS_INCONSISTENT`]; every other
    /// failure reports [`STATUS_INSUFFICIENT_EQUATIONS`].
    pub fn status_code(&self) -> i32 {
        match self {
            GaussError::Inconsistent { .. } => STATUS_INCONSISTENT,
            _ => STATUS_INSUFFICIENT_EQUATIONS,
        }
    }
}

pub type Result<T> = std::result::Result<T, GaussError>;

/// Integer status of a call result: `0` on success, the error's code otherwise
pub fn status_code<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => STATUS_OK,
        Err(e) => e.status_code(),
    }
}

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
