//! Back-substitution on a row-echelon matrix
//!
//! Rows are processed bottom-up. A row may determine one unknown; extra
//! unsolved unknowns in the same row are handled by the configured
//! [`SubstitutionPolicy`].

use crate::config::{GaussConfig, SubstitutionPolicy};
use crate::trace::{NoTrace, TraceEvent, Tracer};
use crate::traits::GaussScalar;
use crate::{GaussError, Result};
use ndarray::{Array1, ArrayBase, Data, Ix2};

/// Solution vector of an augmented system
///
/// Unsolved slots hold NaN until assigned. A slot is assigned at most once
/// per substitution run.
#[derive(Debug, Clone)]
pub struct Solution<T> {
    /// One value per unknown
    pub values: Array1<T>,
    solved: Vec<bool>,
    free: Vec<usize>,
}

impl<T: GaussScalar> Solution<T> {
    /// Create an all-unsolved solution for `unknowns` unknowns
    pub fn new(unknowns: usize) -> Self {
        Self {
            values: Array1::from_elem(unknowns, T::nan()),
            solved: vec![false; unknowns],
            free: Vec::new(),
        }
    }

    /// Number of unknowns
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the system has no unknowns
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether unknown `index` has been assigned
    pub fn is_solved(&self, index: usize) -> bool {
        self.solved.get(index).copied().unwrap_or(false)
    }

    /// Solved-flags, one per unknown
    pub fn solved_flags(&self) -> &[bool] {
        &self.solved
    }

    /// Whether every unknown has been assigned
    pub fn is_complete(&self) -> bool {
        self.solved.iter().all(|&s| s)
    }

    /// Unknowns fixed to `1` by the free-variable policy, in assignment order
    pub fn free_variables(&self) -> &[usize] {
        &self.free
    }

    /// Clear the solved-flags and free list, keeping the stored values
    ///
    /// Slots that the next run never touches keep their previous values.
    pub fn reset_flags(&mut self) {
        self.solved.iter_mut().for_each(|s| *s = false);
        self.free.clear();
    }

    /// Consume into the value vector
    pub fn into_values(self) -> Array1<T> {
        self.values
    }

    pub(crate) fn assign(&mut self, index: usize, value: T) {
        debug_assert!(!self.solved[index], "x[{}] assigned twice", index);
        self.values[index] = value;
        self.solved[index] = true;
    }
}

/// Solve a row-echelon augmented matrix into a fresh [`Solution`]
pub fn back_substitute<T, S>(a: &ArrayBase<S, Ix2>, config: &GaussConfig) -> Result<Solution<T>>
where
    T: GaussScalar,
    S: Data<Elem = T>,
{
    let mut solution = Solution::new(a.ncols().saturating_sub(1));
    back_substitute_into(a, &mut solution, config, &mut NoTrace)?;
    Ok(solution)
}

/// Solve a row-echelon augmented matrix into `solution`
///
/// On [`GaussError::Inconsistent`] the unknowns already solved from lower rows
/// are left in `solution`.
pub fn back_substitute_into<T, S>(
    a: &ArrayBase<S, Ix2>,
    solution: &mut Solution<T>,
    config: &GaussConfig,
    tracer: &mut dyn Tracer<T>,
) -> Result<()>
where
    T: GaussScalar,
    S: Data<Elem = T>,
{
    let (m, n) = a.dim();
    if m == 0 || n == 0 {
        return Err(GaussError::EmptyMatrix);
    }
    if !config.augmented {
        return Err(GaussError::NotAugmented);
    }
    let unknowns = n - 1;
    if solution.len() != unknowns {
        return Err(GaussError::DimensionMismatch {
            expected: unknowns,
            got: solution.len(),
        });
    }

    let precision = config.precision;

    for k in (0..m).rev() {
        let row = a.row(k);
        let mut b = row[unknowns];

        if row.iter().take(unknowns).all(|c| c.is_exact_zero()) {
            if b.is_exact_zero() {
                continue;
            }
            tracer.trace(&TraceEvent::InconsistentRow { row: k, rhs: b });
            log::warn!("Inconsistent system: row {} reads 0 = {}", k, b);
            return Err(GaussError::Inconsistent {
                row: k,
                rhs: b.to_f64_lossy(),
            });
        }

        let mut unsolved: Option<usize> = None;
        for j in 0..unknowns {
            let coeff = row[j];
            if coeff.is_exact_zero() {
                continue;
            }

            if solution.is_solved(j) {
                let contribution = precision.apply(coeff * solution.values[j]);
                b = precision.apply(b - contribution);
            } else if let Some(first) = unsolved {
                match config.substitution {
                    SubstitutionPolicy::Strict => {
                        return Err(GaussError::InsufficientEquations {
                            row: k,
                            first,
                            second: j,
                        });
                    }
                    SubstitutionPolicy::FreeVariable => {
                        solution.assign(j, T::one());
                        solution.free.push(j);
                        tracer.trace(&TraceEvent::FreeVariable { row: k, column: j });
                        b = precision.apply(b - precision.apply(coeff));
                    }
                }
            } else {
                unsolved = Some(j);
            }
        }

        if let Some(j) = unsolved {
            let value = precision.apply(b / row[j]);
            solution.assign(j, value);
            tracer.trace(&TraceEvent::Substituted {
                row: k,
                column: j,
                value,
            });
        }
    }

    let missing = solution.solved.iter().filter(|&&s| !s).count();
    if missing > 0 {
        log::debug!("Back-substitution left {} unknown(s) unsolved", missing);
    }

    Ok(())
}
