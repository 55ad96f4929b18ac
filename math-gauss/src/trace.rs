//! Structured tracing of the elimination engines
//!
//! The engines report their progress at fixed checkpoints through a
//! [`Tracer`]. Tracing never changes control flow.

use crate::format::format_matrix;
use crate::traits::GaussScalar;
use ndarray::ArrayView2;

/// Why two rows were exchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapReason {
    /// The pivot was exactly zero and the pivot search found a replacement
    ZeroPivot,
    /// A row below had a larger-magnitude entry in the pivot column
    LargerCandidate,
}

/// Checkpoint reported by the engines
#[derive(Debug, Clone)]
pub enum TraceEvent<'a, T> {
    /// Rows `row_a` and `row_b` were exchanged while pivoting on `column`
    PivotSwap {
        column: usize,
        row_a: usize,
        row_b: usize,
        reason: SwapReason,
    },
    /// `row` was reduced against `pivot_row`
    RowEliminated {
        pivot_row: usize,
        row: usize,
        multiplier: T,
    },
    /// Every row below the pivot has been reduced in `column`
    ColumnEliminated {
        column: usize,
        matrix: ArrayView2<'a, T>,
    },
    /// Unknown `column` was fixed by the free-variable policy in `row`
    FreeVariable { row: usize, column: usize },
    /// Unknown `column` was solved from `row`
    Substituted { row: usize, column: usize, value: T },
    /// `row` has no nonzero coefficient but a nonzero right-hand side
    InconsistentRow { row: usize, rhs: T },
}

/// Receiver of [`TraceEvent`]s
pub trait Tracer<T> {
    /// Called once per checkpoint, in the order the engine reaches them
    fn trace(&mut self, event: &TraceEvent<'_, T>);
}

impl<T, F> Tracer<T> for F
where
    F: FnMut(&TraceEvent<'_, T>),
{
    fn trace(&mut self, event: &TraceEvent<'_, T>) {
        self(event)
    }
}

/// Tracer that discards every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl<T> Tracer<T> for NoTrace {
    #[inline]
    fn trace(&mut self, _event: &TraceEvent<'_, T>) {}
}

/// Tracer that forwards every event to the `log` facade at trace level
#[derive(Clone, Copy, Debug)]
pub struct LogTracer {
    /// Decimals used when dumping the matrix
    pub decimals: usize,
}

impl Default for LogTracer {
    fn default() -> Self {
        Self { decimals: 4 }
    }
}

impl<T: GaussScalar> Tracer<T> for LogTracer {
    fn trace(&mut self, event: &TraceEvent<'_, T>) {
        match event {
            TraceEvent::PivotSwap {
                column,
                row_a,
                row_b,
                reason,
            } => log::trace!(
                "p = {}: swap rows {} and {} ({:?})",
                column,
                row_a,
                row_b,
                reason
            ),
            TraceEvent::RowEliminated {
                pivot_row,
                row,
                multiplier,
            } => log::trace!(
                "p = {}: R{} -= {} * R{}",
                pivot_row,
                row,
                multiplier,
                pivot_row
            ),
            TraceEvent::ColumnEliminated { column, matrix } => log::trace!(
                "p = {}\n-------elim---------\n{}",
                column,
                format_matrix(matrix, self.decimals)
            ),
            TraceEvent::FreeVariable { row, column } => {
                log::trace!("row {}: x[{}] is free, set to 1", row, column)
            }
            TraceEvent::Substituted { row, column, value } => {
                log::trace!("row {}: x[{}] = {}", row, column, value)
            }
            TraceEvent::InconsistentRow { row, rhs } => {
                log::trace!("row {}: 0 = {} is inconsistent", row, rhs)
            }
        }
    }
}
