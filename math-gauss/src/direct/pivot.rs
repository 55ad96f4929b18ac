//! Pivot row selection

use crate::config::PivotSearch;
use crate::traits::GaussScalar;
use ndarray::{ArrayBase, Data, Ix2};

/// Find the row in `start_row..` with the best pivot candidate in `column`
///
/// With [`PivotSearch::SignedMaximum`] the strictly largest signed value wins;
/// with [`PivotSearch::Magnitude`] the strictly largest absolute value wins.
/// Ties resolve to the lowest row index. NaN candidates never win.
pub fn find_pivot_row<T, S>(
    a: &ArrayBase<S, Ix2>,
    column: usize,
    start_row: usize,
    search: PivotSearch,
) -> usize
where
    T: GaussScalar,
    S: Data<Elem = T>,
{
    let key = |value: T| match search {
        PivotSearch::SignedMaximum => value,
        PivotSearch::Magnitude => value.abs(),
    };

    let mut best_row = start_row;
    let mut best = key(a[[start_row, column]]);

    for row in (start_row + 1)..a.nrows() {
        let candidate = key(a[[row, column]]);
        if candidate > best {
            best = candidate;
            best_row = row;
        }
    }

    best_row
}
