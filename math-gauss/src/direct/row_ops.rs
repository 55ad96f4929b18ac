//! Elementary row operations

use ndarray::{ArrayBase, DataMut, Ix2};

/// Exchange rows `i` and `j` in place
pub fn swap_rows<T, S>(a: &mut ArrayBase<S, Ix2>, i: usize, j: usize)
where
    S: DataMut<Elem = T>,
{
    if i == j {
        return;
    }
    for col in 0..a.ncols() {
        a.swap([i, col], [j, col]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_swap_rows() {
        let mut a = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        swap_rows(&mut a, 0, 2);
        assert_eq!(a, array![[7.0, 8.0, 9.0], [4.0, 5.0, 6.0], [1.0, 2.0, 3.0]]);
    }

    #[test]
    fn test_swap_same_row_is_noop() {
        let mut a = array![[1.0_f64, 2.0], [3.0, 4.0]];
        swap_rows(&mut a, 1, 1);
        assert_eq!(a, array![[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn test_swap_preserves_extreme_values() {
        // An arithmetic swap would lose these
        let mut a = array![[1e308_f64, 1e-308], [-1e308, f64::INFINITY]];
        swap_rows(&mut a, 0, 1);
        assert_eq!(a[[0, 0]], -1e308);
        assert_eq!(a[[0, 1]], f64::INFINITY);
        assert_eq!(a[[1, 0]], 1e308);
        assert_eq!(a[[1, 1]], 1e-308);
    }
}
