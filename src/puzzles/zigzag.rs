//! The zigzag ordering used by JPEG entropy coding.
//!
//! See <https://en.wikipedia.org/wiki/JPEG#Entropy_coding>.

/// Creates an `n` by `n` matrix numbered along the zigzag path, starting at the top left and
/// moving right first.
///
/// # Examples
/// ```
/// # use katas::puzzles::zigzag::zigzag_matrix;
/// assert_eq!(zigzag_matrix(1), [[0]]);
/// assert_eq!(zigzag_matrix(3), [[0, 1, 5], [2, 4, 6], [3, 7, 8]]);
/// assert!(zigzag_matrix(0).is_empty());
/// ```
pub fn zigzag_matrix(n: usize) -> Vec<Vec<usize>> {
    let mut matrix = vec![vec![0; n]; n];
    let mut counter = 0;

    // Walk each anti-diagonal (row + col == diagonal), alternating direction.
    for diagonal in 0..(2 * n).saturating_sub(1) {
        let rows = diagonal.saturating_sub(n - 1)..=diagonal.min(n - 1);
        let mut place = |row: usize| {
            matrix[row][diagonal - row] = counter;
            counter += 1;
        };

        if diagonal % 2 == 1 {
            rows.for_each(&mut place);
        } else {
            rows.rev().for_each(&mut place);
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_small_matrices() {
        assert_eq!(zigzag_matrix(2), [[0, 1], [2, 3]]);
        assert_eq!(
            zigzag_matrix(4),
            [[0, 1, 5, 6], [2, 4, 7, 12], [3, 8, 11, 13], [9, 10, 14, 15]]
        );
    }

    proptest! {
        /// Every number appears once, and each step of the path moves to a neighbouring cell.
        #[test]
        fn prop_path_is_contiguous(n in 1_usize..24) {
            let matrix = zigzag_matrix(n);
            let mut cells = vec![None; n * n];
            for (row, values) in matrix.iter().enumerate() {
                for (col, &value) in values.iter().enumerate() {
                    prop_assert!(cells[value].is_none(), "{} appears twice", value);
                    cells[value] = Some((row, col));
                }
            }

            let cells: Vec<(usize, usize)> = cells.into_iter().flatten().collect();
            prop_assert_eq!(cells.len(), n * n);
            for pair in cells.windows(2) {
                let ((r0, c0), (r1, c1)) = (pair[0], pair[1]);
                prop_assert!(r0.abs_diff(r1) <= 1 && c0.abs_diff(c1) <= 1);
            }
        }
    }
}
