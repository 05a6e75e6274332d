//! Assorted step-count helpers shared by the solvers.

/// Largest step count the exhaustive solver accepts.
///
/// The number of monotone paths through a grid needing `s` steps is bounded
/// by `2^s`, which must fit a 64-bit counter.
pub const MAX_EXHAUSTIVE_STEPS: usize = 63;

/// Number of steps any complete path takes on a `rows × columns` grid.
///
/// Every monotone path from (0,0) to (rows-1, columns-1) takes exactly
/// `rows - 1` south steps and `columns - 1` east steps. Zero-sized grids
/// report zero.
#[inline]
pub fn total_steps(rows: usize, columns: usize) -> usize {
    rows.saturating_sub(1) + columns.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_needs_no_steps() {
        assert_eq!(total_steps(1, 1), 0);
        assert_eq!(total_steps(0, 0), 0);
    }

    #[test]
    fn steps_are_rows_plus_columns_minus_two() {
        assert_eq!(total_steps(1, 5), 4);
        assert_eq!(total_steps(5, 1), 4);
        assert_eq!(total_steps(3, 4), 5);
        assert_eq!(total_steps(32, 33), 63);
    }
}
