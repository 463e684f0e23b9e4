//! Coordinate keys for sparse storage

/// Base-orientation coordinate of a stored entry.
///
/// The derived `Ord` is lexicographic: row first, then column. The tree
/// engine keys its nodes with this order, and a logical row of an
/// untransposed matrix is exactly the key interval
/// `[row_start(i), row_end(i)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordKey {
    pub row: usize,
    pub col: usize,
}

impl CoordKey {
    /// Create a key from a base coordinate
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Smallest possible key of a given row
    pub const fn row_start(row: usize) -> Self {
        Self { row, col: 0 }
    }

    /// Largest possible key of a given row
    pub const fn row_end(row: usize) -> Self {
        Self {
            row,
            col: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_lexicographic() {
        assert!(CoordKey::new(0, 5) < CoordKey::new(1, 0));
        assert!(CoordKey::new(2, 1) < CoordKey::new(2, 2));
        assert!(CoordKey::new(3, 0) > CoordKey::new(2, usize::MAX));
        assert_eq!(CoordKey::new(4, 4), CoordKey::new(4, 4));
    }

    #[test]
    fn test_row_interval_brackets_all_columns() {
        let key = CoordKey::new(7, 123);
        assert!(CoordKey::row_start(7) <= key);
        assert!(key <= CoordKey::row_end(7));
        assert!(CoordKey::row_end(6) < CoordKey::row_start(7));
    }
}
