use super::*;

use proptest::prelude::*;
use std::collections::BTreeMap;

/// Walk the whole tree checking the structural invariants: cached heights
/// match recomputed heights, every balance factor stays within [-1, 1],
/// keys are strictly ordered, and the AVL height bound holds for the
/// stored entry count.
fn validate_tree(matrix: &TreeMatrix<f64>) {
    fn check(
        link: &node::Link<f64>,
        lo: Option<CoordKey>,
        hi: Option<CoordKey>,
    ) -> (i32, usize) {
        let Some(node) = link.as_deref() else {
            return (0, 0);
        };
        if let Some(lo) = lo {
            assert!(node.key > lo, "key order violated on the left bound");
        }
        if let Some(hi) = hi {
            assert!(node.key < hi, "key order violated on the right bound");
        }
        let (left_height, left_count) = check(&node.left, lo, Some(node.key));
        let (right_height, right_count) = check(&node.right, Some(node.key), hi);
        assert_eq!(
            node.height,
            1 + left_height.max(right_height),
            "cached height must match subtree"
        );
        assert!(
            (left_height - right_height).abs() <= 1,
            "balance factor out of range"
        );
        (node.height, left_count + right_count + 1)
    }

    let (height, count) = check(&matrix.root, None, None);
    assert_eq!(count, matrix.nnz(), "nnz must match stored entry count");
    assert!(
        height as f64 <= 1.44 * ((count + 2) as f64).log2(),
        "AVL height bound violated: height {height} for {count} entries"
    );

    let keys: Vec<CoordKey> = matrix.in_order().map(|(key, _)| key).collect();
    assert!(
        keys.windows(2).all(|pair| pair[0] < pair[1]),
        "in-order traversal must be strictly ascending"
    );
}

#[derive(Clone, Debug)]
enum Op {
    Insert(usize, usize, f64),
    Remove(usize, usize),
    Access(usize, usize),
}

const GRID: usize = 12;

fn op_strategy() -> impl Strategy<Value = Op> {
    let coord = 0..GRID;
    prop_oneof![
        // Insert dominates so trees actually grow; the value pool includes
        // exact zero, which exercises the delete path through insert
        4 => (coord.clone(), 0..GRID, -3i32..=3i32)
            .prop_map(|(i, j, v)| Op::Insert(i, j, v as f64)),
        2 => (coord.clone(), 0..GRID).prop_map(|(i, j)| Op::Remove(i, j)),
        1 => (coord, 0..GRID).prop_map(|(i, j)| Op::Access(i, j)),
    ]
}

proptest! {
    #[test]
    fn prop_tree_matches_btreemap_model(ops in prop::collection::vec(op_strategy(), 1..250)) {
        let mut matrix: TreeMatrix<f64> = TreeMatrix::with_shape(GRID, GRID).unwrap();
        let mut model: BTreeMap<(usize, usize), f64> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(i, j, v) => {
                    matrix.insert(i, j, v).unwrap();
                    if v == 0.0 {
                        model.remove(&(i, j));
                    } else {
                        model.insert((i, j), v);
                    }
                }
                Op::Remove(i, j) => {
                    matrix.insert(i, j, 0.0).unwrap();
                    model.remove(&(i, j));
                }
                Op::Access(i, j) => {
                    let expected = model.get(&(i, j)).copied().unwrap_or(0.0);
                    prop_assert_eq!(matrix.access(i, j).unwrap(), expected);
                }
            }
        }

        validate_tree(&matrix);

        prop_assert_eq!(matrix.nnz(), model.len());
        let stored: Vec<((usize, usize), f64)> = matrix
            .in_order()
            .map(|(key, value)| ((key.row, key.col), value))
            .collect();
        let expected: Vec<((usize, usize), f64)> =
            model.iter().map(|(&coord, &value)| (coord, value)).collect();
        prop_assert_eq!(stored, expected);
    }

    #[test]
    fn prop_range_agrees_with_filtered_inorder(
        entries in prop::collection::btree_map(
            (0..GRID, 0..GRID),
            1i32..=9i32,
            0..80,
        ),
        lo in (0..GRID, 0..GRID),
        hi in (0..GRID, 0..GRID),
    ) {
        let mut matrix: TreeMatrix<f64> = TreeMatrix::with_shape(GRID, GRID).unwrap();
        for (&(i, j), &v) in &entries {
            matrix.insert(i, j, v as f64).unwrap();
        }

        let lo = CoordKey::new(lo.0, lo.1);
        let hi = CoordKey::new(hi.0, hi.1);
        let ranged: Vec<(CoordKey, f64)> = matrix.range(lo, hi).collect();
        let filtered: Vec<(CoordKey, f64)> = matrix
            .in_order()
            .filter(|(key, _)| *key >= lo && *key <= hi)
            .collect();
        prop_assert_eq!(ranged, filtered);
    }
}
