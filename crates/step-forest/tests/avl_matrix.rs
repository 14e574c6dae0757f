use step_forest::{AvlTree, Direction, OrderedTree, Step};

fn build(keys: &[i32]) -> AvlTree<i32, i32> {
    let mut tree = AvlTree::new();
    for &k in keys {
        tree.insert(k, k);
        tree.assert_valid().unwrap();
    }
    tree
}

fn keys(tree: &AvlTree<i32, i32>) -> Vec<i32> {
    tree.iter().map(|(k, _)| *k).collect()
}

fn height_of(tree: &AvlTree<i32, i32>, key: i32) -> i32 {
    let idx = tree.raw().locate(&key).unwrap();
    tree.height(idx)
}

#[test]
fn avl_ascending_inserts_stay_balanced_matrix() {
    let tree = build(&[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(keys(&tree), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(tree.root_key(), Some(&4));
    assert_eq!(height_of(&tree, 4), 3);
    for leaf in [1, 3, 5, 7] {
        assert_eq!(height_of(&tree, leaf), 1);
    }
    assert_eq!(height_of(&tree, 2), 2);
    assert_eq!(height_of(&tree, 6), 2);
}

#[test]
fn avl_descending_inserts_stay_balanced_matrix() {
    let tree = build(&[7, 6, 5, 4, 3, 2, 1]);
    assert_eq!(tree.root_key(), Some(&4));
    assert_eq!(height_of(&tree, 4), 3);
}

#[test]
fn avl_insert_trace_matrix() {
    let mut tree = AvlTree::new();
    let mut steps: Vec<Step<i32>> = Vec::new();
    for k in [1, 2, 3] {
        tree.insert_with(k, k, &mut steps);
    }
    assert_eq!(
        steps,
        vec![
            Step::Insert {
                key: 1,
                parent_key: None,
                direction: None
            },
            Step::Visit { key: 1 },
            Step::Insert {
                key: 2,
                parent_key: Some(1),
                direction: Some(Direction::Right)
            },
            Step::UpdateHeight { key: 1, height: 2 },
            Step::Visit { key: 1 },
            Step::Visit { key: 2 },
            Step::Insert {
                key: 3,
                parent_key: Some(2),
                direction: Some(Direction::Right)
            },
            Step::UpdateHeight { key: 2, height: 2 },
            Step::UpdateHeight { key: 1, height: 3 },
            Step::RotateLeft { key: 1 },
        ]
    );
    assert_eq!(tree.root_key(), Some(&2));
    assert_eq!(height_of(&tree, 2), 2);
    assert_eq!(height_of(&tree, 1), 1);
}

#[test]
fn avl_remove_two_child_root_matrix() {
    let mut tree = build(&[4, 2, 6, 1, 3, 5, 7]);
    let mut steps: Vec<Step<i32>> = Vec::new();
    assert_eq!(tree.remove_with(&4, &mut steps), Some(4));
    assert_eq!(
        steps,
        vec![
            Step::Found { key: 4 },
            Step::Swap { key1: 4, key2: 3 },
            Step::Remove { key: 4 },
        ]
    );
    assert_eq!(keys(&tree), vec![1, 2, 3, 5, 6, 7]);
    assert_eq!(tree.root_key(), Some(&3));
    tree.assert_valid().unwrap();
}

#[test]
fn avl_remove_rebalances_matrix() {
    let mut tree = build(&[2, 1, 4, 3, 5]);
    let mut steps: Vec<Step<i32>> = Vec::new();
    tree.remove_with(&1, &mut steps);
    assert_eq!(
        steps,
        vec![
            Step::Found { key: 1 },
            Step::Remove { key: 1 },
            Step::RotateLeft { key: 2 },
        ]
    );
    assert_eq!(tree.root_key(), Some(&4));
    assert_eq!(keys(&tree), vec![2, 3, 4, 5]);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_remove_missing_and_drain_matrix() {
    let mut tree = build(&[5, 3, 8]);
    let mut steps: Vec<Step<i32>> = Vec::new();
    assert_eq!(tree.remove_with(&4, &mut steps), None);
    assert_eq!(steps, vec![Step::NotFound { key: 4 }]);

    for k in [3, 5, 8] {
        assert_eq!(tree.remove(&k), Some(k));
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
}

#[test]
fn avl_interleaved_matrix() {
    let mut tree = AvlTree::new();
    for k in 0..64 {
        tree.insert(k, k * 2);
    }
    tree.assert_valid().unwrap();
    assert_eq!(height_of(&tree, *tree.root_key().unwrap()), 7);

    for k in (0..64).filter(|k| k % 3 == 0) {
        assert_eq!(tree.remove(&k), Some(k * 2));
        tree.assert_valid().unwrap();
    }
    let expected: Vec<i32> = (0..64).filter(|k| k % 3 != 0).collect();
    assert_eq!(keys(&tree), expected);
    assert_eq!(tree.get(&5), Some(&10));
    assert_eq!(tree.get(&6), None);
}

#[test]
fn avl_find_does_not_restructure_matrix() {
    let mut tree = build(&[1, 2, 3, 4, 5, 6, 7]);
    let before = tree.snapshot();
    let mut steps: Vec<Step<i32>> = Vec::new();
    let hit = tree.find_with(&7, &mut steps).unwrap();
    assert_eq!(tree.value(hit), &7);
    assert_eq!(
        steps,
        vec![
            Step::Visit { key: 4 },
            Step::Visit { key: 6 },
            Step::Visit { key: 7 },
            Step::Found { key: 7 },
        ]
    );
    assert_eq!(tree.snapshot(), before);
}

#[test]
fn avl_snapshot_carries_heights_matrix() {
    let tree = build(&[2, 1, 3]);
    let snap = tree.snapshot();
    let root = snap.root.as_ref().unwrap();
    assert_eq!(root.key, 2);
    assert_eq!(root.height, Some(2));
    assert_eq!(root.left.as_ref().unwrap().height, Some(1));
    assert_eq!(snap.print(), "Tree\n└─ 2 [h=2]\n  ← 1 [h=1]\n  → 3 [h=1]");
}

#[test]
fn avl_remove_min_rebalances_matrix() {
    let mut tree = build(&[2, 1, 4, 3, 5]);
    let mut steps: Vec<Step<i32>> = Vec::new();
    assert_eq!(tree.remove_min_with(&mut steps).map(|(k, _)| k), Some(1));
    assert_eq!(steps[..2], [Step::Found { key: 1 }, Step::Remove { key: 1 }]);
    assert!(steps.contains(&Step::RotateLeft { key: 2 }));
    assert_eq!(tree.root_key(), Some(&4));
    tree.assert_valid().unwrap();
}
