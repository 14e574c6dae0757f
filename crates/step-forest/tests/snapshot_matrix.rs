use serde_json::json;

use step_forest::{AnyTree, BinarySearchTree, OrderedTree, Step, TreeKind};

#[test]
fn clone_is_independent_matrix() {
    for kind in TreeKind::ALL {
        let mut tree = AnyTree::new(kind);
        for k in [4, 2, 6, 1] {
            tree.insert(k, k);
        }
        let frozen = tree.clone();
        let shape = frozen.snapshot();

        tree.remove(&2);
        tree.insert(9, 9);
        tree.find(&1);

        assert_eq!(frozen.snapshot(), shape, "{kind}");
        assert_eq!(frozen.len(), 4);
        assert_eq!(frozen.get(&2), Some(&2));
        assert_eq!(tree.get(&2), None);
        frozen.assert_valid().unwrap();
    }
}

#[test]
fn snapshot_json_shape_matrix() {
    let mut bst = AnyTree::new(TreeKind::Bst);
    for k in [2, 1] {
        bst.insert(k, k * 10);
    }
    assert_eq!(
        serde_json::to_value(bst.snapshot()).unwrap(),
        json!({
            "root": {
                "key": 2,
                "value": 20,
                "left": {"key": 1, "value": 10, "left": null, "right": null},
                "right": null
            }
        })
    );

    let mut avl = AnyTree::new(TreeKind::Avl);
    avl.insert(1, 1);
    assert_eq!(
        serde_json::to_value(avl.snapshot()).unwrap(),
        json!({"root": {"key": 1, "value": 1, "height": 1, "left": null, "right": null}})
    );

    let empty = AnyTree::<i32, i32>::new(TreeKind::Splay);
    assert_eq!(
        serde_json::to_value(empty.snapshot()).unwrap(),
        json!({"root": null})
    );
}

#[test]
fn snapshot_queries_matrix() {
    let mut tree = BinarySearchTree::new();
    for k in [5, 3, 8, 4] {
        tree.insert(k, ());
    }
    let snap = tree.snapshot();
    assert!(!snap.is_empty());
    assert_eq!(snap.keys(), vec![&3, &4, &5, &8]);
    assert_eq!(snap.edges(), vec![(&5, &3), (&3, &4), (&5, &8)]);
    assert_eq!(snap.print(), "Tree\n└─ 5\n  ← 3\n    → 4\n  → 8");

    tree.clear();
    let snap = tree.snapshot();
    assert!(snap.is_empty());
    assert_eq!(snap.print(), "Tree ∅");
}

#[test]
fn step_trace_json_matrix() {
    let mut tree = AnyTree::new(TreeKind::Avl);
    let mut steps: Vec<Step<i32>> = Vec::new();
    for k in [1, 2, 3] {
        tree.insert_with(k, k, &mut steps);
    }
    let wire: Vec<serde_json::Value> = steps
        .iter()
        .map(|s| serde_json::to_value(s).unwrap())
        .collect();
    assert_eq!(wire[0], json!({"type": "insert", "key": 1, "parentKey": null}));
    assert_eq!(
        wire[2],
        json!({"type": "insert", "key": 2, "parentKey": 1, "direction": "right"})
    );
    assert_eq!(wire[3], json!({"type": "update-height", "key": 1, "height": 2}));
    assert_eq!(wire.last(), Some(&json!({"type": "rotate-left", "key": 1})));

    let mut tree = AnyTree::new(TreeKind::Bst);
    for k in [2, 1, 3] {
        tree.insert(k, k);
    }
    let mut steps: Vec<Step<i32>> = Vec::new();
    tree.remove_with(&2, &mut steps);
    assert_eq!(
        serde_json::to_value(&steps[1]).unwrap(),
        json!({"type": "swap", "key1": 2, "key2": 1})
    );
    assert_eq!(
        serde_json::to_value(&steps[2]).unwrap(),
        json!({"type": "remove", "key": 2})
    );

    let mut steps: Vec<Step<i32>> = Vec::new();
    tree.find_with(&7, &mut steps);
    assert_eq!(
        serde_json::to_value(steps.last().unwrap()).unwrap(),
        json!({"type": "not-found", "key": 7})
    );
}

#[test]
fn closure_observer_matrix() {
    let mut tree = AnyTree::new(TreeKind::Splay);
    let mut kinds = Vec::new();
    for k in [1, 2] {
        tree.insert_with(k, k, &mut |s: Step<i32>| kinds.push(s.kind()));
    }
    assert_eq!(
        kinds,
        vec!["insert", "visit", "insert", "splay", "rotate-left"]
    );
}
