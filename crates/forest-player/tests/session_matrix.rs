use std::collections::BTreeSet;

use proptest::prelude::*;

use forest_player::{play, Command, PlayerConfig, Session, TraceRecorder};
use step_forest::{Step, TreeKind};

fn session(kind: TreeKind) -> Session {
    Session::new(PlayerConfig {
        kind,
        ..PlayerConfig::default()
    })
}

#[test]
fn recorded_frames_match_each_variant_matrix() {
    let script = [
        Command::Insert(1),
        Command::Insert(2),
        Command::Insert(3),
    ];
    let cases = [
        (TreeKind::Bst, 0, Some(1)),
        (TreeKind::Avl, 1, Some(2)),
        (TreeKind::Splay, 2, Some(3)),
    ];
    for (kind, rotations, root) in cases {
        let mut session = session(kind);
        let mut recorder: TraceRecorder<i64> = TraceRecorder::new();
        for command in script {
            session.execute(command, &mut recorder);
        }
        let seen = recorder
            .frames()
            .iter()
            .filter(|f| matches!(f.step, Step::RotateLeft { .. } | Step::RotateRight { .. }))
            .count();
        assert_eq!(seen, rotations, "{kind}");
        assert_eq!(session.tree().root_key().copied(), root, "{kind}");
    }
}

#[test]
fn queue_runs_in_order_matrix() {
    let mut session = session(TreeKind::Avl);
    for line in ["insert 10", "insert 20", "remove 10", "find 20"] {
        session.enqueue_line(line).unwrap();
    }
    assert_eq!(session.pending(), 4);

    let mut recorder: TraceRecorder<i64> = TraceRecorder::new();
    let first = session.step(&mut recorder).unwrap();
    assert_eq!(first.command, Command::Insert(10));
    assert_eq!(session.pending(), 3);

    let rest = session.run_pending(&mut recorder);
    let commands: Vec<String> = rest.iter().map(|o| o.command.to_string()).collect();
    assert_eq!(commands, vec!["insert 20", "remove 10", "find 20"]);
    assert_eq!(rest[2].message, "Node with key 20 found!");
    assert_eq!(rest[2].snapshot.keys(), vec![&20]);
}

#[test]
fn empty_tree_reset_can_be_disabled_matrix() {
    let mut session = Session::new(PlayerConfig {
        kind: TreeKind::Splay,
        reset_when_empty: false,
        emit_trace: false,
    });
    session.execute_silent(Command::Insert(4));
    let outcome = session.execute_silent(Command::Remove(4));
    assert_eq!(outcome.message, "Removed 4. Tree is now empty.");
    assert!(session.tree().is_empty());
    assert_eq!(session.kind(), TreeKind::Splay);
}

#[test]
fn script_select_switches_variant_matrix() {
    let out = play("insert 1\nselect avl\ninsert 1\ninsert 2\n", PlayerConfig::default()).unwrap();
    let kinds: Vec<String> = out
        .lines()
        .map(|l| {
            let v: serde_json::Value = serde_json::from_str(l).unwrap();
            v["kind"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(kinds, vec!["bst", "bst", "avl", "avl"]);

    let last: serde_json::Value = serde_json::from_str(out.lines().last().unwrap()).unwrap();
    assert_eq!(last["snapshot"]["root"]["height"], 2);
    let types: Vec<&str> = last["frames"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["step"]["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["visit", "insert", "update-height"]);
}

#[derive(Clone, Debug)]
enum Line {
    Insert(i64),
    Remove(i64),
    Find(i64),
    Min,
    Max,
}

fn line() -> impl Strategy<Value = Line> {
    prop_oneof![
        4 => (0i64..40).prop_map(Line::Insert),
        3 => (0i64..40).prop_map(Line::Remove),
        2 => (0i64..40).prop_map(Line::Find),
        1 => Just(Line::Min),
        1 => Just(Line::Max),
    ]
}

fn kind() -> impl Strategy<Value = TreeKind> {
    prop_oneof![
        Just(TreeKind::Bst),
        Just(TreeKind::Avl),
        Just(TreeKind::Splay)
    ]
}

proptest! {
    #[test]
    fn session_messages_agree_with_a_set(kind in kind(), lines in prop::collection::vec(line(), 1..120)) {
        let mut session = session(kind);
        let mut model = BTreeSet::new();
        let mut recorder: TraceRecorder<i64> = TraceRecorder::new();

        for line in lines {
            let (command, expected) = match line {
                Line::Insert(k) => {
                    model.insert(k);
                    (Command::Insert(k), format!("Inserted {k}"))
                }
                Line::Remove(k) => {
                    let msg = if !model.remove(&k) {
                        format!("Node with key {k} not found!")
                    } else if model.is_empty() {
                        format!("Removed {k}. Tree is now empty.")
                    } else {
                        format!("Removed {k}")
                    };
                    (Command::Remove(k), msg)
                }
                Line::Find(k) => {
                    let msg = if model.contains(&k) {
                        format!("Node with key {k} found!")
                    } else {
                        format!("Node with key {k} not found!")
                    };
                    (Command::Find(k), msg)
                }
                Line::Min => {
                    let msg = match model.first() {
                        Some(k) => format!("Minimum key is {k}"),
                        None => "Tree is empty".to_string(),
                    };
                    (Command::Min, msg)
                }
                Line::Max => {
                    let msg = match model.last() {
                        Some(k) => format!("Maximum key is {k}"),
                        None => "Tree is empty".to_string(),
                    };
                    (Command::Max, msg)
                }
            };

            let outcome = session.execute(command, &mut recorder);
            prop_assert_eq!(&outcome.message, &expected);
            let keys: Vec<i64> = outcome.snapshot.keys().into_iter().copied().collect();
            prop_assert_eq!(keys, model.iter().copied().collect::<Vec<_>>());
            prop_assert_eq!(session.tree().assert_valid(), Ok(()));
        }

        let seqs: Vec<usize> = recorder.frames().iter().map(|f| f.seq).collect();
        prop_assert_eq!(seqs, (0..recorder.len()).collect::<Vec<_>>());
    }
}
