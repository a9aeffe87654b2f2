// Integration tests for the list engine's operation API

use linkviz::engine::{ListEngine, OperationError, OperationRequest, Outcome};
use linkviz::list::{check_links, ListMode, NodeId};
use rstest::{fixture, rstest};

fn ids(engine: &ListEngine) -> Vec<NodeId> {
    engine.nodes().iter().map(|n| n.id()).collect()
}

/// Head/tail, links and highlight must be consistent after every operation
fn assert_invariants(engine: &ListEngine) {
    let nodes = engine.nodes();
    assert_eq!(engine.head(), nodes.first().map(|n| n.id()));
    assert_eq!(engine.tail(), nodes.last().map(|n| n.id()));
    check_links(nodes, engine.mode()).expect("links out of sync with order");

    let mut unique = ids(engine);
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), nodes.len(), "duplicate node ids");

    if let Some(id) = engine.highlighted() {
        assert!(engine.node(id).is_some(), "highlight names a missing node");
    }
}

#[fixture]
fn three() -> ListEngine {
    ListEngine::from_values(ListMode::Singly, [10, 20, 30])
}

#[test]
fn test_walkthrough_scenario() {
    let mut engine = ListEngine::new(ListMode::Singly);

    engine.insert_at_end(5).unwrap();
    engine.insert_at_end(9).unwrap();
    assert_eq!(engine.values(), vec![5, 9]);
    assert_eq!(engine.node(engine.head().unwrap()).unwrap().value, 5);
    assert_eq!(engine.node(engine.tail().unwrap()).unwrap().value, 9);
    assert_invariants(&engine);

    engine.insert_after_key(5, 7).unwrap();
    assert_eq!(engine.values(), vec![5, 7, 9]);
    assert_invariants(&engine);

    engine.delete_by_key(7).unwrap();
    assert_eq!(engine.values(), vec![5, 9]);
    assert_invariants(&engine);

    engine.change_mode(ListMode::Circular);
    let tail = engine.node(engine.tail().unwrap()).unwrap();
    assert_eq!(tail.next, engine.head());
    assert_invariants(&engine);

    engine.clear();
    assert!(engine.is_empty());
    assert_eq!(engine.head(), None);
    assert_eq!(engine.tail(), None);
    assert_invariants(&engine);
}

#[rstest]
#[case::singly(ListMode::Singly)]
#[case::doubly(ListMode::Doubly)]
#[case::circular(ListMode::Circular)]
fn test_insert_then_delete_at_beginning_restores_list(#[case] mode: ListMode) {
    let mut engine = ListEngine::from_values(mode, [1, 2, 3]);
    let before = ids(&engine);

    engine.insert_at_beginning(0).unwrap();
    assert_eq!(engine.values(), vec![0, 1, 2, 3]);
    assert_invariants(&engine);

    engine.delete_from_beginning().unwrap();
    assert_eq!(ids(&engine), before);
    assert_invariants(&engine);
}

#[rstest]
#[case::singly(ListMode::Singly)]
#[case::doubly(ListMode::Doubly)]
#[case::circular(ListMode::Circular)]
fn test_insert_then_delete_at_end_restores_list(#[case] mode: ListMode) {
    let mut engine = ListEngine::from_values(mode, [1, 2, 3]);
    let before = ids(&engine);

    engine.insert_at_end(4).unwrap();
    engine.delete_from_end().unwrap();
    assert_eq!(ids(&engine), before);
    assert_invariants(&engine);
}

#[rstest]
#[case::singly(ListMode::Singly)]
#[case::doubly(ListMode::Doubly)]
#[case::circular(ListMode::Circular)]
fn test_reverse_twice_is_identity(#[case] mode: ListMode) {
    let mut engine = ListEngine::from_values(mode, [4, 8, 15, 16]);
    let before = ids(&engine);

    engine.reverse().unwrap();
    assert_eq!(engine.values(), vec![16, 15, 8, 4]);
    assert_invariants(&engine);

    engine.reverse().unwrap();
    assert_eq!(ids(&engine), before);
    assert_invariants(&engine);
}

#[rstest]
#[case(10, 0)]
#[case(20, 1)]
#[case(30, 2)]
fn test_search_reports_position(mut three: ListEngine, #[case] value: i64, #[case] position: usize) {
    match three.search(value).unwrap() {
        Outcome::Found {
            id, position: p, ..
        } => {
            assert_eq!(p, position);
            assert_eq!(three.highlighted(), Some(id));
        }
        other => panic!("expected Found, got {:?}", other),
    }
    assert_invariants(&three);
}

#[rstest]
fn test_search_miss_leaves_state_unchanged(mut three: ListEngine) {
    let before = three.snapshot();
    assert_eq!(
        three.search(99),
        Err(OperationError::ValueNotFound { value: 99 })
    );
    assert_eq!(three.snapshot(), before);
}

#[rstest]
#[case::insert_after(OperationRequest::InsertAfterKey { key: 99, value: 1 })]
#[case::delete_by_key(OperationRequest::DeleteByKey { key: 99 })]
fn test_absent_key_leaves_list_identical(mut three: ListEngine, #[case] request: OperationRequest) {
    let before = three.snapshot();
    assert_eq!(
        three.execute(request),
        Err(OperationError::KeyNotFound { key: 99 })
    );
    assert_eq!(three.snapshot(), before);
    assert!(!three.is_busy());
}

#[rstest]
#[case::delete_beginning(OperationRequest::DeleteBeginning)]
#[case::delete_end(OperationRequest::DeleteEnd)]
#[case::traverse(OperationRequest::Traverse)]
#[case::reverse(OperationRequest::Reverse)]
fn test_empty_list_operations_fail(#[case] request: OperationRequest) {
    let mut engine = ListEngine::new(ListMode::Doubly);
    assert_eq!(engine.execute(request), Err(OperationError::EmptyList));
    assert!(engine.is_empty());
    assert!(!engine.is_busy());
    assert_eq!(
        engine.notifications().latest().map(|n| n.text.as_str()),
        Some("List is empty")
    );
}

#[test]
fn test_duplicates_resolve_to_first_match() {
    let mut engine = ListEngine::from_values(ListMode::Doubly, [2, 7, 2, 7]);
    let first_two = engine.nodes()[0].id();

    engine.delete_by_key(7).unwrap();
    assert_eq!(engine.values(), vec![2, 2, 7]);

    match engine.search(2).unwrap() {
        Outcome::Found { id, position, .. } => {
            assert_eq!(id, first_two);
            assert_eq!(position, 0);
        }
        other => panic!("expected Found, got {:?}", other),
    }
    assert_invariants(&engine);
}

#[test]
fn test_mode_change_keeps_order_and_values() {
    let mut engine = ListEngine::from_values(ListMode::Singly, [3, 1, 2]);
    let before = ids(&engine);

    for mode in [ListMode::Doubly, ListMode::Circular, ListMode::Singly] {
        engine.change_mode(mode);
        assert_eq!(engine.mode(), mode);
        assert_eq!(ids(&engine), before);
        assert_invariants(&engine);
    }
}

#[test]
fn test_deleted_ids_are_not_reissued() {
    let mut engine = ListEngine::new(ListMode::Singly);
    engine.insert_at_end(1).unwrap();
    let old = engine.head().unwrap();
    engine.clear();
    engine.insert_at_end(1).unwrap();
    assert_ne!(engine.head(), Some(old));
}

#[test]
fn test_execute_matches_direct_calls() {
    let mut engine = ListEngine::new(ListMode::Singly);
    let requests = [
        OperationRequest::InsertBeginning { value: 2 },
        OperationRequest::InsertBeginning { value: 1 },
        OperationRequest::InsertEnd { value: 4 },
        OperationRequest::InsertAfterKey { key: 2, value: 3 },
        OperationRequest::ChangeMode {
            mode: ListMode::Doubly,
        },
        OperationRequest::Reverse,
        OperationRequest::DeleteEnd,
    ];
    for request in requests {
        engine.execute(request).unwrap();
        assert_invariants(&engine);
    }
    assert_eq!(engine.values(), vec![4, 3, 2]);
}
