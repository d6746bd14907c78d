//! Property-based tests for the store.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use parking_lot::Mutex;
use proptest::prelude::*;
use reduxo::json::merge;
use reduxo::{create_store, record, Store, Subscription};
use serde_json::{json, Value};
use std::sync::Arc;

record! {
    struct Tally {
        total: i64,
        applied: usize,
    }
}

record! {
    enum TallyAction {
        Add(i64),
        Reset,
        Ignore,
    }
}

fn tally_reducer(state: &Tally, action: &TallyAction) -> Tally {
    match action {
        TallyAction::Add(n) => Tally {
            total: state.total + n,
            applied: state.applied + 1,
        },
        TallyAction::Reset => Tally {
            total: 0,
            applied: state.applied + 1,
        },
        TallyAction::Ignore => state.clone(),
    }
}

fn tally_store() -> Store<Tally, TallyAction> {
    create_store(
        tally_reducer,
        Tally {
            total: 0,
            applied: 0,
        },
    )
    .unwrap()
}

prop_compose! {
    fn arbitrary_action()(variant in 0..3u8, n in -1000i64..1000) -> TallyAction {
        match variant {
            0 => TallyAction::Add(n),
            1 => TallyAction::Reset,
            _ => TallyAction::Ignore,
        }
    }
}

fn arbitrary_json_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,8}".prop_map(Value::String),
        prop::collection::vec(any::<u8>(), 0..4).prop_map(|items| json!(items)),
    ]
}

proptest! {
    #[test]
    fn state_is_fold_of_reducer(actions in prop::collection::vec(arbitrary_action(), 0..40)) {
        let store = tally_store();

        let mut expected = store.get_state();
        for action in &actions {
            expected = tally_reducer(&expected, action);
            store.dispatch(action.clone()).unwrap();
        }

        prop_assert_eq!(store.get_state(), expected);
    }

    #[test]
    fn ignored_actions_are_idempotent(count in 0..20usize, start in -50i64..50) {
        let store = tally_store();
        store.dispatch(TallyAction::Add(start)).unwrap();
        let before = store.get_state();

        for _ in 0..count {
            store.dispatch(TallyAction::Ignore).unwrap();
        }

        prop_assert_eq!(store.get_state(), before);
    }

    #[test]
    fn every_listener_notified_once_per_dispatch_in_order(
        listeners in 1..8usize,
        dispatches in 1..10usize,
    ) {
        let store = tally_store();
        let log = Arc::new(Mutex::new(Vec::new()));

        for tag in 0..listeners {
            let log = Arc::clone(&log);
            store.subscribe(move || log.lock().push(tag)).unwrap();
        }

        for _ in 0..dispatches {
            store.dispatch(TallyAction::Ignore).unwrap();
        }

        let expected: Vec<usize> = (0..dispatches).flat_map(|_| 0..listeners).collect();
        prop_assert_eq!(log.lock().clone(), expected);
    }

    #[test]
    fn unsubscribed_listeners_stay_silent(mask in prop::collection::vec(any::<bool>(), 1..10)) {
        let store = tally_store();
        let log = Arc::new(Mutex::new(Vec::new()));

        let subscriptions: Vec<Subscription> = (0..mask.len())
            .map(|tag| {
                let log = Arc::clone(&log);
                store.subscribe(move || log.lock().push(tag)).unwrap()
            })
            .collect();

        for (subscription, remove) in subscriptions.iter().zip(&mask) {
            if *remove {
                subscription.unsubscribe();
                subscription.unsubscribe();
            }
        }

        store.dispatch(TallyAction::Ignore).unwrap();

        let expected: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter(|(_, remove)| !**remove)
            .map(|(tag, _)| tag)
            .collect();
        prop_assert_eq!(store.listener_count(), expected.len());
        prop_assert_eq!(log.lock().clone(), expected);
    }

    #[test]
    fn non_record_values_are_rejected(value in arbitrary_json_scalar()) {
        let noop = |state: &Value, _action: &Value| state.clone();

        prop_assert!(create_store(noop, value.clone()).is_err());

        let store = create_store(noop, json!({})).unwrap();
        prop_assert!(store.dispatch(value).is_err());
        prop_assert_eq!(store.get_state(), json!({}));
    }

    #[test]
    fn merge_keeps_every_patch_key(
        base in prop::collection::btree_map("[a-d]", any::<i32>(), 0..4),
        patch in prop::collection::btree_map("[a-d]", any::<i32>(), 0..4),
    ) {
        let merged = merge(&json!(base), &json!(patch));

        for (key, value) in &patch {
            prop_assert_eq!(&merged[key], &json!(value));
        }
        for (key, value) in &base {
            if !patch.contains_key(key) {
                prop_assert_eq!(&merged[key], &json!(value));
            }
        }
    }
}
