//! Counter
//!
//! This example demonstrates a typed store with the `record!` macro.
//!
//! Key concepts:
//! - State and actions declared as plain Rust types
//! - A pure reducer as the only way to change state
//! - Listeners notified synchronously after every dispatch
//! - Unsubscribing through the returned capability
//!
//! Run with: RUST_LOG=reduxo=trace cargo run --example counter

use reduxo::{record, StoreBuilder};
use tracing_subscriber::EnvFilter;

record! {
    struct Counter {
        value: i64,
    }
}

record! {
    enum CounterAction {
        Increment,
        Decrement,
        Add(i64),
    }
}

fn reducer(state: &Counter, action: &CounterAction) -> Counter {
    match action {
        CounterAction::Increment => Counter {
            value: state.value + 1,
        },
        CounterAction::Decrement => Counter {
            value: state.value - 1,
        },
        CounterAction::Add(n) => Counter {
            value: state.value + n,
        },
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();

    println!("=== Counter Example ===\n");

    let store = StoreBuilder::new()
        .name("counter")
        .reducer(reducer)
        .initial(Counter { value: 0 })
        .build()
        .unwrap();

    let reader = store.clone();
    let printer = store
        .subscribe(move || println!("  counter is now {}", reader.get_state().value))
        .unwrap();

    println!("Dispatching Increment, Increment, Add(10), Decrement");
    store.dispatch(CounterAction::Increment).unwrap();
    store.dispatch(CounterAction::Increment).unwrap();
    store.dispatch(CounterAction::Add(10)).unwrap();
    store.dispatch(CounterAction::Decrement).unwrap();

    println!("\nUnsubscribing the printer");
    printer.unsubscribe();
    store.dispatch(CounterAction::Add(100)).unwrap();

    println!("Final state: {:?}", store.get_state());

    println!("\n=== Example Complete ===");
}
