//! Threaded Counter
//!
//! This example demonstrates sharing one store across threads.
//!
//! Key concepts:
//! - Store handles are cheap clones of one shared instance
//! - Dispatches from different threads are serialized
//! - Every dispatch notifies listeners exactly once
//!
//! Run with: RUST_LOG=reduxo=debug cargo run --example threaded_counter

use reduxo::{create_store, record};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use tracing_subscriber::EnvFilter;

record! {
    struct Hits {
        count: u64,
    }
}

record! {
    enum HitAction {
        Hit,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .init();

    println!("=== Threaded Counter Example ===\n");

    let store = create_store(
        |state: &Hits, _action: &HitAction| Hits {
            count: state.count + 1,
        },
        Hits { count: 0 },
    )
    .unwrap();

    let notifications = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&notifications);
    store
        .subscribe(move || {
            counter.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();

    let workers: Vec<_> = (0..4)
        .map(|worker| {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..250 {
                    store.dispatch(HitAction::Hit).unwrap();
                }
                println!("worker {worker} done");
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }

    println!("\nHits: {}", store.get_state().count);
    println!("Notifications: {}", notifications.load(Ordering::Relaxed));

    println!("\n=== Example Complete ===");
}
