//! JSON Todos
//!
//! This example demonstrates a store over dynamic JSON records.
//!
//! Key concepts:
//! - `serde_json::Value` objects as state and actions
//! - Shape validation rejecting non-record actions
//! - Decoding the state into a typed view with `state_as`
//!
//! Run with: cargo run --example json_todos

use reduxo::json::merge;
use reduxo::{create_store, JsonStore};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
struct TodoList {
    owner: String,
    todos: Vec<Todo>,
}

#[derive(Debug, Deserialize)]
struct Todo {
    text: String,
    done: bool,
}

fn reducer(state: &Value, action: &Value) -> Value {
    match action["type"].as_str() {
        Some("add") => {
            let mut todos = state["todos"].as_array().cloned().unwrap_or_default();
            todos.push(json!({"text": action["text"], "done": false}));
            merge(state, &json!({ "todos": todos }))
        }
        Some("toggle") => {
            let index = action["index"].as_u64().unwrap_or(u64::MAX) as usize;
            let mut todos = state["todos"].as_array().cloned().unwrap_or_default();
            if let Some(todo) = todos.get_mut(index) {
                let done = todo["done"].as_bool().unwrap_or(false);
                todo["done"] = json!(!done);
            }
            merge(state, &json!({ "todos": todos }))
        }
        Some("rename") => merge(state, &json!({ "owner": action["owner"] })),
        _ => state.clone(),
    }
}

fn main() {
    println!("=== JSON Todos Example ===\n");

    let store: JsonStore = create_store(reducer, json!({"owner": "nobody", "todos": []})).unwrap();

    store.dispatch(json!({"type": "rename", "owner": "ada"})).unwrap();
    store.dispatch(json!({"type": "add", "text": "write reducer"})).unwrap();
    store.dispatch(json!({"type": "add", "text": "write tests"})).unwrap();
    store.dispatch(json!({"type": "toggle", "index": 0})).unwrap();

    match store.dispatch(Value::Null) {
        Ok(_) => println!("unexpected: null action accepted"),
        Err(err) => println!("Rejected null action: {err}"),
    }

    let list: TodoList = store.state_as().unwrap();
    println!("\nTodos for {}:", list.owner);
    for todo in &list.todos {
        let mark = if todo.done { "x" } else { " " };
        println!("  [{mark}] {}", todo.text);
    }

    println!("\n=== Example Complete ===");
}
