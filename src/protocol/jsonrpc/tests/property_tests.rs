// Copyright (c) 2025 Notes MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the JSON-RPC 2.0 dispatcher.
//! These tests drive the dispatcher with generated note sets, identifiers and
//! method names and check the behaviour that must hold for all of them.

use std::collections::BTreeMap;

use proptest::prelude::*;
use serde_json::{json, Value};

use super::dispatch;
use crate::protocol::jsonrpc::{JsonRpcHandler, Method};

// Note names that survive a round trip through a `note://internal/` URI.
fn note_name_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9_-]{0,11}".prop_map(String::from)
}

fn note_content_strategy() -> impl Strategy<Value = String> {
    "[ -~]{1,40}".prop_map(String::from)
}

// Request identifiers of every allowed shape.
fn id_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9_-]{0,10}".prop_map(|s| json!(s)),
    ]
}

fn add_note_request(name: &str, content: &str) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "call_tool",
        "params": {"name": "add-note", "arguments": {"name": name, "content": content}}
    })
    .to_string()
}

fn read_request(name: &str) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "read_resource",
        "params": {"uri": format!("note://internal/{name}")}
    })
    .to_string()
}

proptest! {
    #[test]
    fn prop_every_added_note_is_listed_and_readable(
        notes in prop::collection::btree_map(note_name_strategy(), note_content_strategy(), 0..12)
    ) {
        let handler = JsonRpcHandler::new();
        for (name, content) in &notes {
            let response = dispatch(&handler, &add_note_request(name, content));
            prop_assert!(response.get("error").is_none());
        }

        let listed = dispatch(&handler, r#"{"jsonrpc":"2.0","id":1,"method":"list_resources"}"#);
        let uris: Vec<String> = listed["result"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["uri"].as_str().unwrap().to_string())
            .collect();
        let expected: Vec<String> = notes.keys().map(|name| format!("note://internal/{name}")).collect();
        prop_assert_eq!(uris, expected);

        for (name, content) in &notes {
            let read = dispatch(&handler, &read_request(name));
            prop_assert_eq!(&read["result"], &json!(content));
        }
    }

    #[test]
    fn prop_last_write_wins(
        writes in prop::collection::vec((note_name_strategy(), note_content_strategy()), 1..20)
    ) {
        let handler = JsonRpcHandler::new();
        let mut expected = BTreeMap::new();
        for (name, content) in &writes {
            dispatch(&handler, &add_note_request(name, content));
            expected.insert(name.clone(), content.clone());
        }

        prop_assert_eq!(handler.registry().store().len(), expected.len());
        for (name, content) in &expected {
            let read = dispatch(&handler, &read_request(name));
            prop_assert_eq!(&read["result"], &json!(content));
        }
    }

    #[test]
    fn prop_response_id_matches_request_id(id in id_strategy(), method_index in 0usize..6) {
        let handler = JsonRpcHandler::new();
        let method = Method::ALL[method_index].as_str();
        let raw = json!({"jsonrpc": "2.0", "id": id.clone(), "method": method, "params": {}}).to_string();

        let response = dispatch(&handler, &raw);
        prop_assert_eq!(&response["id"], &id);
        prop_assert_eq!(&response["jsonrpc"], &json!("2.0"));
        prop_assert!(response.get("result").is_some() != response.get("error").is_some());
    }

    #[test]
    fn prop_unknown_method_leaves_store_unchanged(method in "[a-z_/]{1,16}") {
        prop_assume!(Method::from_name(&method).is_none());

        let handler = JsonRpcHandler::new();
        dispatch(&handler, &add_note_request("kept", "value"));

        let raw = json!({"jsonrpc": "2.0", "id": 1, "method": method, "params": {"name": "add-note"}}).to_string();
        let response = dispatch(&handler, &raw);

        prop_assert_eq!(&response["error"]["code"], &json!(-32601));
        prop_assert_eq!(handler.registry().store().len(), 1);
    }

    #[test]
    fn prop_foreign_schemes_are_unsupported(scheme in "[a-z]{2,8}", name in note_name_strategy()) {
        prop_assume!(scheme != "note");

        let handler = JsonRpcHandler::new();
        dispatch(&handler, &add_note_request(&name, "content"));

        let raw = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "read_resource",
            "params": {"uri": format!("{scheme}://internal/{name}")}
        })
        .to_string();
        let response = dispatch(&handler, &raw);
        prop_assert_eq!(&response["error"]["code"], &json!(-32002));
    }
}
