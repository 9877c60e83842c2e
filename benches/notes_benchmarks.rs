//! Notes MCP Server Benchmarks
//!
//! Benchmarks for the store, the dispatcher and the request loop, using the
//! Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use notes_mcp_lib::protocol::jsonrpc::{JsonRpcHandler, Request};
use notes_mcp_lib::store::NoteStore;
use notes_mcp_lib::transport::StdioTransport;
use serde_json::json;
use tokio_util::sync::CancellationToken;

fn add_note_line(i: usize) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": i,
        "method": "call_tool",
        "params": {"name": "add-note", "arguments": {"name": format!("note-{i}"), "content": "benchmark body"}}
    })
    .to_string()
}

/// Benchmark store writes and listings
fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("note_store");
    group.measurement_time(Duration::from_secs(2));

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("set", size), size, |b, &size| {
            b.iter(|| {
                let store = NoteStore::new();
                for i in 0..size {
                    store.set(format!("note-{i}"), black_box("content"));
                }
            });
        });

        let store = NoteStore::new();
        for i in 0..*size {
            store.set(format!("note-{i}"), "content");
        }
        group.bench_with_input(BenchmarkId::new("list", size), &store, |b, store| {
            b.iter(|| black_box(store.list()));
        });
    }

    group.finish();
}

/// Benchmark dispatching decoded requests
fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    let handler = JsonRpcHandler::new();
    for i in 0..100 {
        let request: Request = serde_json::from_str(&add_note_line(i)).unwrap();
        handler.dispatch(request);
    }

    let list: Request =
        serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"method":"list_resources"}"#).unwrap();
    group.bench_function("list_resources_100", |b| {
        b.iter(|| black_box(handler.dispatch(list.clone())));
    });

    let summarize: Request = serde_json::from_str(
        r#"{"jsonrpc":"2.0","id":1,"method":"get_prompt","params":{"name":"summarize-notes"}}"#,
    )
    .unwrap();
    group.bench_function("summarize_notes_100", |b| {
        b.iter(|| black_box(handler.dispatch(summarize.clone())));
    });

    group.finish();
}

/// Benchmark the full decode, dispatch and encode loop
fn bench_transport(c: &mut Criterion) {
    let mut group = c.benchmark_group("transport");
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    for size in [10, 100].iter() {
        let input: String = (0..*size).map(|i| add_note_line(i) + "\n").collect();
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("add_note_session", size), &input, |b, input| {
            b.iter(|| {
                runtime.block_on(async {
                    let mut transport = StdioTransport::new(JsonRpcHandler::new());
                    let mut output = Vec::new();
                    transport
                        .serve(input.as_bytes(), &mut output, &CancellationToken::new())
                        .await
                        .unwrap();
                    black_box(output)
                })
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_store, bench_dispatch, bench_transport);
criterion_main!(benches);
