//! Full invocations over the mounted-file boundary.

use std::path::Path;

use serde_json::{json, Map, Value};

use fieldrun_runtime::{
    resolver_fn, sync_fn, DispatchError, Dispatcher, ResolverError, ResolverRegistry,
    ResolverServer,
};
use fieldrun_transport_file::{FileSink, FileSource, StreamSink, StreamSource};

fn dispatcher() -> Dispatcher {
    let registry = ResolverRegistry::builder()
        .register(
            "Math",
            "add",
            resolver_fn(|args: Map<String, Value>, _parent| async move {
                let a = args["a"].as_i64().unwrap_or_default();
                let b = args["b"].as_i64().unwrap_or_default();
                Ok::<_, ResolverError>(Some(json!({ "result": a + b })))
            }),
        )
        .and_then(|b| {
            b.register(
                "Query",
                "boom",
                sync_fn(|_, _| Err::<Option<Value>, _>("boom")),
            )
        })
        .and_then(|b| {
            b.register(
                "Query",
                "nothing",
                sync_fn(|_, _| Ok::<Option<Value>, ResolverError>(None)),
            )
        })
        .expect("test: register")
        .build();
    Dispatcher::new(registry)
}

fn write_request(path: &Path, document: Value) {
    std::fs::write(path, serde_json::to_vec(&document).expect("encode")).expect("write input");
}

#[tokio::test]
async fn file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.json");
    write_request(&input, json!({"resolver": "Math.add", "args": {"a": 1, "b": 2}}));

    let mut server = ResolverServer::new(
        FileSource::new(&input),
        FileSink::new(&output),
        dispatcher(),
    );
    server.run().await.expect("run");

    let written: Value =
        serde_json::from_slice(&std::fs::read(&output).expect("read output")).expect("json");
    assert_eq!(written, json!({"result": 3}));
}

#[tokio::test]
async fn empty_result_file_is_exactly_braces() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.json");
    write_request(&input, json!({"resolver": "Query.nothing", "args": {}, "parent": null}));

    let mut server = ResolverServer::new(
        FileSource::new(&input),
        FileSink::new(&output),
        dispatcher(),
    );
    server.run().await.expect("run");

    assert_eq!(std::fs::read(&output).expect("read output"), b"{}");
}

#[tokio::test]
async fn failing_resolver_creates_no_output_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.json");
    write_request(&input, json!({"resolver": "Query.boom", "args": {}}));

    let mut server = ResolverServer::new(
        FileSource::new(&input),
        FileSink::new(&output),
        dispatcher(),
    );
    let err = server.run().await.unwrap_err();

    assert!(matches!(err, DispatchError::ResolverExecution { .. }));
    assert!(!output.exists());
}

#[tokio::test]
async fn missing_input_file_is_malformed_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("out.json");

    let mut server = ResolverServer::new(
        FileSource::new(dir.path().join("nope.json")),
        FileSink::new(&output),
        dispatcher(),
    );
    let err = server.run().await.unwrap_err();

    assert!(matches!(err, DispatchError::MalformedInput { .. }));
    assert!(!output.exists());
}

#[tokio::test]
async fn stream_round_trip() {
    let input = br#"{"resolver":"Math.add","args":{"a":40,"b":2}}"#.to_vec();
    let mut server = ResolverServer::new(
        StreamSource::new(std::io::Cursor::new(input)),
        StreamSink::new(Vec::new()),
        dispatcher(),
    );
    server.run().await.expect("run");

    let (_, sink) = server.into_parts();
    assert_eq!(sink.into_inner(), b"{\"result\":42}\n");
}
