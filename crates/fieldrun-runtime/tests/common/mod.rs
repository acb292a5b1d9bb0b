//! Shared fixtures for fieldrun-runtime integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use fieldrun_runtime::{
    resolver_fn, sync_fn, Dispatcher, RequestSource, Resolver, ResolverError, ResolverOutput,
    ResolverRegistry, ResolverServer, ResultSink, TransportError,
};

/// Request source backed by a byte buffer. Each read returns the buffer.
pub struct MemorySource {
    document: Vec<u8>,
}

impl MemorySource {
    pub fn json(document: Value) -> Self {
        Self {
            document: serde_json::to_vec(&document).expect("test: encode"),
        }
    }

    pub fn raw(document: &[u8]) -> Self {
        Self {
            document: document.to_vec(),
        }
    }
}

#[async_trait]
impl RequestSource for MemorySource {
    async fn read_request(&mut self) -> Result<Vec<u8>, TransportError> {
        Ok(self.document.clone())
    }
}

/// Source that always fails to read.
pub struct UnreadableSource;

#[async_trait]
impl RequestSource for UnreadableSource {
    async fn read_request(&mut self) -> Result<Vec<u8>, TransportError> {
        Err(TransportError::Read {
            target: "memory".into(),
            reason: "no such file".into(),
        })
    }
}

/// Sink that records every write.
#[derive(Default)]
pub struct MemorySink {
    pub writes: Vec<Vec<u8>>,
}

impl MemorySink {
    pub fn last_json(&self) -> Value {
        let bytes = self.writes.last().expect("test: something written");
        serde_json::from_slice(bytes).expect("test: valid JSON output")
    }
}

#[async_trait]
impl ResultSink for MemorySink {
    async fn write_result(&mut self, document: &[u8]) -> Result<(), TransportError> {
        self.writes.push(document.to_vec());
        Ok(())
    }
}

/// Sink that always fails to write.
pub struct ReadOnlySink;

#[async_trait]
impl ResultSink for ReadOnlySink {
    async fn write_result(&mut self, _document: &[u8]) -> Result<(), TransportError> {
        Err(TransportError::Write {
            target: "memory".into(),
            reason: "read-only".into(),
        })
    }
}

/// One recorded resolver call.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub args: Map<String, Value>,
    pub parent: Option<Value>,
}

/// Resolver that records its inputs and returns a fixed output.
#[derive(Clone, Default)]
pub struct Recorder {
    pub calls: Arc<Mutex<Vec<Call>>>,
    pub output: Option<Value>,
}

impl Recorder {
    pub fn returning(output: Option<Value>) -> Self {
        Self {
            calls: Arc::default(),
            output,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("test: lock").clone()
    }
}

#[async_trait]
impl Resolver for Recorder {
    async fn resolve(&self, args: Map<String, Value>, parent: Option<Value>) -> ResolverOutput {
        self.calls
            .lock()
            .expect("test: lock")
            .push(Call { args, parent });
        Ok(self.output.clone())
    }
}

/// `Math.add` returning `{"result": a + b}`.
pub fn math_add() -> impl Resolver {
    resolver_fn(|args: Map<String, Value>, _parent| async move {
        let a = args.get("a").and_then(Value::as_i64).ok_or("a must be an integer")?;
        let b = args.get("b").and_then(Value::as_i64).ok_or("b must be an integer")?;
        Ok::<_, ResolverError>(Some(json!({ "result": a + b })))
    })
}

/// Resolver that always fails.
pub fn failing() -> impl Resolver {
    sync_fn(|_, _| Err::<Option<Value>, _>("resolver exploded"))
}

/// Dispatcher with `Math.add`, `Query.boom`, and `recorder` under `Query.echo`.
pub fn dispatcher_with(recorder: Recorder) -> Dispatcher {
    let registry = ResolverRegistry::builder()
        .register("Math", "add", math_add())
        .and_then(|b| b.register("Query", "boom", failing()))
        .and_then(|b| b.register("Query", "echo", recorder))
        .expect("test: register")
        .build();
    Dispatcher::new(registry)
}

/// Server over an in-memory source and sink.
pub fn server_for(
    source: MemorySource,
    recorder: Recorder,
) -> ResolverServer<MemorySource, MemorySink> {
    ResolverServer::new(source, MemorySink::default(), dispatcher_with(recorder))
}
