//! Resolver functions and the adapters that turn closures into them.

use std::future::Future;
use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Error type every resolver failure is boxed into.
pub type ResolverError = Box<dyn std::error::Error + Send + Sync>;

/// What a resolver produces. `Ok(None)` means "nothing to return".
pub type ResolverOutput = Result<Option<Value>, ResolverError>;

/// Computes the value of one field on one type.
///
/// `args` already contains the parent under the `parent` key when the
/// request carried one; `parent` is that same raw value passed again.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Resolves the field.
    async fn resolve(&self, args: Map<String, Value>, parent: Option<Value>) -> ResolverOutput;
}

/// Resolver backed by an async closure over raw JSON.
pub struct FnResolver<F> {
    f: F,
}

/// Wraps an async closure `(args, parent) -> Result<Option<Value>, E>`.
pub fn resolver_fn<F, Fut, E>(f: F) -> FnResolver<F>
where
    F: Fn(Map<String, Value>, Option<Value>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Option<Value>, E>> + Send + 'static,
    E: Into<ResolverError> + 'static,
{
    FnResolver { f }
}

#[async_trait]
impl<F, Fut, E> Resolver for FnResolver<F>
where
    F: Fn(Map<String, Value>, Option<Value>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Option<Value>, E>> + Send + 'static,
    E: Into<ResolverError> + 'static,
{
    async fn resolve(&self, args: Map<String, Value>, parent: Option<Value>) -> ResolverOutput {
        (self.f)(args, parent).await.map_err(Into::into)
    }
}

/// Resolver backed by a synchronous closure over raw JSON.
pub struct SyncFnResolver<F> {
    f: F,
}

/// Wraps a blocking-free synchronous closure.
pub fn sync_fn<F, E>(f: F) -> SyncFnResolver<F>
where
    F: Fn(Map<String, Value>, Option<Value>) -> Result<Option<Value>, E> + Send + Sync + 'static,
    E: Into<ResolverError> + 'static,
{
    SyncFnResolver { f }
}

#[async_trait]
impl<F, E> Resolver for SyncFnResolver<F>
where
    F: Fn(Map<String, Value>, Option<Value>) -> Result<Option<Value>, E> + Send + Sync + 'static,
    E: Into<ResolverError> + 'static,
{
    async fn resolve(&self, args: Map<String, Value>, parent: Option<Value>) -> ResolverOutput {
        (self.f)(args, parent).map_err(Into::into)
    }
}

/// Failures of the typed adapter itself, as opposed to the wrapped function.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Arguments did not match the declared argument type.
    #[error("invalid arguments: {0}")]
    Decode(#[source] serde_json::Error),
    /// The returned value could not be encoded as JSON.
    #[error("unserializable result: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Resolver with declared argument and result types.
pub struct TypedResolver<F, A, R> {
    f: F,
    _types: PhantomData<fn(A) -> R>,
}

/// Wraps an async closure taking a deserializable argument struct and
/// returning a serializable value.
///
/// The argument struct is decoded from the merged arguments, so it may
/// declare a `parent` field to receive the embedded parent.
pub fn typed<F, Fut, A, R, E>(f: F) -> TypedResolver<F, A, R>
where
    F: Fn(A, Option<Value>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
    A: DeserializeOwned + Send + 'static,
    R: Serialize + Send + 'static,
    E: Into<ResolverError> + 'static,
{
    TypedResolver {
        f,
        _types: PhantomData,
    }
}

#[async_trait]
impl<F, Fut, A, R, E> Resolver for TypedResolver<F, A, R>
where
    F: Fn(A, Option<Value>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
    A: DeserializeOwned + Send + 'static,
    R: Serialize + Send + 'static,
    E: Into<ResolverError> + 'static,
{
    async fn resolve(&self, args: Map<String, Value>, parent: Option<Value>) -> ResolverOutput {
        let args: A = serde_json::from_value(Value::Object(args)).map_err(AdapterError::Decode)?;
        let output = (self.f)(args, parent)
            .await
            .map_err(Into::<ResolverError>::into)?;
        let value = serde_json::to_value(output).map_err(AdapterError::Encode)?;
        Ok(Some(value))
    }
}
