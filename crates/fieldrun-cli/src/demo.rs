//! Built-in resolvers served by `fieldrun serve`.
//!
//! A small schema useful for wiring checks:
//!
//! ```graphql
//! type Query {
//!   hello(name: String!): String!
//!   add(a: Int!, b: Int!): Int!
//!   isEven(number: Int!): Boolean!
//! }
//! type Math { add(a: Int!, b: Int!): AddResult! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use fieldrun_runtime::{typed, RegistryError, ResolverError, ResolverRegistry};

#[derive(Debug, Deserialize)]
struct HelloArgs {
    name: String,
}

#[derive(Debug, Deserialize)]
struct AddArgs {
    a: i64,
    b: i64,
}

#[derive(Debug, Deserialize)]
struct IsEvenArgs {
    number: i64,
}

#[derive(Debug, Serialize)]
struct AddResult {
    result: i64,
}

fn checked_add(args: &AddArgs) -> Result<i64, ResolverError> {
    args.a
        .checked_add(args.b)
        .ok_or_else(|| format!("{} + {} overflows", args.a, args.b).into())
}

/// Builds the registry of built-in resolvers.
pub fn registry() -> Result<ResolverRegistry, RegistryError> {
    let registry = ResolverRegistry::builder()
        .register(
            "Query",
            "hello",
            typed(|args: HelloArgs, _parent: Option<Value>| async move {
                Ok::<_, ResolverError>(format!("Hello, {}!", args.name))
            }),
        )?
        .register(
            "Query",
            "add",
            typed(|args: AddArgs, _parent: Option<Value>| async move { checked_add(&args) }),
        )?
        .register(
            "Query",
            "isEven",
            typed(|args: IsEvenArgs, _parent: Option<Value>| async move {
                Ok::<_, ResolverError>(args.number % 2 == 0)
            }),
        )?
        .register(
            "Math",
            "add",
            typed(|args: AddArgs, _parent: Option<Value>| async move {
                checked_add(&args).map(|result| AddResult { result })
            }),
        )?
        .build();
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldrun_protocol::InvocationRequest;
    use fieldrun_runtime::Dispatcher;
    use serde_json::json;

    async fn call(document: Value) -> Value {
        let dispatcher = Dispatcher::new(registry().expect("registry"));
        let request = InvocationRequest::from_value(document).expect("request");
        dispatcher
            .dispatch(&request)
            .await
            .expect("dispatch")
            .into_value()
    }

    #[test]
    fn registers_four_resolvers() {
        let keys: Vec<String> = registry()
            .expect("registry")
            .keys()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(keys, vec!["Math.add", "Query.add", "Query.hello", "Query.isEven"]);
    }

    #[tokio::test]
    async fn hello_greets() {
        let out = call(json!({"resolver": "Query.hello", "args": {"name": "Tsiry"}})).await;
        assert_eq!(out, json!("Hello, Tsiry!"));
    }

    #[tokio::test]
    async fn math_add_returns_result_object() {
        let out = call(json!({"resolver": "Math.add", "args": {"a": 1, "b": 2}})).await;
        assert_eq!(out, json!({"result": 3}));
    }

    #[tokio::test]
    async fn query_add_returns_scalar() {
        let out = call(json!({"resolver": "Query.add", "args": {"a": 1, "b": 2}, "parent": null}))
            .await;
        assert_eq!(out, json!(3));
    }

    #[tokio::test]
    async fn is_even() {
        let out = call(json!({"resolver": "Query.isEven", "args": {"number": 4}})).await;
        assert_eq!(out, json!(true));
    }

    #[tokio::test]
    async fn add_overflow_is_an_error() {
        let dispatcher = Dispatcher::new(registry().expect("registry"));
        let request = InvocationRequest::from_value(
            json!({"resolver": "Query.add", "args": {"a": i64::MAX, "b": 1}}),
        )
        .expect("request");
        let err = dispatcher.dispatch(&request).await.unwrap_err();
        assert!(err.to_string().contains("overflows"));
    }
}
