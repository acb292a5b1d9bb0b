//! Invocation request document.
//!
//! ```json
//! { "resolver": "Type.field", "args": { ... }, "parent": { ... } }
//! ```
//!
//! `parent` is optional. When present (even as `null`) it is also embedded
//! into the arguments under the `parent` key, see [`InvocationRequest::merged_args`].

use serde_json::{Map, Value};

use fieldrun_types::ResolverKey;

use crate::error::ProtocolError;
use crate::fields;

/// A decoded request to resolve one field.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationRequest {
    key: ResolverKey,
    args: Map<String, Value>,
    parent: Option<Value>,
}

impl InvocationRequest {
    /// Builds a request on the host side.
    pub fn new(key: ResolverKey, args: Map<String, Value>, parent: Option<Value>) -> Self {
        Self { key, args, parent }
    }

    /// Decodes a request from raw document bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ProtocolError> {
        let document: Value = serde_json::from_slice(bytes)
            .map_err(|e| ProtocolError::malformed(format!("invalid JSON: {e}")))?;
        Self::from_value(document)
    }

    /// Decodes a request from an already parsed JSON document.
    ///
    /// Validation order: document shape, `resolver`, `args`.
    pub fn from_value(document: Value) -> Result<Self, ProtocolError> {
        let mut document = match document {
            Value::Object(map) => map,
            other => {
                return Err(ProtocolError::malformed(format!(
                    "expected a JSON object, got {}",
                    json_type_name(&other)
                )))
            }
        };

        let resolver = match document.get(fields::RESOLVER) {
            Some(Value::String(name)) => name.as_str(),
            _ => {
                return Err(ProtocolError::MissingField {
                    field: fields::RESOLVER,
                })
            }
        };
        let key = ResolverKey::parse(resolver)
            .map_err(|e| ProtocolError::malformed(e.to_string()))?;

        let args = match document.remove(fields::ARGS) {
            Some(Value::Object(args)) => args,
            Some(other) => {
                return Err(ProtocolError::malformed(format!(
                    "'args' must be a JSON object, got {}",
                    json_type_name(&other)
                )))
            }
            None => {
                return Err(ProtocolError::MissingField {
                    field: fields::ARGS,
                })
            }
        };

        let parent = document.remove(fields::PARENT);

        Ok(Self { key, args, parent })
    }

    /// The resolver this request targets.
    pub fn key(&self) -> &ResolverKey {
        &self.key
    }

    /// Arguments exactly as received.
    pub fn args(&self) -> &Map<String, Value> {
        &self.args
    }

    /// The parent value, if the document carried one.
    pub fn parent(&self) -> Option<&Value> {
        self.parent.as_ref()
    }

    /// Arguments with the parent embedded under the `parent` key.
    ///
    /// An existing `parent` argument is overwritten. Without a parent the
    /// arguments are returned unchanged.
    pub fn merged_args(&self) -> Map<String, Value> {
        let mut args = self.args.clone();
        if let Some(parent) = &self.parent {
            args.insert(fields::PARENT.to_string(), parent.clone());
        }
        args
    }

    /// Encodes the request as a JSON document.
    pub fn to_document(&self) -> Value {
        let mut document = Map::new();
        document.insert(fields::RESOLVER.to_string(), Value::String(self.key.to_string()));
        document.insert(fields::ARGS.to_string(), Value::Object(self.args.clone()));
        if let Some(parent) = &self.parent {
            document.insert(fields::PARENT.to_string(), parent.clone());
        }
        Value::Object(document)
    }

    /// Encodes the request as document bytes.
    pub fn to_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_document())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(v: Value) -> Result<InvocationRequest, ProtocolError> {
        InvocationRequest::from_value(v)
    }

    #[test]
    fn parses_full_request() {
        let req = parse(json!({
            "resolver": "Math.add",
            "args": {"a": 1, "b": 2},
            "parent": {"id": "p1"}
        }))
        .expect("valid");
        assert_eq!(req.key().to_string(), "Math.add");
        assert_eq!(req.args()["a"], 1);
        assert_eq!(req.parent(), Some(&json!({"id": "p1"})));
    }

    #[test]
    fn missing_resolver_is_reported_before_args() {
        let err = parse(json!({})).unwrap_err();
        assert!(matches!(err, ProtocolError::MissingField { field: "resolver" }));
    }

    #[test]
    fn non_string_resolver_counts_as_missing() {
        let err = parse(json!({"resolver": 42, "args": {}})).unwrap_err();
        assert!(matches!(err, ProtocolError::MissingField { field: "resolver" }));
    }

    #[test]
    fn missing_args_is_reported() {
        let err = parse(json!({"resolver": "Query.hello"})).unwrap_err();
        assert!(matches!(err, ProtocolError::MissingField { field: "args" }));
    }

    #[test]
    fn non_object_args_is_malformed() {
        let err = parse(json!({"resolver": "Query.hello", "args": [1, 2]})).unwrap_err();
        assert!(matches!(err, ProtocolError::Malformed { .. }));
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn resolver_without_dot_is_malformed() {
        let err = parse(json!({"resolver": "hello", "args": {}})).unwrap_err();
        assert!(matches!(err, ProtocolError::Malformed { .. }));
    }

    #[test]
    fn non_object_document_is_malformed() {
        let err = InvocationRequest::from_slice(b"[1,2,3]").unwrap_err();
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = InvocationRequest::from_slice(b"{not json").unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn merged_args_embed_parent_and_overwrite() {
        let req = parse(json!({
            "resolver": "User.name",
            "args": {"parent": "stale", "upper": true},
            "parent": {"first": "Ada"}
        }))
        .expect("valid");
        let merged = req.merged_args();
        assert_eq!(merged["parent"], json!({"first": "Ada"}));
        assert_eq!(merged["upper"], true);
        assert_eq!(req.args()["parent"], "stale");
    }

    #[test]
    fn null_parent_is_still_embedded() {
        let req = parse(json!({"resolver": "Query.hello", "args": {}, "parent": null}))
            .expect("valid");
        assert_eq!(req.parent(), Some(&Value::Null));
        assert_eq!(req.merged_args().get("parent"), Some(&Value::Null));
    }

    #[test]
    fn absent_parent_leaves_args_untouched() {
        let req = parse(json!({"resolver": "Query.hello", "args": {"name": "x"}}))
            .expect("valid");
        assert!(req.parent().is_none());
        assert!(!req.merged_args().contains_key("parent"));
    }

    #[test]
    fn host_document_matches_wire_shape() {
        let key = ResolverKey::parse("Query.add").expect("key");
        let mut args = Map::new();
        args.insert("a".into(), json!(1));
        let req = InvocationRequest::new(key, args, Some(Value::Null));
        assert_eq!(
            req.to_document(),
            json!({"resolver": "Query.add", "args": {"a": 1}, "parent": null})
        );
        let back = InvocationRequest::from_slice(&req.to_vec().expect("encode")).expect("decode");
        assert_eq!(back, req);
    }
}
