//! Resolver identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FieldrunError;

/// Identifies one resolver by object type and field name.
///
/// The wire form is a dotted string such as `Query.hello`. Parsing splits
/// on the first `.` only, so `Repo.files.tree` names field `files.tree`
/// of type `Repo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResolverKey {
    type_name: String,
    field_name: String,
}

impl ResolverKey {
    /// Creates a key from its two components.
    ///
    /// The type name may not contain `.`, since the wire form splits on
    /// the first dot and such a key could never be addressed.
    pub fn new(
        type_name: impl Into<String>,
        field_name: impl Into<String>,
    ) -> Result<Self, FieldrunError> {
        let type_name = type_name.into();
        let field_name = field_name.into();
        if type_name.is_empty() {
            return Err(FieldrunError::invalid_input("resolver type name cannot be empty"));
        }
        if type_name.contains('.') {
            return Err(FieldrunError::invalid_input(format!(
                "resolver type name '{type_name}' cannot contain '.'"
            )));
        }
        if field_name.is_empty() {
            return Err(FieldrunError::invalid_input("resolver field name cannot be empty"));
        }
        Ok(Self {
            type_name,
            field_name,
        })
    }

    /// Parses a dotted `Type.field` identifier.
    pub fn parse(dotted: &str) -> Result<Self, FieldrunError> {
        let (type_name, field_name) = dotted.split_once('.').ok_or_else(|| {
            FieldrunError::invalid_input(format!(
                "resolver '{dotted}' must use Type.field notation"
            ))
        })?;
        Self::new(type_name, field_name)
            .map_err(|e| e.with_context(format!("resolver: {dotted}")))
    }

    /// Object type name (left of the first dot).
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Field name (everything right of the first dot).
    pub fn field_name(&self) -> &str {
        &self.field_name
    }
}

impl fmt::Display for ResolverKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.type_name, self.field_name)
    }
}

impl FromStr for ResolverKey {
    type Err = FieldrunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ResolverKey {
    type Error = FieldrunError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ResolverKey> for String {
    fn from(key: ResolverKey) -> Self {
        key.to_string()
    }
}
